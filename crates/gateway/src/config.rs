//! # Gateway Configuration Module
//!
//! Loads the web gateway settings from environment variables, with defaults
//! for a single-host development setup.
//!
//! ## Environment Variables
//!
//! - `GATEWAY_HOST`: host address to bind to (default: "0.0.0.0")
//! - `PORT`: port to listen on (default: 3000)
//! - `AUTH_SERVICE_URL`: authentication service base URL (default: "http://localhost:8000")
//! - `RESERVATION_SERVICE_URL`: reservation service base URL (default: "http://localhost:8080")
//! - `FACILITY_GRPC_URL`: facility gRPC endpoint (default: "http://localhost:50051")
//! - `LOG_LEVEL`: logging level (default: "info")
//! - `GATEWAY_CORS_ORIGINS`: comma-separated list of allowed CORS origins
//! - `GATEWAY_REQUEST_TIMEOUT_SECONDS`: per-request timeout (default: 30)

use eyre::{Result, WrapErr};
use spacebook_facility::config::parse_log_level;
use std::{env, time::Duration};
use tracing::Level;

/// Configuration for the web gateway
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Host address for the gateway (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the gateway to listen on
    pub port: u16,

    /// Base URL of the authentication service
    pub auth_service_url: String,

    /// Base URL of the reservation service
    pub reservation_service_url: String,

    /// URI of the facility gRPC service
    pub facility_grpc_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Overall request timeout in seconds
    pub request_timeout: u64,
}

impl GatewayConfig {
    /// Creates a new GatewayConfig from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("GATEWAY_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .wrap_err("Invalid PORT value")?;

        // Downstream services
        let auth_service_url = env::var("AUTH_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:8000".to_string());
        let reservation_service_url = env::var("RESERVATION_SERVICE_URL")
            .unwrap_or_else(|_| "http://localhost:8080".to_string());
        let facility_grpc_url = env::var("FACILITY_GRPC_URL")
            .unwrap_or_else(|_| "http://localhost:50051".to_string());

        // Logging settings
        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        // CORS settings
        let cors_origins = env::var("GATEWAY_CORS_ORIGINS")
            .ok()
            .map(|origins| split_origins(&origins));

        // Performance settings
        let request_timeout = env::var("GATEWAY_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30)
            .max(1);

        Ok(Self {
            host,
            port,
            auth_service_url,
            reservation_service_url,
            facility_grpc_url,
            log_level,
            cors_origins,
            request_timeout,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Deadline for the whole inbound request.
    pub fn request_deadline(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }

    /// Deadline for each downstream call, nine tenths of the request deadline.
    ///
    /// It must expire first so a slow backend is reported as unavailable
    /// rather than cut off by the request timeout.
    pub fn upstream_deadline(&self) -> Duration {
        upstream_deadline(self.request_deadline())
    }
}

pub fn upstream_deadline(request_deadline: Duration) -> Duration {
    request_deadline * 9 / 10
}

fn split_origins(origins: &str) -> Vec<String> {
    origins
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
