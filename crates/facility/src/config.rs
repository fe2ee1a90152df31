//! # Facility Service Configuration
//!
//! Environment variables:
//!
//! - `FACILITY_GRPC_HOST`: address to bind the gRPC server to (default: "0.0.0.0")
//! - `FACILITY_GRPC_PORT`: port to listen on (default: 50051)
//! - `DATABASE_URL`: PostgreSQL connection string; without it facilities are kept in memory
//! - `LOG_LEVEL`: logging level (default: "info")

use eyre::{Result, WrapErr};
use std::env;
use tracing::Level;

#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Host address for the gRPC server
    pub host: String,

    /// Port for the gRPC server to listen on
    pub port: u16,

    /// PostgreSQL connection string, `None` selects the in-memory store
    pub database_url: Option<String>,

    /// Log level for the service
    pub log_level: Level,
}

impl ServiceConfig {
    pub fn from_env() -> Result<Self> {
        let host = env::var("FACILITY_GRPC_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("FACILITY_GRPC_PORT")
            .unwrap_or_else(|_| "50051".to_string())
            .parse()
            .wrap_err("Invalid FACILITY_GRPC_PORT value")?;

        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());

        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Unknown names fall back to `INFO`.
pub fn parse_log_level(value: &str) -> Level {
    match value {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
