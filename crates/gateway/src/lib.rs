//! # Spacebook Web Gateway
//!
//! One HTTP surface in front of three backends:
//!
//! - **Facilities** are served by calling the facility service over gRPC and
//!   rendering its replies as JSON.
//! - **Users** (register/login) are proxied to the authentication service.
//! - **Reservations** are proxied to the reservation service.
//!
//! ## Architecture
//!
//! - **Routes**: API endpoints and URL structure
//! - **Handlers**: downstream calls and response translation
//! - **Middleware**: error mapping and request logging
//! - **Config**: environment-driven settings

/// Configuration module for gateway settings
pub mod config;
/// Request body extractors
pub mod extract;
/// Request handlers that call the downstream services
pub mod handlers;
/// Error translation and request logging
pub mod middleware;
/// Route definitions and API endpoint structure
pub mod routes;

use std::{sync::Arc, time::Duration};

use axum::{error_handling::HandleErrorLayer, http::HeaderValue, Router};
use eyre::{Result, WrapErr};
use spacebook_facility::client::{connect_lazy_with_timeout, FacilityClient};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

/// Shared state handed to every handler
///
/// The gRPC client and the HTTP client are both cheap to clone and multiplex
/// concurrent requests over their own connection pools.
pub struct GatewayState {
    /// Client of the facility gRPC service
    pub facility_client: FacilityClient,

    /// HTTP client used for the proxied backends
    pub http_client: reqwest::Client,

    /// Base URL of the authentication service
    pub auth_service_url: String,

    /// Base URL of the reservation service
    pub reservation_service_url: String,
}

impl GatewayState {
    pub fn from_config(config: &config::GatewayConfig) -> Result<Self> {
        let upstream_deadline = config.upstream_deadline();

        let http_client = reqwest::Client::builder()
            .timeout(upstream_deadline)
            .build()
            .wrap_err("Failed to build HTTP client")?;

        Ok(Self {
            facility_client: connect_lazy_with_timeout(&config.facility_grpc_url, upstream_deadline)?,
            http_client,
            auth_service_url: config.auth_service_url.clone(),
            reservation_service_url: config.reservation_service_url.clone(),
        })
    }
}

/// Builds the router with every route and the request logging layers.
pub fn app(state: Arc<GatewayState>) -> Router {
    Router::new()
        .merge(routes::health::routes())
        .merge(routes::users::routes())
        .merge(routes::facility::routes())
        .merge(routes::reservation::routes())
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(middleware::request_log::log_requests)),
        )
}

/// Bounds every request by `deadline`.
///
/// A request still running when it passes is answered with a 500 and a JSON
/// error body, the same shape as every other failure.
pub fn with_request_timeout(router: Router, deadline: Duration) -> Router {
    router.layer(
        ServiceBuilder::new()
            .layer(HandleErrorLayer::new(middleware::error_handling::handle_middleware_error))
            .timeout(deadline),
    )
}

/// Starts the gateway with the provided configuration
///
/// Without configured origins the gateway accepts cross-origin requests from
/// anywhere.
pub async fn start_server(config: config::GatewayConfig) -> Result<()> {
    let state = Arc::new(GatewayState::from_config(&config)?);

    let cors = match &config.cors_origins {
        Some(origins) => {
            let origins = origins
                .iter()
                .map(|origin| origin.parse::<HeaderValue>())
                .collect::<Result<Vec<_>, _>>()
                .wrap_err("Invalid GATEWAY_CORS_ORIGINS value")?;

            CorsLayer::new()
                .allow_methods([
                    axum::http::Method::GET,
                    axum::http::Method::POST,
                    axum::http::Method::PUT,
                    axum::http::Method::DELETE,
                    axum::http::Method::OPTIONS,
                ])
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::ACCEPT,
                ])
                .allow_origin(origins)
                .allow_credentials(true)
        }
        None => CorsLayer::permissive(),
    };

    let app = with_request_timeout(app(state), config.request_deadline()).layer(cors);

    let addr = config.server_addr();
    let listener = TcpListener::bind(&addr).await?;
    info!(addr = %addr, "Web API Gateway running");
    axum::serve(listener, app).await?;

    Ok(())
}
