use axum::{routing::get, Json, Router};
use serde::Serialize;
use std::sync::Arc;

use crate::GatewayState;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    gateway: &'static str,
}

#[derive(Serialize)]
struct VersionResponse {
    version: &'static str,
}

// Liveness of the gateway process only; downstream services are not checked.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        gateway: "Web API Gateway",
    })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub fn routes() -> Router<Arc<GatewayState>> {
    Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
}
