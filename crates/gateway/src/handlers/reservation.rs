//! Reservation routes, proxied to the reservation service.
//!
//! A successful upstream reply is passed through untouched. For an error
//! status the status is kept but the body is replaced with a generic message.

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::HeaderMap,
    response::{IntoResponse, Response},
    Json,
};
use reqwest::Method;
use serde_json::json;
use std::sync::Arc;
use tracing::{info, warn};

use crate::{
    handlers::proxy::{forward, upstream_url},
    middleware::error_handling::AppError,
    GatewayState,
};

const RESERVATION_SERVICE: &str = "Reservation";

async fn proxy_to_reservations(
    state: &GatewayState,
    method: Method,
    segments: &[&str],
    headers: &HeaderMap,
    body: Option<Bytes>,
    failure_message: &str,
) -> Result<Response, AppError> {
    let url = upstream_url(&state.reservation_service_url, segments)?;
    let response = forward(
        &state.http_client,
        RESERVATION_SERVICE,
        method.clone(),
        url,
        headers,
        body,
    )
    .await?;

    let path = format!("/{}", segments.join("/"));
    if response.is_success() {
        info!(
            service = RESERVATION_SERVICE,
            method = %method,
            path = %path,
            status = response.status.as_u16(),
            "Forwarded to reservation service"
        );
        Ok(response.into_response())
    } else {
        warn!(
            service = RESERVATION_SERVICE,
            method = %method,
            path = %path,
            status = response.status.as_u16(),
            "Reservation service answered with an error"
        );
        Ok((response.status, Json(json!({ "error": failure_message }))).into_response())
    }
}

pub async fn create_reservation(
    State(state): State<Arc<GatewayState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    proxy_to_reservations(
        &state,
        Method::POST,
        &["reservations"],
        &headers,
        Some(body),
        "Failed to create reservation",
    )
    .await
}

pub async fn get_reservation(
    State(state): State<Arc<GatewayState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    proxy_to_reservations(
        &state,
        Method::GET,
        &["reservations", &id],
        &headers,
        None,
        "Failed to fetch reservation",
    )
    .await
}

pub async fn cancel_reservation(
    State(state): State<Arc<GatewayState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    proxy_to_reservations(
        &state,
        Method::DELETE,
        &["reservations", &id],
        &headers,
        None,
        "Failed to cancel reservation",
    )
    .await
}
