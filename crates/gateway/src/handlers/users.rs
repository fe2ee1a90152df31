//! Authentication routes. Both are proxied to the auth service, and its status
//! code and body are returned to the client unchanged, errors included.

use axum::{body::Bytes, extract::State, http::HeaderMap};
use reqwest::Method;
use std::sync::Arc;
use tracing::info;

use crate::{
    handlers::proxy::{forward, upstream_url, UpstreamResponse},
    middleware::error_handling::AppError,
    GatewayState,
};

const AUTH_SERVICE: &str = "Auth";

async fn proxy_to_auth(
    state: &GatewayState,
    path: &str,
    headers: &HeaderMap,
    body: Bytes,
) -> Result<UpstreamResponse, AppError> {
    let url = upstream_url(&state.auth_service_url, &["users", path])?;
    let response = forward(
        &state.http_client,
        AUTH_SERVICE,
        Method::POST,
        url,
        headers,
        Some(body),
    )
    .await?;

    info!(
        service = AUTH_SERVICE,
        path = %format!("/users/{}", path),
        status = response.status.as_u16(),
        "Auth service answered"
    );
    Ok(response)
}

pub async fn register(
    State(state): State<Arc<GatewayState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<UpstreamResponse, AppError> {
    proxy_to_auth(&state, "register", &headers, body).await
}

pub async fn login(
    State(state): State<Arc<GatewayState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<UpstreamResponse, AppError> {
    proxy_to_auth(&state, "login", &headers, body).await
}
