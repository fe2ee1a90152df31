//! Forwarding of requests to the REST backends behind the gateway.

use axum::{
    body::{Body, Bytes},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
};
use reqwest::{Method, Url};
use spacebook_core::errors::FacilityError;

use crate::middleware::error_handling::AppError;

/// What came back from a backend, fully buffered.
#[derive(Debug)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

impl UpstreamResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}

impl IntoResponse for UpstreamResponse {
    fn into_response(self) -> Response {
        let mut builder = Response::builder().status(self.status);
        if let Some(content_type) = self.content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }

        builder
            .body(Body::from(self.body))
            .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
    }
}

/// Joins `segments` onto `base`, percent-encoding each one.
pub fn upstream_url(base: &str, segments: &[&str]) -> Result<Url, AppError> {
    let mut url = Url::parse(base).map_err(|e| {
        AppError::new(
            FacilityError::Internal(eyre::eyre!("invalid upstream base URL {}: {}", base, e)),
            "Internal server error",
        )
    })?;

    url.path_segments_mut()
        .map_err(|_| {
            AppError::new(
                FacilityError::Internal(eyre::eyre!("upstream URL {} cannot take a path", base)),
                "Internal server error",
            )
        })?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

/// Sends one request upstream and buffers the reply.
///
/// Any transport failure, including a timeout or a body that cannot be read,
/// becomes an `UpstreamUnavailable` error for `service`.
pub async fn forward(
    client: &reqwest::Client,
    service: &str,
    method: Method,
    url: Url,
    headers: &HeaderMap,
    body: Option<Bytes>,
) -> Result<UpstreamResponse, AppError> {
    let mut request = client.request(method, url);

    if let Some(body) = body {
        let content_type = headers
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or("application/json");
        request = request
            .header(reqwest::header::CONTENT_TYPE, content_type)
            .body(body);
    }

    let response = request
        .send()
        .await
        .map_err(|e| AppError::upstream(service, e))?;

    let status = StatusCode::from_u16(response.status().as_u16())
        .map_err(|e| AppError::upstream(service, e))?;
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);
    let body = response
        .bytes()
        .await
        .map_err(|e| AppError::upstream(service, e))?;

    Ok(UpstreamResponse {
        status,
        content_type,
        body,
    })
}
