//! # Error Handling Middleware
//!
//! Maps failures of downstream calls onto HTTP responses. Clients only ever
//! see a status code and a fixed message; the detail of the failure is
//! logged here and never echoed back.
//!
//! | category | status | body |
//! |---|---|---|
//! | `NotFound`, `InvalidIdentifier` | 404 | `{"error": "Facility not found"}` |
//! | `BadRequest` | 400 | `{"error": <message given by the handler>}` |
//! | `Internal`, `UpstreamUnavailable` | 500 | `{"error": <message given by the handler>}` |

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    BoxError, Json,
};
use serde_json::json;
use spacebook_core::errors::FacilityError;
use spacebook_facility::client::error_from_status;
use tower::timeout::error::Elapsed;

/// Application error wrapper that provides HTTP status code mapping
///
/// `message` is what a client receives for anything but a 404. It names the
/// failed action ("Failed to create facility") rather than the cause.
#[derive(Debug)]
pub struct AppError {
    pub error: FacilityError,
    pub message: String,
}

impl AppError {
    pub fn new(error: FacilityError, message: impl Into<String>) -> Self {
        Self {
            error,
            message: message.into(),
        }
    }

    /// Wraps a failed facility gRPC call.
    pub fn rpc(status: tonic::Status, message: &str) -> Self {
        Self::new(error_from_status(status), message)
    }

    /// A proxied backend gave no usable response.
    pub fn upstream(service: &str, cause: impl std::fmt::Display) -> Self {
        Self::new(
            FacilityError::UpstreamUnavailable(format!("{} service: {}", service, cause)),
            format!("{} service unavailable", service),
        )
    }

    pub fn status(&self) -> StatusCode {
        match &self.error {
            FacilityError::NotFound(_) | FacilityError::InvalidIdentifier(_) => StatusCode::NOT_FOUND,
            FacilityError::BadRequest(_) => StatusCode::BAD_REQUEST,
            FacilityError::Internal(_) | FacilityError::UpstreamUnavailable(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %self.error, "{}", self.message);
        } else {
            tracing::warn!(status = status.as_u16(), error = %self.error, "{}", self.message);
        }

        let body = if status == StatusCode::NOT_FOUND {
            Json(json!({ "error": "Facility not found" }))
        } else {
            Json(json!({ "error": self.message }))
        };

        (status, body).into_response()
    }
}

/// Answers a request that failed inside the tower middleware stack.
///
/// The only failure expected here is the request deadline elapsing.
pub async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        AppError::new(
            FacilityError::UpstreamUnavailable("request deadline elapsed".to_string()),
            "Request timed out",
        )
    } else {
        AppError::new(
            FacilityError::Internal(eyre::eyre!("middleware failure: {}", err)),
            "Internal server error",
        )
    }
}
