//! Request body extraction for the facility routes.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header,
};
use serde::de::DeserializeOwned;
use spacebook_core::errors::FacilityError;

use crate::middleware::error_handling::AppError;

/// JSON request body in which every field is optional.
///
/// A request without a body, or whose content type is not JSON, yields
/// `T::default()`. A JSON body that does not deserialize into `T` is rejected
/// with a 400 carrying a fixed message; the parser's detail is only logged.
#[derive(Debug, Clone, Default)]
pub struct JsonBody<T>(pub T);

fn is_json(request: &Request) -> bool {
    request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim();
            mime.eq_ignore_ascii_case("application/json") || mime.ends_with("+json")
        })
        .unwrap_or(false)
}

fn invalid_body(detail: impl std::fmt::Display) -> AppError {
    AppError::new(
        FacilityError::BadRequest(detail.to_string()),
        "Invalid request body",
    )
}

#[async_trait]
impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(request: Request, state: &S) -> Result<Self, Self::Rejection> {
        let json = is_json(&request);
        let bytes = Bytes::from_request(request, state)
            .await
            .map_err(invalid_body)?;

        if !json || bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self(T::default()));
        }

        serde_json::from_slice(&bytes)
            .map(Self)
            .map_err(invalid_body)
    }
}
