use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

/// Logs every inbound request before it is routed.
pub async fn log_requests(request: Request, next: Next) -> Response {
    info!(
        method = %request.method(),
        path = request.uri().path(),
        "{} {} - Web Gateway",
        request.method(),
        request.uri().path()
    );
    next.run(request).await
}
