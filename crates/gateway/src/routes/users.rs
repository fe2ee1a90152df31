use axum::{routing::post, Router};
use std::sync::Arc;

use crate::{handlers, GatewayState};

pub fn routes() -> Router<Arc<GatewayState>> {
    Router::new()
        .route("/web/users/register", post(handlers::users::register))
        .route("/web/users/login", post(handlers::users::login))
}
