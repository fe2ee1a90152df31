use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, GatewayState};

pub fn routes() -> Router<Arc<GatewayState>> {
    Router::new()
        .route("/web/reservations", post(handlers::reservation::create_reservation))
        .route(
            "/web/reservations/:id",
            get(handlers::reservation::get_reservation)
                .delete(handlers::reservation::cancel_reservation),
        )
}
