use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use crate::{handlers, GatewayState};

pub fn routes() -> Router<Arc<GatewayState>> {
    Router::new()
        .route(
            "/web/facilities",
            get(handlers::facility::list_facilities).post(handlers::facility::create_facility),
        )
        .route(
            "/web/facilities/:id",
            get(handlers::facility::get_facility)
                .put(handlers::facility::update_facility)
                .delete(handlers::facility::delete_facility),
        )
        .route(
            "/web/facilities/:id/available-times",
            post(handlers::facility::add_available_time)
                .delete(handlers::facility::remove_available_time),
        )
}
