//! Bill API

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/bills", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/order/{order_id}", get(handler::get_by_order))
        .route("/{bill_number}", get(handler::get_by_number))
}
