//! Food menu API
//!
//! Listings return every item with its current `is_available` flag; the
//! client decides how to render unavailable dishes.

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/food", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/all", get(handler::list_all))
        .route("/update-availability", post(handler::update_availability))
        .route("/hotel/{hotel_id}", get(handler::list_by_hotel))
        .route("/{id}", get(handler::get_by_id))
}
