//! Health check and banner

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::banner))
        .route("/health", get(handler::health))
}
