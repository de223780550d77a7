//! Session cart API

mod handler;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/cart", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::view))
        .route("/add", post(handler::add))
        .route("/update", put(handler::update))
        .route("/remove", delete(handler::remove))
        .route("/clear", delete(handler::clear))
        .route("/count", get(handler::count))
}
