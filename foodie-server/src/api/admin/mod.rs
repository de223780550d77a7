//! Admin console API
//!
//! Everything except `/login` requires an admin session.

mod handler;

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/admin", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/login", post(handler::login))
        .route("/logout", post(handler::logout))
        .route("/orders", get(handler::list_orders))
        .route("/orders/{id}", get(handler::order_items))
        .route("/orders/{id}/status", put(handler::update_order_status))
        .route("/food", post(handler::save_food))
        .route("/food/{id}", delete(handler::delete_food))
        .route("/food/{id}/toggle", put(handler::toggle_food))
        .route("/food/{id}/reset-override", put(handler::reset_override))
        .route(
            "/restaurant-status",
            get(handler::get_restaurant_status).put(handler::update_restaurant_status),
        )
        .route("/users", get(handler::users))
        .route("/revenue", get(handler::revenue))
}
