use axum::{Json, extract::State};
use serde::Serialize;
use shared::util::now_millis;

use crate::core::ServerState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub port: u16,
    pub timestamp: i64,
}

#[derive(Debug, Serialize)]
pub struct BannerResponse {
    pub message: &'static str,
    pub status: &'static str,
    pub port: u16,
}

/// GET /health
pub async fn health(State(state): State<ServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        port: state.config.http_port,
        timestamp: now_millis(),
    })
}

/// GET /
pub async fn banner(State(state): State<ServerState>) -> Json<BannerResponse> {
    Json(BannerResponse {
        message: "Foodie Delight API",
        status: "running",
        port: state.config.http_port,
    })
}
