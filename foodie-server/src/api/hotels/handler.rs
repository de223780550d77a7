use axum::{
    Json,
    extract::{Path, Query, State},
};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Hotel, HotelQuery};

use crate::core::ServerState;
use crate::db::repository::hotel;

/// GET /api/hotels?type= - active hotels, best rated first
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<HotelQuery>,
) -> AppResult<Json<Vec<Hotel>>> {
    let hotels = hotel::find_active(&state.pool, query.type_filter()).await?;
    Ok(Json(hotels))
}

/// GET /api/hotels/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Hotel>> {
    hotel::find_by_id(&state.pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::new(ErrorCode::HotelNotFound))
}
