use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::Serialize;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{FoodItem, FoodQuery};

use crate::core::ServerState;
use crate::db::repository::food;

/// Result of an on-demand availability pass
#[derive(Debug, Serialize)]
pub struct AvailabilityUpdated {
    pub message: &'static str,
    pub updated_count: usize,
    pub written: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// GET /api/food?timeSlot=&type=&category=
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<FoodQuery>,
) -> AppResult<Json<Vec<FoodItem>>> {
    let items = food::find_all(&state.pool, &query).await?;
    Ok(Json(items))
}

/// GET /api/food/all
pub async fn list_all(State(state): State<ServerState>) -> AppResult<Json<Vec<FoodItem>>> {
    let items = food::find_all(&state.pool, &FoodQuery::default()).await?;
    Ok(Json(items))
}

/// GET /api/food/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
) -> AppResult<Json<FoodItem>> {
    food::find_by_id(&state.pool, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::new(ErrorCode::FoodItemNotFound))
}

/// GET /api/food/hotel/{hotel_id} - items currently on offer at a hotel
pub async fn list_by_hotel(
    State(state): State<ServerState>,
    Path(hotel_id): Path<i64>,
) -> AppResult<Json<Vec<FoodItem>>> {
    let items = food::find_available_by_hotel(&state.pool, hotel_id).await?;
    Ok(Json(items))
}

/// POST /api/food/update-availability - run one pass now
pub async fn update_availability(
    State(state): State<ServerState>,
) -> AppResult<Json<AvailabilityUpdated>> {
    let report = state
        .availability
        .run_pass()
        .await
        .map_err(|e| AppError::new(ErrorCode::AvailabilityUpdateFailed).with_detail("reason", e.to_string()))?;

    Ok(Json(AvailabilityUpdated {
        message: "Food availability updated",
        updated_count: report.considered,
        written: report.written,
        skipped: report.skipped,
        failed: report.failed,
    }))
}
