//! Admin Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use serde::Deserialize;
use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{
    AdminOrderSummary, AvailabilityToggle, FoodItem, FoodItemSave, OrderItem, OrderStatusUpdate,
    RestaurantStatus, RestaurantStatusUpdate, RevenueReport, UserReport,
};

use crate::api::extract::ValidJson;
use crate::auth::{AdminSession, Session};
use crate::core::ServerState;
use crate::db::repository::{RepoError, food, order, restaurant_status, stats, user};
use crate::utils::time;

const RECENT_USERS_LIMIT: i64 = 50;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AdminLoginRequest {
    pub username: String,
    pub password: String,
}

fn food_not_found(e: RepoError) -> AppError {
    match e {
        RepoError::NotFound(_) => AppError::new(ErrorCode::FoodItemNotFound),
        other => other.into(),
    }
}

/// POST /api/admin/login
pub async fn login(
    State(state): State<ServerState>,
    session: Session,
    ValidJson(req): ValidJson<AdminLoginRequest>,
) -> AppResult<Json<ApiResponse<()>>> {
    if req.username != state.config.admin_username || req.password != state.config.admin_password {
        tracing::warn!(username = %req.username, "Admin login failed");
        return Err(AppError::invalid_credentials());
    }
    session.set_admin(true);
    tracing::info!("Admin logged in");
    Ok(Json(ApiResponse::ok_with_message("Admin login successful")))
}

/// POST /api/admin/logout - ends the whole session, customer sign-in and cart included
pub async fn logout(session: Session) -> Json<ApiResponse<()>> {
    session.destroy();
    tracing::info!("Admin logged out");
    Json(ApiResponse::ok_with_message("Logged out successfully"))
}

/// GET /api/admin/orders - newest first
pub async fn list_orders(
    State(state): State<ServerState>,
    _admin: AdminSession,
) -> AppResult<Json<Vec<AdminOrderSummary>>> {
    let orders = order::find_all_for_admin(&state.pool).await?;
    Ok(Json(orders))
}

/// GET /api/admin/orders/{id} - order lines
pub async fn order_items(
    State(state): State<ServerState>,
    _admin: AdminSession,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<OrderItem>>> {
    let items = order::find_items(&state.pool, id).await?;
    Ok(Json(items))
}

/// PUT /api/admin/orders/{id}/status
pub async fn update_order_status(
    State(state): State<ServerState>,
    _admin: AdminSession,
    Path(id): Path<i64>,
    ValidJson(req): ValidJson<OrderStatusUpdate>,
) -> AppResult<Json<ApiResponse<()>>> {
    order::update_status(&state.pool, id, req.status)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::new(ErrorCode::OrderNotFound),
            other => other.into(),
        })?;
    tracing::info!(order_id = id, status = %req.status, "Order status updated");
    Ok(Json(ApiResponse::ok_with_message("Order status updated")))
}

/// POST /api/admin/food - insert without `id`, update with it
pub async fn save_food(
    State(state): State<ServerState>,
    _admin: AdminSession,
    ValidJson(req): ValidJson<FoodItemSave>,
) -> AppResult<Json<FoodItem>> {
    if req.name.trim().is_empty() {
        return Err(AppError::required_field("name"));
    }
    if !req.price.is_finite() || req.price <= 0.0 {
        return Err(AppError::new(ErrorCode::FoodInvalidPrice));
    }

    let item = match req.id {
        Some(id) => {
            let item = food::update(&state.pool, id, &req).await.map_err(food_not_found)?;
            tracing::info!(food_id = id, "Food item updated");
            item
        }
        None => {
            let item = food::create(&state.pool, &req).await?;
            tracing::info!(food_id = item.id, time_slot = %item.time_slot, "Food item created");
            item
        }
    };
    Ok(Json(item))
}

/// PUT /api/admin/food/{id}/toggle - pin the flag and take the item off the schedule
pub async fn toggle_food(
    State(state): State<ServerState>,
    _admin: AdminSession,
    Path(id): Path<i64>,
    ValidJson(req): ValidJson<AvailabilityToggle>,
) -> AppResult<Json<ApiResponse<()>>> {
    food::set_override(&state.pool, id, req.is_available)
        .await
        .map_err(food_not_found)?;
    tracing::info!(food_id = id, is_available = req.is_available, "Manual availability override set");
    Ok(Json(ApiResponse::ok_with_message("Food availability updated")))
}

/// PUT /api/admin/food/{id}/reset-override - hand the item back to the schedule
///
/// The flag is left as is until the next pass recomputes it.
pub async fn reset_override(
    State(state): State<ServerState>,
    _admin: AdminSession,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    food::clear_override(&state.pool, id)
        .await
        .map_err(food_not_found)?;
    tracing::info!(food_id = id, "Manual availability override cleared");
    Ok(Json(ApiResponse::ok_with_message("Override reset, automatic scheduling restored")))
}

/// DELETE /api/admin/food/{id}
pub async fn delete_food(
    State(state): State<ServerState>,
    _admin: AdminSession,
    Path(id): Path<i64>,
) -> AppResult<Json<ApiResponse<()>>> {
    food::delete(&state.pool, id).await.map_err(food_not_found)?;
    tracing::info!(food_id = id, "Food item deleted");
    Ok(Json(ApiResponse::ok_with_message("Food item deleted")))
}

/// GET /api/admin/restaurant-status
pub async fn get_restaurant_status(
    State(state): State<ServerState>,
    _admin: AdminSession,
) -> AppResult<Json<RestaurantStatus>> {
    Ok(Json(restaurant_status::get(&state.pool).await?))
}

/// PUT /api/admin/restaurant-status
pub async fn update_restaurant_status(
    State(state): State<ServerState>,
    _admin: AdminSession,
    ValidJson(req): ValidJson<RestaurantStatusUpdate>,
) -> AppResult<Json<RestaurantStatus>> {
    if let Some(slot) = req.current_serving_time
        && !slot.is_meal()
    {
        return Err(AppError::with_message(
            ErrorCode::FoodInvalidTimeSlot,
            format!("{slot} is not a serving time"),
        ));
    }

    let status = restaurant_status::update(
        &state.pool,
        req.is_open,
        req.current_serving_time.map(|slot| slot.as_str()),
    )
    .await?;
    tracing::info!(
        is_open = status.is_open,
        current_serving_time = %status.current_serving_time,
        "Restaurant status updated"
    );
    Ok(Json(status))
}

/// GET /api/admin/users - account stats and the latest sign-ups
pub async fn users(
    State(state): State<ServerState>,
    _admin: AdminSession,
) -> AppResult<Json<UserReport>> {
    let (day_start, month_start) = time::today_bounds(state.config.timezone);
    let stats = stats::user_stats(&state.pool, day_start, month_start).await?;
    let users = user::find_recent(&state.pool, RECENT_USERS_LIMIT).await?;
    Ok(Json(UserReport { stats, users }))
}

/// GET /api/admin/revenue
pub async fn revenue(
    State(state): State<ServerState>,
    _admin: AdminSession,
) -> AppResult<Json<RevenueReport>> {
    let (day_start, month_start) = time::today_bounds(state.config.timezone);
    Ok(Json(stats::revenue(&state.pool, day_start, month_start).await?))
}
