use axum::{
    Json,
    extract::{Path, State},
};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{BillDetail, BillWithOrder};

use crate::auth::CurrentCustomer;
use crate::core::ServerState;
use crate::db::repository::{bill, order};

async fn with_items(state: &ServerState, bill: Option<BillWithOrder>) -> AppResult<Json<BillDetail>> {
    let bill = bill.ok_or_else(|| AppError::new(ErrorCode::BillNotFound))?;
    let items = order::find_items(&state.pool, bill.order.id).await?;
    Ok(Json(BillDetail { bill, items }))
}

/// GET /api/bills/order/{order_id}
pub async fn get_by_order(
    State(state): State<ServerState>,
    CurrentCustomer(customer): CurrentCustomer,
    Path(order_id): Path<i64>,
) -> AppResult<Json<BillDetail>> {
    let found = bill::find_by_order_for_user(&state.pool, order_id, customer.id).await?;
    with_items(&state, found).await
}

/// GET /api/bills/{bill_number}
pub async fn get_by_number(
    State(state): State<ServerState>,
    CurrentCustomer(customer): CurrentCustomer,
    Path(bill_number): Path<String>,
) -> AppResult<Json<BillDetail>> {
    let found = bill::find_by_number_for_user(&state.pool, &bill_number, customer.id).await?;
    with_items(&state, found).await
}
