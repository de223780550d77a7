//! Order handlers
//!
//! Every route requires a signed-in customer and only ever shows that
//! customer's own orders.

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Order, OrderDetail, OrderItem, PlaceOrderItem, PlaceOrderRequest, PlacedOrder};

use crate::auth::{CurrentCustomer, Session};
use crate::api::extract::ValidJson;
use crate::cart::MAX_LINE_QUANTITY;
use crate::core::ServerState;
use crate::db::repository::{RepoError, order};

/// Highest unit price accepted on an order line
const MAX_ITEM_PRICE: f64 = 1_000_000.0;

fn total_overflow() -> AppError {
    AppError::validation("Order total is out of range")
}

fn to_decimal(value: f64) -> AppResult<Decimal> {
    Decimal::from_f64(value).ok_or_else(total_overflow)
}

/// Sum of `price * quantity` minus the discount, never below zero
fn default_total(items: &[PlaceOrderItem], discount: Option<f64>) -> AppResult<f64> {
    let mut subtotal = Decimal::ZERO;
    for item in items {
        let line = to_decimal(item.price)?
            .checked_mul(Decimal::from(item.quantity))
            .ok_or_else(total_overflow)?;
        subtotal = subtotal.checked_add(line).ok_or_else(total_overflow)?;
    }
    let total = subtotal
        .checked_sub(to_decimal(discount.unwrap_or(0.0))?)
        .ok_or_else(total_overflow)?
        .max(Decimal::ZERO);
    total.round_dp(2).to_f64().ok_or_else(total_overflow)
}

fn validate_items(items: &[PlaceOrderItem]) -> AppResult<()> {
    if items.is_empty() {
        return Err(AppError::new(ErrorCode::OrderEmpty));
    }
    for item in items {
        if !(1..=MAX_LINE_QUANTITY).contains(&item.quantity) {
            return Err(AppError::validation(format!(
                "Item quantity must be between 1 and {MAX_LINE_QUANTITY}"
            )));
        }
        if !item.price.is_finite() || !(0.0..=MAX_ITEM_PRICE).contains(&item.price) {
            return Err(AppError::validation("Item price is out of range"));
        }
    }
    Ok(())
}

/// POST /api/orders - place an order with its lines and bill
pub async fn place(
    State(state): State<ServerState>,
    CurrentCustomer(customer): CurrentCustomer,
    session: Session,
    ValidJson(req): ValidJson<PlaceOrderRequest>,
) -> AppResult<Json<PlacedOrder>> {
    validate_items(&req.items)?;
    if let Some(discount) = req.discount_amount
        && (!discount.is_finite() || discount < 0.0)
    {
        return Err(AppError::validation("Discount must be a non-negative number"));
    }

    let total_amount = match req.total_amount {
        Some(total) if total.is_finite() && total >= 0.0 => total,
        Some(_) => return Err(AppError::validation("Total amount must be a non-negative number")),
        None => default_total(&req.items, req.discount_amount)?,
    };

    let placed = order::place(&state.pool, customer.id, &req, total_amount)
        .await
        .map_err(|e| match e {
            RepoError::Validation(_) => AppError::new(ErrorCode::OrderEmpty),
            other => {
                tracing::error!(user_id = customer.id, error = %other, "Order placement failed");
                AppError::new(ErrorCode::OrderPlacementFailed)
            }
        })?;

    session.set_cart(Vec::new());
    tracing::info!(
        user_id = customer.id,
        order_id = placed.order_id,
        bill_number = %placed.bill_number,
        total_amount = placed.total_amount,
        "Order placed"
    );
    Ok(Json(placed))
}

/// GET /api/orders/my - newest first
pub async fn list_mine(
    State(state): State<ServerState>,
    CurrentCustomer(customer): CurrentCustomer,
) -> AppResult<Json<Vec<Order>>> {
    let orders = order::find_by_user(&state.pool, customer.id).await?;
    Ok(Json(orders))
}

/// GET /api/orders/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    CurrentCustomer(customer): CurrentCustomer,
    Path(id): Path<i64>,
) -> AppResult<Json<OrderDetail>> {
    let order = order::find_detail_for_user(&state.pool, id, customer.id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::OrderNotFound))?;
    let items = order::find_items(&state.pool, id).await?;
    Ok(Json(OrderDetail { order, items }))
}

/// GET /api/orders/{id}/items
pub async fn list_items(
    State(state): State<ServerState>,
    CurrentCustomer(customer): CurrentCustomer,
    Path(id): Path<i64>,
) -> AppResult<Json<Vec<OrderItem>>> {
    if !order::is_owned_by(&state.pool, id, customer.id).await? {
        return Err(AppError::new(ErrorCode::OrderNotFound));
    }
    let items = order::find_items(&state.pool, id).await?;
    Ok(Json(items))
}
