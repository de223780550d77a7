//! Cart handlers
//!
//! The cart belongs to the session, signed in or not.

use axum::Json;
use serde::Serialize;
use shared::error::{AppError, AppResult};
use shared::models::{CartAddRequest, CartRemoveRequest, CartUpdateRequest, CartView};

use crate::api::extract::ValidJson;
use crate::auth::Session;
use crate::cart::{self, Cart};

#[derive(Debug, Serialize)]
pub struct CartCount {
    pub count: i64,
}

fn view_of(cart: Cart) -> CartView {
    let count = cart.count();
    CartView {
        cart: cart.into_items(),
        count,
    }
}

/// GET /api/cart
pub async fn view(session: Session) -> Json<CartView> {
    Json(view_of(Cart::new(session.cart())))
}

/// POST /api/cart/add
pub async fn add(session: Session, ValidJson(req): ValidJson<CartAddRequest>) -> AppResult<Json<CartView>> {
    let item = cart::validate_add(req)?;
    let mut cart = Cart::new(session.cart());
    cart.add(item)?;
    session.set_cart(cart.items().to_vec());
    Ok(Json(view_of(cart)))
}

/// PUT /api/cart/update - quantity 0 or below removes the line
pub async fn update(
    session: Session,
    ValidJson(req): ValidJson<CartUpdateRequest>,
) -> AppResult<Json<CartView>> {
    let food_id = req.food_id.ok_or_else(|| AppError::required_field("foodId"))?;
    let quantity = req.quantity.ok_or_else(|| AppError::required_field("quantity"))?;

    let mut cart = Cart::new(session.cart());
    cart.update(food_id, req.hotel_id, quantity)?;
    session.set_cart(cart.items().to_vec());
    Ok(Json(view_of(cart)))
}

/// DELETE /api/cart/remove
pub async fn remove(
    session: Session,
    ValidJson(req): ValidJson<CartRemoveRequest>,
) -> AppResult<Json<CartView>> {
    let food_id = req.food_id.ok_or_else(|| AppError::required_field("foodId"))?;

    let mut cart = Cart::new(session.cart());
    cart.remove(food_id, req.hotel_id);
    session.set_cart(cart.items().to_vec());
    Ok(Json(view_of(cart)))
}

/// DELETE /api/cart/clear
pub async fn clear(session: Session) -> Json<CartView> {
    session.set_cart(Vec::new());
    Json(view_of(Cart::default()))
}

/// GET /api/cart/count
pub async fn count(session: Session) -> Json<CartCount> {
    Json(CartCount {
        count: Cart::new(session.cart()).count(),
    })
}
