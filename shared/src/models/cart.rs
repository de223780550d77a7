//! Cart Model
//!
//! The cart lives in the customer's session, so these types use the
//! camelCase field names the storefront posts.

use serde::{Deserialize, Serialize};

/// One cart line, identified by `(food_id, hotel_id)`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub food_id: i64,
    pub food_name: String,
    pub price: f64,
    pub quantity: i64,
    pub hotel_id: Option<i64>,
    pub hotel_name: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartAddRequest {
    pub food_id: Option<i64>,
    pub food_name: Option<String>,
    pub price: Option<f64>,
    pub quantity: Option<i64>,
    pub hotel_id: Option<i64>,
    pub hotel_name: Option<String>,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartUpdateRequest {
    pub food_id: Option<i64>,
    pub hotel_id: Option<i64>,
    pub quantity: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartRemoveRequest {
    pub food_id: Option<i64>,
    pub hotel_id: Option<i64>,
}

/// Cart contents plus total quantity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartView {
    pub cart: Vec<CartItem>,
    pub count: i64,
}
