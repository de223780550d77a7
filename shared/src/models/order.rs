//! Order Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Order lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum OrderStatus {
    #[serde(rename = "Order Confirmed")]
    #[cfg_attr(feature = "db", sqlx(rename = "Order Confirmed"))]
    Confirmed,
    #[serde(rename = "Preparing")]
    #[cfg_attr(feature = "db", sqlx(rename = "Preparing"))]
    Preparing,
    #[serde(rename = "Out for Delivery")]
    #[cfg_attr(feature = "db", sqlx(rename = "Out for Delivery"))]
    OutForDelivery,
    #[serde(rename = "Delivered")]
    #[cfg_attr(feature = "db", sqlx(rename = "Delivered"))]
    Delivered,
    #[serde(rename = "Cancelled")]
    #[cfg_attr(feature = "db", sqlx(rename = "Cancelled"))]
    Cancelled,
}

impl OrderStatus {
    pub const fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Confirmed => "Order Confirmed",
            OrderStatus::Preparing => "Preparing",
            OrderStatus::OutForDelivery => "Out for Delivery",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }
}

impl Default for OrderStatus {
    fn default() -> Self {
        Self::Confirmed
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment status (cash on delivery starts as Pending)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
pub enum PaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
}

pub const DEFAULT_PAYMENT_METHOD: &str = "Cash on Delivery";
pub const DEFAULT_ITEM_NAME: &str = "Food Item";
pub const DEFAULT_HOTEL_ID: i64 = 1;

/// Order entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Order {
    pub id: i64,
    pub user_id: i64,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub payment_method: String,
    pub payment_status: PaymentStatus,
    pub delivery_address: Option<String>,
    pub notes: Option<String>,
    pub coupon_code: Option<String>,
    pub discount_amount: f64,
    pub created_at: i64,
}

/// Order line with the hotel name resolved
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderItem {
    pub id: i64,
    pub order_id: i64,
    pub item_name: String,
    pub price: f64,
    pub quantity: i64,
    pub hotel_id: Option<i64>,
    /// NULL once the food item has been deleted from the menu
    pub food_id: Option<i64>,
    pub hotel_name: Option<String>,
}

/// Order joined with its customer and bill
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct OrderWithCustomer {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub order: Order,
    pub user_name: String,
    pub user_email: String,
    pub user_phone: String,
    pub bill_number: Option<String>,
}

/// Admin order list row
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct AdminOrderSummary {
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub order: Order,
    pub user_name: String,
    pub user_phone: String,
    pub item_count: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderDetail {
    pub order: OrderWithCustomer,
    pub items: Vec<OrderItem>,
}

/// One requested line of a new order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlaceOrderItem {
    pub food_id: Option<i64>,
    pub food_name: Option<String>,
    pub price: f64,
    pub quantity: i64,
    pub hotel_id: Option<i64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaceOrderRequest {
    pub items: Vec<PlaceOrderItem>,
    /// Computed from the items when absent
    pub total_amount: Option<f64>,
    pub delivery_address: Option<String>,
    pub landmark: Option<String>,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub coupon_code: Option<String>,
    pub discount_amount: Option<f64>,
}

impl PlaceOrderRequest {
    /// `"{address}, Near {landmark}"` when a landmark is given
    pub fn full_address(&self) -> Option<String> {
        let landmark = self.landmark.as_deref().filter(|l| !l.trim().is_empty());
        match (self.delivery_address.as_deref(), landmark) {
            (Some(addr), Some(landmark)) => Some(format!("{}, Near {}", addr, landmark)),
            (Some(addr), None) => Some(addr.to_string()),
            (None, Some(landmark)) => Some(format!("Near {}", landmark)),
            (None, None) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacedOrder {
    pub order_id: i64,
    pub bill_number: String,
    pub total_amount: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderStatusUpdate {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_status_serde_uses_display_names() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::OutForDelivery).unwrap(),
            "\"Out for Delivery\""
        );
        let status: OrderStatus = serde_json::from_str("\"Order Confirmed\"").unwrap();
        assert_eq!(status, OrderStatus::Confirmed);
        assert!(serde_json::from_str::<OrderStatus>("\"Shipped\"").is_err());
    }

    #[test]
    fn test_full_address_appends_landmark() {
        let req = PlaceOrderRequest {
            delivery_address: Some("12 North Street".into()),
            landmark: Some("Meenakshi Temple".into()),
            ..Default::default()
        };
        assert_eq!(
            req.full_address().as_deref(),
            Some("12 North Street, Near Meenakshi Temple")
        );

        let req = PlaceOrderRequest {
            delivery_address: Some("12 North Street".into()),
            landmark: Some("  ".into()),
            ..Default::default()
        };
        assert_eq!(req.full_address().as_deref(), Some("12 North Street"));
    }

    #[test]
    fn test_order_with_customer_flattens_order() {
        let order = Order {
            id: 7,
            user_id: 1,
            total_amount: 120.0,
            status: OrderStatus::Preparing,
            payment_method: DEFAULT_PAYMENT_METHOD.into(),
            payment_status: PaymentStatus::Pending,
            delivery_address: None,
            notes: None,
            coupon_code: None,
            discount_amount: 0.0,
            created_at: 0,
        };
        let row = OrderWithCustomer {
            order,
            user_name: "Anu".into(),
            user_email: "anu@example.com".into(),
            user_phone: "9000000000".into(),
            bill_number: Some("BILL-1-7".into()),
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["status"], "Preparing");
        assert_eq!(json["user_name"], "Anu");
    }
}
