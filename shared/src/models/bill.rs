//! Bill Model

use super::order::{Order, OrderItem};
use serde::{Deserialize, Serialize};

/// Bill number format: `BILL-{millis}-{order_id}`
pub fn bill_number(created_at_millis: i64, order_id: i64) -> String {
    format!("BILL-{}-{}", created_at_millis, order_id)
}

/// Bill joined with its order and customer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct BillWithOrder {
    pub bill_id: i64,
    pub bill_number: String,
    pub bill_total: f64,
    pub bill_created_at: i64,
    #[serde(flatten)]
    #[cfg_attr(feature = "db", sqlx(flatten))]
    pub order: Order,
    pub user_name: String,
    pub user_email: String,
    pub user_phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillDetail {
    pub bill: BillWithOrder,
    pub items: Vec<OrderItem>,
}
