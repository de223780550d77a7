//! Admin reporting models

use super::user::User;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStats {
    pub total: i64,
    pub new_this_month: i64,
    pub active_today: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserReport {
    pub stats: UserStats,
    pub users: Vec<User>,
}

/// Revenue over non-cancelled orders, rounded to whole rupees
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RevenueReport {
    pub total_revenue: i64,
    pub today_revenue: i64,
    pub month_revenue: i64,
    pub total_orders: i64,
    pub avg_order_value: i64,
}
