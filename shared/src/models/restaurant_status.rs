//! Restaurant Status Model

use super::food_item::TimeSlot;
use serde::{Deserialize, Serialize};

/// Open/closed flag plus the meal currently advertised
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct RestaurantStatus {
    pub is_open: bool,
    pub current_serving_time: String,
    pub updated_at: i64,
}

impl Default for RestaurantStatus {
    fn default() -> Self {
        Self {
            is_open: true,
            current_serving_time: TimeSlot::Breakfast.as_str().to_string(),
            updated_at: 0,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RestaurantStatusUpdate {
    pub is_open: Option<bool>,
    /// Must be a meal slot (beverage is rejected)
    pub current_serving_time: Option<TimeSlot>,
}
