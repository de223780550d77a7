//! Food Item Model

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Serving window a food item belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeSlot {
    Breakfast,
    Lunch,
    Evening,
    Dinner,
    /// Served around the clock
    Beverage,
}

impl TimeSlot {
    pub const ALL: [TimeSlot; 5] = [
        TimeSlot::Breakfast,
        TimeSlot::Lunch,
        TimeSlot::Evening,
        TimeSlot::Dinner,
        TimeSlot::Beverage,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            TimeSlot::Breakfast => "breakfast",
            TimeSlot::Lunch => "lunch",
            TimeSlot::Evening => "evening",
            TimeSlot::Dinner => "dinner",
            TimeSlot::Beverage => "beverage",
        }
    }

    /// Exact, case-sensitive match against the stored text
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|slot| slot.as_str() == s)
    }

    /// Slots the restaurant can advertise as "now serving"
    pub const fn is_meal(&self) -> bool {
        !matches!(self, TimeSlot::Beverage)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`TimeSlot::from_str`] for text outside the closed set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTimeSlot(pub String);

impl fmt::Display for UnknownTimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown time slot: {}", self.0)
    }
}

impl std::error::Error for UnknownTimeSlot {}

impl FromStr for TimeSlot {
    type Err = UnknownTimeSlot;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| UnknownTimeSlot(s.to_string()))
    }
}

/// Dietary type of a food item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FoodType {
    #[serde(rename = "veg")]
    Veg,
    #[serde(rename = "non-veg")]
    NonVeg,
    #[serde(rename = "beverage")]
    Beverage,
}

impl FoodType {
    pub const fn as_str(&self) -> &'static str {
        match self {
            FoodType::Veg => "veg",
            FoodType::NonVeg => "non-veg",
            FoodType::Beverage => "beverage",
        }
    }
}

/// Food item entity
///
/// `time_slot` and `food_type` stay as stored text so rows written by
/// other tools with values outside the known sets still load.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct FoodItem {
    pub id: i64,
    pub name: String,
    pub category: Option<String>,
    pub price: f64,
    pub time_slot: String,
    #[serde(rename = "type")]
    pub food_type: String,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub recipe_details: Option<String>,
    pub api_meal_id: Option<String>,
    pub is_available: bool,
    /// NULL in storage reads as "no override"
    pub manual_override: Option<bool>,
    pub created_at: i64,
}

impl FoodItem {
    pub fn is_overridden(&self) -> bool {
        self.manual_override.unwrap_or(false)
    }
}

/// Admin add/update payload
///
/// `id` present means update, absent means insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodItemSave {
    pub id: Option<i64>,
    pub name: String,
    pub category: Option<String>,
    pub price: f64,
    pub time_slot: TimeSlot,
    #[serde(rename = "type")]
    pub food_type: FoodType,
    pub image_url: Option<String>,
    pub description: Option<String>,
    pub recipe_details: Option<String>,
    #[serde(default = "default_true")]
    pub is_available: bool,
}

fn default_true() -> bool {
    true
}

/// Query filters for the public menu listing
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodQuery {
    pub time_slot: Option<String>,
    #[serde(rename = "type")]
    pub food_type: Option<String>,
    pub category: Option<String>,
}

/// Admin toggle payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityToggle {
    pub is_available: bool,
}
