//! Data models
//!
//! Shared between foodie-server and the storefront (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY), timestamps are Unix millis.

pub mod bill;
pub mod cart;
pub mod food_item;
pub mod hotel;
pub mod order;
pub mod restaurant_status;
pub mod stats;
pub mod user;

// Re-exports
pub use bill::*;
pub use cart::*;
pub use food_item::*;
pub use hotel::*;
pub use order::*;
pub use restaurant_status::*;
pub use stats::*;
pub use user::*;
