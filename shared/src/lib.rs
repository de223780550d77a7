//! Shared types for Foodie Delight
//!
//! Error codes, API response envelope and domain models used by the
//! server and its HTTP clients.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};
