//! Foodie Delight - food ordering backend
//!
//! The menu's availability flags follow the serving window of each dish's
//! time slot, recomputed on a timer and on demand unless an admin has
//! pinned an item by hand.
//!
//! ```text
//! foodie-server/src/
//! ├── core/          # config, state, server, background tasks
//! ├── availability/  # slot windows, evaluator, pass, scheduler
//! ├── auth/          # cookie sessions, extractors, argon2
//! ├── cart/          # session cart rules
//! ├── db/            # SQLite pool, migrations, repositories, seed
//! ├── api/           # HTTP routes and handlers
//! └── utils/         # logging, time zone helpers
//! ```

pub mod api;
pub mod auth;
pub mod availability;
pub mod cart;
pub mod core;
pub mod db;
pub mod utils;

pub use core::{Config, Server, ServerState};
pub use shared::error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use utils::logger::init_logger_with_file;
