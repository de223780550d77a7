//! Customer and admin authentication
//!
//! - [`Session`] - per-request cookie session handle
//! - [`CurrentCustomer`] / [`AdminSession`] - access-level extractors
//! - [`hash_password`] / [`verify_password`] - argon2 helpers

pub mod extractor;
pub mod password;
pub mod session;

pub use extractor::{AdminSession, CurrentCustomer};
pub use password::{hash_password, verify_password};
pub use session::{COOKIE_NAME, Session, SessionData, SessionStore, session_middleware};
