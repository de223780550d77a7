//! Unified error codes for Foodie Delight
//!
//! Error codes are grouped by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Cart errors
//! - 4xxx: Order errors
//! - 5xxx: Bill errors
//! - 6xxx: Menu errors
//! - 7xxx: Hotel errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Serialized as a bare u16 so the frontend can switch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Required field missing
    RequiredField = 6,

    // ==================== 1xxx: Auth ====================
    /// Caller has no logged-in session
    NotAuthenticated = 1001,
    /// Invalid email or password
    InvalidCredentials = 1002,
    /// Email is already registered
    EmailAlreadyRegistered = 1004,
    /// Password too short
    PasswordTooShort = 1005,

    // ==================== 2xxx: Permission ====================
    /// Admin login required
    AdminRequired = 2002,

    // ==================== 3xxx: Cart ====================
    /// Cart line not found
    CartItemNotFound = 3001,
    /// Quantity outside 1..=999
    CartInvalidQuantity = 3002,

    // ==================== 4xxx: Order ====================
    /// Order not found
    OrderNotFound = 4001,
    /// Order has no items
    OrderEmpty = 4002,
    /// Order could not be placed
    OrderPlacementFailed = 4004,

    // ==================== 5xxx: Bill ====================
    /// Bill not found
    BillNotFound = 5001,

    // ==================== 6xxx: Menu ====================
    /// Food item not found
    FoodItemNotFound = 6001,
    /// Price must be positive
    FoodInvalidPrice = 6002,
    /// Unknown time slot
    FoodInvalidTimeSlot = 6003,
    /// Availability pass could not complete
    AvailabilityUpdateFailed = 6004,

    // ==================== 7xxx: Hotel ====================
    /// Hotel not found
    HotelNotFound = 7001,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::RequiredField => "Required field is missing",

            // Auth
            ErrorCode::NotAuthenticated => "Please login to continue",
            ErrorCode::InvalidCredentials => "Invalid email or password",
            ErrorCode::EmailAlreadyRegistered => "Email already registered",
            ErrorCode::PasswordTooShort => "Password must be at least 6 characters",

            // Permission
            ErrorCode::AdminRequired => "Admin login required",

            // Cart
            ErrorCode::CartItemNotFound => "Item not found in cart",
            ErrorCode::CartInvalidQuantity => "Quantity must be between 1 and 999",

            // Order
            ErrorCode::OrderNotFound => "Order not found",
            ErrorCode::OrderEmpty => "Order must contain at least one item",
            ErrorCode::OrderPlacementFailed => "Error placing order",

            // Bill
            ErrorCode::BillNotFound => "Bill not found",

            // Menu
            ErrorCode::FoodItemNotFound => "Food item not found",
            ErrorCode::FoodInvalidPrice => "Price must be greater than zero",
            ErrorCode::FoodInvalidTimeSlot => "Invalid time slot",
            ErrorCode::AvailabilityUpdateFailed => "Error updating availability",

            // Hotel
            ErrorCode::HotelNotFound => "Hotel not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when converting an unknown u16 to [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::RequiredField),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1004 => Ok(ErrorCode::EmailAlreadyRegistered),
            1005 => Ok(ErrorCode::PasswordTooShort),

            // Permission
            2002 => Ok(ErrorCode::AdminRequired),

            // Cart
            3001 => Ok(ErrorCode::CartItemNotFound),
            3002 => Ok(ErrorCode::CartInvalidQuantity),

            // Order
            4001 => Ok(ErrorCode::OrderNotFound),
            4002 => Ok(ErrorCode::OrderEmpty),
            4004 => Ok(ErrorCode::OrderPlacementFailed),

            // Bill
            5001 => Ok(ErrorCode::BillNotFound),

            // Menu
            6001 => Ok(ErrorCode::FoodItemNotFound),
            6002 => Ok(ErrorCode::FoodInvalidPrice),
            6003 => Ok(ErrorCode::FoodInvalidTimeSlot),
            6004 => Ok(ErrorCode::AvailabilityUpdateFailed),

            // Hotel
            7001 => Ok(ErrorCode::HotelNotFound),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}
