//! Unified error codes for the Hostal platform
//!
//! This module defines all error codes used across the booking flow and
//! the back-office dashboard. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Booking errors
//! - 4xxx: Rate/grid errors
//! - 5xxx: Payment errors
//! - 6xxx: Room errors
//! - 7xxx: Reservation errors
//! - 8xxx: Channel-sync errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient
/// serialization and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,

    // ==================== 2xxx: Permission ====================
    /// Permission denied
    PermissionDenied = 2001,
    /// Administrator role required
    AdminRequired = 2002,

    // ==================== 3xxx: Booking ====================
    /// Stay is invalid (empty date range, zero guests, unresolved room)
    StayInvalid = 3001,
    /// Pricing selection is incomplete
    SelectionIncomplete = 3002,
    /// A night in the requested range has no defined rate
    RateMissing = 3003,
    /// Room has no capacity left for the requested range
    RoomUnavailable = 3004,
    /// Guest count exceeds room capacity
    CapacityExceeded = 3005,

    // ==================== 4xxx: Rates / grid ====================
    /// Date range is invalid (from not before to)
    RangeInvalid = 4001,
    /// A bulk write would overwrite populated cells (branch point, not fatal)
    RateConflict = 4002,
    /// Day price record not found
    RateNotFound = 4003,

    // ==================== 5xxx: Payment ====================
    /// Payment processing failed
    PaymentFailed = 5001,
    /// Payment not found
    PaymentNotFound = 5002,

    // ==================== 6xxx: Room ====================
    /// Room not found
    RoomNotFound = 6001,
    /// Room slug already exists
    RoomSlugTaken = 6002,

    // ==================== 7xxx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 7001,
    /// Reservation has already been cancelled
    ReservationCancelled = 7002,

    // ==================== 8xxx: Channel sync ====================
    /// Channel synchronization failed
    SyncFailed = 8001,
    /// Channel-sync log entry not found
    SyncLogNotFound = 8002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Backend unreachable or responding with 5xx
    BackendUnavailable = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
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

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Auth
            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Authentication token is invalid",

            // Permission
            ErrorCode::PermissionDenied => "Permission denied",
            ErrorCode::AdminRequired => "Administrator role is required",

            // Booking
            ErrorCode::StayInvalid => "Stay dates or guest count are invalid",
            ErrorCode::SelectionIncomplete => "Pricing selection is incomplete",
            ErrorCode::RateMissing => "A night in the requested range has no rate",
            ErrorCode::RoomUnavailable => "Room is not available for the requested range",
            ErrorCode::CapacityExceeded => "Guest count exceeds room capacity",

            // Rates / grid
            ErrorCode::RangeInvalid => "Date range is invalid",
            ErrorCode::RateConflict => "Existing rates would be overwritten",
            ErrorCode::RateNotFound => "Day price not found",

            // Payment
            ErrorCode::PaymentFailed => "Payment processing failed",
            ErrorCode::PaymentNotFound => "Payment not found",

            // Room
            ErrorCode::RoomNotFound => "Room not found",
            ErrorCode::RoomSlugTaken => "Room slug already exists",

            // Reservation
            ErrorCode::ReservationNotFound => "Reservation not found",
            ErrorCode::ReservationCancelled => "Reservation has already been cancelled",

            // Channel sync
            ErrorCode::SyncFailed => "Channel synchronization failed",
            ErrorCode::SyncLogNotFound => "Channel-sync log entry not found",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::BackendUnavailable => "Backend is unavailable",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> http::StatusCode {
        use http::StatusCode;
        match self {
            ErrorCode::Success => StatusCode::OK,

            ErrorCode::ValidationFailed
            | ErrorCode::InvalidRequest
            | ErrorCode::InvalidFormat
            | ErrorCode::RequiredField
            | ErrorCode::ValueOutOfRange
            | ErrorCode::StayInvalid
            | ErrorCode::SelectionIncomplete
            | ErrorCode::RangeInvalid => StatusCode::BAD_REQUEST,

            ErrorCode::NotAuthenticated
            | ErrorCode::InvalidCredentials
            | ErrorCode::TokenExpired
            | ErrorCode::TokenInvalid => StatusCode::UNAUTHORIZED,

            ErrorCode::PermissionDenied | ErrorCode::AdminRequired => StatusCode::FORBIDDEN,

            ErrorCode::NotFound
            | ErrorCode::RateNotFound
            | ErrorCode::RoomNotFound
            | ErrorCode::PaymentNotFound
            | ErrorCode::ReservationNotFound
            | ErrorCode::SyncLogNotFound => StatusCode::NOT_FOUND,

            ErrorCode::AlreadyExists | ErrorCode::RateConflict | ErrorCode::RoomSlugTaken => {
                StatusCode::CONFLICT
            }

            ErrorCode::RateMissing
            | ErrorCode::RoomUnavailable
            | ErrorCode::CapacityExceeded
            | ErrorCode::ReservationCancelled
            | ErrorCode::PaymentFailed
            | ErrorCode::SyncFailed => StatusCode::UNPROCESSABLE_ENTITY,

            ErrorCode::BackendUnavailable => StatusCode::BAD_GATEWAY,
            ErrorCode::TimeoutError => StatusCode::GATEWAY_TIMEOUT,

            ErrorCode::Unknown
            | ErrorCode::InternalError
            | ErrorCode::DatabaseError
            | ErrorCode::ConfigError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    fn from(code: ErrorCode) -> u16 {
        code.code()
    }
}

/// Error returned when converting an unknown u16 into an [`ErrorCode`]
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
        let code = match value {
            0 => ErrorCode::Success,
            1 => ErrorCode::Unknown,
            2 => ErrorCode::ValidationFailed,
            3 => ErrorCode::NotFound,
            4 => ErrorCode::AlreadyExists,
            5 => ErrorCode::InvalidRequest,
            6 => ErrorCode::InvalidFormat,
            7 => ErrorCode::RequiredField,
            8 => ErrorCode::ValueOutOfRange,

            1001 => ErrorCode::NotAuthenticated,
            1002 => ErrorCode::InvalidCredentials,
            1003 => ErrorCode::TokenExpired,
            1004 => ErrorCode::TokenInvalid,

            2001 => ErrorCode::PermissionDenied,
            2002 => ErrorCode::AdminRequired,

            3001 => ErrorCode::StayInvalid,
            3002 => ErrorCode::SelectionIncomplete,
            3003 => ErrorCode::RateMissing,
            3004 => ErrorCode::RoomUnavailable,
            3005 => ErrorCode::CapacityExceeded,

            4001 => ErrorCode::RangeInvalid,
            4002 => ErrorCode::RateConflict,
            4003 => ErrorCode::RateNotFound,

            5001 => ErrorCode::PaymentFailed,
            5002 => ErrorCode::PaymentNotFound,

            6001 => ErrorCode::RoomNotFound,
            6002 => ErrorCode::RoomSlugTaken,

            7001 => ErrorCode::ReservationNotFound,
            7002 => ErrorCode::ReservationCancelled,

            8001 => ErrorCode::SyncFailed,
            8002 => ErrorCode::SyncLogNotFound,

            9001 => ErrorCode::InternalError,
            9002 => ErrorCode::DatabaseError,
            9003 => ErrorCode::BackendUnavailable,
            9004 => ErrorCode::TimeoutError,
            9005 => ErrorCode::ConfigError,

            other => return Err(InvalidErrorCode(other)),
        };
        Ok(code)
    }
}
