//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 3xxx: Booking errors
/// - 4xxx: Rate/grid errors
/// - 5xxx: Payment errors
/// - 6xxx: Room errors
/// - 7xxx: Reservation errors
/// - 8xxx: Channel-sync errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Booking errors (3xxx)
    Booking,
    /// Rate/grid errors (4xxx)
    Rates,
    /// Payment errors (5xxx)
    Payment,
    /// Room errors (6xxx)
    Room,
    /// Reservation errors (7xxx)
    Reservation,
    /// Channel-sync errors (8xxx)
    ChannelSync,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Booking,
            4000..5000 => Self::Rates,
            5000..6000 => Self::Payment,
            6000..7000 => Self::Room,
            7000..8000 => Self::Reservation,
            8000..9000 => Self::ChannelSync,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Booking => "booking",
            Self::Rates => "rates",
            Self::Payment => "payment",
            Self::Room => "room",
            Self::Reservation => "reservation",
            Self::ChannelSync => "channel_sync",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}
