//! Shared types for the Hostal booking platform
//!
//! Domain models, the unified error system, booking/pricing types and
//! wire DTOs used by both the public booking flow and the back-office
//! dashboard. The remote backend owns all real state; these types mirror
//! its HTTP contract.

pub mod booking;
pub mod client;
pub mod error;
pub mod models;
pub mod request;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use booking::{
    LoyaltyTier, PaymentMethod, PriceBreakdownLine, PriceOption, PricingSelection,
    ReservationQuote, SelectionChange, Stay,
};
pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
