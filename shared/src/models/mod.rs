//! Data models
//!
//! Shared between the booking flow, the dashboard and the remote backend
//! (via API). Wire field names are camelCase, matching the backend
//! contract. All IDs are backend-issued `i64`.

pub mod channel_sync;
pub mod day_price;
pub mod guest;
pub mod hostel;
pub mod operator;
pub mod payment;
pub mod report;
pub mod reservation;
pub mod room;

// Re-exports
pub use channel_sync::*;
pub use day_price::*;
pub use guest::*;
pub use hostel::*;
pub use operator::*;
pub use payment::*;
pub use report::*;
pub use reservation::*;
pub use room::*;
