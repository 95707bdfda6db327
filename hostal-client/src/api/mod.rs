//! Endpoint wrappers for the backend HTTP contract
//!
//! One module per resource. All methods live on
//! [`crate::HostalClient`]; administrative calls carry the bearer token
//! supplied by the client's [`crate::TokenProvider`].

pub mod auth;
pub mod channel_sync;
pub mod day_prices;
pub mod guests;
pub mod operators;
pub mod payments;
pub mod public;
pub mod reservations;
pub mod rooms;
