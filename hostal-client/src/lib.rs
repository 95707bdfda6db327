//! Hostal Client - typed HTTP client for the booking backend
//!
//! Provides network-based HTTP calls to the reservation backend (which
//! owns all real state) plus the client-side core logic: the quote
//! engine with stale-result supersession, the day-price grid editor,
//! the bulk-edit flow, and the coalescing scheduler they both use.

pub mod api;
pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod grid;
pub mod http;
pub mod pricing;
pub mod schedule;

pub use auth::{NoToken, StaticToken, TokenProvider};
pub use client::HostalClient;
pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use grid::{BulkEditFlow, BulkEditState, BulkSubmit, ConflictChoice, DayPriceStore, GridEditor};
pub use pricing::{QuoteEngine, QuoteRequest, QuoteSource, QuoteState};
pub use schedule::Coalescer;

// Re-export shared types for convenience
pub use shared::booking::{PricingSelection, ReservationQuote, SelectionChange, Stay};
