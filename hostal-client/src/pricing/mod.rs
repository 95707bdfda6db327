//! Client-side pricing core
//!
//! The quote engine validates locally, derives the residency/payment
//! flags, asks the backend preview for the authoritative nightly
//! prices, and applies results under last-write-wins supersession.

mod resolver;

pub use resolver::{QuoteEngine, QuoteRequest, QuoteSource, QuoteState};
