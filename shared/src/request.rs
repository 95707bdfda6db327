//! Request types for the shared crate
//!
//! Common query types used across the dashboard API surface.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Pagination query parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationQuery {
    /// Page number (1-based, default: 1)
    #[serde(default = "default_page")]
    pub page: u32,

    /// Items per page (default: 20, max: 100)
    #[serde(default = "default_per_page")]
    pub per_page: u32,
}

fn default_page() -> u32 {
    1
}

fn default_per_page() -> u32 {
    20
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: default_page(),
            per_page: default_per_page(),
        }
    }
}

impl PaginationQuery {
    pub fn page(page: u32) -> Self {
        Self {
            page,
            ..Self::default()
        }
    }

    /// Get the limit (clamped to max 100)
    pub fn limit(&self) -> u32 {
        std::cmp::min(self.per_page, 100)
    }
}

/// Date-range query parameters (`from`/`to` semantics are endpoint-specific)
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DateRangeQuery {
    pub from: NaiveDate,
    pub to: NaiveDate,
}

impl DateRangeQuery {
    pub fn new(from: NaiveDate, to: NaiveDate) -> Self {
        Self { from, to }
    }
}
