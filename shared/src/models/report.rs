//! Report Models

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Occupancy report row (one per room)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OccupancyRow {
    pub room: String,
    /// 0..=100, computed by the backend over the queried range
    pub occupancy_percentage: f64,
}

/// Income report row (one per period bucket)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeRow {
    pub period: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_income: Decimal,
}
