//! Day Price Model

use super::room::RoomSummary;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Nightly rate and remaining capacity for one (room, date) pair
///
/// At most one record exists per (room, date). A date with no record has
/// no defined price: consumers must treat the gap as an error, never
/// default it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPrice {
    pub id: i64,
    pub room_id: i64,
    /// Calendar day, no time component
    pub date: NaiveDate,
    /// Nightly rate; `None` means the cell exists but carries no price
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
    /// Bookable capacity for the day; `None` means "use room capacity"
    pub available_capacity: Option<u32>,
}

impl DayPrice {
    /// Whether this cell holds any value a bulk overwrite would destroy
    pub fn is_populated(&self) -> bool {
        self.price.is_some() || self.available_capacity.is_some()
    }
}

/// Partial update for a single day-price cell
///
/// Omitted fields are left unchanged by the backend.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPricePatch {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_capacity: Option<u32>,
}

impl DayPricePatch {
    /// Patch setting only the price
    pub fn price(price: Decimal) -> Self {
        Self {
            price: Some(price),
            ..Self::default()
        }
    }

    /// Patch setting only the available capacity
    pub fn capacity(capacity: u32) -> Self {
        Self {
            available_capacity: Some(capacity),
            ..Self::default()
        }
    }

    /// True when the patch carries no field at all
    pub fn is_empty(&self) -> bool {
        self.price.is_none() && self.available_capacity.is_none()
    }
}

/// One room's day prices within a requested range (gaps allowed)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDayPrices {
    pub room: RoomSummary,
    /// Date-ascending; dates without a record are simply absent
    pub prices: Vec<DayPrice>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::prelude::*;

    fn cell(price: Option<f64>, capacity: Option<u32>) -> DayPrice {
        DayPrice {
            id: 1,
            room_id: 1,
            date: NaiveDate::from_ymd_opt(2025, 7, 1).unwrap(),
            price: price.map(|p| Decimal::from_f64(p).unwrap()),
            available_capacity: capacity,
        }
    }

    #[test]
    fn test_is_populated() {
        assert!(!cell(None, None).is_populated());
        assert!(cell(Some(80.0), None).is_populated());
        assert!(cell(None, Some(4)).is_populated());
        assert!(cell(Some(80.0), Some(4)).is_populated());
    }

    #[test]
    fn test_patch_skips_omitted_fields() {
        let patch = DayPricePatch::price(Decimal::from(100));
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"price":100.0}"#);

        let patch = DayPricePatch::capacity(6);
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"availableCapacity":6}"#);
    }

    #[test]
    fn test_patch_is_empty() {
        assert!(DayPricePatch::default().is_empty());
        assert!(!DayPricePatch::capacity(1).is_empty());
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{"id":7,"roomId":2,"date":"2025-07-01","price":85.5,"availableCapacity":3}"#;
        let cell: DayPrice = serde_json::from_str(json).unwrap();
        assert_eq!(cell.room_id, 2);
        assert_eq!(cell.available_capacity, Some(3));
        assert_eq!(cell.price, Decimal::from_f64(85.5));
    }
}
