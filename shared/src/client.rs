//! Client-related types shared between the frontend and the backend
//!
//! Common request/response types used in API communication. These
//! mirror the backend's wire contract (camelCase field names).

use crate::booking::{LoyaltyTier, PaymentMethod, PricingFlags, Stay};
use crate::models::Reservation;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserInfo,
}

/// User information
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserInfo {
    pub id: i64,
    pub username: String,
    pub role: String,
}

// =============================================================================
// Public booking DTOs
// =============================================================================

/// Create-reservation request for the public booking flow
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ReservationRequest {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(email(message = "invalid email"))]
    pub email: String,
    pub room_id: i64,
    pub from: NaiveDate,
    /// Exclusive check-out date
    pub to: NaiveDate,
    pub guests: u32,
    pub payment_method: PaymentMethod,
    pub is_resident: bool,
    pub has_loyalty_card: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loyalty_tier: Option<LoyaltyTier>,
    /// Language for the confirmation email
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,
}

impl ReservationRequest {
    /// Assemble a request from a stay, derived pricing flags and guest details
    pub fn new(
        stay: Stay,
        flags: PricingFlags,
        name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            room_id: stay.room_id,
            from: stay.from,
            to: stay.to,
            guests: stay.guests,
            payment_method: flags.payment_method,
            is_resident: flags.is_resident,
            has_loyalty_card: flags.has_loyalty_card,
            loyalty_tier: flags.loyalty_tier,
            lang: None,
        }
    }
}

/// Response to a successful reservation creation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedReservation {
    pub reservation: Reservation,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

// =============================================================================
// Day-price grid DTOs
// =============================================================================

/// Single-cell upsert (creates the cell when absent)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayPriceUpsert {
    pub room_id: i64,
    pub date: NaiveDate,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_capacity: Option<u32>,
}

/// Conflict probe before a bulk overwrite
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictCheckRequest {
    pub room_ids: Vec<i64>,
    pub from: NaiveDate,
    /// Inclusive end date (bulk ranges include their last day)
    pub to: NaiveDate,
}

/// Conflict probe result
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConflictCheckResponse {
    pub has_conflicts: bool,
}

/// Batch day-price write over rooms × dates
///
/// The range is inclusive of `to`, unlike a stay's check-out date.
/// With `overwrite` unset only unpopulated cells are filled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkUpsertRequest {
    pub room_ids: Vec<i64>,
    pub from: NaiveDate,
    pub to: NaiveDate,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::float_option"
    )]
    pub price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub available_capacity: Option<u32>,
    pub overwrite: bool,
}

impl BulkUpsertRequest {
    /// Number of cells targeted by this request (rooms × inclusive days)
    pub fn cell_count(&self) -> u64 {
        let days = (self.to - self.from).num_days() + 1;
        if days <= 0 {
            return 0;
        }
        self.room_ids.len() as u64 * days as u64
    }
}

/// Aggregated result of a bulk write
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkWritten {
    pub written: u64,
}
