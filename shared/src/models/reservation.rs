//! Reservation Model

use super::payment::Payment;
use super::room::RoomSummary;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Payment status of a reservation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    PartiallyPaid,
    Paid,
}

/// Reservation entity as returned by the dashboard endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: i64,
    pub room: RoomSummary,
    pub name: String,
    pub email: String,
    pub start_date: NaiveDate,
    /// Exclusive check-out date
    pub end_date: NaiveDate,
    pub guests: u32,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
    pub payment_status: PaymentStatus,
    pub cancelled: bool,
    #[serde(default)]
    pub payments: Vec<Payment>,
}

/// Manual reservation creation from the dashboard
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationCreate {
    pub room_id: i64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub guests: u32,
    pub name: String,
    pub email: String,
    /// Amount already collected at creation time (0 when unpaid)
    #[serde(with = "rust_decimal::serde::float")]
    pub amount_paid: Decimal,
}

/// Update reservation payload (dashboard edit form)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReservationUpdate {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub guests: Option<u32>,
    pub name: Option<String>,
    pub email: Option<String>,
}

/// Per-day occupancy of one room (dashboard availability calendar)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityDay {
    pub date: NaiveDate,
    /// Guests already booked for the night
    pub guests: u32,
}

/// One room's occupancy row in the hostel availability calendar
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarRoom {
    pub id: i64,
    pub name: String,
    pub capacity: u32,
    /// Date-ascending, one entry per day of the queried range
    pub availability: Vec<AvailabilityDay>,
}
