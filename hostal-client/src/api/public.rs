//! Public booking-flow endpoints (no authentication)

use crate::client::HostalClient;
use crate::error::{ClientError, ClientResult};
use crate::http::HttpClient;
use crate::pricing::{QuoteRequest, QuoteSource};
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::booking::ReservationQuote;
use shared::client::{CreatedReservation, ReservationRequest};
use shared::error::AppError;
use shared::models::{HostelAvailability, Reservation, Room};
use validator::Validate;

impl HostalClient {
    /// Hostels with rooms still available for the searched range
    pub async fn search_availability(
        &self,
        from: NaiveDate,
        to: NaiveDate,
        guests: u32,
    ) -> ClientResult<Vec<HostelAvailability>> {
        if from >= to {
            return Err(AppError::invalid_range("check-out must be after check-in").into());
        }
        self.http
            .get(&format!(
                "public/hostels?from={}&to={}&guests={}",
                from, to, guests
            ))
            .await
    }

    /// Rooms of one hostel
    pub async fn public_rooms(&self, hostel_slug: &str) -> ClientResult<Vec<Room>> {
        self.http
            .get(&format!("public/hostels/{}/rooms", hostel_slug))
            .await
    }

    /// One room by slug
    pub async fn public_room(&self, hostel_slug: &str, room_slug: &str) -> ClientResult<Room> {
        self.http
            .get(&format!(
                "public/hostels/{}/rooms/{}",
                hostel_slug, room_slug
            ))
            .await
    }

    /// Price preview for a stay under the derived pricing flags
    ///
    /// The returned nightly prices already reflect residency and
    /// payment method; nothing is recomputed locally.
    pub async fn preview_quote(&self, req: &QuoteRequest) -> ClientResult<ReservationQuote> {
        let flags = &req.flags;
        let stay = &req.stay;
        let path = format!(
            "public/hostels/preview/{}/{}?from={}&to={}&guests={}&isResident={}&paymentMethod={}&hasLoyaltyCard={}&loyaltyTier={}",
            req.hostel,
            stay.room_id,
            stay.from,
            stay.to,
            stay.guests,
            flags.is_resident,
            flags.payment_method.as_str(),
            flags.has_loyalty_card,
            flags.loyalty_tier.map(|t| t.as_str()).unwrap_or_default(),
        );
        self.http.get(&path).await
    }

    /// Create a reservation from the public booking form
    ///
    /// Guest details are validated locally before the backend is
    /// contacted.
    pub async fn create_reservation(
        &self,
        hostel_slug: &str,
        req: &ReservationRequest,
    ) -> ClientResult<CreatedReservation> {
        req.validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        self.http
            .post(&format!("public/hostels/{}/reservations", hostel_slug), req)
            .await
    }

    /// Reservations previously made with an email address
    pub async fn lookup_reservations(&self, email: &str) -> ClientResult<Vec<Reservation>> {
        self.http
            .get(&format!(
                "public/hostels/reservations/lookup?email={}",
                urlencode(email)
            ))
            .await
    }
}

#[async_trait]
impl QuoteSource for HostalClient {
    async fn preview(&self, req: &QuoteRequest) -> ClientResult<ReservationQuote> {
        self.preview_quote(req).await
    }
}

/// Minimal percent-encoding for query values (emails)
fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            other => out.push_str(&format!("%{:02X}", other)),
        }
    }
    out
}
