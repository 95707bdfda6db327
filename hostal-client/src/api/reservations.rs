//! Reservation endpoints (dashboard)

use crate::client::HostalClient;
use crate::error::ClientResult;
use crate::http::HttpClient;
use shared::error::AppError;
use shared::models::{
    CalendarRoom, IncomeRow, OccupancyRow, Reservation, ReservationCreate, ReservationUpdate,
};
use shared::request::{DateRangeQuery, PaginationQuery};

impl HostalClient {
    /// Current (non-archived) reservations
    pub async fn reservations(&self) -> ClientResult<Vec<Reservation>> {
        self.http.get("reservations").await
    }

    pub async fn reservation(&self, id: i64) -> ClientResult<Reservation> {
        self.http.get(&format!("reservations/{}", id)).await
    }

    /// Create a reservation manually from the dashboard
    pub async fn create_manual_reservation(
        &self,
        req: &ReservationCreate,
    ) -> ClientResult<Reservation> {
        self.http.post("reservations", req).await
    }

    /// Edit stay dates, guest count or guest details
    pub async fn update_reservation(
        &self,
        id: i64,
        update: &ReservationUpdate,
    ) -> ClientResult<Reservation> {
        self.http
            .patch(&format!("reservations/{}", id), update)
            .await
    }

    /// Cancel a reservation (kept in history, never deleted)
    pub async fn cancel_reservation(&self, id: i64) -> ClientResult<Reservation> {
        self.http
            .post_empty(&format!("reservations/{}/cancel", id))
            .await
    }

    /// Past and cancelled reservations for a range
    pub async fn reservation_history(
        &self,
        range: DateRangeQuery,
        page: PaginationQuery,
    ) -> ClientResult<Vec<Reservation>> {
        self.http
            .get(&format!(
                "reservations/history?from={}&to={}&page={}",
                range.from, range.to, page.page
            ))
            .await
    }

    /// Per-room, per-day occupancy for the availability calendar
    pub async fn hostel_calendar(&self, range: DateRangeQuery) -> ClientResult<Vec<CalendarRoom>> {
        if range.from >= range.to {
            return Err(AppError::invalid_range("from must be before to").into());
        }
        self.http
            .get(&format!(
                "reservations/calendar/hostel?from={}&to={}",
                range.from, range.to
            ))
            .await
    }

    /// Income report rows for a range
    pub async fn income_report(&self, range: DateRangeQuery) -> ClientResult<Vec<IncomeRow>> {
        self.http
            .get(&format!(
                "reservations/income?from={}&to={}",
                range.from, range.to
            ))
            .await
    }

    /// Occupancy report rows for a range
    pub async fn occupancy_report(&self, range: DateRangeQuery) -> ClientResult<Vec<OccupancyRow>> {
        self.http
            .get(&format!(
                "reservations/occupancy?from={}&to={}",
                range.from, range.to
            ))
            .await
    }
}
