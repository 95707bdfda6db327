//! Payment endpoints (dashboard)

use crate::client::HostalClient;
use crate::error::ClientResult;
use crate::http::HttpClient;
use shared::models::{Payment, PaymentCreate};
use shared::request::{DateRangeQuery, PaginationQuery};

impl HostalClient {
    /// Payments collected within a range
    pub async fn payments(
        &self,
        range: DateRangeQuery,
        page: PaginationQuery,
    ) -> ClientResult<Vec<Payment>> {
        self.http
            .get(&format!(
                "payments?from={}&to={}&page={}",
                range.from, range.to, page.page
            ))
            .await
    }

    /// Payments recorded against one reservation
    pub async fn reservation_payments(&self, reservation_id: i64) -> ClientResult<Vec<Payment>> {
        self.http
            .get(&format!("payments/reservation/{}", reservation_id))
            .await
    }

    /// Register a payment against a reservation
    pub async fn add_payment(
        &self,
        reservation_id: i64,
        req: &PaymentCreate,
    ) -> ClientResult<Payment> {
        self.http
            .post(&format!("reservations/{}/payments", reservation_id), req)
            .await
    }
}
