//! Day-price grid endpoints
//!
//! The grid is the only shared mutable resource and it is owned by the
//! backend; every read here reflects backend state at request time and
//! no local cache is authoritative.

use crate::client::HostalClient;
use crate::error::ClientResult;
use crate::http::HttpClient;
use chrono::NaiveDate;
use shared::client::{BulkUpsertRequest, BulkWritten, ConflictCheckRequest, ConflictCheckResponse, DayPriceUpsert};
use shared::error::AppError;
use shared::models::{DayPrice, DayPricePatch, RoomDayPrices};

impl HostalClient {
    /// Day prices for a set of rooms over `[from, to)` (gaps allowed)
    ///
    /// An empty `room_ids` slice means all rooms.
    pub async fn day_price_range(
        &self,
        room_ids: &[i64],
        from: NaiveDate,
        to: NaiveDate,
    ) -> ClientResult<Vec<RoomDayPrices>> {
        if from >= to {
            return Err(AppError::invalid_range("from must be before to").into());
        }
        let mut path = format!("day-prices/range?from={}&to={}", from, to);
        if !room_ids.is_empty() {
            path.push_str(&format!("&roomIds={}", join_ids(room_ids)));
        }
        self.http.get(&path).await
    }

    /// Create or update a single cell (the single-day editor)
    pub async fn upsert_day_price(&self, upsert: &DayPriceUpsert) -> ClientResult<DayPrice> {
        self.http.post("day-prices", upsert).await
    }

    /// Partially update one existing cell (the per-cell grid editor)
    ///
    /// Omitted fields are left unchanged by the backend.
    pub async fn patch_day_price(&self, id: i64, patch: &DayPricePatch) -> ClientResult<DayPrice> {
        if patch.is_empty() {
            return Err(AppError::invalid_request("patch carries no field").into());
        }
        self.http.patch(&format!("day-prices/{}", id), patch).await
    }

    /// Whether any targeted cell is already populated (`[from, to]` inclusive)
    pub async fn check_day_price_conflicts(
        &self,
        req: &ConflictCheckRequest,
    ) -> ClientResult<bool> {
        if req.from > req.to {
            return Err(AppError::invalid_range("from must not be after to").into());
        }
        let response: ConflictCheckResponse =
            self.http.post("day-prices/check-conflicts", req).await?;
        Ok(response.has_conflicts)
    }

    /// Batch write over rooms × days, `[from, to]` inclusive
    ///
    /// One aggregated result for the whole batch; the backend reports
    /// either every write applied or the failure, never a silent
    /// partial outcome.
    pub async fn bulk_upsert_day_prices(
        &self,
        req: &BulkUpsertRequest,
    ) -> ClientResult<BulkWritten> {
        if req.from > req.to {
            return Err(AppError::invalid_range("from must not be after to").into());
        }
        if req.room_ids.is_empty() {
            return Err(AppError::invalid_request("no rooms selected").into());
        }
        if req.price.is_none() && req.available_capacity.is_none() {
            return Err(AppError::invalid_request("nothing to write").into());
        }
        self.http.post("day-prices/bulk", req).await
    }
}

fn join_ids(ids: &[i64]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(",")
}
