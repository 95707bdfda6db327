//! Day-price store seam
//!
//! The grid editor and the bulk flow talk to the backend through this
//! trait; tests substitute an in-memory table.

use crate::client::HostalClient;
use crate::error::ClientResult;
use async_trait::async_trait;
use chrono::NaiveDate;
use shared::client::{BulkUpsertRequest, BulkWritten, ConflictCheckRequest, DayPriceUpsert};
use shared::models::{DayPrice, DayPricePatch, RoomDayPrices};

/// Read/write access to the day-price grid
///
/// The backend owns the table; no implementation caches
/// authoritatively. Range reads use `[from, to)`; conflict checks and
/// bulk writes use `[from, to]` inclusive.
#[async_trait]
pub trait DayPriceStore: Send + Sync {
    async fn get_range(
        &self,
        room_ids: &[i64],
        from: NaiveDate,
        to: NaiveDate,
    ) -> ClientResult<Vec<RoomDayPrices>>;

    async fn upsert_single(&self, upsert: &DayPriceUpsert) -> ClientResult<DayPrice>;

    async fn patch_cell(&self, id: i64, patch: &DayPricePatch) -> ClientResult<DayPrice>;

    async fn check_conflicts(&self, req: &ConflictCheckRequest) -> ClientResult<bool>;

    async fn bulk_upsert(&self, req: &BulkUpsertRequest) -> ClientResult<BulkWritten>;
}

#[async_trait]
impl DayPriceStore for HostalClient {
    async fn get_range(
        &self,
        room_ids: &[i64],
        from: NaiveDate,
        to: NaiveDate,
    ) -> ClientResult<Vec<RoomDayPrices>> {
        self.day_price_range(room_ids, from, to).await
    }

    async fn upsert_single(&self, upsert: &DayPriceUpsert) -> ClientResult<DayPrice> {
        self.upsert_day_price(upsert).await
    }

    async fn patch_cell(&self, id: i64, patch: &DayPricePatch) -> ClientResult<DayPrice> {
        self.patch_day_price(id, patch).await
    }

    async fn check_conflicts(&self, req: &ConflictCheckRequest) -> ClientResult<bool> {
        self.check_day_price_conflicts(req).await
    }

    async fn bulk_upsert(&self, req: &BulkUpsertRequest) -> ClientResult<BulkWritten> {
        self.bulk_upsert_day_prices(req).await
    }
}
