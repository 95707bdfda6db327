//! In-memory test doubles for the backend-owned state

// Each test binary uses its own subset of these helpers.
#![allow(dead_code)]

use async_trait::async_trait;
use chrono::NaiveDate;
use hostal_client::{ClientError, ClientResult, DayPriceStore, QuoteRequest, QuoteSource};
use rust_decimal::Decimal;
use shared::booking::{PriceBreakdownLine, ReservationQuote};
use shared::client::{BulkUpsertRequest, BulkWritten, ConflictCheckRequest, DayPriceUpsert};
use shared::error::AppError;
use shared::models::{DayPrice, DayPricePatch, RoomDayPrices, RoomSummary};
use std::collections::BTreeMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicI64, AtomicU32, Ordering};

/// Backend-in-a-box: a day-price table keyed by (room, date)
pub struct MemoryStore {
    rooms: Vec<RoomSummary>,
    cells: Mutex<BTreeMap<(i64, NaiveDate), DayPrice>>,
    next_id: AtomicI64,
    fail_patches: AtomicBool,
    fail_bulk: AtomicBool,
    patch_calls: AtomicU32,
}

impl MemoryStore {
    pub fn new(rooms: Vec<RoomSummary>) -> Self {
        Self {
            rooms,
            cells: Mutex::new(BTreeMap::new()),
            next_id: AtomicI64::new(1),
            fail_patches: AtomicBool::new(false),
            fail_bulk: AtomicBool::new(false),
            patch_calls: AtomicU32::new(0),
        }
    }

    pub fn seed(&self, room_id: i64, date: NaiveDate, price: Option<f64>, capacity: Option<u32>) -> i64 {
        use rust_decimal::prelude::FromPrimitive;
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        self.cells.lock().unwrap().insert(
            (room_id, date),
            DayPrice {
                id,
                room_id,
                date,
                price: price.and_then(Decimal::from_f64),
                available_capacity: capacity,
            },
        );
        id
    }

    pub fn cell_by_id(&self, id: i64) -> Option<DayPrice> {
        self.cells
            .lock()
            .unwrap()
            .values()
            .find(|c| c.id == id)
            .cloned()
    }

    pub fn set_fail_patches(&self, fail: bool) {
        self.fail_patches.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_bulk(&self, fail: bool) {
        self.fail_bulk.store(fail, Ordering::SeqCst);
    }

    pub fn patch_calls(&self) -> u32 {
        self.patch_calls.load(Ordering::SeqCst)
    }

    fn room_ids_or_all(&self, room_ids: &[i64]) -> Vec<i64> {
        if room_ids.is_empty() {
            self.rooms.iter().map(|r| r.id).collect()
        } else {
            room_ids.to_vec()
        }
    }
}

#[async_trait]
impl DayPriceStore for MemoryStore {
    async fn get_range(
        &self,
        room_ids: &[i64],
        from: NaiveDate,
        to: NaiveDate,
    ) -> ClientResult<Vec<RoomDayPrices>> {
        if from >= to {
            return Err(AppError::invalid_range("from must be before to").into());
        }
        let cells = self.cells.lock().unwrap();
        let wanted = self.room_ids_or_all(room_ids);
        let rows = self
            .rooms
            .iter()
            .filter(|room| wanted.contains(&room.id))
            .map(|room| RoomDayPrices {
                room: room.clone(),
                prices: cells
                    .range((room.id, from)..(room.id, to))
                    .map(|(_, cell)| cell.clone())
                    .collect(),
            })
            .collect();
        Ok(rows)
    }

    async fn upsert_single(&self, upsert: &DayPriceUpsert) -> ClientResult<DayPrice> {
        let mut cells = self.cells.lock().unwrap();
        let key = (upsert.room_id, upsert.date);
        let cell = cells.entry(key).or_insert_with(|| DayPrice {
            id: self.next_id.fetch_add(1, Ordering::SeqCst),
            room_id: upsert.room_id,
            date: upsert.date,
            price: None,
            available_capacity: None,
        });
        // Partial update: omitted fields stay as they were
        if let Some(price) = upsert.price {
            cell.price = Some(price);
        }
        if let Some(capacity) = upsert.available_capacity {
            cell.available_capacity = Some(capacity);
        }
        Ok(cell.clone())
    }

    async fn patch_cell(&self, id: i64, patch: &DayPricePatch) -> ClientResult<DayPrice> {
        self.patch_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_patches.load(Ordering::SeqCst) {
            return Err(ClientError::Backend("injected write failure".into()));
        }
        let mut cells = self.cells.lock().unwrap();
        let cell = cells
            .values_mut()
            .find(|c| c.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("day price {}", id)))?;
        if let Some(price) = patch.price {
            cell.price = Some(price);
        }
        if let Some(capacity) = patch.available_capacity {
            cell.available_capacity = Some(capacity);
        }
        Ok(cell.clone())
    }

    async fn check_conflicts(&self, req: &ConflictCheckRequest) -> ClientResult<bool> {
        let cells = self.cells.lock().unwrap();
        for room_id in self.room_ids_or_all(&req.room_ids) {
            let mut date = req.from;
            while date <= req.to {
                if cells.get(&(room_id, date)).is_some_and(|c| c.is_populated()) {
                    return Ok(true);
                }
                date = date.succ_opt().expect("date overflow");
            }
        }
        Ok(false)
    }

    async fn bulk_upsert(&self, req: &BulkUpsertRequest) -> ClientResult<BulkWritten> {
        if self.fail_bulk.load(Ordering::SeqCst) {
            return Err(ClientError::Backend("injected bulk failure".into()));
        }
        let mut cells = self.cells.lock().unwrap();
        let mut written = 0;
        for room_id in self.room_ids_or_all(&req.room_ids) {
            let mut date = req.from;
            while date <= req.to {
                let key = (room_id, date);
                let populated = cells.get(&key).is_some_and(|c| c.is_populated());
                if req.overwrite || !populated {
                    let id = cells
                        .get(&key)
                        .map(|c| c.id)
                        .unwrap_or_else(|| self.next_id.fetch_add(1, Ordering::SeqCst));
                    cells.insert(
                        key,
                        DayPrice {
                            id,
                            room_id,
                            date,
                            price: req.price,
                            available_capacity: req.available_capacity,
                        },
                    );
                    written += 1;
                }
                date = date.succ_opt().expect("date overflow");
            }
        }
        Ok(BulkWritten { written })
    }
}

/// Quote source backed by a fixed guest-aware rate table
///
/// Dates missing from the table are simply absent from the breakdown,
/// like a backend facing an unpopulated grid.
pub struct TableSource {
    rates: BTreeMap<(i64, NaiveDate), Decimal>,
    pub calls: AtomicU32,
}

impl TableSource {
    pub fn new() -> Self {
        Self {
            rates: BTreeMap::new(),
            calls: AtomicU32::new(0),
        }
    }

    pub fn with_rate(mut self, room_id: i64, date: NaiveDate, final_price: f64) -> Self {
        use rust_decimal::prelude::FromPrimitive;
        self.rates.insert(
            (room_id, date),
            Decimal::from_f64(final_price).expect("finite rate"),
        );
        self
    }
}

#[async_trait]
impl QuoteSource for TableSource {
    async fn preview(&self, req: &QuoteRequest) -> ClientResult<ReservationQuote> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let breakdown: Vec<PriceBreakdownLine> = req
            .stay
            .dates()
            .filter_map(|date| {
                self.rates
                    .get(&(req.stay.room_id, date))
                    .map(|price| PriceBreakdownLine {
                        date,
                        final_price: *price,
                    })
            })
            .collect();
        let total = breakdown.iter().map(|l| l.final_price).sum();
        Ok(ReservationQuote { total, breakdown })
    }
}

pub fn room(id: i64, name: &str, capacity: u32) -> RoomSummary {
    RoomSummary {
        id,
        name: name.to_string(),
        capacity,
    }
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
