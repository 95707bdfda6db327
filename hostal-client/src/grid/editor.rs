//! Per-cell grid editor
//!
//! Optimistic editing of loaded day-price cells. Each (cell, field)
//! pair debounces independently through the shared [`Coalescer`], so a
//! burst of keystrokes issues exactly one write carrying the final
//! value. A failed write rolls the cell back to the last value the
//! backend acknowledged and emits a non-blocking failure notice.

use crate::error::ClientResult;
use crate::grid::store::DayPriceStore;
use crate::schedule::Coalescer;
use chrono::NaiveDate;
use dashmap::DashMap;
use rust_decimal::Decimal;
use shared::error::AppError;
use shared::models::{DayPrice, DayPricePatch, RoomDayPrices};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Notice emitted when a cell write fails and is rolled back
#[derive(Debug)]
pub struct EditFailure {
    pub cell_id: i64,
    pub error: AppError,
}

#[derive(Debug, Clone)]
struct CellState {
    /// What the UI shows right now (may be ahead of the backend)
    current: DayPrice,
    /// Last value the backend acknowledged
    committed: DayPrice,
    /// Bumped on every edit; stale writes compare against it
    revision: u64,
}

/// Optimistic per-cell editor over the day-price grid
pub struct GridEditor<S> {
    store: Arc<S>,
    coalescer: Coalescer,
    cells: Arc<DashMap<i64, CellState>>,
    failures: Mutex<Option<mpsc::UnboundedSender<EditFailure>>>,
}

impl<S: DayPriceStore + 'static> GridEditor<S> {
    pub fn new(store: Arc<S>, coalescer: Coalescer) -> Self {
        Self {
            store,
            coalescer,
            cells: Arc::new(DashMap::new()),
            failures: Mutex::new(None),
        }
    }

    /// Receive non-blocking failure notices (one receiver at a time)
    pub fn subscribe_failures(&self) -> mpsc::UnboundedReceiver<EditFailure> {
        let (tx, rx) = mpsc::unbounded_channel();
        *self.failures.lock().expect("failure sink poisoned") = Some(tx);
        rx
    }

    /// Load cells for a range, replacing any previously loaded state
    ///
    /// Every load reflects backend state at request time; nothing local
    /// is authoritative.
    pub async fn load(
        &self,
        room_ids: &[i64],
        from: NaiveDate,
        to: NaiveDate,
    ) -> ClientResult<Vec<RoomDayPrices>> {
        let rows = self.store.get_range(room_ids, from, to).await?;
        self.cells.clear();
        for row in &rows {
            for price in &row.prices {
                self.cells.insert(
                    price.id,
                    CellState {
                        current: price.clone(),
                        committed: price.clone(),
                        revision: 0,
                    },
                );
            }
        }
        Ok(rows)
    }

    /// Snapshot of one cell as the UI should render it
    pub fn cell(&self, id: i64) -> Option<DayPrice> {
        self.cells.get(&id).map(|state| state.current.clone())
    }

    /// Edit the nightly price of a loaded cell
    pub fn edit_price(&self, id: i64, value: Decimal) -> ClientResult<JoinHandle<bool>> {
        self.edit(id, "price", DayPricePatch::price(value))
    }

    /// Edit the available capacity of a loaded cell
    pub fn edit_capacity(&self, id: i64, value: u32) -> ClientResult<JoinHandle<bool>> {
        self.edit(id, "capacity", DayPricePatch::capacity(value))
    }

    fn edit(
        &self,
        id: i64,
        field: &str,
        patch: DayPricePatch,
    ) -> ClientResult<JoinHandle<bool>> {
        let revision = {
            let mut cell = self
                .cells
                .get_mut(&id)
                .ok_or_else(|| AppError::with_message(
                    shared::error::ErrorCode::RateNotFound,
                    format!("cell {} is not loaded", id),
                ))?;
            apply_patch(&mut cell.current, &patch);
            cell.revision += 1;
            cell.revision
        };

        let store = Arc::clone(&self.store);
        let cells = Arc::clone(&self.cells);
        let failures = self
            .failures
            .lock()
            .expect("failure sink poisoned")
            .clone();
        let handle = self
            .coalescer
            .schedule(format!("cell:{}:{}", id, field), async move {
                match store.patch_cell(id, &patch).await {
                    Ok(updated) => {
                        if let Some(mut cell) = cells.get_mut(&id) {
                            cell.committed = updated.clone();
                            // Only adopt the backend's view if no newer edit landed
                            if cell.revision == revision {
                                cell.current = updated;
                            }
                        }
                    }
                    Err(err) => {
                        let error: AppError = err.into();
                        tracing::warn!(
                            cell = id,
                            code = %error.code,
                            "cell write failed, rolling back"
                        );
                        if let Some(mut cell) = cells.get_mut(&id) {
                            // Roll back unless the user already typed something newer
                            if cell.revision == revision {
                                cell.current = cell.committed.clone();
                            }
                        }
                        if let Some(tx) = failures {
                            let _ = tx.send(EditFailure { cell_id: id, error });
                        }
                    }
                }
            });
        Ok(handle)
    }
}

fn apply_patch(cell: &mut DayPrice, patch: &DayPricePatch) {
    if let Some(price) = patch.price {
        cell.price = Some(price);
    }
    if let Some(capacity) = patch.available_capacity {
        cell.available_capacity = Some(capacity);
    }
}
