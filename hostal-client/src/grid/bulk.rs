//! Bulk-edit flow
//!
//! Drives the administrator's bulk rate/capacity write:
//! `Idle → Validating → (ConflictCheck → ConflictPrompt | ) →
//! Submitting → Idle`. The prompt is skipped entirely when no targeted
//! cell is populated. The write itself is one batch call with a single
//! aggregated outcome, never a silent partial failure.

use crate::grid::store::DayPriceStore;
use chrono::NaiveDate;
use shared::client::{BulkUpsertRequest, BulkWritten, ConflictCheckRequest};
use shared::error::{AppError, AppResult};
use shared::models::DayPricePatch;
use std::sync::Arc;

/// Where the flow currently stands
#[derive(Debug, Clone)]
pub enum BulkEditState {
    Idle,
    /// Conflicts were found; waiting for the administrator's choice
    AwaitingChoice(BulkUpsertRequest),
}

/// Outcome of a submit
#[derive(Debug)]
pub enum BulkSubmit {
    /// No conflicts; the batch was written
    Applied(BulkWritten),
    /// Populated cells found; resolve with [`BulkEditFlow::resolve`]
    ConflictPrompt,
}

/// Administrator's answer to the conflict prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictChoice {
    /// Replace every cell in range
    Overwrite,
    /// Only fill cells with no price and no capacity
    FillGaps,
    /// Abandon the bulk edit
    Cancel,
}

/// State machine for the bulk-edit admin flow
pub struct BulkEditFlow<S> {
    store: Arc<S>,
    state: BulkEditState,
}

impl<S: DayPriceStore> BulkEditFlow<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            state: BulkEditState::Idle,
        }
    }

    pub fn state(&self) -> &BulkEditState {
        &self.state
    }

    /// Validate and submit a bulk write over rooms × `[from, to]`
    ///
    /// Validation failures resolve locally without contacting the
    /// backend. When any targeted cell is populated the flow parks in
    /// [`BulkEditState::AwaitingChoice`] and the caller must
    /// [`resolve`](Self::resolve); otherwise the batch goes straight
    /// through as a gap fill.
    pub async fn submit(
        &mut self,
        room_ids: Vec<i64>,
        from: NaiveDate,
        to: NaiveDate,
        patch: DayPricePatch,
    ) -> AppResult<BulkSubmit> {
        if !matches!(self.state, BulkEditState::Idle) {
            return Err(AppError::invalid_request(
                "a bulk edit is already awaiting a conflict choice",
            ));
        }

        // Validating
        if from > to {
            return Err(AppError::invalid_range("from must not be after to"));
        }
        if room_ids.is_empty() {
            return Err(AppError::invalid_request("no rooms selected"));
        }
        if patch.is_empty() {
            return Err(AppError::invalid_request("nothing to write"));
        }

        // ConflictCheck
        let probe = ConflictCheckRequest {
            room_ids: room_ids.clone(),
            from,
            to,
        };
        let has_conflicts = self
            .store
            .check_conflicts(&probe)
            .await
            .map_err(AppError::from)?;

        let request = BulkUpsertRequest {
            room_ids,
            from,
            to,
            price: patch.price,
            available_capacity: patch.available_capacity,
            overwrite: false,
        };

        if has_conflicts {
            tracing::debug!(cells = request.cell_count(), "bulk edit hit populated cells");
            self.state = BulkEditState::AwaitingChoice(request);
            return Ok(BulkSubmit::ConflictPrompt);
        }

        // Submitting
        self.run_batch(request).await.map(BulkSubmit::Applied)
    }

    /// Answer the conflict prompt
    ///
    /// Returns `None` when the administrator cancelled.
    pub async fn resolve(&mut self, choice: ConflictChoice) -> AppResult<Option<BulkWritten>> {
        let BulkEditState::AwaitingChoice(mut request) =
            std::mem::replace(&mut self.state, BulkEditState::Idle)
        else {
            return Err(AppError::invalid_request("no conflict prompt to resolve"));
        };

        match choice {
            ConflictChoice::Cancel => Ok(None),
            ConflictChoice::Overwrite => {
                request.overwrite = true;
                self.run_batch(request).await.map(Some)
            }
            ConflictChoice::FillGaps => {
                request.overwrite = false;
                self.run_batch(request).await.map(Some)
            }
        }
    }

    async fn run_batch(&mut self, request: BulkUpsertRequest) -> AppResult<BulkWritten> {
        self.state = BulkEditState::Idle;
        match self.store.bulk_upsert(&request).await {
            Ok(written) => {
                tracing::info!(written = written.written, "bulk day-price write applied");
                Ok(written)
            }
            Err(err) => {
                let error = AppError::from(err);
                tracing::error!(code = %error.code, "bulk day-price write failed");
                Err(error)
            }
        }
    }
}
