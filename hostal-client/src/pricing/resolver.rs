//! Quote engine
//!
//! Recomputes the reservation quote whenever the stay or the pricing
//! selection changes. Validation failures never contact the backend.
//! Each computation carries a monotonically increasing sequence number;
//! only the latest issued computation may publish its result, so a slow
//! response can never overwrite a newer one. In-flight requests are not
//! aborted; their results are discarded on arrival.

use crate::error::{ClientError, ClientResult};
use crate::schedule::Coalescer;
use async_trait::async_trait;
use shared::booking::{PricingFlags, PricingSelection, ReservationQuote, Stay};
use shared::error::AppError;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;

/// Everything the preview endpoint needs
#[derive(Debug, Clone)]
pub struct QuoteRequest {
    /// Hostel slug for the public route
    pub hostel: String,
    pub stay: Stay,
    pub flags: PricingFlags,
}

/// Source of authoritative quotes
///
/// Implemented by [`crate::HostalClient`] against the backend preview
/// endpoint; tests substitute an in-memory rate table.
#[async_trait]
pub trait QuoteSource: Send + Sync {
    async fn preview(&self, req: &QuoteRequest) -> ClientResult<ReservationQuote>;
}

/// Current outcome of the quote computation
///
/// One-of by construction: a total is never representable next to an
/// error message.
#[derive(Debug, Clone, Default)]
pub enum QuoteState {
    /// Nothing computed yet, or inputs were cleared
    #[default]
    Empty,
    /// Latest computation succeeded
    Ready(ReservationQuote),
    /// Latest computation failed; the previous quote is gone
    Failed(AppError),
}

impl QuoteState {
    pub fn quote(&self) -> Option<&ReservationQuote> {
        match self {
            Self::Ready(quote) => Some(quote),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&AppError> {
        match self {
            Self::Failed(err) => Some(err),
            _ => None,
        }
    }
}

/// Recomputes quotes with last-write-wins supersession
pub struct QuoteEngine<S> {
    source: Arc<S>,
    hostel: String,
    seq: AtomicU64,
    state: Mutex<QuoteState>,
}

impl<S: QuoteSource> QuoteEngine<S> {
    pub fn new(source: Arc<S>, hostel: impl Into<String>) -> Self {
        Self {
            source,
            hostel: hostel.into(),
            seq: AtomicU64::new(0),
            state: Mutex::new(QuoteState::Empty),
        }
    }

    /// Snapshot of the current quote state
    pub fn state(&self) -> QuoteState {
        self.state.lock().expect("quote state poisoned").clone()
    }

    /// Drop the current quote and invalidate any in-flight computation
    pub fn clear(&self) {
        self.seq.fetch_add(1, Ordering::SeqCst);
        *self.state.lock().expect("quote state poisoned") = QuoteState::Empty;
    }

    /// Recompute the quote for the given inputs
    ///
    /// Returns the state as seen after this computation settled. If a
    /// newer computation started meanwhile, that newer state is
    /// returned and this result is discarded.
    pub async fn recompute(&self, stay: Stay, selection: PricingSelection) -> QuoteState {
        let seq = self.seq.fetch_add(1, Ordering::SeqCst) + 1;

        // Local validation blocks submission without contacting the backend
        let flags = match stay.validate().and_then(|_| selection.flags()) {
            Ok(flags) => flags,
            Err(err) => return self.publish(seq, QuoteState::Failed(err)),
        };

        let req = QuoteRequest {
            hostel: self.hostel.clone(),
            stay,
            flags,
        };
        let next = match self.source.preview(&req).await {
            Ok(quote) => match quote.verify_coverage(&stay) {
                Ok(()) => QuoteState::Ready(quote),
                Err(err) => QuoteState::Failed(err),
            },
            Err(err) => QuoteState::Failed(self.map_source_error(err)),
        };
        self.publish(seq, next)
    }

    fn map_source_error(&self, err: ClientError) -> AppError {
        let app: AppError = err.into();
        if app.is_unauthorized() {
            tracing::warn!("quote preview rejected with an auth error");
        }
        app
    }

    fn publish(&self, seq: u64, next: QuoteState) -> QuoteState {
        let mut state = self.state.lock().expect("quote state poisoned");
        if self.seq.load(Ordering::SeqCst) != seq {
            tracing::debug!(seq, "discarding superseded quote result");
            return state.clone();
        }
        *state = next;
        state.clone()
    }
}

impl<S: QuoteSource + 'static> QuoteEngine<S> {
    /// Debounced recomputation through the shared scheduler
    ///
    /// All input changes funnel through the same key, so a burst of
    /// rapid edits issues at most one computation.
    pub fn schedule_recompute(
        self: &Arc<Self>,
        coalescer: &Coalescer,
        stay: Stay,
        selection: PricingSelection,
    ) -> JoinHandle<bool> {
        let engine = Arc::clone(self);
        coalescer.schedule("quote", async move {
            engine.recompute(stay, selection).await;
        })
    }
}
