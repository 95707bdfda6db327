//! Coalescing scheduler
//!
//! Debounced, keyed work scheduling: `schedule(key, work)` replaces any
//! pending work under the same key, so a burst of rapid calls runs the
//! work at most once, with whatever the last call captured. Used
//! identically for per-cell grid writes and quote recomputation.

use dashmap::DashMap;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Default debounce window for interactive edits
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(500);

/// Keyed debouncer with replace-on-reschedule semantics
///
/// Each key holds a generation counter. Scheduling bumps the
/// generation; when a task wakes after the delay it only runs if its
/// generation is still current. Superseded tasks are not aborted, they
/// simply decline to run.
#[derive(Clone)]
pub struct Coalescer {
    delay: Duration,
    pending: Arc<DashMap<String, u64>>,
}

impl Coalescer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: Arc::new(DashMap::new()),
        }
    }

    /// Schedule `work` to run after the debounce window
    ///
    /// Any work previously scheduled under the same key and not yet
    /// started is replaced. The returned handle resolves to `true` when
    /// the work ran, `false` when it was superseded or cancelled.
    pub fn schedule<F>(&self, key: impl Into<String>, work: F) -> JoinHandle<bool>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let key = key.into();
        let generation = {
            let mut entry = self.pending.entry(key.clone()).or_insert(0);
            *entry += 1;
            *entry
        };

        let pending = Arc::clone(&self.pending);
        let delay = self.delay;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let still_current = pending.get(&key).is_some_and(|g| *g == generation);
            if !still_current {
                tracing::debug!(key, generation, "coalesced work superseded before running");
                return false;
            }
            work.await;
            // Clear the entry unless a newer schedule already took the key
            pending.remove_if(&key, |_, g| *g == generation);
            true
        })
    }

    /// Drop any pending (not yet started) work for a key
    pub fn cancel(&self, key: &str) {
        self.pending.remove(key);
    }

    /// Number of keys with pending work
    pub fn pending_keys(&self) -> usize {
        self.pending.len()
    }
}

impl Default for Coalescer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test(start_paused = true)]
    async fn test_burst_runs_last_only() {
        let coalescer = Coalescer::new(Duration::from_millis(500));
        let ran = Arc::new(AtomicU32::new(0));
        let last = Arc::new(AtomicU32::new(0));

        let mut handles = Vec::new();
        for value in [80u32, 85, 90] {
            let ran = Arc::clone(&ran);
            let last = Arc::clone(&last);
            handles.push(coalescer.schedule("cell:1:price", async move {
                ran.fetch_add(1, Ordering::SeqCst);
                last.store(value, Ordering::SeqCst);
            }));
        }

        let outcomes: Vec<bool> = futures::future::join_all(handles)
            .await
            .into_iter()
            .map(|r| r.unwrap())
            .collect();

        assert_eq!(outcomes, vec![false, false, true]);
        assert_eq!(ran.load(Ordering::SeqCst), 1);
        assert_eq!(last.load(Ordering::SeqCst), 90);
    }

    #[tokio::test(start_paused = true)]
    async fn test_distinct_keys_run_independently() {
        let coalescer = Coalescer::default();
        let ran = Arc::new(AtomicU32::new(0));

        let mut handles = Vec::new();
        for key in ["cell:1:price", "cell:2:price"] {
            let ran = Arc::clone(&ran);
            handles.push(coalescer.schedule(key, async move {
                ran.fetch_add(1, Ordering::SeqCst);
            }));
        }
        for handle in handles {
            assert!(handle.await.unwrap());
        }
        assert_eq!(ran.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_work() {
        let coalescer = Coalescer::default();
        let ran = Arc::new(AtomicU32::new(0));

        let handle = {
            let ran = Arc::clone(&ran);
            coalescer.schedule("quote", async move {
                ran.fetch_add(1, Ordering::SeqCst);
            })
        };
        coalescer.cancel("quote");

        assert!(!handle.await.unwrap());
        assert_eq!(ran.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_after_run() {
        let coalescer = Coalescer::default();
        let ran = Arc::new(AtomicU32::new(0));

        for _ in 0..2 {
            let ran = Arc::clone(&ran);
            let handle = coalescer.schedule("cell:9:capacity", async move {
                ran.fetch_add(1, Ordering::SeqCst);
            });
            assert!(handle.await.unwrap());
        }
        assert_eq!(ran.load(Ordering::SeqCst), 2);
        assert_eq!(coalescer.pending_keys(), 0);
    }
}
