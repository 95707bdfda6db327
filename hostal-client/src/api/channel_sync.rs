//! Channel-sync endpoints (dashboard)
//!
//! Synchronization runs in the backend; the dashboard only inspects
//! log entries and retries failed ones.

use crate::client::HostalClient;
use crate::error::ClientResult;
use crate::http::HttpClient;
use shared::models::{ChannelSyncLog, SyncStatus};
use shared::request::DateRangeQuery;

impl HostalClient {
    /// Sync log entries, optionally filtered by status and range
    pub async fn channel_sync_logs(
        &self,
        status: Option<SyncStatus>,
        range: Option<DateRangeQuery>,
    ) -> ClientResult<Vec<ChannelSyncLog>> {
        let mut path = String::from("channel-sync/logs?");
        if let Some(status) = status {
            path.push_str(&format!("status={}&", status.as_str()));
        }
        if let Some(range) = range {
            path.push_str(&format!("from={}&to={}&", range.from, range.to));
        }
        self.http.get(path.trim_end_matches(['&', '?'])).await
    }

    /// Confirmed external reservations for one hostel
    pub async fn channel_sync_confirmed(&self, hostel_id: i64) -> ClientResult<Vec<ChannelSyncLog>> {
        self.http
            .get(&format!("channel-sync/confirmed?hostelId={}", hostel_id))
            .await
    }

    /// Re-run a failed synchronization
    pub async fn retry_channel_sync(&self, id: i64) -> ClientResult<ChannelSyncLog> {
        self.http
            .post_empty(&format!("channel-sync/{}/retry", id))
            .await
    }
}
