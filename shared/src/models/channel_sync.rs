//! Channel Sync Model
//!
//! Synchronization log entries for reservations pushed to or pulled
//! from external booking channels. Synchronization itself happens in
//! the backend; the dashboard only lists and retries entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one synchronization attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    Pending,
    Confirmed,
    Failed,
}

impl SyncStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::Failed => "failed",
        }
    }
}

/// Channel-sync log entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelSyncLog {
    pub id: i64,
    /// Reservation identifier on the external channel
    pub external_res_id: String,
    pub status: SyncStatus,
    pub channel_name: String,
    /// Failure detail when status is `Failed`
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ChannelSyncLog {
    /// Only failed entries may be retried
    pub fn is_retryable(&self) -> bool {
        self.status == SyncStatus::Failed
    }
}
