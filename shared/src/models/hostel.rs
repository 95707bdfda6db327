//! Hostel Model

use super::room::Room;
use serde::{Deserialize, Serialize};

/// Hostel entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hostel {
    pub id: i64,
    /// URL-safe identifier used by the public routes
    pub slug: String,
    pub name: String,
}

/// Hostel with the rooms still available for a searched range
///
/// Returned by the public availability search.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HostelAvailability {
    #[serde(flatten)]
    pub hostel: Hostel,
    pub available_rooms: Vec<Room>,
}
