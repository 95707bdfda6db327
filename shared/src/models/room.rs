//! Room Model

use serde::{Deserialize, Serialize};

/// Bookable unit of a hostel
///
/// Created and edited by administrators; the booking flow treats rooms
/// as immutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: i64,
    /// URL-safe identifier used by the public routes
    pub slug: String,
    pub name: String,
    /// Maximum number of guests
    pub capacity: u32,
    /// Feature tags (e.g. "ensuite", "balcony")
    #[serde(default)]
    pub features: Vec<String>,
}

/// Create room payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomCreate {
    pub slug: String,
    pub name: String,
    pub capacity: u32,
    #[serde(default)]
    pub features: Vec<String>,
}

/// Update room payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomUpdate {
    pub slug: Option<String>,
    pub name: Option<String>,
    pub capacity: Option<u32>,
    pub features: Option<Vec<String>>,
}

/// Compact room reference embedded in reservations and grid rows
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummary {
    pub id: i64,
    pub name: String,
    pub capacity: u32,
}
