//! Guest Model

use serde::{Deserialize, Serialize};

/// Guest entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Guest {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Create guest payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestCreate {
    pub name: String,
    pub email: String,
}

/// Update guest payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// One page of the guest directory
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuestPage {
    pub guests: Vec<Guest>,
    pub total: u64,
    pub page: u32,
}
