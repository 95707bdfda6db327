//! Operator Model

use serde::{Deserialize, Serialize};

/// Back-office operator account
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Operator {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Create operator payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorCreate {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Update operator payload
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperatorUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}
