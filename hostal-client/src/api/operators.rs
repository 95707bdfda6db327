//! Operator endpoints (dashboard)

use crate::client::HostalClient;
use crate::error::ClientResult;
use crate::http::HttpClient;
use shared::models::{Operator, OperatorCreate, OperatorUpdate};

impl HostalClient {
    pub async fn operators(&self) -> ClientResult<Vec<Operator>> {
        self.http.get("operators").await
    }

    pub async fn operator(&self, id: i64) -> ClientResult<Operator> {
        self.http.get(&format!("operators/{}", id)).await
    }

    pub async fn create_operator(&self, req: &OperatorCreate) -> ClientResult<Operator> {
        self.http.post("operators", req).await
    }

    pub async fn update_operator(
        &self,
        id: i64,
        update: &OperatorUpdate,
    ) -> ClientResult<Operator> {
        self.http.patch(&format!("operators/{}", id), update).await
    }

    pub async fn delete_operator(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("operators/{}", id)).await
    }
}
