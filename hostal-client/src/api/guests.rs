//! Guest directory endpoints (dashboard)

use crate::client::HostalClient;
use crate::error::ClientResult;
use crate::http::HttpClient;
use shared::models::{Guest, GuestCreate, GuestPage, GuestUpdate};
use shared::request::PaginationQuery;

impl HostalClient {
    /// One page of the guest directory, optionally filtered
    pub async fn guests(
        &self,
        page: PaginationQuery,
        search: Option<&str>,
    ) -> ClientResult<GuestPage> {
        let mut path = format!("guests/all?page={}", page.page);
        if let Some(term) = search {
            path.push_str(&format!("&search={}", term));
        }
        self.http.get(&path).await
    }

    pub async fn guest(&self, id: i64) -> ClientResult<Guest> {
        self.http.get(&format!("guests/{}", id)).await
    }

    pub async fn create_guest(&self, req: &GuestCreate) -> ClientResult<Guest> {
        self.http.post("guests", req).await
    }

    pub async fn update_guest(&self, id: i64, update: &GuestUpdate) -> ClientResult<Guest> {
        self.http.patch(&format!("guests/{}", id), update).await
    }
}
