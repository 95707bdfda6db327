//! Room endpoints (dashboard)

use crate::client::HostalClient;
use crate::error::ClientResult;
use crate::http::HttpClient;
use shared::models::{Room, RoomCreate, RoomUpdate};

impl HostalClient {
    pub async fn rooms(&self) -> ClientResult<Vec<Room>> {
        self.http.get("rooms").await
    }

    pub async fn room(&self, id: i64) -> ClientResult<Room> {
        self.http.get(&format!("rooms/{}", id)).await
    }

    pub async fn create_room(&self, req: &RoomCreate) -> ClientResult<Room> {
        self.http.post("rooms", req).await
    }

    pub async fn update_room(&self, id: i64, update: &RoomUpdate) -> ClientResult<Room> {
        self.http.patch(&format!("rooms/{}", id), update).await
    }

    pub async fn delete_room(&self, id: i64) -> ClientResult<()> {
        self.http.delete(&format!("rooms/{}", id)).await
    }
}
