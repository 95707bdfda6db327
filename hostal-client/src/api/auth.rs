//! Auth endpoints

use crate::client::HostalClient;
use crate::error::ClientResult;
use crate::http::HttpClient;
use shared::client::{LoginRequest, LoginResponse, UserInfo};

impl HostalClient {
    /// Exchange operator credentials for a session token
    ///
    /// The caller owns where the token is stored (cookie, keychain);
    /// this client never keeps it.
    pub async fn login(&self, username: &str, password: &str) -> ClientResult<LoginResponse> {
        let req = LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        };
        self.http.post("auth/login", &req).await
    }

    /// The operator behind the current token
    pub async fn me(&self) -> ClientResult<UserInfo> {
        self.http.get("auth/me").await
    }
}
