//! The typed backend client
//!
//! One [`HostalClient`] serves both surfaces: the public booking flow
//! (no token) and the authenticated dashboard. Endpoint wrappers live
//! in the [`crate::api`] modules, grouped by resource.

use crate::auth::{NoToken, TokenProvider};
use crate::config::ClientConfig;
use crate::error::ClientResult;
use crate::http::NetworkHttpClient;
use std::sync::Arc;

/// Typed client for the booking backend
#[derive(Clone)]
pub struct HostalClient {
    pub(crate) http: NetworkHttpClient,
}

impl HostalClient {
    /// Create a client with an injected token source
    ///
    /// Administrative endpoints require the provider to yield a token;
    /// public endpoints ignore it.
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenProvider>) -> ClientResult<Self> {
        Ok(Self {
            http: NetworkHttpClient::new(config, tokens)?,
        })
    }

    /// Create a tokenless client for the public booking flow
    pub fn public(config: &ClientConfig) -> ClientResult<Self> {
        Self::new(config, Arc::new(NoToken))
    }

    /// Backend base URL this client talks to
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}
