//! HTTP transport for the booking backend
//!
//! Thin reqwest wrapper: attaches the bearer token from the injected
//! [`TokenProvider`], decodes success bodies as JSON, and maps error
//! responses into [`ClientError`].

use crate::auth::TokenProvider;
use crate::config::ClientConfig;
use crate::error::{ClientError, ClientResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;

/// Error response body returned by the backend
///
/// `message` is always present; `code`/`details` only on structured
/// errors.
#[derive(serde::Deserialize)]
struct ApiErrorBody {
    message: String,
    #[serde(default)]
    code: Option<u16>,
    #[serde(default)]
    details: Option<serde_json::Value>,
}

/// HTTP client trait
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
    async fn patch<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T>;
    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T>;
}

/// Network HTTP client
#[derive(Clone)]
pub struct NetworkHttpClient {
    client: Client,
    base_url: String,
    tokens: Arc<dyn TokenProvider>,
}

impl NetworkHttpClient {
    pub fn new(config: &ClientConfig, tokens: Arc<dyn TokenProvider>) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout_duration())
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            tokens,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn auth_header(&self) -> Option<String> {
        self.tokens.token().map(|t| format!("Bearer {}", t))
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> ClientResult<T> {
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await?;
            if status == StatusCode::UNAUTHORIZED {
                return Err(ClientError::Unauthorized);
            }
            // Prefer the structured error body
            if let Ok(body) = serde_json::from_str::<ApiErrorBody>(&text) {
                return Err(ClientError::Api {
                    code: body.code.unwrap_or(0),
                    message: body.message,
                    details: body.details,
                });
            }
            return match status {
                StatusCode::FORBIDDEN => Err(ClientError::Forbidden(text)),
                StatusCode::NOT_FOUND => Err(ClientError::NotFound(text)),
                StatusCode::BAD_REQUEST => Err(ClientError::Validation(text)),
                s if s.is_server_error() => Err(ClientError::Backend(text)),
                _ => Err(ClientError::InvalidResponse(format!(
                    "unexpected status {}: {}",
                    status, text
                ))),
            };
        }
        Ok(response.json().await?)
    }

    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = self.client.request(method, self.url(path));
        if let Some(auth) = self.auth_header() {
            req = req.header(reqwest::header::AUTHORIZATION, auth);
        }
        req
    }
}

#[async_trait]
impl HttpClient for NetworkHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(path, "GET");
        let response = self.request(reqwest::Method::GET, path).send().await?;
        self.handle_response(response).await
    }

    async fn post<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(path, "POST");
        let response = self
            .request(reqwest::Method::POST, path)
            .json(body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(path, "POST (empty)");
        let response = self.request(reqwest::Method::POST, path).send().await?;
        self.handle_response(response).await
    }

    async fn patch<T: DeserializeOwned, B: serde::Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
    ) -> ClientResult<T> {
        tracing::debug!(path, "PATCH");
        let response = self
            .request(reqwest::Method::PATCH, path)
            .json(body)
            .send()
            .await?;
        self.handle_response(response).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        tracing::debug!(path, "DELETE");
        let response = self.request(reqwest::Method::DELETE, path).send().await?;
        self.handle_response(response).await
    }
}
