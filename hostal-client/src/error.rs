//! Client error types

use shared::error::{AppError, ErrorCode};
use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Structured error response from the backend
    #[error("{message}")]
    Api {
        code: u16,
        message: String,
        details: Option<serde_json::Value>,
    },

    /// Domain error resolved locally (range/stay/selection validation)
    #[error(transparent)]
    App(#[from] AppError),

    /// Authentication required (401, redirect to login)
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backend failure (5xx)
    #[error("Backend error: {0}")]
    Backend(String),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl ClientError {
    /// Whether the caller should redirect to the login entry point
    pub fn is_unauthorized(&self) -> bool {
        match self {
            Self::Unauthorized => true,
            Self::Api { code, .. } => matches!(
                ErrorCode::try_from(*code),
                Ok(ErrorCode::NotAuthenticated | ErrorCode::TokenExpired | ErrorCode::TokenInvalid)
            ),
            Self::App(e) => e.is_unauthorized(),
            _ => false,
        }
    }
}

impl From<ClientError> for AppError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::App(e) => e,
            ClientError::Unauthorized => AppError::not_authenticated(),
            ClientError::Api {
                code,
                message,
                details,
            } => match ErrorCode::try_from(code) {
                Ok(code) => {
                    let mut app = AppError::with_message(code, message);
                    if let Some(serde_json::Value::Object(map)) = details {
                        for (k, v) in map {
                            app = app.with_detail(k, v);
                        }
                    }
                    app
                }
                Err(_) => AppError::internal(message),
            },
            ClientError::Http(e) => {
                if e.is_timeout() {
                    AppError::with_message(ErrorCode::TimeoutError, e.to_string())
                } else {
                    AppError::backend_unavailable(e.to_string())
                }
            }
            ClientError::Backend(msg) => AppError::backend_unavailable(msg),
            ClientError::Validation(msg) => AppError::validation(msg),
            ClientError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            ClientError::Forbidden(msg) => {
                AppError::with_message(ErrorCode::PermissionDenied, msg)
            }
            ClientError::InvalidResponse(msg)
            | ClientError::Config(msg) => AppError::internal(msg),
            ClientError::Serialization(e) => AppError::internal(e.to_string()),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
