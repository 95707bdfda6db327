//! Client configuration

use std::time::Duration;

/// Client configuration for connecting to the booking backend
///
/// # Environment variables
///
/// All settings can be supplied via environment variables:
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | HOSTAL_API_URL | http://localhost:3001 | Backend base URL |
/// | HOSTAL_API_TIMEOUT_SECS | 30 | Request timeout in seconds |
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g. "https://api.hostal.example")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: 30,
        }
    }

    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to the defaults above.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("HOSTAL_API_URL").unwrap_or_else(|_| "http://localhost:3001".into());
        let timeout = std::env::var("HOSTAL_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);
        Self { base_url, timeout }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    pub(crate) fn timeout_duration(&self) -> Duration {
        Duration::from_secs(self.timeout)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:3001")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "http://localhost:3001");
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_with_timeout() {
        let config = ClientConfig::new("https://api.hostal.example").with_timeout(5);
        assert_eq!(config.timeout, 5);
        assert_eq!(config.timeout_duration(), Duration::from_secs(5));
    }
}
