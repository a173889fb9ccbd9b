//! HTTP client abstraction for wallet JSON-RPC requests.

use reqwest::Client;
use serde::Serialize;
use std::time::Duration;

use crate::domain::DashboardError;

// ============================================================================
// Constants
// ============================================================================

/// Default timeout for HTTP requests in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ============================================================================
// Configuration
// ============================================================================

/// HTTP client configuration
#[derive(Debug, Clone)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Duration,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl HttpConfig {
    /// Create config with custom timeout
    #[must_use]
    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

// ============================================================================
// HTTP Client
// ============================================================================

/// Base HTTP client wrapper
#[derive(Debug, Clone)]
pub struct HttpClient {
    inner: Client,
}

impl HttpClient {
    /// Create a new HTTP client with custom configuration
    ///
    /// # Errors
    ///
    /// Returns `DashboardError::Transport` if the TLS backend fails to initialize.
    pub fn with_config(config: HttpConfig) -> Result<Self, DashboardError> {
        let inner = Client::builder()
            .pool_max_idle_per_host(4)
            .timeout(config.timeout)
            .build()?;
        Ok(Self { inner })
    }

    /// Build a JSON POST request with standard headers
    pub fn post_json<T: Serialize + ?Sized>(&self, url: &str, body: &T) -> reqwest::RequestBuilder {
        self.inner
            .post(url)
            .header("accept", "application/json")
            .json(body)
    }
}
