//! Console configuration.

use std::env;
use std::time::Duration;

/// Where the console finds the customers API.
#[derive(Debug, Clone)]
pub struct ConsoleConfig {
    /// Base URL the `customers` path is appended to
    pub api_url: String,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl ConsoleConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_url: env::var("CUSTOMER_API_URL").unwrap_or(defaults.api_url),
            request_timeout: env::var("CUSTOMER_API_TIMEOUT_MS")
                .ok()
                .and_then(|ms| ms.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.request_timeout),
        }
    }

    /// Same configuration pointed at another base URL.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            api_url: "http://localhost:3000".to_string(),
            request_timeout: Duration::from_millis(10_000),
        }
    }
}
