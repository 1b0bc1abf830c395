//! # Client Configuration
//!
//! [`ClientConfig`] gathers the knobs of the wallet client: where the API
//! lives, page size, debounce window, storage key and request timeout.
//!
//! ```rust
//! use lib_core::config::ClientConfig;
//!
//! let config = ClientConfig::default().with_api_base_url("http://localhost:5001/");
//! assert_eq!(config.api_base_url, "http://localhost:5001");
//! assert_eq!(config.page_size, 10);
//! ```
//!
//! The browser build starts from [`ClientConfig::default`] and overrides the
//! base URL baked in at compile time. [`ApiClient::new`](crate::api::ApiClient::new)
//! rejects a configuration that fails [`ClientConfig::validate`].

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5001";
pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_STORAGE_KEY: &str = "walletId";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// Wallet client configuration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the wallet service, without a trailing slash
    pub api_base_url: String,

    /// Transactions per page
    pub page_size: u32,

    /// Form submission debounce window in milliseconds
    pub debounce_ms: u64,

    /// Durable storage key holding the active wallet id
    pub storage_key: String,

    /// Per-request timeout (native targets only)
    pub request_timeout_secs: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}

impl ClientConfig {
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self.normalized()
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.api_base_url.starts_with("http://") || self.api_base_url.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "api_base_url must be an http(s) URL, got '{}'",
                self.api_base_url
            )));
        }

        if self.page_size == 0 {
            return Err(ConfigError::Invalid("page_size must be positive".to_string()));
        }

        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::Invalid("storage_key cannot be empty".to_string()));
        }

        Ok(())
    }

    fn normalized(mut self) -> Self {
        while self.api_base_url.ends_with('/') {
            self.api_base_url.pop();
        }
        self
    }
}
