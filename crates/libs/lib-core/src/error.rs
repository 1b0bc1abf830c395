//! # Centralized Error Handling
//!
//! This module defines [`ApiError`], the failure taxonomy of every call the
//! client makes to the wallet service, plus the smaller error types of the
//! other core modules.
//!
//! ## Error Categories
//!
//! 1. **Network** - no response was received (connection refused, DNS, timeout)
//! 2. **Server** - a response arrived with a non-2xx status and an error body
//! 3. **Validation** - the response body does not match the expected contract
//! 4. **Cancelled** - the request was superseded or its owner went away.
//!    Not an error from the user's point of view: callers check
//!    [`ApiError::is_cancelled`] and return silently.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{ApiError, Result};
//!
//! fn settle(outcome: Result<u32>) -> Option<String> {
//!     match outcome {
//!         Ok(_) => None,
//!         Err(e) if e.is_cancelled() => None,
//!         Err(e) => Some(e.to_string()),
//!     }
//! }
//!
//! assert_eq!(settle(Err(ApiError::Cancelled)), None);
//! ```

use shared::ErrorCode;
use thiserror::Error;

/// Convenience type alias for `Result<T, ApiError>`.
pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure of a single API request.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ApiError {
    /// No response received.
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    ///
    /// `code` is `None` when the body carried no code, or one outside the
    /// closed [`ErrorCode`] set.
    #[error("Server error {status}: {message}")]
    Server {
        status: u16,
        message: String,
        code: Option<ErrorCode>,
    },

    /// The response did not match the expected shape.
    #[error(transparent)]
    Validation(#[from] ValidationFailure),

    /// The request was cancelled before it settled.
    #[error("Request cancelled")]
    Cancelled,
}

impl ApiError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }

    /// Server-declared error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        match self {
            ApiError::Server { code, .. } => *code,
            _ => None,
        }
    }
}

/// Response-shape mismatch reported by a [`crate::api::Validator`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Response validation failed: {reason}")]
pub struct ValidationFailure {
    pub reason: String,
}

impl ValidationFailure {
    pub fn new(reason: impl Into<String>) -> Self {
        Self { reason: reason.into() }
    }
}

impl From<serde_json::Error> for ValidationFailure {
    fn from(err: serde_json::Error) -> Self {
        ValidationFailure::new(err.to_string())
    }
}

/// Durable key-value storage failure.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StorageError {
    #[error("Storage unavailable: {0}")]
    Unavailable(String),

    #[error("Storage write failed: {0}")]
    Write(String),
}

/// Invalid client configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("HTTP client setup failed: {0}")]
    HttpClient(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancelled_is_silent() {
        assert!(ApiError::Cancelled.is_cancelled());
        assert!(!ApiError::Network("down".to_string()).is_cancelled());
    }

    #[test]
    fn test_server_code() {
        let err = ApiError::Server {
            status: 404,
            message: "Wallet not found".to_string(),
            code: Some(ErrorCode::NotFound),
        };
        assert_eq!(err.code(), Some(ErrorCode::NotFound));
        assert_eq!(err.to_string(), "Server error 404: Wallet not found");
    }

    #[test]
    fn test_validation_from_failure() {
        let err: ApiError = ValidationFailure::new("missing field `name`").into();
        assert_eq!(err.to_string(), "Response validation failed: missing field `name`");
        assert_eq!(err.code(), None);
    }
}
