//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the wallet web client and the
//! wallet service API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::envelope`]**: Response envelope and error codes
//!   - **[`dto::wallet`]**: Wallet DTOs
//!   - **[`dto::transaction`]**: Transaction and sorting DTOs
//! - **[`utils`]**: Shared display helpers
//!   - **[`utils::format_amount`]**: Fixed-precision amounts with separators
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::{ApiEnvelope, Wallet};
//!
//! let body = r#"{"success":true,"statusCode":200,"message":"ok",
//!                "data":{"id":"w1","name":"alice","balance":3.5}}"#;
//! let envelope: ApiEnvelope<Wallet> = serde_json::from_str(body).unwrap();
//! assert_eq!(envelope.data.name, "alice");
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
