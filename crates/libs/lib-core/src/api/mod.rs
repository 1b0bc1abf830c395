//! # Wallet Service API
//!
//! - [`client`] - HTTP transport, envelope unwrapping, failure classification
//! - [`validator`] - Pluggable response validation
//! - [`wallet`] - Endpoint functions
//! - [`service`] - The [`WalletApi`] trait implemented by [`ApiClient`]

pub mod client;
pub mod service;
pub mod validator;
pub mod wallet;

pub use client::ApiClient;
pub use service::WalletApi;
pub use validator::{SchemaValidator, Validator, WalletValidator};
pub use wallet::CSV_CONTENT_TYPE;
