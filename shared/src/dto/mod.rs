//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures exchanged with the wallet
//! service's REST API.
//!
//! ## Module Organization
//!
//! - [`envelope`] - Success envelope, error body and the closed error-code set
//! - [`wallet`] - Wallet snapshot, setup and transact requests/responses
//! - [`transaction`] - Transactions, pagination metadata and sort options
//!
//! ## Serialization Format
//!
//! - **Field naming**: the backend speaks camelCase (`walletId`, `statusCode`),
//!   mapped with `#[serde(rename_all = "camelCase")]`
//! - **Optional fields**: omitted when `None`
//! - **Enums**: error codes and transaction types are SCREAMING_SNAKE_CASE,
//!   sort options are lowercase
//!
//! ## Example JSON Communication
//!
//! ```text
//! GET /wallet/65f1c0
//!
//! HTTP/1.1 200 OK
//! {
//!   "success": true,
//!   "statusCode": 200,
//!   "message": "Wallet fetched",
//!   "data": { "id": "65f1c0", "name": "alice", "balance": 20.5 }
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 404 Not Found
//! {
//!   "statusCode": 404,
//!   "message": "Wallet not found",
//!   "error": { "code": "NOT_FOUND" }
//! }
//! ```

pub mod envelope;
pub mod transaction;
pub mod wallet;

pub use envelope::*;
pub use transaction::*;
pub use wallet::*;
