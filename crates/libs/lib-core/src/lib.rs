//! # Core Library
//!
//! Platform-neutral client core of the wallet app: API access, pagination,
//! wallet state, forms and configuration. Compiles for both native targets
//! and `wasm32`; the browser crate only adds rendering and browser storage.
//!
//! ## Modules
//!
//! - [`api`] - HTTP client, response validation and the [`api::WalletApi`] seam
//! - [`pagination`] - Cancellable page loader ([`pagination::PaginationController`])
//! - [`feed`] - Transaction feed built on the page loader, CSV export
//! - [`store`] - Active wallet store persisted to key-value storage
//! - [`forms`] - Setup and transaction form validation
//! - [`debounce`] - Submission debouncing
//! - [`notify`] - Error-code mapping and notification sinks
//! - [`config`] - [`ClientConfig`]
//! - [`error`] - [`ApiError`] and friends
//!
//! Everything here is single-threaded (`Rc`/`RefCell`), matching the browser
//! event loop it runs on.

pub mod api;
pub mod config;
pub mod debounce;
pub mod error;
pub mod feed;
pub mod forms;
pub mod notify;
pub mod pagination;
pub mod store;

// Re-export commonly used types
pub use api::{ApiClient, WalletApi};
pub use config::ClientConfig;
pub use error::{ApiError, Result};
pub use notify::{Notification, Notifier, Severity};
