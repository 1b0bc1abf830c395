//! Reusable reactive hooks

pub mod debounce;
pub mod pagination;

pub use debounce::{sleep_for, use_debouncer};
pub use pagination::{use_api_pagination, ApiPagination};
