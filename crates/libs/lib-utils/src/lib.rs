//! # Utilities Library
//!
//! Shared utility functions for environment variables, dates and input validation.

pub mod envs;
pub mod time;
pub mod validation;

// Re-export commonly used functions
pub use envs::{get_env, get_env_or};
pub use time::format_date;
pub use validation::{validate_max_length, validate_min_amount, validate_non_negative, validate_not_empty};
