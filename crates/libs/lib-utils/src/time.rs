//! # Time Utilities
//!
//! Date formatting using chrono.

use chrono::{DateTime, Utc};

/// Format time as a calendar date for tables (`2024-03-01`).
pub fn format_date(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%d").to_string()
}
