//! User-facing notifications for API failures.
//!
//! The API client reports each non-cancelled failure exactly once through a
//! [`Notifier`]. The browser client renders these as toasts; tests use
//! [`RecordingNotifier`].

use std::sync::Mutex;

use shared::ErrorCode;

use crate::error::ApiError;

pub const GENERIC_ERROR_MESSAGE: &str = "An unexpected error occurred. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Success,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub severity: Severity,
    pub message: String,
}

impl Notification {
    pub fn error(message: impl Into<String>) -> Self {
        Self { severity: Severity::Error, message: message.into() }
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self { severity: Severity::Success, message: message.into() }
    }
}

/// Message shown for a server-declared error code.
pub fn map_error_code(code: ErrorCode) -> &'static str {
    match code {
        ErrorCode::NotFound => "The requested resource was not found",
        ErrorCode::ValidationError => "Please check your input and try again",
        ErrorCode::InternalError => "Something went wrong. Please try again later",
        ErrorCode::Unauthorized => "Please sign in to continue",
        ErrorCode::Forbidden => "You do not have permission to perform this action",
    }
}

/// Notification for a failed request, `None` for cancellations.
///
/// `VALIDATION_ERROR` shows the server's own message when it sent one.
pub fn notification_for(err: &ApiError) -> Option<Notification> {
    let message = match err {
        ApiError::Cancelled => return None,
        ApiError::Server { code: Some(ErrorCode::ValidationError), message, .. }
            if !message.trim().is_empty() =>
        {
            message.clone()
        }
        ApiError::Server { code: Some(code), .. } => map_error_code(*code).to_string(),
        ApiError::Server { code: None, .. } | ApiError::Network(_) | ApiError::Validation(_) => {
            GENERIC_ERROR_MESSAGE.to_string()
        }
    };
    Some(Notification::error(message))
}

/// Sink for user-facing notifications.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification);
}

/// Keeps every notification in memory.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    seen: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.seen.lock().map(|seen| seen.clone()).unwrap_or_default()
    }

    pub fn messages(&self) -> Vec<String> {
        self.notifications().into_iter().map(|n| n.message).collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) {
        if let Ok(mut seen) = self.seen.lock() {
            seen.push(notification);
        }
    }
}
