//! # Response Envelope DTOs
//!
//! Every successful backend response is wrapped in an [`ApiEnvelope`];
//! every failed one carries an [`ApiErrorBody`].

use serde::{Deserialize, Serialize};

/// Success wrapper: `{success, statusCode, message, data}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ApiEnvelope<T> {
    pub success: bool,
    pub status_code: u16,
    pub message: String,
    pub data: T,
}

/// Failure body: `{statusCode, message, error: {code}}`.
///
/// All fields are defaulted so a partial or non-conforming error body still
/// decodes into something the error mapper can fall back on.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ApiErrorBody {
    #[serde(default)]
    pub status_code: u16,
    #[serde(default)]
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorDetail>,
}

impl ApiErrorBody {
    /// The recognized error code, if the body carries one from the closed set.
    pub fn code(&self) -> Option<ErrorCode> {
        self.error.as_ref().and_then(|detail| ErrorCode::parse(&detail.code))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorDetail {
    pub code: String,
}

/// Closed set of error codes the backend declares.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    NotFound,
    ValidationError,
    InternalError,
    Unauthorized,
    Forbidden,
}

impl ErrorCode {
    pub const ALL: [ErrorCode; 5] = [
        ErrorCode::NotFound,
        ErrorCode::ValidationError,
        ErrorCode::InternalError,
        ErrorCode::Unauthorized,
        ErrorCode::Forbidden,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::InternalError => "INTERNAL_ERROR",
            ErrorCode::Unauthorized => "UNAUTHORIZED",
            ErrorCode::Forbidden => "FORBIDDEN",
        }
    }

    /// Parse a wire code. Unknown codes yield `None`.
    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == code)
    }
}
