//! Application error types
//!
//! Every render cycle either completes or fails with one of these; terminal
//! failures are surfaced as a defined error view, never a crash.

use thiserror::Error;

/// Application-level error
#[derive(Debug, Error)]
pub enum AppError {
    /// The snapshot source could not be reached or read
    #[error("snapshot source unavailable: {0}")]
    SourceUnavailable(String),

    /// The snapshot source was reachable but its content does not match the
    /// expected document shape
    #[error("malformed snapshot document: {0}")]
    MalformedDocument(String),

    /// Anything outside the loader boundary
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn source_unavailable(msg: impl Into<String>) -> Self {
        AppError::SourceUnavailable(msg.into())
    }

    pub fn malformed(msg: impl Into<String>) -> Self {
        AppError::MalformedDocument(msg.into())
    }

    /// Stable code used in API error envelopes
    pub fn code(&self) -> &'static str {
        match self {
            AppError::SourceUnavailable(_) => "SOURCE_UNAVAILABLE",
            AppError::MalformedDocument(_) => "MALFORMED_DOCUMENT",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::MalformedDocument(err.to_string())
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::SourceUnavailable(err.to_string())
    }
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::SourceUnavailable(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
