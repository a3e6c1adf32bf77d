//! Error types module
//!
//! This module provides the core error types used throughout the docsink
//! application. All errors are unified under the `AppError` enum, which can
//! represent remote-extraction, spreadsheet-decoding, and persistence
//! failures alongside generic request errors.
//!
//! Error messages are preserved verbatim on their way to the HTTP boundary:
//! the handler reports them as the `details` field of the 500 response.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like missing upload fields
    Debug,
    /// Error level - for pipeline failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Extraction(String),

    #[error("{0}")]
    Metadata(String),

    #[error("{0}")]
    SpreadsheetDecode(String),

    #[error("Unsupported spreadsheet format: {0}")]
    UnsupportedFormat(String),

    #[error("{0}")]
    Persistence(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Internal(format!("JSON serialization error: {}", err))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

impl AppError {
    /// HTTP status code this error maps to. Every pipeline failure is a 500
    /// with the message preserved as `details`; only a missing upload is a
    /// client error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            AppError::BadRequest(_) => 400,
            _ => 500,
        }
    }

    /// Get the error type name for structured logging
    pub fn error_type(&self) -> &'static str {
        match self {
            AppError::Extraction(_) => "Extraction",
            AppError::Metadata(_) => "Metadata",
            AppError::SpreadsheetDecode(_) => "SpreadsheetDecode",
            AppError::UnsupportedFormat(_) => "UnsupportedFormat",
            AppError::Persistence(_) => "Persistence",
            AppError::BadRequest(_) => "BadRequest",
            AppError::Internal(_) => "Internal",
        }
    }

    /// Log level for this error
    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::BadRequest(_) => LogLevel::Debug,
            _ => LogLevel::Error,
        }
    }
}
