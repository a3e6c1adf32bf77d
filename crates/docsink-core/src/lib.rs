//! Docsink Core Library
//!
//! This crate provides the domain model, error types, configuration, and
//! extension/MIME classification shared across all docsink components.

pub mod config;
pub mod error;
pub mod mime;
pub mod models;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, LogLevel};
pub use mime::{mime_type_for, DocumentClass};
pub use models::ProcessedDocument;
