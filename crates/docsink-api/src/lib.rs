//! Docsink API
//!
//! The HTTP boundary of the document processor: a single `POST /process`
//! multipart endpoint that stages the upload, runs the extraction pipeline,
//! archives the result, and answers with the processed document.

pub mod error;
pub mod handlers;
pub mod services;
pub mod setup;
pub mod state;
pub mod telemetry;
