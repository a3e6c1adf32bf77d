//! Docsink Extract Library
//!
//! HTTP client for the remote document-analysis service (Tika protocol):
//! text extraction via `PUT /tika` and metadata extraction via `PUT /meta`.

pub mod client;

pub use client::AnalysisClient;
