//! Docsink Archive Library
//!
//! Persists every successfully processed document into an append-only
//! archive directory: one JSON entry with the extracted result, plus a copy
//! of the original upload under `originals/`, both sharing a
//! timestamp-derived basename.

use std::path::{Path, PathBuf};

use chrono::{DateTime, SecondsFormat, Utc};
use docsink_core::{AppError, ProcessedDocument};
use serde::Serialize;
use serde_json::{Map, Value};
use tokio::fs;

/// Serialized shape of an archive entry. Same data as the HTTP response,
/// except the filename field is called `originalFilename`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ArchiveEntry<'a> {
    content: &'a str,
    metadata: &'a Map<String, Value>,
    original_filename: &'a str,
    mime_type: &'a str,
    processing_date: &'a DateTime<Utc>,
}

/// Filesystem-safe, lexically sortable timestamp: RFC 3339 with `:` and `.`
/// replaced by `-`.
pub fn archive_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
        .replace([':', '.'], "-")
}

/// The completed-document archive rooted at a local directory.
#[derive(Debug, Clone)]
pub struct Archive {
    root: PathBuf,
}

impl Archive {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist a processed document and a copy of its original file.
    ///
    /// The JSON entry and the original copy are two independent writes with
    /// no atomicity between them: if the copy fails, the already-written
    /// JSON stays on disk. Returns the shared timestamped basename.
    pub async fn save(
        &self,
        document: &ProcessedDocument,
        original_path: &Path,
    ) -> Result<String, AppError> {
        fs::create_dir_all(&self.root).await.map_err(|e| {
            AppError::Persistence(format!(
                "Failed to create archive directory {}: {}",
                self.root.display(),
                e
            ))
        })?;

        let basename = format!("{}_{}", archive_timestamp(Utc::now()), document.filename);

        let entry = ArchiveEntry {
            content: &document.content,
            metadata: &document.metadata,
            original_filename: &document.filename,
            mime_type: &document.mime_type,
            processing_date: &document.processing_date,
        };
        let json = serde_json::to_vec_pretty(&entry)
            .map_err(|e| AppError::Persistence(format!("Failed to serialize archive entry: {}", e)))?;

        let entry_path = self.root.join(format!("{}.json", basename));
        fs::write(&entry_path, json).await.map_err(|e| {
            AppError::Persistence(format!(
                "Failed to write archive entry {}: {}",
                entry_path.display(),
                e
            ))
        })?;

        let originals_dir = self.root.join("originals");
        fs::create_dir_all(&originals_dir).await.map_err(|e| {
            AppError::Persistence(format!(
                "Failed to create originals directory {}: {}",
                originals_dir.display(),
                e
            ))
        })?;

        let original_copy = originals_dir.join(&basename);
        fs::copy(original_path, &original_copy).await.map_err(|e| {
            AppError::Persistence(format!(
                "Failed to copy original to {}: {}",
                original_copy.display(),
                e
            ))
        })?;

        tracing::info!(basename = %basename, archive = %self.root.display(), "Archived document");
        Ok(basename)
    }
}
