//! Document processing pipeline.
//!
//! One pipeline run per request, strictly sequential: content extraction,
//! then metadata retrieval, then persistence. Rich documents delegate text
//! extraction to the remote analysis service; spreadsheets are flattened
//! locally but still get their metadata from the remote service.

use std::path::Path;

use chrono::Utc;
use docsink_core::{mime, AppError, DocumentClass, ProcessedDocument};
use docsink_processing::flatten_spreadsheet;

use crate::state::AppState;

pub struct DocumentProcessor<'a> {
    state: &'a AppState,
}

impl<'a> DocumentProcessor<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    /// Process one staged upload into a `ProcessedDocument`, persisting the
    /// result and the original file into the archive.
    pub async fn process(
        &self,
        filename: &str,
        data: &[u8],
        staged_path: &Path,
    ) -> Result<ProcessedDocument, AppError> {
        let mime_type = mime::mime_type_for(filename);
        let class = DocumentClass::classify(filename);
        tracing::info!(filename = %filename, mime_type = %mime_type, class = ?class, "Processing upload");

        let content = match class {
            DocumentClass::Document => self.state.analysis.extract_text(data, mime_type).await?,
            DocumentClass::Spreadsheet => flatten_spreadsheet(filename, data)?,
        };

        // The metadata call is format-agnostic and always remote.
        let metadata = self.state.analysis.extract_metadata(data, mime_type).await?;

        let document = ProcessedDocument {
            content,
            metadata,
            filename: filename.to_string(),
            mime_type: mime_type.to_string(),
            processing_date: Utc::now(),
        };

        self.state.archive.save(&document, staged_path).await?;

        Ok(document)
    }
}
