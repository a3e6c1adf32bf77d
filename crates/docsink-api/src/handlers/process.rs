//! `POST /process` handler.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use docsink_core::{AppError, ProcessedDocument};
use tokio::fs;
use uuid::Uuid;

use crate::error::HttpAppError;
use crate::services::DocumentProcessor;
use crate::state::AppState;

/// Accept a single multipart file upload, run it through the pipeline, and
/// answer with the processed document. The staged copy of the upload is
/// removed once the outcome is known, on the success and failure paths both.
pub async fn process_document(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ProcessedDocument>, HttpAppError> {
    let Some((filename, data)) = read_file_field(&mut multipart).await? else {
        return Err(AppError::BadRequest("No file uploaded".to_string()).into());
    };

    let staged_path = stage_upload(&state.config.upload_dir, &filename, &data).await?;

    let result = DocumentProcessor::new(&state)
        .process(&filename, &data, &staged_path)
        .await;

    remove_staged(&staged_path).await;

    Ok(Json(result?))
}

/// Pull the `file` field out of the multipart body. Fields with other names
/// are skipped; a `file` field without a filename counts as missing.
async fn read_file_field(multipart: &mut Multipart) -> Result<Option<(String, Bytes)>, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::BadRequest(format!("Invalid multipart request: {}", e)))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let filename = match field.file_name() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => return Ok(None),
        };

        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid multipart request: {}", e)))?;

        return Ok(Some((filename, data)));
    }

    Ok(None)
}

/// Write the upload into the staging directory under a unique name.
async fn stage_upload(upload_dir: &Path, filename: &str, data: &[u8]) -> Result<PathBuf, AppError> {
    fs::create_dir_all(upload_dir).await?;

    let staged_path = upload_dir.join(format!("{}_{}", Uuid::new_v4(), filename));
    fs::write(&staged_path, data).await?;

    tracing::debug!(path = %staged_path.display(), bytes = data.len(), "Staged upload");
    Ok(staged_path)
}

/// Remove the staged upload. A failure here must not mask the pipeline
/// outcome, so it is only logged.
async fn remove_staged(staged_path: &Path) {
    if let Err(e) = fs::remove_file(staged_path).await {
        tracing::debug!(
            error = %e,
            path = %staged_path.display(),
            "Failed to remove staged upload"
        );
    }
}
