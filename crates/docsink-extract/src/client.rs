//! Remote document-analysis client.
//!
//! The remote service is a black box that accepts raw document bytes and
//! returns extracted plain text (`PUT /tika`) or a JSON metadata mapping
//! (`PUT /meta`). The whole file body is sent in one request; there is no
//! retry and no timeout beyond the transport default, so a hung remote call
//! hangs the request.

use docsink_core::AppError;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde_json::{Map, Value};

/// Client for the remote analysis service.
#[derive(Debug, Clone)]
pub struct AnalysisClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl AnalysisClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Extract the plain-text content of a document.
    ///
    /// Fails with `AppError::Extraction` carrying the remote status text when
    /// the service answers with a non-success status, or the transport error
    /// when it is unreachable.
    pub async fn extract_text(&self, data: &[u8], mime_type: &str) -> Result<String, AppError> {
        let url = format!("{}/tika", self.base_url);
        tracing::debug!(url = %url, mime_type = %mime_type, bytes = data.len(), "Requesting text extraction");

        let response = self
            .http_client
            .put(&url)
            .header(CONTENT_TYPE, mime_type)
            .header(ACCEPT, "text/plain")
            .body(data.to_vec())
            .send()
            .await
            .map_err(|e| AppError::Extraction(format!("Content extraction failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Extraction(format!(
                "Content extraction failed: {}",
                status_text(response.status())
            )));
        }

        response
            .text()
            .await
            .map_err(|e| AppError::Extraction(format!("Content extraction failed: {}", e)))
    }

    /// Extract the structured metadata mapping of a document.
    ///
    /// The metadata call is format-agnostic; it is issued for spreadsheets as
    /// well, against the raw bytes and declared MIME type.
    pub async fn extract_metadata(
        &self,
        data: &[u8],
        mime_type: &str,
    ) -> Result<Map<String, Value>, AppError> {
        let url = format!("{}/meta", self.base_url);
        tracing::debug!(url = %url, mime_type = %mime_type, bytes = data.len(), "Requesting metadata extraction");

        let response = self
            .http_client
            .put(&url)
            .header(CONTENT_TYPE, mime_type)
            .header(ACCEPT, "application/json")
            .body(data.to_vec())
            .send()
            .await
            .map_err(|e| AppError::Metadata(format!("Metadata extraction failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::Metadata(format!(
                "Metadata extraction failed: {}",
                status_text(response.status())
            )));
        }

        let value: Value = response
            .json()
            .await
            .map_err(|e| AppError::Metadata(format!("Metadata extraction failed: {}", e)))?;

        match value {
            Value::Object(map) => Ok(map),
            other => Err(AppError::Metadata(format!(
                "Metadata extraction failed: expected a JSON object, got {}",
                type_name(&other)
            ))),
        }
    }
}

fn status_text(status: reqwest::StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_extract_text_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/tika")
            .match_header("content-type", "application/pdf")
            .match_header("accept", "text/plain")
            .with_status(200)
            .with_body("Extracted text content")
            .create_async()
            .await;

        let client = AnalysisClient::new(server.url());
        let text = client
            .extract_text(b"%PDF-1.4", "application/pdf")
            .await
            .unwrap();

        assert_eq!(text, "Extracted text content");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_extract_text_non_success_carries_status_text() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("PUT", "/tika")
            .with_status(502)
            .create_async()
            .await;

        let client = AnalysisClient::new(server.url());
        let err = client
            .extract_text(b"%PDF-1.4", "application/pdf")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Extraction(_)));
        assert!(err.to_string().contains("Bad Gateway"));
    }

    #[tokio::test]
    async fn test_extract_metadata_success() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("PUT", "/meta")
            .match_header("accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"Content-Type":"application/pdf","pages":3}"#)
            .create_async()
            .await;

        let client = AnalysisClient::new(server.url());
        let metadata = client
            .extract_metadata(b"%PDF-1.4", "application/pdf")
            .await
            .unwrap();

        assert_eq!(metadata["Content-Type"], "application/pdf");
        assert_eq!(metadata["pages"], 3);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_extract_metadata_server_error() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("PUT", "/meta")
            .with_status(500)
            .create_async()
            .await;

        let client = AnalysisClient::new(server.url());
        let err = client
            .extract_metadata(b"bytes", "text/csv")
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Metadata(_)));
        assert!(err.to_string().contains("Internal Server Error"));
    }

    #[tokio::test]
    async fn test_extract_metadata_rejects_non_object() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("PUT", "/meta")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[1,2,3]")
            .create_async()
            .await;

        let client = AnalysisClient::new(server.url());
        let err = client
            .extract_metadata(b"bytes", "text/csv")
            .await
            .unwrap_err();

        assert!(err.to_string().contains("array"));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let client = AnalysisClient::new("http://localhost:9998/");
        assert_eq!(client.base_url, "http://localhost:9998");
    }
}
