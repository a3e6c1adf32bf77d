use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The result of processing one uploaded file.
///
/// Created once per request and never mutated afterwards; the request handler
/// owns it until it is persisted and serialized into the response.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessedDocument {
    /// Extracted (or flattened) text content
    pub content: String,
    /// Metadata mapping as returned by the remote analysis service
    pub metadata: Map<String, Value>,
    /// Original uploaded filename
    pub filename: String,
    /// MIME type derived from the filename extension
    pub mime_type: String,
    /// Timestamp of pipeline completion
    pub processing_date: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_names_are_camel_case() {
        let doc = ProcessedDocument {
            content: "hello".to_string(),
            metadata: Map::new(),
            filename: "report.pdf".to_string(),
            mime_type: "application/pdf".to_string(),
            processing_date: Utc::now(),
        };
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["content"], "hello");
        assert_eq!(value["filename"], "report.pdf");
        assert_eq!(value["mimeType"], "application/pdf");
        assert!(value.get("processingDate").is_some());
        assert!(value.get("mime_type").is_none());
    }
}
