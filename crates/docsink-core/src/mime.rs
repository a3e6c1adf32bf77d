//! Filename extension classification and MIME mapping.
//!
//! Routing is decided purely by extension; file contents are never sniffed.

/// Which of the two extraction paths a file takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentClass {
    /// Parsed locally (`.xlsx`, `.csv`)
    Spreadsheet,
    /// Delegated to the remote analysis service (everything else)
    Document,
}

impl DocumentClass {
    pub fn classify(filename: &str) -> Self {
        match extension(filename).as_deref() {
            Some("xlsx") | Some("csv") => DocumentClass::Spreadsheet,
            _ => DocumentClass::Document,
        }
    }
}

/// Lowercased extension of `filename`, without the dot.
pub fn extension(filename: &str) -> Option<String> {
    std::path::Path::new(filename)
        .extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
}

/// MIME type for a filename, from a fixed lookup table.
pub fn mime_type_for(filename: &str) -> &'static str {
    match extension(filename).as_deref() {
        Some("pdf") => "application/pdf",
        Some("docx") => {
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document"
        }
        Some("xlsx") => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        Some("txt") => "text/plain",
        Some("csv") => "text/csv",
        _ => "application/octet-stream",
    }
}
