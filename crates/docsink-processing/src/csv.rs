//! CSV decoding and flattening.
//!
//! The delimiter is sniffed from the first line over the candidates
//! `, ; \t | :` (highest occurrence count wins, comma by default), the same
//! heuristic dialect detection the usual CSV tooling applies. Cells are
//! trimmed, empty rows dropped, cells tab-joined, rows newline-joined.

use csv::{ReaderBuilder, Trim};
use docsink_core::AppError;

use crate::row::{flatten_sheets, Sheet, SheetRow};

const DELIMITER_CANDIDATES: [char; 5] = [',', ';', '\t', '|', ':'];

/// Flatten CSV bytes into tab-separated text.
pub fn flatten_csv(data: &[u8]) -> Result<String, AppError> {
    let text = std::str::from_utf8(data)
        .map_err(|e| AppError::SpreadsheetDecode(format!("CSV is not valid UTF-8: {}", e)))?;

    let delimiter = detect_delimiter(text);
    let mut reader = ReaderBuilder::new()
        .delimiter(delimiter as u8)
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record
            .map_err(|e| AppError::SpreadsheetDecode(format!("Failed to parse CSV: {}", e)))?;
        rows.push(SheetRow::Ordered(
            record.iter().map(str::to_string).collect(),
        ));
    }

    // A CSV is a single unnamed sheet; no `Sheet:` header is emitted.
    let sheet = Sheet {
        name: String::new(),
        rows,
    };
    Ok(flatten_sheets(std::slice::from_ref(&sheet)))
}

/// Pick the delimiter that occurs most often in the first line.
fn detect_delimiter(text: &str) -> char {
    let first_line = text.lines().next().unwrap_or_default();

    let mut best = ',';
    let mut max_count = 0;
    for &candidate in &DELIMITER_CANDIDATES {
        let count = first_line.matches(candidate).count();
        if count > max_count {
            max_count = count;
            best = candidate;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_rows_dropped_and_cells_trimmed() {
        let text = flatten_csv(b"a,b\n\n c,d").unwrap();
        assert_eq!(text, "a\tb\nc\td");
    }

    #[test]
    fn test_rows_keep_original_order() {
        let text = flatten_csv(b"3,z\n1,a\n2,b").unwrap();
        assert_eq!(text, "3\tz\n1\ta\n2\tb");
    }

    #[test]
    fn test_semicolon_delimiter_detected() {
        let text = flatten_csv(b"a;b;c\nd;e;f").unwrap();
        assert_eq!(text, "a\tb\tc\nd\te\tf");
    }

    #[test]
    fn test_pipe_delimiter_detected() {
        let text = flatten_csv(b"a|b\nc|d").unwrap();
        assert_eq!(text, "a\tb\nc\td");
    }

    #[test]
    fn test_defaults_to_comma_for_single_column() {
        let text = flatten_csv(b"alpha\nbeta").unwrap();
        assert_eq!(text, "alpha\nbeta");
    }

    #[test]
    fn test_ragged_rows_are_kept() {
        let text = flatten_csv(b"a,b,c\nd,e").unwrap();
        assert_eq!(text, "a\tb\tc\nd\te");
    }

    #[test]
    fn test_all_empty_row_is_dropped() {
        let text = flatten_csv(b"a,b\n,\nc,d").unwrap();
        assert_eq!(text, "a\tb\nc\td");
    }

    #[test]
    fn test_invalid_utf8_is_decode_error() {
        let err = flatten_csv(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, AppError::SpreadsheetDecode(_)));
    }
}
