//! XLSX workbook decoding via calamine.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};
use docsink_core::AppError;

use crate::row::{flatten_sheets, Sheet, SheetRow};

/// Decode an XLSX workbook and flatten all sheets to tab-separated text.
pub fn flatten_xlsx(data: &[u8]) -> Result<String, AppError> {
    let sheets = decode_workbook(data)?;
    Ok(flatten_sheets(&sheets))
}

/// Decode a workbook into sheets, preserving workbook order.
///
/// A malformed binary fails here; a sheet that exists in the workbook index
/// but cannot be ranged is a decode failure too.
pub fn decode_workbook(data: &[u8]) -> Result<Vec<Sheet>, AppError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(data))
        .map_err(|e| AppError::SpreadsheetDecode(format!("Failed to decode workbook: {}", e)))?;

    let names = workbook.sheet_names().to_owned();
    tracing::debug!(sheets = names.len(), "Decoded workbook index");

    let mut sheets = Vec::with_capacity(names.len());
    for name in names {
        let range = workbook.worksheet_range(&name).map_err(|e| {
            AppError::SpreadsheetDecode(format!("Failed to decode sheet {}: {}", name, e))
        })?;

        let rows = range
            .rows()
            .map(|row| SheetRow::Ordered(row.iter().map(cell_to_string).collect()))
            .collect();

        sheets.push(Sheet { name, rows });
    }

    Ok(sheets)
}

fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_binary_is_decode_error() {
        let err = flatten_xlsx(b"definitely not a zip archive").unwrap_err();
        assert!(matches!(err, AppError::SpreadsheetDecode(_)));
    }

    #[test]
    fn test_empty_input_is_decode_error() {
        let err = flatten_xlsx(b"").unwrap_err();
        assert!(matches!(err, AppError::SpreadsheetDecode(_)));
    }

    #[test]
    fn test_cell_rendering() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String("hi".to_string())), "hi");
        assert_eq!(cell_to_string(&Data::Int(7)), "7");
        assert_eq!(cell_to_string(&Data::Bool(true)), "true");
    }
}
