//! Docsink Processing Library
//!
//! Local spreadsheet decoding: XLSX workbooks (calamine) and CSV files are
//! flattened into a single tab-separated text blob. Every other format is
//! extracted remotely and never reaches this crate.

pub mod csv;
pub mod row;
pub mod xlsx;

pub use row::{flatten_sheets, Sheet, SheetRow};

use docsink_core::{mime, AppError};

/// Flatten a spreadsheet upload into tab-separated text, dispatching on the
/// filename extension. Anything that is not `.xlsx` or `.csv` is a routing
/// mistake and fails with `UnsupportedFormat`.
pub fn flatten_spreadsheet(filename: &str, data: &[u8]) -> Result<String, AppError> {
    match mime::extension(filename).as_deref() {
        Some("xlsx") => xlsx::flatten_xlsx(data),
        Some("csv") => csv::flatten_csv(data),
        other => Err(AppError::UnsupportedFormat(
            other.unwrap_or("<none>").to_string(),
        )),
    }
}
