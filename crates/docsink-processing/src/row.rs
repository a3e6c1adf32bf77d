//! Sheet and row model for flattening.
//!
//! Rows come in two shapes: plain ordered cell sequences, and keyed rows
//! (ordered column-name/value pairs, e.g. from a header-mapped parse). Each
//! shape has its own flattening rule instead of runtime type inspection;
//! keyed rows join their values in enumeration order, keys are never sorted.

/// One decoded worksheet.
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    pub name: String,
    pub rows: Vec<SheetRow>,
}

/// One row of a worksheet.
#[derive(Debug, Clone, PartialEq)]
pub enum SheetRow {
    /// Ordered sequence of cell values
    Ordered(Vec<String>),
    /// Ordered mapping of column name to value
    Keyed(Vec<(String, String)>),
}

impl SheetRow {
    /// A row is empty when it has no cells or every cell renders empty.
    /// Blank workbook lines decode as rows of empty cells, so a pure
    /// length check would keep them.
    pub fn is_empty(&self) -> bool {
        match self {
            SheetRow::Ordered(cells) => cells.iter().all(|c| c.is_empty()),
            SheetRow::Keyed(pairs) => pairs.iter().all(|(_, v)| v.is_empty()),
        }
    }

    /// Tab-join the row's cell values.
    pub fn to_tab_line(&self) -> String {
        match self {
            SheetRow::Ordered(cells) => cells.join("\t"),
            SheetRow::Keyed(pairs) => pairs
                .iter()
                .map(|(_, v)| v.as_str())
                .collect::<Vec<_>>()
                .join("\t"),
        }
    }
}

/// Flatten decoded sheets into one text blob.
///
/// Sheets keep workbook order. When the workbook has more than one sheet,
/// each is preceded by a `Sheet: <name>` line; a blank line separates
/// sheets. Empty rows are dropped.
pub fn flatten_sheets(sheets: &[Sheet]) -> String {
    let multi_sheet = sheets.len() > 1;

    let parts: Vec<String> = sheets
        .iter()
        .map(|sheet| {
            let mut lines = Vec::new();
            if multi_sheet {
                lines.push(format!("Sheet: {}", sheet.name));
            }
            for row in &sheet.rows {
                if row.is_empty() {
                    continue;
                }
                lines.push(row.to_tab_line());
            }
            lines.join("\n")
        })
        .collect();

    parts.join("\n\n")
}
