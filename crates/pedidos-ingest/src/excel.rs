use std::path::Path;

use calamine::{Data, Reader, open_workbook_auto};
use tracing::debug;

use pedidos_model::{Cell, ExtractError, Result, Table};

/// File extensions accepted for upload, lowercase.
pub const ALLOWED_EXTENSIONS: [&str; 2] = ["xlsx", "xls"];

/// Preferred sheet name; exports from the source system always use it.
const PRIMARY_SHEET: &str = "Sheet1";

/// Checks that the filename carries an accepted spreadsheet extension
/// and returns it lowercased.
pub fn validate_extension(filename: &str) -> Result<String> {
    let extension = filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default();
    if ALLOWED_EXTENSIONS.contains(&extension.as_str()) {
        Ok(extension)
    } else {
        Err(ExtractError::UnsupportedFileType { extension })
    }
}

/// Loads a spreadsheet into a [`Table`].
///
/// Reads `Sheet1` when the workbook has one, otherwise the first sheet.
/// The first row with any non-blank cell becomes the header row; all
/// rows after it become data rows.
pub fn read_table(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path).map_err(ExtractError::unreadable)?;

    let sheet_names = workbook.sheet_names();
    let sheet = if sheet_names.iter().any(|name| name == PRIMARY_SHEET) {
        PRIMARY_SHEET.to_string()
    } else {
        sheet_names.first().cloned().ok_or(ExtractError::NoDataFound)?
    };
    debug!(sheet = %sheet, "reading worksheet");

    let range = workbook
        .worksheet_range(&sheet)
        .map_err(ExtractError::unreadable)?;

    let table = table_from_rows(range.rows())?;
    debug!(
        columns = table.headers.len(),
        rows = table.rows.len(),
        "worksheet loaded"
    );
    Ok(table)
}

/// Splits raw rows into a header row plus data rows.
fn table_from_rows<'a>(rows: impl Iterator<Item = &'a [Data]>) -> Result<Table> {
    let mut rows = rows.skip_while(|row| row.iter().all(cell_is_blank));
    let header_row = rows.next().ok_or(ExtractError::NoDataFound)?;

    let headers = header_row
        .iter()
        .map(|cell| convert_cell(cell).to_text())
        .collect();
    let mut table = Table::new(headers);
    for row in rows {
        table.push_row(row.iter().map(convert_cell).collect());
    }
    Ok(table)
}

fn cell_is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(value) => value.trim().is_empty(),
        _ => false,
    }
}

fn convert_cell(cell: &Data) -> Cell {
    match cell {
        Data::Empty | Data::Error(_) => Cell::Empty,
        Data::String(value) => {
            let trimmed = value.trim();
            if trimmed.is_empty() {
                Cell::Empty
            } else {
                Cell::Text(trimmed.to_string())
            }
        }
        Data::Float(value) => Cell::Number(*value),
        Data::Int(value) => Cell::Int(*value),
        Data::Bool(value) => Cell::Bool(*value),
        Data::DateTime(value) => match value.as_datetime() {
            Some(datetime) => Cell::DateTime(datetime),
            None => Cell::Empty,
        },
        Data::DateTimeIso(value) | Data::DurationIso(value) => Cell::Text(value.clone()),
    }
}
