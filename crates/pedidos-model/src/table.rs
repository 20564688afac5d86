use chrono::NaiveDateTime;

/// A single spreadsheet cell value.
///
/// Cells are possibly-absent scalars: text, numbers, booleans, or
/// date/times. `Empty` covers both missing cells and blank strings
/// normalized away at ingest.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Int(i64),
    Bool(bool),
    DateTime(NaiveDateTime),
    Empty,
}

impl Cell {
    /// Returns true for `Empty` and for text cells that trim to nothing.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(value) => value.trim().is_empty(),
            _ => false,
        }
    }

    /// Returns true for numeric-typed cells (not numeric-looking text).
    pub fn is_numeric(&self) -> bool {
        matches!(self, Self::Number(_) | Self::Int(_))
    }

    /// Extracts the date/time component, if this cell carries one.
    pub fn as_datetime(&self) -> Option<NaiveDateTime> {
        match self {
            Self::DateTime(value) => Some(*value),
            _ => None,
        }
    }

    /// Numeric view of the cell. Text is parsed leniently.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Int(value) => Some(*value as f64),
            Self::Text(value) => value.trim().parse::<f64>().ok(),
            _ => None,
        }
    }

    /// Plain-text rendering of the cell.
    ///
    /// Floats with a zero fractional part render without the trailing
    /// `.0`; date/times at midnight render as a bare date.
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(value) => value.trim().to_string(),
            Self::Number(value) => format_numeric(*value),
            Self::Int(value) => value.to_string(),
            Self::Bool(value) => {
                if *value {
                    "1".to_string()
                } else {
                    "0".to_string()
                }
            }
            Self::DateTime(value) => {
                if value.time() == chrono::NaiveTime::MIN {
                    value.format("%d/%m/%Y").to_string()
                } else {
                    value.format("%d/%m/%Y %H:%M:%S").to_string()
                }
            }
            Self::Empty => String::new(),
        }
    }
}

/// Renders a float without a redundant `.0` suffix.
pub fn format_numeric(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

/// One spreadsheet sheet in memory: ordered headers plus ordered rows.
///
/// Loaded once per request; immutable during processing.
#[derive(Debug, Clone)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

impl Table {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Index of the column with exactly this header.
    pub fn column_index(&self, header: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == header)
    }

    /// The cell at (row, column); `Empty` when the row is short.
    pub fn cell(&self, row: usize, column: usize) -> &Cell {
        self.rows
            .get(row)
            .and_then(|cells| cells.get(column))
            .unwrap_or(&Cell::Empty)
    }

    /// True when every non-empty cell in the column is numeric-typed
    /// and at least one such cell exists.
    pub fn column_is_numeric(&self, column: usize) -> bool {
        let mut seen = false;
        for row in &self.rows {
            let cell = row.get(column).unwrap_or(&Cell::Empty);
            if cell.is_empty() {
                continue;
            }
            if !cell.is_numeric() {
                return false;
            }
            seen = true;
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defloats_integral_numbers() {
        assert_eq!(Cell::Number(123456.0).to_text(), "123456");
        assert_eq!(Cell::Number(12.5).to_text(), "12.5");
    }

    #[test]
    fn column_is_numeric_ignores_gaps() {
        let mut table = Table::new(vec!["A".to_string()]);
        table.push_row(vec![Cell::Number(1.0)]);
        table.push_row(vec![Cell::Empty]);
        table.push_row(vec![Cell::Int(7)]);
        assert!(table.column_is_numeric(0));

        table.push_row(vec![Cell::Text("x".to_string())]);
        assert!(!table.column_is_numeric(0));
    }

    #[test]
    fn short_rows_read_as_empty() {
        let mut table = Table::new(vec!["A".to_string(), "B".to_string()]);
        table.push_row(vec![Cell::Int(1)]);
        assert_eq!(table.cell(0, 1), &Cell::Empty);
        assert_eq!(table.cell(5, 0), &Cell::Empty);
    }
}
