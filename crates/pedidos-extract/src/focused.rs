//! Focused-mode extraction: five normalized fields per input row.

use tracing::debug;

use pedidos_map::{DerivationColumns, resolve_derivation_columns};
use pedidos_model::{Cell, ColumnMap, ExtractError, Field, Result, SalesRecord, Table};

use crate::batch::{batch_from_cell, batch_from_description};
use crate::dates::{cell_to_date, credit_days, due_from_order, format_date, parse_day_first};
use crate::text::{clean_identifier, numeric_identifier_token};

/// Extracts one record per table row through the resolved column map.
///
/// Rows whose five fields all come out empty are dropped; an empty
/// result is `NoDataFound`. Stateless: repeated calls with the same
/// inputs yield identical output.
pub fn extract(table: &Table, map: &ColumnMap) -> Result<Vec<SalesRecord>> {
    let derivation = resolve_derivation_columns(&table.headers);
    let claimed = map.claimed_indices();

    let mut records = Vec::new();
    for row in 0..table.rows.len() {
        let record = extract_row(table, map, &derivation, &claimed, row);
        if !record.is_blank() {
            records.push(record);
        }
    }
    debug!(
        rows = table.rows.len(),
        records = records.len(),
        "focused extraction finished"
    );
    if records.is_empty() {
        return Err(ExtractError::NoDataFound);
    }
    Ok(records)
}

fn extract_row(
    table: &Table,
    map: &ColumnMap,
    derivation: &DerivationColumns,
    claimed: &[usize],
    row: usize,
) -> SalesRecord {
    let description = field_text(table, map, Field::Description, row);
    let detail = field_text(table, map, Field::Detail, row);
    let identifier = identifier_value(table, map, claimed, row);
    let due_date = due_date_value(table, map, derivation, row);
    let batch = batch_value(table, map, &description, row);

    SalesRecord {
        identifier,
        description,
        detail,
        due_date,
        batch,
    }
}

/// Stringified, trimmed cell for a resolved field; empty when the
/// column is unresolved or the cell absent.
fn field_text(table: &Table, map: &ColumnMap, field: Field, row: usize) -> String {
    map.get(field)
        .map(|column| table.cell(row, column.index).to_text())
        .unwrap_or_default()
}

fn identifier_value(table: &Table, map: &ColumnMap, claimed: &[usize], row: usize) -> String {
    let direct = map
        .get(Field::Identifier)
        .map(|column| clean_identifier(&table.cell(row, column.index).to_text()))
        .unwrap_or_default();
    if !direct.is_empty() {
        return direct;
    }

    // Row-level rescue: first numeric-looking token in any column no
    // field has claimed.
    for column in 0..table.headers.len() {
        if claimed.contains(&column) {
            continue;
        }
        let cell = table.cell(row, column);
        if cell.is_empty() {
            continue;
        }
        if let Some(token) = numeric_identifier_token(&cell.to_text()) {
            return token;
        }
    }
    String::new()
}

fn due_date_value(
    table: &Table,
    map: &ColumnMap,
    derivation: &DerivationColumns,
    row: usize,
) -> String {
    if let Some(column) = map.get(Field::DueDate) {
        let cell = table.cell(row, column.index);
        if !cell.is_empty() {
            if let Cell::DateTime(value) = cell {
                return format_date(value.date());
            }
            let text = cell.to_text();
            return match parse_day_first(&text) {
                Some(date) => format_date(date),
                None => text,
            };
        }
    }

    let order_date = derivation
        .order_date
        .and_then(|column| cell_to_date(table.cell(row, column)));
    let Some(order_date) = order_date else {
        return String::new();
    };
    let days = derivation
        .credit_terms
        .map(|column| credit_days(&table.cell(row, column).to_text(), 0))
        .unwrap_or(0);
    due_from_order(order_date, days)
}

fn batch_value(table: &Table, map: &ColumnMap, description: &str, row: usize) -> String {
    if let Some(batch) = batch_from_description(description) {
        return batch;
    }
    map.get(Field::Batch)
        .and_then(|column| batch_from_cell(table.cell(row, column.index)))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pedidos_map::build_column_map;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(ToString::to_string).collect()
    }

    fn date_cell(year: i32, month: u32, day: u32) -> Cell {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        Cell::DateTime(date.and_hms_opt(0, 0, 0).unwrap())
    }

    #[test]
    fn derives_due_date_from_order_date_and_terms() {
        let mut table = Table::new(headers(&[
            "NIT",
            "Descripción",
            "Fecha orden",
            "Condiciones de pago",
        ]));
        table.push_row(vec![
            Cell::Number(123456.0),
            Cell::Text("Producto X".to_string()),
            date_cell(2025, 11, 1),
            Cell::Text("30 días".to_string()),
        ]);

        let map = build_column_map(&table);
        let records = extract(&table, &map).unwrap();
        assert_eq!(records[0].due_date, "01/12/2025");
        assert_eq!(records[0].identifier, "123456");
    }

    #[test]
    fn dedicated_due_date_column_wins_over_derivation() {
        let mut table = Table::new(headers(&[
            "NIT",
            "FECHA DE VENCIMIENTO",
            "Fecha orden",
            "Condiciones de pago",
        ]));
        table.push_row(vec![
            Cell::Int(99),
            Cell::Text("15-01-2026".to_string()),
            date_cell(2025, 11, 1),
            Cell::Text("30 días".to_string()),
        ]);

        let map = build_column_map(&table);
        let records = extract(&table, &map).unwrap();
        assert_eq!(records[0].due_date, "15/01/2026");
    }

    #[test]
    fn unparseable_due_date_text_passes_through() {
        let mut table = Table::new(headers(&["NIT", "FECHA DE VENCIMIENTO"]));
        table.push_row(vec![
            Cell::Int(7),
            Cell::Text("al contado".to_string()),
        ]);

        let map = build_column_map(&table);
        let records = extract(&table, &map).unwrap();
        assert_eq!(records[0].due_date, "al contado");
    }

    #[test]
    fn identifier_rescued_from_unclaimed_numeric_column() {
        // The NIT column resolves but carries a placeholder; the value
        // lives in an unrelated column.
        let mut table = Table::new(headers(&["NIT", "Descripción", "Referencia"]));
        table.push_row(vec![
            Cell::Text("nan".to_string()),
            Cell::Text("Producto X".to_string()),
            Cell::Text("76543210".to_string()),
        ]);

        let map = build_column_map(&table);
        let records = extract(&table, &map).unwrap();
        assert_eq!(records[0].identifier, "76543210");
    }
}
