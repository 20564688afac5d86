//! Template-mode extraction: accounting-template rows from raw
//! sales-order exports.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use tracing::debug;

use pedidos_map::TemplateColumns;
use pedidos_model::{ExtractError, Result, Table, TemplateRecord};

use crate::batch::batch_from_description;
use crate::dates::{cell_to_date, credit_days, due_from_order, format_date};

/// Credit days assumed when a "días" marker is present but the digit
/// run does not parse.
const MARKER_FALLBACK_DAYS: i64 = 15;

/// Grouping rows the export interleaves with data: a month or date
/// banner ending in a parenthesized row count, e.g.
/// `noviembre 2025 (26)` or `21 nov. 2025 (26)`.
static GROUP_BANNER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}\s*\(\d+\)\s*$").expect("static banner pattern"));

fn is_group_banner(customer: &str) -> bool {
    GROUP_BANNER.is_match(customer)
}

/// Splits a `[code] name` cell into its code and name parts.
///
/// Cells without a bracketed code keep the whole text as the name.
fn split_code_name(raw: &str) -> (String, String) {
    let trimmed = raw.trim();
    if let Some(rest) = trimmed.strip_prefix('[')
        && let Some((code, name)) = rest.split_once(']')
    {
        return (code.trim().to_string(), name.trim().to_string());
    }
    (String::new(), trimmed.to_string())
}

/// Builds one template record per product line.
///
/// Rows without a customer, rows whose customer cell is a grouping
/// banner, and rows without a product line are skipped. Invoice and
/// order numbers are generated from the emitted row index.
pub fn extract_template(table: &Table, columns: &TemplateColumns) -> Result<Vec<TemplateRecord>> {
    let mut records = Vec::new();
    for row in 0..table.rows.len() {
        let customer = columns
            .customer
            .map(|column| table.cell(row, column).to_text())
            .unwrap_or_default();
        if customer.is_empty() || is_group_banner(&customer) {
            continue;
        }
        let product = columns
            .product
            .map(|column| table.cell(row, column).to_text())
            .unwrap_or_default();
        if product.is_empty() {
            continue;
        }

        records.push(build_record(
            table,
            columns,
            row,
            records.len() + 1,
            &customer,
            &product,
        ));
    }
    debug!(
        rows = table.rows.len(),
        records = records.len(),
        "template extraction finished"
    );
    if records.is_empty() {
        return Err(ExtractError::NoDataFound);
    }
    Ok(records)
}

fn build_record(
    table: &Table,
    columns: &TemplateColumns,
    row: usize,
    item: usize,
    customer: &str,
    product: &str,
) -> TemplateRecord {
    let (customer_code, customer_name) = split_code_name(customer);
    let (product_code, _) = split_code_name(product);

    let quantity = cell_f64(table, columns.quantity, row);
    let unit_price = cell_f64(table, columns.unit_price, row);
    let order_value = quantity * unit_price;

    let order_date = columns
        .order_date
        .and_then(|column| cell_to_date(table.cell(row, column)))
        .unwrap_or_else(today);

    let terms = cell_text(table, columns.payment_terms, row);
    let days = credit_days(&terms, MARKER_FALLBACK_DAYS);
    let due_date = due_from_order(order_date, days);

    let description = cell_text(table, columns.product_description, row);
    let batch = batch_from_description(&description).unwrap_or_default();

    TemplateRecord {
        invoice_number: format!("FACT-{item:04}"),
        invoice_date: format_date(order_date),
        order_number: format!("PED-{item:04}"),
        order_date: format_date(order_date),
        order_type: "VENTA".to_string(),
        customer_code,
        customer_name,
        city: cell_text(table, columns.branch, row),
        item,
        product_code,
        brand: String::new(),
        description,
        active_ingredient: String::new(),
        presentation: String::new(),
        list_price: unit_price,
        quantity,
        order_value,
        discount: 0.0,
        net_total: order_value,
        detail: cell_text(table, columns.terms, row),
        billing_month: order_date.format("%m/%Y").to_string(),
        credit_days: days,
        payment_due_date: due_date.clone(),
        paid_amount: String::new(),
        pending_balance: order_value,
        effective_payment_date: String::new(),
        observations: cell_text(table, columns.payment_mode, row),
        due_date,
        batch,
    }
}

fn cell_text(table: &Table, column: Option<usize>, row: usize) -> String {
    column
        .map(|column| table.cell(row, column).to_text())
        .unwrap_or_default()
}

fn cell_f64(table: &Table, column: Option<usize>, row: usize) -> f64 {
    column
        .and_then(|column| table.cell(row, column).as_f64())
        .unwrap_or(0.0)
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use pedidos_map::resolve_template_columns;
    use pedidos_model::Cell;

    fn order_table() -> Table {
        let headers: Vec<String> = [
            "Cliente",
            "Fecha orden",
            "Condiciones de pago",
            "Sucursal",
            "Términos y condiciones",
            "Modo de pago",
            "Líneas del pedido/Producto",
            "Líneas del pedido/Descripción",
            "Líneas del pedido/Cantidad",
            "Líneas del pedido/Precio unidad",
        ]
        .iter()
        .map(ToString::to_string)
        .collect();
        let mut table = Table::new(headers);

        let order_date = NaiveDate::from_ymd_opt(2025, 11, 21)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        // Grouping banner row as exported.
        table.push_row(vec![
            Cell::Text("noviembre 2025 (26)".to_string()),
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
        ]);
        table.push_row(vec![
            Cell::Text("[C001] FARMACIA CENTRAL".to_string()),
            Cell::DateTime(order_date),
            Cell::Text("30 días".to_string()),
            Cell::Text("La Paz".to_string()),
            Cell::Text("Entrega inmediata".to_string()),
            Cell::Text("Transferencia".to_string()),
            Cell::Text("[P100] Paracetamol 500mg".to_string()),
            Cell::Text("Paracetamol 500mg LOTE: 2516172".to_string()),
            Cell::Number(10.0),
            Cell::Number(2.5),
        ]);
        // Order header row without a product line.
        table.push_row(vec![
            Cell::Text("[C002] FARMACIA SUR".to_string()),
            Cell::DateTime(order_date),
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
            Cell::Empty,
        ]);
        table
    }

    #[test]
    fn builds_template_rows_from_product_lines() {
        let table = order_table();
        let columns = resolve_template_columns(&table.headers);
        let records = extract_template(&table, &columns).unwrap();

        assert_eq!(records.len(), 1);
        let record = &records[0];
        assert_eq!(record.invoice_number, "FACT-0001");
        assert_eq!(record.order_number, "PED-0001");
        assert_eq!(record.customer_code, "C001");
        assert_eq!(record.customer_name, "FARMACIA CENTRAL");
        assert_eq!(record.product_code, "P100");
        assert_eq!(record.order_value, 25.0);
        assert_eq!(record.pending_balance, 25.0);
        assert_eq!(record.credit_days, 30);
        assert_eq!(record.order_date, "21/11/2025");
        assert_eq!(record.due_date, "21/12/2025");
        assert_eq!(record.billing_month, "11/2025");
        assert_eq!(record.batch, "2516172");
        assert_eq!(record.city, "La Paz");
        assert_eq!(record.observations, "Transferencia");
    }

    #[test]
    fn banner_rows_are_recognized() {
        assert!(is_group_banner("noviembre 2025 (26)"));
        assert!(is_group_banner("21 nov. 2025 (26)"));
        assert!(!is_group_banner("[C001] FARMACIA CENTRAL"));
        assert!(!is_group_banner("EMPRESA 2025 SRL"));
    }

    #[test]
    fn empty_export_is_no_data() {
        let table = order_table();
        let columns = resolve_template_columns(&table.headers);
        let mut empty = Table::new(table.headers.clone());
        empty.push_row(vec![Cell::Text("noviembre 2025 (26)".to_string())]);
        assert!(matches!(
            extract_template(&empty, &columns),
            Err(ExtractError::NoDataFound)
        ));
    }

    #[test]
    fn code_name_split_handles_missing_brackets() {
        assert_eq!(
            split_code_name("[C001] FARMACIA CENTRAL"),
            ("C001".to_string(), "FARMACIA CENTRAL".to_string())
        );
        assert_eq!(
            split_code_name("CLIENTE SIN CODIGO"),
            (String::new(), "CLIENTE SIN CODIGO".to_string())
        );
    }
}
