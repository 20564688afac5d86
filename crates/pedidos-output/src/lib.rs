//! CSV output: semicolon-separated, UTF-8, fixed column orders.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use pedidos_model::{ExtractError, Result, SalesRecord, TemplateRecord, format_numeric};

/// Focused-schema header row, output column order.
pub const FOCUSED_HEADERS: [&str; 5] = [
    "NIT",
    "DESCRIPCION",
    "DETALLE",
    "FECHA DE VENCIMIENTO",
    "LOTE",
];

/// Template-schema header row, matching the accounting template.
pub const TEMPLATE_HEADERS: [&str; 29] = [
    "Factura",
    "Fecha de factura",
    "N° PEDIDO",
    "FECHA pedido",
    "TIPO",
    "CLIENTE",
    "RAZON",
    "CIUDAD",
    "ITEM",
    "CODIGO",
    "MARCA",
    "DESCRIPCION",
    "PRINCIPIO ACTIVO",
    "PRESENTACION",
    "P.LISTA FARMACIA Bs.",
    "Cantidad",
    "Valor del pedido Bs.",
    "descuento",
    "Neto de desc =Total factura",
    "Detalle",
    "Mes de facturacion",
    "Dias de credito",
    "Fecha de vencimiento del pago",
    "CxC (pago realizado)",
    "CxC Saldo pendiente de pago",
    "Fecha de pago efectiva",
    "Observaciones",
    "fecha de vencimiento",
    "LOTE",
];

fn csv_writer<W: Write>(writer: W) -> csv::Writer<W> {
    csv::WriterBuilder::new().delimiter(b';').from_writer(writer)
}

fn csv_err(error: csv::Error) -> ExtractError {
    ExtractError::Io(io::Error::other(error))
}

/// Writes focused-mode records as semicolon CSV.
pub fn write_focused<W: Write>(writer: W, records: &[SalesRecord]) -> Result<()> {
    let mut csv = csv_writer(writer);
    csv.write_record(FOCUSED_HEADERS).map_err(csv_err)?;
    for record in records {
        csv.write_record(record.fields()).map_err(csv_err)?;
    }
    csv.flush()?;
    Ok(())
}

/// Writes template-mode records as semicolon CSV.
pub fn write_template<W: Write>(writer: W, records: &[TemplateRecord]) -> Result<()> {
    let mut csv = csv_writer(writer);
    csv.write_record(TEMPLATE_HEADERS).map_err(csv_err)?;
    for record in records {
        csv.write_record(template_row(record)).map_err(csv_err)?;
    }
    csv.flush()?;
    Ok(())
}

fn template_row(record: &TemplateRecord) -> Vec<String> {
    vec![
        record.invoice_number.clone(),
        record.invoice_date.clone(),
        record.order_number.clone(),
        record.order_date.clone(),
        record.order_type.clone(),
        record.customer_code.clone(),
        record.customer_name.clone(),
        record.city.clone(),
        record.item.to_string(),
        record.product_code.clone(),
        record.brand.clone(),
        record.description.clone(),
        record.active_ingredient.clone(),
        record.presentation.clone(),
        format_numeric(record.list_price),
        format_numeric(record.quantity),
        format_numeric(record.order_value),
        format_numeric(record.discount),
        format_numeric(record.net_total),
        record.detail.clone(),
        record.billing_month.clone(),
        record.credit_days.to_string(),
        record.payment_due_date.clone(),
        record.paid_amount.clone(),
        format_numeric(record.pending_balance),
        record.effective_payment_date.clone(),
        record.observations.clone(),
        record.due_date.clone(),
        record.batch.clone(),
    ]
}

pub fn write_focused_file(path: &Path, records: &[SalesRecord]) -> Result<()> {
    write_focused(File::create(path)?, records)
}

pub fn write_template_file(path: &Path, records: &[TemplateRecord]) -> Result<()> {
    write_template(File::create(path)?, records)
}

/// Timestamped name for a generated output file.
pub fn output_filename(now: chrono::NaiveDateTime) -> String {
    format!("plantilla_llena_{}.csv", now.format("%Y%m%d_%H%M%S"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> SalesRecord {
        SalesRecord {
            identifier: "123456".to_string(),
            description: "Producto X LOTE: 2516172".to_string(),
            detail: "entrega parcial".to_string(),
            due_date: "01/12/2025".to_string(),
            batch: "2516172".to_string(),
        }
    }

    #[test]
    fn focused_output_is_semicolon_separated() {
        let mut buffer = Vec::new();
        write_focused(&mut buffer, &[sample_record()]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next().unwrap(),
            "NIT;DESCRIPCION;DETALLE;FECHA DE VENCIMIENTO;LOTE"
        );
        assert_eq!(
            lines.next().unwrap(),
            "123456;Producto X LOTE: 2516172;entrega parcial;01/12/2025;2516172"
        );
        assert_eq!(lines.next(), None);
    }

    #[test]
    fn template_output_has_full_header_set() {
        let record = TemplateRecord {
            invoice_number: "FACT-0001".to_string(),
            item: 1,
            quantity: 10.0,
            list_price: 2.5,
            order_value: 25.0,
            net_total: 25.0,
            pending_balance: 25.0,
            ..TemplateRecord::default()
        };
        let mut buffer = Vec::new();
        write_template(&mut buffer, &[record]).unwrap();
        let text = String::from_utf8(buffer).unwrap();
        let header = text.lines().next().unwrap();
        assert_eq!(header.split(';').count(), TEMPLATE_HEADERS.len());
        assert!(header.starts_with("Factura;Fecha de factura;"));
        assert!(header.ends_with(";fecha de vencimiento;LOTE"));

        let row = text.lines().nth(1).unwrap();
        assert!(row.starts_with("FACT-0001;"));
        assert!(row.contains(";25;"));
    }

    #[test]
    fn file_writer_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_focused_file(&path, &[sample_record()]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("NIT;"));
    }

    #[test]
    fn output_filename_is_timestamped() {
        let now = chrono::NaiveDate::from_ymd_opt(2025, 11, 21)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        assert_eq!(output_filename(now), "plantilla_llena_20251121_083000.csv");
    }
}
