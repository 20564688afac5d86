use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span, warn};

use pedidos_extract::{extract, extract_template};
use pedidos_map::{
    TemplateColumn, TemplateColumns, build_column_map, focused_specs, resolve_template_columns,
};
use pedidos_model::Field;
use pedidos_output::{output_filename, write_focused_file, write_template_file};

use crate::cli::{ConvertArgs, ModeArg};
use crate::summary::apply_table_style;
use crate::types::{ConvertResult, ResolvedField};

pub fn run_fields() -> Result<()> {
    let mut table = Table::new();
    table.set_header(vec!["Field", "Candidate headers"]);
    apply_table_style(&mut table);
    for spec in focused_specs() {
        table.add_row(vec![
            spec.field.header().to_string(),
            spec.candidates.join(", "),
        ]);
    }
    println!("{table}");
    Ok(())
}

pub fn run_convert(args: &ConvertArgs) -> Result<ConvertResult> {
    let convert_span = info_span!(
        "convert",
        file = %args.file.display(),
        mode = args.mode.as_str()
    );
    let _guard = convert_span.enter();

    let filename = args
        .file
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();
    pedidos_ingest::validate_extension(filename)
        .with_context(|| format!("reject {}", args.file.display()))?;

    let ingest_start = Instant::now();
    let table = pedidos_ingest::read_table(&args.file)
        .with_context(|| format!("read {}", args.file.display()))?;
    info!(
        columns = table.headers.len(),
        rows = table.rows.len(),
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    let output = args.output.clone().unwrap_or_else(|| {
        let name = output_filename(chrono::Local::now().naive_local());
        match args.file.parent() {
            Some(parent) => parent.join(name),
            None => name.into(),
        }
    });

    let extract_start = Instant::now();
    let (records_out, resolved) = match args.mode {
        ModeArg::Focused => {
            let map = build_column_map(&table);
            let resolved = focused_resolution(&map);
            for entry in &resolved {
                if entry.column.is_none() {
                    warn!(field = %entry.field, "no column resolved for field");
                }
            }
            let records = extract(&table, &map)?;
            write_focused_file(&output, &records)
                .with_context(|| format!("write {}", output.display()))?;
            (records.len(), resolved)
        }
        ModeArg::Template => {
            let columns = resolve_template_columns(&table.headers);
            let resolved = template_resolution(&table.headers, &columns);
            let records = extract_template(&table, &columns)?;
            write_template_file(&output, &records)
                .with_context(|| format!("write {}", output.display()))?;
            (records.len(), resolved)
        }
    };
    info!(
        records = records_out,
        duration_ms = extract_start.elapsed().as_millis(),
        output = %output.display(),
        "conversion complete"
    );

    Ok(ConvertResult {
        input: args.file.clone(),
        output,
        mode: args.mode,
        rows_in: table.rows.len(),
        records_out,
        resolved,
    })
}

fn focused_resolution(map: &pedidos_model::ColumnMap) -> Vec<ResolvedField> {
    Field::ALL
        .iter()
        .map(|&field| ResolvedField {
            field: field.header().to_string(),
            column: map.get(field).map(|column| column.header.clone()),
        })
        .collect()
}

fn template_resolution(headers: &[String], columns: &TemplateColumns) -> Vec<ResolvedField> {
    let index_of = |column: TemplateColumn| -> Option<usize> {
        match column {
            TemplateColumn::Customer => columns.customer,
            TemplateColumn::Product => columns.product,
            TemplateColumn::ProductDescription => columns.product_description,
            TemplateColumn::Quantity => columns.quantity,
            TemplateColumn::UnitPrice => columns.unit_price,
            TemplateColumn::OrderDate => columns.order_date,
            TemplateColumn::PaymentTerms => columns.payment_terms,
            TemplateColumn::Branch => columns.branch,
            TemplateColumn::Terms => columns.terms,
            TemplateColumn::PaymentMode => columns.payment_mode,
        }
    };
    TemplateColumn::ALL
        .iter()
        .map(|&column| ResolvedField {
            field: column.candidates()[0].to_string(),
            column: index_of(column).map(|index| headers[index].clone()),
        })
        .collect()
}
