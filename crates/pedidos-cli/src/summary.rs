use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ConvertResult;

pub fn print_summary(result: &ConvertResult) {
    println!("Input:  {}", result.input.display());
    println!("Output: {}", result.output.display());
    println!("Mode:   {}", result.mode.as_str());

    let mut table = Table::new();
    table.set_header(vec![header_cell("Field"), header_cell("Resolved column")]);
    apply_table_style(&mut table);
    for entry in &result.resolved {
        let column_cell = match &entry.column {
            Some(column) => Cell::new(column).fg(Color::Green),
            None => dim_cell("(unresolved)"),
        };
        table.add_row(vec![
            Cell::new(&entry.field)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            column_cell,
        ]);
    }
    println!("{table}");

    let mut counts = Table::new();
    counts.set_header(vec![header_cell("Rows in"), header_cell("Records out")]);
    apply_table_style(&mut counts);
    align_column(&mut counts, 0, CellAlignment::Right);
    align_column(&mut counts, 1, CellAlignment::Right);
    counts.add_row(vec![
        Cell::new(result.rows_in),
        Cell::new(result.records_out).add_attribute(Attribute::Bold),
    ]);
    println!("{counts}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
