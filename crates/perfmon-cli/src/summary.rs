use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::pipeline::RunReport;

pub fn print_summary(report: &RunReport) {
    println!("Input:  {}", report.input_csv.display());
    println!("Output: {}", report.output_csv.display());
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Header columns"), Cell::new(report.header_columns)]);
    table.add_row(vec![
        Cell::new("Selected metrics"),
        Cell::new(report.selected_metrics),
    ]);
    table.add_row(vec![Cell::new("Rows read"), Cell::new(report.rows_read)]);
    table.add_row(vec![Cell::new("Rows kept"), Cell::new(report.rows_kept)]);
    table.add_row(vec![
        Cell::new("Records written")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(report.records_written).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(60);
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
