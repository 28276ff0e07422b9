//! Run summary table printed to stdout.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::pipeline::RunSummary;

pub fn print_summary(summary: &RunSummary) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Rows")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Read"), Cell::new(summary.rows_read)]);
    table.add_row(vec![
        Cell::new("Blank (skipped)"),
        count_cell(summary.blank_rows, Color::Grey),
    ]);
    table.add_row(vec![
        Cell::new("Hidden"),
        count_cell(summary.hidden_rows, Color::Grey),
    ]);
    table.add_row(vec![
        Cell::new("Missing id"),
        count_cell(summary.missing_id_rows, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Duplicate id"),
        count_cell(summary.duplicate_id_rows, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Inactive (strict)"),
        count_cell(summary.inactive_dropped, Color::Grey),
    ]);
    table.add_row(vec![
        Cell::new("Written").add_attribute(Attribute::Bold),
        Cell::new(summary.written).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if summary.dry_run {
        println!("Dry run: {} shows, nothing written", summary.written);
    } else {
        println!(
            "Wrote {} shows to {}",
            summary.written,
            summary.out_path.display()
        );
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).fg(Color::Cyan).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        Cell::new(count)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
