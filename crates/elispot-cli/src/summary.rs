use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use elispot_core::RunSummary;

/// Render the per-stage record counts and output location of a finished run.
pub fn print_summary(summary: &RunSummary) {
    println!("Output: {}", summary.output_path.display());
    println!("Features: {}", summary.feature_columns.join(", "));

    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Records")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for stage in &summary.stages {
        table.add_row(vec![Cell::new(stage.stage), Cell::new(stage.records)]);
    }
    table.add_row(vec![
        Cell::new("ROWS WRITTEN")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.rows_written).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn header_cell(name: &str) -> Cell {
    Cell::new(name).add_attribute(Attribute::Bold)
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
