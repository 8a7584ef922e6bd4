//! Terminal rendering of sampling reports.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use audit_model::{Record, SamplingMethod, SamplingReport};
use audit_report::{SUMMARY_HEADERS, exclusion_message, summary_values};

pub fn print_report(report: &SamplingReport) {
    println!("Method: {}", report.method);
    println!("Input SHA-256: {}", report.population_digest);
    if let Some(notice) = &report.exclusion {
        println!(
            "{}",
            exclusion_message(notice.excluded_count, notice.minimum_value)
        );
    }
    println!("{}", summary_table(report));

    if report.has_targets() {
        println!();
        println!("Target Items ({}):", report.target_items.len());
        println!("{}", records_table(&report.headers, &report.target_items));
    }
    if !report.unmatched_ids.is_empty() {
        eprintln!(
            "Warning: target ids not found: {}",
            report.unmatched_ids.join(", ")
        );
    }

    println!();
    println!("Sampled Items ({}):", report.sampled_items.len());
    if report.sampled_items.is_empty() {
        println!("(none)");
    } else {
        println!("{}", records_table(&report.headers, &report.sampled_items));
    }
    if report.stats.used_fallback() {
        eprintln!(
            "Note: {} of {} items were filled in input order after the draw limit was reached.",
            report.stats.filled, report.stats.requested
        );
    }
}

pub fn summary_table(report: &SamplingReport) -> Table {
    let mut table = Table::new();
    table.set_header(SUMMARY_HEADERS.iter().map(|name| header_cell(name)));
    apply_summary_table_style(&mut table);
    for column in 0..SUMMARY_HEADERS.len() {
        align_column(&mut table, column, CellAlignment::Right);
    }
    let values = summary_values(&report.summary);
    let last = values.len() - 1;
    table.add_row(values.into_iter().enumerate().map(|(idx, value)| {
        if idx == last {
            Cell::new(value).add_attribute(Attribute::Bold)
        } else {
            Cell::new(value)
        }
    }));
    table
}

pub fn records_table(headers: &[String], records: &[Record]) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("#")];
    header.extend(headers.iter().map(|name| header_cell(name)));
    table.set_header(header);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for record in records {
        let mut row = vec![dim_cell(record.position + 1)];
        row.extend(record.cells.iter().map(Cell::new));
        table.add_row(row);
    }
    table
}

pub fn methods_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Method"),
        header_cell("Name"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for method in SamplingMethod::all() {
        let key = match method {
            SamplingMethod::Srs => "srs",
            SamplingMethod::Mus => "mus",
        };
        table.add_row(vec![
            Cell::new(key).fg(Color::Cyan).add_attribute(Attribute::Bold),
            Cell::new(method.label()),
            Cell::new(method.description()),
        ]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(140);
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
