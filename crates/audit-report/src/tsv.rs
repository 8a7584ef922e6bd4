//! Tab-separated export, laid out for pasting into a spreadsheet.
//!
//! Sections are separated by a blank line: the summary first, then target
//! and sampled items. Item sections are omitted when empty.

use audit_model::{Record, SamplingReport};
use csv::{QuoteStyle, Terminator, WriterBuilder};

use crate::error::Result;
use crate::format::{SUMMARY_HEADERS, summary_values};

/// Renders the report as TSV text.
pub fn render_tsv(report: &SamplingReport) -> Result<String> {
    let mut out = String::new();

    push_section(
        &mut out,
        "Summary",
        &write_rows(&[
            SUMMARY_HEADERS.map(String::from).to_vec(),
            summary_values(&report.summary).to_vec(),
        ])?,
    );

    for (title, records) in [
        ("Target Items", &report.target_items),
        ("Sampled Items", &report.sampled_items),
    ] {
        if records.is_empty() {
            continue;
        }
        let mut rows = vec![report.headers.clone()];
        rows.extend(records.iter().map(|record: &Record| record.cells.clone()));
        push_section(&mut out, title, &write_rows(&rows)?);
    }

    Ok(out)
}

fn push_section(out: &mut String, title: &str, body: &str) {
    out.push_str(title);
    out.push('\n');
    out.push_str(body);
    out.push('\n');
}

fn write_rows(rows: &[Vec<String>]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .delimiter(b'\t')
        .flexible(true)
        .quote_style(QuoteStyle::Necessary)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());
    for row in rows {
        writer.write_record(row)?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|error| csv::Error::from(error.into_error()))?;
    Ok(String::from_utf8(bytes)?)
}
