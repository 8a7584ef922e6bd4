//! HTML export.
//!
//! The markup mirrors what spreadsheet applications accept from the
//! clipboard: bordered tables with inline styles and no external CSS.

use std::io::Write;

use audit_model::SamplingReport;
use quick_xml::Writer;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};

use crate::error::{ExportError, Result};
use crate::format::{SUMMARY_HEADERS, summary_values};

const TABLE_STYLE: &str = "border-collapse: collapse;";
const HEADER_STYLE: &str = "background-color: #f3f4f6; padding: 5px;";
const CELL_STYLE: &str = "padding: 5px;";

/// Renders the report tables as an HTML fragment.
pub fn render_html_fragment(report: &SamplingReport) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write_tables(&mut writer, report)?;
    Ok(String::from_utf8(writer.into_inner())?)
}

/// Renders the report as a standalone HTML document.
pub fn render_html(report: &SamplingReport) -> Result<String> {
    let mut writer = Writer::new(Vec::new());
    write_event(&mut writer, Event::DocType(BytesText::from_escaped("html")))?;
    write_event(&mut writer, Event::Start(BytesStart::new("html")))?;

    write_event(&mut writer, Event::Start(BytesStart::new("head")))?;
    let mut meta = BytesStart::new("meta");
    meta.push_attribute(("charset", "utf-8"));
    write_event(&mut writer, Event::Empty(meta))?;
    write_text_element(&mut writer, "title", "Audit sample", None)?;
    write_event(&mut writer, Event::End(BytesEnd::new("head")))?;

    write_event(&mut writer, Event::Start(BytesStart::new("body")))?;
    let generated = format!(
        "{} generated {} from input SHA-256 {}",
        report.method.label(),
        report.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
        report.population_digest
    );
    write_text_element(&mut writer, "p", &generated, None)?;
    write_tables(&mut writer, report)?;
    write_event(&mut writer, Event::End(BytesEnd::new("body")))?;
    write_event(&mut writer, Event::End(BytesEnd::new("html")))?;

    Ok(String::from_utf8(writer.into_inner())?)
}

fn write_tables<W: Write>(writer: &mut Writer<W>, report: &SamplingReport) -> Result<()> {
    let values = summary_values(&report.summary);
    write_table(writer, "Summary", &SUMMARY_HEADERS, &[values.as_slice()])?;

    for (title, records) in [
        ("Target Items", &report.target_items),
        ("Sampled Items", &report.sampled_items),
    ] {
        if records.is_empty() {
            continue;
        }
        let rows: Vec<&[String]> = records.iter().map(|record| record.cells.as_slice()).collect();
        write_table(writer, title, &report.headers, &rows)?;
    }
    Ok(())
}

fn write_table<W, H, C>(
    writer: &mut Writer<W>,
    title: &str,
    headers: &[H],
    rows: &[&[C]],
) -> Result<()>
where
    W: Write,
    H: AsRef<str>,
    C: AsRef<str>,
{
    write_text_element(writer, "h3", title, None)?;

    let mut table = BytesStart::new("table");
    table.push_attribute(("border", "1"));
    table.push_attribute(("style", TABLE_STYLE));
    write_event(writer, Event::Start(table))?;

    write_event(writer, Event::Start(BytesStart::new("thead")))?;
    write_event(writer, Event::Start(BytesStart::new("tr")))?;
    for header in headers {
        write_text_element(writer, "th", header.as_ref(), Some(HEADER_STYLE))?;
    }
    write_event(writer, Event::End(BytesEnd::new("tr")))?;
    write_event(writer, Event::End(BytesEnd::new("thead")))?;

    write_event(writer, Event::Start(BytesStart::new("tbody")))?;
    for row in rows {
        write_event(writer, Event::Start(BytesStart::new("tr")))?;
        for cell in *row {
            write_text_element(writer, "td", cell.as_ref(), Some(CELL_STYLE))?;
        }
        write_event(writer, Event::End(BytesEnd::new("tr")))?;
    }
    write_event(writer, Event::End(BytesEnd::new("tbody")))?;

    write_event(writer, Event::End(BytesEnd::new("table")))?;
    write_event(writer, Event::Empty(BytesStart::new("br")))
}

fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    text: &str,
    style: Option<&str>,
) -> Result<()> {
    let mut start = BytesStart::new(name);
    if let Some(style) = style {
        start.push_attribute(("style", style));
    }
    write_event(writer, Event::Start(start))?;
    write_event(writer, Event::Text(BytesText::new(text)))?;
    write_event(writer, Event::End(BytesEnd::new(name)))
}

fn write_event<W: Write>(writer: &mut Writer<W>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|error| ExportError::Html(error.to_string()))
}
