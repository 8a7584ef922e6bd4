//! Splitting pasted spreadsheet text into a table.

use audit_model::{ParseOptions, Record, Result, SamplingError, Table};

/// Parses delimited text into a [`Table`].
///
/// - Lines are split on `\n` (a trailing `\r` is dropped)
/// - Lines that are empty after trimming are discarded
/// - Cells are split on the single-character delimiter and trimmed
/// - No quote processing: pasted spreadsheet cells never contain the delimiter
///
/// With `has_header`, the first retained line becomes the header and is not
/// a data row.
pub fn parse_table(text: &str, options: &ParseOptions) -> Result<Table> {
    if text.trim().is_empty() {
        return Err(SamplingError::EmptyInput);
    }
    let delimiter = checked_delimiter(options.delimiter)?;

    let mut lines = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| split_line(line, delimiter));

    let header = if options.has_header {
        lines.next()
    } else {
        None
    };
    let records: Vec<Record> = lines
        .enumerate()
        .map(|(position, cells)| Record::new(position, cells))
        .collect();

    tracing::debug!(
        has_header = header.is_some(),
        rows = records.len(),
        columns = records.first().map_or(0, Record::len),
        "parsed input table"
    );

    Ok(Table::new(header, records))
}

/// Splits one line into trimmed cells.
fn split_line(line: &str, delimiter: char) -> Vec<String> {
    line.split(delimiter)
        .map(|cell| cell.trim().to_string())
        .collect()
}

fn checked_delimiter(delimiter: char) -> Result<char> {
    if delimiter.is_ascii() && delimiter != '\n' && delimiter != '\r' {
        Ok(delimiter)
    } else {
        Err(SamplingError::InvalidDelimiter { delimiter })
    }
}
