//! Parsed spreadsheet data.

use serde::{Deserialize, Serialize};

use crate::column::ColumnIndex;

/// One data row, tagged with its position among the data rows.
///
/// The position is the tie-break and display order for every partition
/// built from a [`Table`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// 0-based position in the data rows (header excluded).
    pub position: usize,
    /// Trimmed cell values in column order.
    pub cells: Vec<String>,
}

impl Record {
    pub fn new(position: usize, cells: Vec<String>) -> Self {
        Self { position, cells }
    }

    /// Returns the cell at `column`, or `None` when the row is too short.
    pub fn cell(&self, column: ColumnIndex) -> Option<&str> {
        self.cells.get(column.offset()).map(String::as_str)
    }

    /// Returns the number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Returns true if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// Header row (optional) plus ordered data rows.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    pub header: Option<Vec<String>>,
    pub records: Vec<Record>,
}

impl Table {
    pub fn new(header: Option<Vec<String>>, records: Vec<Record>) -> Self {
        Self { header, records }
    }

    /// Returns the first data row, which fixes the valid column range.
    pub fn first_record(&self) -> Option<&Record> {
        self.records.first()
    }

    /// Number of columns in the first data row (0 when there is no data).
    pub fn width(&self) -> usize {
        self.first_record().map_or(0, Record::len)
    }

    /// Returns the number of data rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if there are no data rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Column names for display: the header when present, otherwise
    /// `Column 1..Column N` sized to the first data row.
    pub fn column_names(&self) -> Vec<String> {
        match &self.header {
            Some(header) => header.clone(),
            None => default_column_names(self.width()),
        }
    }
}

/// Generates `Column 1..Column N` placeholder names.
pub fn default_column_names(width: usize) -> Vec<String> {
    (1..=width).map(|idx| format!("Column {idx}")).collect()
}
