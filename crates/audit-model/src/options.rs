//! Configuration options for a sampling run.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::column::ColumnIndex;
use crate::error::{Result, SamplingError};

/// Default cell delimiter for pasted spreadsheet data.
pub const DEFAULT_DELIMITER: char = '\t';

/// Sampling algorithm selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SamplingMethod {
    /// Unweighted simple random sampling.
    #[default]
    Srs,
    /// Value-weighted monetary unit sampling.
    Mus,
}

impl SamplingMethod {
    /// Get a human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Srs => "Random Sample",
            Self::Mus => "Monetary Unit Sample",
        }
    }

    /// Get a description of this method.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Srs => "Every item has an equal chance of selection",
            Self::Mus => "Larger absolute amounts have a proportionally higher chance of selection",
        }
    }

    /// All supported methods, in display order.
    #[must_use]
    pub const fn all() -> [Self; 2] {
        [Self::Srs, Self::Mus]
    }
}

impl fmt::Display for SamplingMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// How raw pasted text is split into rows and cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    /// First retained line is a header row.
    pub has_header: bool,
    /// Single-character cell delimiter.
    pub delimiter: char,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl ParseOptions {
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }
}

/// Immutable configuration for one pipeline run.
///
/// `amount_column` and `sample_size` are optional so that configuration
/// assembled from several sources can report which one is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplingOptions {
    #[serde(flatten)]
    pub parse: ParseOptions,
    /// Column holding the item identifier.
    pub id_column: ColumnIndex,
    /// Column holding the monetary amount.
    pub amount_column: Option<ColumnIndex>,
    /// Number of items to draw from the filtered population.
    pub sample_size: Option<usize>,
    /// Items below this absolute amount are excluded (disabled when <= 0).
    pub minimum_value: Option<f64>,
    /// Items at or above this absolute amount are 100% tested (disabled when <= 0).
    pub target_value: Option<f64>,
    /// Comma-separated identifiers that are always 100% tested.
    pub target_ids: Option<String>,
    pub method: SamplingMethod,
}

impl Default for SamplingOptions {
    fn default() -> Self {
        Self {
            parse: ParseOptions::default(),
            id_column: ColumnIndex::FIRST,
            amount_column: None,
            sample_size: None,
            minimum_value: None,
            target_value: None,
            target_ids: None,
            method: SamplingMethod::default(),
        }
    }
}

impl SamplingOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_header(mut self, has_header: bool) -> Self {
        self.parse.has_header = has_header;
        self
    }

    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.parse.delimiter = delimiter;
        self
    }

    pub fn with_id_column(mut self, column: ColumnIndex) -> Self {
        self.id_column = column;
        self
    }

    pub fn with_amount_column(mut self, column: ColumnIndex) -> Self {
        self.amount_column = Some(column);
        self
    }

    pub fn with_sample_size(mut self, size: usize) -> Self {
        self.sample_size = Some(size);
        self
    }

    pub fn with_minimum_value(mut self, value: f64) -> Self {
        self.minimum_value = Some(value);
        self
    }

    pub fn with_target_value(mut self, value: f64) -> Self {
        self.target_value = Some(value);
        self
    }

    pub fn with_target_ids(mut self, ids: impl Into<String>) -> Self {
        self.target_ids = Some(ids.into());
        self
    }

    pub fn with_method(mut self, method: SamplingMethod) -> Self {
        self.method = method;
        self
    }

    /// Amount column, or `MissingParameter` when unset.
    pub fn require_amount_column(&self) -> Result<ColumnIndex> {
        self.amount_column
            .ok_or(SamplingError::MissingParameter {
                name: "amount_column",
            })
    }

    /// Sample size, or `MissingParameter` when unset.
    pub fn require_sample_size(&self) -> Result<usize> {
        self.sample_size.ok_or(SamplingError::MissingParameter {
            name: "sample_size",
        })
    }

    /// Effective target threshold; zero and negative values disable it.
    pub fn target_threshold(&self) -> Option<f64> {
        self.target_value.filter(|value| *value > 0.0)
    }

    /// Effective materiality floor; zero and negative values disable it.
    pub fn minimum_floor(&self) -> Option<f64> {
        self.minimum_value.filter(|value| *value > 0.0)
    }
}
