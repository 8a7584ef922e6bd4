//! Error types for the sampling pipeline.

use thiserror::Error;

/// Input errors that halt a sampling run before any output is produced.
///
/// Every variant is user-correctable; the message carries the offending
/// values so the input can be fixed without inspecting the data.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SamplingError {
    // === Input Errors ===
    /// Pasted text is empty or whitespace-only.
    #[error("input data is empty; paste the spreadsheet rows first")]
    EmptyInput,

    /// A required parameter was not supplied.
    #[error("missing required parameter: {name}")]
    MissingParameter { name: &'static str },

    /// Cell delimiter must be a single ASCII character.
    #[error("invalid delimiter {delimiter:?}; use a single ASCII character such as a tab")]
    InvalidDelimiter { delimiter: char },

    // === Column Errors ===
    /// Column indices are 1-based; zero is never valid.
    #[error("invalid column index {index}; column indices start at 1")]
    InvalidColumnIndex { index: usize },

    /// Column index does not resolve within the first data row.
    #[error("column index {index} is out of range; the data has {columns} columns")]
    ColumnOutOfRange { index: usize, columns: usize },

    /// Amount column failed the numeric heuristic.
    #[error("column {index} does not appear to contain numeric values; check the column index")]
    NonNumericColumn { index: usize },

    // === Sampling Errors ===
    /// Requested more rows than the filtered population holds.
    #[error(
        "sample size ({requested}) cannot be greater than the filtered population size ({available})"
    )]
    SampleTooLarge { requested: usize, available: usize },

    /// Nothing left after target selection and the minimum-value filter.
    #[error("no items remain after applying target selection and the minimum value filter")]
    EmptyPopulation,

    /// Monetary unit sampling found no nonzero amounts.
    #[error("no items with nonzero amounts found in the amount column")]
    NoEligibleItems,

    /// Monetary unit sampling cannot reach the requested size.
    #[error(
        "sample size ({requested}) exceeds the number of items with nonzero amounts ({eligible})"
    )]
    InsufficientEligible { requested: usize, eligible: usize },
}

/// Result type for sampling operations.
pub type Result<T> = std::result::Result<T, SamplingError>;
