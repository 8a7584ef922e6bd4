//! Audit sampling data model.
//!
//! Shared types for every stage of the sampling pipeline:
//!
//! - **Tables**: parsed spreadsheet rows tagged with their input position
//! - **Options**: the immutable configuration object for one run
//! - **Summaries**: reconciled value totals over the partitions
//! - **Reports**: the owned output handed to exporters

pub mod column;
pub mod error;
pub mod options;
pub mod report;
pub mod summary;
pub mod table;

pub use column::ColumnIndex;
pub use error::{Result, SamplingError};
pub use options::{DEFAULT_DELIMITER, ParseOptions, SamplingMethod, SamplingOptions};
pub use report::{ExclusionNotice, SampleStats, SamplingReport};
pub use summary::Summary;
pub use table::{Record, Table, default_column_names};
