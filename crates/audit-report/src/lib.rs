//! Exports of audit sampling reports.
//!
//! - **TSV**: summary, target items and sampled items as spreadsheet sections
//! - **HTML**: the same tables with inline styles, escaped by `quick-xml`
//! - **JSON**: the full report, including draw statistics and input digest
//!
//! Amounts are formatted Swedish style (`1 234 567,89 kr`).

pub mod error;
pub mod export;
pub mod format;
pub mod html;
pub mod tsv;

pub use error::{ExportError, Result};
pub use export::{ExportFormat, render, write_export};
pub use format::{
    OVERFLOW_MARKER, SUMMARY_HEADERS, exclusion_message, format_currency, summary_values,
};
pub use html::{render_html, render_html_fragment};
pub use tsv::render_tsv;
