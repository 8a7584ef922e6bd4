//! Input loading for audit sampling.
//!
//! Turns pasted spreadsheet text (or a file / standard input holding the
//! same) into a [`Table`](audit_model::Table) of index-tagged records.
//!
//! # Features
//!
//! - **Text parsing**: Split delimited text into an optional header and data rows
//! - **Input sources**: Read UTF-8 files or standard input with size and encoding checks
//!
//! # Example
//!
//! ```
//! use audit_ingest::parse_table;
//! use audit_model::ParseOptions;
//!
//! let table = parse_table("ID\tAmount\nINV-1\t1 200,00\n", &ParseOptions::default())?;
//! assert_eq!(table.len(), 1);
//! # Ok::<(), audit_model::SamplingError>(())
//! ```

mod error;
mod source;
mod text;

// === Error Types ===
pub use error::{IngestError, Result};

// === Text Parsing ===
pub use text::parse_table;

// === Input Sources ===
pub use source::{MAX_INPUT_SIZE, check_file_size_with_limit, read_input_file, read_input_stdin};
