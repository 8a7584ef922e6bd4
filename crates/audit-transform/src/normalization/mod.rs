//! Normalization functions for spreadsheet cells.
//!
//! - **numeric**: Locale-tolerant amount parsing

pub mod numeric;

// Re-export commonly used items
pub use numeric::{absolute_amount, looks_numeric, normalize_amount, parse_amount};
