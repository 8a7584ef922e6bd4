//! Delimited text parsing.

mod reader;

pub use reader::parse_table;
