//! Cell normalization for audit sampling.
//!
//! Pasted spreadsheet cells carry no type. Every stage that needs an amount
//! goes through [`normalize_amount`], which accepts Swedish, English and
//! continental number formats and never fails.
//!
//! # Example
//!
//! ```
//! use audit_transform::{absolute_amount, normalize_amount};
//!
//! assert_eq!(normalize_amount("1 234,56"), 1234.56);
//! assert_eq!(normalize_amount("1,234.56"), 1234.56);
//! assert_eq!(absolute_amount("-500 kr"), 500.0);
//! ```

pub mod normalization;

pub use normalization::{absolute_amount, looks_numeric, normalize_amount, parse_amount};
