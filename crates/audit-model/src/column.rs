//! 1-based column selection.

use std::fmt;
use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::error::SamplingError;

/// A 1-based column position, as a spreadsheet user counts columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct ColumnIndex(NonZeroUsize);

impl ColumnIndex {
    /// The first column.
    pub const FIRST: Self = Self(NonZeroUsize::MIN);

    /// Creates a column index from a 1-based position.
    pub fn new(index: usize) -> Result<Self, SamplingError> {
        NonZeroUsize::new(index)
            .map(Self)
            .ok_or(SamplingError::InvalidColumnIndex { index })
    }

    /// The 1-based position as entered by the user.
    #[must_use]
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// The 0-based offset into a row.
    #[must_use]
    pub const fn offset(self) -> usize {
        self.0.get() - 1
    }
}

impl Default for ColumnIndex {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<usize> for ColumnIndex {
    type Error = SamplingError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<ColumnIndex> for usize {
    fn from(value: ColumnIndex) -> Self {
        value.get()
    }
}

impl fmt::Display for ColumnIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offset_is_zero_based() {
        let column = ColumnIndex::new(2).unwrap();
        assert_eq!(column.get(), 2);
        assert_eq!(column.offset(), 1);
        assert_eq!(ColumnIndex::FIRST.offset(), 0);
    }

    #[test]
    fn test_zero_is_rejected() {
        assert_eq!(
            ColumnIndex::new(0),
            Err(SamplingError::InvalidColumnIndex { index: 0 })
        );
    }

    #[test]
    fn test_deserialize_validates() {
        let column: ColumnIndex = serde_json::from_str("3").unwrap();
        assert_eq!(column.get(), 3);
        assert!(serde_json::from_str::<ColumnIndex>("0").is_err());
    }
}
