//! Target (key item) classification.
//!
//! Items at or above a value threshold, or named explicitly by identifier,
//! are tested at 100% and never enter the sampling population.

use std::collections::BTreeSet;

use audit_model::{ColumnIndex, Record, Result, SamplingError, Table};
use audit_transform::looks_numeric;

use crate::amount::record_amount;

/// Criteria selecting items for 100% testing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TargetCriteria {
    /// Absolute amount at or above which an item is a target.
    pub threshold: Option<f64>,
    /// Identifiers that are always targets (exact match after trim).
    pub ids: BTreeSet<String>,
}

impl TargetCriteria {
    pub fn new(threshold: Option<f64>, ids: BTreeSet<String>) -> Self {
        Self { threshold, ids }
    }

    /// Builds criteria from a threshold and a comma-separated id list.
    pub fn from_list(threshold: Option<f64>, ids: Option<&str>) -> Self {
        Self::new(threshold, ids.map(parse_identifier_list).unwrap_or_default())
    }

    fn is_target(&self, id: &str, amount: f64) -> bool {
        let by_value = self.threshold.is_some_and(|threshold| amount >= threshold);
        by_value || self.ids.contains(id)
    }
}

/// Stable partition of the data rows into targets and the remainder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Classification<'a> {
    pub targets: Vec<&'a Record>,
    pub remaining: Vec<&'a Record>,
    /// Explicit identifiers that matched no row.
    pub unmatched_ids: Vec<String>,
}

impl Classification<'_> {
    /// Number of items selected for 100% testing.
    pub fn target_count(&self) -> usize {
        self.targets.len()
    }
}

/// Splits a comma-separated identifier list, trimming and dropping empties.
pub fn parse_identifier_list(list: &str) -> BTreeSet<String> {
    list.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(ToString::to_string)
        .collect()
}

/// Rows inspected when judging whether a column is numeric.
const NUMERIC_SCAN_ROWS: usize = 10;

/// Returns true if any of the first [`NUMERIC_SCAN_ROWS`] rows holds
/// numeric evidence in `column`.
///
/// Rows too short to reach the column count as non-numeric.
fn column_looks_numeric(table: &Table, column: ColumnIndex) -> bool {
    table
        .records
        .iter()
        .take(NUMERIC_SCAN_ROWS)
        .any(|record| record.cell(column).is_some_and(looks_numeric))
}

/// Checks that `column` can serve as the amount column.
///
/// The column must exist in the first data row, and at least one of the
/// first ten rows must hold a number (or a literal `0`).
pub fn validate_amount_column(table: &Table, column: ColumnIndex) -> Result<()> {
    let columns = table.width();
    if column.offset() >= columns {
        return Err(SamplingError::ColumnOutOfRange {
            index: column.get(),
            columns,
        });
    }
    if !column_looks_numeric(table, column) {
        return Err(SamplingError::NonNumericColumn {
            index: column.get(),
        });
    }
    Ok(())
}

/// Partitions the table's rows into targets and remaining rows.
///
/// Relative input order is preserved within both partitions.
pub fn classify_targets<'a>(
    table: &'a Table,
    id_column: ColumnIndex,
    amount_column: ColumnIndex,
    criteria: &TargetCriteria,
) -> Classification<'a> {
    let mut classification = Classification::default();
    let mut matched_ids = BTreeSet::new();

    for record in &table.records {
        let id = record.cell(id_column).unwrap_or_default().trim();
        let amount = record_amount(record, amount_column);
        if criteria.ids.contains(id) {
            matched_ids.insert(id);
        }
        if criteria.is_target(id, amount) {
            classification.targets.push(record);
        } else {
            classification.remaining.push(record);
        }
    }

    classification.unmatched_ids = criteria
        .ids
        .iter()
        .filter(|id| !matched_ids.contains(id.as_str()))
        .cloned()
        .collect();

    tracing::debug!(
        targets = classification.targets.len(),
        remaining = classification.remaining.len(),
        unmatched_ids = classification.unmatched_ids.len(),
        "classified target items"
    );

    classification
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(rows: &[(&str, &str)]) -> Table {
        Table::new(
            Some(vec!["ID".into(), "Amount".into()]),
            rows.iter()
                .enumerate()
                .map(|(position, (id, amount))| {
                    Record::new(position, vec![id.to_string(), amount.to_string()])
                })
                .collect(),
        )
    }

    fn col(index: usize) -> ColumnIndex {
        ColumnIndex::new(index).unwrap()
    }

    fn ids(records: &[&Record]) -> Vec<String> {
        records.iter().map(|r| r.cells[0].clone()).collect()
    }

    #[test]
    fn test_parse_identifier_list() {
        let parsed = parse_identifier_list(" INV-1001, ,INV-1005 ,, INV-1001");
        assert_eq!(
            parsed.into_iter().collect::<Vec<_>>(),
            vec!["INV-1001", "INV-1005"]
        );
        assert!(parse_identifier_list("  ").is_empty());
    }

    #[test]
    fn test_threshold_is_inclusive_and_absolute() {
        let table = table(&[
            ("A", "49 999,99"),
            ("B", "50 000"),
            ("C", "-75 000,00"),
            ("D", "100"),
        ]);
        let criteria = TargetCriteria::from_list(Some(50_000.0), None);
        let result = classify_targets(&table, col(1), col(2), &criteria);

        assert_eq!(ids(&result.targets), vec!["B", "C"]);
        assert_eq!(ids(&result.remaining), vec!["A", "D"]);
        assert_eq!(result.target_count(), 2);
    }

    #[test]
    fn test_explicit_ids() {
        let table = table(&[("A", "1"), ("B", "2"), ("C", "3")]);
        let criteria = TargetCriteria::from_list(None, Some("C, A, Z"));
        let result = classify_targets(&table, col(1), col(2), &criteria);

        assert_eq!(ids(&result.targets), vec!["A", "C"]);
        assert_eq!(ids(&result.remaining), vec!["B"]);
        assert_eq!(result.unmatched_ids, vec!["Z"]);
    }

    #[test]
    fn test_id_match_is_exact() {
        let table = table(&[("inv-1", "1"), ("INV-1", "2")]);
        let criteria = TargetCriteria::from_list(None, Some("INV-1"));
        let result = classify_targets(&table, col(1), col(2), &criteria);
        assert_eq!(ids(&result.targets), vec!["INV-1"]);
    }

    #[test]
    fn test_no_criteria_keeps_everything() {
        let table = table(&[("A", "1"), ("B", "2")]);
        let result = classify_targets(&table, col(1), col(2), &TargetCriteria::default());
        assert!(result.targets.is_empty());
        assert_eq!(result.remaining.len(), 2);
    }

    #[test]
    fn test_missing_id_cell_is_empty() {
        let table = table(&[("A", "1")]);
        let criteria = TargetCriteria::from_list(None, Some("A"));
        let result = classify_targets(&table, col(5), col(2), &criteria);
        assert!(result.targets.is_empty());
    }

    #[test]
    fn test_validate_amount_column() {
        let table = table(&[("A", "100"), ("B", "abc")]);
        assert!(validate_amount_column(&table, col(2)).is_ok());
        assert_eq!(
            validate_amount_column(&table, col(3)),
            Err(SamplingError::ColumnOutOfRange {
                index: 3,
                columns: 2
            })
        );
        assert_eq!(
            validate_amount_column(&table, col(1)),
            Err(SamplingError::NonNumericColumn { index: 1 })
        );
    }

    #[test]
    fn test_numeric_detection() {
        let table = table(&[("Hyra", "1 200,00"), ("El", "0")]);
        assert!(column_looks_numeric(&table, col(2)));
        assert!(!column_looks_numeric(&table, col(1)));
        assert!(!column_looks_numeric(&table, col(3)));
    }

    #[test]
    fn test_only_first_ten_rows_count() {
        let mut rows = vec![("A", "n/a"); NUMERIC_SCAN_ROWS];
        rows.push(("B", "100"));
        let table = table(&rows);
        assert!(!column_looks_numeric(&table, col(2)));
        assert_eq!(
            validate_amount_column(&table, col(2)),
            Err(SamplingError::NonNumericColumn { index: 2 })
        );
    }

    #[test]
    fn test_validate_zero_column() {
        let table = table(&[("A", "0"), ("B", "0")]);
        assert!(validate_amount_column(&table, col(2)).is_ok());
    }

    #[test]
    fn test_validate_without_rows() {
        let table = Table::new(Some(vec!["ID".into(), "Amount".into()]), Vec::new());
        assert_eq!(
            validate_amount_column(&table, col(2)),
            Err(SamplingError::ColumnOutOfRange {
                index: 2,
                columns: 0
            })
        );
    }
}
