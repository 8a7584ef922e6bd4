//! Value totals across the partitions.

use audit_model::{ColumnIndex, Record, Summary};

use crate::amount::partition_total;

/// Computes the reconciled summary for one run.
///
/// Every total sums absolute amounts, so credits and debits both count
/// towards coverage.
pub fn summarize(
    population: &[&Record],
    targets: &[&Record],
    excluded: &[&Record],
    sample: &[&Record],
    amount_column: ColumnIndex,
) -> Summary {
    let summary = Summary::from_totals(
        partition_total(targets, amount_column),
        partition_total(population, amount_column),
        partition_total(sample, amount_column),
        partition_total(excluded, amount_column),
    );
    if !summary.grand_total.is_finite() {
        tracing::warn!(
            grand_total = summary.grand_total,
            "value totals overflowed; amounts are too large to sum"
        );
    }
    summary
}
