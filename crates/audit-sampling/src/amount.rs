//! Amount lookup on records.

use audit_model::{ColumnIndex, Record};
use audit_transform::absolute_amount;

/// Absolute amount of a record's amount cell; missing cells count as `0`.
pub fn record_amount(record: &Record, column: ColumnIndex) -> f64 {
    absolute_amount(record.cell(column).unwrap_or_default())
}

/// Sum of absolute amounts over a partition, in partition order.
///
/// An empty partition totals `+0.0`.
pub fn partition_total(records: &[&Record], column: ColumnIndex) -> f64 {
    records
        .iter()
        .map(|record| record_amount(record, column))
        .fold(0.0, |total, amount| total + amount)
}
