//! Minimum-value (materiality) filter.

use audit_model::{ColumnIndex, Record};

use crate::amount::record_amount;

/// Stable partition of the remaining rows by a materiality floor.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MaterialityFilter<'a> {
    /// Rows kept for sampling.
    pub population: Vec<&'a Record>,
    /// Rows below the floor.
    pub excluded: Vec<&'a Record>,
    /// Floor applied; `0` when filtering was disabled.
    pub minimum: f64,
}

impl MaterialityFilter<'_> {
    /// Number of rows removed by the floor.
    pub fn excluded_count(&self) -> usize {
        self.excluded.len()
    }

    /// Returns true if a positive floor was applied.
    pub fn is_active(&self) -> bool {
        self.minimum > 0.0
    }
}

/// Keeps rows whose absolute amount is at least `minimum`.
///
/// A missing, zero or negative minimum disables filtering: every row is kept.
pub fn filter_by_minimum<'a>(
    remaining: &[&'a Record],
    amount_column: ColumnIndex,
    minimum: Option<f64>,
) -> MaterialityFilter<'a> {
    let Some(minimum) = minimum.filter(|value| *value > 0.0) else {
        return MaterialityFilter {
            population: remaining.to_vec(),
            excluded: Vec::new(),
            minimum: 0.0,
        };
    };

    let (population, excluded): (Vec<&Record>, Vec<&Record>) = remaining
        .iter()
        .copied()
        .partition(|record| record_amount(record, amount_column) >= minimum);

    tracing::debug!(
        kept = population.len(),
        excluded = excluded.len(),
        minimum,
        "applied minimum value filter"
    );

    MaterialityFilter {
        population,
        excluded,
        minimum,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records(amounts: &[&str]) -> Vec<Record> {
        amounts
            .iter()
            .enumerate()
            .map(|(position, amount)| {
                Record::new(position, vec![format!("R{position}"), amount.to_string()])
            })
            .collect()
    }

    fn positions(records: &[&Record]) -> Vec<usize> {
        records.iter().map(|r| r.position).collect()
    }

    #[test]
    fn test_floor_is_inclusive_and_absolute() {
        let rows = records(&["4 999,99", "5 000", "-7 500", "100", "12 000"]);
        let refs: Vec<&Record> = rows.iter().collect();
        let column = ColumnIndex::new(2).unwrap();

        let result = filter_by_minimum(&refs, column, Some(5_000.0));

        assert_eq!(positions(&result.population), vec![1, 2, 4]);
        assert_eq!(positions(&result.excluded), vec![0, 3]);
        assert_eq!(result.excluded_count(), 2);
        assert_eq!(result.minimum, 5_000.0);
        assert!(result.is_active());
    }

    #[test]
    fn test_disabled_filter_keeps_everything() {
        let rows = records(&["1", "0", "abc"]);
        let refs: Vec<&Record> = rows.iter().collect();
        let column = ColumnIndex::new(2).unwrap();

        for minimum in [None, Some(0.0), Some(-10.0)] {
            let result = filter_by_minimum(&refs, column, minimum);
            assert_eq!(positions(&result.population), vec![0, 1, 2]);
            assert!(result.excluded.is_empty());
            assert_eq!(result.minimum, 0.0);
            assert!(!result.is_active());
        }
    }
}
