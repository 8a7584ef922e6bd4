//! Shared helpers for the sampling integration tests.

#![allow(dead_code)]

use std::collections::VecDeque;

use audit_model::{Record, Table};
use audit_sampling::RandomSource;

/// Replays a fixed script of random values.
///
/// Panics when the script runs out, so a test fails loudly if an algorithm
/// consumes more randomness than expected.
#[derive(Debug, Default)]
pub struct ScriptedSource {
    indices: VecDeque<usize>,
    units: VecDeque<f64>,
    pub units_used: usize,
}

impl ScriptedSource {
    pub fn with_indices(indices: &[usize]) -> Self {
        Self {
            indices: indices.iter().copied().collect(),
            ..Self::default()
        }
    }

    pub fn with_units(units: &[f64]) -> Self {
        Self {
            units: units.iter().copied().collect(),
            ..Self::default()
        }
    }
}

impl RandomSource for ScriptedSource {
    fn next_index(&mut self, upper: usize) -> usize {
        let index = self.indices.pop_front().expect("index script exhausted");
        assert!(index <= upper, "scripted index {index} exceeds {upper}");
        index
    }

    fn next_unit(&mut self) -> f64 {
        self.units_used += 1;
        self.units.pop_front().expect("unit script exhausted")
    }
}

/// Builds an `ID, Amount` table.
pub fn ledger(rows: &[(&str, &str)]) -> Table {
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

pub fn ids(records: &[&Record]) -> Vec<String> {
    records.iter().map(|record| record.cells[0].clone()).collect()
}
