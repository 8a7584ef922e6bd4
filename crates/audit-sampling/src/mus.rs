//! Monetary unit sampling.
//!
//! Each eligible item is weighted by its absolute amount. Draws pick a
//! random monetary unit in `[0, total)` and select the item whose
//! cumulative range contains it; duplicate hits are discarded. The number of
//! draws is capped, so a heavily skewed population can exhaust the budget
//! before `size` distinct items are found. The shortfall is then filled with
//! unselected eligible items in input order.

use std::collections::BTreeSet;

use audit_model::{ColumnIndex, Record, Result, SamplingError};

use crate::amount::record_amount;
use crate::random::RandomSource;
use crate::sample::SampleOutcome;

/// Random draws allowed per requested item.
pub const DRAWS_PER_ITEM: usize = 10;

/// Random draws allowed per eligible item.
pub const DRAWS_PER_ELIGIBLE: usize = 2;

/// Draws a value-weighted sample of `size` distinct rows.
///
/// Zero-amount rows are never selected.
pub fn monetary_unit_sample<'a, R>(
    population: &[&'a Record],
    amount_column: ColumnIndex,
    size: usize,
    rng: &mut R,
) -> Result<SampleOutcome<'a>>
where
    R: RandomSource + ?Sized,
{
    let eligible: Vec<(usize, f64)> = population
        .iter()
        .enumerate()
        .map(|(idx, record)| (idx, record_amount(record, amount_column)))
        .filter(|(_, amount)| *amount > 0.0)
        .collect();

    if eligible.is_empty() {
        return Err(SamplingError::NoEligibleItems);
    }
    if eligible.len() < size {
        return Err(SamplingError::InsufficientEligible {
            requested: size,
            eligible: eligible.len(),
        });
    }

    let cumulative: Vec<f64> = eligible
        .iter()
        .scan(0.0, |running, (_, amount)| {
            *running += amount;
            Some(*running)
        })
        .collect();
    let total = cumulative.last().copied().unwrap_or_default();
    let last = cumulative.len() - 1;

    let budget = size
        .saturating_mul(DRAWS_PER_ITEM)
        .min(eligible.len().saturating_mul(DRAWS_PER_ELIGIBLE));

    let mut selected = BTreeSet::new();
    let mut draws = 0;
    while draws < budget && selected.len() < size {
        let unit = rng.next_unit() * total;
        let hit = cumulative.partition_point(|running| *running < unit).min(last);
        selected.insert(eligible[hit].0);
        draws += 1;
    }
    let drawn = selected.len();

    for (idx, _) in &eligible {
        if selected.len() >= size {
            break;
        }
        selected.insert(*idx);
    }
    let filled = selected.len() - drawn;

    if filled > 0 {
        tracing::warn!(
            requested = size,
            drawn,
            filled,
            draws,
            "draw budget exhausted, filled sample with eligible items in input order"
        );
    } else {
        tracing::debug!(requested = size, draws, "monetary unit sample drawn");
    }

    Ok(SampleOutcome {
        records: selected.into_iter().map(|idx| population[idx]).collect(),
        drawn,
        filled,
    })
}
