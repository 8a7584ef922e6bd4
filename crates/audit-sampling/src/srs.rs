//! Simple random sampling.

use audit_model::{Record, Result, SamplingError};

use crate::random::RandomSource;
use crate::sample::SampleOutcome;

/// Draws `size` rows uniformly without replacement.
///
/// Shuffles the row indices with Fisher-Yates, keeps the first `size`, and
/// restores input order so the sample reads like the population.
pub fn simple_random_sample<'a, R>(
    population: &[&'a Record],
    size: usize,
    rng: &mut R,
) -> Result<SampleOutcome<'a>>
where
    R: RandomSource + ?Sized,
{
    if size > population.len() {
        return Err(SamplingError::SampleTooLarge {
            requested: size,
            available: population.len(),
        });
    }

    let mut indices: Vec<usize> = (0..population.len()).collect();
    for i in (1..indices.len()).rev() {
        let j = rng.next_index(i);
        indices.swap(i, j);
    }
    indices.truncate(size);
    indices.sort_unstable();

    Ok(SampleOutcome {
        records: indices.into_iter().map(|idx| population[idx]).collect(),
        drawn: size,
        filled: 0,
    })
}
