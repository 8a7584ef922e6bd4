//! Sampling method dispatch.

use audit_model::{ColumnIndex, Record, Result, SampleStats, SamplingError, SamplingMethod};

use crate::mus::monetary_unit_sample;
use crate::random::RandomSource;
use crate::srs::simple_random_sample;

/// Sample drawn from the filtered population, in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleOutcome<'a> {
    pub records: Vec<&'a Record>,
    /// Items chosen by random draws.
    pub drawn: usize,
    /// Items appended by the fallback fill.
    pub filled: usize,
}

impl SampleOutcome<'_> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stats(&self, requested: usize) -> SampleStats {
        SampleStats {
            requested,
            drawn: self.drawn,
            filled: self.filled,
        }
    }
}

/// Draws `size` items from `population` with the chosen method.
///
/// An empty population is an error even when `size` is zero.
pub fn draw_sample<'a, R>(
    method: SamplingMethod,
    population: &[&'a Record],
    amount_column: ColumnIndex,
    size: usize,
    rng: &mut R,
) -> Result<SampleOutcome<'a>>
where
    R: RandomSource + ?Sized,
{
    if population.is_empty() {
        return Err(SamplingError::EmptyPopulation);
    }
    if size == 0 {
        return Ok(SampleOutcome::default());
    }

    match method {
        SamplingMethod::Srs => simple_random_sample(population, size, rng),
        SamplingMethod::Mus => monetary_unit_sample(population, amount_column, size, rng),
    }
}
