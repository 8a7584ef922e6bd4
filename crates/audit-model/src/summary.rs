//! Value totals over the sampling partitions.

use serde::{Deserialize, Serialize};

/// Absolute-amount totals supporting the audit conclusion.
///
/// `population_without_excluded` and `grand_total` are derived from the
/// partition totals so the reconciliation identities hold exactly.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Items tested at 100%.
    pub target_total: f64,
    /// The entire filtered population the sample was drawn from.
    pub population_total: f64,
    /// Items in the sample.
    pub sample_total: f64,
    /// Items below the materiality floor.
    pub excluded_total: f64,
    pub population_without_excluded: f64,
    pub grand_total: f64,
}

impl Summary {
    /// Builds a summary from the four partition totals.
    pub fn from_totals(
        target_total: f64,
        population_total: f64,
        sample_total: f64,
        excluded_total: f64,
    ) -> Self {
        let population_without_excluded = target_total + population_total;
        Self {
            target_total,
            population_total,
            sample_total,
            excluded_total,
            population_without_excluded,
            grand_total: population_without_excluded + excluded_total,
        }
    }
}
