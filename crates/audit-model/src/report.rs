//! Owned result of a sampling run, ready for export.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::options::SamplingMethod;
use crate::summary::Summary;
use crate::table::Record;

/// How the sample was assembled.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SampleStats {
    /// Requested sample size.
    pub requested: usize,
    /// Items chosen by random draws.
    pub drawn: usize,
    /// Items appended by the deterministic monetary-unit fallback.
    pub filled: usize,
}

impl SampleStats {
    /// Returns true if the fallback fill contributed any items.
    pub fn used_fallback(&self) -> bool {
        self.filled > 0
    }
}

/// Items removed by the minimum-value filter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExclusionNotice {
    pub excluded_count: usize,
    pub minimum_value: f64,
}

/// Everything a downstream exporter needs, without re-touching the numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SamplingReport {
    pub generated_at: DateTime<Utc>,
    pub method: SamplingMethod,
    /// SHA-256 of the raw input text.
    pub population_digest: String,
    /// Header row, or `Column N` placeholders.
    pub headers: Vec<String>,
    pub target_items: Vec<Record>,
    /// Explicit target identifiers that matched no row.
    #[serde(default)]
    pub unmatched_ids: Vec<String>,
    pub sampled_items: Vec<Record>,
    pub summary: Summary,
    pub stats: SampleStats,
    /// Present only when the filter excluded at least one item.
    pub exclusion: Option<ExclusionNotice>,
}

impl SamplingReport {
    /// Returns true if any items were selected for 100% testing.
    pub fn has_targets(&self) -> bool {
        !self.target_items.is_empty()
    }
}
