//! Audit sampling engine.
//!
//! Takes a parsed [`Table`](audit_model::Table) through four stages:
//!
//! 1. **Classify**: items above a value threshold or named by id are tested at 100%
//! 2. **Filter**: items below the materiality floor are excluded
//! 3. **Sample**: simple random or monetary unit sampling over what remains
//! 4. **Summarize**: reconciled value totals over every partition
//!
//! Every stage is a stable partition over borrowed records, so output rows
//! always appear in input order.
//!
//! # Example
//!
//! ```
//! use audit_model::{ColumnIndex, SamplingOptions};
//! use audit_sampling::{build_report, create_rng};
//!
//! let text = "ID\tAmount\nA\t60 000\nB\t7 000\nC\t9 500\n";
//! let options = SamplingOptions::default()
//!     .with_amount_column(ColumnIndex::new(2).unwrap())
//!     .with_sample_size(1)
//!     .with_target_value(50_000.0);
//!
//! let report = build_report(text, &options, &mut create_rng(Some(1))).unwrap();
//! assert_eq!(report.target_items.len(), 1);
//! assert_eq!(report.sampled_items.len(), 1);
//! ```

pub mod amount;
pub mod classify;
pub mod digest;
pub mod filter;
pub mod mus;
pub mod pipeline;
pub mod random;
pub mod sample;
pub mod srs;
pub mod summary;

pub use amount::{partition_total, record_amount};
pub use classify::{
    Classification, TargetCriteria, classify_targets, parse_identifier_list,
    validate_amount_column,
};
pub use digest::sha256_hex;
pub use filter::{MaterialityFilter, filter_by_minimum};
pub use mus::monetary_unit_sample;
pub use pipeline::{SamplingRun, build_report, run_pipeline};
pub use random::{RandomSource, create_rng};
pub use sample::{SampleOutcome, draw_sample};
pub use srs::simple_random_sample;
pub use summary::summarize;
