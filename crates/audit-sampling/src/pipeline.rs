//! End-to-end sampling run: classify, filter, sample, summarize.

use audit_ingest::parse_table;
use audit_model::{
    ExclusionNotice, Record, Result, SamplingMethod, SamplingOptions, SamplingReport, Summary,
    Table,
};
use chrono::Utc;
use tracing::info_span;

use crate::classify::{Classification, TargetCriteria, classify_targets, validate_amount_column};
use crate::digest::sha256_hex;
use crate::filter::{MaterialityFilter, filter_by_minimum};
use crate::random::RandomSource;
use crate::sample::{SampleOutcome, draw_sample};
use crate::summary::summarize;

/// Partitions and sample of one run, borrowing the parsed table.
#[derive(Debug, Clone, PartialEq)]
pub struct SamplingRun<'a> {
    pub table: &'a Table,
    pub method: SamplingMethod,
    pub requested: usize,
    pub classification: Classification<'a>,
    pub filter: MaterialityFilter<'a>,
    pub sample: SampleOutcome<'a>,
    pub summary: Summary,
}

impl SamplingRun<'_> {
    /// Copies the run into an owned report.
    pub fn to_report(&self, population_digest: String) -> SamplingReport {
        let exclusion = (self.filter.excluded_count() > 0).then(|| ExclusionNotice {
            excluded_count: self.filter.excluded_count(),
            minimum_value: self.filter.minimum,
        });

        SamplingReport {
            generated_at: Utc::now(),
            method: self.method,
            population_digest,
            headers: self.table.column_names(),
            target_items: owned(&self.classification.targets),
            unmatched_ids: self.classification.unmatched_ids.clone(),
            sampled_items: owned(&self.sample.records),
            summary: self.summary,
            stats: self.sample.stats(self.requested),
            exclusion,
        }
    }
}

fn owned(records: &[&Record]) -> Vec<Record> {
    records.iter().map(|record| (*record).clone()).collect()
}

/// Runs every stage over a parsed table.
///
/// Validation happens before any partitioning, so an error leaves nothing
/// half-computed.
pub fn run_pipeline<'a, R>(
    table: &'a Table,
    options: &SamplingOptions,
    rng: &mut R,
) -> Result<SamplingRun<'a>>
where
    R: RandomSource + ?Sized,
{
    let amount_column = options.require_amount_column()?;
    let requested = options.require_sample_size()?;

    let classification = {
        let _span = info_span!("classify").entered();
        validate_amount_column(table, amount_column)?;
        let criteria =
            TargetCriteria::from_list(options.target_threshold(), options.target_ids.as_deref());
        classify_targets(table, options.id_column, amount_column, &criteria)
    };

    let filter = {
        let _span = info_span!("filter").entered();
        filter_by_minimum(
            &classification.remaining,
            amount_column,
            options.minimum_floor(),
        )
    };

    let sample = {
        let _span = info_span!("sample", method = %options.method, requested).entered();
        draw_sample(
            options.method,
            &filter.population,
            amount_column,
            requested,
            rng,
        )?
    };

    let summary = summarize(
        &filter.population,
        &classification.targets,
        &filter.excluded,
        &sample.records,
        amount_column,
    );

    tracing::info!(
        targets = classification.target_count(),
        population = filter.population.len(),
        excluded = filter.excluded_count(),
        sampled = sample.len(),
        "sampling run complete"
    );

    Ok(SamplingRun {
        table,
        method: options.method,
        requested,
        classification,
        filter,
        sample,
        summary,
    })
}

/// Parses raw input text and produces an owned report.
pub fn build_report<R>(text: &str, options: &SamplingOptions, rng: &mut R) -> Result<SamplingReport>
where
    R: RandomSource + ?Sized,
{
    let table = {
        let _span = info_span!("parse").entered();
        parse_table(text, &options.parse)?
    };
    let run = run_pipeline(&table, options, rng)?;
    Ok(run.to_report(sha256_hex(text.as_bytes())))
}
