//! End-to-end sampling runs.

mod common;

use audit_model::{ColumnIndex, SamplingError, SamplingMethod, SamplingOptions};
use audit_sampling::{build_report, create_rng, run_pipeline};
use audit_transform::absolute_amount;
use common::{ScriptedSource, ids, ledger};

const ROWS: [(&str, &str); 12] = [
    ("A01", "60 000,00"),
    ("A02", "1 200,00"),
    ("A03", "15 000,00"),
    ("A04", "4 999,99"),
    ("A05", "8 000,00"),
    ("A06", "-22 000,00"),
    ("A07", "300"),
    ("A08", "5 000"),
    ("A09", "12 500,50"),
    ("A10", "n/a"),
    ("A11", "7 000"),
    ("A12", "49 999,99"),
];

fn amount_column() -> ColumnIndex {
    ColumnIndex::new(2).unwrap()
}

fn options(method: SamplingMethod, size: usize) -> SamplingOptions {
    SamplingOptions::default()
        .with_amount_column(amount_column())
        .with_sample_size(size)
        .with_target_value(50_000.0)
        .with_minimum_value(5_000.0)
        .with_method(method)
}

#[test]
fn srs_run_over_a_twelve_row_ledger() {
    let table = ledger(&ROWS);
    let mut rng = create_rng(Some(2024));
    let run = run_pipeline(&table, &options(SamplingMethod::Srs, 3), &mut rng).unwrap();

    assert_eq!(ids(&run.classification.targets), vec!["A01"]);
    assert_eq!(
        ids(&run.filter.population),
        vec!["A03", "A05", "A06", "A08", "A09", "A11", "A12"]
    );
    assert_eq!(ids(&run.filter.excluded), vec!["A02", "A04", "A07", "A10"]);

    let sampled = ids(&run.sample.records);
    assert_eq!(sampled.len(), 3);
    assert!(sampled.iter().all(|id| id != "A01"));
    assert!(sampled.windows(2).all(|pair| pair[0] < pair[1]));

    let expected: f64 = run
        .sample
        .records
        .iter()
        .map(|record| absolute_amount(&record.cells[1]))
        .sum();
    assert_eq!(run.summary.sample_total, expected);
    assert_eq!(run.summary.target_total, 60_000.0);
    assert!((run.summary.excluded_total - 6_499.99).abs() < 1e-6);
    assert!((run.summary.population_total - 119_500.49).abs() < 1e-6);
}

#[test]
fn srs_follows_the_random_source() {
    let table = ledger(&ROWS);
    // Seven population items: swap(6,0) swap(5,5) swap(4,1) swap(3,3) swap(2,0) swap(1,1)
    let mut source = ScriptedSource::with_indices(&[0, 5, 1, 3, 0, 1]);
    let run = run_pipeline(&table, &options(SamplingMethod::Srs, 2), &mut source).unwrap();

    // Leading indices after the shuffle are [2, 4].
    assert_eq!(ids(&run.sample.records), vec!["A06", "A09"]);
    assert_eq!(run.sample.drawn, 2);
}

#[test]
fn srs_with_full_population_returns_everything() {
    let table = ledger(&ROWS);
    let run = run_pipeline(
        &table,
        &options(SamplingMethod::Srs, 7),
        &mut create_rng(Some(1)),
    )
    .unwrap();
    assert_eq!(run.sample.records, run.filter.population);
    assert_eq!(run.summary.sample_total, run.summary.population_total);
}

#[test]
fn srs_larger_than_population_fails() {
    let table = ledger(&ROWS);
    let result = run_pipeline(
        &table,
        &options(SamplingMethod::Srs, 8),
        &mut create_rng(Some(1)),
    );
    assert_eq!(
        result.unwrap_err(),
        SamplingError::SampleTooLarge {
            requested: 8,
            available: 7
        }
    );
}

#[test]
fn zero_size_returns_an_empty_sample() {
    let table = ledger(&ROWS);
    for method in SamplingMethod::all() {
        let run = run_pipeline(&table, &options(method, 0), &mut create_rng(None)).unwrap();
        assert!(run.sample.is_empty());
        assert_eq!(run.summary.sample_total, 0.0);
    }
}

#[test]
fn everything_targeted_leaves_an_empty_population() {
    let table = ledger(&ROWS);
    let options = options(SamplingMethod::Srs, 1).with_target_value(1.0);
    let result = run_pipeline(&table, &options, &mut create_rng(None));
    // "n/a" is zero, so it is excluded rather than targeted.
    assert_eq!(result.unwrap_err(), SamplingError::EmptyPopulation);
}

#[test]
fn explicit_ids_are_targets_regardless_of_amount() {
    let table = ledger(&ROWS);
    let options = options(SamplingMethod::Srs, 1).with_target_ids("A07, A11, B99");
    let run = run_pipeline(&table, &options, &mut create_rng(Some(3))).unwrap();

    assert_eq!(ids(&run.classification.targets), vec!["A01", "A07", "A11"]);
    assert_eq!(run.classification.unmatched_ids, vec!["B99"]);
    assert!(!ids(&run.filter.excluded).contains(&"A07".to_string()));
}

#[test]
fn mus_selects_by_cumulative_value() {
    let table = ledger(&[("M1", "100"), ("M2", "0"), ("M3", "300"), ("M4", "600")]);
    let options = SamplingOptions::default()
        .with_amount_column(amount_column())
        .with_sample_size(2)
        .with_method(SamplingMethod::Mus);
    // total 1000; cumulative 100, 400, 1000
    let mut source = ScriptedSource::with_units(&[0.35, 0.39, 0.95]);

    let run = run_pipeline(&table, &options, &mut source).unwrap();

    assert_eq!(ids(&run.sample.records), vec!["M3", "M4"]);
    assert_eq!(run.sample.drawn, 2);
    assert_eq!(run.sample.filled, 0);
    assert_eq!(source.units_used, 3);
}

#[test]
fn mus_falls_back_when_the_draw_budget_runs_out() {
    let table = ledger(&[("M1", "1"), ("M2", "2"), ("M3", "9 997"), ("M4", "3")]);
    let options = SamplingOptions::default()
        .with_amount_column(amount_column())
        .with_sample_size(2)
        .with_method(SamplingMethod::Mus);
    // Budget is min(2 * 10, 4 * 2) = 8 draws, all landing on M3.
    let mut source = ScriptedSource::with_units(&[0.5; 8]);

    let run = run_pipeline(&table, &options, &mut source).unwrap();

    assert_eq!(ids(&run.sample.records), vec!["M1", "M3"]);
    assert_eq!(run.sample.drawn, 1);
    assert_eq!(run.sample.filled, 1);
    assert_eq!(source.units_used, 8);
}

#[test]
fn mus_without_enough_eligible_items_fails() {
    let table = ledger(&[("M1", "0"), ("M2", "10")]);
    let options = SamplingOptions::default()
        .with_amount_column(amount_column())
        .with_sample_size(2)
        .with_method(SamplingMethod::Mus);
    let result = run_pipeline(&table, &options, &mut create_rng(None));
    assert_eq!(
        result.unwrap_err(),
        SamplingError::InsufficientEligible {
            requested: 2,
            eligible: 1
        }
    );
}

#[test]
fn validation_errors_stop_the_run() {
    let table = ledger(&ROWS);
    let out_of_range =
        options(SamplingMethod::Srs, 1).with_amount_column(ColumnIndex::new(3).unwrap());
    assert_eq!(
        run_pipeline(&table, &out_of_range, &mut create_rng(None)).unwrap_err(),
        SamplingError::ColumnOutOfRange {
            index: 3,
            columns: 2
        }
    );

    let descriptions = ledger(&[("Hyra", "100"), ("El", "200")]);
    let text_column = options(SamplingMethod::Srs, 1).with_amount_column(ColumnIndex::FIRST);
    assert_eq!(
        run_pipeline(&descriptions, &text_column, &mut create_rng(None)).unwrap_err(),
        SamplingError::NonNumericColumn { index: 1 }
    );
}

#[test]
fn report_from_raw_text() {
    let text = "Ver\tBelopp\r\nV1\t60 000\r\nV2\t1 000\r\n\r\nV3\t9 000\r\n";
    let options = options(SamplingMethod::Mus, 1);
    let report = build_report(text, &options, &mut create_rng(Some(8))).unwrap();

    assert_eq!(report.headers, vec!["Ver", "Belopp"]);
    assert_eq!(report.target_items[0].cells[0], "V1");
    assert_eq!(report.sampled_items[0].cells[0], "V3");
    assert_eq!(report.sampled_items[0].position, 2);
    assert_eq!(report.summary.grand_total, 70_000.0);
    assert_eq!(report.exclusion.map(|notice| notice.excluded_count), Some(1));
    assert_eq!(report.population_digest.len(), 64);
}

#[test]
fn empty_text_is_rejected() {
    let result = build_report("  \n", &options(SamplingMethod::Srs, 1), &mut create_rng(None));
    assert_eq!(result.unwrap_err(), SamplingError::EmptyInput);
}
