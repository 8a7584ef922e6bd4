use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use audit_ingest::{read_input_file, read_input_stdin};
use audit_model::SamplingReport;
use audit_report::{ExportFormat, write_export};
use audit_sampling::{build_report, create_rng};

use crate::cli::{ExportFormatArg, SampleArgs};
use crate::config::resolve_options;
use crate::logging::redact_value;

/// Runs the sampling pipeline for the `sample` subcommand.
pub fn run_sample(args: &SampleArgs) -> Result<SamplingReport> {
    let options = resolve_options(args)?;
    let text = read_input(args.input.as_deref())?;

    if let Some(ids) = options.target_ids.as_deref() {
        tracing::debug!(target_ids = %redact_value(ids), "explicit target identifiers");
    }
    tracing::debug!(
        method = %options.method,
        seeded = args.seed.is_some(),
        "starting sampling run"
    );

    let mut rng = create_rng(args.seed);
    let report = build_report(&text, &options, &mut rng)?;

    if !report.unmatched_ids.is_empty() {
        let joined = report.unmatched_ids.join(", ");
        tracing::warn!(
            count = report.unmatched_ids.len(),
            ids = %redact_value(&joined),
            "target identifiers matched no item"
        );
    }

    Ok(report)
}

/// Writes the export requested by `--export`, if any.
///
/// Returns the written path.
pub fn export_report(report: &SamplingReport, args: &SampleArgs) -> Result<Option<PathBuf>> {
    let Some(path) = &args.export else {
        return Ok(None);
    };
    let format = match args.export_format {
        Some(ExportFormatArg::Tsv) => ExportFormat::Tsv,
        Some(ExportFormatArg::Html) => ExportFormat::Html,
        Some(ExportFormatArg::Json) => ExportFormat::Json,
        None => ExportFormat::from_path(path)?,
    };
    write_export(report, format, path)?;
    Ok(Some(path.clone()))
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => {
            read_input_file(path).with_context(|| format!("read input {}", path.display()))
        }
        _ => read_input_stdin().context("read standard input"),
    }
}
