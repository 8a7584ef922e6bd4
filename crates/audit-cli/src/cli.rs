//! CLI argument definitions for the audit sampler.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "audit-sampler",
    version,
    about = "Audit Sampler - Draw defensible samples from a ledger",
    long_about = "Draw audit samples from tab-separated ledger data.\n\n\
                  Separates 100%-tested target items, excludes items below a\n\
                  materiality floor, and samples the rest with simple random or\n\
                  monetary unit sampling."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow row values such as item identifiers in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Classify, filter and sample a ledger.
    Sample(SampleArgs),

    /// List the supported sampling methods.
    Methods,
}

#[derive(Parser)]
pub struct SampleArgs {
    /// Ledger file with one item per line (reads stdin when omitted or `-`).
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// TOML file with sampling options; flags override its values.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// 1-based column holding the monetary amount.
    #[arg(long = "amount-column", short = 'a', value_name = "N")]
    pub amount_column: Option<usize>,

    /// 1-based column holding the item identifier.
    #[arg(long = "id-column", value_name = "N")]
    pub id_column: Option<usize>,

    /// Number of items to sample.
    #[arg(long = "sample-size", short = 'n', value_name = "N")]
    pub sample_size: Option<usize>,

    /// Sampling method.
    #[arg(long = "method", short = 'm', value_enum)]
    pub method: Option<MethodArg>,

    /// Exclude items whose absolute amount is below this value.
    #[arg(long = "minimum-value", value_name = "AMOUNT")]
    pub minimum_value: Option<f64>,

    /// Test every item whose absolute amount is at or above this value.
    #[arg(long = "target-value", value_name = "AMOUNT")]
    pub target_value: Option<f64>,

    /// Comma-separated identifiers that are always tested.
    #[arg(long = "target-ids", value_name = "IDS")]
    pub target_ids: Option<String>,

    /// Treat the first line as data instead of a header.
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// Cell delimiter (default: tab).
    #[arg(long = "delimiter", value_name = "CHAR")]
    pub delimiter: Option<char>,

    /// Seed for a reproducible sample.
    #[arg(long = "seed", value_name = "SEED")]
    pub seed: Option<u64>,

    /// Write the report to this file after printing it.
    #[arg(long = "export", value_name = "PATH")]
    pub export: Option<PathBuf>,

    /// Export format (default: inferred from the export file extension).
    #[arg(long = "export-format", value_enum, requires = "export")]
    pub export_format: Option<ExportFormatArg>,
}

/// CLI sampling method choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum MethodArg {
    /// Simple random sampling.
    Srs,
    /// Monetary unit sampling.
    Mus,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ExportFormatArg {
    Tsv,
    Html,
    Json,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
