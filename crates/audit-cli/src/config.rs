//! Sampling options from a TOML file, overridden by command-line flags.
//!
//! ```toml
//! has_header = true
//! delimiter = ";"
//! amount_column = 4
//! sample_size = 25
//! minimum_value = 5000
//! target_value = 50000
//! method = "mus"
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use audit_model::{ColumnIndex, SamplingMethod, SamplingOptions};

use crate::cli::{MethodArg, SampleArgs};

/// Reads sampling options from a TOML file.
pub fn load_options(path: &Path) -> Result<SamplingOptions> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read config file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("parse config file {}", path.display()))
}

/// Builds the options for one run: config file first, then flags.
pub fn resolve_options(args: &SampleArgs) -> Result<SamplingOptions> {
    let mut options = match &args.config {
        Some(path) => load_options(path)?,
        None => SamplingOptions::default(),
    };

    if args.no_header {
        options.parse.has_header = false;
    }
    if let Some(delimiter) = args.delimiter {
        options.parse.delimiter = delimiter;
    }
    if let Some(index) = args.id_column {
        options.id_column = ColumnIndex::new(index).context("invalid --id-column")?;
    }
    if let Some(index) = args.amount_column {
        options.amount_column =
            Some(ColumnIndex::new(index).context("invalid --amount-column")?);
    }
    if let Some(size) = args.sample_size {
        options.sample_size = Some(size);
    }
    if let Some(value) = args.minimum_value {
        options.minimum_value = Some(value);
    }
    if let Some(value) = args.target_value {
        options.target_value = Some(value);
    }
    if let Some(ids) = &args.target_ids {
        options.target_ids = Some(ids.clone());
    }
    if let Some(method) = args.method {
        options.method = match method {
            MethodArg::Srs => SamplingMethod::Srs,
            MethodArg::Mus => SamplingMethod::Mus,
        };
    }

    Ok(options)
}
