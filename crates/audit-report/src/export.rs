//! Export format selection and file output.

use std::fs;
use std::path::Path;

use audit_model::SamplingReport;

use crate::error::{ExportError, Result};
use crate::html::render_html;
use crate::tsv::render_tsv;

/// Supported export formats.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExportFormat {
    /// Tab-separated text for spreadsheets.
    #[default]
    Tsv,
    /// Standalone HTML document.
    Html,
    /// Full report as pretty-printed JSON.
    Json,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Tsv => "tsv",
            Self::Html => "html",
            Self::Json => "json",
        }
    }

    /// Infers the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("tsv" | "txt") => Ok(Self::Tsv),
            Some("html" | "htm") => Ok(Self::Html),
            Some("json") => Ok(Self::Json),
            _ => Err(ExportError::UnknownFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Renders the report in the given format.
pub fn render(report: &SamplingReport, format: ExportFormat) -> Result<String> {
    match format {
        ExportFormat::Tsv => render_tsv(report),
        ExportFormat::Html => render_html(report),
        ExportFormat::Json => Ok(serde_json::to_string_pretty(report)?),
    }
}

/// Renders the report and writes it to `path`.
pub fn write_export(report: &SamplingReport, format: ExportFormat, path: &Path) -> Result<()> {
    let content = render(report, format)?;
    fs::write(path, content).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), format = format.extension(), "wrote export");
    Ok(())
}
