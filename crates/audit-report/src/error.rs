//! Export error types.

use std::path::PathBuf;
use std::string::FromUtf8Error;

use thiserror::Error;

/// Errors raised while rendering or writing an export.
///
/// An export failure never invalidates the sampling results it was
/// rendering.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to write TSV: {0}")]
    Tsv(#[from] csv::Error),

    #[error("failed to write HTML: {0}")]
    Html(String),

    #[error("failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("export produced invalid UTF-8: {0}")]
    Utf8(#[from] FromUtf8Error),

    #[error("cannot infer export format from '{path}'; use tsv, html or json")]
    UnknownFormat { path: PathBuf },

    #[error("failed to write export '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for export operations.
pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let error = ExportError::UnknownFormat {
            path: PathBuf::from("sample.xlsx"),
        };
        assert_eq!(
            error.to_string(),
            "cannot infer export format from 'sample.xlsx'; use tsv, html or json"
        );
    }
}
