//! Reading raw input text from files or standard input.

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::error::{IngestError, Result};

/// Maximum input size (64 MB). Pasted ledgers are far smaller.
pub const MAX_INPUT_SIZE: u64 = 64 * 1024 * 1024;

/// Reads a UTF-8 text file, rejecting oversized and UTF-16 files.
pub fn read_input_file(path: &Path) -> Result<String> {
    check_file_size_with_limit(path, MAX_INPUT_SIZE)?;

    let mut file = File::open(path).map_err(|e| open_error(path, e))?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes)
        .map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;

    validate_encoding(path, &bytes)?;

    let text = String::from_utf8(bytes).map_err(|e| IngestError::FileRead {
        path: path.to_path_buf(),
        source: io::Error::new(io::ErrorKind::InvalidData, e),
    })?;

    tracing::debug!(path = %path.display(), bytes = text.len(), "read input file");
    Ok(strip_bom(text))
}

/// Reads all of standard input.
pub fn read_input_stdin() -> Result<String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(IngestError::Stdin)?;
    tracing::debug!(bytes = text.len(), "read standard input");
    Ok(strip_bom(text))
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| open_error(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Rejects UTF-16 byte order marks; spreadsheet "Unicode text" exports
/// use UTF-16 and would otherwise parse as garbage.
fn validate_encoding(path: &Path, bytes: &[u8]) -> Result<()> {
    if bytes.len() >= 2 {
        // UTF-16 LE BOM
        if bytes[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        // UTF-16 BE BOM
        if bytes[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    Ok(())
}

fn strip_bom(text: String) -> String {
    match text.strip_prefix('\u{feff}') {
        Some(stripped) => stripped.to_string(),
        None => text,
    }
}

fn open_error(path: &Path, error: io::Error) -> IngestError {
    if error.kind() == io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}
