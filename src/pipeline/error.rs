//! Error types for the conversion pipeline.
//!
//! Every way a conversion can fail is a `ConvertError` variant. The entry point
//! maps any of them to the same console message and a non-zero exit code, so the
//! variants mainly exist to give the log record its context.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Category of a conversion failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    NotFound,
    UnsupportedFormat,
    ReadError,
    InsufficientColumns,
    WriteError,
    /// Anything outside the conversion itself (only raised by the entry point)
    UnexpectedError,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FailureKind::NotFound => "not found",
            FailureKind::UnsupportedFormat => "unsupported format",
            FailureKind::ReadError => "read error",
            FailureKind::InsufficientColumns => "insufficient columns",
            FailureKind::WriteError => "write error",
            FailureKind::UnexpectedError => "unexpected error",
        };
        f.write_str(name)
    }
}

/// Errors that can occur while converting a spreadsheet.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Input path does not name an existing regular file.
    #[error("Input file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    /// Input extension is outside the accepted spreadsheet set.
    ///
    /// `extension` is the extension as written by the user, including the dot,
    /// or empty when the path has none.
    #[error("Invalid file type: {extension}. Expected Excel file format.")]
    UnsupportedFormat { extension: String },

    /// The input could not be opened or parsed as a spreadsheet.
    #[error("Error reading spreadsheet {}: {source:#}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    /// The sheet has fewer columns than the conversion copies.
    #[error("Input file has fewer than {required} columns: {found} found")]
    InsufficientColumns { found: usize, required: usize },

    /// The output could not be produced.
    #[error("Error writing spreadsheet {}: {source:#}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },
}

impl ConvertError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ConvertError::NotFound { .. } => FailureKind::NotFound,
            ConvertError::UnsupportedFormat { .. } => FailureKind::UnsupportedFormat,
            ConvertError::Read { .. } => FailureKind::ReadError,
            ConvertError::InsufficientColumns { .. } => FailureKind::InsufficientColumns,
            ConvertError::Write { .. } => FailureKind::WriteError,
        }
    }

    /// Whether the failure is reported at warning rather than error level.
    pub fn is_warning(&self) -> bool {
        matches!(self, ConvertError::InsufficientColumns { .. })
    }
}
