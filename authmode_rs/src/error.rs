//! Per-file error taxonomy.

use thiserror::Error;

use crate::types::{DEFAULT_INDENT, FileOutcome};

/// Errors raised while reading or writing a single JSON file.
///
/// None of these abort a run; the runner reports them and moves on.
#[derive(Error, Debug)]
pub enum CodecError {
    /// Zero-length file, never parsed.
    #[error("Empty file")]
    EmptyFile,

    /// Content is not valid UTF-8.
    #[error("File encoding issues")]
    Encoding(#[source] std::str::Utf8Error),

    /// Syntax error, with the indentation already inferred from the text.
    #[error("Invalid JSON: {message}")]
    InvalidJson { message: String, indent: usize },

    /// Any other I/O failure while reading.
    #[error("Error reading file: {0}")]
    Read(#[source] std::io::Error),

    #[error("{0}")]
    Write(#[source] std::io::Error),
}

impl CodecError {
    /// Indentation width associated with the failure.
    pub fn indent(&self) -> usize {
        match self {
            CodecError::InvalidJson { indent, .. } => *indent,
            _ => DEFAULT_INDENT,
        }
    }

    pub fn outcome(&self) -> FileOutcome {
        match self {
            CodecError::EmptyFile => FileOutcome::SkippedEmpty,
            CodecError::InvalidJson { .. } => FileOutcome::SkippedInvalidJson,
            CodecError::Encoding(_) | CodecError::Read(_) => FileOutcome::SkippedUnreadable,
            CodecError::Write(_) => FileOutcome::WriteFailed,
        }
    }
}
