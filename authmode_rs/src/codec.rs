//! Read and write JSON files while keeping their indentation width.
//!
//! Decoding infers the width from the raw text before parsing; encoding
//! renders the tree back with that same width. Key order and number literals
//! are kept as written (`preserve_order`, `arbitrary_precision`), and
//! non-ASCII text is written literally.

use std::fs;
use std::path::Path;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::CodecError;
use crate::types::DEFAULT_INDENT;

/// A parsed file together with the indentation width it was written with.
#[derive(Debug, Clone)]
pub struct DecodedFile {
    pub value: Value,
    pub indent: usize,
}

/// Smallest positive run of leading spaces over all non-blank lines.
///
/// Tab-indented or flat files fall back to [`DEFAULT_INDENT`]. This takes the
/// minimum, not the most frequent width: a file with lines at 2 and 4 spaces
/// is treated as 2-space indented.
pub fn detect_indentation(content: &str) -> usize {
    content
        .split('\n')
        .filter(|line| !line.trim().is_empty() && line.starts_with(' '))
        .map(|line| line.len() - line.trim_start_matches(' ').len())
        .filter(|&width| width > 0)
        .min()
        .unwrap_or(DEFAULT_INDENT)
}

/// Parse already-decoded text, inferring its indentation first.
pub fn decode_str(content: &str) -> Result<DecodedFile, CodecError> {
    let indent = detect_indentation(content);
    match serde_json::from_str(content) {
        Ok(value) => Ok(DecodedFile { value, indent }),
        Err(e) => Err(CodecError::InvalidJson {
            message: e.to_string(),
            indent,
        }),
    }
}

pub fn read_json_file(path: &Path) -> Result<DecodedFile, CodecError> {
    let metadata = fs::metadata(path).map_err(CodecError::Read)?;
    if metadata.len() == 0 {
        return Err(CodecError::EmptyFile);
    }

    let bytes = fs::read(path).map_err(CodecError::Read)?;
    let content = String::from_utf8(bytes).map_err(|e| CodecError::Encoding(e.utf8_error()))?;
    decode_str(&content)
}

/// Render `value` with `indent` spaces per nesting level.
pub fn to_json_string(value: &Value, indent: usize) -> serde_json::Result<String> {
    let indent_str = " ".repeat(indent);
    let mut buf = Vec::new();
    let formatter = PrettyFormatter::with_indent(indent_str.as_bytes());
    let mut ser = Serializer::with_formatter(&mut buf, formatter);
    value.serialize(&mut ser)?;
    // serde_json only ever emits UTF-8
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Overwrite `path` with the rendered tree. Not atomic: a failed write can
/// leave the file truncated or partially written.
pub fn write_json_file(path: &Path, value: &Value, indent: usize) -> Result<(), CodecError> {
    let rendered = to_json_string(value, indent).map_err(|e| CodecError::Write(e.into()))?;
    fs::write(path, rendered).map_err(CodecError::Write)
}
