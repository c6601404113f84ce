//! File codec - the only layer that touches the disk.
//!
//! Understands exactly two payload shapes: UTF-8 JSON documents and opaque
//! binary buffers. Every file-system or parse error is converted to a
//! [`CodecError`] here; nothing above this layer sees a raw `io::Error`.
//!
//! Writes are not atomic (no temp-then-rename); a crash mid-write can leave
//! a truncated file. Accepted for a local single-user tool.

use std::fmt;
use std::path::Path;

use serde_json::Value;
use tokio::fs;

use crate::api::types::{FailureKind, FileOpResult};

/// Failure of a codec operation, already shaped for the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The disk said no: permission denied, disk full, path vanished.
    Io { message: String },
    /// The bytes were read fine but are not a valid JSON document.
    Parse { message: String },
}

impl fmt::Display for CodecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CodecError::Io { message } => write!(f, "I/O error: {message}"),
            CodecError::Parse { message } => write!(f, "Parse error: {message}"),
        }
    }
}

impl From<CodecError> for FileOpResult {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Io { message } => FileOpResult::Failed {
                kind: FailureKind::Io,
                message,
            },
            CodecError::Parse { message } => FileOpResult::Failed {
                kind: FailureKind::Parse,
                message,
            },
        }
    }
}

/// Write a JSON document with 2-space indentation and key order as given.
///
/// Repeated exports of unchanged data produce byte-identical files, so
/// exported documents stay diffable and re-importable.
pub async fn write_text(path: &Path, value: &Value) -> Result<(), CodecError> {
    let text = serde_json::to_string_pretty(value).map_err(|e| CodecError::Io {
        message: format!("Failed to serialize document: {e}"),
    })?;

    fs::write(path, text).await.map_err(|e| CodecError::Io {
        message: format!("Failed to write '{}': {e}", path.display()),
    })
}

/// Read a file and parse it as a JSON document.
///
/// A file that cannot be read yields [`CodecError::Io`]; a file that reads
/// fine but is not valid UTF-8 JSON yields [`CodecError::Parse`], so the
/// frontend can say "file is corrupt" instead of "disk error".
pub async fn read_text(path: &Path) -> Result<Value, CodecError> {
    let bytes = fs::read(path).await.map_err(|e| CodecError::Io {
        message: format!("Failed to read '{}': {e}", path.display()),
    })?;

    let text = String::from_utf8(bytes).map_err(|_| CodecError::Parse {
        message: format!("'{}' is not valid UTF-8", path.display()),
    })?;

    serde_json::from_str(&text).map_err(|e| CodecError::Parse {
        message: format!("'{}' is not valid JSON: {e}", path.display()),
    })
}

/// Write an opaque binary buffer. Used by the PDF export path; the codec
/// performs no validation of the content.
pub async fn write_binary(path: &Path, bytes: &[u8]) -> Result<(), CodecError> {
    fs::write(path, bytes).await.map_err(|e| CodecError::Io {
        message: format!("Failed to write '{}': {e}", path.display()),
    })
}
