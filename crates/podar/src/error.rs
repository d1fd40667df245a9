//! Result and error types for Podar.

use crate::record::RecordKind;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for Podar operations
pub type PodarResult<T> = Result<T, PodarError>;

/// Errors that can occur while filtering a coverage trace
///
/// Every variant is fatal: processing stops at the first error and the
/// caller is expected to fail the surrounding build step. Records already
/// emitted stay emitted.
#[derive(Debug, Error)]
pub enum PodarError {
    /// A source file named by an `SF` record could not be read
    #[error("Failed to read source file {path}: {source}")]
    SourceRead {
        /// Path taken verbatim from the `SF` record
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// An `SF` record names a path that is not valid UTF-8
    #[error("SF record names a path that is not valid UTF-8: {path:?}")]
    SourcePathEncoding {
        /// Lossy rendering of the offending path bytes
        path: String,
    },

    /// A coverage record appeared before any `SF` record
    #[error("{kind} record with no preceding SF record")]
    MissingSourceContext {
        /// Record kind (`DA` or `BRDA`)
        kind: RecordKind,
    },

    /// The line-number field of a coverage record is not a decimal integer
    #[error("Malformed line number in {kind} record: {field:?}")]
    MalformedLineNumber {
        /// Record kind (`DA` or `BRDA`)
        kind: RecordKind,
        /// The offending field text
        field: String,
    },

    /// A coverage record references a line outside the current source file
    #[error("Line {line} is out of range for {path} ({total} lines)")]
    LineOutOfRange {
        /// Path of the current source file
        path: PathBuf,
        /// 1-based line number taken from the record
        line: usize,
        /// Number of lines in the cached file
        total: usize,
    },

    /// I/O error on the trace stream itself
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
