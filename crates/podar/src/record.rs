//! Trace record parsing
//!
//! One record per line, `KEYWORD:REST`. Only `SF`, `DA` and `BRDA` carry
//! meaning for filtering; every other record (including lines with no
//! colon at all) passes through untouched.

use crate::error::{PodarError, PodarResult};
use std::fmt;

/// Kind of coverage record subject to suppression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// `DA` — full-line coverage data
    Line,
    /// `BRDA` — branch coverage data
    Branch,
}

impl RecordKind {
    /// The record's keyword tag as it appears in the trace
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Line => "DA",
            Self::Branch => "BRDA",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A parsed view of one trace record
///
/// Borrowed from the raw record bytes; the line terminator must already be
/// stripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TraceRecord<'a> {
    /// `SF:<path>` — declares the current source file
    SourceFile(&'a str),
    /// `DA:<line>,<rest>` or `BRDA:<line>,<rest>` — coverage data
    ///
    /// Only the leading line number matters for filtering; the rest of the
    /// payload is ignored.
    Coverage {
        /// Whether this is line or branch data
        kind: RecordKind,
        /// 1-based source line the record refers to
        line: usize,
    },
    /// Any other record, passed through without inspection
    Other,
}

impl<'a> TraceRecord<'a> {
    /// Parse a single record.
    ///
    /// # Errors
    ///
    /// Returns [`PodarError::MalformedLineNumber`] if a `DA`/`BRDA`
    /// payload does not begin with a decimal line number, and
    /// [`PodarError::SourcePathEncoding`] if an `SF` path is not valid
    /// UTF-8.
    pub fn parse(record: &'a [u8]) -> PodarResult<Self> {
        let Some(colon) = record.iter().position(|&b| b == b':') else {
            return Ok(Self::Other);
        };
        let (keyword, payload) = (&record[..colon], &record[colon + 1..]);

        match keyword {
            b"SF" => {
                let path = std::str::from_utf8(payload).map_err(|_| {
                    PodarError::SourcePathEncoding {
                        path: String::from_utf8_lossy(payload).into_owned(),
                    }
                })?;
                Ok(Self::SourceFile(path))
            }
            b"DA" => Ok(Self::Coverage {
                kind: RecordKind::Line,
                line: parse_line_field(RecordKind::Line, payload)?,
            }),
            b"BRDA" => Ok(Self::Coverage {
                kind: RecordKind::Branch,
                line: parse_line_field(RecordKind::Branch, payload)?,
            }),
            _ => Ok(Self::Other),
        }
    }
}

/// Parse the leading line-number field of a `DA`/`BRDA` payload.
///
/// The field runs up to the first `,` (or the end of the payload).
fn parse_line_field(kind: RecordKind, payload: &[u8]) -> PodarResult<usize> {
    let field = payload
        .split(|&b| b == b',')
        .next()
        .unwrap_or(payload);

    std::str::from_utf8(field)
        .ok()
        .and_then(|text| text.parse::<usize>().ok())
        .ok_or_else(|| PodarError::MalformedLineNumber {
            kind,
            field: String::from_utf8_lossy(field).into_owned(),
        })
}
