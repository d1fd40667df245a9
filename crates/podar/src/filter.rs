//! Single-pass trace filter
//!
//! Reads records from a `BufRead`, emits them verbatim to a `Write`, and
//! drops `DA`/`BRDA` records whose source line matches a suppression
//! rule. Record framing is byte-oriented so the input's own line
//! terminators (`\n`, `\r\n`, or none at EOF) survive untouched.

use crate::error::{PodarError, PodarResult};
use crate::record::{RecordKind, TraceRecord};
use crate::source::SourceContext;
use crate::suppress::SuppressionRules;
use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::debug;

/// Counters accumulated over one [`TraceFilter::process`] call
///
/// Observational only; the counters never influence filtering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterStats {
    /// Records read from the input stream
    pub records_read: u64,
    /// Records emitted to the output stream
    pub records_emitted: u64,
    /// `DA` records suppressed
    pub lines_suppressed: u64,
    /// `BRDA` records suppressed
    pub branches_suppressed: u64,
    /// Source files loaded by `SF` records
    pub files_loaded: u64,
}

impl FilterStats {
    /// Total suppressed records of both kinds
    #[must_use]
    pub const fn suppressed(&self) -> u64 {
        self.lines_suppressed + self.branches_suppressed
    }
}

/// What to do with one record
enum Disposition {
    Emit,
    Suppress(RecordKind),
}

/// Coverage trace filter
///
/// Owns the rule sets and the current Source File Context. The context
/// starts empty and is replaced, never merged, by each `SF` record.
#[derive(Debug)]
pub struct TraceFilter {
    rules: SuppressionRules,
    context: Option<SourceContext>,
}

impl Default for TraceFilter {
    fn default() -> Self {
        Self::new(SuppressionRules::default())
    }
}

impl TraceFilter {
    /// Create a filter with the given rule sets
    #[must_use]
    pub fn new(rules: SuppressionRules) -> Self {
        Self {
            rules,
            context: None,
        }
    }

    /// Rule sets this filter was built with
    #[must_use]
    pub fn rules(&self) -> &SuppressionRules {
        &self.rules
    }

    /// Run the filter from `input` to `output`.
    ///
    /// Single forward pass: every record is either written byte-for-byte
    /// or omitted whole, in input order. Processing stops at the first
    /// fatal error; records already written stay written.
    ///
    /// # Errors
    ///
    /// Propagates every condition in [`PodarError`]: unreadable source
    /// files, coverage records before any `SF`, malformed line-number
    /// fields, out-of-range line references, and stream I/O failures.
    pub fn process<R: BufRead, W: Write>(
        &mut self,
        mut input: R,
        mut output: W,
    ) -> PodarResult<FilterStats> {
        let mut stats = FilterStats::default();
        let mut record = Vec::new();

        loop {
            record.clear();
            if input.read_until(b'\n', &mut record)? == 0 {
                break;
            }
            stats.records_read += 1;

            match self.disposition(strip_terminator(&record), &mut stats)? {
                Disposition::Emit => {
                    output.write_all(&record)?;
                    stats.records_emitted += 1;
                }
                Disposition::Suppress(RecordKind::Line) => stats.lines_suppressed += 1,
                Disposition::Suppress(RecordKind::Branch) => stats.branches_suppressed += 1,
            }
        }

        output.flush()?;
        Ok(stats)
    }

    /// Decide the fate of one record, updating the file context on `SF`.
    fn disposition(&mut self, body: &[u8], stats: &mut FilterStats) -> PodarResult<Disposition> {
        match TraceRecord::parse(body)? {
            TraceRecord::SourceFile(path) => {
                self.context = Some(SourceContext::load(path)?);
                stats.files_loaded += 1;
                Ok(Disposition::Emit)
            }
            TraceRecord::Coverage { kind, line } => {
                let context = self
                    .context
                    .as_ref()
                    .ok_or(PodarError::MissingSourceContext { kind })?;
                let text = context.line(line)?;
                if self.rules.suppresses(kind, text) {
                    debug!(
                        %kind,
                        line,
                        path = %context.path().display(),
                        "suppressed coverage record"
                    );
                    Ok(Disposition::Suppress(kind))
                } else {
                    Ok(Disposition::Emit)
                }
            }
            TraceRecord::Other => Ok(Disposition::Emit),
        }
    }
}

/// Strip the trailing `\n` or `\r\n`, if any, for parsing purposes
fn strip_terminator(record: &[u8]) -> &[u8] {
    let record = record.strip_suffix(b"\n").unwrap_or(record);
    record.strip_suffix(b"\r").unwrap_or(record)
}
