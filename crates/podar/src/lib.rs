//! Podar: Coverage Trace Filter
//!
//! Podar (Spanish: "to prune") is a single-pass filter for LCOV-style
//! coverage traces. It drops line (`DA`) and branch (`BRDA`) coverage
//! records whose source line contains a suppression substring, so that
//! assertion and precondition macros stop dragging coverage numbers down.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                     PODAR Pipeline                              │
//! ├─────────────────────────────────────────────────────────────────┤
//! │   trace stream ──► TraceRecord ──► SourceContext ──► emit/omit  │
//! │   (stdin)          (parse)         (cached lines)    (stdout)   │
//! │                                         ▲                       │
//! │                                SuppressionRules                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every record is either emitted byte-for-byte or omitted whole; output
//! order matches input order. Any inconsistency between the trace and the
//! named source files aborts processing with a typed error, so a build
//! pipeline fails loudly instead of publishing a partially-correct report.
//!
//! # Example
//!
//! ```
//! use podar::{SuppressionRules, TraceFilter};
//!
//! let mut filter = TraceFilter::new(SuppressionRules::none());
//! let input = b"TN:example\nLF:10\n" as &[u8];
//! let mut output = Vec::new();
//! let stats = filter.process(input, &mut output).unwrap();
//! assert_eq!(output, b"TN:example\nLF:10\n");
//! assert_eq!(stats.records_read, 2);
//! ```

#![warn(missing_docs)]
// Lints are configured in workspace Cargo.toml [workspace.lints.clippy]

mod error;
mod filter;
mod record;
mod source;
mod suppress;

pub use error::{PodarError, PodarResult};
pub use filter::{FilterStats, TraceFilter};
pub use record::{RecordKind, TraceRecord};
pub use source::SourceContext;
pub use suppress::SuppressionRules;
