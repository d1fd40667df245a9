//! Suppression rule sets
//!
//! Two independent sets of literal substrings: one consulted for `DA`
//! records, one for `BRDA` records. The match is textual and
//! case-sensitive, first match wins; a pattern appearing inside a comment
//! or string literal still matches.

use crate::record::RecordKind;
use serde::{Deserialize, Serialize};

/// Default line-kind patterns: statements that make the rest of a line
/// unreachable, so full-line coverage for them is meaningless
const LINE_SUPPRESS: &[&str] = &["g_assert_not_reached"];

/// Default branch-kind patterns: assertion and precondition macros whose
/// failure branch is never meant to be taken
const BRANCH_SUPPRESS: &[&str] = &[
    "g_assert",
    "g_return_if_fail",
    "g_return_val_if_fail",
    "G_DEFINE_TYPE",
];

/// Immutable pair of suppression rule sets
///
/// Built once, before processing starts; the filter never mutates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuppressionRules {
    /// Patterns consulted for `DA` records
    line: Vec<String>,
    /// Patterns consulted for `BRDA` records
    branch: Vec<String>,
}

impl Default for SuppressionRules {
    fn default() -> Self {
        Self::new(LINE_SUPPRESS.iter().copied(), BRANCH_SUPPRESS.iter().copied())
    }
}

impl SuppressionRules {
    /// Build rules from explicit pattern lists
    #[must_use]
    pub fn new(
        line: impl IntoIterator<Item = impl Into<String>>,
        branch: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            line: line.into_iter().map(Into::into).collect(),
            branch: branch.into_iter().map(Into::into).collect(),
        }
    }

    /// Rules that suppress nothing
    #[must_use]
    pub fn none() -> Self {
        Self {
            line: Vec::new(),
            branch: Vec::new(),
        }
    }

    /// Patterns consulted for `DA` records
    #[must_use]
    pub fn line_patterns(&self) -> &[String] {
        &self.line
    }

    /// Patterns consulted for `BRDA` records
    #[must_use]
    pub fn branch_patterns(&self) -> &[String] {
        &self.branch
    }

    /// Whether `source_line` disqualifies a coverage record of `kind`
    ///
    /// Any single matching pattern is sufficient; the sets are unordered.
    #[must_use]
    pub fn suppresses(&self, kind: RecordKind, source_line: &str) -> bool {
        let patterns = match kind {
            RecordKind::Line => &self.line,
            RecordKind::Branch => &self.branch,
        };
        patterns
            .iter()
            .any(|pattern| source_line.contains(pattern.as_str()))
    }
}
