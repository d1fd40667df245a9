//! Source File Context
//!
//! Eagerly caches the line-ordered content of the most recently declared
//! source file. Exactly one file is held at a time; the trace format
//! groups per-file records together, so a new `SF` record replaces the
//! cache outright rather than merging into it.

use crate::error::{PodarError, PodarResult};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Cached, line-indexed content of the current source file
#[derive(Debug, Clone)]
pub struct SourceContext {
    path: PathBuf,
    lines: Vec<String>,
}

impl SourceContext {
    /// Read `path` in full and index its lines.
    ///
    /// The file handle is released before this returns; only the cached
    /// lines are kept. Non-UTF-8 bytes in the file are replaced rather
    /// than rejected, since suppression patterns are plain ASCII and the
    /// match is purely textual.
    ///
    /// # Errors
    ///
    /// Returns [`PodarError::SourceRead`] if the file cannot be read.
    pub fn load(path: impl Into<PathBuf>) -> PodarResult<Self> {
        let path = path.into();
        let bytes = fs::read(&path).map_err(|source| PodarError::SourceRead {
            path: path.clone(),
            source,
        })?;
        let lines: Vec<String> = String::from_utf8_lossy(&bytes)
            .lines()
            .map(str::to_owned)
            .collect();
        debug!(path = %path.display(), lines = lines.len(), "loaded source file");
        Ok(Self { path, lines })
    }

    /// Path this context was loaded from
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of cached lines
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the file had no lines at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Text of the 1-based `line`, bounds-checked against the cache.
    ///
    /// # Errors
    ///
    /// Returns [`PodarError::LineOutOfRange`] for line `0` or any line
    /// past the end of the file.
    pub fn line(&self, line: usize) -> PodarResult<&str> {
        line.checked_sub(1)
            .and_then(|index| self.lines.get(index))
            .map(String::as_str)
            .ok_or_else(|| PodarError::LineOutOfRange {
                path: self.path.clone(),
                line,
                total: self.lines.len(),
            })
    }
}
