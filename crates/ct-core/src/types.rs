//! Core type definitions for cr-threads

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Identifier handed out when a comment source is registered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct SourceId(pub u64);

impl SourceId {
    /// The id that follows this one
    pub fn next(self) -> Self {
        SourceId(self.0 + 1)
    }
}

impl fmt::Display for SourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Identifies the document a host asks comments for
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentUri(pub String);

impl DocumentUri {
    const FILE_SCHEME: &'static str = "file://";

    /// Create a file URI from a path
    pub fn from_path(path: &Path) -> Self {
        DocumentUri(format!(
            "{}{}",
            Self::FILE_SCHEME,
            path.to_string_lossy().replace('\\', "/")
        ))
    }

    /// Create a DocumentUri from a string
    pub fn from_string(s: impl Into<String>) -> Self {
        DocumentUri(s.into())
    }

    /// Get the raw URI
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Path component of the URI, without the `file://` scheme
    pub fn path(&self) -> &str {
        self.0.strip_prefix(Self::FILE_SCHEME).unwrap_or(&self.0)
    }

    /// Check whether this document is the repository-relative `path`
    pub fn matches_path(&self, path: &str) -> bool {
        let own = self.path();
        let path = path.trim_start_matches("./");
        if path.is_empty() {
            return false;
        }
        own == path
            || own
                .strip_suffix(path)
                .map(|prefix| prefix.ends_with('/'))
                .unwrap_or(false)
    }
}

impl fmt::Display for DocumentUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Zero-based line/column position in a document
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub character: u32,
}

impl Position {
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// Range between two positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    pub fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Zero-width range at a single position
    pub fn at(pos: Position) -> Self {
        Self { start: pos, end: pos }
    }

    /// Check if the range is zero-width
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}
