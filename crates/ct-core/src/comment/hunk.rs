//! Diff hunk ranges

use crate::error::{Result, ThreadsError};
use serde::{Deserialize, Serialize};

/// New-side range of the diff hunk a comment was made on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffHunkRange {
    /// First line of the hunk (1-based, as in the hunk header)
    pub start: i64,
    /// Number of lines in the hunk
    #[serde(default)]
    pub length: i64,
}

impl DiffHunkRange {
    pub fn new(start: i64, length: i64) -> Self {
        Self { start, length }
    }

    /// Derive the range from raw hunk text, whose first line is the header
    pub fn from_diff_hunk(diff_hunk: &str) -> Result<Self> {
        let header = diff_hunk
            .lines()
            .next()
            .ok_or_else(|| ThreadsError::InvalidHunk("empty diff hunk".to_string()))?;
        Self::parse_header(header)
    }

    /// Parse a header such as "@@ -10,5 +10,7 @@ fn main()"
    pub fn parse_header(line: &str) -> Result<Self> {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 4 || parts[0] != "@@" || parts[3] != "@@" {
            return Err(ThreadsError::InvalidHunk(format!(
                "Invalid hunk header: {}",
                line
            )));
        }

        let new_range = parts[2].strip_prefix('+').ok_or_else(|| {
            ThreadsError::InvalidHunk(format!("Missing new-side range: {}", line))
        })?;

        Self::parse_range(new_range)
    }

    /// Parse a range string like "10,5" or "10"
    fn parse_range(s: &str) -> Result<Self> {
        let mut parts = s.splitn(2, ',');
        let start = parts
            .next()
            .unwrap_or_default()
            .parse::<i64>()
            .map_err(|_| ThreadsError::InvalidHunk(format!("Invalid range: {}", s)))?;
        let length = match parts.next() {
            Some(count) => count
                .parse::<i64>()
                .map_err(|_| ThreadsError::InvalidHunk(format!("Invalid range: {}", s)))?,
            None => 1,
        };

        Ok(Self::new(start, length))
    }
}
