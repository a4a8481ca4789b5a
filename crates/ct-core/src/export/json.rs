//! JSON exporter for comment threads

use super::exporter::{ThreadExporter, ThreadReport};
use crate::comment::CommentThread;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// JSON exporter with compact mode support
pub struct JsonExporter {
    /// Whether to use pretty-print formatting
    pretty: bool,
    /// Format name
    name: String,
}

impl JsonExporter {
    /// Create a new JSON exporter
    pub fn new(compact: bool) -> Self {
        Self {
            pretty: !compact,
            name: if compact {
                "json-compact".to_string()
            } else {
                "json".to_string()
            },
        }
    }

    /// Create a compact JSON exporter
    pub fn compact() -> Self {
        Self::new(true)
    }

    /// Create a pretty-printed JSON exporter
    pub fn pretty() -> Self {
        Self::new(false)
    }
}

impl ThreadExporter for JsonExporter {
    fn export(&self, report: &ThreadReport<'_>) -> Result<String> {
        let data = ExportData::from_report(report);

        let json = if self.pretty {
            serde_json::to_string_pretty(&data)?
        } else {
            serde_json::to_string(&data)?
        };

        Ok(json)
    }

    fn format_name(&self) -> &str {
        &self.name
    }

    fn file_extension(&self) -> &str {
        "json"
    }
}

/// Exported data structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportData {
    /// Document URI
    pub document: String,
    /// Total comment count
    pub comment_count: usize,
    pub threads: Vec<CommentThread>,
}

impl ExportData {
    pub fn from_report(report: &ThreadReport<'_>) -> Self {
        Self {
            document: report.document.to_string(),
            comment_count: report.comment_count(),
            threads: report.threads.to_vec(),
        }
    }
}
