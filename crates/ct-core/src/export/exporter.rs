//! Exporter trait and manager

use crate::comment::CommentThread;
use crate::config::ExportConfig;
use crate::error::{Result, ThreadsError};
use crate::types::DocumentUri;
use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::Path;

/// The threads of one document, as handed to exporters
#[derive(Debug, Clone, Copy)]
pub struct ThreadReport<'a> {
    pub document: &'a DocumentUri,
    pub threads: &'a [CommentThread],
}

impl<'a> ThreadReport<'a> {
    pub fn new(document: &'a DocumentUri, threads: &'a [CommentThread]) -> Self {
        Self { document, threads }
    }

    /// Total number of comments across all threads
    pub fn comment_count(&self) -> usize {
        self.threads.iter().map(|t| t.comments.len()).sum()
    }
}

/// Trait for thread exporters
pub trait ThreadExporter: Send + Sync {
    /// Export a report to string
    fn export(&self, report: &ThreadReport<'_>) -> Result<String>;

    /// Get the format name
    fn format_name(&self) -> &str;

    /// Get the file extension
    fn file_extension(&self) -> &str;
}

/// Manager for handling multiple export formats
pub struct ExportManager {
    exporters: HashMap<String, Box<dyn ThreadExporter>>,
}

impl ExportManager {
    /// Create a new export manager with default exporters
    pub fn new() -> Self {
        let mut manager = Self {
            exporters: HashMap::new(),
        };

        manager.register(Box::new(super::json::JsonExporter::pretty()));
        manager.register(Box::new(super::json::JsonExporter::compact()));
        manager.register(Box::new(super::markdown::MarkdownExporter::new()));

        manager
    }

    /// Create a manager whose exporters follow the export settings
    pub fn from_config(config: &ExportConfig) -> Self {
        let mut manager = Self::new();
        manager.register(Box::new(
            super::markdown::MarkdownExporter::new().with_avatars(config.avatars),
        ));
        manager
    }

    /// Register a new exporter
    pub fn register(&mut self, exporter: Box<dyn ThreadExporter>) {
        self.exporters
            .insert(exporter.format_name().to_string(), exporter);
    }

    /// Export a report to the specified format
    pub fn export(&self, report: &ThreadReport<'_>, format: &str) -> Result<String> {
        self.get(format)
            .ok_or_else(|| ThreadsError::Validation(format!("Unknown export format: {}", format)))?
            .export(report)
    }

    /// Export a report to a file, adding the format's extension if the path has none
    pub fn export_to_file(&self, report: &ThreadReport<'_>, format: &str, path: &Path) -> Result<()> {
        let exporter = self.get(format).ok_or_else(|| {
            ThreadsError::Validation(format!("Unknown export format: {}", format))
        })?;
        let content = exporter.export(report)?;

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let final_path = if path.extension().is_some() {
            path.to_path_buf()
        } else {
            path.with_extension(exporter.file_extension())
        };

        // Atomic write using temp file
        let temp_path = final_path.with_extension("tmp");
        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.flush()?;
        }

        fs::rename(&temp_path, &final_path)?;
        Ok(())
    }

    /// Get list of available format names
    pub fn available_formats(&self) -> Vec<String> {
        let mut formats: Vec<_> = self.exporters.keys().cloned().collect();
        formats.sort();
        formats
    }

    /// Check if a format is available
    pub fn has_format(&self, format: &str) -> bool {
        self.exporters.contains_key(format)
    }

    /// Get an exporter by format name
    pub fn get(&self, format: &str) -> Option<&dyn ThreadExporter> {
        self.exporters.get(format).map(|e| e.as_ref())
    }
}

impl Default for ExportManager {
    fn default() -> Self {
        Self::new()
    }
}
