//! Configuration management for cr-threads

use crate::comment::ThreadOrder;
use crate::error::{Result, ThreadsError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Aggregation settings
    pub aggregation: AggregationConfig,
    /// Export settings
    pub export: ExportConfig,
    /// Comment source settings
    pub sources: SourcesConfig,
}

impl Config {
    /// Load configuration from a TOML file, falling back to defaults if it is missing
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| {
            ThreadsError::Toml(e.to_string()).with_context(format!("Failed to parse {}", path.display()))
        })
    }

    /// Save configuration as TOML, creating parent directories
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| ThreadsError::Toml(e.to_string()))?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// Aggregation-related configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AggregationConfig {
    /// Order of the emitted threads
    pub order: ThreadOrder,
}

/// Export-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Default export format
    pub default_format: String,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Show author avatars in markdown reports
    pub avatars: bool,
}

impl ExportConfig {
    /// The configured format, with `json` downgraded to `json-compact` when
    /// pretty printing is off
    pub fn format_name(&self) -> &str {
        if !self.pretty && self.default_format == "json" {
            "json-compact"
        } else {
            &self.default_format
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            default_format: "markdown".to_string(),
            pretty: true,
            avatars: false,
        }
    }
}

/// Comment source configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    /// Comment files registered on every run
    pub files: Vec<PathBuf>,
}
