//! Export functionality for comment threads
//!
//! This module provides exporters for rendering the threads of a document
//! as JSON (pretty or compact) or as a Markdown report.
//!
//! # Example
//!
//! ```ignore
//! use ct_core::export::{ExportManager, ThreadReport};
//!
//! let manager = ExportManager::new();
//! let report = ThreadReport::new(&uri, &threads);
//! let md = manager.export(&report, "markdown")?;
//! ```

mod exporter;
mod json;
mod markdown;

pub use exporter::{ExportManager, ThreadExporter, ThreadReport};
pub use json::{ExportData, JsonExporter};
pub use markdown::MarkdownExporter;
