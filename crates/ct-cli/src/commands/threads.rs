//! Threads command
//!
//! Merge the comments of every source and print the document's threads.

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use std::io::Write;
use std::path::PathBuf;

use ct_core::comment::ThreadOrder;
use ct_core::config::Config;
use ct_core::export::{ExportManager, ThreadReport};

use super::{build_provider, ctrl_c_token, SourceArgs};

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// Pretty-printed JSON
    Json,
    /// Single-line JSON
    JsonCompact,
    /// Markdown report
    Markdown,
}

impl ExportFormat {
    fn format_name(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::JsonCompact => "json-compact",
            ExportFormat::Markdown => "markdown",
        }
    }
}

/// Thread ordering options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OrderArg {
    /// Order of first appearance
    Encounter,
    /// Ascending diff position
    Position,
}

impl From<OrderArg> for ThreadOrder {
    fn from(order: OrderArg) -> Self {
        match order {
            OrderArg::Encounter => ThreadOrder::Encounter,
            OrderArg::Position => ThreadOrder::Position,
        }
    }
}

/// Arguments for the threads command
#[derive(Debug, Args)]
pub struct ThreadsArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Output format (defaults to the configured format)
    #[arg(long, short, value_enum)]
    pub format: Option<ExportFormat>,

    /// Thread order (defaults to the configured order)
    #[arg(long, value_enum)]
    pub order: Option<OrderArg>,

    /// Show author avatars in the markdown report
    #[arg(long)]
    pub avatars: bool,

    /// Output file path (stdout if not specified)
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

/// Execute the threads command
pub async fn execute(args: ThreadsArgs, mut config: Config) -> Result<()> {
    use colored::Colorize;

    if let Some(order) = args.order {
        config.aggregation.order = order.into();
    }
    if args.avatars {
        config.export.avatars = true;
    }

    let uri = args.sources.document_uri();
    let provider = build_provider(&args.sources, &config)?;
    if provider.source_count() == 0 {
        eprintln!(
            "{} No comment sources. Pass one with '{}'.",
            "⚠".yellow(),
            "--source <FILE>".cyan()
        );
    }

    let cancel = ctrl_c_token();
    let threads = provider
        .provide_comments_with_cancel(&uri, &cancel)
        .await
        .with_context(|| format!("Failed to collect comments for {}", uri))?;

    let export_manager = ExportManager::from_config(&config.export);
    let format_name = resolve_format(args.format, &config);
    let report = ThreadReport::new(&uri, &threads);

    if let Some(output_path) = args.output {
        export_manager
            .export_to_file(&report, format_name, &output_path)
            .with_context(|| format!("Failed to write to {}", output_path.display()))?;
        eprintln!(
            "{} Exported {} threads to {}",
            "✓".green(),
            threads.len().to_string().yellow(),
            output_path.display()
        );
    } else {
        let output = export_manager.export(&report, format_name)?;
        let mut stdout = std::io::stdout();
        stdout
            .write_all(output.as_bytes())
            .context("Failed to write to stdout")?;
        if !output.ends_with('\n') {
            writeln!(stdout).context("Failed to write to stdout")?;
        }
    }

    Ok(())
}

/// The `--format` flag if given, otherwise the configured format
fn resolve_format(format: Option<ExportFormat>, config: &Config) -> &str {
    format
        .map(ExportFormat::format_name)
        .unwrap_or_else(|| config.export.format_name())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_format_values() {
        assert!(ExportFormat::from_str("json", true).is_ok());
        assert!(ExportFormat::from_str("json-compact", true).is_ok());
        assert!(ExportFormat::from_str("markdown", true).is_ok());
    }

    #[test]
    fn test_format_names_are_registered() {
        let manager = ExportManager::new();
        for format in [ExportFormat::Json, ExportFormat::JsonCompact, ExportFormat::Markdown] {
            assert!(manager.has_format(format.format_name()));
        }
    }

    #[test]
    fn test_resolve_format() {
        let mut config = Config::default();
        assert_eq!(resolve_format(None, &config), "markdown");

        config.export.default_format = "json".to_string();
        assert_eq!(resolve_format(None, &config), "json");

        config.export.pretty = false;
        assert_eq!(resolve_format(None, &config), "json-compact");
        assert_eq!(resolve_format(Some(ExportFormat::Json), &config), "json");
    }

    #[test]
    fn test_order_conversion() {
        assert_eq!(ThreadOrder::from(OrderArg::Position), ThreadOrder::Position);
        assert_eq!(ThreadOrder::from(OrderArg::Encounter), ThreadOrder::Encounter);
    }
}
