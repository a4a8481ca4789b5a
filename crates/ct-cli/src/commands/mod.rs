//! CLI commands module
//!
//! This module contains all CLI command implementations.

pub mod comments;
pub mod config;
pub mod threads;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use ct_core::config::Config;
use ct_core::provider::CommentsProvider;
use ct_core::types::DocumentUri;
use ct_sources::{default_comments_dir, discover_comment_files, JsonFileSource};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// cr-threads - merge review comments into positioned threads
#[derive(Debug, Parser)]
#[command(name = "cr-threads")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the comment threads of a document
    Threads(threads::ThreadsArgs),

    /// Show the merged, ungrouped comments of a document
    Comments(comments::CommentsArgs),

    /// Manage configuration
    #[command(subcommand)]
    Config(config::ConfigCommand),
}

/// Document and comment sources shared by the query commands
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// Document path or URI to show comments for
    pub document: String,

    /// Comment file or directory of comment files (repeatable)
    #[arg(long, short)]
    pub source: Vec<PathBuf>,
}

impl SourceArgs {
    /// The document as a URI
    pub fn document_uri(&self) -> DocumentUri {
        if self.document.contains("://") {
            DocumentUri::from_string(self.document.clone())
        } else {
            DocumentUri::from_path(Path::new(&self.document))
        }
    }
}

/// Run the CLI application
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let config_path = cli.config.clone().unwrap_or_else(default_config_path);

    match cli.command {
        Commands::Config(cmd) => config::execute(cmd, &config_path),
        Commands::Threads(args) => {
            let config = Config::load(&config_path)?;
            block_on(threads::execute(args, config))
        }
        Commands::Comments(args) => {
            let config = Config::load(&config_path)?;
            block_on(comments::execute(args, config))
        }
    }
}

/// Project-local configuration file
pub fn default_config_path() -> PathBuf {
    PathBuf::from(".cr-threads/config.toml")
}

fn block_on<F: std::future::Future<Output = Result<()>>>(future: F) -> Result<()> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;
    runtime.block_on(future)
}

/// Register one comment source per comment file.
///
/// Files come from `--source` followed by the configured files. With neither,
/// the default comments directory is used if it exists.
pub fn build_provider(args: &SourceArgs, config: &Config) -> Result<CommentsProvider> {
    let provider = CommentsProvider::new().with_order(config.aggregation.order);

    let mut roots: Vec<PathBuf> = args
        .source
        .iter()
        .chain(config.sources.files.iter())
        .cloned()
        .collect();
    if roots.is_empty() {
        let fallback = default_comments_dir();
        if fallback.is_dir() {
            roots.push(fallback);
        }
    }

    for root in &roots {
        let files = discover_comment_files(root)
            .with_context(|| format!("Failed to read comment source {}", root.display()))?;
        for file in files {
            let id = provider.register_comment_provider(Arc::new(JsonFileSource::new(&file)));
            tracing::debug!("Source {} -> {}", id, file.display());
        }
    }

    Ok(provider)
}

/// Token cancelled when the user presses Ctrl-C
pub fn ctrl_c_token() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            trigger.cancel();
        }
    });
    token
}

fn setup_logging(verbosity: u8) {
    use tracing_subscriber::EnvFilter;

    let filter = match verbosity {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
