//! Comments command
//!
//! Print the merged comments of every source without grouping them.

use anyhow::{Context, Result};
use clap::Args;

use ct_core::config::Config;
use ct_core::ThreadsError;

use super::{build_provider, ctrl_c_token, SourceArgs};

/// Arguments for the comments command
#[derive(Debug, Args)]
pub struct CommentsArgs {
    #[command(flatten)]
    pub sources: SourceArgs,

    /// Print on a single line (default when `[export] pretty = false`)
    #[arg(long)]
    pub compact: bool,
}

/// Execute the comments command
pub async fn execute(args: CommentsArgs, config: Config) -> Result<()> {
    let uri = args.sources.document_uri();
    let provider = build_provider(&args.sources, &config)?;

    let cancel = ctrl_c_token();
    let comments = tokio::select! {
        biased;
        _ = cancel.cancelled() => Err(ThreadsError::Cancelled),
        comments = provider.collect_comments(&uri) => comments,
    }
    .with_context(|| format!("Failed to collect comments for {}", uri))?;

    let json = if args.compact || !config.export.pretty {
        serde_json::to_string(&comments)?
    } else {
        serde_json::to_string_pretty(&comments)?
    };
    println!("{}", json);

    Ok(())
}
