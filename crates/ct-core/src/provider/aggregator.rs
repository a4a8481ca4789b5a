//! Aggregation of comments from every registered source

use super::registry::SourceRegistry;
use super::source::CommentSource;
use crate::comment::{group_into_threads, CommentThread, ReviewComment, ThreadOrder};
use crate::error::{Result, ThreadsError};
use crate::types::{DocumentUri, SourceId};
use futures::future::try_join_all;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

/// Host-facing comments provider backed by any number of comment sources
#[derive(Debug, Default)]
pub struct CommentsProvider {
    registry: Mutex<SourceRegistry>,
    order: ThreadOrder,
}

impl CommentsProvider {
    /// Create a provider with no sources, emitting threads in encounter order
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the order threads are emitted in
    pub fn with_order(mut self, order: ThreadOrder) -> Self {
        self.order = order;
        self
    }

    /// Order threads are emitted in
    pub fn order(&self) -> ThreadOrder {
        self.order
    }

    /// Register a comment source, returning the id to unregister it with
    pub fn register_comment_provider(&self, source: Arc<dyn CommentSource>) -> SourceId {
        self.registry().register(source)
    }

    /// Unregister a comment source; unknown ids are ignored
    pub fn unregister_comment_provider(&self, id: SourceId) {
        self.registry().unregister(id);
    }

    /// Number of registered sources
    pub fn source_count(&self) -> usize {
        self.registry().len()
    }

    /// Ask every source for the document's comments and merge them.
    ///
    /// Sources are queried concurrently. Results are concatenated in
    /// registration order regardless of completion order; the first failing
    /// source fails the whole request.
    pub async fn collect_comments(&self, uri: &DocumentUri) -> Result<Vec<ReviewComment>> {
        let sources = self.registry().snapshot();
        if sources.is_empty() {
            debug!("No comment sources registered for {}", uri);
            return Ok(Vec::new());
        }

        debug!("Requesting comments for {} from {} sources", uri, sources.len());

        let fetches = sources.iter().map(|(id, source)| async move {
            source.provide_comments(uri).await.map_err(|e| {
                e.with_context(format!("Comment source {} ({}) failed", id, source.name()))
            })
        });

        let results = try_join_all(fetches).await?;
        Ok(results.into_iter().flatten().flatten().collect())
    }

    /// Build the comment threads for a document
    pub async fn provide_comments(&self, uri: &DocumentUri) -> Result<Vec<CommentThread>> {
        let comments = self.collect_comments(uri).await?;
        if comments.is_empty() {
            return Ok(Vec::new());
        }

        let total = comments.len();
        let threads = group_into_threads(comments, self.order)?;
        info!(
            "Grouped {} comments into {} threads for {}",
            total,
            threads.len(),
            uri
        );
        Ok(threads)
    }

    /// Build the comment threads, giving up as soon as `cancel` fires
    pub async fn provide_comments_with_cancel(
        &self,
        uri: &DocumentUri,
        cancel: &CancellationToken,
    ) -> Result<Vec<CommentThread>> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!("Comment request for {} cancelled", uri);
                Err(ThreadsError::Cancelled)
            }
            threads = self.provide_comments(uri) => threads,
        }
    }

    fn registry(&self) -> MutexGuard<'_, SourceRegistry> {
        self.registry.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
