//! Comment source trait and abstractions

use crate::comment::ReviewComment;
use crate::error::Result;
use crate::types::DocumentUri;
use async_trait::async_trait;

/// Trait for anything that can contribute review comments for a document
#[async_trait]
pub trait CommentSource: Send + Sync {
    /// Fetch the comments for a document.
    ///
    /// `Ok(None)` means the source has nothing for this document and is
    /// treated the same as an empty list.
    async fn provide_comments(&self, uri: &DocumentUri) -> Result<Option<Vec<ReviewComment>>>;

    /// Human readable name, used in logs and error context
    fn name(&self) -> &str {
        "comment source"
    }
}

/// In-memory sources for testing
#[cfg(test)]
pub mod memory {
    use super::*;
    use crate::error::ThreadsError;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Serves a fixed set of comments per document
    pub struct MemorySource {
        comments: HashMap<DocumentUri, Vec<ReviewComment>>,
        delay: Option<Duration>,
        calls: AtomicUsize,
    }

    impl MemorySource {
        /// Create an empty source (answers `None` for every document)
        pub fn new() -> Self {
            Self {
                comments: HashMap::new(),
                delay: None,
                calls: AtomicUsize::new(0),
            }
        }

        /// Add comments for a document
        pub fn with_comments(mut self, uri: &DocumentUri, comments: Vec<ReviewComment>) -> Self {
            self.comments.entry(uri.clone()).or_default().extend(comments);
            self
        }

        /// Delay every answer
        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        /// Number of times the source was asked
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Default for MemorySource {
        fn default() -> Self {
            Self::new()
        }
    }

    #[async_trait]
    impl CommentSource for MemorySource {
        async fn provide_comments(
            &self,
            uri: &DocumentUri,
        ) -> Result<Option<Vec<ReviewComment>>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            Ok(self.comments.get(uri).cloned())
        }

        fn name(&self) -> &str {
            "memory"
        }
    }

    /// Always fails
    pub struct FailingSource;

    #[async_trait]
    impl CommentSource for FailingSource {
        async fn provide_comments(
            &self,
            uri: &DocumentUri,
        ) -> Result<Option<Vec<ReviewComment>>> {
            Err(ThreadsError::Validation(format!("no access to {}", uri)))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    mod tests {
        use super::*;
        use crate::comment::{CommentUser, DiffHunkRange};

        #[tokio::test]
        async fn test_memory_source_answers_per_document() {
            let uri = DocumentUri::from_string("file:///repo/a.rs");
            let other = DocumentUri::from_string("file:///repo/b.rs");
            let source = MemorySource::new().with_comments(
                &uri,
                vec![ReviewComment::new(
                    "a",
                    1,
                    DiffHunkRange::new(10, 3),
                    CommentUser::new("u1", "x"),
                )],
            );

            assert_eq!(source.provide_comments(&uri).await.unwrap().unwrap().len(), 1);
            assert!(source.provide_comments(&other).await.unwrap().is_none());
            assert_eq!(source.calls(), 2);
        }

        #[tokio::test]
        async fn test_failing_source() {
            let uri = DocumentUri::from_string("file:///repo/a.rs");
            assert!(FailingSource.provide_comments(&uri).await.is_err());
        }
    }
}
