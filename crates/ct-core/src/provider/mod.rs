//! Comment providers
//!
//! This module connects independent comment sources to a host that asks for
//! the comment threads of a document.
//!
//! # Overview
//!
//! - [`CommentSource`] is implemented by anything that can supply review
//!   comments for a document
//! - [`SourceRegistry`] hands out sequential ids to registered sources
//! - [`CommentsProvider`] fans a request out to every source, merges the
//!   answers and groups them into [`CommentThread`](crate::comment::CommentThread)s
//!
//! # Example
//!
//! ```ignore
//! use ct_core::provider::CommentsProvider;
//!
//! let provider = CommentsProvider::new();
//! let id = provider.register_comment_provider(Arc::new(source));
//! let threads = provider.provide_comments(&uri).await?;
//! provider.unregister_comment_provider(id);
//! ```

mod aggregator;
mod registry;
mod source;

pub use aggregator::CommentsProvider;
pub use registry::SourceRegistry;
pub use source::CommentSource;
