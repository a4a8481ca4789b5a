//! Comment system module
//!
//! Review comment records, diff hunk ranges, and grouping into threads.

pub mod hunk;
pub mod model;
pub mod thread;

pub use hunk::DiffHunkRange;
pub use model::*;
pub use thread::{group_into_threads, CommentThread, MarkdownString, ThreadComment, ThreadOrder};
