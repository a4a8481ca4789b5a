//! ct-sources - Comment sources for cr-threads
//!
//! This crate provides comment source implementations that can be registered
//! with a [`ct_core::provider::CommentsProvider`].

mod discovery;
mod json_source;

pub use discovery::{default_comments_dir, discover_comment_files};
pub use json_source::JsonFileSource;
