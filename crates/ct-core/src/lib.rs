//! ct-core - Core library for cr-threads
//!
//! This crate provides the core logic for aggregating review comments from
//! several independent sources into position-anchored comment threads,
//! including the source registry, the aggregator, thread grouping and export.

pub mod error;
pub mod types;
pub mod config;
pub mod comment;
pub mod provider;
pub mod export;

pub use error::{ThreadsError, Result};
pub use types::*;
