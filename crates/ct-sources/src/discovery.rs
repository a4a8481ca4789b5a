//! Locating comment files on disk

use ct_core::error::{Result, ThreadsError};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default directory holding comment files (`<data dir>/cr-threads/comments`)
pub fn default_comments_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "cr-threads", "cr-threads")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".cr-threads")
        })
        .join("comments")
}

/// Expand a path into comment files.
///
/// A file is returned as is. A directory yields its `.json` files, sorted by
/// name, skipping hidden and temporary files.
pub fn discover_comment_files(path: &Path) -> Result<Vec<PathBuf>> {
    if path.is_file() {
        return Ok(vec![path.to_path_buf()]);
    }
    if !path.is_dir() {
        return Err(ThreadsError::FileNotFound(path.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry_path = entry?.path();

        let hidden = entry_path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|n| n.starts_with('.'))
            .unwrap_or(true);
        let is_json = entry_path.extension().map(|e| e == "json").unwrap_or(false);

        if entry_path.is_file() && is_json && !hidden {
            files.push(entry_path);
        }
    }

    files.sort();
    debug!("Found {} comment files in {:?}", files.len(), path);
    Ok(files)
}
