//! JSON file backed comment source

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use ct_core::comment::{CommentUser, DiffHunkRange, ReviewComment};
use ct_core::error::{Result, ThreadsError};
use ct_core::provider::CommentSource;
use ct_core::types::DocumentUri;
use serde::Deserialize;
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Serves pull request review comments stored in a JSON file.
///
/// The file holds either an array of comments or an object with a
/// `comments` array. It is re-read on every request.
pub struct JsonFileSource {
    path: PathBuf,
    name: String,
}

impl JsonFileSource {
    /// Create a source reading from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path.display().to_string();
        Self { path, name }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the raw comment records of the file
    async fn read_records(&self) -> Result<Vec<Value>> {
        let content = tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ThreadsError::FileNotFound(self.path.clone())
            } else {
                ThreadsError::Io(e)
            }
        })?;

        let value: Value = serde_json::from_str(&content).map_err(|e| {
            ThreadsError::Serde(e).with_context(format!("Failed to parse {}", self.path.display()))
        })?;

        records_of(value)
            .map_err(|e| e.with_context(format!("Failed to parse {}", self.path.display())))
    }

    /// Comments of the file whose `path` matches `uri`.
    ///
    /// Only matching records are decoded, so a malformed record for another
    /// file never fails the request.
    pub async fn load_for(&self, uri: &DocumentUri) -> Result<Vec<ReviewComment>> {
        let records = self.read_records().await?;
        let total = records.len();

        let unplaced = records.iter().filter(|r| record_path(r).is_none()).count();
        if unplaced > 0 {
            warn!(
                "{} comments in {} have no path and are ignored",
                unplaced,
                self.path.display()
            );
        }

        let matching = records
            .into_iter()
            .enumerate()
            .filter(|(_, r)| record_path(r).map(|p| uri.matches_path(p)).unwrap_or(false))
            .map(|(index, r)| self.decode(index, r))
            .collect::<Result<Vec<_>>>()?;

        debug!(
            "{}: {} of {} comments match {}",
            self.name,
            matching.len(),
            total,
            uri
        );

        Ok(matching)
    }

    fn decode(&self, index: usize, record: Value) -> Result<ReviewComment> {
        serde_json::from_value::<CommentRecord>(record)
            .map_err(ThreadsError::Serde)
            .and_then(CommentRecord::into_comment)
            .map_err(|e| {
                e.with_context(format!("Comment #{} in {}", index, self.path.display()))
            })
    }
}

#[async_trait]
impl CommentSource for JsonFileSource {
    async fn provide_comments(&self, uri: &DocumentUri) -> Result<Option<Vec<ReviewComment>>> {
        let matching = self.load_for(uri).await?;
        if matching.is_empty() {
            Ok(None)
        } else {
            Ok(Some(matching))
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Records of a comment file: a bare array or an object with a `comments` array
fn records_of(value: Value) -> Result<Vec<Value>> {
    match value {
        Value::Array(records) => Ok(records),
        Value::Object(mut map) => match map.remove("comments") {
            Some(Value::Array(records)) => Ok(records),
            _ => Err(ThreadsError::InvalidComment(
                "expected an object with a `comments` array".to_string(),
            )),
        },
        other => Err(ThreadsError::InvalidComment(format!(
            "expected an array of comments, found {}",
            json_kind(&other)
        ))),
    }
}

fn record_path(record: &Value) -> Option<&str> {
    record.get("path").and_then(Value::as_str)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Comment as stored on disk; the hunk range may be given or derived
#[derive(Debug, Deserialize)]
struct CommentRecord {
    body: String,
    #[serde(default)]
    position: Option<i64>,
    #[serde(default)]
    diff_hunk_range: Option<DiffHunkRange>,
    user: CommentUser,
    #[serde(default)]
    id: Option<u64>,
    #[serde(default)]
    path: Option<String>,
    #[serde(default)]
    diff_hunk: Option<String>,
    #[serde(default)]
    original_position: Option<i64>,
    #[serde(default)]
    commit_id: Option<String>,
    #[serde(default)]
    html_url: Option<String>,
    #[serde(default)]
    created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    updated_at: Option<DateTime<Utc>>,
}

impl CommentRecord {
    fn into_comment(self) -> Result<ReviewComment> {
        let label = self.id.map(|id| format!(" {}", id)).unwrap_or_default();
        // GitHub leaves `position` null on outdated comments
        let position = self.position.ok_or_else(|| {
            ThreadsError::InvalidComment(format!("comment{} has no position", label))
        })?;
        let diff_hunk_range = match (self.diff_hunk_range, self.diff_hunk.as_deref()) {
            (Some(range), _) => range,
            (None, Some(hunk)) => DiffHunkRange::from_diff_hunk(hunk)?,
            (None, None) => {
                return Err(ThreadsError::InvalidComment(format!(
                    "comment{} has neither diff_hunk_range nor diff_hunk",
                    label
                )))
            }
        };

        Ok(ReviewComment {
            body: self.body,
            position,
            diff_hunk_range,
            user: self.user,
            id: self.id,
            path: self.path,
            diff_hunk: self.diff_hunk,
            original_position: self.original_position,
            commit_id: self.commit_id,
            html_url: self.html_url,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
