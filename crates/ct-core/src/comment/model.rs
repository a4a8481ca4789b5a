//! Comment data models

use super::hunk::DiffHunkRange;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A pull request review comment as delivered by a comment source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewComment {
    /// Markdown body
    pub body: String,
    /// Position within the diff hunk, used as grouping key
    pub position: i64,
    /// Range of the hunk the comment was made on
    pub diff_hunk_range: DiffHunkRange,
    /// Comment author
    pub user: CommentUser,
    /// Remote identifier
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    /// Repository-relative file path
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Raw diff hunk text
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diff_hunk: Option<String>,
    /// Position when the comment was first made
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_position: Option<i64>,
    /// Commit the comment refers to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commit_id: Option<String>,
    /// Web link to the comment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl ReviewComment {
    /// Create a comment with the fields needed to place it
    pub fn new(
        body: impl Into<String>,
        position: i64,
        diff_hunk_range: DiffHunkRange,
        user: CommentUser,
    ) -> Self {
        Self {
            body: body.into(),
            position,
            diff_hunk_range,
            user,
            id: None,
            path: None,
            diff_hunk: None,
            original_position: None,
            commit_id: None,
            html_url: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Set the file path
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Zero-based document line the comment anchors to, if non-negative
    pub fn anchor_line(&self) -> Option<u32> {
        let line = self
            .diff_hunk_range
            .start
            .checked_add(self.position)?
            .checked_sub(2)?;
        u32::try_from(line).ok()
    }
}

/// Author of a comment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentUser {
    /// Login name
    pub login: String,
    /// Avatar image URL
    pub avatar_url: String,
}

impl CommentUser {
    pub fn new(login: impl Into<String>, avatar_url: impl Into<String>) -> Self {
        Self {
            login: login.into(),
            avatar_url: avatar_url.into(),
        }
    }
}
