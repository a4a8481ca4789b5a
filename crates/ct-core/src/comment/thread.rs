//! Grouping of review comments into positioned threads

use super::model::ReviewComment;
use crate::error::{Result, ThreadsError};
use crate::types::{Position, Range};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Markdown-formatted text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MarkdownString(pub String);

impl MarkdownString {
    pub fn new(value: impl Into<String>) -> Self {
        MarkdownString(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MarkdownString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A comment as displayed inside a thread
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadComment {
    pub body: MarkdownString,
    pub user_name: String,
    pub gravatar: String,
}

impl From<ReviewComment> for ThreadComment {
    fn from(comment: ReviewComment) -> Self {
        Self {
            body: MarkdownString(comment.body),
            user_name: comment.user.login,
            gravatar: comment.user.avatar_url,
        }
    }
}

/// Comments shown together at one location of a document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentThread {
    /// Zero-width range the thread is anchored at
    pub range: Range,
    pub comments: Vec<ThreadComment>,
}

impl CommentThread {
    /// Anchor line of the thread
    pub fn line(&self) -> u32 {
        self.range.start.line
    }
}

/// Order in which threads are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThreadOrder {
    /// First occurrence of each position in the merged comment list
    #[default]
    Encounter,
    /// Ascending position
    Position,
}

impl fmt::Display for ThreadOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThreadOrder::Encounter => write!(f, "encounter"),
            ThreadOrder::Position => write!(f, "position"),
        }
    }
}

/// Group comments by position and turn each group into a thread.
///
/// Members keep their relative order. The first comment of a group decides the
/// anchor line (`diff_hunk_range.start + position - 2`, column 0).
pub fn group_into_threads(
    comments: Vec<ReviewComment>,
    order: ThreadOrder,
) -> Result<Vec<CommentThread>> {
    if comments.is_empty() {
        return Ok(Vec::new());
    }

    let mut slots: HashMap<i64, usize> = HashMap::new();
    let mut groups: Vec<(i64, Vec<ReviewComment>)> = Vec::new();

    for comment in comments {
        match slots.get(&comment.position) {
            Some(&slot) => groups[slot].1.push(comment),
            None => {
                slots.insert(comment.position, groups.len());
                groups.push((comment.position, vec![comment]));
            }
        }
    }

    if order == ThreadOrder::Position {
        groups.sort_by_key(|(position, _)| *position);
    }

    groups
        .into_iter()
        .map(|(_, members)| build_thread(members))
        .collect()
}

fn build_thread(members: Vec<ReviewComment>) -> Result<CommentThread> {
    let first = &members[0];
    let line = first.anchor_line().ok_or(ThreadsError::InvalidAnchor {
        position: first.position,
        start: first.diff_hunk_range.start,
    })?;

    Ok(CommentThread {
        range: Range::at(Position::new(line, 0)),
        comments: members.into_iter().map(ThreadComment::from).collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comment::hunk::DiffHunkRange;
    use crate::comment::model::CommentUser;
    use pretty_assertions::assert_eq;

    fn comment(body: &str, position: i64, start: i64, login: &str) -> ReviewComment {
        ReviewComment::new(
            body,
            position,
            DiffHunkRange::new(start, 6),
            CommentUser::new(login, format!("https://avatars.example/{}", login)),
        )
    }

    #[test]
    fn test_empty_input() {
        assert!(group_into_threads(vec![], ThreadOrder::Encounter)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_same_position_shares_thread() {
        let threads = group_into_threads(
            vec![comment("a", 1, 10, "u1"), comment("b", 1, 10, "u2")],
            ThreadOrder::Encounter,
        )
        .unwrap();

        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].range, Range::at(Position::new(9, 0)));
        assert_eq!(
            threads[0].comments,
            vec![
                ThreadComment {
                    body: MarkdownString::new("a"),
                    user_name: "u1".to_string(),
                    gravatar: "https://avatars.example/u1".to_string(),
                },
                ThreadComment {
                    body: MarkdownString::new("b"),
                    user_name: "u2".to_string(),
                    gravatar: "https://avatars.example/u2".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_different_positions_split() {
        let threads = group_into_threads(
            vec![
                comment("a", 5, 10, "u1"),
                comment("b", 2, 10, "u2"),
                comment("c", 5, 10, "u3"),
            ],
            ThreadOrder::Encounter,
        )
        .unwrap();

        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].line(), 13);
        assert_eq!(threads[1].line(), 10);
        let bodies: Vec<&str> = threads[0].comments.iter().map(|c| c.body.as_str()).collect();
        assert_eq!(bodies, vec!["a", "c"]);
    }

    #[test]
    fn test_first_comment_decides_anchor() {
        let threads = group_into_threads(
            vec![comment("a", 3, 20, "u1"), comment("b", 3, 40, "u2")],
            ThreadOrder::Encounter,
        )
        .unwrap();

        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].line(), 21);
    }

    #[test]
    fn test_position_order() {
        let threads = group_into_threads(
            vec![
                comment("a", 7, 1, "u1"),
                comment("b", 3, 1, "u2"),
                comment("c", 7, 1, "u3"),
            ],
            ThreadOrder::Position,
        )
        .unwrap();

        let lines: Vec<u32> = threads.iter().map(CommentThread::line).collect();
        assert_eq!(lines, vec![2, 6]);
        assert_eq!(threads[1].comments.len(), 2);
    }

    #[test]
    fn test_negative_anchor_fails() {
        let result = group_into_threads(vec![comment("a", 0, 1, "u1")], ThreadOrder::Encounter);
        assert!(matches!(
            result,
            Err(ThreadsError::InvalidAnchor { position: 0, start: 1 })
        ));
    }

    #[test]
    fn test_thread_serialization() {
        let threads =
            group_into_threads(vec![comment("a", 1, 10, "u1")], ThreadOrder::Encounter).unwrap();
        let json = serde_json::to_string(&threads[0]).unwrap();
        assert!(json.contains(r#""userName":"u1""#));
        assert!(json.contains(r#""gravatar""#));
        assert!(json.contains(r#""body":"a""#));
    }
}
