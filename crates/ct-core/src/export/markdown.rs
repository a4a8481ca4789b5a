//! Markdown exporter for comment threads

use super::exporter::{ThreadExporter, ThreadReport};
use crate::comment::CommentThread;
use crate::error::Result;

/// Markdown exporter
pub struct MarkdownExporter {
    /// Include author avatar links
    include_avatars: bool,
}

impl MarkdownExporter {
    /// Create a new Markdown exporter with default settings
    pub fn new() -> Self {
        Self {
            include_avatars: false,
        }
    }

    /// Set whether to link author avatars
    pub fn with_avatars(mut self, include: bool) -> Self {
        self.include_avatars = include;
        self
    }

    /// Render the report header
    fn render_header(&self, report: &ThreadReport<'_>) -> String {
        let mut header = String::new();
        header.push_str("# Review threads\n\n");
        header.push_str(&format!("**Document:** `{}`\n", report.document));
        header.push_str(&format!(
            "**Threads:** {} ({} comments)\n\n",
            report.threads.len(),
            report.comment_count()
        ));
        header
    }

    /// Render a single thread
    fn render_thread(&self, thread: &CommentThread) -> String {
        let mut output = String::new();

        // Lines are zero-based internally
        output.push_str(&format!("## Line {}\n\n", thread.line() + 1));

        for comment in &thread.comments {
            if self.include_avatars {
                output.push_str(&format!(
                    "![{}]({}) **{}**\n\n",
                    comment.user_name, comment.gravatar, comment.user_name
                ));
            } else {
                output.push_str(&format!("**{}**\n\n", comment.user_name));
            }
            output.push_str(comment.body.as_str());
            output.push_str("\n\n");
        }

        output
    }
}

impl Default for MarkdownExporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ThreadExporter for MarkdownExporter {
    fn export(&self, report: &ThreadReport<'_>) -> Result<String> {
        let mut output = self.render_header(report);

        if report.threads.is_empty() {
            output.push_str("_No comments._\n");
            return Ok(output);
        }

        for thread in report.threads {
            output.push_str(&self.render_thread(thread));
        }

        Ok(output)
    }

    fn format_name(&self) -> &str {
        "markdown"
    }

    fn file_extension(&self) -> &str {
        "md"
    }
}
