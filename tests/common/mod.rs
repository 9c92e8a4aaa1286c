//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::io::Write;

use serde_json::{Value, json};
use tempfile::NamedTempFile;

/// Builder for archive files containing one JSON post per line
pub struct ArchiveBuilder {
    lines: Vec<String>,
    line_ending: &'static str,
    trailing_newline: bool,
}

impl ArchiveBuilder {
    /// Create a new builder for an empty archive
    pub fn new() -> Self {
        Self { lines: Vec::new(), line_ending: "\n", trailing_newline: true }
    }

    /// Add a post line
    pub fn with_post(mut self, post: PostLineBuilder) -> Self {
        self.lines.push(post.to_json());
        self
    }

    /// Add several post lines in order
    pub fn with_posts(mut self, posts: impl IntoIterator<Item = PostLineBuilder>) -> Self {
        self.lines.extend(posts.into_iter().map(|p| p.to_json()));
        self
    }

    /// Add a raw line verbatim (for malformed input)
    pub fn with_raw_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Use CRLF line endings
    pub fn crlf(mut self) -> Self {
        self.line_ending = "\r\n";
        self
    }

    /// Omit the terminator after the last line
    pub fn without_trailing_newline(mut self) -> Self {
        self.trailing_newline = false;
        self
    }

    /// Render the archive text
    pub fn to_text(&self) -> String {
        let mut text = self.lines.join(self.line_ending);
        if self.trailing_newline && !self.lines.is_empty() {
            text.push_str(self.line_ending);
        }
        text
    }

    /// Write the archive to a temporary file (consumes self)
    pub fn build(self) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(self.to_text().as_bytes()).expect("Failed to write archive");
        file.flush().expect("Failed to flush archive");
        file
    }
}

impl Default for ArchiveBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for a single post in Twitter API shape
#[derive(Clone)]
pub struct PostLineBuilder {
    id: String,
    reply_to: Option<String>,
    text: String,
    created_at: String,
    handle: String,
    include_user: bool,
}

impl PostLineBuilder {
    /// Create a root-style post with the given id
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            reply_to: None,
            text: format!("Post {}", id),
            created_at: "2020-01-01T00:00:00Z".to_string(),
            handle: format!("user{}", id),
            include_user: true,
        }
    }

    /// Create a reply to `parent`
    pub fn reply(id: &str, parent: &str) -> Self {
        Self::new(id).reply_to(parent)
    }

    /// Set the parent id
    pub fn reply_to(mut self, parent: &str) -> Self {
        self.reply_to = Some(parent.to_string());
        self
    }

    /// Set the body text
    pub fn text(mut self, text: &str) -> Self {
        self.text = text.to_string();
        self
    }

    /// Set the creation time string
    pub fn created_at(mut self, created_at: &str) -> Self {
        self.created_at = created_at.to_string();
        self
    }

    /// Set the author handle
    pub fn handle(mut self, handle: &str) -> Self {
        self.handle = handle.to_string();
        self
    }

    /// Drop the `user` sub-object
    pub fn without_user(mut self) -> Self {
        self.include_user = false;
        self
    }

    /// Convert to a JSON value
    pub fn to_value(&self) -> Value {
        let mut value = json!({
            "id": self.id.parse::<u64>().ok(),
            "id_str": self.id,
            "in_reply_to_status_id_str": self.reply_to,
            "text": self.text,
            "created_at": self.created_at,
        });
        if self.include_user {
            value["user"] = json!({
                "profile_image_url_https": format!("https://img.example/{}.png", self.handle),
                "name": format!("User {}", self.handle),
                "screen_name": self.handle,
            });
        }
        value
    }

    /// Convert to a single JSON line
    pub fn to_json(&self) -> String {
        self.to_value().to_string()
    }
}

/// Ids of every post reachable from `root`, in pre-order
pub fn tree_ids(root: &thread_archive::TreeNode) -> Vec<String> {
    root.walk().map(|(_, node)| node.id().to_string()).collect()
}

/// Pre-order `(depth, id)` pairs, capturing both linkage and sibling order
pub fn tree_shape(root: &thread_archive::TreeNode) -> Vec<(usize, String)> {
    root.walk().map(|(depth, node)| (depth, node.id().to_string())).collect()
}

/// A realistic thread: root, two branches, a nested reply, listed out of order
pub fn realistic_thread() -> ArchiveBuilder {
    ArchiveBuilder::new().with_posts([
        PostLineBuilder::reply("1300", "1200").created_at("Wed Oct 10 20:25:00 +0000 2018"),
        PostLineBuilder::new("1000")
            .text("Thread start")
            .handle("alice")
            .created_at("Wed Oct 10 20:19:24 +0000 2018"),
        PostLineBuilder::reply("1200", "1000").created_at("Wed Oct 10 20:21:00 +0000 2018"),
        PostLineBuilder::reply("1100", "1000").created_at("Wed Oct 10 20:20:00 +0000 2018"),
        PostLineBuilder::reply("1400", "1100").created_at("Wed Oct 10 20:30:00 +0000 2018"),
    ])
}
