use chrono::DateTime;

use crate::models::TreeNode;
use crate::utils::single_line;

const INDENT: &str = "  ";
const MAX_TEXT_CHARS: usize = 80;

/// Format an epoch-millisecond timestamp for display, e.g. `2020-01-01 00:00:00`
pub fn format_timestamp(timestamp: Option<i64>) -> String {
    match timestamp.and_then(DateTime::from_timestamp_millis) {
        Some(dt) => dt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => "invalid date".to_string(),
    }
}

/// One line per post, indented by reply depth: `@handle · time · text`
pub fn render_outline(root: &TreeNode) -> Vec<String> {
    root.walk()
        .map(|(depth, node)| {
            let post = &node.post;
            format!(
                "{}@{} · {} · {}",
                INDENT.repeat(depth),
                single_line(&post.author_handle, 40),
                format_timestamp(post.timestamp),
                single_line(&post.body_text, MAX_TEXT_CHARS)
            )
        })
        .collect()
}
