use serde::Deserialize;
use serde_json::Value;

use crate::errors::ArchiveError;
use crate::models::{ArchiveRecord, Post};
use crate::parsers::timestamps::parse_created_at;
use crate::utils::escape_html;

/// Convert one raw archive record into a [`Post`] and the id it replies to
///
/// The parent id is returned separately from the post even though the post also records
/// it, so the tree builder can resolve it without reaching into the post.
///
/// # Errors
///
/// Returns [`ArchiveError::MissingField`] when `id_str`, `text`, `created_at` or any
/// `user` field is absent or has the wrong type. The error names the record's id when
/// one can be recovered. An unparsable `created_at` is not an error; the post gets a
/// `None` timestamp.
pub fn parse_record(raw: &Value) -> Result<(Post, Option<String>), ArchiveError> {
    let record = ArchiveRecord::deserialize(raw).map_err(|source| ArchiveError::MissingField {
        id: record_id(raw),
        record: raw.clone(),
        source,
    })?;

    let timestamp = parse_created_at(&record.created_at);
    if timestamp.is_none() {
        tracing::debug!(id = %record.id_str, created_at = %record.created_at, "Invalid created_at");
    }

    let parent_id = record.in_reply_to_status_id_str;
    let post = Post {
        id: record.id_str,
        parent_id: parent_id.clone(),
        author_avatar_url: record.user.profile_image_url_https,
        author_display_name: record.user.name,
        author_handle: record.user.screen_name,
        body_html: escape_html(&record.text),
        body_text: record.text,
        reply_count: 0,
        timestamp,
    };

    Ok((post, parent_id))
}

/// Best-effort id of a record that may not have passed validation
pub fn record_id(raw: &Value) -> Option<String> {
    if let Some(Value::String(id)) = raw.get("id_str") {
        return Some(id.clone());
    }
    match raw.get("id") {
        Some(Value::String(id)) => Some(id.clone()),
        Some(Value::Number(id)) => Some(id.to_string()),
        _ => None,
    }
}

/// Numeric sort key of a record: `id_str` as an integer, falling back to a numeric `id`
pub fn numeric_id(raw: &Value) -> Option<u64> {
    raw.get("id_str")
        .and_then(Value::as_str)
        .and_then(|s| s.trim().parse::<u64>().ok())
        .or_else(|| match raw.get("id") {
            Some(Value::Number(n)) => n.as_u64(),
            Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
            _ => None,
        })
}
