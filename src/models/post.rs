use std::hash::{Hash, Hasher};

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A normalized post ready for display
///
/// `id` is the only field used for identity: two posts with the same id compare equal
/// regardless of their content.
#[derive(Debug, Clone, Serialize)]
pub struct Post {
    pub id: String,
    pub parent_id: Option<String>,
    pub author_avatar_url: String,
    pub author_display_name: String,
    pub author_handle: String,
    pub body_html: String,
    pub body_text: String,
    /// Always 0 for archived posts, which carry no live engagement counters
    pub reply_count: u32,
    /// Creation time in epoch milliseconds, `None` when the source date was unparsable
    pub timestamp: Option<i64>,
}

impl Post {
    /// Creation time as a UTC datetime, if the archive carried a valid date
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.timestamp.and_then(DateTime::from_timestamp_millis)
    }
}

impl PartialEq for Post {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Post {}

impl Hash for Post {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
