use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Custom deserializer for optional references to other posts
///
/// Only a JSON string counts as a reference. `null`, numbers and any other shape yield
/// `None`, so a malformed reference leaves the post unresolved instead of rejecting the
/// record.
pub fn deserialize_optional_reference<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(match value {
        Some(Value::String(s)) => Some(s),
        _ => None,
    })
}
