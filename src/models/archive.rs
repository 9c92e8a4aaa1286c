use serde::Deserialize;

/// A single archive line as written by twarc. Only the fields needed to rebuild a
/// thread are declared.
#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveRecord {
    pub id_str: String,
    #[serde(
        default,
        deserialize_with = "crate::parsers::deserializers::deserialize_optional_reference"
    )]
    pub in_reply_to_status_id_str: Option<String>,
    pub text: String,
    pub created_at: String,
    pub user: ArchiveUser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ArchiveUser {
    pub profile_image_url_https: String,
    pub name: String,
    pub screen_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_with_null_reply_id() {
        let json = r#"{
            "id_str": "10",
            "in_reply_to_status_id_str": null,
            "text": "hello",
            "created_at": "Wed Oct 10 20:19:24 +0000 2018",
            "user": {"profile_image_url_https": "https://img", "name": "Ann", "screen_name": "ann"}
        }"#;

        let record: ArchiveRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id_str, "10");
        assert!(record.in_reply_to_status_id_str.is_none());
        assert_eq!(record.user.screen_name, "ann");
    }

    #[test]
    fn test_record_ignores_unknown_fields() {
        let json = r#"{
            "id": 11,
            "id_str": "11",
            "in_reply_to_status_id_str": "10",
            "text": "reply",
            "created_at": "2020-01-01T00:00:00Z",
            "retweet_count": 3,
            "user": {"id": 5, "profile_image_url_https": "", "name": "", "screen_name": "", "verified": false}
        }"#;

        let record: ArchiveRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.in_reply_to_status_id_str.as_deref(), Some("10"));
        assert_eq!(record.user.name, "");
    }

    #[test]
    fn test_record_missing_user_fails() {
        let json = r#"{"id_str": "12", "text": "x", "created_at": "2020-01-01T00:00:00Z"}"#;

        let err = serde_json::from_str::<ArchiveRecord>(json).unwrap_err();
        assert!(err.to_string().contains("user"));
    }
}
