use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Twitter API `created_at` layout, e.g. `Wed Oct 10 20:19:24 +0000 2018`
const TWITTER_DATE_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

/// Parse an archive `created_at` string into epoch milliseconds
///
/// Accepts RFC 3339, the Twitter API layout, RFC 2822, zone-less ISO datetimes and bare
/// ISO dates (the last two are read as UTC). Returns `None` for anything else; callers
/// treat `None` as an invalid date and keep going.
pub fn parse_created_at(raw: &str) -> Option<i64> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_str(raw, TWITTER_DATE_FORMAT) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.timestamp_millis());
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
        return Some(naive.and_utc().timestamp_millis());
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc().timestamp_millis());
    }

    tracing::debug!(created_at = raw, "Unrecognized created_at value");
    None
}
