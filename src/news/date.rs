use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"];

/// Best-effort parse of a provider date string into UTC.
///
/// Accepts unix seconds, RFC 3339, RFC 2822, `YYYY-MM-DD HH:MM:SS` (with a space or `T`)
/// and bare `YYYY-MM-DD`. Naive forms are taken as UTC. Returns `None` for anything else.
///
/// ```
/// use tickerdesk::news::parse_published;
///
/// assert!(parse_published("2024-05-01T08:30:00+09:00").is_some());
/// assert!(parse_published("1714552200").is_some());
/// assert!(parse_published("invalid-date").is_none());
/// ```
pub fn parse_published(raw: &str) -> Option<DateTime<Utc>> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(secs) = s.parse::<i64>() {
        return from_unix(secs);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(n) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(n.and_utc());
        }
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|n| n.and_utc())
}

pub(crate) fn from_unix(secs: i64) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0)
}
