//! Timestamp parsing and display formatting.

use chrono::{DateTime, Local, NaiveDateTime, Utc};

/// Parses a timestamp in any of the formats the backend emits.
///
/// Accepts RFC 3339 (`2026-10-18T08:00:00Z`), RFC 2822
/// (`Sat, 17 Oct 2026 09:00:00 GMT`) and naive ISO-8601 without an
/// offset, which is taken as UTC.
#[must_use]
pub fn parse_timestamp(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|naive| naive.and_utc())
}

/// Formats how long ago `then` was, relative to `now`.
///
/// Missing or future times read as "Just now"; anything a week or older
/// is shown as a calendar date.
#[must_use]
pub fn relative_time(then: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    let Some(then) = then else {
        return "Just now".to_string();
    };

    let elapsed = now - then;
    let minutes = elapsed.num_minutes();
    let hours = elapsed.num_hours();
    let days = elapsed.num_days();

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes} min ago")
    } else if hours < 24 {
        format!("{hours} h ago")
    } else if days < 7 {
        if days == 1 {
            "1 day ago".to_string()
        } else {
            format!("{days} days ago")
        }
    } else {
        then.with_timezone(&Local).format("%d/%m/%Y").to_string()
    }
}

/// Formats a timestamp for detail display in local time.
#[must_use]
pub fn format_timestamp(at: Option<DateTime<Utc>>) -> String {
    at.map_or_else(
        || "Unknown".to_string(),
        |dt| dt.with_timezone(&Local).format("%d/%m/%Y %H:%M").to_string(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_parse_formats() {
        let expected = Utc.with_ymd_and_hms(2026, 10, 17, 9, 0, 0).unwrap();
        assert_eq!(parse_timestamp("2026-10-17T09:00:00Z"), Some(expected));
        assert_eq!(parse_timestamp("2026-10-17T11:00:00+02:00"), Some(expected));
        assert_eq!(
            parse_timestamp("Sat, 17 Oct 2026 09:00:00 GMT"),
            Some(expected)
        );
        assert_eq!(parse_timestamp("2026-10-17T09:00:00.000"), Some(expected));
        assert_eq!(parse_timestamp("2026-10-17 09:00:00"), Some(expected));
        assert_eq!(parse_timestamp(""), None);
        assert_eq!(parse_timestamp("yesterday"), None);
    }

    #[test]
    fn test_relative_time_buckets() {
        let now = now();
        assert_eq!(relative_time(None, now), "Just now");
        assert_eq!(relative_time(Some(now - Duration::seconds(30)), now), "Just now");
        assert_eq!(relative_time(Some(now + Duration::hours(1)), now), "Just now");
        assert_eq!(relative_time(Some(now - Duration::minutes(30)), now), "30 min ago");
        assert_eq!(relative_time(Some(now - Duration::minutes(59)), now), "59 min ago");
        assert_eq!(relative_time(Some(now - Duration::hours(5)), now), "5 h ago");
        assert_eq!(relative_time(Some(now - Duration::hours(23)), now), "23 h ago");
        assert_eq!(relative_time(Some(now - Duration::hours(27)), now), "1 day ago");
        assert_eq!(relative_time(Some(now - Duration::days(4)), now), "4 days ago");
    }

    #[test]
    fn test_relative_time_old_dates_show_calendar_date() {
        let formatted = relative_time(Some(now() - Duration::days(30)), now());
        assert_eq!(formatted.len(), "18/09/2026".len());
        assert!(formatted.ends_with("/2026"));
    }

    #[test]
    fn test_format_timestamp_unknown() {
        assert_eq!(format_timestamp(None), "Unknown");
        assert_eq!(format_timestamp(Some(now())).len(), "18/10/2026 12:00".len());
    }
}
