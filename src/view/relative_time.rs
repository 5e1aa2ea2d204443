//! Human-readable "N units ago" rendering for feed timestamps.

use chrono::{DateTime, Local, Utc};

const MS_PER_MINUTE: i64 = 60_000;
const MS_PER_HOUR: i64 = 3_600_000;
const MS_PER_DAY: i64 = 86_400_000;

/// Render `timestamp` relative to `now`.
///
/// Under a minute is "Just now"; under an hour, a day, and a week render as
/// minutes, hours, and days ago. Anything older falls back to the local
/// calendar date (`M/D/YYYY`).
pub fn format_relative(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let delta_ms = (now - timestamp).num_milliseconds();
    let minutes = delta_ms / MS_PER_MINUTE;
    let hours = delta_ms / MS_PER_HOUR;
    let days = delta_ms / MS_PER_DAY;

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        ago(minutes, "minute")
    } else if hours < 24 {
        ago(hours, "hour")
    } else if days < 7 {
        ago(days, "day")
    } else {
        calendar_date(timestamp)
    }
}

fn ago(n: i64, unit: &str) -> String {
    let plural = if n > 1 { "s" } else { "" };
    format!("{n} {unit}{plural} ago")
}

fn calendar_date(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%-m/%-d/%Y")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 3, 15, 12, 0, 0).unwrap()
    }

    fn before(delta: Duration) -> String {
        format_relative(now() - delta, now())
    }

    #[test]
    fn under_a_minute_is_just_now() {
        assert_eq!(before(Duration::seconds(0)), "Just now");
        assert_eq!(before(Duration::seconds(45)), "Just now");
        assert_eq!(before(Duration::milliseconds(59_999)), "Just now");
    }

    #[test]
    fn exactly_one_minute_is_singular() {
        assert_eq!(before(Duration::seconds(60)), "1 minute ago");
        assert_eq!(before(Duration::seconds(90)), "1 minute ago");
        assert_eq!(before(Duration::seconds(120)), "2 minutes ago");
        assert_eq!(before(Duration::minutes(59)), "59 minutes ago");
    }

    #[test]
    fn hours() {
        assert_eq!(before(Duration::minutes(60)), "1 hour ago");
        assert_eq!(before(Duration::minutes(150)), "2 hours ago");
        assert_eq!(before(Duration::hours(23)), "23 hours ago");
    }

    #[test]
    fn days() {
        assert_eq!(before(Duration::hours(24)), "1 day ago");
        assert_eq!(before(Duration::days(3)), "3 days ago");
        assert_eq!(before(Duration::days(6)), "6 days ago");
    }

    #[test]
    fn seven_days_is_the_calendar_date_boundary() {
        assert_eq!(
            before(Duration::days(7) - Duration::milliseconds(1)),
            "6 days ago"
        );
        let ts = now() - Duration::days(7);
        assert_eq!(
            format_relative(ts, now()),
            ts.with_timezone(&Local).format("%-m/%-d/%Y").to_string()
        );
    }

    #[test]
    fn a_week_or_more_is_a_calendar_date() {
        let ts = now() - Duration::days(10);
        let rendered = format_relative(ts, now());
        assert!(!rendered.contains("ago"));
        assert_eq!(rendered, ts.with_timezone(&Local).format("%-m/%-d/%Y").to_string());
        assert_eq!(rendered.matches('/').count(), 2);
    }

    #[test]
    fn future_timestamps_are_just_now() {
        assert_eq!(format_relative(now() + Duration::minutes(5), now()), "Just now");
    }
}
