use chrono::{DateTime, Duration, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

/// Oldest offset a listing phrase can produce.
const MAX_LOOKBACK_DAYS: i64 = 3650;

static FIRST_INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("valid regex"));

/// Resolve a phrase like "3 hours ago" against `now`.
///
/// The first integer in the phrase is the magnitude (1 when there is none).
/// Units are checked in the order hour, minute, day; a phrase naming none of
/// them resolves to `now` unchanged. Offsets are capped at ten years so stored
/// timestamps keep a four-digit year.
pub fn parse_relative_time(phrase: &str, now: DateTime<Utc>) -> DateTime<Utc> {
    let phrase = phrase.to_lowercase();
    let magnitude = FIRST_INTEGER
        .find(&phrase)
        .and_then(|m| m.as_str().parse::<i64>().ok())
        .unwrap_or(1);

    let offset = if phrase.contains("hour") {
        Duration::try_hours(magnitude)
    } else if phrase.contains("minute") {
        Duration::try_minutes(magnitude)
    } else if phrase.contains("day") {
        Duration::try_days(magnitude)
    } else {
        return now;
    };

    let max = Duration::days(MAX_LOOKBACK_DAYS);
    let offset = offset.map_or(max, |d| d.min(max));
    now.checked_sub_signed(offset).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_hours_ago() {
        assert_eq!(parse_relative_time("3 hours ago", now()), now() - Duration::hours(3));
    }

    #[test]
    fn test_minutes_and_days() {
        assert_eq!(parse_relative_time("45 mins ago", now()), now());
        assert_eq!(parse_relative_time("45 minutes ago", now()), now() - Duration::minutes(45));
        assert_eq!(parse_relative_time("2 days ago", now()), now() - Duration::days(2));
    }

    #[test]
    fn test_missing_integer_defaults_to_one() {
        assert_eq!(parse_relative_time("an hour ago", now()), now() - Duration::hours(1));
        assert_eq!(parse_relative_time("a day ago", now()), now() - Duration::days(1));
    }

    #[test]
    fn test_unknown_unit_is_now() {
        assert_eq!(parse_relative_time("recent", now()), now());
        assert_eq!(parse_relative_time("5 weeks ago", now()), now());
        assert_eq!(parse_relative_time("", now()), now());
    }

    #[test]
    fn test_case_insensitive_and_first_integer_wins() {
        assert_eq!(
            parse_relative_time("Updated 2 Hours, 30 minutes ago", now()),
            now() - Duration::hours(2)
        );
    }

    #[test]
    fn test_hour_checked_before_day() {
        // "today" contains "day" but "hour" takes priority.
        assert_eq!(parse_relative_time("1 hour ago today", now()), now() - Duration::hours(1));
    }

    #[test]
    fn test_absurd_magnitudes_are_capped() {
        let floor = now() - Duration::days(3650);
        assert_eq!(parse_relative_time("90000000 days ago", now()), floor);
        assert_eq!(parse_relative_time("99999999999999999 days ago", now()), floor);
        assert_eq!(parse_relative_time("9999999 hours ago", now()), floor);
        assert_eq!(parse_relative_time("3650 days ago", now()), floor);
        assert_eq!(parse_relative_time("3649 days ago", now()), now() - Duration::days(3649));
    }
}
