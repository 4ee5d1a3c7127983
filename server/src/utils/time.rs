//! Time utility functions

use chrono::{DateTime, NaiveDate, Utc};

/// Seconds in one day
pub const SECS_PER_DAY: i64 = 86_400;

/// Convert seconds since Unix epoch to DateTime<Utc>
pub fn secs_to_datetime(secs: i64) -> DateTime<Utc> {
    DateTime::from_timestamp(secs, 0).unwrap_or_else(|| {
        tracing::warn!(secs, "Invalid timestamp, using epoch");
        DateTime::UNIX_EPOCH
    })
}

/// A parsed calendar value from user input.
///
/// `Day` is a bare `YYYY-MM-DD` date and covers the whole UTC day;
/// `Instant` is a full RFC 3339 timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateValue {
    Day(i64),
    Instant(i64),
}

impl DateValue {
    /// First second covered by this value
    pub fn start(&self) -> i64 {
        match self {
            Self::Day(secs) | Self::Instant(secs) => *secs,
        }
    }

    /// Last second covered by this value
    pub fn end(&self) -> i64 {
        match self {
            Self::Day(secs) => secs + SECS_PER_DAY - 1,
            Self::Instant(secs) => *secs,
        }
    }
}

/// Parse `YYYY-MM-DD` or an RFC 3339 timestamp
pub fn parse_date_value(input: &str) -> Option<DateValue> {
    let input = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(input, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0)?.and_utc();
        return Some(DateValue::Day(midnight.timestamp()));
    }
    DateTime::parse_from_rfc3339(input)
        .ok()
        .map(|dt| DateValue::Instant(dt.with_timezone(&Utc).timestamp()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Datelike;

    #[test]
    fn test_secs_to_datetime_known_value() {
        // 2024-01-01 00:00:00 UTC
        let dt = secs_to_datetime(1_704_067_200);
        assert_eq!(dt.year(), 2024);
        assert_eq!(dt.month(), 1);
        assert_eq!(dt.day(), 1);
    }

    #[test]
    fn test_parse_bare_date_covers_whole_day() {
        let value = parse_date_value("2024-01-01").unwrap();
        assert_eq!(value, DateValue::Day(1_704_067_200));
        assert_eq!(value.start(), 1_704_067_200);
        assert_eq!(value.end(), 1_704_067_200 + SECS_PER_DAY - 1);
    }

    #[test]
    fn test_parse_rfc3339_instant() {
        let value = parse_date_value("2024-01-01T12:00:00+02:00").unwrap();
        assert_eq!(value, DateValue::Instant(1_704_067_200 + 10 * 3600));
        assert_eq!(value.start(), value.end());
    }

    #[test]
    fn test_parse_date_trims_whitespace() {
        assert!(parse_date_value("  2020-05-17 ").is_some());
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date_value("").is_none());
        assert!(parse_date_value("yesterday").is_none());
        assert!(parse_date_value("2024-13-01").is_none());
        assert!(parse_date_value("50000").is_none());
    }
}
