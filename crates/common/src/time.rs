//! ISO-8601-like timestamp parsing
//!
//! FDSN services accept several date/time spellings in WADL default values
//! and query strings: a bare date, a date with seconds, and fractional
//! seconds, each with or without a trailing `Z`.

use crate::{Result, WadlError};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse ISO-8601-like date/time text into a UTC timestamp.
///
/// Accepted forms: `2012-11-29`, `2012-11-29T00:00:00`,
/// `2012-11-29T00:00:00.000`, optionally suffixed with `Z`.
pub fn parse_timestamp(text: &str) -> Result<DateTime<Utc>> {
    let text = text.trim();
    let bare = text.strip_suffix('Z').unwrap_or(text);

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(bare, format) {
            return Ok(dt.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(bare, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(WadlError::InvalidTimestamp(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_bare_date() {
        let ts = parse_timestamp("2012-11-29").unwrap();
        assert_eq!(ts.to_rfc3339(), "2012-11-29T00:00:00+00:00");
    }

    #[test]
    fn test_parse_datetime() {
        let ts = parse_timestamp("2012-11-29T10:30:00").unwrap();
        assert_eq!(ts.hour(), 10);
        assert_eq!(ts.minute(), 30);
    }

    #[test]
    fn test_parse_fractional_seconds_and_zulu() {
        let ts = parse_timestamp("2012-11-29T00:00:00.500Z").unwrap();
        assert_eq!(ts.timestamp_subsec_millis(), 500);
    }

    #[test]
    fn test_reject_garbage() {
        assert!(parse_timestamp("next tuesday").is_err());
        assert!(parse_timestamp("2012-13-01").is_err());
    }
}
