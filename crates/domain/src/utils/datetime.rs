//! Timestamp parsing and millisecond normalisation
//!
//! Stored timestamps have millisecond precision, so every incoming value is
//! truncated before it is compared or persisted.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};

use crate::errors::{EventDeskError, Result};

const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a client-supplied timestamp.
///
/// Accepts RFC 3339, naive date-times (read as UTC) and bare dates
/// (midnight UTC). `field` names the parameter in the error message.
pub fn parse_timestamp(value: &str, field: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(truncate_to_millis(parsed.with_timezone(&Utc)));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(truncate_to_millis(Utc.from_utc_datetime(&naive)));
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        if let Some(midnight) = date.and_hms_opt(0, 0, 0) {
            return Ok(Utc.from_utc_datetime(&midnight));
        }
    }

    Err(EventDeskError::InvalidInput(format!("The value '{}' is not valid for {}.", value, field)))
}

/// Drop sub-millisecond precision.
pub fn truncate_to_millis(instant: DateTime<Utc>) -> DateTime<Utc> {
    from_unix_millis(instant.timestamp_millis()).unwrap_or(instant)
}

/// Convert stored Unix milliseconds back into a UTC timestamp.
pub fn from_unix_millis(millis: i64) -> Option<DateTime<Utc>> {
    Utc.timestamp_millis_opt(millis).single()
}

#[cfg(test)]
mod tests {
    use chrono::Timelike;

    use super::*;

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_timestamp("2026-10-20T12:00:00+02:00", "startDateTime").unwrap();
        assert_eq!(parsed, Utc.with_ymd_and_hms(2026, 10, 20, 10, 0, 0).unwrap());
    }

    #[test]
    fn parses_naive_and_date_only_as_utc() {
        let expected = Utc.with_ymd_and_hms(2026, 10, 20, 10, 30, 0).unwrap();
        assert_eq!(parse_timestamp("2026-10-20T10:30:00", "f").unwrap(), expected);
        assert_eq!(parse_timestamp("2026-10-20 10:30:00", "f").unwrap(), expected);
        assert_eq!(
            parse_timestamp("2026-10-20", "f").unwrap(),
            Utc.with_ymd_and_hms(2026, 10, 20, 0, 0, 0).unwrap()
        );
    }

    #[test]
    fn truncates_sub_millisecond_precision() {
        let parsed = parse_timestamp("2026-10-20T10:00:00.123456789Z", "f").unwrap();
        assert_eq!(parsed.nanosecond(), 123_000_000);
    }

    #[test]
    fn rejects_garbage_naming_the_field() {
        let err = parse_timestamp("tomorrow", "endDateTime").unwrap_err();
        assert_eq!(
            err,
            EventDeskError::InvalidInput("The value 'tomorrow' is not valid for endDateTime.".into())
        );
    }

    #[test]
    fn millis_round_trip() {
        let instant = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(from_unix_millis(instant.timestamp_millis()), Some(instant));
    }
}
