use chrono::{DateTime, FixedOffset, NaiveDateTime, Timelike};

use crate::error::{ProcessingError, Result};

const LOCAL_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A parsed ISO-8601 timestamp. Exports normally carry an offset; one
/// without is kept as-is rather than assumed to be UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instant {
    Zoned(DateTime<FixedOffset>),
    Local(NaiveDateTime),
}

impl Instant {
    fn nanosecond(&self) -> u32 {
        match self {
            Instant::Zoned(instant) => instant.nanosecond(),
            Instant::Local(instant) => instant.nanosecond(),
        }
    }
}

/// Parse an ISO-8601 instant. A trailing `Z` is read as `+00:00`.
pub fn parse_instant(value: &str) -> Result<Instant> {
    let trimmed = value.trim();

    DateTime::parse_from_rfc3339(trimmed)
        .map(Instant::Zoned)
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, LOCAL_FORMAT).map(Instant::Local))
        .map_err(|source| ProcessingError::InvalidTimestamp {
            value: value.to_string(),
            source,
        })
}

/// Format an instant, with a `±HH:MM` offset when it has one. A non-zero
/// microsecond part is written with six digits, otherwise no fraction.
pub fn format_instant(instant: &Instant) -> String {
    // Leap seconds carry nanoseconds >= 1e9
    let micros = (instant.nanosecond() % 1_000_000_000) / 1_000;
    let time_format = if micros == 0 {
        "%Y-%m-%dT%H:%M:%S"
    } else {
        "%Y-%m-%dT%H:%M:%S%.6f"
    };

    match instant {
        Instant::Zoned(instant) => instant.format(&format!("{}%:z", time_format)).to_string(),
        Instant::Local(instant) => instant.format(time_format).to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zulu_equals_utc_offset() {
        let zulu = parse_instant("2023-05-01T10:00:00Z").unwrap();
        let offset = parse_instant("2023-05-01T10:00:00+00:00").unwrap();

        assert_eq!(zulu, offset);
        assert_eq!(format_instant(&zulu), "2023-05-01T10:00:00+00:00");
    }

    #[test]
    fn test_fractional_seconds_use_microseconds() {
        let instant = parse_instant("2023-05-01T10:00:00.123Z").unwrap();
        assert_eq!(format_instant(&instant), "2023-05-01T10:00:00.123000+00:00");
    }

    #[test]
    fn test_sub_microsecond_fraction_dropped() {
        let instant = parse_instant("2023-05-01T10:00:00.0000001Z").unwrap();
        assert_eq!(format_instant(&instant), "2023-05-01T10:00:00+00:00");

        let instant = parse_instant("2023-05-01T10:00:00.1234567Z").unwrap();
        assert_eq!(format_instant(&instant), "2023-05-01T10:00:00.123456+00:00");
    }

    #[test]
    fn test_offset_preserved() {
        let instant = parse_instant("2023-05-01T12:30:00+02:00").unwrap();
        assert_eq!(format_instant(&instant), "2023-05-01T12:30:00+02:00");
    }

    #[test]
    fn test_timestamp_without_offset() {
        let instant = parse_instant("2023-05-01T10:00:00").unwrap();
        assert!(matches!(instant, Instant::Local(_)));
        assert_eq!(format_instant(&instant), "2023-05-01T10:00:00");

        let instant = parse_instant("2023-05-01T10:00:00.5").unwrap();
        assert_eq!(format_instant(&instant), "2023-05-01T10:00:00.500000");
    }

    #[test]
    fn test_invalid_timestamp() {
        let err = parse_instant("yesterday").unwrap_err();
        assert!(matches!(err, ProcessingError::InvalidTimestamp { .. }));
        assert!(err.to_string().contains("yesterday"));
    }
}
