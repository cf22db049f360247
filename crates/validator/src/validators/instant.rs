//! Temporal types a before/after boundary can be parsed into.
//!
//! Without a format, boundaries are ISO-8601. With a format, they follow
//! `chrono` strftime syntax. Zoned types read an offset-less pattern as UTC
//! and a date-only pattern as midnight.

use chrono::format::ParseError;
use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::time::SystemTime;

/// A date/time value that can be compared against a parsed boundary.
pub trait Instant: PartialOrd + Sized {
    /// Human-readable type name used in error params.
    const KIND: &'static str;

    /// Parses an ISO-8601 boundary.
    fn parse_iso(date: &str) -> Result<Self, ParseError>;

    /// Parses a boundary with a strftime pattern.
    fn parse_with_format(date: &str, format: &str) -> Result<Self, ParseError>;

    /// Parses with `format` when present and non-empty, ISO-8601 otherwise.
    fn parse_boundary(date: &str, format: Option<&str>) -> Result<Self, ParseError> {
        match format.filter(|f| !f.is_empty()) {
            Some(format) => Self::parse_with_format(date, format),
            None => Self::parse_iso(date),
        }
    }
}

// ============================================================================
// NAIVE TYPES
// ============================================================================

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::default())
}

/// Completes a reduced-precision ISO form (`2016`, `2016-01`,
/// `2016-01-01T10`) to a full date-time string. Missing fields take their
/// lowest value.
fn expand_reduced(date: &str) -> Option<String> {
    let bytes = date.as_bytes();
    let digits = |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);

    match bytes.len() {
        4 if digits(0..4) => Some(format!("{date}-01-01T00:00:00")),
        7 if digits(0..4) && bytes[4] == b'-' && digits(5..7) => Some(format!("{date}-01T00:00:00")),
        13 if bytes[10] == b'T' && digits(11..13) => Some(format!("{date}:00:00")),
        _ => None,
    }
}

fn parse_reduced(date: &str) -> Option<NaiveDateTime> {
    let full = expand_reduced(date)?;
    NaiveDateTime::parse_from_str(&full, "%Y-%m-%dT%H:%M:%S").ok()
}

impl Instant for NaiveDate {
    const KIND: &'static str = "date";

    fn parse_iso(date: &str) -> Result<Self, ParseError> {
        let date = date.trim();
        date.parse().or_else(|e| {
            parse_reduced(date)
                .filter(|_| !date.contains('T'))
                .map(|reduced| reduced.date())
                .ok_or(e)
        })
    }

    fn parse_with_format(date: &str, format: &str) -> Result<Self, ParseError> {
        NaiveDate::parse_from_str(date, format)
    }
}

impl Instant for NaiveTime {
    const KIND: &'static str = "time";

    fn parse_iso(date: &str) -> Result<Self, ParseError> {
        let date = date.trim();
        date.parse::<NaiveTime>()
            .or_else(|_| NaiveTime::parse_from_str(date, "%H:%M"))
    }

    fn parse_with_format(date: &str, format: &str) -> Result<Self, ParseError> {
        NaiveTime::parse_from_str(date, format)
    }
}

impl Instant for NaiveDateTime {
    const KIND: &'static str = "local date-time";

    fn parse_iso(date: &str) -> Result<Self, ParseError> {
        let date = date.trim();
        date.parse::<NaiveDateTime>()
            .or_else(|_| NaiveDateTime::parse_from_str(date, "%Y-%m-%dT%H:%M"))
            .or_else(|_| date.parse::<NaiveDate>().map(midnight))
            .or_else(|e| parse_reduced(date).ok_or(e))
    }

    fn parse_with_format(date: &str, format: &str) -> Result<Self, ParseError> {
        NaiveDateTime::parse_from_str(date, format)
            .or_else(|_| NaiveDate::parse_from_str(date, format).map(midnight))
    }
}

// ============================================================================
// ZONED TYPES
// ============================================================================

fn parse_zoned_iso(date: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    let date = date.trim();
    DateTime::parse_from_rfc3339(date)
        // basic-format offsets such as `+0900`
        .or_else(|_| DateTime::parse_from_str(date, "%Y-%m-%dT%H:%M:%S%.f%z"))
        .or_else(|_| NaiveDateTime::parse_iso(date).map(|naive| naive.and_utc().fixed_offset()))
}

fn parse_zoned_with_format(date: &str, format: &str) -> Result<DateTime<FixedOffset>, ParseError> {
    DateTime::parse_from_str(date, format).or_else(|_| {
        NaiveDateTime::parse_with_format(date, format).map(|naive| naive.and_utc().fixed_offset())
    })
}

impl Instant for DateTime<FixedOffset> {
    const KIND: &'static str = "date-time";

    fn parse_iso(date: &str) -> Result<Self, ParseError> {
        parse_zoned_iso(date)
    }

    fn parse_with_format(date: &str, format: &str) -> Result<Self, ParseError> {
        parse_zoned_with_format(date, format)
    }
}

impl Instant for DateTime<Utc> {
    const KIND: &'static str = "date-time";

    fn parse_iso(date: &str) -> Result<Self, ParseError> {
        parse_zoned_iso(date).map(|dt| dt.with_timezone(&Utc))
    }

    fn parse_with_format(date: &str, format: &str) -> Result<Self, ParseError> {
        parse_zoned_with_format(date, format).map(|dt| dt.with_timezone(&Utc))
    }
}

impl Instant for DateTime<Local> {
    const KIND: &'static str = "date-time";

    fn parse_iso(date: &str) -> Result<Self, ParseError> {
        parse_zoned_iso(date).map(|dt| dt.with_timezone(&Local))
    }

    fn parse_with_format(date: &str, format: &str) -> Result<Self, ParseError> {
        parse_zoned_with_format(date, format).map(|dt| dt.with_timezone(&Local))
    }
}

impl Instant for SystemTime {
    const KIND: &'static str = "system time";

    fn parse_iso(date: &str) -> Result<Self, ParseError> {
        parse_zoned_iso(date).map(SystemTime::from)
    }

    fn parse_with_format(date: &str, format: &str) -> Result<Self, ParseError> {
        parse_zoned_with_format(date, format).map(SystemTime::from)
    }
}
