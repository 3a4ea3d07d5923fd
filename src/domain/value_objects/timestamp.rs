//! Borrow timestamp text forms
//!
//! Stored timestamps are timezone-naive ISO-8601 with microsecond precision.
//! The fractional part is omitted entirely when it is zero, which is how the
//! existing data files were written.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use thiserror::Error;

const STORAGE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
const STORAGE_FORMAT_MICROS: &str = "%Y-%m-%dT%H:%M:%S%.6f";
const REPORT_DATE_FORMAT: &str = "%d-%m-%Y";

const ACCEPTED_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid timestamp '{0}': expected ISO-8601 like 2024-03-01T10:15:00")]
pub struct TimestampError(pub String);

/// Drop sub-microsecond precision so a value survives a save/load cycle intact
pub fn truncate_to_micros(at: NaiveDateTime) -> NaiveDateTime {
    let micros = at.nanosecond() / 1_000 * 1_000;
    at.with_nanosecond(micros).unwrap_or(at)
}

pub fn format_timestamp(at: NaiveDateTime) -> String {
    if at.nanosecond() / 1_000 == 0 {
        at.format(STORAGE_FORMAT).to_string()
    } else {
        at.format(STORAGE_FORMAT_MICROS).to_string()
    }
}

pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, TimestampError> {
    let trimmed = raw.trim();
    ACCEPTED_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .map(|date| date.and_time(NaiveTime::MIN))
        })
        .ok_or_else(|| TimestampError(raw.to_string()))
}

/// Calendar date (day-month-year) used in the issued books report
pub fn format_report_date(at: NaiveDateTime) -> String {
    at.format(REPORT_DATE_FORMAT).to_string()
}
