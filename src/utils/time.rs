//! Date/time parsing and formatting helpers.
//!
//! All timestamps cross the SQLite boundary as TEXT in `DATETIME_FORMAT`,
//! dates as `DATE_FORMAT`. Both formats are understood by SQLite's `date()`
//! function, which the day-scoped queries rely on.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

pub const DATE_FORMAT: &str = "%Y-%m-%d";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";
pub const TIME_DISPLAY_FORMAT: &str = "%H:%M";

/// Zero out seconds and sub-seconds, keeping minute precision.
pub fn truncate_to_minute(dt: NaiveDateTime) -> NaiveDateTime {
    dt.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(dt)
}

/// Parse "YYYY-MM-DD".
pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).ok()
}

/// Parse "YYYY-MM-DD HH:MM" or "YYYY-MM-DD HH:MM:SS".
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M"))
        .ok()
}

pub fn format_date(d: NaiveDate) -> String {
    d.format(DATE_FORMAT).to_string()
}

pub fn format_datetime(dt: NaiveDateTime) -> String {
    dt.format(DATETIME_FORMAT).to_string()
}
