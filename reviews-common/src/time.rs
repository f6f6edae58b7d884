//! Timestamp utilities
//!
//! Review timestamps are naive local times in the fixed `YYYY-MM-DD HH:MM:SS`
//! form; date filter bounds use `YYYY-MM-DD`.

use chrono::{Local, NaiveDate, NaiveDateTime, ParseResult};

/// Format of stored review timestamps
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format of date filter bounds
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Current local time rendered in [`TIMESTAMP_FORMAT`]
pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Parse a stored review timestamp
pub fn parse_timestamp(s: &str) -> ParseResult<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT)
}

/// Parse a date bound to midnight at the start of that day
pub fn parse_date_bound(s: &str) -> ParseResult<NaiveDateTime> {
    NaiveDate::parse_from_str(s, DATE_FORMAT).map(|d| d.and_time(chrono::NaiveTime::MIN))
}
