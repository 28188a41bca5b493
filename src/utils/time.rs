//! Time utilities: parsing "YYYY-MM-DD HH:MM" timestamps, minute
//! truncation, formatting minutes.

use crate::errors::{AppError, AppResult};
use crate::models::event::OCCURRED_AT_FORMAT;
use chrono::{NaiveDateTime, Timelike};

pub fn parse_datetime(t: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(t, OCCURRED_AT_FORMAT).ok()
}

/// The punch log works in whole minutes; wall-clock "now" gets its seconds
/// dropped before it is recorded or compared.
pub fn truncate_to_minute(t: NaiveDateTime) -> NaiveDateTime {
    t.with_second(0).unwrap().with_nanosecond(0).unwrap()
}

/// Current wall-clock time in whole minutes, or the `--now` test override.
pub fn resolve_now(now_override: Option<&String>) -> AppResult<NaiveDateTime> {
    match now_override {
        Some(s) => parse_datetime(s).ok_or_else(|| AppError::InvalidTimestamp(s.to_string())),
        None => Ok(truncate_to_minute(chrono::Local::now().naive_local())),
    }
}

pub fn parse_optional_datetime(input: Option<&String>) -> AppResult<Option<NaiveDateTime>> {
    if let Some(s) = input {
        let t = parse_datetime(s).ok_or_else(|| AppError::InvalidTimestamp(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

pub fn format_minutes(mins: i64) -> String {
    let sign = if mins < 0 { "-" } else { "" };
    let m = mins.abs();
    format!("{}{:02}:{:02}", sign, m / 60, m % 60)
}
