//! Epoch-millisecond helpers. Punches store UTC epoch ms; day boundaries are
//! taken in the caller's time zone.

use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_datetime;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, TimeZone};

/// Epoch ms of midnight starting `date` in `tz`. On a DST gap at midnight
/// the naive value is read as UTC.
pub fn local_midnight_millis<Tz: TimeZone>(date: NaiveDate, tz: &Tz) -> i64 {
    local_millis(date.and_time(NaiveTime::MIN), tz)
}

pub fn local_millis<Tz: TimeZone>(naive: NaiveDateTime, tz: &Tz) -> i64 {
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.timestamp_millis())
        .unwrap_or_else(|| naive.and_utc().timestamp_millis())
}

/// Parse a `--at` value into local epoch ms.
pub fn parse_local_timestamp(s: &str) -> AppResult<i64> {
    parse_datetime(s)
        .map(|naive| local_millis(naive, &Local))
        .ok_or_else(|| AppError::InvalidTime(s.to_string()))
}
