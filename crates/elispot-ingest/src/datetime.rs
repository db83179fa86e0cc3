//! Date/time parsing for manifest timestamp columns.
//!
//! Source manifests are human-curated and mix a handful of layouts; values
//! are normalized to ISO 8601 strings at load time so downstream stages can
//! re-parse them infallibly.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use elispot_model::{PipelineError, Result};

const DATE_LAYOUTS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%d-%b-%Y"];
const TIME_LAYOUTS: [&str; 2] = ["%H:%M:%S", "%H:%M"];
const DATETIME_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
];

/// Canonical date format written back into frames.
pub const ISO_DATE: &str = "%Y-%m-%d";
/// Canonical time format written back into frames.
pub const ISO_TIME: &str = "%H:%M:%S";
/// Canonical datetime format written back into frames.
pub const ISO_DATETIME: &str = "%Y-%m-%dT%H:%M:%S";

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    DATE_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDate::parse_from_str(trimmed, layout).ok())
}

pub fn parse_time(value: &str) -> Option<NaiveTime> {
    let trimmed = value.trim();
    TIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveTime::parse_from_str(trimmed, layout).ok())
}

pub fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    DATETIME_LAYOUTS
        .iter()
        .find_map(|layout| NaiveDateTime::parse_from_str(trimmed, layout).ok())
        .or_else(|| parse_date(trimmed).and_then(|date| date.and_hms_opt(0, 0, 0)))
}

fn parse_error(column: &str, row: usize, value: &str, expected: &'static str) -> PipelineError {
    PipelineError::Parse {
        column: column.to_string(),
        row,
        value: value.to_string(),
        expected,
    }
}

/// Normalize a date cell to `YYYY-MM-DD`. Empty cells stay empty.
pub fn normalize_date(column: &str, row: usize, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Ok(String::new());
    }
    parse_date(value)
        .map(|date| date.format(ISO_DATE).to_string())
        .ok_or_else(|| parse_error(column, row, value, "date"))
}

/// Normalize a time-of-day cell to `hh:mm:ss`. Empty cells stay empty.
pub fn normalize_time(column: &str, row: usize, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Ok(String::new());
    }
    parse_time(value)
        .map(|time| time.format(ISO_TIME).to_string())
        .ok_or_else(|| parse_error(column, row, value, "time"))
}

/// Normalize a datetime cell to `YYYY-MM-DDThh:mm:ss`. Empty cells stay
/// empty. A bare date is accepted and treated as midnight.
pub fn normalize_datetime(column: &str, row: usize, value: &str) -> Result<String> {
    if value.trim().is_empty() {
        return Ok(String::new());
    }
    parse_datetime(value)
        .map(|datetime| datetime.format(ISO_DATETIME).to_string())
        .ok_or_else(|| parse_error(column, row, value, "datetime"))
}
