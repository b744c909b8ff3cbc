use chrono::{Duration, NaiveDate};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT).ok()
}

/// `true` when `end` falls strictly after `start`.
///
/// Falls back to string ordering when either side is not a calendar date.
pub fn is_strictly_after(end: &str, start: &str) -> bool {
    match (parse_date(end), parse_date(start)) {
        (Some(end), Some(start)) => end > start,
        _ => end > start,
    }
}

/// `date` moved back by `days`, formatted as `YYYY-MM-DD`.
pub fn days_before(date: &str, days: u32) -> Option<String> {
    let date = parse_date(date)?;
    let shifted = date.checked_sub_signed(Duration::days(i64::from(days)))?;
    Some(shifted.format(DATE_FORMAT).to_string())
}

/// Rounds to one decimal place, ties to even on the exact binary value.
pub fn round_to_tenth(value: f64) -> f64 {
    format!("{:.1}", value).parse().unwrap_or(value)
}
