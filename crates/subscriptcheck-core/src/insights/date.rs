use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

use crate::{InsightsError, InsightsResult};

pub fn format_iso_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Reads the calendar date of an ISO-8601 value without shifting timezones.
pub fn parse_transaction_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if looks_like_iso_date(trimmed) {
        return NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok();
    }
    let prefix = trimmed.get(..10)?;
    if !looks_like_iso_date(prefix) {
        return None;
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(timestamp.naive_local().date());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Some(timestamp.date());
        }
    }
    None
}

pub fn parse_reference_date(value: &str, command: &str) -> InsightsResult<NaiveDate> {
    if !looks_like_iso_date(value) {
        return Err(InsightsError::invalid_argument_for_command(
            "`as-of` must use YYYY-MM-DD format with a real calendar date.",
            Some(command),
        ));
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| {
        InsightsError::invalid_argument_for_command(
            "`as-of` must use YYYY-MM-DD format with valid calendar values.",
            Some(command),
        )
    })
}

pub fn month_key(date: &NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

pub fn month_label(date: &NaiveDate) -> String {
    date.format("%b '%y").to_string()
}

/// First day of the month lying `months` calendar months before `date`'s month.
pub fn first_of_month_before(date: NaiveDate, months: u32) -> NaiveDate {
    let current_month = i32::try_from(date.month()).unwrap_or(1);
    let mut raw_month = current_month - i32::try_from(months).unwrap_or(0);
    let mut year = date.year();

    while raw_month < 1 {
        raw_month += 12;
        year -= 1;
    }

    let month_u32 = u32::try_from(raw_month).unwrap_or(1);
    NaiveDate::from_ymd_opt(year, month_u32, 1).unwrap_or(NaiveDate::MIN)
}

fn looks_like_iso_date(value: &str) -> bool {
    if value.len() != 10 {
        return false;
    }
    let bytes = value.as_bytes();
    if bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }

    for index in [0usize, 1, 2, 3, 5, 6, 8, 9] {
        if !bytes[index].is_ascii_digit() {
            return false;
        }
    }
    true
}
