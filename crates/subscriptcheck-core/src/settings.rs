use chrono::NaiveDate;

use crate::InsightsResult;
use crate::insights::date::parse_reference_date;

pub const AS_OF_ENV: &str = "SUBSCRIPTCHECK_AS_OF";

/// Resolves the date ranges are measured back from.
///
/// An explicit `--as-of` wins, then `SUBSCRIPTCHECK_AS_OF`, then `today`.
pub fn resolve_reference_date(
    as_of: Option<&str>,
    today: NaiveDate,
    command: &str,
) -> InsightsResult<NaiveDate> {
    let from_env = std::env::var(AS_OF_ENV).ok();
    reference_date_from(as_of, from_env.as_deref(), today, command)
}

pub(crate) fn reference_date_from(
    as_of: Option<&str>,
    from_env: Option<&str>,
    today: NaiveDate,
    command: &str,
) -> InsightsResult<NaiveDate> {
    if let Some(value) = as_of {
        return parse_reference_date(value.trim(), command);
    }

    match from_env.map(str::trim) {
        Some(value) if !value.is_empty() => parse_reference_date(value, command),
        _ => Ok(today),
    }
}
