//! `Retry-After` parsing.
//!
//! The header is either a number of seconds or an HTTP-date. Anything that is
//! neither, and a missing header, means one second.

use chrono::{DateTime, NaiveDateTime, Utc};
use std::time::Duration;

use crate::constants::retry::DEFAULT_RETRY_AFTER_SECONDS;

/// Obsolete HTTP-date layouts still allowed by RFC 9110.
const RFC850_FORMAT: &str = "%A, %d-%b-%y %H:%M:%S GMT";
const ASCTIME_FORMAT: &str = "%a %b %e %H:%M:%S %Y";

/// How long to wait before resending a throttled request.
pub fn parse_retry_after(value: Option<&str>) -> Duration {
    parse_retry_after_at(value, Utc::now())
}

/// Same as [`parse_retry_after`] with an explicit "now" for date values.
pub fn parse_retry_after_at(value: Option<&str>, now: DateTime<Utc>) -> Duration {
    let fallback = Duration::from_secs(DEFAULT_RETRY_AFTER_SECONDS);

    let Some(raw) = value.map(str::trim).filter(|v| !v.is_empty()) else {
        return fallback;
    };

    if let Ok(seconds) = raw.parse::<u64>() {
        return Duration::from_secs(seconds);
    }
    if raw.parse::<i64>().is_ok() {
        // Negative seconds: already due.
        return Duration::ZERO;
    }

    match parse_http_date(raw) {
        Some(at) => (at - now).to_std().unwrap_or(Duration::ZERO),
        None => fallback,
    }
}

fn parse_http_date(raw: &str) -> Option<DateTime<Utc>> {
    if let Ok(date) = DateTime::parse_from_rfc2822(raw) {
        return Some(date.with_timezone(&Utc));
    }
    [RFC850_FORMAT, ASCTIME_FORMAT]
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
}
