//! Forgiving parsers for logbook values.
//!
//! Logbook exports contain years of hand-typed data, so nothing here fails:
//! numbers fall back to zero and dates to `None`. Callers decide what a
//! missing value means for them.

use crate::constants::{DAY_FIRST_DATE_PATTERN, ISO_DATE_PATTERN};
use chrono::{DateTime, NaiveDate, NaiveDateTime};
use regex::Regex;
use std::sync::OnceLock;

/// Cached regex for `YYYY-MM-DD` dates.
static ISO_DATE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Cached regex for `DD/MM/YYYY` dates.
static DAY_FIRST_DATE_REGEX: OnceLock<Regex> = OnceLock::new();

/// Layout of a date string as typed in the logbook.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateShape {
    /// `YYYY-MM-DD`
    Iso,
    /// `DD/MM/YYYY`
    DayFirst,
    /// Anything else, left to generic parsing
    Other,
}

/// Detects which of the accepted date layouts `value` uses.
pub fn date_shape(value: &str) -> DateShape {
    let iso = ISO_DATE_REGEX.get_or_init(|| {
        Regex::new(ISO_DATE_PATTERN).expect("ISO_DATE_PATTERN is a valid regex pattern")
    });
    let day_first = DAY_FIRST_DATE_REGEX.get_or_init(|| {
        Regex::new(DAY_FIRST_DATE_PATTERN).expect("DAY_FIRST_DATE_PATTERN is a valid regex pattern")
    });

    if iso.is_match(value) {
        DateShape::Iso
    } else if day_first.is_match(value) {
        DateShape::DayFirst
    } else {
        DateShape::Other
    }
}

/// Parses a flight date in any of the layouts the backend has produced over time.
///
/// `YYYY-MM-DD` and `DD/MM/YYYY` are detected first. Anything else is tried as an
/// RFC 3339 timestamp, a naive `YYYY-MM-DDTHH:MM:SS` timestamp and `YYYY/MM/DD`,
/// keeping the calendar day as written.
///
/// Returns `None` when no layout matches or the day does not exist.
pub fn parse_flight_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    match date_shape(value) {
        DateShape::Iso => NaiveDate::parse_from_str(value, "%Y-%m-%d").ok(),
        DateShape::DayFirst => NaiveDate::parse_from_str(value, "%d/%m/%Y").ok(),
        DateShape::Other => DateTime::parse_from_rfc3339(value)
            .map(|dt| dt.date_naive())
            .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f").map(|dt| dt.date()))
            .or_else(|_| NaiveDate::parse_from_str(value, "%Y/%m/%d"))
            .ok(),
    }
}

/// Reads the leading integer of `value` the way `parseInt` does.
///
/// Leading whitespace and one sign are allowed, then digits up to the first
/// non-digit. Returns `None` when there are no digits at all. Values beyond the
/// `i64` range saturate.
pub fn parse_int_prefix(value: &str) -> Option<i64> {
    let trimmed = value.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let mut result: i64 = 0;
    let mut seen_digit = false;
    for b in digits.bytes().take_while(u8::is_ascii_digit) {
        seen_digit = true;
        result = result
            .saturating_mul(10)
            .saturating_add(i64::from(b - b'0'));
    }

    if !seen_digit {
        return None;
    }
    Some(if negative { -result } else { result })
}

/// Reads the longest numeric prefix of `value` the way `parseFloat` does.
///
/// Accepts an optional sign, digits with at most one decimal point and an
/// exponent that is only consumed when digits follow it.
pub fn parse_float_prefix(value: &str) -> Option<f64> {
    let trimmed = value.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;

    if matches!(bytes.first(), Some(b'-') | Some(b'+')) {
        end += 1;
    }

    let mut mantissa_digits = 0;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
        mantissa_digits += 1;
    }
    if end < bytes.len() && bytes[end] == b'.' {
        let mut fraction_end = end + 1;
        while fraction_end < bytes.len() && bytes[fraction_end].is_ascii_digit() {
            fraction_end += 1;
            mantissa_digits += 1;
        }
        end = fraction_end;
    }
    if mantissa_digits == 0 {
        return None;
    }

    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'-' || bytes[exp_end] == b'+') {
            exp_end += 1;
        }
        let exp_digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > exp_digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse::<f64>().ok()
}

/// Splits a clock string `"H:MM"` into hours and minutes.
///
/// Each part is read with [`parse_int_prefix`]; missing or unreadable parts are 0.
/// Parts after the second colon are ignored.
pub fn parse_clock(value: &str) -> (i64, i64) {
    let mut parts = value.split(':');
    let hours = parts.next().and_then(parse_int_prefix).unwrap_or(0);
    let minutes = parts.next().and_then(parse_int_prefix).unwrap_or(0);
    (hours, minutes)
}
