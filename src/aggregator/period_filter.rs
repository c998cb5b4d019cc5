use crate::errors::{AppError, AppResult};
use crate::lenient::parse_flight_date;
use crate::models::Dated;
use chrono::Datelike;
use std::cmp::Ordering;
use tracing::debug;

/// Validates that a period string matches the expected format (YYYY or YYYYMM).
///
/// Checks that the period contains only ASCII digits, has exactly 4 digits (YYYY) or
/// 6 digits (YYYYMM), and that a YYYYMM month lies in 01..=12.
///
/// Returns `Ok(())` if valid, `InvalidInput` for a malformed string and
/// `PeriodValidationError` for a well-formed period naming a month that does not exist.
pub fn validate_period_format(period: &str) -> AppResult<()> {
    if period.is_empty() {
        return Err(AppError::InvalidInput(
            "Period must be YYYY or YYYYMM format (4 or 6 digits), got empty string".to_string(),
        ));
    }
    if !period.chars().all(|c| c.is_ascii_digit()) {
        return Err(AppError::InvalidInput(format!(
            "Period must contain only digits, got: {period}"
        )));
    }
    match period.len() {
        4 | 6 => match parse_period(period) {
            Some(_) => Ok(()),
            None => Err(AppError::PeriodValidationError {
                period: period.to_string(),
                reason: "month must be between 01 and 12".to_string(),
            }),
        },
        _ => Err(AppError::InvalidInput(format!(
            "Period must be YYYY or YYYYMM format (4 or 6 digits), got: {} ({} digits)",
            period,
            period.len()
        ))),
    }
}

/// Parses a period string into (year, month_opt) format.
///
/// Returns `Some((year, month_opt))` where:
/// - For YYYY format (4 digits): `month_opt` is `None`
/// - For YYYYMM format (6 digits): `month_opt` is `Some(1..=12)`
///
/// Returns `None` if the period format is invalid.
pub(crate) fn parse_period(period: &str) -> Option<(u32, Option<u32>)> {
    if !period.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    match period.len() {
        4 => period.parse().ok().map(|y| (y, None)),
        6 => {
            let year: u32 = period[..4].parse().ok()?;
            let month: u32 = period[4..].parse().ok()?;
            if (1..=12).contains(&month) {
                Some((year, Some(month)))
            } else {
                None
            }
        }
        _ => None,
    }
}

/// Compares two periods, handling YYYY vs YYYYMM formats correctly.
///
/// Returns `Some(Ordering)` if both periods are valid, `None` otherwise.
/// A YYYY period sorts before every YYYYMM period of the same year.
pub fn period_compare(period1: &str, period2: &str) -> Option<Ordering> {
    let (y1, m1) = parse_period(period1)?;
    let (y2, m2) = parse_period(period2)?;

    match y1.cmp(&y2) {
        Ordering::Equal => match (m1, m2) {
            (None, None) => Some(Ordering::Equal),
            (None, Some(_)) => Some(Ordering::Less),
            (Some(_), None) => Some(Ordering::Greater),
            (Some(m1), Some(m2)) => Some(m1.cmp(&m2)),
        },
        ord => Some(ord),
    }
}

/// Checks if a flight month is within the range.
///
/// A YYYY start matches every month of that year onwards; a YYYY end matches
/// every month up to December of that year.
fn month_in_range(
    (year, month): (u32, u32),
    start: Option<(u32, Option<u32>)>,
    end: Option<(u32, Option<u32>)>,
) -> bool {
    if let Some((s_year, s_month)) = start {
        if (year, month) < (s_year, s_month.unwrap_or(1)) {
            return false;
        }
    }
    if let Some((e_year, e_month)) = end {
        if (year, month) > (e_year, e_month.unwrap_or(12)) {
            return false;
        }
    }
    true
}

/// Filters flights by period range.
///
/// Each flight's date is reduced to its month and compared against the inclusive
/// `start_period..=end_period` range. Either bound may be omitted. Flights whose
/// date cannot be read are left out.
///
/// # Arguments
///
/// * `flights` - Flights to filter
/// * `start_period` - Optional start period (inclusive), YYYY or YYYYMM
/// * `end_period` - Optional end period (inclusive), YYYY or YYYYMM
///
/// # Errors
///
/// Returns `InvalidInput` if a bound is malformed or the start comes after the
/// end, and `PeriodValidationError` if a bound names a month that does not exist.
pub fn filter_flights_by_period<'a, T: Dated>(
    flights: &'a [T],
    start_period: Option<&str>,
    end_period: Option<&str>,
) -> AppResult<Vec<&'a T>> {
    let parse_bound = |period: Option<&str>| -> AppResult<Option<(u32, Option<u32>)>> {
        match period {
            Some(p) => {
                validate_period_format(p)?;
                Ok(parse_period(p))
            }
            None => Ok(None),
        }
    };

    let start = parse_bound(start_period)?;
    let end = parse_bound(end_period)?;

    if let (Some(s), Some(e)) = (start_period, end_period) {
        if period_compare(s, e) == Some(Ordering::Greater) {
            return Err(AppError::InvalidInput(format!(
                "Start period '{s}' must be less than or equal to end period '{e}'"
            )));
        }
    }

    let filtered = flights
        .iter()
        .filter(|flight| {
            // Negative years cannot be written as a YYYY period.
            match parse_flight_date(flight.date())
                .and_then(|day| Some((u32::try_from(day.year()).ok()?, day.month())))
            {
                Some(month) => month_in_range(month, start, end),
                None => {
                    debug!(date = flight.date(), "Skipping flight with unreadable date");
                    false
                }
            }
        })
        .collect();

    Ok(filtered)
}
