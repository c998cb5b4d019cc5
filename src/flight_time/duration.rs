use crate::constants::NO_DURATION_LABEL;
use crate::lenient::{parse_clock, parse_float_prefix};
use crate::models::FlightTime;

/// Formats a flight duration as `"{hours}h {minutes}m"`.
///
/// Decimal hours (numeric, or a string without `:`) are converted linearly to
/// minutes and rounded half up. Clock strings `"H:MM"` are read directly. This is
/// elapsed time, so the centesimal table does not apply here.
///
/// A missing, zero, NaN or empty duration yields `"Sin duración"`; text that
/// cannot be read yields `"0h 0m"`.
///
/// # Example
///
/// ```
/// use pilotlog::flight_time::format_flight_duration;
/// use pilotlog::models::FlightTime;
///
/// assert_eq!(format_flight_duration(Some(&FlightTime::from("1:30"))), "1h 30m");
/// assert_eq!(format_flight_duration(Some(&FlightTime::from(1.5))), "1h 30m");
/// assert_eq!(format_flight_duration(Some(&FlightTime::from(0.0))), "Sin duración");
/// ```
pub fn format_flight_duration(time: Option<&FlightTime>) -> String {
    let total_minutes = match time {
        None => return NO_DURATION_LABEL.to_string(),
        Some(FlightTime::Hours(hours)) if *hours == 0.0 || hours.is_nan() => {
            return NO_DURATION_LABEL.to_string()
        }
        Some(FlightTime::Text(text)) if text.is_empty() => return NO_DURATION_LABEL.to_string(),
        Some(FlightTime::Hours(hours)) => hours_to_minutes(*hours),
        Some(FlightTime::Text(text)) if text.contains(':') => {
            let (hours, minutes) = parse_clock(text);
            hours.saturating_mul(60).saturating_add(minutes)
        }
        Some(FlightTime::Text(text)) => hours_to_minutes(parse_float_prefix(text).unwrap_or(0.0)),
    };

    format!("{}h {}m", total_minutes / 60, total_minutes % 60)
}

// Half-way values round up, as `Math.round` does.
pub(super) fn hours_to_minutes(hours: f64) -> i64 {
    (hours * 60.0 + 0.5).floor() as i64
}
