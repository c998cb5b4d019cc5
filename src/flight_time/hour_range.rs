use crate::constants::{CLOCK_FORMAT, HOUR_RANGE_SEPARATOR, UNKNOWN_CLOCK_LABEL};
use crate::lenient::{parse_clock, parse_flight_date};
use chrono::{Duration, NaiveDate, NaiveDateTime};
use tracing::debug;

/// Formats the block times of a flight as `"HH:mm a HH:mm"`.
///
/// `date` may be `YYYY-MM-DD`, `DD/MM/YYYY` or any layout accepted by
/// [`parse_flight_date`](crate::lenient::parse_flight_date). Both times are
/// `"H:MM"` wall-clock values placed on that day; out-of-range minutes roll
/// over the way a clock does (`"08:75"` renders as `09:15`). An arrival before
/// the departure is not moved to the next day.
///
/// An unreadable date does not change the rendered times of day, so it is only
/// logged.
///
/// # Example
///
/// ```
/// use pilotlog::flight_time::format_hour_range;
///
/// assert_eq!(format_hour_range("2024-05-01", "08:05", "09:45"), "08:05 a 09:45");
/// assert_eq!(format_hour_range("01/05/2024", "8:05", "9:45"), "08:05 a 09:45");
/// ```
pub fn format_hour_range(date: &str, departure: &str, arrival: &str) -> String {
    let day = parse_flight_date(date).unwrap_or_else(|| {
        debug!(date = date, "Unreadable flight date, rendering block times only");
        NaiveDate::default()
    });

    format!(
        "{}{}{}",
        render_clock(wall_clock(day, departure)),
        HOUR_RANGE_SEPARATOR,
        render_clock(wall_clock(day, arrival))
    )
}

fn wall_clock(day: NaiveDate, time: &str) -> Option<NaiveDateTime> {
    let (hours, minutes) = parse_clock(time);
    let offset = Duration::try_minutes(hours.saturating_mul(60).saturating_add(minutes))?;
    day.and_hms_opt(0, 0, 0)?.checked_add_signed(offset)
}

fn render_clock(moment: Option<NaiveDateTime>) -> String {
    moment
        .map(|m| m.format(CLOCK_FORMAT).to_string())
        .unwrap_or_else(|| UNKNOWN_CLOCK_LABEL.to_string())
}
