use super::duration::hours_to_minutes;
use crate::lenient::parse_clock;
use crate::models::{FlightTime, Timed};

/// Minute ranges of the centesimal table, checked in order.
///
/// Minute 57 appears in two rows; the first one wins, so 57 maps to 0.9.
const CENTESIMAL_TABLE: &[(i64, i64, f64)] = &[
    (1, 2, 0.0),
    (3, 8, 0.1),
    (9, 14, 0.2),
    (15, 20, 0.3),
    (21, 26, 0.4),
    (27, 33, 0.5),
    (34, 39, 0.6),
    (40, 45, 0.7),
    (46, 51, 0.8),
    (52, 57, 0.9),
    (57, 60, 1.0),
];

/// Converts the minutes of a clock duration into the centesimal fraction of an hour.
///
/// The mapping is the quantized logbook table, not `minutes / 60`: 3 to 8 minutes
/// count as 0.1, 27 to 33 as 0.5, 58 to 60 as a full hour and so on. Zero and any
/// value outside 1..=60 give 0.0.
///
/// # Example
///
/// ```
/// use pilotlog::flight_time::minutes_to_centesimal;
///
/// assert_eq!(minutes_to_centesimal(27), 0.5);
/// assert_eq!(minutes_to_centesimal(60), 1.0);
/// assert_eq!(minutes_to_centesimal(61), 0.0);
/// ```
pub fn minutes_to_centesimal(minutes: i64) -> f64 {
    CENTESIMAL_TABLE
        .iter()
        .find(|(from, to, _)| (*from..=*to).contains(&minutes))
        .map(|(_, _, value)| *value)
        .unwrap_or(0.0)
}

/// Converts a clock duration `"H:MM"` into centesimal hours.
///
/// Hours are taken as-is and the minutes go through [`minutes_to_centesimal`].
/// Missing or unreadable parts count as zero, so `""` and `"abc:def"` are 0.0.
pub fn time_string_to_centesimal(time: &str) -> f64 {
    if time.is_empty() {
        return 0.0;
    }
    let (hours, minutes) = parse_clock(time);
    hours as f64 + minutes_to_centesimal(minutes)
}

/// Converts a logged duration into centesimal hours.
///
/// Clock text goes through [`time_string_to_centesimal`]. Decimal hours are
/// rounded to whole minutes first, the same way the duration formatter does, and
/// the leftover minutes are looked up in the table. NaN counts as zero.
pub fn flight_time_to_centesimal(time: &FlightTime) -> f64 {
    match time {
        FlightTime::Text(text) => time_string_to_centesimal(text),
        FlightTime::Hours(hours) if hours.is_nan() => 0.0,
        FlightTime::Hours(hours) => {
            let minutes = hours_to_minutes(*hours);
            (minutes / 60) as f64 + minutes_to_centesimal(minutes % 60)
        }
    }
}

/// Sums the logged flight time of `flights` in centesimal hours.
///
/// Flights without a `total_flight_time` (or with an empty one) add nothing.
pub fn total_flight_hours_centesimal<T: Timed>(flights: &[T]) -> f64 {
    flights
        .iter()
        .filter_map(Timed::total_flight_time)
        .map(flight_time_to_centesimal)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FlightRecord;

    #[test]
    fn table_boundaries() {
        assert_eq!(minutes_to_centesimal(0), 0.0);
        assert_eq!(minutes_to_centesimal(1), 0.0);
        assert_eq!(minutes_to_centesimal(2), 0.0);
        assert_eq!(minutes_to_centesimal(3), 0.1);
        assert_eq!(minutes_to_centesimal(8), 0.1);
        assert_eq!(minutes_to_centesimal(9), 0.2);
        assert_eq!(minutes_to_centesimal(20), 0.3);
        assert_eq!(minutes_to_centesimal(21), 0.4);
        assert_eq!(minutes_to_centesimal(33), 0.5);
        assert_eq!(minutes_to_centesimal(34), 0.6);
        assert_eq!(minutes_to_centesimal(45), 0.7);
        assert_eq!(minutes_to_centesimal(46), 0.8);
        assert_eq!(minutes_to_centesimal(52), 0.9);
        assert_eq!(minutes_to_centesimal(58), 1.0);
        assert_eq!(minutes_to_centesimal(60), 1.0);
    }

    #[test]
    fn minute_57_takes_first_matching_row() {
        assert_eq!(minutes_to_centesimal(57), 0.9);
    }

    #[test]
    fn out_of_range_minutes_are_zero() {
        assert_eq!(minutes_to_centesimal(61), 0.0);
        assert_eq!(minutes_to_centesimal(-5), 0.0);
        assert_eq!(minutes_to_centesimal(i64::MAX), 0.0);
    }

    #[test]
    fn clock_strings() {
        assert_eq!(time_string_to_centesimal("1:27"), 1.5);
        assert_eq!(time_string_to_centesimal("2:57"), 2.9);
        assert_eq!(time_string_to_centesimal("12:00"), 12.0);
        assert_eq!(time_string_to_centesimal("3"), 3.0);
        assert_eq!(time_string_to_centesimal("0:05"), 0.1);
    }

    #[test]
    fn malformed_clock_strings_are_zero() {
        assert_eq!(time_string_to_centesimal(""), 0.0);
        assert_eq!(time_string_to_centesimal("abc:def"), 0.0);
        assert_eq!(time_string_to_centesimal(":"), 0.0);
    }

    #[test]
    fn total_skips_flights_without_time() {
        let flights = vec![
            FlightRecord::new("2024-01-01", "08:00", "09:00").with_total("1:00"),
            FlightRecord::new("2024-01-02", "08:00", "08:30").with_total("0:30"),
            FlightRecord::new("2024-01-03", "08:00", "08:30"),
            FlightRecord::new("2024-01-04", "08:00", "08:30").with_total(""),
        ];
        assert_eq!(total_flight_hours_centesimal(&flights), 1.5);
    }

    #[test]
    fn decimal_hours_use_the_table_for_leftover_minutes() {
        assert_eq!(flight_time_to_centesimal(&FlightTime::Hours(1.5)), 1.5);
        assert_eq!(flight_time_to_centesimal(&FlightTime::Hours(2.0)), 2.0);
        // 0.95 h = 57 min
        assert_eq!(flight_time_to_centesimal(&FlightTime::Hours(0.95)), 0.9);
        assert_eq!(flight_time_to_centesimal(&FlightTime::Hours(f64::NAN)), 0.0);
    }

    #[test]
    fn total_mixes_clock_text_and_decimal_hours() {
        let flights = vec![
            FlightRecord::new("2024-01-01", "08:00", "09:27").with_total("1:27"),
            FlightRecord::new("2024-01-02", "08:00", "09:30").with_total(1.5),
        ];
        assert_eq!(total_flight_hours_centesimal(&flights), 3.0);
    }

    #[test]
    fn total_of_nothing_is_zero() {
        let flights: Vec<FlightRecord> = Vec::new();
        assert_eq!(total_flight_hours_centesimal(&flights), 0.0);
    }
}
