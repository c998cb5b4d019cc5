use crate::constants::MAX_CHART_WIDTH;
use crate::flight_time::{format_flight_duration, format_hour_range};
use crate::models::{ChartPoint, FlightRecord};

/// Renders a flight-count series as a horizontal text bar chart.
///
/// Each bucket gets one line: its label, a bar of `#` scaled so the busiest bucket
/// spans `width` characters (at most [`MAX_CHART_WIDTH`]), and the count. Buckets
/// with flights always show at least one `#`.
///
/// # Example
///
/// ```
/// use pilotlog::models::ChartPoint;
/// use pilotlog::ui;
///
/// let chart = ui::render_series(&[ChartPoint::new("01/2024", 2), ChartPoint::new("02/2024", 1)], 4);
/// assert_eq!(chart, "01/2024 | #### 2\n02/2024 | ## 1\n");
/// ```
pub fn render_series(series: &[ChartPoint], width: usize) -> String {
    let width = width.min(MAX_CHART_WIDTH);
    let max = series.iter().map(|p| p.flights).max().unwrap_or(0);
    let label_width = series.iter().map(|p| p.date.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for point in series {
        let bar_len = if max == 0 || point.flights == 0 {
            0
        } else {
            point.flights.saturating_mul(width).div_ceil(max).max(1)
        };
        let bar = "#".repeat(bar_len);
        let line = if bar.is_empty() {
            format!("{:<label_width$} | {}\n", point.date, point.flights)
        } else {
            format!("{:<label_width$} | {} {}\n", point.date, bar, point.flights)
        };
        out.push_str(&line);
    }
    out
}

/// Renders one line per flight: date, block times and logged duration.
pub fn render_flight_table(flights: &[&FlightRecord]) -> String {
    let mut out = String::new();
    for flight in flights {
        out.push_str(&format!(
            "{:<10}  {}  {}\n",
            flight.date,
            format_hour_range(&flight.date, &flight.departure_time, &flight.arrival_time),
            format_flight_duration(flight.total_flight_time.as_ref())
        ));
    }
    out
}
