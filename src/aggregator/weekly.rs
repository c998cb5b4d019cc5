use crate::constants::WEEK_LABEL_FORMAT;
use crate::lenient::parse_flight_date;
use crate::models::{ChartPoint, Dated};
use chrono::{Datelike, Days, Local, NaiveDate};
use tracing::{debug, warn};

/// Returns the Monday starting the week of `day`.
pub(crate) fn start_of_week(day: NaiveDate) -> Option<NaiveDate> {
    day.checked_sub_days(Days::new(u64::from(day.weekday().num_days_from_monday())))
}

/// Counts flights per Monday-start week, from the earliest flight up to this week.
///
/// Uses today's local date as the end of the series; see [`flights_by_week_until`].
pub fn flights_by_week<T: Dated>(flights: &[T]) -> Vec<ChartPoint> {
    flights_by_week_until(flights, Local::now().date_naive())
}

/// Counts flights per Monday-start week, from the earliest flight up to the week of `today`.
///
/// Every week in that span gets a bucket, including weeks without flights, so the
/// series can be charted without holes. Buckets are labelled with their Monday as
/// `dd/MM/yyyy` and come out in ascending order.
///
/// Flights with an unreadable date are skipped. Flights dated after the week of
/// `today` have no bucket and are not counted.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use pilotlog::aggregator::flights_by_week_until;
///
/// let today = NaiveDate::from_ymd_opt(2024, 5, 15).unwrap();
/// let series = flights_by_week_until(&["2024-05-01", "2024-05-02"], today);
///
/// let labels: Vec<_> = series.iter().map(|p| p.date.as_str()).collect();
/// assert_eq!(labels, ["29/04/2024", "06/05/2024", "13/05/2024"]);
/// assert_eq!(series[0].flights, 2);
/// ```
pub fn flights_by_week_until<T: Dated>(flights: &[T], today: NaiveDate) -> Vec<ChartPoint> {
    if flights.is_empty() {
        return Vec::new();
    }

    let weeks: Vec<NaiveDate> = flights
        .iter()
        .filter_map(|flight| {
            let week = parse_flight_date(flight.date()).and_then(start_of_week);
            if week.is_none() {
                debug!(date = flight.date(), "Skipping flight with unreadable date");
            }
            week
        })
        .collect();

    let (Some(first_week), Some(last_week)) = (weeks.iter().min().copied(), start_of_week(today))
    else {
        return Vec::new();
    };

    let mut series = Vec::new();
    let mut monday = Some(first_week);
    while let Some(current) = monday.filter(|m| *m <= last_week) {
        series.push(ChartPoint::new(current.format(WEEK_LABEL_FORMAT).to_string(), 0));
        monday = current.checked_add_days(Days::new(7));
    }

    let mut future = 0;
    for week in weeks {
        let index = (week - first_week).num_days() / 7;
        match usize::try_from(index).ok().and_then(|i| series.get_mut(i)) {
            Some(point) => point.flights += 1,
            None => future += 1,
        }
    }
    if future > 0 {
        warn!(flights = future, "Flights dated after the current week were not counted");
    }

    series
}
