use super::period_filter::period_compare;
use crate::constants::MONTH_LABEL_FORMAT;
use crate::lenient::parse_flight_date;
use crate::models::{ChartPoint, Dated};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use tracing::debug;

/// Rebuilds the sortable `yyyyMM` period from an `MM/yyyy` label.
fn month_key(label: &str) -> String {
    match label.split_once('/') {
        Some((month, year)) => format!("{year}{month}"),
        None => label.to_string(),
    }
}

/// Counts flights per calendar month.
///
/// Only months with at least one flight get a bucket; unlike
/// [`flights_by_week`](super::flights_by_week) there is no gap filling. Buckets are
/// labelled `MM/yyyy` and sorted chronologically by their `yyyyMM` period.
/// Flights with an unreadable date are skipped.
///
/// # Example
///
/// ```
/// use pilotlog::aggregator::flights_by_month;
///
/// let series = flights_by_month(&["2024-03-02", "2024-01-10", "2024-01-20"]);
///
/// assert_eq!(series.len(), 2);
/// assert_eq!((series[0].date.as_str(), series[0].flights), ("01/2024", 2));
/// assert_eq!((series[1].date.as_str(), series[1].flights), ("03/2024", 1));
/// ```
pub fn flights_by_month<T: Dated>(flights: &[T]) -> Vec<ChartPoint> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for flight in flights {
        match parse_flight_date(flight.date()) {
            Some(day) => {
                *counts
                    .entry(day.format(MONTH_LABEL_FORMAT).to_string())
                    .or_default() += 1
            }
            None => debug!(date = flight.date(), "Skipping flight with unreadable date"),
        }
    }

    let mut series: Vec<ChartPoint> = counts
        .into_iter()
        .map(|(label, count)| ChartPoint::new(label, count))
        .collect();

    series.sort_by(|a, b| {
        period_compare(&month_key(&a.date), &month_key(&b.date)).unwrap_or(Ordering::Equal)
    });
    series
}
