//! Flight-count series for charts.
//!
//! This module buckets flights by calendar week or month and restricts flights to a
//! period range. The main entry points are [`flights_by_week`], [`flights_by_month`]
//! and [`filter_flights_by_period`].

mod monthly;
mod period_filter;
mod weekly;

use crate::models::{ChartPeriod, ChartPoint, Dated};
use chrono::NaiveDate;

// Re-export public API
pub use monthly::flights_by_month;
pub use period_filter::{filter_flights_by_period, period_compare, validate_period_format};
pub use weekly::{flights_by_week, flights_by_week_until};

/// Builds the series for `period`, ending the weekly series at `today`.
pub fn flights_by_period<T: Dated>(
    flights: &[T],
    period: ChartPeriod,
    today: NaiveDate,
) -> Vec<ChartPoint> {
    match period {
        ChartPeriod::Week => flights_by_week_until(flights, today),
        ChartPeriod::Month => flights_by_month(flights),
    }
}
