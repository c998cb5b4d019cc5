//! Property tests for the flight-time rules

use chrono::{Datelike, Duration, NaiveDate};
use pilotlog::aggregator::{flights_by_month, flights_by_week_until, period_compare};
use pilotlog::flight_time::{
    format_flight_duration, minutes_to_centesimal, time_string_to_centesimal,
};
use pilotlog::models::FlightTime;
use proptest::prelude::*;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 30).unwrap()
}

/// Flight dates within the two years before `today()`
fn arb_flight_date() -> impl Strategy<Value = String> {
    (0..730i64).prop_map(|days_back| {
        (today() - Duration::days(days_back))
            .format("%Y-%m-%d")
            .to_string()
    })
}

fn arb_clock() -> impl Strategy<Value = String> {
    (0..30u32, 0..60u32).prop_map(|(h, m)| format!("{h}:{m:02}"))
}

proptest! {
    #[test]
    fn centesimal_fraction_stays_within_an_hour(minutes in any::<i64>()) {
        let value = minutes_to_centesimal(minutes);
        prop_assert!((0.0..=1.0).contains(&value));
    }

    #[test]
    fn clock_hours_are_kept_whole(time in arb_clock()) {
        let hours: f64 = time.split(':').next().unwrap().parse().unwrap();
        let value = time_string_to_centesimal(&time);
        prop_assert!(value >= hours && value <= hours + 1.0);
    }

    #[test]
    fn clock_parsing_never_panics(time in ".*") {
        let _ = time_string_to_centesimal(&time);
        let _ = format_flight_duration(Some(&FlightTime::Text(time)));
    }

    #[test]
    fn clock_duration_round_trips_minutes(h in 0..100u32, m in 0..60u32) {
        let text = format!("{h}:{m:02}");
        prop_assert_eq!(
            format_flight_duration(Some(&FlightTime::Text(text))),
            format!("{h}h {m}m")
        );
    }

    #[test]
    fn weekly_series_is_contiguous_and_complete(dates in prop::collection::vec(arb_flight_date(), 1..40)) {
        let series = flights_by_week_until(&dates, today());

        let total: usize = series.iter().map(|p| p.flights).sum();
        prop_assert_eq!(total, dates.len());

        let mondays: Vec<NaiveDate> = series
            .iter()
            .map(|p| NaiveDate::parse_from_str(&p.date, "%d/%m/%Y").unwrap())
            .collect();
        for monday in &mondays {
            prop_assert_eq!(monday.weekday(), chrono::Weekday::Mon);
        }
        for pair in mondays.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(7));
        }
        prop_assert!(*mondays.last().unwrap() <= today());
    }

    #[test]
    fn monthly_series_is_sorted_and_complete(dates in prop::collection::vec(arb_flight_date(), 1..40)) {
        let series = flights_by_month(&dates);

        let total: usize = series.iter().map(|p| p.flights).sum();
        prop_assert_eq!(total, dates.len());
        prop_assert!(series.iter().all(|p| p.flights > 0));

        for pair in series.windows(2) {
            let key = |label: &str| {
                let (month, year) = label.split_once('/').unwrap();
                format!("{year}{month}")
            };
            prop_assert_eq!(
                period_compare(&key(&pair[0].date), &key(&pair[1].date)),
                Some(std::cmp::Ordering::Less)
            );
        }
    }

    #[test]
    fn aggregations_are_idempotent(dates in prop::collection::vec(arb_flight_date(), 0..20)) {
        prop_assert_eq!(flights_by_week_until(&dates, today()), flights_by_week_until(&dates, today()));
        prop_assert_eq!(flights_by_month(&dates), flights_by_month(&dates));
    }
}
