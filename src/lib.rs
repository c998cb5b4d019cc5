//! pilotlog library
//!
//! This crate provides the flight-time rules of the PilotLog logbook and the core
//! functionality of the `pilotlog` binary.
//!
//! ## Overview
//!
//! - [`flight_time`] - Centesimal hour conversion and duration / block-time formatting
//! - [`aggregator`] - Weekly and monthly flight-count series and period filtering
//! - [`logbook`] - Loading logbook JSON exports and summarizing them
//! - [`cli`] - Command-line interface for printing reports
//! - [`models`] - Flight records, durations and chart points
//! - [`errors`] - Error types used at the I/O boundary
//!
//! ## Example Usage
//!
//! ```
//! use pilotlog::aggregator::flights_by_month;
//! use pilotlog::flight_time::{format_hour_range, total_flight_hours_centesimal};
//! use pilotlog::models::FlightRecord;
//!
//! let flights = vec![
//!     FlightRecord::new("2024-01-10", "09:00", "10:27").with_total("1:27"),
//!     FlightRecord::new("2024-03-02", "14:00", "14:30").with_total("0:30"),
//! ];
//!
//! assert_eq!(total_flight_hours_centesimal(&flights), 2.0);
//! assert_eq!(format_hour_range(&flights[0].date, "09:00", "10:27"), "09:00 a 10:27");
//! assert_eq!(flights_by_month(&flights).len(), 2);
//! ```

pub mod aggregator;
pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod flight_time;
pub mod lenient;
pub mod logbook;
pub mod logging;
pub mod models;
pub mod ui;
pub mod utils;
