//! Flight-time conversion and formatting.
//!
//! Converts logged clock durations into centesimal hours and renders durations
//! and block-time ranges for display. The main entry points are
//! [`time_string_to_centesimal`], [`format_flight_duration`] and [`format_hour_range`].

mod centesimal;
mod duration;
mod hour_range;

// Re-export public API
pub use centesimal::{
    flight_time_to_centesimal, minutes_to_centesimal, time_string_to_centesimal,
    total_flight_hours_centesimal,
};
pub use duration::format_flight_duration;
pub use hour_range::format_hour_range;
