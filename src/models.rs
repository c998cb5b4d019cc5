use crate::constants::{MONTH_ALIASES, WEEK_ALIASES};
use serde::{Deserialize, Deserializer, Serialize};

/// A logged flight as exported by the PilotLog backend.
///
/// Only the fields the flight-time functions read are kept; anything else in the
/// backend JSON (ids, aircraft, remarks) is ignored on load.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FlightRecord {
    /// Calendar date of the flight, usually `YYYY-MM-DD`
    #[serde(deserialize_with = "null_as_empty")]
    pub date: String,
    /// Off-block time, `"H:MM"`
    #[serde(deserialize_with = "null_as_empty")]
    pub departure_time: String,
    /// On-block time, `"H:MM"`
    #[serde(deserialize_with = "null_as_empty")]
    pub arrival_time: String,
    /// Logged duration, clock text `"H:MM"` or decimal hours
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_flight_time: Option<FlightTime>,
}

// Older exports write `null` for fields the pilot never filled in.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl FlightRecord {
    pub fn new(date: &str, departure_time: &str, arrival_time: &str) -> Self {
        Self {
            date: date.to_string(),
            departure_time: departure_time.to_string(),
            arrival_time: arrival_time.to_string(),
            total_flight_time: None,
        }
    }

    pub fn with_total(mut self, total_flight_time: impl Into<FlightTime>) -> Self {
        self.total_flight_time = Some(total_flight_time.into());
        self
    }
}

/// Anything carrying a flight date. The aggregators only need this much.
pub trait Dated {
    fn date(&self) -> &str;
}

/// Anything carrying a logged total flight time.
pub trait Timed {
    fn total_flight_time(&self) -> Option<&FlightTime>;
}

impl Dated for FlightRecord {
    fn date(&self) -> &str {
        &self.date
    }
}

impl Timed for FlightRecord {
    fn total_flight_time(&self) -> Option<&FlightTime> {
        self.total_flight_time.as_ref()
    }
}

impl Dated for &str {
    fn date(&self) -> &str {
        self
    }
}

impl Dated for String {
    fn date(&self) -> &str {
        self
    }
}

impl<T: Dated> Dated for &T {
    fn date(&self) -> &str {
        (**self).date()
    }
}

impl<T: Timed> Timed for &T {
    fn total_flight_time(&self) -> Option<&FlightTime> {
        (**self).total_flight_time()
    }
}

/// A flight duration as it reaches the formatter: decimal hours or a string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FlightTime {
    /// Decimal hours, e.g. `1.5`
    Hours(f64),
    /// Clock form `"1:30"` or a decimal-hours string `"1.5"`
    Text(String),
}

impl From<f64> for FlightTime {
    fn from(value: f64) -> Self {
        Self::Hours(value)
    }
}

impl From<&str> for FlightTime {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for FlightTime {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One bucket of a chart series: a formatted period label and its flight count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub date: String,
    pub flights: usize,
}

impl ChartPoint {
    pub fn new(date: impl Into<String>, flights: usize) -> Self {
        Self {
            date: date.into(),
            flights,
        }
    }
}

/// Granularity of a flight-count series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartPeriod {
    #[default]
    Week,
    Month,
}

impl ChartPeriod {
    /// Returns a human-readable name for the period.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Week => "Weekly",
            Self::Month => "Monthly",
        }
    }
}

impl From<&str> for ChartPeriod {
    fn from(value: &str) -> Self {
        let lower = value.trim().to_lowercase();

        if MONTH_ALIASES.contains(&lower.as_str()) {
            Self::Month
        } else if WEEK_ALIASES.contains(&lower.as_str()) {
            Self::Week
        } else {
            // Default silently to Week; callers can decide to log if needed.
            Self::Week
        }
    }
}
