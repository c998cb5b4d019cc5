use crate::errors::{AppError, AppResult};
use crate::flight_time::total_flight_hours_centesimal;
use crate::lenient::parse_flight_date;
use crate::models::{FlightRecord, FlightTime};
use chrono::NaiveDate;
use std::borrow::Borrow;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Loads flight records from a logbook JSON export.
///
/// The file must hold a JSON array of flight objects as returned by the PilotLog
/// backend (`date`, `departureTime`, `arrivalTime`, optional `totalFlightTime`).
/// Unknown fields are ignored and missing ones default to empty.
///
/// # Errors
///
/// Returns `IoError` if the file cannot be read and `ParseError` if it is not a
/// JSON array of flight objects.
pub fn load_flights(path: &Path) -> AppResult<Vec<FlightRecord>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        AppError::IoError(format!("Failed to read logbook {}: {}", path.display(), e))
    })?;
    let flights: Vec<FlightRecord> = serde_json::from_str(&contents).map_err(|e| {
        AppError::ParseError(format!("Invalid logbook {}: {}", path.display(), e))
    })?;

    let undated = flights
        .iter()
        .filter(|f| parse_flight_date(&f.date).is_none())
        .count();
    if undated > 0 {
        warn!(
            logbook = %path.display(),
            flights = undated,
            "Flights with unreadable dates will be left out of charts"
        );
    }

    info!(
        logbook = %path.display(),
        flights = flights.len(),
        "Logbook loaded"
    );
    Ok(flights)
}

/// Headline figures for a set of flights.
#[derive(Debug, Clone, PartialEq)]
pub struct LogbookSummary {
    pub flights: usize,
    /// Total logged time in centesimal hours
    pub total_hours: f64,
    pub first_flight: Option<NaiveDate>,
    pub last_flight: Option<NaiveDate>,
}

impl LogbookSummary {
    pub fn from_flights<T: Borrow<FlightRecord>>(flights: &[T]) -> Self {
        let records: Vec<&FlightRecord> = flights
            .iter()
            .map(<T as Borrow<FlightRecord>>::borrow)
            .collect();
        let dates: Vec<NaiveDate> = records
            .iter()
            .filter_map(|f| parse_flight_date(&f.date))
            .collect();

        Self {
            flights: records.len(),
            total_hours: total_flight_hours_centesimal(&records),
            first_flight: dates.iter().min().copied(),
            last_flight: dates.iter().max().copied(),
        }
    }
}
