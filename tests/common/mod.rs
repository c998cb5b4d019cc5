//! Common test utilities for integration tests

use std::fs;
use std::path::{Path, PathBuf};

/// Writes `content` to `dir/name` and returns the path
#[allow(dead_code)]
pub fn write_file(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Logbook export with the quirks seen in real backend data
#[allow(dead_code)]
pub const SAMPLE_LOGBOOK: &str = r#"[
  { "id": 1, "date": "2024-01-08", "departureTime": "09:00", "arrivalTime": "10:27", "totalFlightTime": "1:27" },
  { "id": 2, "date": "2024-01-10", "departureTime": "14:00", "arrivalTime": "14:57", "totalFlightTime": "0:57" },
  { "id": 3, "date": "2024-01-24", "departureTime": "8:05",  "arrivalTime": "9:45",  "totalFlightTime": "1:40" },
  { "id": 4, "date": "2024-03-04", "departureTime": "16:30", "arrivalTime": "17:00" },
  { "id": 5, "date": "04/03/2024", "departureTime": "18:00", "arrivalTime": "18:58", "totalFlightTime": "0:58" },
  { "id": 6, "date": "", "departureTime": "", "arrivalTime": "", "totalFlightTime": "abc:def" }
]"#;

/// Empty logbook export
#[allow(dead_code)]
pub const EMPTY_LOGBOOK: &str = "[]";
