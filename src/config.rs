use crate::aggregator::validate_period_format;
use crate::constants::{DEFAULT_CHART_WIDTH, MAX_CHART_WIDTH};
use crate::errors::{AppError, AppResult};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolved output settings with all values filled in (no Options).
///
/// This struct holds the report defaults and can be deserialized from the `[output]`
/// table of the TOML file. All fields have concrete values, making it safe to
/// access directly without unwrapping.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ResolvedConfig {
    /// Chart granularity: `"week"` or `"month"` (aliases `w`, `weekly`, `m`, `monthly`)
    pub period: String,
    /// Width in characters of the longest chart bar
    pub chart_width: usize,
    /// Print the chart series as JSON instead of text bars
    pub json: bool,
    /// Print one line per flight before the chart
    pub list_flights: bool,
    /// Log level: `"quiet"`, `"normal"` or `"verbose"`
    pub verbosity: String,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            period: "week".to_string(),
            chart_width: DEFAULT_CHART_WIDTH,
            json: false,
            list_flights: false,
            verbosity: "normal".to_string(),
        }
    }
}

/// Report definition that can be loaded from a TOML file.
///
/// ```toml
/// logbook = "exports/flights.json"
/// start = "2024"
/// end = "202406"
///
/// [output]
/// period = "month"
/// chart_width = 30
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ResolvedConfigFile {
    /// Path to the logbook JSON export
    pub logbook: PathBuf,
    /// Start period in `YYYY` or `YYYYMM` format
    pub start: Option<String>,
    /// End period in `YYYY` or `YYYYMM` format
    pub end: Option<String>,
    /// Output settings, defaults when the table is absent
    #[serde(default)]
    pub output: ResolvedConfig,
}

impl ResolvedConfigFile {
    /// Loads and validates a report definition from a TOML file.
    ///
    /// Rejects unknown keys to prevent typos from being silently ignored, and checks
    /// the period bounds and chart width before any logbook is read.
    ///
    /// # Errors
    ///
    /// Returns `IoError` if the file cannot be read, `ConfigError` if the TOML is
    /// malformed, has unknown keys or lacks `logbook`, and `InvalidInput` /
    /// `PeriodValidationError` for a bad period or a zero chart width.
    pub fn from_toml_file(path: &Path) -> AppResult<Self> {
        let contents = fs::read_to_string(path)?;
        let config: ResolvedConfigFile = toml::from_str(&contents)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config: {e}")))?;

        if !(1..=MAX_CHART_WIDTH).contains(&config.output.chart_width) {
            return Err(AppError::InvalidInput(format!(
                "Chart width must be between 1 and {MAX_CHART_WIDTH}"
            )));
        }
        for period in [&config.start, &config.end].into_iter().flatten() {
            validate_period_format(period)?;
        }

        Ok(config)
    }
}
