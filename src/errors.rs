use thiserror::Error;

/// Errors raised at the I/O boundary of the crate.
///
/// The flight-time and aggregation functions never produce these: malformed
/// logbook values degrade to zero or a fallback label instead.
#[derive(Debug, Error)]
pub enum AppError {
    /// Failed to parse a logbook or configuration file
    #[error("Parse error: {0}")]
    ParseError(String),
    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    ConfigError(String),
    /// Period validation failed
    #[error("Period '{period}' is not valid: {reason}")]
    PeriodValidationError { period: String, reason: String },
    /// Invalid input format
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// IO operation failed
    #[error("IO error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::ParseError(err.to_string())
    }
}

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

// Custom type alias for Results in this application
pub type AppResult<T> = Result<T, AppError>;
