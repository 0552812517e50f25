//! Error types for the weather-forecast library.

use thiserror::Error;

/// Result type alias for forecast operations.
pub type Result<T> = std::result::Result<T, ForecastError>;

/// Errors that can occur while loading, forecasting or formatting.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Malformed CSV row. Aborts the whole run.
    #[error("parse error at line {line}{}: {message}", location_suffix(.location))]
    Parse {
        line: usize,
        location: Option<usize>,
        message: String,
    },

    /// Series too short for the requested operation.
    #[error("insufficient data{}: need at least {needed}, got {got}", location_suffix(.location))]
    InsufficientData {
        location: Option<usize>,
        needed: usize,
        got: usize,
    },

    /// Invalid estimator or loader parameter.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Dimension mismatch between data structures.
    #[error("dimension mismatch: expected {expected}, got {got}")]
    DimensionMismatch { expected: usize, got: usize },

    /// Model has not been fitted yet.
    #[error("model must be fitted before prediction")]
    FitRequired,

    /// Input table has no data rows.
    #[error("empty input table")]
    EmptyTable,

    /// Underlying I/O failure.
    #[error("i/o error: {0}")]
    Io(String),
}

fn location_suffix(location: &Option<usize>) -> String {
    location
        .map(|l| format!(" (location {})", l))
        .unwrap_or_default()
}

impl ForecastError {
    /// Attach a location index to errors raised by location-agnostic code.
    ///
    /// Only `InsufficientData` and `Parse` carry a location; other variants
    /// are returned unchanged. An existing location is never overwritten.
    pub fn with_location(self, index: usize) -> Self {
        match self {
            ForecastError::InsufficientData {
                location: None,
                needed,
                got,
            } => ForecastError::InsufficientData {
                location: Some(index),
                needed,
                got,
            },
            ForecastError::Parse {
                line,
                location: None,
                message,
            } => ForecastError::Parse {
                line,
                location: Some(index),
                message,
            },
            other => other,
        }
    }

    /// Whether this error invalidates the whole run rather than one location.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            ForecastError::InsufficientData { .. } | ForecastError::DimensionMismatch { .. }
        )
    }
}

impl From<std::io::Error> for ForecastError {
    fn from(err: std::io::Error) -> Self {
        ForecastError::Io(err.to_string())
    }
}
