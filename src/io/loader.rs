//! CSV loader for daily observation tables.
//!
//! Column 0 holds the date, columns 1..=K hold integer readings for
//! locations 1..=K. Rows are taken to be in chronological order.

use crate::core::ObservationTable;
use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Configuration for reading observation tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    /// Skip the first row as a header.
    pub has_header: bool,
    /// Field delimiter. Must be ASCII.
    pub delimiter: char,
    /// Log progress every this many rows (0 disables).
    pub progress_interval: usize,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            has_header: false,
            delimiter: ',',
            progress_interval: 365,
        }
    }
}

impl LoaderConfig {
    /// Treat the first row as a header.
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Set the field delimiter.
    pub fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if !self.delimiter.is_ascii() {
            return Err(ForecastError::Configuration(format!(
                "delimiter must be a single ASCII character, got '{}'",
                self.delimiter
            )));
        }
        Ok(())
    }
}

/// Load an observation table from a CSV file with default settings.
pub fn load_table(path: impl AsRef<Path>) -> Result<ObservationTable> {
    load_table_with(path, &LoaderConfig::default())
}

/// Load an observation table from a CSV file.
pub fn load_table_with(path: impl AsRef<Path>, config: &LoaderConfig) -> Result<ObservationTable> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| ForecastError::Io(format!("failed to open '{}': {}", path.display(), e)))?;
    info!(path = %path.display(), "loading observations");
    load_table_from_reader(file, config)
}

/// Load an observation table from any reader.
///
/// The first data row fixes the column count; every later row must match
/// it. Any malformed row aborts the load.
pub fn load_table_from_reader<R: Read>(reader: R, config: &LoaderConfig) -> Result<ObservationTable> {
    config.validate()?;

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(config.has_header)
        .delimiter(config.delimiter as u8)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut dates: Vec<String> = Vec::new();
    let mut columns: Vec<Vec<i64>> = Vec::new();
    let mut expected_fields: Option<usize> = None;

    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        let line = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(dates.len() + 1);

        let fields = *expected_fields.get_or_insert(record.len());
        if fields < 2 {
            return Err(ForecastError::Parse {
                line,
                location: None,
                message: "expected a date column followed by at least one reading".to_string(),
            });
        }
        if record.len() != fields {
            return Err(ForecastError::Parse {
                line,
                location: None,
                message: format!("expected {} columns, found {}", fields, record.len()),
            });
        }
        if columns.is_empty() {
            columns = vec![Vec::new(); fields - 1];
        }

        for (location, field) in record.iter().enumerate().skip(1) {
            let reading: i64 = field.parse().map_err(|_| ForecastError::Parse {
                line,
                location: Some(location),
                message: format!("invalid reading '{}'", field),
            })?;
            columns[location - 1].push(reading);
        }
        dates.push(record.get(0).unwrap_or_default().to_string());

        if config.progress_interval > 0 && dates.len() % config.progress_interval == 0 {
            debug!(rows = dates.len(), "loading observations");
        }
    }

    if dates.is_empty() {
        return Err(ForecastError::EmptyTable);
    }

    info!(
        rows = dates.len(),
        locations = columns.len(),
        "loaded observation table"
    );
    ObservationTable::from_readings(dates, &columns)
}

fn csv_error(err: csv::Error) -> ForecastError {
    let line = err.position().map(|p| p.line() as usize).unwrap_or(0);
    match err.kind() {
        csv::ErrorKind::Io(_) => ForecastError::Io(err.to_string()),
        _ => ForecastError::Parse {
            line,
            location: None,
            message: err.to_string(),
        },
    }
}
