//! Column-indexed observation table and per-location series.

use crate::error::{ForecastError, Result};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Daily readings for a single location, oldest first.
///
/// Index 0 is the earliest observation and consecutive entries are one day
/// apart. The values are shared, so cloning a series is cheap and never
/// copies the readings.
#[derive(Debug, Clone, PartialEq)]
pub struct LocationSeries {
    location: usize,
    values: Arc<[f64]>,
}

impl LocationSeries {
    /// Create a series for the given 1-based location index.
    pub fn new(location: usize, values: Vec<f64>) -> Self {
        Self {
            location,
            values: values.into(),
        }
    }

    /// Create a series from integer readings.
    pub fn from_readings(location: usize, readings: &[i64]) -> Self {
        Self::new(location, readings.iter().map(|&r| r as f64).collect())
    }

    /// 1-based location index (column in the input table).
    pub fn location(&self) -> usize {
        self.location
    }

    /// Readings, oldest first.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of days of history.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Immutable table of daily observations for every location.
///
/// Built once by the loader; all forecasting reads from it without
/// mutation.
#[derive(Debug, Clone, Default)]
pub struct ObservationTable {
    dates: Vec<String>,
    series: BTreeMap<usize, LocationSeries>,
}

impl ObservationTable {
    /// Build a table from the date column and one reading column per location.
    ///
    /// Location indices are assigned 1..=K in column order. Every column must
    /// have one reading per date.
    pub fn from_columns(dates: Vec<String>, columns: Vec<Vec<f64>>) -> Result<Self> {
        let series = columns
            .into_iter()
            .enumerate()
            .map(|(i, column)| LocationSeries::new(i + 1, column));
        Self::from_series(dates, series)
    }

    /// Build a table from integer reading columns, as parsed from the input.
    pub fn from_readings(dates: Vec<String>, columns: &[Vec<i64>]) -> Result<Self> {
        let series = columns
            .iter()
            .enumerate()
            .map(|(i, column)| LocationSeries::from_readings(i + 1, column));
        Self::from_series(dates, series)
    }

    fn from_series(
        dates: Vec<String>,
        columns: impl IntoIterator<Item = LocationSeries>,
    ) -> Result<Self> {
        let rows = dates.len();
        let mut series = BTreeMap::new();
        for column in columns {
            if column.len() != rows {
                return Err(ForecastError::DimensionMismatch {
                    expected: rows,
                    got: column.len(),
                });
            }
            series.insert(column.location(), column);
        }
        Ok(Self { dates, series })
    }

    /// Number of days (rows) in the table.
    pub fn num_rows(&self) -> usize {
        self.dates.len()
    }

    /// Number of locations (reading columns).
    pub fn num_locations(&self) -> usize {
        self.series.len()
    }

    /// Raw date strings from column 0, in row order.
    pub fn dates(&self) -> &[String] {
        &self.dates
    }

    /// Series for a 1-based location index.
    pub fn series(&self, location: usize) -> Option<&LocationSeries> {
        self.series.get(&location)
    }

    /// All series in ascending location order.
    pub fn locations(&self) -> impl Iterator<Item = &LocationSeries> {
        self.series.values()
    }

    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}
