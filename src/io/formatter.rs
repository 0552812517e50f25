//! CSV output of per-location forecasts.
//!
//! One row per day of the cycle: the synthetic `MM-DD` date, then the
//! forecast for each location in ascending location order.

use crate::core::{DayOfYear, ForecastSeries};
use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::Write;

/// Output formatting options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Decimal places for forecast values.
    pub precision: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { precision: 2 }
    }
}

/// Render forecasts as CSV text with default formatting.
pub fn format_table(forecasts: &BTreeMap<usize, ForecastSeries>) -> Result<String> {
    let mut buf = Vec::new();
    write_table(&mut buf, forecasts, &OutputConfig::default())?;
    String::from_utf8(buf).map_err(|e| ForecastError::Io(e.to_string()))
}

/// Write forecasts as CSV to `writer`.
pub fn write_table<W: Write>(
    writer: W,
    forecasts: &BTreeMap<usize, ForecastSeries>,
    config: &OutputConfig,
) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);

    let mut row: Vec<String> = Vec::with_capacity(forecasts.len() + 1);
    for day in DayOfYear::all() {
        row.clear();
        row.push(day.month_day()?);
        for forecast in forecasts.values() {
            row.push(format!("{:.*}", config.precision, forecast.get(day)));
        }
        wtr.write_record(&row)
            .map_err(|e| ForecastError::Io(e.to_string()))?;
    }
    wtr.flush()?;
    Ok(())
}
