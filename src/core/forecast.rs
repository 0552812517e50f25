//! Forecast result structure for holding one cycle of predictions.

use crate::core::calendar::{DayOfYear, DAYS_PER_YEAR};
use crate::error::{ForecastError, Result};

/// Predicted values for one location, one per day of the next cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct ForecastSeries {
    /// values[d - 1] is the prediction for day-of-year d
    values: Vec<f64>,
}

impl ForecastSeries {
    /// Wrap a full cycle of predictions. Exactly 365 values are required.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        if values.len() != DAYS_PER_YEAR {
            return Err(ForecastError::DimensionMismatch {
                expected: DAYS_PER_YEAR,
                got: values.len(),
            });
        }
        Ok(Self { values })
    }

    /// Prediction for a single day of the cycle.
    pub fn get(&self, day: DayOfYear) -> f64 {
        self.values[day.get() - 1]
    }

    /// All predictions in day-of-year order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over `(day, prediction)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (DayOfYear, f64)> + '_ {
        DayOfYear::all().zip(self.values.iter().copied())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
