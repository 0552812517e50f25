//! Least-squares linear trend over a location's full history.
//!
//! The line is fit with the day index as `x` (0, 1, 2, ...) and the
//! readings as `y`.

use crate::error::{ForecastError, Result};
use tracing::trace;

/// Fitted trend line `y = slope * x + intercept`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegressionLine {
    /// Change per day
    pub slope: f64,
    /// Fitted value at day index 0
    pub intercept: f64,
    /// R-squared (coefficient of determination)
    pub r_squared: f64,
    len: usize,
}

impl RegressionLine {
    /// Fit a line to `series` by ordinary least squares.
    ///
    /// Fails with `InsufficientData` for fewer than two points.
    pub fn fit(series: &[f64]) -> Result<Self> {
        let len = series.len();
        if len < 2 {
            return Err(ForecastError::InsufficientData {
                location: None,
                needed: 2,
                got: len,
            });
        }

        let n = len as f64;
        let mean_x = (n - 1.0) / 2.0;
        let mean_y = series.iter().sum::<f64>() / n;

        let mut ss_xx = 0.0;
        let mut ss_xy = 0.0;
        let mut ss_yy = 0.0;
        for (i, &y) in series.iter().enumerate() {
            let dx = i as f64 - mean_x;
            let dy = y - mean_y;
            ss_xx += dx * dx;
            ss_xy += dx * dy;
            ss_yy += dy * dy;
        }

        let slope = ss_xy / ss_xx;
        let intercept = mean_y - slope * mean_x;

        let ss_res: f64 = series
            .iter()
            .enumerate()
            .map(|(i, &y)| (y - (slope * i as f64 + intercept)).powi(2))
            .sum();

        let r_squared = if ss_yy.abs() < 1e-10 {
            1.0 // Perfect fit for constant y
        } else {
            1.0 - ss_res / ss_yy
        };

        trace!(len, slope, intercept, r_squared, "fitted regression line");

        Ok(Self {
            slope,
            intercept,
            r_squared,
            len,
        })
    }

    /// Fitted value at day index `x`. Valid past the fitted range too.
    pub fn value_at(&self, x: usize) -> f64 {
        self.slope * x as f64 + self.intercept
    }

    /// Fitted values for x = 0..len, computed lazily.
    pub fn values(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.len).map(move |x| self.value_at(x))
    }

    /// Length of the series the line was fit to.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// Fit a least-squares line and return `(slope, intercept)`.
///
/// # Example
/// ```
/// use weather_forecast::models::linear_trend;
///
/// let ramp: Vec<f64> = (0..100).map(|i| 10.0 + 2.0 * i as f64).collect();
/// let (m, c) = linear_trend(&ramp).unwrap();
/// assert!((m - 2.0).abs() < 1e-9);
/// assert!((c - 10.0).abs() < 1e-9);
/// ```
pub fn linear_trend(series: &[f64]) -> Result<(f64, f64)> {
    let line = RegressionLine::fit(series)?;
    Ok((line.slope, line.intercept))
}
