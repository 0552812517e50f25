//! Seasonal deviation from the trend line.
//!
//! For a day-of-year `d`, every historical occurrence of that calendar
//! position (day indices `d`, `d + 365`, `d + 730`, ...) contributes one
//! deviation: the trend value at the occurrence minus the mean of the
//! readings in a window centred on it. Deviations are combined with
//! geometric weights so that recent years dominate.
//!
//! Sign convention: a positive deviation means readings ran below trend.

use crate::core::{DayOfYear, DAYS_PER_YEAR};
use crate::error::{ForecastError, Result};
use crate::models::trend::RegressionLine;
use crate::utils::{centered_mean, recency_weights, weighted_mean};
use serde::{Deserialize, Serialize};

/// Configuration for the seasonal deviation estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SeasonalConfig {
    /// Nominal window width in days around each occurrence.
    pub width: usize,
    /// Weight multiplier per year back in time, in (0, 1].
    pub weight_factor: f64,
}

impl Default for SeasonalConfig {
    fn default() -> Self {
        Self {
            width: 10,
            weight_factor: 0.8,
        }
    }
}

impl SeasonalConfig {
    /// Create and validate a configuration.
    pub fn new(width: usize, weight_factor: f64) -> Result<Self> {
        let config = Self {
            width,
            weight_factor,
        };
        config.validate()?;
        Ok(config)
    }

    /// Set the window width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the per-year weight factor.
    pub fn with_weight_factor(mut self, weight_factor: f64) -> Self {
        self.weight_factor = weight_factor;
        self
    }

    /// Check parameter ranges.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 {
            return Err(ForecastError::Configuration(
                "width must be positive".to_string(),
            ));
        }
        if !(self.weight_factor > 0.0 && self.weight_factor <= 1.0) {
            return Err(ForecastError::Configuration(format!(
                "weight_factor must be in (0, 1], got {}",
                self.weight_factor
            )));
        }
        Ok(())
    }
}

/// Day indices of every occurrence of `day` in a series of length `len`,
/// oldest first.
pub fn occurrences(day: DayOfYear, len: usize) -> impl Iterator<Item = usize> {
    (day.get()..len).step_by(DAYS_PER_YEAR)
}

/// Per-occurrence deviations (trend minus windowed mean), oldest first.
///
/// Empty when `day` lies beyond the series.
pub fn seasonal_deviations(
    series: &[f64],
    line: &RegressionLine,
    day: DayOfYear,
    width: usize,
) -> Vec<f64> {
    occurrences(day, series.len())
        .map(|t| line.value_at(t) - centered_mean(series, t, width))
        .collect()
}

/// Recency-weighted average deviation from trend at `day`.
///
/// `line` must have been fit to `series`. A single occurrence returns that
/// occurrence's deviation unchanged.
pub fn seasonal_deviation(
    series: &[f64],
    line: &RegressionLine,
    day: DayOfYear,
    config: &SeasonalConfig,
) -> Result<f64> {
    config.validate()?;
    if line.len() != series.len() {
        return Err(ForecastError::DimensionMismatch {
            expected: series.len(),
            got: line.len(),
        });
    }

    let deviations = seasonal_deviations(series, line, day, config.width);
    if deviations.is_empty() {
        return Err(ForecastError::InsufficientData {
            location: None,
            needed: day.get() + 1,
            got: series.len(),
        });
    }

    let weights = recency_weights(deviations.len(), config.weight_factor);
    Ok(weighted_mean(&deviations, &weights))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn day(d: usize) -> DayOfYear {
        DayOfYear::new(d).unwrap()
    }

    #[test]
    fn default_config_is_valid() {
        let config = SeasonalConfig::default();
        assert_eq!(config.width, 10);
        assert_relative_eq!(config.weight_factor, 0.8);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn config_rejects_bad_parameters() {
        assert!(matches!(
            SeasonalConfig::new(0, 0.8),
            Err(ForecastError::Configuration(_))
        ));
        assert!(SeasonalConfig::new(10, 0.0).is_err());
        assert!(SeasonalConfig::new(10, -0.5).is_err());
        assert!(SeasonalConfig::new(10, 1.01).is_err());
        assert!(SeasonalConfig::new(10, f64::NAN).is_err());
        assert!(SeasonalConfig::new(10, 1.0).is_ok());
        assert!(SeasonalConfig::new(1, 0.01).is_ok());
    }

    #[test]
    fn occurrences_step_by_a_year() {
        let found: Vec<usize> = occurrences(day(100), 1000).collect();
        assert_eq!(found, vec![100, 465, 830]);

        let found: Vec<usize> = occurrences(day(365), 730).collect();
        assert_eq!(found, vec![365]);

        assert_eq!(occurrences(day(50), 50).count(), 0);
    }

    #[test]
    fn constant_series_has_no_deviation() {
        let series = vec![12.0; 800];
        let line = RegressionLine::fit(&series).unwrap();
        let config = SeasonalConfig::default();
        for d in [1, 2, 100, 365] {
            let dev = seasonal_deviation(&series, &line, day(d), &config).unwrap();
            assert_relative_eq!(dev, 0.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn sign_is_trend_minus_observed() {
        // Flat series with a single dip: readings below trend give a positive deviation.
        let mut series = vec![20.0; 400];
        series[200] = 10.0;
        let line = RegressionLine::fit(&series).unwrap();
        let config = SeasonalConfig::default().with_width(1);
        let dev = seasonal_deviation(&series, &line, day(200), &config).unwrap();
        assert!(dev > 9.9);
    }

    #[test]
    fn two_years_weight_the_recent_year_more() {
        let mut series = vec![50.0; 730];
        series[100] += 3.0;
        series[465] += 5.0;
        let line = RegressionLine::fit(&series).unwrap();
        let config = SeasonalConfig::new(1, 0.8).unwrap();

        let dev = seasonal_deviation(&series, &line, day(100), &config).unwrap();

        let d1 = line.value_at(100) - series[100];
        let d2 = line.value_at(465) - series[465];
        let (w1, w2) = (0.8, 1.0);
        assert_relative_eq!(dev, (w1 * d1 + w2 * d2) / (w1 + w2), epsilon = 1e-12);
        assert_relative_eq!(dev, (w1 * -3.0 + w2 * -5.0) / (w1 + w2), epsilon = 0.05);
        // Closer to the recent -5 than a plain average would be
        assert!(dev < -4.0);
    }

    #[test]
    fn single_occurrence_is_returned_as_is() {
        let mut series = vec![5.0; 300];
        series[10] = 9.0;
        let line = RegressionLine::fit(&series).unwrap();
        let config = SeasonalConfig::new(1, 0.5).unwrap();
        let dev = seasonal_deviation(&series, &line, day(10), &config).unwrap();
        assert_relative_eq!(dev, line.value_at(10) - 9.0, epsilon = 1e-12);
    }

    #[test]
    fn day_beyond_series_is_insufficient_data() {
        let series = vec![1.0; 50];
        let line = RegressionLine::fit(&series).unwrap();
        let err =
            seasonal_deviation(&series, &line, day(60), &SeasonalConfig::default()).unwrap_err();
        assert_eq!(
            err,
            ForecastError::InsufficientData {
                location: None,
                needed: 61,
                got: 50
            }
        );
    }

    #[test]
    fn series_as_long_as_the_window_is_supported() {
        let series: Vec<f64> = (0..10).map(|i| (i % 3) as f64).collect();
        let line = RegressionLine::fit(&series).unwrap();
        let config = SeasonalConfig::default();
        for d in 1..10 {
            let dev = seasonal_deviation(&series, &line, day(d), &config).unwrap();
            assert!(dev.is_finite());
        }
    }

    #[test]
    fn rejects_line_fit_to_another_series() {
        let series = vec![1.0; 20];
        let line = RegressionLine::fit(&[1.0, 2.0, 3.0]).unwrap();
        assert!(matches!(
            seasonal_deviation(&series, &line, day(1), &SeasonalConfig::default()),
            Err(ForecastError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn invalid_config_fails_before_computation() {
        let series = vec![1.0; 20];
        let line = RegressionLine::fit(&series).unwrap();
        let config = SeasonalConfig::default().with_weight_factor(2.0);
        assert!(matches!(
            seasonal_deviation(&series, &line, day(5), &config),
            Err(ForecastError::Configuration(_))
        ));
    }

    #[test]
    fn weight_factor_near_one_gives_old_years_more_influence() {
        // Three years; deviation at day 30 is -1, -2, -9 (oldest to newest).
        let mut series = vec![0.0; 3 * 365];
        series[30] = 1.0;
        series[395] = 2.0;
        series[760] = 9.0;
        let line = RegressionLine::fit(&series).unwrap();

        let recent = SeasonalConfig::new(1, 0.1).unwrap();
        let even = SeasonalConfig::new(1, 0.95).unwrap();
        let newest = line.value_at(760) - 9.0;

        let dev_recent = seasonal_deviation(&series, &line, day(30), &recent).unwrap();
        let dev_even = seasonal_deviation(&series, &line, day(30), &even).unwrap();

        assert!((dev_recent - newest).abs() < (dev_even - newest).abs());
    }
}
