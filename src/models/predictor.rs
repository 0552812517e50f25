//! Trend plus seasonal deviation predictor.
//!
//! The prediction for day-of-year `d` is the trend value at day index `d`
//! plus the recency-weighted seasonal deviation at `d`. The regression line
//! is fit once per series and reused for every day of the cycle.

use crate::core::{DayOfYear, ForecastSeries, LocationSeries};
use crate::error::{ForecastError, Result};
use crate::models::seasonal::{seasonal_deviation, SeasonalConfig};
use crate::models::trend::RegressionLine;
use crate::models::Forecaster;
use tracing::debug;

/// Seasonal trend forecaster.
#[derive(Debug, Clone, Default)]
pub struct SeasonalTrend {
    config: SeasonalConfig,
    history: Option<LocationSeries>,
    line: Option<RegressionLine>,
}

impl SeasonalTrend {
    /// Create a model with a validated configuration.
    pub fn new(config: SeasonalConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            history: None,
            line: None,
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &SeasonalConfig {
        &self.config
    }

    fn fitted(&self) -> Result<(&LocationSeries, &RegressionLine)> {
        match (&self.history, &self.line) {
            (Some(history), Some(line)) => Ok((history, line)),
            _ => Err(ForecastError::FitRequired),
        }
    }
}

impl Forecaster for SeasonalTrend {
    fn fit(&mut self, series: &LocationSeries) -> Result<()> {
        let line = RegressionLine::fit(series.values())
            .map_err(|e| e.with_location(series.location()))?;

        debug!(
            location = series.location(),
            days = series.len(),
            slope = line.slope,
            intercept = line.intercept,
            r_squared = line.r_squared,
            "fitted trend"
        );

        self.history = Some(series.clone());
        self.line = Some(line);
        Ok(())
    }

    fn predict(&self, day: DayOfYear) -> Result<f64> {
        let (history, line) = self.fitted()?;
        let deviation = seasonal_deviation(history.values(), line, day, &self.config)
            .map_err(|e| e.with_location(history.location()))?;
        Ok(line.value_at(day.get()) + deviation)
    }

    fn trend(&self) -> Option<&RegressionLine> {
        self.line.as_ref()
    }

    fn name(&self) -> &str {
        "SeasonalTrend"
    }
}

/// Predict a single day for `series`.
pub fn predict(series: &LocationSeries, day: DayOfYear, config: &SeasonalConfig) -> Result<f64> {
    let mut model = SeasonalTrend::new(config.clone())?;
    model.fit(series)?;
    model.predict(day)
}

/// Predict the whole next cycle for `series`.
pub fn predict_year(series: &LocationSeries, config: &SeasonalConfig) -> Result<ForecastSeries> {
    let mut model = SeasonalTrend::new(config.clone())?;
    model.fit(series)?;
    model.predict_year()
}
