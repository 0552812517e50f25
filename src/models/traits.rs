//! Forecaster trait defining the common interface for seasonal models.

use crate::core::{DayOfYear, ForecastSeries, LocationSeries};
use crate::error::Result;
use crate::models::trend::RegressionLine;

/// Common interface for models that forecast one cycle ahead per location.
///
/// This trait is object-safe and can be used with `Box<dyn Forecaster>`.
pub trait Forecaster {
    /// Fit the model to a location's history.
    fn fit(&mut self, series: &LocationSeries) -> Result<()>;

    /// Predict a single day of the next cycle.
    fn predict(&self, day: DayOfYear) -> Result<f64>;

    /// Predict every day of the next cycle, 1 through 365.
    fn predict_year(&self) -> Result<ForecastSeries> {
        let values = DayOfYear::all()
            .map(|day| self.predict(day))
            .collect::<Result<Vec<f64>>>()?;
        ForecastSeries::from_values(values)
    }

    /// Trend line from the last fit.
    fn trend(&self) -> Option<&RegressionLine>;

    /// Get the model name.
    fn name(&self) -> &str;

    /// Check if the model has been fitted.
    fn is_fitted(&self) -> bool {
        self.trend().is_some()
    }
}

/// Type alias for boxed forecaster trait objects.
///
/// # Example
///
/// ```
/// use weather_forecast::models::{BoxedForecaster, Forecaster, SeasonalTrend};
///
/// let model: BoxedForecaster = Box::new(SeasonalTrend::default());
/// assert_eq!(model.name(), "SeasonalTrend");
/// assert!(!model.is_fitted());
/// ```
pub type BoxedForecaster = Box<dyn Forecaster + Send + Sync>;
