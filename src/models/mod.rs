//! Forecasting models.

mod traits;

pub mod predictor;
pub mod seasonal;
pub mod trend;

pub use predictor::{predict, predict_year, SeasonalTrend};
pub use seasonal::{occurrences, seasonal_deviation, seasonal_deviations, SeasonalConfig};
pub use traits::{BoxedForecaster, Forecaster};
pub use trend::{linear_trend, RegressionLine};
