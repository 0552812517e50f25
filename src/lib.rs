//! # weather-forecast
//!
//! Seasonal trend forecasting for daily weather observations.
//!
//! Each location's history is split into a least-squares linear trend and
//! a recency-weighted seasonal deviation from that trend. The two are added
//! to forecast every day of the next 365-day cycle.
//!
//! ```
//! use weather_forecast::prelude::*;
//!
//! let mut csv = String::new();
//! for day in 0..800 {
//!     csv.push_str(&format!("d{},{},{}\n", day, 20, 10 + day % 7));
//! }
//! let table = load_table_from_reader(csv.as_bytes(), &LoaderConfig::default()).unwrap();
//! let report = forecast_table(&table, &SeasonalConfig::default()).unwrap();
//! let text = format_table(&report.forecasts).unwrap();
//! assert_eq!(text.lines().count(), 365);
//! assert!(text.starts_with("01-01,20.00,"));
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod utils;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::config::Settings;
    pub use crate::core::{DayOfYear, ForecastSeries, LocationSeries, ObservationTable};
    pub use crate::error::{ForecastError, Result};
    pub use crate::io::{format_table, load_table, load_table_from_reader, LoaderConfig};
    pub use crate::models::{Forecaster, RegressionLine, SeasonalConfig, SeasonalTrend};
    pub use crate::pipeline::{forecast_table, ForecastReport};
}
