//! Core data structures for location series and forecasts.

mod calendar;
mod forecast;
mod table;

pub use calendar::{DayOfYear, DAYS_PER_YEAR};
pub use forecast::ForecastSeries;
pub use table::{LocationSeries, ObservationTable};
