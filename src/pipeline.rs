//! Whole-table forecasting.
//!
//! Locations are independent: each is fit and forecast on its own rayon
//! task against the shared, read-only table. A location whose history is
//! too short is recorded as a failure and skipped; fatal errors abort the
//! run.

use crate::core::{ForecastSeries, LocationSeries, ObservationTable};
use crate::error::{ForecastError, Result};
use crate::models::{Forecaster, SeasonalConfig, SeasonalTrend};
use rayon::prelude::*;
use std::collections::BTreeMap;
use tracing::{info, warn};

/// Outcome of forecasting every location in a table.
#[derive(Debug, Clone, Default)]
pub struct ForecastReport {
    /// Successful forecasts keyed by location index.
    pub forecasts: BTreeMap<usize, ForecastSeries>,
    /// Locations that were skipped, with the reason, in location order.
    pub failures: Vec<(usize, ForecastError)>,
}

impl ForecastReport {
    /// Whether every location produced a forecast.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Forecast every location with the seasonal trend model.
pub fn forecast_table(table: &ObservationTable, config: &SeasonalConfig) -> Result<ForecastReport> {
    config.validate()?;
    forecast_table_with(table, || SeasonalTrend::new(config.clone()))
}

/// Forecast every location with models built by `factory`.
///
/// `factory` is called once per location. An error from the factory is
/// treated as fatal.
pub fn forecast_table_with<F, M>(table: &ObservationTable, factory: F) -> Result<ForecastReport>
where
    F: Fn() -> Result<M> + Sync,
    M: Forecaster,
{
    if table.is_empty() {
        return Err(ForecastError::EmptyTable);
    }

    info!(
        locations = table.num_locations(),
        days = table.num_rows(),
        "forecasting table"
    );

    let series: Vec<&LocationSeries> = table.locations().collect();
    let results: Vec<(usize, Result<ForecastSeries>)> = series
        .par_iter()
        .map(|s| (s.location(), forecast_location(s, &factory)))
        .collect();

    let mut report = ForecastReport::default();
    for (location, result) in results {
        match result {
            Ok(forecast) => {
                report.forecasts.insert(location, forecast);
            }
            Err(err) if err.is_fatal() => return Err(err),
            Err(err) => {
                warn!(location, error = %err, "skipping location");
                report.failures.push((location, err));
            }
        }
    }

    info!(
        forecast = report.forecasts.len(),
        skipped = report.failures.len(),
        "forecasting finished"
    );
    Ok(report)
}

fn forecast_location<F, M>(series: &LocationSeries, factory: &F) -> Result<ForecastSeries>
where
    F: Fn() -> Result<M>,
    M: Forecaster,
{
    let mut model = factory()?;
    model
        .fit(series)
        .and_then(|_| model.predict_year())
        .map_err(|e| e.with_location(series.location()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::DayOfYear;
    use crate::models::RegressionLine;

    fn table(columns: Vec<Vec<f64>>) -> ObservationTable {
        let rows = columns.first().map(|c| c.len()).unwrap_or(0);
        let dates = (0..rows).map(|i| format!("day-{}", i)).collect();
        ObservationTable::from_columns(dates, columns).unwrap()
    }

    #[test]
    fn forecasts_every_location() {
        let ramp: Vec<f64> = (0..800).map(|i| i as f64).collect();
        let table = table(vec![vec![5.0; 800], ramp]);
        let report = forecast_table(&table, &SeasonalConfig::default()).unwrap();

        assert!(report.is_complete());
        assert_eq!(report.forecasts.len(), 2);
        let flat = &report.forecasts[&1];
        assert!((flat.get(DayOfYear::FIRST) - 5.0).abs() < 1e-9);
        let ramp = &report.forecasts[&2];
        assert!((ramp.get(DayOfYear::LAST) - 365.0).abs() < 1e-6);
    }

    #[test]
    fn invalid_config_fails_fast() {
        let table = table(vec![vec![1.0; 400]]);
        let config = SeasonalConfig::default().with_weight_factor(0.0);
        assert!(matches!(
            forecast_table(&table, &config),
            Err(ForecastError::Configuration(_))
        ));
    }

    #[test]
    fn empty_table_is_rejected() {
        let table = ObservationTable::default();
        assert_eq!(
            forecast_table(&table, &SeasonalConfig::default()).unwrap_err(),
            ForecastError::EmptyTable
        );
    }

    struct Failing;

    impl Forecaster for Failing {
        fn fit(&mut self, series: &LocationSeries) -> Result<()> {
            if series.location() == 2 {
                Err(ForecastError::InsufficientData {
                    location: None,
                    needed: 365,
                    got: series.len(),
                })
            } else {
                Ok(())
            }
        }

        fn predict(&self, _day: DayOfYear) -> Result<f64> {
            Ok(1.0)
        }

        fn trend(&self) -> Option<&RegressionLine> {
            None
        }

        fn name(&self) -> &str {
            "Failing"
        }
    }

    #[test]
    fn failing_location_is_isolated() {
        let table = table(vec![vec![0.0; 10], vec![0.0; 10], vec![0.0; 10]]);
        let report = forecast_table_with(&table, || Ok(Failing)).unwrap();

        assert_eq!(report.forecasts.keys().copied().collect::<Vec<_>>(), vec![1, 3]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(
            report.failures[0],
            (
                2,
                ForecastError::InsufficientData {
                    location: Some(2),
                    needed: 365,
                    got: 10
                }
            )
        );
    }
}
