//! Day-of-year indexing on a fixed non-leap calendar.

use crate::error::{ForecastError, Result};
use chrono::{Datelike, NaiveDate};

/// Number of days in one seasonal cycle.
pub const DAYS_PER_YEAR: usize = 365;

// Any non-leap year works; only month/day are read back.
const REFERENCE_YEAR: i32 = 2023;

/// Calendar position in [1, 365], independent of year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOfYear(u16);

impl DayOfYear {
    /// First day of the cycle ("01-01").
    pub const FIRST: DayOfYear = DayOfYear(1);
    /// Last day of the cycle ("12-31").
    pub const LAST: DayOfYear = DayOfYear(DAYS_PER_YEAR as u16);

    /// Create a day-of-year index, rejecting values outside [1, 365].
    pub fn new(day: usize) -> Result<Self> {
        if (1..=DAYS_PER_YEAR).contains(&day) {
            Ok(DayOfYear(day as u16))
        } else {
            Err(ForecastError::Configuration(format!(
                "day of year must be in [1, {}], got {}",
                DAYS_PER_YEAR, day
            )))
        }
    }

    /// The index as a plain integer. Also the first day index this
    /// position occupies in a location series.
    pub fn get(self) -> usize {
        self.0 as usize
    }

    /// Iterate over every day of the cycle, 1 through 365.
    pub fn all() -> impl Iterator<Item = DayOfYear> + Clone {
        (1..=DAYS_PER_YEAR as u16).map(DayOfYear)
    }

    /// Synthetic `MM-DD` label for this position.
    pub fn month_day(self) -> Result<String> {
        NaiveDate::from_yo_opt(REFERENCE_YEAR, self.0 as u32)
            .map(|date| format!("{:02}-{:02}", date.month(), date.day()))
            .ok_or_else(|| {
                ForecastError::Configuration(format!(
                    "day {} is outside the non-leap calendar",
                    self.0
                ))
            })
    }
}
