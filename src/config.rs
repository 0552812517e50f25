//! Run settings loaded from TOML.
//!
//! ```toml
//! [seasonal]
//! width = 10
//! weight_factor = 0.8
//!
//! [loader]
//! has_header = true
//!
//! [output]
//! precision = 1
//! ```
//!
//! Every section and key is optional; missing values take their defaults.

use crate::error::{ForecastError, Result};
use crate::io::{LoaderConfig, OutputConfig};
use crate::models::SeasonalConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Settings for a full load, forecast and format run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub seasonal: SeasonalConfig,
    pub loader: LoaderConfig,
    pub output: OutputConfig,
}

impl Settings {
    /// Parse and validate settings from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let settings: Settings =
            toml::from_str(text).map_err(|e| ForecastError::Configuration(e.to_string()))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Read settings from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .map_err(|e| ForecastError::Io(format!("failed to read '{}': {}", path.display(), e)))?;
        Self::from_toml_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        self.seasonal.validate()?;
        self.loader.validate()
    }
}
