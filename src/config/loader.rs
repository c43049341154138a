//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading timesheet
//! configurations from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::{HolidaysConfig, LocaleConfig, OfficeHours, TimesheetConfig};

/// Loads and provides access to timesheet configuration.
///
/// The `ConfigLoader` reads YAML configuration files from a directory
/// and validates them before they reach the pipeline.
///
/// # Directory Structure
///
/// The configuration directory should have the following structure:
/// ```text
/// config/th/
/// ├── holidays.yaml      # holidays: {year: {month: [days]}}
/// ├── locale.yaml        # month vocabulary and leave labels
/// └── office_hours.yaml  # clock-in band and fixed clock times
/// ```
///
/// # Example
///
/// ```no_run
/// use timesheet_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/th").unwrap();
/// assert!(loader.config().holidays().is_holiday(2026, 1, 1));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: TimesheetConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g., "./config/th")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - Any table fails validation (month or day out of range, incomplete
    ///   month vocabulary, inverted clock-in band)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let holidays_path = path.join("holidays.yaml");
        let holidays = Self::load_yaml::<HolidaysConfig>(&holidays_path)?.holidays;
        Self::check(&holidays_path, holidays.validate())?;

        let locale_path = path.join("locale.yaml");
        let locale = Self::load_yaml::<LocaleConfig>(&locale_path)?;
        Self::check(&locale_path, locale.months.validate())?;

        let office_hours_path = path.join("office_hours.yaml");
        let office_hours = Self::load_yaml::<OfficeHours>(&office_hours_path)?;
        Self::check(&office_hours_path, office_hours.validate())?;

        debug!(
            path = %path.display(),
            holiday_years = holidays.years().count(),
            "Loaded timesheet configuration"
        );

        let config =
            TimesheetConfig::new(holidays, locale.months, locale.leave_labels, office_hours);

        Ok(Self { config })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn check(path: &Path, outcome: Result<(), String>) -> EngineResult<()> {
        outcome.map_err(|message| EngineError::ConfigParseError {
            path: path.display().to_string(),
            message,
        })
    }

    /// Returns the underlying timesheet configuration.
    pub fn config(&self) -> &TimesheetConfig {
        &self.config
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> TimesheetConfig {
        self.config
    }
}
