//! Configuration loading and management for the timesheet engine.
//!
//! This module provides functionality to load the static tables the
//! pipeline depends on from YAML files: official holidays, the month-name
//! vocabulary, leave remark labels and office hours.
//!
//! # Example
//!
//! ```no_run
//! use timesheet_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/th").unwrap().into_config();
//! println!("January is printed as {}", config.months().month(1).unwrap().display);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    HolidayTable, HolidaysConfig, LeaveLabels, LocaleConfig, MonthName, MonthVocabulary,
    OfficeHours, TimesheetConfig,
};
