//! Error types for the timesheet engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition that terminates a timesheet run. All variants are
//! fatal for the current invocation: no partial timesheet is produced.

use thiserror::Error;

/// The main error type for the timesheet engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timesheet_engine::error::EngineError;
///
/// let error = EngineError::NoMatchingRow {
///     name: "สมชาย ใจดี".to_string(),
/// };
/// assert_eq!(error.to_string(), "No row matches the name 'สมชาย ใจดี'");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed or failed validation.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The uploaded file name does not carry a `.csv` extension.
    #[error("Only CSV files (.csv) are accepted, got '{file_name}'")]
    UnsupportedFileType {
        /// The rejected file name.
        file_name: String,
    },

    /// The input bytes are not valid UTF-8.
    #[error("File must be a UTF-8 encoded CSV: {message}")]
    DecodeError {
        /// A description of the decoding failure.
        message: String,
    },

    /// The input has no non-blank lines.
    #[error("The file is empty")]
    EmptyInput,

    /// The title line carries no recognizable month name followed by a year.
    #[error("Could not detect month and year in title line '{line}'")]
    MonthYearNotDetected {
        /// The title line that was searched.
        line: String,
    },

    /// The input has a title line but no data rows.
    #[error("The file contains no data rows")]
    NoDataRows,

    /// The first and last name were both empty.
    #[error("A first name and last name are required")]
    MissingSearchName,

    /// No data row matched the requested name.
    #[error("No row matches the name '{name}'")]
    NoMatchingRow {
        /// The normalized name that was searched for.
        name: String,
    },

    /// More than one data row contains the requested name.
    #[error("The name '{name}' matches several rows: {rows:?}")]
    AmbiguousMatch {
        /// The normalized name that was searched for.
        name: String,
        /// The 1-based indices of every candidate row.
        rows: Vec<usize>,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
