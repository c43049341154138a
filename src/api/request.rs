//! Request types for the timesheet API.
//!
//! The CSV export travels as the raw request body; everything else is
//! passed in the query string of `POST /timesheet`.

use serde::{Deserialize, Serialize};

use crate::engine::TimesheetRequest;

/// Query parameters of the `/timesheet` endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetQuery {
    /// The employee's first name.
    #[serde(default)]
    pub first_name: String,
    /// The employee's last name.
    #[serde(default)]
    pub last_name: String,
    /// Identifier printed on the report.
    #[serde(default)]
    pub identifier: String,
    /// Fill in synthetic clock-in/out times.
    #[serde(default)]
    pub generate_times: bool,
    /// Seed for the clock-in times; random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Name of the uploaded file, checked for a `.csv` extension.
    #[serde(default)]
    pub file_name: Option<String>,
}

impl From<&TimesheetQuery> for TimesheetRequest {
    fn from(query: &TimesheetQuery) -> Self {
        TimesheetRequest::new(query.first_name.as_str(), query.last_name.as_str())
            .with_identifier(query.identifier.as_str())
            .with_generated_times(query.generate_times)
    }
}
