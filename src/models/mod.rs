//! Core data models for the timesheet engine.
//!
//! This module contains all the domain models used throughout the engine.

mod csv_row;
mod leave_code;
mod month_year;
mod timesheet;

pub use csv_row::CsvRow;
pub use leave_code::{HalfDay, LeaveCategory, LeaveCode};
pub use month_year::{BUDDHIST_ERA_OFFSET, MonthYear};
pub use timesheet::{
    DayRecord, FormattedCounters, MatchSummary, SummaryCounters, TimesheetReport, TimesheetResult,
    TimesheetRow, format_count,
};
