//! Calculation logic for the timesheet engine.
//!
//! This module contains leave-code normalization, working-day calculation,
//! synthetic clock times and the aggregation of a matched row into
//! printable timesheet rows and summary counters.

mod aggregator;
mod clock_times;
mod leave_code;
mod working_days;

pub use aggregator::{
    AggregationInput, TimesheetAggregate, aggregate_timesheet, day_columns, remark_for,
};
pub use clock_times::{ClockInSource, ClockTimeGenerator, ClockTimes, FixedClockIn, RandomClockIn};
pub use leave_code::{LeaveRule, LeaveRules, normalize_leave_code};
pub use working_days::{DayType, get_day_type, working_days, working_days_for};
