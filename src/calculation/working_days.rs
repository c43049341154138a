//! Day classification and working-day calculation.
//!
//! This module provides utilities for determining the day type (weekday,
//! Saturday, Sunday, holiday) for any date and for listing the official
//! working days of a month.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::config::HolidayTable;
use crate::models::MonthYear;

/// Represents the type of a calendar day.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday, not a holiday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
    /// A weekday listed in the holiday table.
    Holiday,
}

impl DayType {
    /// Returns true for an official working day.
    pub fn is_working_day(self) -> bool {
        self == DayType::Weekday
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
            DayType::Holiday => write!(f, "Holiday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// Weekends take precedence over holidays: a holiday falling on a Saturday
/// is reported as [`DayType::Saturday`].
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{get_day_type, DayType};
/// use timesheet_engine::config::HolidayTable;
/// use chrono::NaiveDate;
///
/// let holidays = HolidayTable::new().with_holiday(2026, 1, 1);
///
/// // 2026-01-01 is a Thursday listed as a holiday
/// let new_year = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap();
/// assert_eq!(get_day_type(new_year, &holidays), DayType::Holiday);
///
/// // 2026-01-03 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2026, 1, 3).unwrap();
/// assert_eq!(get_day_type(saturday, &holidays), DayType::Saturday);
///
/// // 2026-01-02 is a Friday
/// let friday = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
/// assert_eq!(get_day_type(friday, &holidays), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate, holidays: &HolidayTable) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ if holidays.is_holiday(date.year(), date.month(), date.day()) => DayType::Holiday,
        _ => DayType::Weekday,
    }
}

/// Lists the working days of a month in ascending order.
///
/// A working day is neither a Saturday, a Sunday, nor a holiday listed in
/// the table for that year and month. A year missing from the table simply
/// has no holidays.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::working_days;
/// use timesheet_engine::config::HolidayTable;
/// use timesheet_engine::models::MonthYear;
///
/// let holidays = HolidayTable::new().with_holiday(2026, 1, 1);
/// let days = working_days(MonthYear::new(1, 2026).unwrap(), &holidays);
///
/// assert_eq!(&days[..3], &[2, 5, 6]);
/// assert_eq!(days.len(), 21);
/// ```
pub fn working_days(month: MonthYear, holidays: &HolidayTable) -> Vec<u32> {
    (1..=month.days_in_month())
        .filter_map(|day| month.date(day))
        .filter(|date| get_day_type(*date, holidays).is_working_day())
        .map(|date| date.day())
        .collect()
}

/// Lists the working days for a raw year and month.
///
/// An invalid month yields no days.
pub fn working_days_for(year: i32, month: u32, holidays: &HolidayTable) -> Vec<u32> {
    MonthYear::new(month, year)
        .map(|m| working_days(m, holidays))
        .unwrap_or_default()
}
