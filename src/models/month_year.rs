//! Month/year model.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

/// Offset between the Gregorian year and the Buddhist era year.
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

/// The month a timesheet covers.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::MonthYear;
///
/// let january = MonthYear::new(1, 2026).unwrap();
/// assert_eq!(january.days_in_month(), 31);
/// assert_eq!(january.buddhist_year(), 2569);
/// assert!(MonthYear::new(13, 2026).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MonthYear {
    /// Month number, 1-12.
    pub month: u32,
    /// Gregorian year.
    pub year: i32,
}

impl MonthYear {
    /// Creates a month/year, returning `None` if the month is out of range
    /// or the year is outside chrono's calendar.
    pub fn new(month: u32, year: i32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|_| Self { month, year })
    }

    /// Returns the year in the Buddhist era used for printing.
    pub fn buddhist_year(&self) -> i32 {
        self.year + BUDDHIST_ERA_OFFSET
    }

    /// Returns the number of days in the month, honoring leap years.
    pub fn days_in_month(&self) -> u32 {
        let (year, month) = if self.month == 12 {
            (self.year + 1, 1)
        } else {
            (self.year, self.month + 1)
        };
        NaiveDate::from_ymd_opt(year, month, 1)
            .and_then(|next| next.pred_opt())
            .map(|last| last.day())
            .unwrap_or(0)
    }

    /// Returns the given day of this month as a date, if it exists.
    pub fn date(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}
