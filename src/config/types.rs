//! Configuration types for timesheet generation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files: the holiday table, the
//! month-name vocabulary, the leave-label table and the office hours used
//! for synthetic clock times.

use std::collections::{BTreeMap, BTreeSet};

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

use crate::models::LeaveCode;

/// Official holidays by year, month and day-of-month.
///
/// Years missing from the table simply have no holidays.
///
/// # Example
///
/// ```
/// use timesheet_engine::config::HolidayTable;
///
/// let table = HolidayTable::new().with_holiday(2026, 1, 1);
/// assert!(table.is_holiday(2026, 1, 1));
/// assert!(!table.is_holiday(2026, 1, 2));
/// assert!(!table.is_holiday(2031, 1, 1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HolidayTable(BTreeMap<i32, BTreeMap<u32, BTreeSet<u32>>>);

impl HolidayTable {
    /// Creates an empty holiday table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a holiday, returning the table for chaining.
    pub fn with_holiday(mut self, year: i32, month: u32, day: u32) -> Self {
        self.insert(year, month, day);
        self
    }

    /// Adds a holiday.
    pub fn insert(&mut self, year: i32, month: u32, day: u32) {
        self.0
            .entry(year)
            .or_default()
            .entry(month)
            .or_default()
            .insert(day);
    }

    /// Returns the holiday days for a month, if the table lists any.
    pub fn days_for(&self, year: i32, month: u32) -> Option<&BTreeSet<u32>> {
        self.0.get(&year).and_then(|months| months.get(&month))
    }

    /// Returns true if the given date is listed as a holiday.
    pub fn is_holiday(&self, year: i32, month: u32, day: u32) -> bool {
        self.days_for(year, month)
            .is_some_and(|days| days.contains(&day))
    }

    /// Returns the years covered by the table, ascending.
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.0.keys().copied()
    }

    /// Checks that every month is 1-12 and every day is 1-31.
    pub(crate) fn validate(&self) -> Result<(), String> {
        for (year, months) in &self.0 {
            for (month, days) in months {
                if !(1..=12).contains(month) {
                    return Err(format!("year {}: month {} is out of range", year, month));
                }
                if let Some(day) = days.iter().find(|d| !(1..=31).contains(*d)) {
                    return Err(format!(
                        "year {}, month {}: day {} is out of range",
                        year, month, day
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Holidays configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct HolidaysConfig {
    /// The holiday table.
    pub holidays: HolidayTable,
}

/// A month entry in the vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthName {
    /// The month number, 1-12.
    pub number: u32,
    /// The English name, used for detection and summary labels.
    pub name: String,
    /// Additional spellings accepted during detection (e.g. "Febuary").
    #[serde(default)]
    pub aliases: Vec<String>,
    /// The display name printed on the timesheet.
    pub display: String,
}

/// The month-name vocabulary.
///
/// Holds two language tables: English names (plus tolerated misspellings)
/// for detecting the month in a title line, and display names for the
/// printed timesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthVocabulary(Vec<MonthName>);

impl MonthVocabulary {
    /// Creates a vocabulary from month entries.
    pub fn new(months: Vec<MonthName>) -> Self {
        Self(months)
    }

    /// Returns the month entries.
    pub fn months(&self) -> &[MonthName] {
        &self.0
    }

    /// Returns the entry for a month number.
    pub fn month(&self, number: u32) -> Option<&MonthName> {
        self.0.iter().find(|m| m.number == number)
    }

    /// Returns every detectable spelling paired with its month number.
    pub fn terms(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.0.iter().flat_map(|m| {
            std::iter::once(m.name.as_str())
                .chain(m.aliases.iter().map(String::as_str))
                .map(move |term| (term, m.number))
        })
    }

    /// Checks that the vocabulary names each month 1-12 exactly once.
    pub(crate) fn validate(&self) -> Result<(), String> {
        let numbers: BTreeSet<u32> = self.0.iter().map(|m| m.number).collect();
        if self.0.len() != 12 || numbers != (1..=12).collect() {
            return Err("months must list each month number 1-12 exactly once".to_string());
        }
        if let Some(m) = self.terms().find(|(term, _)| term.trim().is_empty()) {
            return Err(format!("month {} has an empty name", m.1));
        }
        Ok(())
    }
}

/// Remark labels for canonical leave codes.
///
/// Keyed by [`LeaveCode::key`], e.g. `full_day_sick`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LeaveLabels(BTreeMap<String, String>);

impl LeaveLabels {
    /// Creates a label table from `(key, label)` pairs.
    pub fn new<I, K, V>(labels: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self(
            labels
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns the label for a leave code, if one is configured.
    ///
    /// Unrecognized codes never have a label.
    pub fn label_for(&self, code: &LeaveCode) -> Option<&str> {
        code.key()
            .and_then(|key| self.0.get(key))
            .map(String::as_str)
    }
}

/// Locale configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct LocaleConfig {
    /// The month vocabulary.
    pub months: MonthVocabulary,
    /// Remark labels by leave-code key.
    #[serde(default)]
    pub leave_labels: LeaveLabels,
}

/// Office hours used to synthesize clock-in/out times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfficeHours {
    /// Earliest random clock-in time (inclusive).
    pub clock_in_earliest: NaiveTime,
    /// Latest random clock-in time (inclusive).
    pub clock_in_latest: NaiveTime,
    /// Clock-out time when the afternoon is taken as leave.
    pub midday_out: NaiveTime,
    /// Clock-in time when the morning is taken as leave.
    pub afternoon_in: NaiveTime,
    /// Regular clock-out time.
    pub evening_out: NaiveTime,
}

impl OfficeHours {
    /// Number of distinct minutes in the clock-in band.
    ///
    /// ```
    /// use timesheet_engine::config::OfficeHours;
    /// use chrono::NaiveTime;
    ///
    /// let t = |h, m| NaiveTime::from_hms_opt(h, m, 0).unwrap();
    /// let hours = OfficeHours {
    ///     clock_in_earliest: t(7, 0),
    ///     clock_in_latest: t(8, 30),
    ///     midday_out: t(12, 0),
    ///     afternoon_in: t(13, 0),
    ///     evening_out: t(16, 30),
    /// };
    /// assert_eq!(hours.clock_in_span_minutes(), 91);
    /// ```
    pub fn clock_in_span_minutes(&self) -> u32 {
        let minutes = (self.clock_in_latest - self.clock_in_earliest).num_minutes();
        u32::try_from(minutes + 1).unwrap_or(1)
    }

    pub(crate) fn validate(&self) -> Result<(), String> {
        if self.clock_in_latest < self.clock_in_earliest {
            return Err("clock_in_latest must not be earlier than clock_in_earliest".to_string());
        }
        Ok(())
    }
}

/// The complete timesheet configuration.
///
/// This struct aggregates every static table the pipeline needs. It is
/// immutable once built and is injected into
/// [`TimesheetEngine`](crate::engine::TimesheetEngine) at construction.
#[derive(Debug, Clone)]
pub struct TimesheetConfig {
    holidays: HolidayTable,
    months: MonthVocabulary,
    leave_labels: LeaveLabels,
    office_hours: OfficeHours,
}

impl TimesheetConfig {
    /// Creates a new TimesheetConfig from its component parts.
    pub fn new(
        holidays: HolidayTable,
        months: MonthVocabulary,
        leave_labels: LeaveLabels,
        office_hours: OfficeHours,
    ) -> Self {
        Self {
            holidays,
            months,
            leave_labels,
            office_hours,
        }
    }

    /// Returns the holiday table.
    pub fn holidays(&self) -> &HolidayTable {
        &self.holidays
    }

    /// Returns the month vocabulary.
    pub fn months(&self) -> &MonthVocabulary {
        &self.months
    }

    /// Returns the leave-label table.
    pub fn leave_labels(&self) -> &LeaveLabels {
        &self.leave_labels
    }

    /// Returns the office hours.
    pub fn office_hours(&self) -> &OfficeHours {
        &self.office_hours
    }

    /// Returns a copy of this configuration with another holiday table.
    pub fn with_holidays(mut self, holidays: HolidayTable) -> Self {
        self.holidays = holidays;
        self
    }
}
