//! Leave code model.
//!
//! This module defines [`LeaveCode`], the canonical classification of a
//! day's attendance cell, together with the counting rules attached to
//! each code.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The counter a leave code is attributed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveCategory {
    /// Personal (business) leave.
    Personal,
    /// Sick leave.
    Sick,
    /// Absence without leave.
    Absent,
}

/// The half of the working day taken as leave.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HalfDay {
    /// Leave in the morning; the employee works the afternoon.
    Morning,
    /// Leave in the afternoon; the employee works the morning.
    Afternoon,
}

/// Canonical classification of a day's attendance cell.
///
/// Any text that no normalization rule recognizes is carried through
/// unchanged as [`LeaveCode::Unrecognized`].
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{LeaveCategory, LeaveCode};
/// use rust_decimal::Decimal;
///
/// let code = LeaveCode::HalfDaySickMorning;
/// assert_eq!(code.category(), Some(LeaveCategory::Sick));
/// assert_eq!(code.weight(), Decimal::new(5, 1));
/// assert_eq!(code.short_code(), "ป/ช");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveCode {
    /// Full-day personal leave.
    FullDayPersonal,
    /// Personal leave for the morning.
    HalfDayPersonalMorning,
    /// Personal leave for the afternoon.
    HalfDayPersonalAfternoon,
    /// Full-day sick leave.
    FullDaySick,
    /// Sick leave for the morning.
    HalfDaySickMorning,
    /// Sick leave for the afternoon.
    HalfDaySickAfternoon,
    /// Absent without leave.
    Absent,
    /// Cell text that matched no rule, kept verbatim.
    Unrecognized(String),
}

impl LeaveCode {
    /// Returns the stable key used in configuration tables, or `None` for
    /// unrecognized text.
    pub fn key(&self) -> Option<&'static str> {
        match self {
            LeaveCode::FullDayPersonal => Some("full_day_personal"),
            LeaveCode::HalfDayPersonalMorning => Some("half_day_personal_morning"),
            LeaveCode::HalfDayPersonalAfternoon => Some("half_day_personal_afternoon"),
            LeaveCode::FullDaySick => Some("full_day_sick"),
            LeaveCode::HalfDaySickMorning => Some("half_day_sick_morning"),
            LeaveCode::HalfDaySickAfternoon => Some("half_day_sick_afternoon"),
            LeaveCode::Absent => Some("absent"),
            LeaveCode::Unrecognized(_) => None,
        }
    }

    /// Returns the short code printed when no label is configured.
    ///
    /// Unrecognized codes return their original text.
    pub fn short_code(&self) -> &str {
        match self {
            LeaveCode::FullDayPersonal => "ก",
            LeaveCode::HalfDayPersonalMorning => "ก/ช",
            LeaveCode::HalfDayPersonalAfternoon => "ก/บ",
            LeaveCode::FullDaySick => "ป",
            LeaveCode::HalfDaySickMorning => "ป/ช",
            LeaveCode::HalfDaySickAfternoon => "ป/บ",
            LeaveCode::Absent => "ข",
            LeaveCode::Unrecognized(text) => text,
        }
    }

    /// Returns the counter this code is attributed to.
    pub fn category(&self) -> Option<LeaveCategory> {
        match self {
            LeaveCode::FullDayPersonal
            | LeaveCode::HalfDayPersonalMorning
            | LeaveCode::HalfDayPersonalAfternoon => Some(LeaveCategory::Personal),
            LeaveCode::FullDaySick
            | LeaveCode::HalfDaySickMorning
            | LeaveCode::HalfDaySickAfternoon => Some(LeaveCategory::Sick),
            LeaveCode::Absent => Some(LeaveCategory::Absent),
            LeaveCode::Unrecognized(_) => None,
        }
    }

    /// Returns the half of the day taken as leave, for half-day codes.
    pub fn half_day(&self) -> Option<HalfDay> {
        match self {
            LeaveCode::HalfDayPersonalMorning | LeaveCode::HalfDaySickMorning => {
                Some(HalfDay::Morning)
            }
            LeaveCode::HalfDayPersonalAfternoon | LeaveCode::HalfDaySickAfternoon => {
                Some(HalfDay::Afternoon)
            }
            _ => None,
        }
    }

    /// Returns how much of the day this code takes from the leave counter:
    /// 1 for full-day codes and absence, 0.5 for half-day codes and 0 for
    /// unrecognized text.
    pub fn weight(&self) -> Decimal {
        match self {
            LeaveCode::Unrecognized(_) => Decimal::ZERO,
            code if code.half_day().is_some() => Decimal::new(5, 1),
            _ => Decimal::ONE,
        }
    }
}

impl std::fmt::Display for LeaveCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_code())
    }
}
