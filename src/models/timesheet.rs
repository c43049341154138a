//! Timesheet output models.
//!
//! This module contains the structures produced by a timesheet run: the
//! per-day records, the printable rows, the summary counters and the two
//! outputs handed to the surrounding UI (a match summary and a print-ready
//! report).

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{LeaveCategory, LeaveCode};

/// The leave code found in one day column of the matched row.
///
/// One record exists for every day column whose cell is non-empty,
/// including weekends and holidays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// Day of month.
    pub day: u32,
    /// The normalized code, or `None` for a whitespace-only cell.
    pub code: Option<LeaveCode>,
}

/// One printable line of the timesheet, for a single working day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetRow {
    /// The date as `D/M/Y` (Buddhist era year).
    pub date: String,
    /// Clock-in time `HH:MM`, or empty.
    pub time_in: String,
    /// Clock-out time `HH:MM`, or empty.
    pub time_out: String,
    /// Leave remark, empty for a present day.
    pub remark: String,
}

/// Attendance counters for the month, in half-day increments.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{LeaveCode, SummaryCounters};
/// use rust_decimal::Decimal;
///
/// let mut counters = SummaryCounters::default();
/// counters.record(None);
/// counters.record(Some(&LeaveCode::HalfDaySickAfternoon));
///
/// assert_eq!(counters.present, Decimal::new(15, 1));
/// assert_eq!(counters.sick, Decimal::new(5, 1));
/// assert_eq!(counters.total(), Decimal::from(2));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryCounters {
    /// Days (or half days) worked.
    pub present: Decimal,
    /// Personal leave taken.
    pub personal: Decimal,
    /// Sick leave taken.
    pub sick: Decimal,
    /// Days absent.
    pub absent: Decimal,
}

impl SummaryCounters {
    /// Counts one working day.
    ///
    /// The day always adds exactly one in total: the code's weight goes to
    /// its category and the remainder to `present`. Days without a code,
    /// or with unrecognized text, count as fully present.
    pub fn record(&mut self, code: Option<&LeaveCode>) {
        let Some((category, weight)) =
            code.and_then(|c| c.category().map(|category| (category, c.weight())))
        else {
            self.present += Decimal::ONE;
            return;
        };

        match category {
            LeaveCategory::Personal => self.personal += weight,
            LeaveCategory::Sick => self.sick += weight,
            LeaveCategory::Absent => self.absent += weight,
        }
        self.present += Decimal::ONE - weight;
    }

    /// Returns the sum of all counters.
    pub fn total(&self) -> Decimal {
        self.present + self.personal + self.sick + self.absent
    }

    /// Returns the counters formatted for printing.
    pub fn formatted(&self) -> FormattedCounters {
        FormattedCounters {
            present: format_count(self.present),
            personal: format_count(self.personal),
            sick: format_count(self.sick),
            absent: format_count(self.absent),
        }
    }
}

/// Formats a counter as an integer when whole, else with one decimal place.
///
/// ```
/// use timesheet_engine::models::format_count;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_count(Decimal::new(30, 1)), "3");
/// assert_eq!(format_count(Decimal::new(25, 1)), "2.5");
/// ```
pub fn format_count(value: Decimal) -> String {
    if value.fract().is_zero() {
        value.trunc().normalize().to_string()
    } else {
        format!("{:.1}", value)
    }
}

/// Summary counters as printed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormattedCounters {
    /// Days present.
    pub present: String,
    /// Personal leave days.
    pub personal: String,
    /// Sick leave days.
    pub sick: String,
    /// Days absent.
    pub absent: String,
}

/// Human-readable summary of a run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    /// Detected month, e.g. `January 2026`.
    pub month_label: String,
    /// 1-based index of the matched row among the data rows.
    pub row_index: usize,
    /// Working days of the month, ascending.
    pub working_days: Vec<u32>,
    /// Number of working days.
    pub working_day_count: usize,
}

impl fmt::Display for MatchSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let days: Vec<String> = self.working_days.iter().map(u32::to_string).collect();
        writeln!(f, "Month: {}", self.month_label)?;
        writeln!(f, "Matched row: {}", self.row_index)?;
        writeln!(f, "Working days: {}", days.join(", "))?;
        write!(f, "Working day count: {}", self.working_day_count)
    }
}

/// Print-ready monthly timesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetReport {
    /// Month label with the Buddhist era year, e.g. `มกราคม 2569`.
    pub month_label: String,
    /// The employee's full name as searched.
    pub full_name: String,
    /// The employee identifier supplied by the caller.
    pub identifier: String,
    /// One row per working day.
    pub rows: Vec<TimesheetRow>,
    /// Formatted summary counters.
    pub counters: FormattedCounters,
}

impl fmt::Display for TimesheetReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.month_label)?;
        writeln!(f, "{}  {}", self.full_name, self.identifier)?;
        writeln!(f)?;
        writeln!(f, "{:<12} {:<6} {:<6} {}", "Date", "In", "Out", "Remark")?;
        for row in &self.rows {
            writeln!(
                f,
                "{:<12} {:<6} {:<6} {}",
                row.date, row.time_in, row.time_out, row.remark
            )?;
        }
        writeln!(f)?;
        write!(
            f,
            "Present: {}  Personal: {}  Sick: {}  Absent: {}",
            self.counters.present, self.counters.personal, self.counters.sick, self.counters.absent
        )
    }
}

/// The complete result of a timesheet run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetResult {
    /// Human-readable summary.
    pub summary: MatchSummary,
    /// Every non-empty day cell of the matched row.
    pub day_records: Vec<DayRecord>,
    /// Unformatted counters.
    pub counters: SummaryCounters,
    /// Print-ready timesheet.
    pub report: TimesheetReport,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_present_day_counts_one_present() {
        let mut counters = SummaryCounters::default();
        counters.record(None);
        assert_eq!(counters.present, dec("1"));
        assert_eq!(counters.total(), dec("1"));
    }

    #[test]
    fn test_full_day_sick_counts_one_sick() {
        let mut counters = SummaryCounters::default();
        counters.record(Some(&LeaveCode::FullDaySick));
        assert_eq!(counters.sick, dec("1"));
        assert_eq!(counters.present, dec("0"));
    }

    #[test]
    fn test_half_day_personal_splits_the_day() {
        let mut counters = SummaryCounters::default();
        counters.record(Some(&LeaveCode::HalfDayPersonalMorning));
        assert_eq!(counters.personal, dec("0.5"));
        assert_eq!(counters.present, dec("0.5"));
    }

    #[test]
    fn test_absent_never_counts_present() {
        let mut counters = SummaryCounters::default();
        counters.record(Some(&LeaveCode::Absent));
        assert_eq!(counters.absent, dec("1"));
        assert_eq!(counters.present, dec("0"));
        assert_eq!(counters.personal, dec("0"));
        assert_eq!(counters.sick, dec("0"));
    }

    #[test]
    fn test_unrecognized_counts_present() {
        let mut counters = SummaryCounters::default();
        counters.record(Some(&LeaveCode::Unrecognized("ไปราชการ".to_string())));
        assert_eq!(counters.present, dec("1"));
        assert_eq!(counters.total(), dec("1"));
    }

    #[test]
    fn test_format_count_whole_and_half() {
        assert_eq!(format_count(dec("0")), "0");
        assert_eq!(format_count(dec("19.0")), "19");
        assert_eq!(format_count(dec("0.5")), "0.5");
        assert_eq!(format_count(dec("12.50")), "12.5");
    }

    #[test]
    fn test_report_display_lists_rows_and_counters() {
        let report = TimesheetReport {
            month_label: "มกราคม 2569".to_string(),
            full_name: "สมชาย ใจดี".to_string(),
            identifier: "EMP-7".to_string(),
            rows: vec![TimesheetRow {
                date: "2/1/2569".to_string(),
                time_in: "07:15".to_string(),
                time_out: "16:30".to_string(),
                remark: String::new(),
            }],
            counters: FormattedCounters {
                present: "1".to_string(),
                personal: "0".to_string(),
                sick: "0".to_string(),
                absent: "0".to_string(),
            },
        };

        let text = report.to_string();
        assert!(text.starts_with("มกราคม 2569\n"));
        assert!(text.contains("2/1/2569"));
        assert!(text.contains("07:15"));
        assert!(text.ends_with("Present: 1  Personal: 0  Sick: 0  Absent: 0"));
    }

    #[test]
    fn test_summary_display() {
        let summary = MatchSummary {
            month_label: "January 2026".to_string(),
            row_index: 3,
            working_days: vec![2, 5],
            working_day_count: 2,
        };
        let text = summary.to_string();
        assert!(text.contains("Month: January 2026"));
        assert!(text.contains("Matched row: 3"));
        assert!(text.contains("Working days: 2, 5"));
    }
}
