//! Timesheet aggregation.
//!
//! This module merges the working days of a month with the leave codes in
//! the matched employee row, producing the printable rows, the summary
//! counters and the per-day diagnostic records.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::clock_times::ClockTimeGenerator;
use super::leave_code::LeaveRules;
use crate::config::LeaveLabels;
use crate::models::{CsvRow, DayRecord, LeaveCode, MonthYear, SummaryCounters, TimesheetRow};

/// Maps day-of-month to the header column carrying it.
///
/// A day column is a header cell of one or two ASCII digits with a value
/// of 1-31. If a day appears twice the first column wins.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::day_columns;
/// use timesheet_engine::models::CsvRow;
///
/// let header = CsvRow::from(vec!["ลำดับ", "ชื่อ-สกุล", "1", "02", "32", "2"]);
/// let columns = day_columns(&header);
///
/// assert_eq!(columns.get(&1), Some(&2));
/// assert_eq!(columns.get(&2), Some(&3));
/// assert_eq!(columns.len(), 2);
/// ```
pub fn day_columns(header: &CsvRow) -> BTreeMap<u32, usize> {
    let mut columns = BTreeMap::new();
    for (index, cell) in header.cells().iter().enumerate() {
        let cell = cell.trim();
        if cell.is_empty() || cell.len() > 2 || !cell.bytes().all(|b| b.is_ascii_digit()) {
            continue;
        }
        let Ok(day) = cell.parse::<u32>() else {
            continue;
        };
        if (1..=31).contains(&day) {
            columns.entry(day).or_insert(index);
        }
    }
    columns
}

/// Returns the remark printed for a leave code: its configured label, or
/// the short code when no label exists. Unrecognized text prints as is.
pub fn remark_for(code: &LeaveCode, labels: &LeaveLabels) -> String {
    labels
        .label_for(code)
        .unwrap_or_else(|| code.short_code())
        .to_string()
}

/// Everything the aggregator reads.
#[derive(Debug, Clone, Copy)]
pub struct AggregationInput<'a> {
    /// The matched employee row.
    pub row: &'a CsvRow,
    /// The header row, used to locate day columns.
    pub header: &'a CsvRow,
    /// Working days of the month, ascending.
    pub working_days: &'a [u32],
    /// The month being reported.
    pub month: MonthYear,
    /// Remark labels.
    pub labels: &'a LeaveLabels,
    /// Leave-code rules.
    pub rules: &'a LeaveRules,
}

/// Output of [`aggregate_timesheet`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetAggregate {
    /// One printable row per working day.
    pub rows: Vec<TimesheetRow>,
    /// Summary counters over the working days.
    pub counters: SummaryCounters,
    /// Every non-empty day cell of the row, working day or not.
    pub day_records: Vec<DayRecord>,
}

/// Builds the timesheet rows and counters for one employee.
///
/// Working days without a day column, or with a blank cell, count as
/// present. Without a clock-time generator the time cells stay empty.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{AggregationInput, LeaveRules, aggregate_timesheet};
/// use timesheet_engine::config::LeaveLabels;
/// use timesheet_engine::models::{CsvRow, MonthYear};
/// use rust_decimal::Decimal;
///
/// let header = CsvRow::from(vec!["ชื่อ-สกุล", "2", "5"]);
/// let row = CsvRow::from(vec!["สมชาย ใจดี", "", "ลาป่วยทั้งวัน"]);
/// let labels = LeaveLabels::new([("full_day_sick", "ลาป่วยทั้งวัน")]);
///
/// let input = AggregationInput {
///     row: &row,
///     header: &header,
///     working_days: &[2, 5, 6],
///     month: MonthYear::new(1, 2026).unwrap(),
///     labels: &labels,
///     rules: LeaveRules::standard(),
/// };
/// let result = aggregate_timesheet(&input, None);
///
/// assert_eq!(result.rows.len(), 3);
/// assert_eq!(result.rows[1].date, "5/1/2569");
/// assert_eq!(result.rows[1].remark, "ลาป่วยทั้งวัน");
/// assert_eq!(result.counters.sick, Decimal::ONE);
/// assert_eq!(result.counters.present, Decimal::from(2));
/// ```
pub fn aggregate_timesheet(
    input: &AggregationInput<'_>,
    mut clock: Option<&mut ClockTimeGenerator<'_>>,
) -> TimesheetAggregate {
    let columns = day_columns(input.header);
    let code_for = |day: u32| -> Option<LeaveCode> {
        columns
            .get(&day)
            .and_then(|&index| input.rules.classify(input.row.cell(index)))
    };

    let day_records: Vec<DayRecord> = columns
        .iter()
        .filter(|&(_, &index)| !input.row.cell(index).is_empty())
        .map(|(&day, _)| DayRecord {
            day,
            code: code_for(day),
        })
        .collect();

    let mut counters = SummaryCounters::default();
    let mut rows = Vec::with_capacity(input.working_days.len());
    for &day in input.working_days {
        let code = code_for(day);
        counters.record(code.as_ref());

        let (time_in, time_out) = match clock.as_deref_mut() {
            Some(generator) => generator.times_for(code.as_ref()).formatted(),
            None => (String::new(), String::new()),
        };
        rows.push(TimesheetRow {
            date: format!("{}/{}/{}", day, input.month.month, input.month.buddhist_year()),
            time_in,
            time_out,
            remark: code
                .as_ref()
                .map(|c| remark_for(c, input.labels))
                .unwrap_or_default(),
        });
    }

    debug!(
        day_columns = columns.len(),
        working_days = input.working_days.len(),
        recorded_days = day_records.len(),
        present = %counters.present,
        "Aggregated timesheet"
    );

    TimesheetAggregate {
        rows,
        counters,
        day_records,
    }
}
