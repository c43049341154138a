//! The timesheet pipeline.
//!
//! [`TimesheetEngine`] wires the ingest and calculation stages together:
//! decode the export, detect the month, select the employee row, compute
//! the working days and aggregate the leave codes into a printable report.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculation::{
    AggregationInput, ClockInSource, ClockTimeGenerator, LeaveRules, aggregate_timesheet,
    working_days,
};
use crate::config::TimesheetConfig;
use crate::error::EngineResult;
use crate::ingest::{AttendanceSheet, MonthYearDetector, decode_utf8, find_row, full_name, non_blank_lines};
use crate::models::{MatchSummary, MonthYear, TimesheetReport, TimesheetResult};

/// Who to build the timesheet for, and how.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetRequest {
    /// First name as typed by the user.
    pub first_name: String,
    /// Last name as typed by the user.
    pub last_name: String,
    /// Employee identifier printed on the report.
    #[serde(default)]
    pub identifier: String,
    /// Fill in synthetic clock-in/out times.
    #[serde(default)]
    pub generate_times: bool,
}

impl TimesheetRequest {
    /// Creates a request for the given name, without identifier or times.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            ..Self::default()
        }
    }

    /// Sets the identifier.
    pub fn with_identifier(mut self, identifier: impl Into<String>) -> Self {
        self.identifier = identifier.into();
        self
    }

    /// Enables or disables clock-time generation.
    pub fn with_generated_times(mut self, generate_times: bool) -> Self {
        self.generate_times = generate_times;
        self
    }

    /// The searched full name: trimmed first and last name joined by a
    /// single space.
    pub fn full_name(&self) -> String {
        full_name(&self.first_name, &self.last_name)
    }
}

/// Builds monthly timesheets from attendance exports.
///
/// The engine is immutable after construction and can be shared between
/// threads.
///
/// # Example
///
/// ```no_run
/// use timesheet_engine::calculation::RandomClockIn;
/// use timesheet_engine::config::ConfigLoader;
/// use timesheet_engine::engine::{TimesheetEngine, TimesheetRequest};
///
/// let config = ConfigLoader::load("./config/th").unwrap().into_config();
/// let engine = TimesheetEngine::new(config).unwrap();
///
/// let csv = std::fs::read("attendance.csv").unwrap();
/// let request = TimesheetRequest::new("สมชาย", "ใจดี").with_generated_times(true);
/// let result = engine
///     .process_bytes(&csv, &request, &mut RandomClockIn::seeded(7))
///     .unwrap();
/// println!("{}", result.report);
/// ```
#[derive(Debug, Clone)]
pub struct TimesheetEngine {
    config: TimesheetConfig,
    detector: MonthYearDetector,
    rules: LeaveRules,
}

impl TimesheetEngine {
    /// Creates an engine with the standard leave rules.
    pub fn new(config: TimesheetConfig) -> EngineResult<Self> {
        Self::with_rules(config, LeaveRules::standard().clone())
    }

    /// Creates an engine with a custom leave-rule list.
    pub fn with_rules(config: TimesheetConfig, rules: LeaveRules) -> EngineResult<Self> {
        let detector = MonthYearDetector::new(config.months())?;
        Ok(Self {
            config,
            detector,
            rules,
        })
    }

    /// Returns the configuration.
    pub fn config(&self) -> &TimesheetConfig {
        &self.config
    }

    /// Processes raw export bytes.
    ///
    /// # Errors
    ///
    /// Fails with [`DecodeError`](crate::error::EngineError::DecodeError)
    /// for invalid UTF-8 and with any error of [`process`](Self::process).
    pub fn process_bytes(
        &self,
        bytes: &[u8],
        request: &TimesheetRequest,
        clock_in: &mut dyn ClockInSource,
    ) -> EngineResult<TimesheetResult> {
        let text = decode_utf8(bytes)?;
        self.process(text, request, clock_in)
    }

    /// Processes export text.
    ///
    /// The stages run in order, and the first failure aborts the run:
    /// empty input, month/year detection on the title line, missing data
    /// rows, row matching.
    pub fn process(
        &self,
        text: &str,
        request: &TimesheetRequest,
        clock_in: &mut dyn ClockInSource,
    ) -> EngineResult<TimesheetResult> {
        let lines = non_blank_lines(text)?;
        let month = self.detector.require(lines[0])?;
        debug!(month = month.month, year = month.year, "Detected month");

        let sheet = AttendanceSheet::from_lines(&lines)?;
        let name = request.full_name();
        let matched = find_row(&sheet.header, &sheet.rows, &name)?;

        let days = working_days(month, self.config.holidays());
        debug!(working_days = days.len(), "Computed working days");

        let input = AggregationInput {
            row: matched.row,
            header: &sheet.header,
            working_days: &days,
            month,
            labels: self.config.leave_labels(),
            rules: &self.rules,
        };
        let mut generator = ClockTimeGenerator::new(self.config.office_hours(), clock_in);
        let aggregate = aggregate_timesheet(
            &input,
            request.generate_times.then_some(&mut generator),
        );

        let summary = MatchSummary {
            month_label: self.english_label(month),
            row_index: matched.row_number,
            working_day_count: days.len(),
            working_days: days,
        };
        let report = TimesheetReport {
            month_label: self.thai_label(month),
            full_name: name,
            identifier: request.identifier.trim().to_string(),
            rows: aggregate.rows,
            counters: aggregate.counters.formatted(),
        };

        Ok(TimesheetResult {
            summary,
            day_records: aggregate.day_records,
            counters: aggregate.counters,
            report,
        })
    }

    /// `January 2026`
    fn english_label(&self, month: MonthYear) -> String {
        match self.config.months().month(month.month) {
            Some(name) => format!("{} {}", name.name, month.year),
            None => format!("{} {}", month.month, month.year),
        }
    }

    /// `มกราคม 2569`
    fn thai_label(&self, month: MonthYear) -> String {
        match self.config.months().month(month.month) {
            Some(name) => format!("{} {}", name.display, month.buddhist_year()),
            None => format!("{} {}", month.month, month.buddhist_year()),
        }
    }
}
