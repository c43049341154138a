//! Synthetic clock-in/out times.
//!
//! Printed timesheets need a plausible arrival time for every day worked.
//! The arrival minute is drawn from a [`ClockInSource`] so that callers
//! can seed or fix it.

use chrono::{Duration, NaiveTime};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::OfficeHours;
use crate::models::{HalfDay, LeaveCode};

/// Supplies the minute offset of a clock-in within the office-hours band.
pub trait ClockInSource {
    /// Returns an offset in `0..span`. `span` is at least 1.
    fn next_offset(&mut self, span: u32) -> u32;
}

/// Uniformly random clock-in offsets.
#[derive(Debug, Clone)]
pub struct RandomClockIn<R = StdRng> {
    rng: R,
}

impl RandomClockIn<StdRng> {
    /// Creates a source seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Creates a reproducible source.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomClockIn<R> {
    /// Wraps any random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ClockInSource for RandomClockIn<R> {
    fn next_offset(&mut self, span: u32) -> u32 {
        self.rng.gen_range(0..span.max(1))
    }
}

/// Always returns the same offset, clamped to the band.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClockIn(pub u32);

impl ClockInSource for FixedClockIn {
    fn next_offset(&mut self, span: u32) -> u32 {
        self.0.min(span.saturating_sub(1))
    }
}

/// Clock-in and clock-out for one day; `None` means the cell stays empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockTimes {
    /// Clock-in time.
    pub time_in: Option<NaiveTime>,
    /// Clock-out time.
    pub time_out: Option<NaiveTime>,
}

impl ClockTimes {
    const EMPTY: ClockTimes = ClockTimes {
        time_in: None,
        time_out: None,
    };

    /// Formats both times as `HH:MM`, empty strings for missing times.
    pub fn formatted(&self) -> (String, String) {
        let format = |t: Option<NaiveTime>| t.map(|t| t.format("%H:%M").to_string()).unwrap_or_default();
        (format(self.time_in), format(self.time_out))
    }
}

/// Produces clock times for each working day from office hours and a
/// clock-in source.
///
/// # Example
///
/// ```
/// use timesheet_engine::calculation::{ClockTimeGenerator, FixedClockIn};
/// use timesheet_engine::config::OfficeHours;
/// use timesheet_engine::models::LeaveCode;
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
/// let mut source = FixedClockIn(42);
/// let mut generator = ClockTimeGenerator::new(&hours, &mut source);
///
/// assert_eq!(generator.times_for(None).formatted(), ("07:42".to_string(), "16:30".to_string()));
/// assert_eq!(
///     generator.times_for(Some(&LeaveCode::FullDaySick)).formatted(),
///     (String::new(), String::new())
/// );
/// ```
pub struct ClockTimeGenerator<'a> {
    hours: &'a OfficeHours,
    source: &'a mut dyn ClockInSource,
}

impl<'a> ClockTimeGenerator<'a> {
    /// Creates a generator.
    pub fn new(hours: &'a OfficeHours, source: &'a mut dyn ClockInSource) -> Self {
        Self { hours, source }
    }

    /// Returns the clock times for a working day with the given code.
    ///
    /// - no code or unrecognized text: random clock-in, regular clock-out
    /// - morning leave: afternoon clock-in, regular clock-out
    /// - afternoon leave: random clock-in, midday clock-out
    /// - full-day leave or absence: no times
    pub fn times_for(&mut self, code: Option<&LeaveCode>) -> ClockTimes {
        let worked_all_day = code.is_none_or(|c| c.category().is_none());
        if worked_all_day {
            return ClockTimes {
                time_in: Some(self.random_clock_in()),
                time_out: Some(self.hours.evening_out),
            };
        }

        match code.and_then(LeaveCode::half_day) {
            Some(HalfDay::Morning) => ClockTimes {
                time_in: Some(self.hours.afternoon_in),
                time_out: Some(self.hours.evening_out),
            },
            Some(HalfDay::Afternoon) => ClockTimes {
                time_in: Some(self.random_clock_in()),
                time_out: Some(self.hours.midday_out),
            },
            None => ClockTimes::EMPTY,
        }
    }

    fn random_clock_in(&mut self) -> NaiveTime {
        let span = self.hours.clock_in_span_minutes();
        let offset = self.source.next_offset(span).min(span.saturating_sub(1));
        self.hours.clock_in_earliest + Duration::minutes(i64::from(offset))
    }
}
