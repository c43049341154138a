//! Month/year detection in the title line.

use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::config::MonthVocabulary;
use crate::error::{EngineError, EngineResult};
use crate::models::MonthYear;

fn year_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\s*\(?\s*([0-9]{4})(?:[^0-9]|$)").expect("invalid year regex"))
}

/// Finds the month and year a report covers from its title line.
///
/// The detector searches for the leftmost month name of the vocabulary
/// (case-insensitive) that is not part of a longer Latin word; Thai text,
/// digits and punctuation may touch it. The month name must be followed
/// directly by a four-digit year, optionally in parentheses, with any
/// whitespace in between.
///
/// # Example
///
/// ```
/// use timesheet_engine::config::{MonthName, MonthVocabulary};
/// use timesheet_engine::ingest::MonthYearDetector;
///
/// let vocabulary = MonthVocabulary::new(vec![MonthName {
///     number: 1,
///     name: "January".to_string(),
///     aliases: vec![],
///     display: "มกราคม".to_string(),
/// }]);
/// let detector = MonthYearDetector::new(&vocabulary).unwrap();
///
/// let found = detector.detect(",,,January (2026),,,,").unwrap();
/// assert_eq!((found.month, found.year), (1, 2026));
/// assert!(detector.detect("Attendance Report").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct MonthYearDetector {
    month_re: Option<Regex>,
    numbers: HashMap<String, u32>,
}

impl MonthYearDetector {
    /// Builds a detector for the given vocabulary.
    pub fn new(vocabulary: &MonthVocabulary) -> EngineResult<Self> {
        let mut terms: Vec<(&str, u32)> = vocabulary
            .terms()
            .map(|(term, number)| (term.trim(), number))
            .filter(|(term, _)| !term.is_empty())
            .collect();
        // Longest first so one spelling never shadows a longer one.
        terms.sort_by(|a, b| b.0.len().cmp(&a.0.len()));

        let numbers = terms
            .iter()
            .map(|(term, number)| (term.to_lowercase(), *number))
            .collect();

        let month_re = if terms.is_empty() {
            None
        } else {
            let alternation = terms
                .iter()
                .map(|(term, _)| regex::escape(term))
                .collect::<Vec<_>>()
                .join("|");
            let pattern = format!(r"(?i)(?:^|[^A-Za-z])({})", alternation);
            Some(
                Regex::new(&pattern).map_err(|e| EngineError::ConfigParseError {
                    path: "months".to_string(),
                    message: e.to_string(),
                })?,
            )
        };

        Ok(Self { month_re, numbers })
    }

    /// Detects the month and year in a title line.
    ///
    /// Returns `None` when no month name is present, or when the first
    /// month name is not followed by a year.
    pub fn detect(&self, line: &str) -> Option<MonthYear> {
        let found = self
            .month_re
            .as_ref()?
            .captures_iter(line)
            .filter_map(|caps| caps.get(1))
            .find(|m| !line[m.end()..].starts_with(|c: char| c.is_ascii_alphabetic()))?;
        let number = *self.numbers.get(&found.as_str().to_lowercase())?;

        let Some(year) = year_re()
            .captures(&line[found.end()..])
            .and_then(|caps| caps[1].parse::<i32>().ok())
        else {
            debug!(month = found.as_str(), "Month name found without an adjacent year");
            return None;
        };

        MonthYear::new(number, year)
    }

    /// Detects the month and year, failing with
    /// [`EngineError::MonthYearNotDetected`].
    pub fn require(&self, line: &str) -> EngineResult<MonthYear> {
        self.detect(line)
            .ok_or_else(|| EngineError::MonthYearNotDetected {
                line: line.to_string(),
            })
    }
}
