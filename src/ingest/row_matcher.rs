//! Employee row matching.
//!
//! Locates the data row for one employee by comparing a name column with
//! the searched full name. Names are compared after collapsing whitespace,
//! since exports often pad the space between first and last name.

use std::sync::OnceLock;

use regex::Regex;
use tracing::{debug, warn};

use crate::error::{EngineError, EngineResult};
use crate::models::CsvRow;

fn name_header_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?i)full\s*name|name|ชื่อ").expect("invalid name header regex"))
}

/// Collapses whitespace runs to single spaces and trims.
///
/// ```
/// use timesheet_engine::ingest::normalize_name;
///
/// assert_eq!(normalize_name("  สมชาย   ใจดี "), "สมชาย ใจดี");
/// ```
pub fn normalize_name(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Joins a first and last name with a single space.
///
/// ```
/// use timesheet_engine::ingest::full_name;
///
/// assert_eq!(full_name(" สมชาย ", "ใจดี"), "สมชาย ใจดี");
/// assert_eq!(full_name("", ""), "");
/// ```
pub fn full_name(first_name: &str, last_name: &str) -> String {
    normalize_name(&format!("{} {}", first_name.trim(), last_name.trim()))
}

/// Returns the index of the name column.
///
/// This is the first header cell that mentions a name ("Full Name",
/// "Name", "ชื่อ-สกุล", ...), or column 0 when none does.
pub fn name_column(header: &CsvRow) -> usize {
    header
        .cells()
        .iter()
        .position(|cell| name_header_re().is_match(cell))
        .unwrap_or(0)
}

/// The data row selected for an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowMatch<'a> {
    /// The matched row.
    pub row: &'a CsvRow,
    /// 1-based position of the row among the data rows.
    pub row_number: usize,
    /// Index of the name column used for matching.
    pub name_column: usize,
}

/// Finds the row whose name cell matches `target`.
///
/// An exact match (after whitespace normalization) wins, taking the first
/// in file order. Without one, a row whose name cell contains the target
/// is accepted only if it is the sole such row.
///
/// # Errors
///
/// - [`EngineError::MissingSearchName`] if the target is blank
/// - [`EngineError::NoMatchingRow`] if no row matches
/// - [`EngineError::AmbiguousMatch`] if several rows contain the target
///
/// # Example
///
/// ```
/// use timesheet_engine::ingest::find_row;
/// use timesheet_engine::models::CsvRow;
///
/// let header = CsvRow::from(vec!["ลำดับ", "ชื่อ-สกุล", "1"]);
/// let rows = vec![
///     CsvRow::from(vec!["1", "มานี มีนา", ""]),
///     CsvRow::from(vec!["2", "สมชาย   ใจดี", "ป"]),
/// ];
///
/// let found = find_row(&header, &rows, "สมชาย ใจดี").unwrap();
/// assert_eq!(found.row_number, 2);
/// assert_eq!(found.name_column, 1);
/// ```
pub fn find_row<'a>(header: &CsvRow, rows: &'a [CsvRow], target: &str) -> EngineResult<RowMatch<'a>> {
    let target = normalize_name(target);
    if target.is_empty() {
        return Err(EngineError::MissingSearchName);
    }

    let column = name_column(header);
    let names: Vec<String> = rows.iter().map(|row| normalize_name(row.cell(column))).collect();
    let found = move |index: usize| -> RowMatch<'a> {
        RowMatch {
            row: &rows[index],
            row_number: index + 1,
            name_column: column,
        }
    };

    let exact: Vec<usize> = positions(&names, |name| name == target);
    if let Some(&first) = exact.first() {
        if exact.len() > 1 {
            warn!(
                name = %target,
                rows = ?exact.iter().map(|i| i + 1).collect::<Vec<_>>(),
                "Several rows carry the same name, using the first"
            );
        }
        debug!(name = %target, row = first + 1, column, "Exact name match");
        return Ok(found(first));
    }

    let partial: Vec<usize> = positions(&names, |name| name.contains(target.as_str()));
    match partial.as_slice() {
        [] => Err(EngineError::NoMatchingRow { name: target }),
        [only] => {
            debug!(name = %target, row = only + 1, column, "Partial name match");
            Ok(found(*only))
        }
        candidates => Err(EngineError::AmbiguousMatch {
            name: target,
            rows: candidates.iter().map(|i| i + 1).collect(),
        }),
    }
}

fn positions(names: &[String], matches: impl Fn(&str) -> bool) -> Vec<usize> {
    names
        .iter()
        .enumerate()
        .filter(|(_, name)| matches(name.as_str()))
        .map(|(i, _)| i)
        .collect()
}
