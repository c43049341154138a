//! Attendance sheet reading.
//!
//! This module turns the uploaded bytes into the three parts of an
//! attendance export: the title line, the header row and the data rows.

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::CsvRow;

use super::csv_line::parse_row;

const UTF8_BOM: char = '\u{feff}';

/// Rejects file names that do not end in `.csv` (case-insensitive).
///
/// ```
/// use timesheet_engine::ingest::validate_file_name;
///
/// assert!(validate_file_name("attendance-jan.CSV").is_ok());
/// assert!(validate_file_name("attendance.xlsx").is_err());
/// ```
pub fn validate_file_name(file_name: &str) -> EngineResult<()> {
    if file_name.to_lowercase().ends_with(".csv") {
        Ok(())
    } else {
        Err(EngineError::UnsupportedFileType {
            file_name: file_name.to_string(),
        })
    }
}

/// Decodes bytes as UTF-8, stripping a leading byte-order mark.
pub fn decode_utf8(bytes: &[u8]) -> EngineResult<&str> {
    let text = std::str::from_utf8(bytes).map_err(|e| EngineError::DecodeError {
        message: e.to_string(),
    })?;
    Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text))
}

/// Returns the non-blank lines of the text, in order.
///
/// Fails with [`EngineError::EmptyInput`] when there are none.
pub fn non_blank_lines(text: &str) -> EngineResult<Vec<&str>> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() {
        return Err(EngineError::EmptyInput);
    }
    Ok(lines)
}

/// A parsed attendance export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceSheet {
    /// The raw title line.
    pub title: String,
    /// Column names.
    pub header: CsvRow,
    /// Data rows in file order.
    pub rows: Vec<CsvRow>,
}

impl AttendanceSheet {
    /// Builds a sheet from non-blank lines.
    ///
    /// The first line is the title, the second the header, the rest data
    /// rows. Fails with [`EngineError::NoDataRows`] when there is nothing
    /// after the header.
    pub fn from_lines(lines: &[&str]) -> EngineResult<Self> {
        let [title, header, data @ ..] = lines else {
            return Err(EngineError::NoDataRows);
        };
        if data.is_empty() {
            return Err(EngineError::NoDataRows);
        }

        let sheet = Self {
            title: title.to_string(),
            header: parse_row(header),
            rows: data.iter().map(|line| parse_row(line)).collect(),
        };
        debug!(
            columns = sheet.header.len(),
            rows = sheet.rows.len(),
            "Parsed attendance sheet"
        );
        Ok(sheet)
    }
}
