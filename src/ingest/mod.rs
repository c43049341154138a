//! Input handling for attendance exports.
//!
//! This module covers everything between the uploaded bytes and a selected
//! employee row: decoding, line tokenizing, month/year detection in the
//! title line and row matching by name.

mod csv_line;
mod month_year;
mod row_matcher;
mod sheet;

pub use csv_line::{parse_csv_line, parse_row};
pub use month_year::MonthYearDetector;
pub use row_matcher::{RowMatch, find_row, full_name, name_column, normalize_name};
pub use sheet::{AttendanceSheet, decode_utf8, non_blank_lines, validate_file_name};
