//! CSV row model.

use serde::{Deserialize, Serialize};

/// One parsed line of the attendance export.
///
/// Cells carry no column typing. Reading past the end of a short row
/// yields an empty cell.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::CsvRow;
///
/// let row = CsvRow::new(vec!["1".to_string(), "Somchai".to_string()]);
/// assert_eq!(row.cell(1), "Somchai");
/// assert_eq!(row.cell(7), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CsvRow(Vec<String>);

impl CsvRow {
    /// Creates a row from its cells.
    pub fn new(cells: Vec<String>) -> Self {
        Self(cells)
    }

    /// Returns the cell at `index`, or `""` when the row is shorter.
    pub fn cell(&self, index: usize) -> &str {
        self.0.get(index).map(String::as_str).unwrap_or("")
    }

    /// Returns all cells.
    pub fn cells(&self) -> &[String] {
        &self.0
    }

    /// Returns the number of cells present.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the row has no cells.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for CsvRow {
    fn from(cells: Vec<String>) -> Self {
        Self(cells)
    }
}

impl<'a> From<Vec<&'a str>> for CsvRow {
    fn from(cells: Vec<&'a str>) -> Self {
        Self(cells.into_iter().map(str::to_string).collect())
    }
}
