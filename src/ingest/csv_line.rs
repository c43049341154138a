//! CSV line tokenizer.
//!
//! Attendance exports are not strict RFC 4180: titles are padded with
//! commas, rows are ragged, and quoting is used loosely. Each line is read
//! on its own with a lenient `csv` reader, so tokenizing never fails.

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::models::CsvRow;

/// Splits one line into trimmed fields.
///
/// Fields are comma-delimited. A field starting with `"` is read literally
/// up to the next `"` (there is no escaped-quote form); anything between
/// that quote and the next comma is appended. A missing closing quote
/// swallows the rest of the line. A blank line yields no fields.
///
/// # Examples
///
/// ```
/// use timesheet_engine::ingest::parse_csv_line;
///
/// assert_eq!(parse_csv_line("1, Somchai ,\"Jaidee, S.\""), vec!["1", "Somchai", "Jaidee, S."]);
/// assert_eq!(parse_csv_line("a,\"unterminated, b"), vec!["a", "unterminated, b"]);
/// assert!(parse_csv_line("   ").is_empty());
/// ```
pub fn parse_csv_line(line: &str) -> Vec<String> {
    if line.trim().is_empty() {
        return Vec::new();
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .double_quote(false)
        .trim(Trim::All)
        .from_reader(line.as_bytes());
    let mut record = StringRecord::new();
    // In-memory UTF-8 input cannot fail to read.
    match reader.read_record(&mut record) {
        Ok(true) => record.iter().map(str::to_string).collect(),
        _ => Vec::new(),
    }
}

/// Parses one line into a [`CsvRow`].
pub fn parse_row(line: &str) -> CsvRow {
    CsvRow::new(parse_csv_line(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_plain_fields_are_trimmed() {
        assert_eq!(parse_csv_line(" a , b,c "), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_title_line_keeps_empty_fields() {
        let fields = parse_csv_line(",,,January (2026),,,,");
        assert_eq!(fields.len(), 8);
        assert_eq!(fields[3], "January (2026)");
        assert!(fields[..3].iter().all(String::is_empty));
    }

    #[test]
    fn test_quoted_field_keeps_commas() {
        assert_eq!(
            parse_csv_line("\"Jaidee, Somchai\",5"),
            vec!["Jaidee, Somchai", "5"]
        );
    }

    #[test]
    fn test_quoted_field_is_trimmed_inside() {
        assert_eq!(parse_csv_line("\"  ลาป่วย  \" ,x"), vec!["ลาป่วย", "x"]);
    }

    #[test]
    fn test_ragged_quoted_row_keeps_every_field() {
        assert_eq!(
            parse_csv_line("2,\"สมชาย   ใจดี\",,,ป/ช"),
            vec!["2", "สมชาย   ใจดี", "", "", "ป/ช"]
        );
    }

    #[test]
    fn test_doubled_quote_is_not_an_escape() {
        // The second quote closes the field; the rest is kept verbatim.
        assert_eq!(parse_csv_line("\"a\"\"b\",c"), vec!["a\"b\"", "c"]);
    }

    #[test]
    fn test_text_after_closing_quote_is_appended() {
        assert_eq!(parse_csv_line("\"ab\"cd,e"), vec!["abcd", "e"]);
    }

    #[test]
    fn test_unterminated_quote_consumes_rest_of_line() {
        assert_eq!(parse_csv_line("x,\"y, z"), vec!["x", "y, z"]);
    }

    #[test]
    fn test_trailing_comma_yields_empty_field() {
        assert_eq!(parse_csv_line("a,"), vec!["a", ""]);
    }

    #[test]
    fn test_empty_line_yields_no_fields() {
        assert!(parse_csv_line("").is_empty());
        assert!(parse_row("\t ").is_empty());
    }

    proptest! {
        #[test]
        fn prop_rejoined_plain_fields_round_trip(
            raw in prop::collection::vec("[a-zA-Z0-9ก-ฮ ]{0,12}", 1..10)
        ) {
            let fields: Vec<String> = raw.iter().map(|f| f.trim().to_string()).collect();
            prop_assume!(!(fields.len() == 1 && fields[0].is_empty()));

            prop_assert_eq!(parse_csv_line(&fields.join(",")), fields);
        }
    }
}
