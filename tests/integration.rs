//! Integration tests for the timesheet engine.
//!
//! This test suite drives the HTTP API and the library pipeline against
//! the fixture exports in `tests/fixtures/` and the shipped `config/th`:
//! - Month/year detection (parenthesized year, misspelled month, BOM)
//! - Working days with configured holidays
//! - Leave-code counting and remarks
//! - Row matching (exact, partial, ambiguous)
//! - Error cases

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;
use tower::ServiceExt;

use timesheet_engine::api::{AppState, create_router};
use timesheet_engine::calculation::FixedClockIn;
use timesheet_engine::config::ConfigLoader;
use timesheet_engine::engine::{TimesheetEngine, TimesheetRequest};
use timesheet_engine::error::EngineError;
use timesheet_engine::models::{LeaveCode, TimesheetResult};

// =============================================================================
// Test Helpers
// =============================================================================

fn create_engine() -> TimesheetEngine {
    let config = ConfigLoader::load("./config/th")
        .expect("Failed to load config")
        .into_config();
    TimesheetEngine::new(config).expect("Failed to build engine")
}

fn create_router_for_test() -> Router {
    create_router(AppState::new(create_engine()))
}

fn fixture(name: &str) -> Vec<u8> {
    std::fs::read(format!("./tests/fixtures/{}", name)).expect("Failed to read fixture")
}

fn decimal(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Percent-encodes a query value.
fn encode(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{:02X}", b),
        })
        .collect()
}

fn timesheet_uri(first_name: &str, last_name: &str, extra: &str) -> String {
    format!(
        "/timesheet?first_name={}&last_name={}{}",
        encode(first_name),
        encode(last_name),
        extra
    )
}

async fn post_timesheet(router: Router, uri: &str, body: Vec<u8>) -> (StatusCode, Value) {
    let response = router
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .header("Content-Type", "text/csv")
                .body(Body::from(body))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json: Value = serde_json::from_slice(&body_bytes).unwrap();

    (status, json)
}

fn run(fixture_name: &str, request: &TimesheetRequest) -> Result<TimesheetResult, EngineError> {
    create_engine().process_bytes(&fixture(fixture_name), request, &mut FixedClockIn(30))
}

// =============================================================================
// HTTP API
// =============================================================================

#[tokio::test]
async fn test_january_fixture_over_http() {
    let uri = timesheet_uri("สมชาย", "ใจดี", "&identifier=EMP-002&file_name=january_2026.csv");
    let (status, json) = post_timesheet(create_router_for_test(), &uri, fixture("january_2026.csv")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["summary"]["month_label"], "January 2026");
    assert_eq!(json["summary"]["row_index"], 2);
    assert_eq!(json["summary"]["working_day_count"], 21);
    assert_eq!(json["report"]["month_label"], "มกราคม 2569");
    assert_eq!(json["report"]["full_name"], "สมชาย ใจดี");
    assert_eq!(json["report"]["identifier"], "EMP-002");
    assert_eq!(json["report"]["counters"]["sick"], "1.5");
    assert_eq!(json["report"]["counters"]["absent"], "1");
    assert_eq!(json["report"]["counters"]["present"], "18.5");
    assert_eq!(json["report"]["counters"]["personal"], "0");
}

#[tokio::test]
async fn test_generated_times_over_http() {
    let uri = timesheet_uri("สมชาย", "ใจดี", "&generate_times=true&seed=2026");
    let (status, json) = post_timesheet(create_router_for_test(), &uri, fixture("january_2026.csv")).await;

    assert_eq!(status, StatusCode::OK);
    let rows = json["report"]["rows"].as_array().unwrap();
    // 5/1 is a full sick day
    let sick_day = rows.iter().find(|r| r["date"] == "5/1/2569").unwrap();
    assert_eq!(sick_day["time_in"], "");
    assert_eq!(sick_day["time_out"], "");
    // 9/1 is an afternoon of sick leave
    let half_day = rows.iter().find(|r| r["date"] == "9/1/2569").unwrap();
    assert_eq!(half_day["time_out"], "12:00");
    let first = &rows[0];
    assert_eq!(first["date"], "2/1/2569");
    assert_eq!(first["time_out"], "16:30");
    let time_in = first["time_in"].as_str().unwrap();
    assert!(("07:00"..="08:30").contains(&time_in), "{}", time_in);
}

#[tokio::test]
async fn test_ambiguous_name_over_http() {
    let uri = timesheet_uri("สม", "", "");
    let (status, json) = post_timesheet(create_router_for_test(), &uri, fixture("january_2026.csv")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "AMBIGUOUS_MATCH");
    assert_eq!(json["details"], "Candidate rows: 2, 3, 4");
}

#[tokio::test]
async fn test_missing_month_over_http() {
    let uri = timesheet_uri("สมชาย", "ใจดี", "");
    let (status, json) = post_timesheet(create_router_for_test(), &uri, fixture("no_month.csv")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MONTH_YEAR_NOT_DETECTED");
}

#[tokio::test]
async fn test_title_only_over_http() {
    let uri = timesheet_uri("สมชาย", "ใจดี", "");
    let (status, json) = post_timesheet(create_router_for_test(), &uri, fixture("title_only.csv")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "NO_DATA_ROWS");
}

#[tokio::test]
async fn test_empty_body_over_http() {
    let uri = timesheet_uri("สมชาย", "ใจดี", "");
    let (status, json) = post_timesheet(create_router_for_test(), &uri, Vec::new()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "EMPTY_INPUT");
}

#[tokio::test]
async fn test_missing_name_over_http() {
    let (status, json) =
        post_timesheet(create_router_for_test(), "/timesheet", fixture("january_2026.csv")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "MISSING_SEARCH_NAME");
}

#[tokio::test]
async fn test_unsupported_file_type_over_http() {
    let uri = timesheet_uri("สมชาย", "ใจดี", "&file_name=january.xlsx");
    let (status, json) = post_timesheet(create_router_for_test(), &uri, fixture("january_2026.csv")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "UNSUPPORTED_FILE_TYPE");
}

// =============================================================================
// Library pipeline
// =============================================================================

#[test]
fn test_january_day_records_include_weekend_leave() {
    let result = run("january_2026.csv", &TimesheetRequest::new("สมชาย", "ใจดี")).unwrap();

    let days: Vec<u32> = result.day_records.iter().map(|r| r.day).collect();
    assert_eq!(days, vec![3, 5, 9, 20, 22]);
    assert_eq!(result.day_records[0].code, Some(LeaveCode::FullDayPersonal));
    assert_eq!(
        result.day_records[4].code,
        Some(LeaveCode::Unrecognized("ไปราชการ".to_string()))
    );
    // Saturday leave is not counted
    assert_eq!(result.counters.personal, decimal("0"));
}

#[test]
fn test_january_remarks_use_labels_and_raw_text() {
    let result = run("january_2026.csv", &TimesheetRequest::new("สมชาย", "ใจดี")).unwrap();
    let remark = |date: &str| {
        result
            .report
            .rows
            .iter()
            .find(|r| r.date == date)
            .map(|r| r.remark.clone())
            .unwrap()
    };

    assert_eq!(remark("5/1/2569"), "ลาป่วยทั้งวัน");
    assert_eq!(remark("9/1/2569"), "ลาป่วยครึ่งวันบ่าย");
    assert_eq!(remark("20/1/2569"), "ขาดราชการ");
    assert_eq!(remark("22/1/2569"), "ไปราชการ");
    assert_eq!(remark("23/1/2569"), "");
}

#[test]
fn test_new_year_holiday_and_weekends_excluded() {
    let result = run("january_2026.csv", &TimesheetRequest::new("สมชาย", "ใจดี")).unwrap();
    let days = &result.summary.working_days;

    assert!(!days.contains(&1));
    assert!(days.contains(&2));
    assert!(!days.contains(&3));
    assert!(!days.contains(&4));
    assert_eq!(result.counters.total(), Decimal::from(days.len()));
}

#[test]
fn test_half_day_personal_counts() {
    let result = run("january_2026.csv", &TimesheetRequest::new("มานี", "มีนา")).unwrap();

    assert_eq!(result.summary.row_index, 1);
    assert_eq!(result.counters.personal, decimal("1.5"));
    assert_eq!(result.counters.present, decimal("19.5"));
}

#[test]
fn test_exact_match_beats_partial_match() {
    let result = run("january_2026.csv", &TimesheetRequest::new("สมหญิง", "ใจดี")).unwrap();
    assert_eq!(result.summary.row_index, 3);
    assert_eq!(result.counters.sick, decimal("0"));
}

#[test]
fn test_quoted_name_matches_partially() {
    let result = run("january_2026.csv", &TimesheetRequest::new("ใจดีมาก", "")).unwrap();
    assert_eq!(result.summary.row_index, 4);
    assert_eq!(result.counters.sick, decimal("0.5"));
}

#[test]
fn test_bom_crlf_and_misspelled_month() {
    let result = run("february_2026_bom.csv", &TimesheetRequest::new("Ann", "Lee")).unwrap();

    assert_eq!(result.summary.month_label, "February 2026");
    assert_eq!(result.report.month_label, "กุมภาพันธ์ 2569");
    assert_eq!(result.summary.working_day_count, 20);
    assert_eq!(result.counters.sick, decimal("1"));
    assert_eq!(result.counters.personal, decimal("0.5"));
    assert_eq!(result.counters.absent, decimal("1"));
    assert_eq!(result.report.counters.present, "17.5");
}

#[test]
fn test_report_renders_printable_table() {
    let request = TimesheetRequest::new("Ann", "Lee")
        .with_identifier("A-1")
        .with_generated_times(true);
    let result = run("february_2026_bom.csv", &request).unwrap();
    let text = result.report.to_string();

    assert!(text.starts_with("กุมภาพันธ์ 2569\n"));
    assert!(text.contains("Ann Lee  A-1"));
    assert!(text.contains("2/2/2569"));
    assert!(text.contains("07:30"));
    assert!(text.ends_with("Present: 17.5  Personal: 0.5  Sick: 1  Absent: 1"));
}

#[test]
fn test_no_month_aborts() {
    let result = run("no_month.csv", &TimesheetRequest::new("สมชาย", "ใจดี"));
    match result {
        Err(EngineError::MonthYearNotDetected { line }) => assert_eq!(line, "Attendance Report"),
        other => panic!("Expected MonthYearNotDetected, got {:?}", other),
    }
}
