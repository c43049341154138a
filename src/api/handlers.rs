//! HTTP request handlers for the timesheet API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    body::Bytes,
    extract::{Query, State, rejection::QueryRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::RandomClockIn;
use crate::engine::TimesheetRequest;
use crate::error::EngineResult;
use crate::ingest::validate_file_name;
use crate::models::TimesheetResult;

use super::request::TimesheetQuery;
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/timesheet", post(timesheet_handler))
        .with_state(state)
}

/// Handler for POST /timesheet endpoint.
///
/// Takes the CSV export as the raw body and the employee name and options
/// in the query string; returns the summary, counters and report.
async fn timesheet_handler(
    State(state): State<AppState>,
    query: Result<Query<TimesheetQuery>, QueryRejection>,
    body: Bytes,
) -> Response {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, bytes = body.len(), "Processing timesheet request");

    let query = match query {
        Ok(Query(query)) => query,
        Err(rejection) => {
            warn!(
                correlation_id = %correlation_id,
                error = %rejection.body_text(),
                "Invalid query string"
            );
            return ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::invalid_query(rejection.body_text()),
            }
            .into_response();
        }
    };

    let start_time = Instant::now();
    match build_timesheet(&state, &query, &body) {
        Ok(result) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                month = %result.summary.month_label,
                row = result.summary.row_index,
                working_days = result.summary.working_day_count,
                duration_us = duration.as_micros(),
                "Timesheet completed successfully"
            );
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(result),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Timesheet request rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Runs the pipeline for one request.
fn build_timesheet(
    state: &AppState,
    query: &TimesheetQuery,
    body: &[u8],
) -> EngineResult<TimesheetResult> {
    if let Some(file_name) = &query.file_name {
        validate_file_name(file_name)?;
    }

    let mut clock_in = match query.seed {
        Some(seed) => RandomClockIn::seeded(seed),
        None => RandomClockIn::from_entropy(),
    };
    let request = TimesheetRequest::from(query);
    state.engine().process_bytes(body, &request, &mut clock_in)
}
