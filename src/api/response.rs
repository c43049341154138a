//! Response types for the timesheet API.
//!
//! This module defines the error response structures and the mapping from
//! engine errors to HTTP statuses and stable error codes.

use axum::{
    Json,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates an invalid query string error response.
    pub fn invalid_query(message: impl Into<String>) -> Self {
        Self::new("INVALID_QUERY", message)
    }
}

/// API error with HTTP status code.
#[derive(Debug)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            Json(self.error),
        )
            .into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { path } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    format!("Configuration file not found: {}", path),
                ),
            },
            EngineError::ConfigParseError { path, message } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration parse error",
                    format!("Failed to parse {}: {}", path, message),
                ),
            },
            EngineError::UnsupportedFileType { .. } => {
                Self::bad_request(ApiError::new("UNSUPPORTED_FILE_TYPE", message))
            }
            EngineError::DecodeError { .. } => {
                Self::bad_request(ApiError::new("DECODE_ERROR", message))
            }
            EngineError::EmptyInput => Self::bad_request(ApiError::new("EMPTY_INPUT", message)),
            EngineError::MonthYearNotDetected { line } => Self::bad_request(ApiError::with_details(
                "MONTH_YEAR_NOT_DETECTED",
                "Could not detect month and year",
                format!("The title line '{}' has no month name followed by a year", line),
            )),
            EngineError::NoDataRows => Self::bad_request(ApiError::new("NO_DATA_ROWS", message)),
            EngineError::MissingSearchName => {
                Self::bad_request(ApiError::new("MISSING_SEARCH_NAME", message))
            }
            EngineError::NoMatchingRow { .. } => {
                Self::bad_request(ApiError::new("NO_MATCHING_ROW", message))
            }
            EngineError::AmbiguousMatch { rows, .. } => Self::bad_request(ApiError::with_details(
                "AMBIGUOUS_MATCH",
                message,
                format!(
                    "Candidate rows: {}",
                    rows.iter().map(usize::to_string).collect::<Vec<_>>().join(", ")
                ),
            )),
        }
    }
}
