//! HTTP API module for the timesheet engine.
//!
//! This module exposes the timesheet pipeline as a single REST endpoint
//! that takes the raw CSV export as the request body.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::TimesheetQuery;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
