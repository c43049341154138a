//! Application state for the timesheet API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::engine::TimesheetEngine;

/// Shared application state.
///
/// Holds the immutable engine, built once from the loaded configuration.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<TimesheetEngine>,
}

impl AppState {
    /// Creates a new application state around an engine.
    pub fn new(engine: TimesheetEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns the shared engine.
    pub fn engine(&self) -> &TimesheetEngine {
        &self.engine
    }
}
