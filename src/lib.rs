//! Monthly timesheet engine for attendance CSV exports.
//!
//! This crate reads an attendance export, finds one employee's row by
//! name, works out the official working days of the detected month and
//! turns the per-day leave annotations into a printable timesheet with
//! present, personal, sick and absent counters.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod ingest;
pub mod models;
