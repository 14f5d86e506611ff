//! Comprehensive Ranking System (CRS) scoring engine.
//!
//! The `scoring` module turns a form-encoded [`scoring::ApplicantInput`] into an itemized
//! [`scoring::ScoreBreakdown`]. Configuration, telemetry, and the application error type are
//! shared with the `crs-api` service.

pub mod config;
pub mod error;
pub mod scoring;
pub mod telemetry;
