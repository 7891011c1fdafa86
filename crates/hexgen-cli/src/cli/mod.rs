//! Everything around the generator core: argument parsing and validation,
//! logging setup and human-readable reporting.
//!
//! ## Structure
//!
//! - [`config`] - CLI arguments and the validated [`config::GeneratorConfig`].
//! - [`telemetry`] - `tracing` subscriber setup.
//! - [`units`] - Byte-size formatting for reports.

pub mod config;
pub mod telemetry;
pub mod units;
