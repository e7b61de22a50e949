//! # weft Telemetry
//!
//! Installs the `tracing` subscriber that the default logger writes into.

pub mod logging;

pub use logging::{filter_directive, init, TelemetryError};
