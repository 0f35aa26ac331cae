//! Configuration and telemetry for the `snakediff` binary.

pub mod config;
pub mod telemetry;
