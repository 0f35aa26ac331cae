//! Snakediff Kernel - Myers O(ND) difference engine.
//!
//! This crate computes minimal edit scripts between two sequences using a
//! divide-and-conquer middle-snake search, together with the collaborators
//! a line-oriented diff tool needs around it: symbol encoding, patch
//! application, rendering, configuration and logging.

#![warn(clippy::pedantic)]

/// Command line front end.
pub mod cli;
/// Difference engine: middle snake, divide step, optimizer, edit script.
pub mod diff;
/// Text tokenization and symbol codes.
pub mod encoding;
/// Infrastructure components (config, telemetry).
pub mod infrastructure;
/// Reconstruction of B from A and an edit script.
pub mod patch;
/// Normal-format and JSON rendering.
pub mod render;

pub use diff::{DiffAlgorithm, MyersDiff, Operation, diff, diff_text};
