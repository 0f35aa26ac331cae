//! Errors reported by the difference engine.

use thiserror::Error;

/// Caller errors detected before the search starts.
///
/// Search exhaustion is not represented here: it can only follow from a
/// broken implementation and aborts the computation instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DiffError {
    /// The down/up work vectors cannot cover every diagonal of the input.
    #[error("work buffers too small: need {required} entries per vector, have {actual}")]
    BufferTooSmall {
        /// Entries required per vector, `2 * (len_a + len_b + 1) + 2`.
        required: usize,
        /// Entries available in the smaller of the two vectors.
        actual: usize,
    },
}
