//! Myers diff algorithm implementation.
//!
//! Myers' algorithm has O(ND) time complexity, where N is the sum of the
//! lengths of the two sequences and D is the number of differences. It is
//! fastest when the two inputs are similar.
//!
//! This variant works on index ranges of the original sequences instead of
//! copying sub-slices, and reports the result as marker flags that
//! [`crate::diff::script`] turns into operations.

pub mod algorithm;
pub mod buffers;
pub mod optimization;
pub mod snake;

// Re-export main types
pub use algorithm::{DiffConfig, MyersDiff, mark_modified};
pub use buffers::{BufferPool, PooledBuffers, WorkBuffers};
pub use optimization::shift_boundaries;
pub use snake::{Bounds, MiddleSnake, middle_snake};

pub(crate) use algorithm::run;
