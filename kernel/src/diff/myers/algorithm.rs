//! Divide-and-conquer driver for the Myers algorithm.
//!
//! Boxes are processed from an explicit work stack instead of the call
//! stack, so adversarial inputs cannot exhaust the thread's stack. The left
//! half of every split is handled before the right half, the same order a
//! recursive implementation visits them.

use tracing::{debug, trace};

use super::buffers::{BufferPool, WorkBuffers};
use super::optimization::shift_boundaries;
use super::snake::{Bounds, middle_snake};
use crate::diff::script::build_script;
use crate::diff::{DiffAlgorithm, Operation, SequenceData};
use crate::encoding::Symbol;

/// Tuning knobs for [`MyersDiff`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffConfig {
    /// Move modified runs forward when the following element equals the
    /// run's first element. Changes which of several minimal scripts is
    /// reported, never its size.
    pub shift_boundaries: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            shift_boundaries: true,
        }
    }
}

/// Myers diff algorithm with pooled work buffers.
#[derive(Debug, Default)]
pub struct MyersDiff {
    config: DiffConfig,
    pool: BufferPool,
}

impl MyersDiff {
    /// Creates an instance with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an instance with the given configuration.
    #[must_use]
    pub fn with_config(config: DiffConfig) -> Self {
        Self {
            config,
            pool: BufferPool::default(),
        }
    }

    /// The configuration in use.
    #[must_use]
    pub const fn config(&self) -> DiffConfig {
        self.config
    }

    /// Diffs any comparable element type, not only symbol codes.
    pub fn diff_slices<T: PartialEq>(&self, a: &[T], b: &[T]) -> Vec<Operation> {
        let mut buffers = self.pool.checkout(a.len(), b.len());
        run(a, b, &mut buffers, self.config)
    }
}

impl DiffAlgorithm for MyersDiff {
    fn diff(&self, a: &[Symbol], b: &[Symbol]) -> Vec<Operation> {
        self.diff_slices(a, b)
    }
}

/// Full pipeline: mark, optionally shift boundaries, build the script.
///
/// `buffers` must already be sized for `a` and `b`.
pub(crate) fn run<T: PartialEq>(
    a: &[T],
    b: &[T],
    buffers: &mut WorkBuffers,
    config: DiffConfig,
) -> Vec<Operation> {
    debug!(len_a = a.len(), len_b = b.len(), "computing diff");

    let mut seq_a = SequenceData::new(a);
    let mut seq_b = SequenceData::new(b);

    mark_modified(&mut seq_a, &mut seq_b, buffers);
    if config.shift_boundaries {
        shift_boundaries(&mut seq_a);
        shift_boundaries(&mut seq_b);
    }

    let ops = build_script(&seq_a, &seq_b);
    debug!(operations = ops.len(), "diff complete");
    ops
}

/// Flags every element of `a` and `b` that is not part of the longest
/// common subsequence.
pub fn mark_modified<T: PartialEq>(
    a: &mut SequenceData<'_, T>,
    b: &mut SequenceData<'_, T>,
    buffers: &mut WorkBuffers,
) {
    let mut pending = vec![Bounds::full(a.len(), b.len())];

    while let Some(mut bounds) = pending.pop() {
        // equal elements at the start
        while !bounds.a_is_empty()
            && !bounds.b_is_empty()
            && a.get(bounds.lower_a) == b.get(bounds.lower_b)
        {
            bounds.lower_a += 1;
            bounds.lower_b += 1;
        }

        // equal elements at the end
        while !bounds.a_is_empty()
            && !bounds.b_is_empty()
            && a.get(bounds.upper_a - 1) == b.get(bounds.upper_b - 1)
        {
            bounds.upper_a -= 1;
            bounds.upper_b -= 1;
        }

        if bounds.a_is_empty() {
            b.mark_range(bounds.lower_b..bounds.upper_b);
        } else if bounds.b_is_empty() {
            a.mark_range(bounds.lower_a..bounds.upper_a);
        } else {
            let snake = middle_snake(a, b, bounds, buffers);
            trace!(x = snake.x, y = snake.y, "split at middle snake");

            // right half pushed first so the left half is processed next
            pending.push(Bounds {
                lower_a: snake.x,
                upper_a: bounds.upper_a,
                lower_b: snake.y,
                upper_b: bounds.upper_b,
            });
            pending.push(Bounds {
                lower_a: bounds.lower_a,
                upper_a: snake.x,
                lower_b: bounds.lower_b,
                upper_b: snake.y,
            });
        }
    }
}
