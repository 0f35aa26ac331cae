//! Difference engine for ordered sequences of comparable symbols.
//!
//! The engine follows "An O(ND) Difference Algorithm and its Variations"
//! (Myers, 1986): a divide-and-conquer search for the middle snake that marks
//! every element outside the longest common subsequence, followed by a
//! boundary shift for readability and a scan that turns the marker arrays
//! into an edit script.
//!
//! # Example
//!
//! ```
//! use snakediff_kernel::diff::{Operation, diff};
//!
//! let ops = diff(&[1, 2, 3], &[1, 3, 4]);
//! assert_eq!(
//!     ops,
//!     vec![
//!         Operation { start_a: 1, start_b: 1, delete_a: 1, insert_b: 0 },
//!         Operation { start_a: 3, start_b: 2, delete_a: 0, insert_b: 1 },
//!     ]
//! );
//! ```

pub mod error;
pub mod myers;
pub mod script;
pub mod sequence;

pub use error::DiffError;
pub use myers::{BufferPool, DiffConfig, MyersDiff, WorkBuffers};
pub use sequence::SequenceData;

use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::encoding::{Symbol, SymbolTable, TextOptions};

/// One contiguous edit: `delete_a` elements of A removed at `start_a`, and
/// `insert_b` elements of B (starting at `start_b`) inserted in their place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Operation {
    /// Start position in sequence A (0-based).
    pub start_a: usize,
    /// Start position in sequence B (0-based).
    pub start_b: usize,
    /// Number of elements deleted from A.
    pub delete_a: usize,
    /// Number of elements inserted from B.
    pub insert_b: usize,
}

impl Operation {
    /// Exclusive end of the deleted range in A.
    #[must_use]
    pub const fn end_a(&self) -> usize {
        self.start_a + self.delete_a
    }

    /// Exclusive end of the inserted range in B.
    #[must_use]
    pub const fn end_b(&self) -> usize {
        self.start_b + self.insert_b
    }

    /// True if the operation only removes elements.
    #[must_use]
    pub const fn is_deletion(&self) -> bool {
        self.delete_a > 0 && self.insert_b == 0
    }

    /// True if the operation only adds elements.
    #[must_use]
    pub const fn is_insertion(&self) -> bool {
        self.delete_a == 0 && self.insert_b > 0
    }
}

/// Trait for diff algorithms.
///
/// Implementations compute an ordered, non-overlapping list of operations
/// that transform `a` into `b`. The `Send + Sync` bound lets one algorithm
/// object serve diffs on several threads at once.
pub trait DiffAlgorithm: Send + Sync {
    /// Computes the edit script between two sequences of symbol codes.
    fn diff(&self, a: &[Symbol], b: &[Symbol]) -> Vec<Operation>;
}

/// Computes the edit script between `a` and `b`.
///
/// Allocates work buffers sized for this call and applies the boundary
/// optimizer to both sequences.
#[must_use]
pub fn diff<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Operation> {
    let mut buffers = WorkBuffers::for_lengths(a.len(), b.len());
    myers::run(a, b, &mut buffers, DiffConfig::default())
}

/// Computes the edit script between `a` and `b` using caller-owned buffers.
///
/// # Errors
///
/// Returns [`DiffError::BufferTooSmall`] if `buffers` cannot hold
/// `2 * (a.len() + b.len() + 1) + 2` entries per vector.
pub fn diff_with_buffers<T: PartialEq>(
    a: &[T],
    b: &[T],
    buffers: &mut WorkBuffers,
) -> Result<Vec<Operation>, DiffError> {
    buffers.check_capacity(a.len(), b.len())?;
    Ok(myers::run(a, b, buffers, DiffConfig::default()))
}

/// Diffs two texts after encoding them into symbol codes.
///
/// Both texts are encoded through one shared [`SymbolTable`] so that equal
/// tokens receive equal codes.
#[instrument(skip(text_a, text_b), fields(len_a = text_a.len(), len_b = text_b.len()))]
pub fn diff_text(text_a: &str, text_b: &str, options: &TextOptions) -> Vec<Operation> {
    let mut table = SymbolTable::new();
    let codes_a = table.encode(text_a, options);
    let codes_b = table.encode(text_b, options);
    debug!(symbols = table.len(), "encoded texts");

    diff(&codes_a, &codes_b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_empty() {
        let empty: [u32; 0] = [];
        assert!(diff(&empty, &empty).is_empty());
    }

    #[test]
    fn test_identical_sequences() {
        assert!(diff(&[1, 2, 3], &[1, 2, 3]).is_empty());
    }

    #[test]
    fn test_everything_deleted() {
        assert_eq!(
            diff(&[1, 2, 3], &[]),
            vec![Operation {
                start_a: 0,
                start_b: 0,
                delete_a: 3,
                insert_b: 0,
            }]
        );
    }

    #[test]
    fn test_everything_inserted() {
        assert_eq!(
            diff(&[], &[1, 2, 3]),
            vec![Operation {
                start_a: 0,
                start_b: 0,
                delete_a: 0,
                insert_b: 3,
            }]
        );
    }

    #[test]
    fn test_operation_helpers() {
        let op = Operation {
            start_a: 2,
            start_b: 3,
            delete_a: 4,
            insert_b: 0,
        };
        assert_eq!(op.end_a(), 6);
        assert_eq!(op.end_b(), 3);
        assert!(op.is_deletion());
        assert!(!op.is_insertion());
    }

    #[test]
    fn test_diff_with_small_buffers_is_rejected() {
        let mut buffers = WorkBuffers::for_lengths(1, 1);
        let err = diff_with_buffers(&[1, 2, 3], &[4, 5], &mut buffers).unwrap_err();
        assert_eq!(
            err,
            DiffError::BufferTooSmall {
                required: 14,
                actual: 8,
            }
        );
    }

    #[test]
    fn test_diff_with_reused_buffers() {
        let mut buffers = WorkBuffers::for_lengths(8, 8);
        let first = diff_with_buffers(&[1, 2, 3, 4], &[1, 3, 4, 5], &mut buffers).unwrap();
        let second = diff_with_buffers(&[1, 2, 3, 4], &[1, 3, 4, 5], &mut buffers).unwrap();
        assert_eq!(first, second);
        assert_eq!(first, diff(&[1, 2, 3, 4], &[1, 3, 4, 5]));
    }

    #[test]
    fn test_operation_serializes_with_field_names() {
        let op = Operation {
            start_a: 1,
            start_b: 2,
            delete_a: 3,
            insert_b: 4,
        };
        let json = serde_json::to_string(&op).unwrap();
        assert_eq!(
            json,
            r#"{"start_a":1,"start_b":2,"delete_a":3,"insert_b":4}"#
        );
    }
}
