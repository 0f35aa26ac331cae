//! Applying an edit script to reconstruct the second sequence.

use thiserror::Error;

use crate::diff::Operation;

/// Reasons an edit script cannot be applied to the given sequences.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchError {
    /// An operation reaches past the end of A or B.
    #[error("operation {index} is out of bounds ({len_a} elements in A, {len_b} in B)")]
    OutOfBounds {
        /// Position of the operation in the script.
        index: usize,
        /// Length of sequence A.
        len_a: usize,
        /// Length of sequence B.
        len_b: usize,
    },
    /// An operation starts before the previous one ended.
    #[error("operation {index} overlaps the previous operation")]
    Overlapping {
        /// Position of the operation in the script.
        index: usize,
    },
}

/// Rebuilds `b` from `a` and the operations returned by a diff of the two.
///
/// Operations are applied in ascending order: elements of `a` between
/// operations are copied, each operation skips `delete_a` elements of `a`
/// and copies `insert_b` elements of `b` starting at `start_b`.
///
/// # Errors
///
/// Returns [`PatchError`] if the operations are unordered or do not fit the
/// sequences.
pub fn apply<T: Clone>(a: &[T], b: &[T], ops: &[Operation]) -> Result<Vec<T>, PatchError> {
    let mut out = Vec::with_capacity(b.len());
    let mut pos_a = 0;

    for (index, op) in ops.iter().enumerate() {
        let (end_a, end_b) = checked_ends(index, op, pos_a, a.len(), b.len())?;
        out.extend_from_slice(&a[pos_a..op.start_a]);
        out.extend_from_slice(&b[op.start_b..end_b]);
        pos_a = end_a;
    }

    out.extend_from_slice(&a[pos_a..]);
    Ok(out)
}

/// Validates `op` against the sequence lengths and the end of the previous
/// operation, returning its exclusive ends in A and B.
fn checked_ends(
    index: usize,
    op: &Operation,
    end_prev: usize,
    len_a: usize,
    len_b: usize,
) -> Result<(usize, usize), PatchError> {
    if op.start_a < end_prev {
        return Err(PatchError::Overlapping { index });
    }
    match (
        op.start_a.checked_add(op.delete_a),
        op.start_b.checked_add(op.insert_b),
    ) {
        (Some(end_a), Some(end_b)) if end_a <= len_a && end_b <= len_b => Ok((end_a, end_b)),
        _ => Err(PatchError::OutOfBounds {
            index,
            len_a,
            len_b,
        }),
    }
}

/// Applies `ops` in place on `target`, which starts as a copy of `a`.
///
/// Tracks the running `(insert_b - delete_a)` offset of earlier operations
/// to translate positions of A into positions of the partly edited target.
///
/// # Errors
///
/// Same conditions as [`apply`].
pub fn apply_in_place<T: Clone>(
    target: &mut Vec<T>,
    b: &[T],
    ops: &[Operation],
) -> Result<(), PatchError> {
    let len_a = target.len();
    let mut offset: isize = 0;
    let mut end_prev = 0;

    for (index, op) in ops.iter().enumerate() {
        let (end_a, end_b) = checked_ends(index, op, end_prev, len_a, b.len())?;
        let at = op.start_a.wrapping_add_signed(offset);
        target.splice(at..at + op.delete_a, b[op.start_b..end_b].iter().cloned());
        offset += op.insert_b as isize - op.delete_a as isize;
        end_prev = end_a;
    }

    Ok(())
}
