//! Edit script extraction from marker arrays.

use crate::diff::{Operation, SequenceData};

/// Scans the markers of both sequences and produces the operations in
/// forward order.
///
/// Runs of modified elements that meet at the same position in both
/// sequences are merged into a single operation.
#[must_use]
pub fn build_script<T>(a: &SequenceData<'_, T>, b: &SequenceData<'_, T>) -> Vec<Operation> {
    debug_assert_eq!(
        a.unmodified_count(),
        b.unmodified_count(),
        "both sequences must keep the same number of common elements"
    );

    let (len_a, len_b) = (a.len(), b.len());
    let (mut line_a, mut line_b) = (0, 0);
    let mut ops = Vec::new();

    while line_a < len_a || line_b < len_b {
        if line_a < len_a && !a.is_modified(line_a) && line_b < len_b && !b.is_modified(line_b) {
            line_a += 1;
            line_b += 1;
            continue;
        }

        let (start_a, start_b) = (line_a, line_b);
        while line_a < len_a && (line_b >= len_b || a.is_modified(line_a)) {
            line_a += 1;
        }
        while line_b < len_b && (line_a >= len_a || b.is_modified(line_b)) {
            line_b += 1;
        }

        if start_a < line_a || start_b < line_b {
            ops.push(Operation {
                start_a,
                start_b,
                delete_a: line_a - start_a,
                insert_b: line_b - start_b,
            });
        }
    }

    ops
}
