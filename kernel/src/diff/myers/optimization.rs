//! Myers diff post-processing.
//!
//! If a run of modified elements starts with the same symbol as the element
//! that follows the run, the run is moved one position forward. Repeating
//! this yields scripts whose changes sit after the shared context, which is
//! how line-oriented diff tools usually present them.

use crate::diff::SequenceData;

/// Shifts each modified run forward while its first element equals the
/// element right after it.
///
/// Only positions move; the number of modified elements stays the same.
pub fn shift_boundaries<T: PartialEq>(seq: &mut SequenceData<'_, T>) {
    let len = seq.len();
    let mut start = 0;

    while start < len {
        while start < len && !seq.is_modified(start) {
            start += 1;
        }
        let mut end = start;
        while end < len && seq.is_modified(end) {
            end += 1;
        }

        if end < len && seq.get(start) == seq.get(end) {
            seq.unmark(start);
            seq.mark(end);
        } else {
            start = end;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shifted(data: &[u32], modified: &[usize]) -> Vec<bool> {
        let mut seq = SequenceData::new(data);
        for &i in modified {
            seq.mark(i);
        }
        shift_boundaries(&mut seq);
        seq.markers().to_vec()
    }

    #[test]
    fn test_run_moves_past_equal_context() {
        // a [a] b stays: the run is followed by `b`
        assert_eq!(shifted(&[1, 1, 2], &[1]), vec![false, true, false]);
        // [a] a b -> a [a] b
        assert_eq!(shifted(&[1, 1, 2], &[0]), vec![false, true, false]);
    }

    #[test]
    fn test_run_slides_through_repeats() {
        assert_eq!(
            shifted(&[1, 1, 1, 1], &[0]),
            vec![false, false, false, true]
        );
    }

    #[test]
    fn test_multi_element_run() {
        // [x y] x y z -> x y [x y] z
        assert_eq!(
            shifted(&[7, 8, 7, 8, 9], &[0, 1]),
            vec![false, false, true, true, false]
        );
    }

    #[test]
    fn test_run_at_end_is_untouched() {
        assert_eq!(shifted(&[1, 2, 2], &[1, 2]), vec![false, true, true]);
    }

    #[test]
    fn test_count_is_preserved() {
        let data = [3, 1, 3, 1, 3, 2, 2, 2, 4];
        let modified = [0, 1, 5];
        let result = shifted(&data, &modified);
        assert_eq!(result.iter().filter(|m| **m).count(), modified.len());
    }

    #[test]
    fn test_nothing_modified() {
        assert_eq!(shifted(&[1, 2, 3], &[]), vec![false, false, false]);
    }
}
