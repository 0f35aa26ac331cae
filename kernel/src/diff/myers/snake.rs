//! Shortest middle snake search.
//!
//! Runs the forward search from `(lower_a, lower_b)` and the reverse search
//! from `(upper_a, upper_b)` one D-step at a time until the two paths overlap
//! on some diagonal. The overlap point lies on a shortest edit path and is
//! used to split the box in two.

use tracing::trace;

use super::buffers::WorkBuffers;
use crate::diff::SequenceData;

/// Sub-ranges of A and B under investigation; upper bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    /// First index in A.
    pub lower_a: usize,
    /// One past the last index in A.
    pub upper_a: usize,
    /// First index in B.
    pub lower_b: usize,
    /// One past the last index in B.
    pub upper_b: usize,
}

impl Bounds {
    /// Bounds covering both sequences completely.
    #[must_use]
    pub const fn full(len_a: usize, len_b: usize) -> Self {
        Self {
            lower_a: 0,
            upper_a: len_a,
            lower_b: 0,
            upper_b: len_b,
        }
    }

    /// True if the A range holds no elements.
    #[must_use]
    pub const fn a_is_empty(&self) -> bool {
        self.lower_a == self.upper_a
    }

    /// True if the B range holds no elements.
    #[must_use]
    pub const fn b_is_empty(&self) -> bool {
        self.lower_b == self.upper_b
    }
}

/// Point where the forward and reverse searches met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MiddleSnake {
    /// Split position in A.
    pub x: usize,
    /// Split position in B.
    pub y: usize,
}

/// Finds the middle snake of the box described by `bounds`.
///
/// Both ranges must be non-empty and `buffers` must be sized for the full
/// lengths of `a` and `b`.
///
/// # Panics
///
/// Panics if the searches never overlap within `(N + M) / 2 + 1` rounds.
/// The algorithm guarantees an overlap, so this only fires on corrupted
/// buffers or miscomputed bounds.
pub fn middle_snake<T: PartialEq>(
    a: &SequenceData<'_, T>,
    b: &SequenceData<'_, T>,
    bounds: Bounds,
    buffers: &mut WorkBuffers,
) -> MiddleSnake {
    trace!(
        lower_a = bounds.lower_a,
        upper_a = bounds.upper_a,
        lower_b = bounds.lower_b,
        upper_b = bounds.upper_b,
        "searching box"
    );

    let max = (a.len() + b.len() + 1) as isize;
    let lower_a = bounds.lower_a as isize;
    let upper_a = bounds.upper_a as isize;
    let lower_b = bounds.lower_b as isize;
    let upper_b = bounds.upper_b as isize;

    // k-lines the forward and reverse searches start on
    let down_k = lower_a - lower_b;
    let up_k = upper_a - upper_b;

    let delta = (upper_a - lower_a) - (upper_b - lower_b);
    let odd_delta = delta & 1 != 0;

    let down_offset = max - down_k;
    let up_offset = max - up_k;
    let max_d = (upper_a - lower_a + upper_b - lower_b) / 2 + 1;

    let WorkBuffers { down, up } = buffers;
    let di = |k: isize| (down_offset + k) as usize;
    let ui = |k: isize| (up_offset + k) as usize;
    let equal = |x: isize, y: isize| a.get(x as usize) == b.get(y as usize);

    down[di(down_k + 1)] = lower_a;
    up[ui(up_k - 1)] = upper_a;

    for d in 0..=max_d {
        // forward path
        let mut k = down_k - d;
        while k <= down_k + d {
            let mut x = if k == down_k - d {
                down[di(k + 1)]
            } else {
                let right = down[di(k - 1)] + 1;
                if k < down_k + d && down[di(k + 1)] >= right {
                    down[di(k + 1)]
                } else {
                    right
                }
            };
            let mut y = x - k;

            while x < upper_a && y < upper_b && equal(x, y) {
                x += 1;
                y += 1;
            }
            down[di(k)] = x;

            if odd_delta && up_k - d < k && k < up_k + d && up[ui(k)] <= down[di(k)] {
                return MiddleSnake {
                    x: down[di(k)] as usize,
                    y: (down[di(k)] - k) as usize,
                };
            }
            k += 2;
        }

        // reverse path
        let mut k = up_k - d;
        while k <= up_k + d {
            let mut x = if k == up_k + d {
                up[ui(k - 1)]
            } else {
                let left = up[ui(k + 1)] - 1;
                if k > up_k - d && up[ui(k - 1)] < left {
                    up[ui(k - 1)]
                } else {
                    left
                }
            };
            let mut y = x - k;

            while x > lower_a && y > lower_b && equal(x - 1, y - 1) {
                x -= 1;
                y -= 1;
            }
            up[ui(k)] = x;

            if !odd_delta && down_k - d <= k && k <= down_k + d && up[ui(k)] <= down[di(k)] {
                return MiddleSnake {
                    x: down[di(k)] as usize,
                    y: (down[di(k)] - k) as usize,
                };
            }
            k += 2;
        }
    }

    panic!(
        "middle snake search exhausted {max_d} rounds in box A[{lower_a}..{upper_a}] B[{lower_b}..{upper_b}]"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake_of(a: &[u32], b: &[u32]) -> MiddleSnake {
        let seq_a = SequenceData::new(a);
        let seq_b = SequenceData::new(b);
        let mut buffers = WorkBuffers::for_lengths(a.len(), b.len());
        middle_snake(&seq_a, &seq_b, Bounds::full(a.len(), b.len()), &mut buffers)
    }

    #[test]
    fn test_single_replacement_splits_inside_box() {
        let snake = snake_of(&[1], &[2]);
        assert!(snake.x <= 1 && snake.y <= 1);
    }

    #[test]
    fn test_split_lies_on_a_shortest_path() {
        // A B C A B B A vs C B A B A C, the example from the paper (D = 5)
        let a = [1, 2, 3, 1, 2, 2, 1];
        let b = [3, 2, 1, 2, 1, 3];
        let snake = snake_of(&a, &b);
        let before = lcs_len(&a[..snake.x], &b[..snake.y]);
        let after = lcs_len(&a[snake.x..], &b[snake.y..]);
        assert_eq!(before + after, lcs_len(&a, &b));
    }

    #[test]
    fn test_even_and_odd_delta() {
        for (a, b) in [
            (vec![1, 2, 3, 4], vec![1, 5, 3, 6]),
            (vec![1, 2, 3, 4, 5], vec![2, 4]),
            (vec![9], vec![1, 9, 2]),
        ] {
            let snake = snake_of(&a, &b);
            assert!(snake.x <= a.len());
            assert!(snake.y <= b.len());
            let split = lcs_len(&a[..snake.x], &b[..snake.y]) + lcs_len(&a[snake.x..], &b[snake.y..]);
            assert_eq!(split, lcs_len(&a, &b), "split {snake:?} of {a:?} / {b:?}");
        }
    }

    #[test]
    fn test_sub_range_search_uses_offsets() {
        let a = [7, 7, 1, 2, 3, 7];
        let b = [8, 1, 4, 3, 8, 8];
        let seq_a = SequenceData::new(&a);
        let seq_b = SequenceData::new(&b);
        let mut buffers = WorkBuffers::for_lengths(a.len(), b.len());
        let bounds = Bounds {
            lower_a: 2,
            upper_a: 5,
            lower_b: 1,
            upper_b: 4,
        };
        let snake = middle_snake(&seq_a, &seq_b, bounds, &mut buffers);
        assert!((2..=5).contains(&snake.x));
        assert!((1..=4).contains(&snake.y));
        let split = lcs_len(&a[2..snake.x], &b[1..snake.y]) + lcs_len(&a[snake.x..5], &b[snake.y..4]);
        assert_eq!(split, 2);
    }

    fn lcs_len(a: &[u32], b: &[u32]) -> usize {
        let mut table = vec![vec![0usize; b.len() + 1]; a.len() + 1];
        for i in (0..a.len()).rev() {
            for j in (0..b.len()).rev() {
                table[i][j] = if a[i] == b[j] {
                    table[i + 1][j + 1] + 1
                } else {
                    table[i + 1][j].max(table[i][j + 1])
                };
            }
        }
        table[0][0]
    }
}
