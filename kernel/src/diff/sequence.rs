//! Input sequence together with its modification markers.

/// One side of a diff: the borrowed symbols and a flag per element telling
/// whether it lies outside the common subsequence.
///
/// The marker array carries two extra sentinel slots at the end so that
/// scans may step one past the last element without a bounds check.
#[derive(Debug, Clone)]
pub struct SequenceData<'a, T> {
    data: &'a [T],
    modified: Vec<bool>,
}

impl<'a, T> SequenceData<'a, T> {
    /// Wraps `data` with all markers cleared.
    #[must_use]
    pub fn new(data: &'a [T]) -> Self {
        Self {
            data,
            modified: vec![false; data.len() + 2],
        }
    }

    /// Number of elements.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.data.len()
    }

    /// True if the sequence has no elements.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// The symbols being compared.
    #[must_use]
    pub const fn data(&self) -> &'a [T] {
        self.data
    }

    /// Symbol at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> &T {
        &self.data[index]
    }

    /// Whether the element at `index` was deleted (A) or inserted (B).
    #[must_use]
    pub fn is_modified(&self, index: usize) -> bool {
        self.modified[index]
    }

    /// Flags the element at `index` as modified.
    pub fn mark(&mut self, index: usize) {
        self.modified[index] = true;
    }

    /// Clears the flag of the element at `index`.
    pub fn unmark(&mut self, index: usize) {
        self.modified[index] = false;
    }

    /// Flags every element in `range` as modified.
    pub fn mark_range(&mut self, range: std::ops::Range<usize>) {
        self.modified[range].fill(true);
    }

    /// Markers for the real elements, without the sentinel slots.
    #[must_use]
    pub fn markers(&self) -> &[bool] {
        &self.modified[..self.data.len()]
    }

    /// Number of elements flagged as modified.
    #[must_use]
    pub fn modified_count(&self) -> usize {
        self.markers().iter().filter(|m| **m).count()
    }

    /// Number of elements that belong to the common subsequence.
    #[must_use]
    pub fn unmodified_count(&self) -> usize {
        self.len() - self.modified_count()
    }
}
