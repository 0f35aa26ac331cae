//! Down/up vectors shared by every middle-snake search of one diff.

use std::ops::{Deref, DerefMut};

use parking_lot::Mutex;

use crate::diff::DiffError;

/// Entries each vector needs for inputs of the given lengths.
#[must_use]
pub const fn required_len(len_a: usize, len_b: usize) -> usize {
    2 * (len_a + len_b + 1) + 2
}

/// Furthest-reaching positions per diagonal for the forward (`down`) and
/// reverse (`up`) searches.
///
/// Diagonals are stored at `MAX - k_start + k` with `MAX = len_a + len_b + 1`,
/// so negative diagonals stay in bounds.
#[derive(Debug, Clone, Default)]
pub struct WorkBuffers {
    pub(crate) down: Vec<isize>,
    pub(crate) up: Vec<isize>,
}

impl WorkBuffers {
    /// Allocates buffers large enough for inputs of `len_a` and `len_b`.
    #[must_use]
    pub fn for_lengths(len_a: usize, len_b: usize) -> Self {
        let len = required_len(len_a, len_b);
        Self {
            down: vec![0; len],
            up: vec![0; len],
        }
    }

    /// Entries available per vector.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.down.len().min(self.up.len())
    }

    /// Checks that the buffers cover inputs of `len_a` and `len_b`.
    ///
    /// # Errors
    ///
    /// Returns [`DiffError::BufferTooSmall`] when either vector is shorter
    /// than [`required_len`].
    pub fn check_capacity(&self, len_a: usize, len_b: usize) -> Result<(), DiffError> {
        let required = required_len(len_a, len_b);
        let actual = self.capacity();
        if actual < required {
            return Err(DiffError::BufferTooSmall { required, actual });
        }
        Ok(())
    }

    /// Grows both vectors so they cover inputs of `len_a` and `len_b`.
    pub fn ensure_capacity(&mut self, len_a: usize, len_b: usize) {
        let required = required_len(len_a, len_b);
        if self.down.len() < required {
            self.down.resize(required, 0);
        }
        if self.up.len() < required {
            self.up.resize(required, 0);
        }
    }
}

/// A set of idle [`WorkBuffers`] that diffs check out exclusively.
///
/// The lock is held only while a buffer is taken or returned; the search
/// itself runs on a buffer no other caller can see.
#[derive(Debug)]
pub struct BufferPool {
    idle: Mutex<Vec<WorkBuffers>>,
    max_idle: usize,
}

impl BufferPool {
    /// Number of idle buffers kept when none is configured.
    pub const DEFAULT_MAX_IDLE: usize = 4;

    /// Creates an empty pool keeping at most `max_idle` returned buffers.
    #[must_use]
    pub fn new(max_idle: usize) -> Self {
        Self {
            idle: Mutex::new(Vec::new()),
            max_idle,
        }
    }

    /// Takes an idle buffer, or allocates one, sized for the given input.
    pub fn checkout(&self, len_a: usize, len_b: usize) -> PooledBuffers<'_> {
        let mut buffers = self.idle.lock().pop().unwrap_or_default();
        buffers.ensure_capacity(len_a, len_b);
        PooledBuffers {
            pool: self,
            buffers,
        }
    }

    /// Number of buffers currently waiting in the pool.
    #[must_use]
    pub fn idle_count(&self) -> usize {
        self.idle.lock().len()
    }

    fn give_back(&self, buffers: WorkBuffers) {
        let mut idle = self.idle.lock();
        if idle.len() < self.max_idle {
            idle.push(buffers);
        }
    }
}

impl Default for BufferPool {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_IDLE)
    }
}

/// Buffers checked out of a [`BufferPool`]; returned when dropped.
#[derive(Debug)]
pub struct PooledBuffers<'p> {
    pool: &'p BufferPool,
    buffers: WorkBuffers,
}

impl Deref for PooledBuffers<'_> {
    type Target = WorkBuffers;

    fn deref(&self) -> &Self::Target {
        &self.buffers
    }
}

impl DerefMut for PooledBuffers<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buffers
    }
}

impl Drop for PooledBuffers<'_> {
    fn drop(&mut self) {
        self.pool.give_back(std::mem::take(&mut self.buffers));
    }
}
