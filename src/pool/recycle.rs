//! Handle-cell recycling.
//!
//! Class caches store buffers behind a boxed handle so their queue entries
//! stay pointer-sized. Boxing on every insert would cost an allocation in
//! the release hot path, so one extra cache recycles the empty cells:
//! wrap a buffer into a spare cell on the way in, take the buffer out and
//! hand the emptied cell back on the way out.
//!
//! Skipping the recycler would not change observable behavior, only
//! allocation counts.

use std::mem;

use bytes::BytesMut;

use crate::cache::ObjectCache;

/// A cache entry: a reusable heap cell holding an idle buffer.
pub(crate) type Handle = Box<BytesMut>;

/// Hands out reusable handle cells.
pub(crate) struct HandleRecycler {
    cells: ObjectCache<Handle>,
}

impl HandleRecycler {
    /// Creates a recycler retaining at most `max_idle` spare cells.
    pub(crate) fn new(max_idle: usize) -> Self {
        Self {
            cells: ObjectCache::new(max_idle),
        }
    }

    /// Wraps a buffer into a cell, reusing a spare cell when one is idle.
    pub(crate) fn wrap(&self, buf: BytesMut) -> Handle {
        let mut cell = self.cells.take().unwrap_or_default();
        *cell = buf;
        cell
    }

    /// Takes the buffer out of a cell and recycles the emptied cell.
    ///
    /// The cell is scrubbed before going back so it does not keep a stale
    /// buffer allocation alive.
    pub(crate) fn unwrap(&self, mut cell: Handle) -> BytesMut {
        let buf = mem::take(&mut *cell);
        self.cells.put(cell);
        buf
    }
}
