//! Per-tier cache arrays.
//!
//! Both tiers hold one [`ObjectCache`] per size class and differ only in
//! shape: the small tier is a flat array of 17 power-of-two classes, the
//! large tier a 16x4 grid of quarter-subdivided octaves. The shared
//! get/release algorithm lives in the facade.

use std::array;

use crate::cache::ObjectCache;
use crate::class::{LARGE_OCTAVES, OCTAVE_BASE, QUARTERS, SMALL_CLASSES};

use super::recycle::Handle;

/// Caches for the power-of-two classes `2^0..=2^16`.
pub(crate) struct SmallPool {
    classes: [ObjectCache<Handle>; SMALL_CLASSES],
}

impl SmallPool {
    pub(crate) fn new(max_idle: usize) -> Self {
        Self {
            classes: array::from_fn(|_| ObjectCache::new(max_idle)),
        }
    }

    /// The cache for capacity `1 << bit`. `bit` must be in `0..=16`.
    pub(crate) fn class(&self, bit: u8) -> &ObjectCache<Handle> {
        &self.classes[bit as usize]
    }

    /// Best-effort total of idle buffers across all small classes.
    pub(crate) fn idle_len(&self) -> usize {
        self.classes.iter().map(ObjectCache::idle_len).sum()
    }
}

/// Caches for the quarter-subdivided octaves `2^17..=2^32`.
pub(crate) struct LargePool {
    classes: [[ObjectCache<Handle>; QUARTERS]; LARGE_OCTAVES],
}

impl LargePool {
    pub(crate) fn new(max_idle: usize) -> Self {
        Self {
            classes: array::from_fn(|_| array::from_fn(|_| ObjectCache::new(max_idle))),
        }
    }

    /// The cache for the given octave and quarter band. `octave` must be
    /// in `17..=32`, `quarter` in `0..=3`.
    pub(crate) fn class(&self, octave: u8, quarter: u8) -> &ObjectCache<Handle> {
        &self.classes[(octave - OCTAVE_BASE) as usize][quarter as usize]
    }

    /// Best-effort total of idle buffers across all large classes.
    pub(crate) fn idle_len(&self) -> usize {
        self.classes
            .iter()
            .flatten()
            .map(ObjectCache::idle_len)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::BytesMut;

    #[test]
    fn test_small_classes_are_independent() {
        let pool = SmallPool::new(4);
        pool.class(3).put(Box::new(BytesMut::with_capacity(8)));

        assert!(pool.class(4).take().is_none());
        let handle = pool.class(3).take().unwrap();
        assert_eq!(handle.capacity(), 8);
    }

    #[test]
    fn test_large_grid_addresses_all_slots() {
        let pool = LargePool::new(2);
        for octave in 17..=32u8 {
            for quarter in 0..=3u8 {
                assert!(pool.class(octave, quarter).take().is_none());
            }
        }
    }

    #[test]
    fn test_idle_len_sums_across_classes() {
        let pool = SmallPool::new(4);
        pool.class(0).put(Box::new(BytesMut::new()));
        pool.class(16).put(Box::new(BytesMut::new()));
        assert_eq!(pool.idle_len(), 2);

        let pool = LargePool::new(4);
        pool.class(17, 0).put(Box::new(BytesMut::new()));
        pool.class(32, 3).put(Box::new(BytesMut::new()));
        assert_eq!(pool.idle_len(), 2);
    }
}
