//! Bounded, eviction-prone free lists.
//!
//! [`ObjectCache`] is the per-class container idle buffers live in. It is
//! deliberately forgetful: an item put into it may be gone by the next
//! take, dropped under contention or displaced once the idle cap is
//! reached. Callers must treat every take as a maybe and every put as
//! fire-and-forget; reuse is an optimization, never a guarantee.
//!
//! This keeps idle memory naturally bounded without a reclamation thread,
//! and keeps both paths non-blocking: the lock is only ever tried, with
//! contention treated as a miss (take) or a drop (put).

use std::collections::VecDeque;
use std::sync::Mutex;

/// What happened to an item handed to [`ObjectCache::put`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum PutOutcome {
    /// Stored for later reuse.
    Stored,
    /// Stored, displacing the oldest idle item.
    Evicted,
    /// Dropped without being stored (lock contention).
    Contended,
}

/// A concurrent container of idle reusable items.
///
/// LIFO: the most recently put item is taken first, so reused buffers are
/// the ones most likely to still be cache-warm.
pub(crate) struct ObjectCache<T> {
    slots: Mutex<VecDeque<T>>,
    max_idle: usize,
}

impl<T> ObjectCache<T> {
    /// Creates a cache retaining at most `max_idle` idle items.
    pub(crate) fn new(max_idle: usize) -> Self {
        Self {
            slots: Mutex::new(VecDeque::new()),
            max_idle,
        }
    }

    /// Takes an idle item, if one is observable right now.
    ///
    /// Contention counts as a miss: the caller fabricates instead of
    /// waiting.
    pub(crate) fn take(&self) -> Option<T> {
        let mut slots = self.slots.try_lock().ok()?;
        slots.pop_back()
    }

    /// Offers an item for later reuse.
    ///
    /// At the idle cap the oldest item is displaced; under contention the
    /// offered item itself is dropped. Either way the call never blocks
    /// and never fails.
    pub(crate) fn put(&self, item: T) -> PutOutcome {
        let Ok(mut slots) = self.slots.try_lock() else {
            return PutOutcome::Contended;
        };
        let mut outcome = PutOutcome::Stored;
        if slots.len() >= self.max_idle {
            slots.pop_front();
            outcome = PutOutcome::Evicted;
        }
        slots.push_back(item);
        outcome
    }

    /// Best-effort count of idle items, for statistics.
    pub(crate) fn idle_len(&self) -> usize {
        self.slots.try_lock().map_or(0, |slots| slots.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_from_empty() {
        let cache: ObjectCache<u32> = ObjectCache::new(4);
        assert_eq!(cache.take(), None);
    }

    #[test]
    fn test_put_then_take_is_lifo() {
        let cache = ObjectCache::new(4);
        assert_eq!(cache.put(1), PutOutcome::Stored);
        assert_eq!(cache.put(2), PutOutcome::Stored);
        assert_eq!(cache.take(), Some(2));
        assert_eq!(cache.take(), Some(1));
        assert_eq!(cache.take(), None);
    }

    #[test]
    fn test_eviction_displaces_oldest() {
        let cache = ObjectCache::new(2);
        cache.put(1);
        cache.put(2);
        assert_eq!(cache.put(3), PutOutcome::Evicted);
        assert_eq!(cache.idle_len(), 2);
        // 1 was the oldest; 3 and 2 remain.
        assert_eq!(cache.take(), Some(3));
        assert_eq!(cache.take(), Some(2));
        assert_eq!(cache.take(), None);
    }

    #[test]
    fn test_idle_len_tracks_contents() {
        let cache = ObjectCache::new(8);
        assert_eq!(cache.idle_len(), 0);
        cache.put(7);
        assert_eq!(cache.idle_len(), 1);
        cache.take();
        assert_eq!(cache.idle_len(), 0);
    }

    #[test]
    fn test_concurrent_put_take_never_blocks() {
        use std::sync::Arc;
        use std::thread;

        let cache = Arc::new(ObjectCache::new(16));
        let mut handles = Vec::new();
        for t in 0..4 {
            let cache = Arc::clone(&cache);
            handles.push(thread::spawn(move || {
                for i in 0..1000u32 {
                    cache.put(t * 1000 + i);
                    // Takes may miss; they must never hang.
                    let _ = cache.take();
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }
        assert!(cache.idle_len() <= 16);
    }
}
