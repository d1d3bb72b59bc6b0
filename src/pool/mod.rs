//! The tiered pool: routing facade, tier arrays, and buffer lifecycle.
//!
//! [`BufPool`] is the public entry point. It routes a request to the
//! matching size class, serves it from that class's free list when
//! possible, and fabricates a fresh buffer otherwise. Releases travel the
//! same route in reverse, gated by capacity validation so a buffer that
//! was not produced by the pool (or was grown while on loan) can never
//! poison a class.

mod guard;
mod recycle;
mod stats;
mod tier;

pub use guard::PooledBuf;
pub use stats::PoolStats;

use std::sync::Arc;

use bytes::BytesMut;

use crate::cache::ObjectCache;
use crate::class::{POOLED_MAX, SizeClass};
use crate::config::PoolConfig;
use crate::error::PoolError;

use recycle::{Handle, HandleRecycler};
use stats::PoolMetrics;
use tier::{LargePool, SmallPool};

/// A tiered byte-buffer reuse pool.
///
/// `BufPool` is a cheap [`Clone`] handle over shared state: construct it
/// once at startup and clone it into every thread that needs buffers.
/// There is no teardown; idle buffers are simply dropped with the last
/// handle.
///
/// # Example
///
/// ```
/// use bufpool::BufPool;
///
/// let pool = BufPool::new();
///
/// let buf = pool.get(300);
/// assert_eq!(buf.len(), 300);
/// assert_eq!(buf.capacity(), 512);
///
/// pool.release(buf)?;
/// # Ok::<(), bufpool::PoolError>(())
/// ```
#[derive(Clone)]
pub struct BufPool {
    shared: Arc<PoolShared>,
}

impl BufPool {
    /// Creates a pool with default retention caps.
    pub fn new() -> Self {
        Self {
            shared: Arc::new(PoolShared::new(PoolConfig::default())),
        }
    }

    /// Creates a pool with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidConfig`] if the configuration fails
    /// validation.
    ///
    /// # Example
    ///
    /// ```
    /// use bufpool::{BufPool, PoolConfig};
    ///
    /// let pool = BufPool::with_config(PoolConfig::new(8, 16)?)?;
    /// # Ok::<(), bufpool::PoolError>(())
    /// ```
    pub fn with_config(config: PoolConfig) -> Result<Self, PoolError> {
        config.validate()?;
        Ok(Self {
            shared: Arc::new(PoolShared::new(config)),
        })
    }

    /// Returns a buffer of length exactly `size`.
    ///
    /// The buffer's capacity is the size-class capacity (at most 2x
    /// `size` below [`SMALL_MAX`](crate::SMALL_MAX), at most 1.25x up to
    /// [`POOLED_MAX`](crate::POOLED_MAX), exactly `size` above it).
    /// `size == 0` yields an empty buffer without allocating.
    ///
    /// Contents are unspecified: a reused buffer retains earlier bytes,
    /// and only bytes beyond its previous length are zeroed.
    ///
    /// # Example
    ///
    /// ```
    /// use bufpool::BufPool;
    ///
    /// let pool = BufPool::new();
    /// let buf = pool.get(65_537);
    /// assert_eq!(buf.len(), 65_537);
    /// assert_eq!(buf.capacity(), 81_920);
    /// ```
    pub fn get(&self, size: usize) -> BytesMut {
        self.shared.get(size)
    }

    /// Hands a buffer back for reuse by later gets of its class.
    ///
    /// Buffers with zero capacity, and buffers above the bypass ceiling,
    /// are accepted as no-ops: the former are degenerate, the latter were
    /// never pool-managed. Everything in between must sit exactly on a
    /// size-class capacity.
    ///
    /// The caller must not touch the buffer after releasing it, and must
    /// not release the same buffer twice; neither is detected.
    ///
    /// # Errors
    ///
    /// Returns [`PoolError::InvalidCapacity`] if the capacity is not on
    /// the class grid, meaning the buffer did not come from
    /// [`get`](Self::get) or its capacity was changed while on loan.
    /// Nothing is inserted in that case.
    pub fn release(&self, buf: BytesMut) -> Result<(), PoolError> {
        self.shared.release(buf)
    }

    /// Returns a buffer that releases itself when dropped.
    ///
    /// The scoped counterpart of [`get`](Self::get)/[`release`](Self::release)
    /// for callers that want RAII instead of explicit returns. A leased
    /// buffer grown past its class capacity is quietly abandoned to the
    /// allocator on drop.
    ///
    /// # Example
    ///
    /// ```
    /// use bufpool::BufPool;
    ///
    /// let pool = BufPool::new();
    /// {
    ///     let mut lease = pool.lease(128);
    ///     lease[0] = 0x2a;
    /// } // returned here
    /// assert_eq!(pool.stats().returns, 1);
    /// ```
    pub fn lease(&self, size: usize) -> PooledBuf {
        PooledBuf::new(self.shared.get(size), Arc::clone(&self.shared))
    }

    /// Takes a point-in-time snapshot of pool statistics.
    pub fn stats(&self) -> PoolStats {
        self.shared.stats()
    }
}

impl Default for BufPool {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for BufPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stats = self.stats();
        f.debug_struct("BufPool")
            .field("idle_small", &stats.idle_small)
            .field("idle_large", &stats.idle_large)
            .finish_non_exhaustive()
    }
}

/// State shared by every handle clone and every outstanding lease.
pub(crate) struct PoolShared {
    small: SmallPool,
    large: LargePool,
    recycler: HandleRecycler,
    metrics: PoolMetrics,
}

impl PoolShared {
    fn new(config: PoolConfig) -> Self {
        Self {
            small: SmallPool::new(config.max_idle_per_class()),
            large: LargePool::new(config.max_idle_per_class()),
            recycler: HandleRecycler::new(config.max_idle_handles()),
            metrics: PoolMetrics::default(),
        }
    }

    pub(crate) fn get(&self, size: usize) -> BytesMut {
        if size == 0 {
            return BytesMut::new();
        }
        let Some(class) = SizeClass::for_size(size) else {
            // Above the bypass ceiling: exact-size, never pooled.
            self.metrics.record_bypass();
            return fabricate(size, size);
        };
        match self.cache_for(class).take() {
            Some(cell) => {
                let mut buf = self.recycler.unwrap(cell);
                buf.resize(size, 0);
                self.metrics.record_hit();
                buf
            }
            None => {
                self.metrics.record_miss();
                fabricate(size, class.capacity())
            }
        }
    }

    pub(crate) fn release(&self, buf: BytesMut) -> Result<(), PoolError> {
        let capacity = buf.capacity();
        if capacity == 0 || capacity > POOLED_MAX {
            // Degenerate or bypass buffers round-trip as no-ops.
            return Ok(());
        }
        let class = match SizeClass::from_capacity(capacity) {
            Ok(class) => class,
            Err(err) => {
                self.metrics.record_discard();
                return Err(err);
            }
        };
        let cell = self.recycler.wrap(buf);
        let outcome = self.cache_for(class).put(cell);
        self.metrics.record_put(outcome);
        Ok(())
    }

    pub(crate) fn stats(&self) -> PoolStats {
        self.metrics
            .snapshot(self.small.idle_len(), self.large.idle_len())
    }

    /// Routes a class to its cache slot in the matching tier.
    fn cache_for(&self, class: SizeClass) -> &ObjectCache<Handle> {
        match class {
            SizeClass::Small { bit } => self.small.class(bit),
            SizeClass::Large { octave, quarter } => self.large.class(octave, quarter),
        }
    }
}

/// A fresh buffer with the given visible length and exact capacity.
fn fabricate(len: usize, capacity: usize) -> BytesMut {
    let mut buf = BytesMut::with_capacity(capacity);
    buf.resize(len, 0);
    buf
}
