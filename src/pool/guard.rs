//! RAII wrapper for pool-managed buffers.

use std::fmt;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

use bytes::BytesMut;

use super::PoolShared;

/// A buffer borrowed from a pool that returns itself on drop.
///
/// Dereferences to [`BytesMut`], so it can be used anywhere a byte buffer
/// is expected. Dropping the lease is the RAII equivalent of
/// [`release`](crate::BufPool::release), with one difference: drop cannot
/// report errors, so a buffer whose capacity left the class grid (the
/// caller grew it while on loan) is quietly abandoned to the allocator
/// instead.
///
/// # Example
///
/// ```
/// use bufpool::BufPool;
///
/// let pool = BufPool::new();
/// let mut lease = pool.lease(8);
/// lease.copy_from_slice(b"deadbeef");
/// assert_eq!(lease.capacity(), 8);
/// ```
pub struct PooledBuf {
    /// The buffer (`None` once detached or returned).
    buf: Option<BytesMut>,
    shared: Arc<PoolShared>,
}

impl PooledBuf {
    pub(crate) fn new(buf: BytesMut, shared: Arc<PoolShared>) -> Self {
        Self {
            buf: Some(buf),
            shared,
        }
    }

    /// Detaches the buffer from the pool, taking ownership.
    ///
    /// The buffer will no longer return on drop; hand it back with
    /// [`release`](crate::BufPool::release) if reuse is still wanted.
    ///
    /// # Example
    ///
    /// ```
    /// use bufpool::BufPool;
    ///
    /// let pool = BufPool::new();
    /// let buf = pool.lease(100).into_inner();
    /// assert_eq!(buf.len(), 100);
    /// assert_eq!(pool.stats().returns, 0);
    /// ```
    pub fn into_inner(mut self) -> BytesMut {
        self.buf.take().unwrap_or_default()
    }
}

impl Deref for PooledBuf {
    type Target = BytesMut;

    fn deref(&self) -> &BytesMut {
        self.buf.as_ref().expect("buffer present until drop")
    }
}

impl DerefMut for PooledBuf {
    fn deref_mut(&mut self) -> &mut BytesMut {
        self.buf.as_mut().expect("buffer present until drop")
    }
}

impl Drop for PooledBuf {
    fn drop(&mut self) {
        if let Some(buf) = self.buf.take() {
            // Drop cannot surface errors; an off-grid capacity means the
            // buffer is abandoned rather than pooled.
            let _ = self.shared.release(buf);
        }
    }
}

impl fmt::Debug for PooledBuf {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PooledBuf")
            .field("len", &self.buf.as_ref().map_or(0, BytesMut::len))
            .field("capacity", &self.buf.as_ref().map_or(0, BytesMut::capacity))
            .finish()
    }
}
