//! bufpool
//!
//! Tiered byte-buffer reuse pool for Rust.
//!
//! `bufpool` hands out [`bytes::BytesMut`] buffers whose underlying
//! allocation is rounded up to one of a small number of size classes, and
//! takes them back for reuse by later requests of similar size. It is
//! designed as a small, composable primitive for byte-buffer-heavy
//! workloads:
//!
//! - I/O buffering
//! - serialization scratch space
//! - network framing
//!
//! The crate intentionally:
//! - does NOT guarantee reuse (idle buffers may be evicted at any time)
//! - does NOT enforce a hard cap on memory handed out to callers
//! - does NOT provide alignment beyond byte granularity
//! - does NOT track individual buffers (no use-after-release detection)
//!
//! It only does one thing: **size in → class-capacity buffer out, buffer
//! back in → maybe reused later**
//!
//! # Size classes
//!
//! Requests up to [`SMALL_MAX`] (64 KiB) are rounded up to the next power
//! of two, so a buffer is at most 2x the requested size. Requests up to
//! [`POOLED_MAX`] (4 GiB) land in quarter-subdivided power-of-two octaves,
//! capping waste at 1.25x. Anything larger bypasses the pool entirely and
//! is allocated at exact size.
//!
//! # Get / release
//!
//! ```
//! use bufpool::BufPool;
//!
//! let pool = BufPool::new();
//!
//! let buf = pool.get(1000);
//! assert_eq!(buf.len(), 1000);
//! assert_eq!(buf.capacity(), 1024);
//!
//! // Hand the buffer back; a later get of a similar size may reuse it.
//! pool.release(buf)?;
//! # Ok::<(), bufpool::PoolError>(())
//! ```
//!
//! # Scoped leases
//!
//! ```
//! use bufpool::BufPool;
//!
//! let pool = BufPool::new();
//!
//! {
//!     let mut lease = pool.lease(4096);
//!     lease[..4].copy_from_slice(b"ping");
//! } // returned to the pool here
//! ```
//!
//! The pool is a cheap [`Clone`] handle over shared state: create it once,
//! clone it into every thread that needs buffers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod class;
mod config;
mod error;
mod pool;

mod cache; // internal (bounded per-class free lists)

//
// Public surface (intentionally tiny)
//

pub use class::{POOLED_MAX, SMALL_MAX, SizeClass};
pub use config::{DEFAULT_MAX_IDLE_HANDLES, DEFAULT_MAX_IDLE_PER_CLASS, PoolConfig};
pub use error::PoolError;
pub use pool::{BufPool, PoolStats, PooledBuf};
