//! # Recring - Fixed-Capacity Variable-Length Record Queue
//!
//! Recring is a bounded byte queue that stores discrete records (byte
//! strings of 0 to 255 bytes, framed by a 1-byte length prefix) in a
//! power-of-two circular buffer with no per-record allocation. It is the
//! primitive at the core of device buffers, telemetry pipes, and
//! inter-thread byte channels where records must survive wraparound.
//!
//! ## Features
//!
//! - **Lock-free SPSC core**: one producer and one consumer run with no
//!   lock between them, using acquire/release index updates
//! - **Record framing**: enqueue/dequeue/peek/skip operate on whole
//!   records; partial records never exist in the store
//! - **Truncating reads**: a short destination buffer receives a prefix of
//!   the payload while the record is consumed whole
//! - **Zero-progress outcomes**: "full" and "empty" are ordinary `0`/`false`
//!   returns, distinct from real errors
//! - **Cancellable MPMC wrapper**: independent producer and consumer gates
//!   extend the SPSC contract to many threads per side
//!
//! ## Architecture
//!
//! ```text
//! producers ──► producer gate ──► RecordRing.enqueue ──► ByteStore
//! consumers ──► consumer gate ──► RecordRing.{dequeue,peek,skip} ──► ByteStore
//! ```
//!
//! ## Example
//!
//! ```
//! use recring::RecordRing;
//!
//! let ring = RecordRing::new(128).unwrap();
//! ring.enqueue(b"hello").unwrap();
//!
//! assert_eq!(ring.peek_len(), 5);
//!
//! let mut buf = [0u8; 16];
//! let n = ring.dequeue(&mut buf);
//! assert_eq!(&buf[..n], b"hello");
//! ```

// Core modules
pub mod config;
pub mod error;
pub mod ring;
pub mod sync;

// Main API re-exports
pub use config::{QueueConfig, QueueConfigBuilder, MAX_CAPACITY};
pub use error::{QueueError, Result};
pub use ring::{ByteStore, RecordRing, MAX_RECORD_LEN};
pub use sync::{CancelToken, Gate, GateGuard, SharedRecordQueue};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default configuration constants
pub mod defaults {
    /// Default queue capacity in bytes
    pub const DEFAULT_CAPACITY: usize = 4096;
}
