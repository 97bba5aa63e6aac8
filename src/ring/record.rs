//! Lock-free single-producer single-consumer record ring
//!
//! Records are stored as a 1-byte length prefix immediately followed by the
//! payload, wrapped through the byte store. `in_index` and `out_index` are
//! monotonically increasing 32-bit counters (never masked except for
//! addressing): the ring is empty iff they are equal and full iff their
//! difference equals the capacity.
//!
//! One producer thread and one consumer thread may operate concurrently with
//! no lock between them. The producer publishes `in_index` with a Release
//! store after the record bytes are written, so a consumer that observes the
//! new index (Acquire) also observes the bytes; symmetrically the consumer
//! publishes `out_index` with Release so the producer observes freed space.
//! For multiple producers or consumers, layer a
//! [`SharedRecordQueue`](crate::sync::SharedRecordQueue) on top.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::config::QueueConfig;
use crate::error::{QueueError, Result};
use crate::ring::store::ByteStore;

/// Maximum payload length representable by the 1-byte record prefix
pub const MAX_RECORD_LEN: usize = u8::MAX as usize;

/// Fixed-capacity queue of variable-length records (0..=255 bytes each).
#[derive(Debug)]
pub struct RecordRing {
    /// Backing byte storage
    store: ByteStore,
    /// Producer counter; only `enqueue` advances it
    in_index: AtomicU32,
    /// Consumer counter; only `dequeue`/`skip` advance it
    out_index: AtomicU32,
}

impl RecordRing {
    /// Create a ring with at least `capacity` bytes of storage.
    ///
    /// A non-power-of-two capacity is rounded up to the next power of two.
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            store: ByteStore::new(capacity)?,
            in_index: AtomicU32::new(0),
            out_index: AtomicU32::new(0),
        })
    }

    /// Create a ring from a validated configuration
    pub fn from_config(config: &QueueConfig) -> Result<Self> {
        config.validate()?;
        Self::new(config.capacity)
    }

    /// Storage capacity in bytes
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Total used bytes: the sum of `1 + payload_len` over all queued
    /// records, not a record count.
    pub fn len(&self) -> usize {
        let in_index = self.in_index.load(Ordering::Acquire);
        let out_index = self.out_index.load(Ordering::Acquire);
        in_index.wrapping_sub(out_index) as usize
    }

    /// Check if the ring holds no records
    pub fn is_empty(&self) -> bool {
        let in_index = self.in_index.load(Ordering::Acquire);
        let out_index = self.out_index.load(Ordering::Acquire);
        in_index == out_index
    }

    /// Check if the ring is completely full
    pub fn is_full(&self) -> bool {
        self.len() == self.capacity()
    }

    /// Free bytes available for enqueueing
    pub fn available(&self) -> usize {
        self.capacity() - self.len()
    }

    /// Append one record to the ring.
    ///
    /// Returns `Ok(payload.len())` on success. Returns `Ok(0)` without
    /// mutating anything when the record's footprint (`1 + payload.len()`)
    /// does not fit in the free space, a zero-progress outcome the caller
    /// should treat as backpressure, not an error. A zero-length payload is
    /// a legal record occupying exactly one byte.
    ///
    /// # Errors
    /// [`QueueError::LengthOverflow`] if `payload.len() > MAX_RECORD_LEN`.
    pub fn enqueue(&self, payload: &[u8]) -> Result<usize> {
        let n = payload.len();
        if n > MAX_RECORD_LEN {
            return Err(QueueError::length_overflow(n, MAX_RECORD_LEN));
        }

        let in_index = self.in_index.load(Ordering::Relaxed);
        let out_index = self.out_index.load(Ordering::Acquire);
        let used = in_index.wrapping_sub(out_index) as usize;

        if self.capacity() - used < 1 + n {
            return Ok(0);
        }

        // SAFETY: the region [in_index, in_index + 1 + n) lies within the
        // free space just computed, so the consumer never touches it, and
        // this is the only producer by the SPSC contract.
        unsafe {
            self.store.write_byte(in_index, n as u8);
            self.store.write_wrapped(in_index.wrapping_add(1), payload);
        }

        // Publish the record only after its bytes are fully written.
        self.in_index
            .store(in_index.wrapping_add(1 + n as u32), Ordering::Release);

        Ok(n)
    }

    /// Length of the next record's payload without consuming it.
    ///
    /// Returns `0` when the ring is empty. Note that a zero-length record
    /// also reports `0`; use [`Self::is_empty`] to tell the cases apart.
    pub fn peek_len(&self) -> usize {
        let out_index = self.out_index.load(Ordering::Relaxed);
        let in_index = self.in_index.load(Ordering::Acquire);

        if out_index == in_index {
            return 0;
        }

        // SAFETY: non-empty, so the prefix byte at out_index is published.
        unsafe { self.store.read_byte(out_index) as usize }
    }

    /// Remove the next record, copying its payload into `dest`.
    ///
    /// Copies `min(record_len, dest.len())` bytes and returns that count;
    /// payload bytes beyond `dest.len()` are silently discarded. The record
    /// is consumed whole either way, so a short (even zero-length) `dest`
    /// still advances the ring past the entire record. Returns `0` with no
    /// mutation when the ring is empty.
    pub fn dequeue(&self, dest: &mut [u8]) -> usize {
        let out_index = self.out_index.load(Ordering::Relaxed);
        let in_index = self.in_index.load(Ordering::Acquire);

        if out_index == in_index {
            return 0;
        }

        let (len, copied) = unsafe { self.copy_record(out_index, dest) };

        self.out_index
            .store(out_index.wrapping_add(1 + len as u32), Ordering::Release);

        copied
    }

    /// Copy the next record's payload into `dest` without consuming it.
    ///
    /// Identical copy behavior to [`Self::dequeue`] but never advances the
    /// ring; repeated calls return the same bytes until a `dequeue` or
    /// `skip` intervenes.
    pub fn peek(&self, dest: &mut [u8]) -> usize {
        let out_index = self.out_index.load(Ordering::Relaxed);
        let in_index = self.in_index.load(Ordering::Acquire);

        if out_index == in_index {
            return 0;
        }

        let (_, copied) = unsafe { self.copy_record(out_index, dest) };
        copied
    }

    /// Discard the next record without copying its payload.
    ///
    /// Returns `false` when the ring is empty.
    pub fn skip(&self) -> bool {
        let out_index = self.out_index.load(Ordering::Relaxed);
        let in_index = self.in_index.load(Ordering::Acquire);

        if out_index == in_index {
            return false;
        }

        let len = unsafe { self.store.read_byte(out_index) as u32 };
        self.out_index
            .store(out_index.wrapping_add(1 + len), Ordering::Release);

        true
    }

    /// Clear the ring.
    ///
    /// Takes `&mut self`, so no concurrent producer or consumer can exist
    /// while resetting.
    pub fn reset(&mut self) {
        self.in_index.store(0, Ordering::Release);
        self.out_index.store(0, Ordering::Release);
    }

    /// Copy `min(record_len, dest.len())` payload bytes of the record at
    /// `out_index` into `dest`; returns `(record_len, copied)`.
    ///
    /// # Safety
    /// The caller must have observed the ring non-empty at `out_index`, and
    /// must be the only consumer by the SPSC contract.
    unsafe fn copy_record(&self, out_index: u32, dest: &mut [u8]) -> (usize, usize) {
        let len = self.store.read_byte(out_index) as usize;
        let copied = len.min(dest.len());
        self.store
            .read_wrapped(out_index.wrapping_add(1), &mut dest[..copied]);
        (len, copied)
    }
}

// SAFETY: the producer only writes `in_index` and the free region, the
// consumer only writes `out_index` and reads the used region; Acquire and
// Release pairs on the indices order the byte accesses between threads.
unsafe impl Send for RecordRing {}
unsafe impl Sync for RecordRing {}
