//! Multi-producer multi-consumer wrapper over the SPSC record ring

use crate::config::QueueConfig;
use crate::error::Result;
use crate::ring::RecordRing;
use crate::sync::cancel::CancelToken;
use crate::sync::gate::Gate;

/// Record queue safe for arbitrarily many producers and consumers.
///
/// Two independent gates serialize producers against producers and consumers
/// against consumers; the gates never block one side against the other, so a
/// single producer and a single consumer still run through the lock-free
/// ring concurrently. Each operation holds its gate for the full call.
///
/// Every producer/consumer operation comes in a blocking flavor and a
/// `_cancellable` flavor that fails with
/// [`QueueError::Cancelled`](crate::error::QueueError::Cancelled) if the
/// supplied token fires while waiting for the gate.
#[derive(Debug)]
pub struct SharedRecordQueue {
    ring: RecordRing,
    producer_gate: Gate,
    consumer_gate: Gate,
}

impl SharedRecordQueue {
    /// Create a shared queue with at least `capacity` bytes of storage
    pub fn new(capacity: usize) -> Result<Self> {
        Ok(Self {
            ring: RecordRing::new(capacity)?,
            producer_gate: Gate::new(),
            consumer_gate: Gate::new(),
        })
    }

    /// Create a shared queue from a validated configuration
    pub fn from_config(config: &QueueConfig) -> Result<Self> {
        Ok(Self {
            ring: RecordRing::from_config(config)?,
            producer_gate: Gate::new(),
            consumer_gate: Gate::new(),
        })
    }

    /// Append one record, waiting for the producer gate.
    ///
    /// Same return contract as [`RecordRing::enqueue`]: `Ok(0)` means the
    /// record did not fit and nothing was written.
    pub fn enqueue(&self, payload: &[u8]) -> Result<usize> {
        let _gate = self.producer_gate.acquire();
        self.ring.enqueue(payload)
    }

    /// [`Self::enqueue`], interruptible while waiting for the gate
    pub fn enqueue_cancellable(&self, payload: &[u8], token: &CancelToken) -> Result<usize> {
        let _gate = self.producer_gate.acquire_cancellable(token)?;
        self.ring.enqueue(payload)
    }

    /// Remove the next record, waiting for the consumer gate.
    ///
    /// Same truncation contract as [`RecordRing::dequeue`].
    pub fn dequeue(&self, dest: &mut [u8]) -> usize {
        let _gate = self.consumer_gate.acquire();
        self.ring.dequeue(dest)
    }

    /// [`Self::dequeue`], interruptible while waiting for the gate
    pub fn dequeue_cancellable(&self, dest: &mut [u8], token: &CancelToken) -> Result<usize> {
        let _gate = self.consumer_gate.acquire_cancellable(token)?;
        Ok(self.ring.dequeue(dest))
    }

    /// Copy the next record without consuming it, waiting for the consumer
    /// gate
    pub fn peek(&self, dest: &mut [u8]) -> usize {
        let _gate = self.consumer_gate.acquire();
        self.ring.peek(dest)
    }

    /// [`Self::peek`], interruptible while waiting for the gate
    pub fn peek_cancellable(&self, dest: &mut [u8], token: &CancelToken) -> Result<usize> {
        let _gate = self.consumer_gate.acquire_cancellable(token)?;
        Ok(self.ring.peek(dest))
    }

    /// Length of the next record's payload, waiting for the consumer gate
    pub fn peek_len(&self) -> usize {
        let _gate = self.consumer_gate.acquire();
        self.ring.peek_len()
    }

    /// [`Self::peek_len`], interruptible while waiting for the gate
    pub fn peek_len_cancellable(&self, token: &CancelToken) -> Result<usize> {
        let _gate = self.consumer_gate.acquire_cancellable(token)?;
        Ok(self.ring.peek_len())
    }

    /// Discard the next record, waiting for the consumer gate
    pub fn skip(&self) -> bool {
        let _gate = self.consumer_gate.acquire();
        self.ring.skip()
    }

    /// [`Self::skip`], interruptible while waiting for the gate
    pub fn skip_cancellable(&self, token: &CancelToken) -> Result<bool> {
        let _gate = self.consumer_gate.acquire_cancellable(token)?;
        Ok(self.ring.skip())
    }

    /// Used bytes; lock-free pass-through
    pub fn len(&self) -> usize {
        self.ring.len()
    }

    /// Check emptiness; lock-free pass-through
    pub fn is_empty(&self) -> bool {
        self.ring.is_empty()
    }

    /// Check fullness; lock-free pass-through
    pub fn is_full(&self) -> bool {
        self.ring.is_full()
    }

    /// Storage capacity in bytes
    pub fn capacity(&self) -> usize {
        self.ring.capacity()
    }

    /// Free bytes available for enqueueing
    pub fn available(&self) -> usize {
        self.ring.available()
    }
}
