//! Fixed-size byte storage with wraparound addressing
//!
//! The store knows nothing about records. It owns a power-of-two region of
//! bytes addressed by ever-increasing 32-bit counters; the physical position
//! of counter `c` is `c & (capacity - 1)`. A copy that would run past the
//! physical end of the region wraps to the start, so each call resolves to
//! at most two contiguous memory operations.

use std::ptr::NonNull;

use crate::config::MAX_CAPACITY;
use crate::error::{QueueError, Result};

/// Fixed-size contiguous byte region with modular addressing.
///
/// Performs no bounds validation beyond the modular arithmetic; the record
/// ring is responsible for never requesting more bytes than fit in the
/// capacity, and for keeping producer and consumer regions disjoint.
#[derive(Debug)]
pub struct ByteStore {
    /// Backing storage, allocated once at construction
    buffer: NonNull<u8>,
    /// Capacity in bytes (always a power of two)
    capacity: usize,
    /// Mask for fast modulo operation
    mask: usize,
}

impl ByteStore {
    /// Allocate a store with at least `capacity` bytes.
    ///
    /// A non-power-of-two capacity is silently rounded up to the next power
    /// of two; callers relying on an exact capacity must pre-round.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(QueueError::invalid_parameter(
                "capacity",
                "Capacity must be greater than 0",
            ));
        }
        if capacity > MAX_CAPACITY {
            return Err(QueueError::invalid_parameter(
                "capacity",
                format!("Capacity cannot exceed {} bytes", MAX_CAPACITY),
            ));
        }

        let capacity = capacity.next_power_of_two();

        let layout = std::alloc::Layout::array::<u8>(capacity)
            .map_err(|_| QueueError::memory("Failed to create layout for byte store"))?;

        let buffer = unsafe {
            let ptr = std::alloc::alloc(layout);
            NonNull::new(ptr).ok_or_else(|| QueueError::memory("Failed to allocate byte store"))?
        };

        Ok(Self {
            buffer,
            capacity,
            mask: capacity - 1,
        })
    }

    /// Capacity of the store in bytes
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Copy `data` into the store starting at `offset & (capacity - 1)`,
    /// wrapping past the physical end.
    ///
    /// # Safety
    /// The caller must guarantee `data.len() <= capacity` and that no other
    /// thread concurrently accesses the addressed region.
    pub(crate) unsafe fn write_wrapped(&self, offset: u32, data: &[u8]) {
        let pos = offset as usize & self.mask;
        let first = data.len().min(self.capacity - pos);

        std::ptr::copy_nonoverlapping(data.as_ptr(), self.buffer.as_ptr().add(pos), first);
        std::ptr::copy_nonoverlapping(
            data.as_ptr().add(first),
            self.buffer.as_ptr(),
            data.len() - first,
        );
    }

    /// Copy `dest.len()` bytes out of the store starting at
    /// `offset & (capacity - 1)`, wrapping past the physical end.
    ///
    /// # Safety
    /// The caller must guarantee `dest.len() <= capacity` and that no other
    /// thread concurrently writes the addressed region.
    pub(crate) unsafe fn read_wrapped(&self, offset: u32, dest: &mut [u8]) {
        let pos = offset as usize & self.mask;
        let first = dest.len().min(self.capacity - pos);

        std::ptr::copy_nonoverlapping(self.buffer.as_ptr().add(pos), dest.as_mut_ptr(), first);
        std::ptr::copy_nonoverlapping(
            self.buffer.as_ptr(),
            dest.as_mut_ptr().add(first),
            dest.len() - first,
        );
    }

    /// Write a single byte at `offset & (capacity - 1)`.
    ///
    /// # Safety
    /// Same contract as [`Self::write_wrapped`].
    pub(crate) unsafe fn write_byte(&self, offset: u32, value: u8) {
        let pos = offset as usize & self.mask;
        *self.buffer.as_ptr().add(pos) = value;
    }

    /// Read a single byte at `offset & (capacity - 1)`.
    ///
    /// # Safety
    /// Same contract as [`Self::read_wrapped`].
    pub(crate) unsafe fn read_byte(&self, offset: u32) -> u8 {
        let pos = offset as usize & self.mask;
        *self.buffer.as_ptr().add(pos)
    }
}

impl Drop for ByteStore {
    fn drop(&mut self) {
        let layout = std::alloc::Layout::array::<u8>(self.capacity).unwrap();
        unsafe {
            std::alloc::dealloc(self.buffer.as_ptr(), layout);
        }
    }
}
