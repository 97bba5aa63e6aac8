//! Record-framing ring buffer engine
//!
//! Two layers: [`ByteStore`] is pure power-of-two storage with wraparound
//! addressing, and [`RecordRing`] adds length-prefix record framing plus the
//! lock-free single-producer/single-consumer contract on top of it.

pub mod record;
pub mod store;

#[cfg(test)]
mod tests;

// Re-export main types for convenience
pub use record::{RecordRing, MAX_RECORD_LEN};
pub use store::ByteStore;
