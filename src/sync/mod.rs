//! Serialization layer for multi-producer multi-consumer use
//!
//! The record ring itself is only safe for one producer and one consumer at
//! a time. This module layers two independent, cancellable mutual-exclusion
//! gates on top of it: one serializing producers, one serializing consumers.
//! That is sufficient because the two sides never share a lock and the
//! underlying ring already orders their memory accesses.

pub mod cancel;
pub mod gate;
pub mod queue;

pub use cancel::CancelToken;
pub use gate::{Gate, GateGuard};
pub use queue::SharedRecordQueue;
