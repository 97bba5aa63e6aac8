//! Cancellation token for interruptible gate acquisition

use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};

/// Shared flag that interrupts a pending gate acquisition.
///
/// Clones observe the same flag, so a token handed to a blocked caller can
/// be fired from any other thread. Cancellation is sticky: once fired, every
/// subsequent cancellable acquisition through the token fails until a fresh
/// token is used.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Create a new, un-fired token
    pub fn new() -> Self {
        Self::default()
    }

    /// Fire the token, interrupting any waiter that holds a clone
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Check whether the token has been fired
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
