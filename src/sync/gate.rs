//! Cancellable mutual-exclusion gate

use std::sync::{Mutex, MutexGuard, PoisonError, TryLockError};

use crate::error::{QueueError, Result};
use crate::sync::cancel::CancelToken;

/// Mutual-exclusion gate serializing one side (producers or consumers) of a
/// shared record queue.
///
/// Acquisition can be plain blocking or cancellable: the cancellable form
/// polls the lock and gives up with [`QueueError::Cancelled`] as soon as the
/// supplied token fires, leaving the protected state untouched.
#[derive(Debug, Default)]
pub struct Gate {
    lock: Mutex<()>,
}

/// Guard holding a [`Gate`] for the duration of one queue operation
#[derive(Debug)]
pub struct GateGuard<'a> {
    _guard: MutexGuard<'a, ()>,
}

impl Gate {
    /// Create an open gate
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the gate, blocking until it is free
    pub fn acquire(&self) -> GateGuard<'_> {
        let guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        GateGuard { _guard: guard }
    }

    /// Acquire the gate, giving up if `token` fires while waiting.
    ///
    /// # Errors
    /// [`QueueError::Cancelled`] if the token is fired before the gate is
    /// acquired; a caller may retry with a fresh token.
    pub fn acquire_cancellable(&self, token: &CancelToken) -> Result<GateGuard<'_>> {
        loop {
            if token.is_cancelled() {
                return Err(QueueError::Cancelled);
            }

            match self.lock.try_lock() {
                Ok(guard) => return Ok(GateGuard { _guard: guard }),
                Err(TryLockError::WouldBlock) => {
                    std::hint::spin_loop();
                    std::thread::yield_now();
                }
                Err(TryLockError::Poisoned(poisoned)) => {
                    return Ok(GateGuard {
                        _guard: poisoned.into_inner(),
                    })
                }
            }
        }
    }
}
