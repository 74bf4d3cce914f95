//! Concurrency guard for sessions.

use std::sync::atomic::{AtomicBool, Ordering};

use crate::AiError;

/// Clears the `busy` flag on drop, so it is released even if the request
/// future is dropped early.
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// Acquire the busy flag, or fail with [`AiError::Busy`].
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Result<Self, AiError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(AiError::Busy);
        }
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
