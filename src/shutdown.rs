//! Process-wide stop request set by the Ctrl-C handler in the `pfs` driver.
//!
//! The library never consults this on its own; a scan visitor can turn it
//! into an early stop with [`flow`].
//!
//! Relaxed atomics are sufficient for a one-way "stop" flag, and `request()`
//! is safe to call from a signal handler.

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicBool, Ordering};

static STOP: AtomicBool = AtomicBool::new(false);

/// Request a stop (idempotent).
#[inline]
pub fn request() {
    STOP.store(true, Ordering::Relaxed);
}

#[inline]
pub fn is_requested() -> bool {
    STOP.load(Ordering::Relaxed)
}

/// `Break` once a stop was requested, for use as a visitor's return value.
#[inline]
pub fn flow() -> ControlFlow<()> {
    if is_requested() {
        ControlFlow::Break(())
    } else {
        ControlFlow::Continue(())
    }
}

/// Test/utility-only: clear the flag.
#[cfg(any(test, feature = "test-utils"))]
#[inline]
pub fn reset() {
    STOP.store(false, Ordering::Relaxed);
}
