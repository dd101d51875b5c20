/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Lock Probe
//!
//! A held lock that does not expose the value it protects.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;

use parking_lot::MutexGuard;

/// Proof that the lock of an [`AtomicCell`](crate::AtomicCell) was free and
/// is now held by the caller.
///
/// Returned by [`AtomicCell::try_acquire`](crate::AtomicCell::try_acquire).
/// The lock is released when the probe is dropped. While a probe is alive,
/// every other operation on the cell blocks, so probes should be dropped
/// immediately.
///
/// # Author
///
/// Haixing Hu
#[must_use = "the lock is released as soon as the probe is dropped"]
pub struct LockProbe<'a, T> {
    _guard: MutexGuard<'a, T>,
}

impl<'a, T> LockProbe<'a, T> {
    pub(crate) fn new(guard: MutexGuard<'a, T>) -> Self {
        Self { _guard: guard }
    }

    /// Releases the lock.
    ///
    /// Equivalent to dropping the probe.
    #[inline]
    pub fn release(self) {}
}

impl<T> fmt::Debug for LockProbe<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockProbe").finish_non_exhaustive()
    }
}
