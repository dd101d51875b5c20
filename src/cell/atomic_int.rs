/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Integer Cell
//!
//! Provides the 64-bit signed integer specialization of `AtomicCell`,
//! together with the usual counter shortcuts.
//!
//! # Author
//!
//! Haixing Hu

use crate::cell::atomic_cell::AtomicCell;

/// Mutex-guarded 64-bit signed integer.
///
/// Arithmetic helpers wrap around on overflow, like the standard atomic
/// integer `fetch_add`.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_cell::AtomicInt;
///
/// let counter = AtomicInt::new(0);
/// counter.increment_and_get();
/// counter.add_and_get(5);
/// assert_eq!(counter.get(), 6);
/// ```
pub type AtomicInt = AtomicCell<i64>;

impl AtomicCell<i64> {
    /// Increments the value by 1, returning the old value.
    #[inline]
    pub fn get_and_increment(&self) -> i64 {
        self.get_and_add(1)
    }

    /// Increments the value by 1, returning the new value.
    #[inline]
    pub fn increment_and_get(&self) -> i64 {
        self.add_and_get(1)
    }

    /// Decrements the value by 1, returning the old value.
    #[inline]
    pub fn get_and_decrement(&self) -> i64 {
        self.get_and_add(-1)
    }

    /// Decrements the value by 1, returning the new value.
    #[inline]
    pub fn decrement_and_get(&self) -> i64 {
        self.add_and_get(-1)
    }

    /// Adds a delta to the value, returning the old value.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    ///
    /// # Returns
    ///
    /// The old value before adding.
    #[inline]
    pub fn get_and_add(&self, delta: i64) -> i64 {
        self.get_and_update(|x| x.wrapping_add(delta))
    }

    /// Adds a delta to the value, returning the new value.
    ///
    /// # Parameters
    ///
    /// * `delta` - The value to add.
    ///
    /// # Returns
    ///
    /// The new value after adding.
    #[inline]
    pub fn add_and_get(&self, delta: i64) -> i64 {
        self.update_and_get(|x| x.wrapping_add(delta))
    }
}
