/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Traits
//!
//! Defines common traits for atomic cells, providing a unified interface
//! for code that should accept any lock-guarded value.
//!
//! # Author
//!
//! Haixing Hu

/// Common trait for all atomic cells.
///
/// Provides the basic operations: get, set and swap. Each one runs as a
/// single critical section.
///
/// # Author
///
/// Haixing Hu
pub trait Atomic {
    /// The value type stored in the cell.
    type Value;

    /// Gets a copy of the current value.
    ///
    /// # Returns
    ///
    /// The current value.
    fn get(&self) -> Self::Value;

    /// Sets a new value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to set.
    fn set(&self, value: Self::Value);

    /// Swaps the current value with a new value, returning the old value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to swap in.
    ///
    /// # Returns
    ///
    /// The old value.
    fn swap(&self, value: Self::Value) -> Self::Value;
}

/// Trait for atomic cells that support transforms.
///
/// Transforms run while the lock is held. Errors they return are handed
/// back to the caller unchanged, and the lock is always released.
///
/// # Author
///
/// Haixing Hu
pub trait UpdatableAtomic: Atomic {
    /// Applies a read-only transform to the current value.
    ///
    /// # Parameters
    ///
    /// * `f` - A function that receives a view of the current value.
    ///
    /// # Returns
    ///
    /// Whatever `f` returns. The stored value is not changed.
    fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&Self::Value) -> R;

    /// Applies a fallible read-only transform to the current value.
    ///
    /// # Parameters
    ///
    /// * `f` - A function that receives a view of the current value.
    ///
    /// # Returns
    ///
    /// Whatever `f` returns, error included.
    fn try_with<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&Self::Value) -> Result<R, E>;

    /// Replaces the current value with the result of a transform.
    ///
    /// # Parameters
    ///
    /// * `f` - A function that takes the current value and returns the new
    ///   value.
    fn modify<F>(&self, f: F)
    where
        F: FnOnce(&Self::Value) -> Self::Value;

    /// Replaces the current value with the result of a fallible transform.
    ///
    /// On error nothing is stored.
    ///
    /// # Parameters
    ///
    /// * `f` - A function that takes the current value and returns the new
    ///   value or an error.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the new value was stored, or the error from `f`.
    fn try_modify<E, F>(&self, f: F) -> Result<(), E>
    where
        F: FnOnce(&Self::Value) -> Result<Self::Value, E>;

    /// Updates the value using a function, returning the old value.
    ///
    /// # Parameters
    ///
    /// * `f` - A function that takes the current value and returns the new
    ///   value.
    ///
    /// # Returns
    ///
    /// The old value before the update.
    fn get_and_update<F>(&self, f: F) -> Self::Value
    where
        F: FnOnce(&Self::Value) -> Self::Value;

    /// Updates the value using a function, returning the new value.
    ///
    /// # Parameters
    ///
    /// * `f` - A function that takes the current value and returns the new
    ///   value.
    ///
    /// # Returns
    ///
    /// The new value after the update.
    fn update_and_get<F>(&self, f: F) -> Self::Value
    where
        F: FnOnce(&Self::Value) -> Self::Value;
}
