/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Cell
//!
//! Provides a value cell whose every access runs under one internal mutex.
//!
//! # Author
//!
//! Haixing Hu

use std::fmt;
use std::mem;

use parking_lot::{
    Mutex,
    MutexGuard,
};
use tracing::trace;

use crate::cell::lock_probe::LockProbe;
use crate::cell::traits::{
    Atomic,
    UpdatableAtomic,
};

/// Mutex-guarded atomic cell.
///
/// Owns a single value of type `T` and serializes all reads and writes of
/// it behind one exclusive, non-reentrant lock. Each operation acquires the
/// lock, does the minimum amount of work, and releases the lock through a
/// scoped guard, so the lock is released on normal return, on `Err`
/// returned by a transform, and on panic unwinding alike.
///
/// # Locking Strategy
///
/// - **Blocking**: Every operation waits until the lock is free. There is
///   no timeout.
/// - **Ordering**: Operations are totally ordered by lock acquisition. The
///   lock is not guaranteed to be fair.
/// - **No poisoning**: A panic inside a transform does not poison the cell.
///   The stored value is left as it was before the failed operation.
/// - **Not reentrant**: Calling back into the same cell from inside a
///   transform deadlocks.
///
/// # Transforms
///
/// Transforms receive an immutable view `&T` of the stored value. `with`
/// can therefore never change the value, and `modify` only commits the
/// value the transform returns. The fallible forms (`try_with`,
/// `try_modify`) return the transform's error exactly as produced.
///
/// # Example
///
/// ```rust
/// use prism3_atomic_cell::AtomicCell;
/// use std::sync::Arc;
/// use std::thread;
///
/// let counter = Arc::new(AtomicCell::new(0_u64));
/// let mut handles = vec![];
///
/// for _ in 0..10 {
///     let counter = counter.clone();
///     let handle = thread::spawn(move || {
///         for _ in 0..100 {
///             counter.modify(|x| x + 1);
///         }
///     });
///     handles.push(handle);
/// }
///
/// for handle in handles {
///     handle.join().unwrap();
/// }
///
/// assert_eq!(counter.get(), 1000);
/// ```
///
/// # Author
///
/// Haixing Hu
pub struct AtomicCell<T> {
    inner: Mutex<T>,
}

impl<T> AtomicCell<T> {
    /// Creates a new atomic cell.
    ///
    /// # Parameters
    ///
    /// * `value` - The initial value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicCell;
    ///
    /// let cell = AtomicCell::new(42);
    /// assert_eq!(cell.get(), 42);
    /// ```
    #[inline]
    pub fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(value),
        }
    }

    /// Sets a new value.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to store.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicCell;
    ///
    /// let cell = AtomicCell::new(0);
    /// cell.set(10);
    /// assert_eq!(cell.get(), 10);
    /// ```
    #[inline]
    pub fn set(&self, value: T) {
        let mut guard = self.lock();
        *guard = value;
    }

    /// Swaps the current value with a new value, returning the old value.
    ///
    /// The read of the old value and the store of the new value happen in
    /// one critical section. No other operation can observe a state in
    /// between.
    ///
    /// # Parameters
    ///
    /// * `value` - The new value to swap in.
    ///
    /// # Returns
    ///
    /// The old value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicCell;
    ///
    /// let cell = AtomicCell::new(1);
    /// let old = cell.swap(10);
    /// assert_eq!(old, 1);
    /// assert_eq!(cell.get(), 10);
    /// ```
    #[inline]
    pub fn swap(&self, value: T) -> T {
        let mut guard = self.lock();
        mem::replace(&mut *guard, value)
    }

    /// Applies a read-only transform to the current value.
    ///
    /// The stored value is never changed.
    ///
    /// # Parameters
    ///
    /// * `f` - A function that receives a view of the current value.
    ///
    /// # Returns
    ///
    /// Whatever `f` returns.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicCell;
    ///
    /// let cell = AtomicCell::new(0);
    /// let result = cell.with(|x| x + 10);
    /// assert_eq!(result, 10);
    /// assert_eq!(cell.get(), 0);
    /// ```
    #[inline]
    pub fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        let guard = self.lock();
        f(&*guard)
    }

    /// Applies a fallible read-only transform to the current value.
    ///
    /// If `f` returns `Err`, the lock is released and the error is returned
    /// to the caller unchanged.
    ///
    /// # Parameters
    ///
    /// * `f` - A function that receives a view of the current value.
    ///
    /// # Returns
    ///
    /// Whatever `f` returns.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicCell;
    ///
    /// let cell = AtomicCell::new(5);
    /// let result: Result<(), i32> = cell.try_with(|x| Err(*x));
    /// assert_eq!(result, Err(5));
    /// assert!(!cell.is_locked());
    /// ```
    pub fn try_with<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&T) -> Result<R, E>,
    {
        let guard = self.lock();
        let result = f(&*guard);
        if result.is_err() {
            trace!("atomic cell read transform failed");
        }
        result
    }

    /// Replaces the current value with the result of a transform.
    ///
    /// The read, the transform and the store happen in one critical
    /// section, so concurrent calls never lose an update. If `f` panics,
    /// the stored value is left unchanged.
    ///
    /// # Parameters
    ///
    /// * `f` - A function that takes the current value and returns the new
    ///   value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicCell;
    ///
    /// let cell = AtomicCell::new(0);
    /// cell.modify(|x| x + 10);
    /// assert_eq!(cell.get(), 10);
    /// ```
    #[inline]
    pub fn modify<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        let mut guard = self.lock();
        let value = f(&*guard);
        *guard = value;
    }

    /// Replaces the current value with the result of a fallible transform.
    ///
    /// On `Err`, nothing is stored, the lock is released and the error is
    /// returned to the caller unchanged.
    ///
    /// # Parameters
    ///
    /// * `f` - A function that takes the current value and returns the new
    ///   value or an error.
    ///
    /// # Returns
    ///
    /// `Ok(())` if the new value was stored, or the error from `f`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicCell;
    ///
    /// let cell = AtomicCell::new(5);
    /// let result = cell.try_modify(|x| if *x > 3 { Err("too big") } else { Ok(x + 1) });
    /// assert_eq!(result, Err("too big"));
    /// assert_eq!(cell.get(), 5);
    /// ```
    pub fn try_modify<E, F>(&self, f: F) -> Result<(), E>
    where
        F: FnOnce(&T) -> Result<T, E>,
    {
        let mut guard = self.lock();
        match f(&*guard) {
            Ok(value) => {
                *guard = value;
                Ok(())
            }
            Err(e) => {
                trace!("atomic cell update transform failed, value left unchanged");
                Err(e)
            }
        }
    }

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
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicCell;
    ///
    /// let cell = AtomicCell::new(10);
    /// let old = cell.get_and_update(|x| x * 2);
    /// assert_eq!(old, 10);
    /// assert_eq!(cell.get(), 20);
    /// ```
    #[inline]
    pub fn get_and_update<F>(&self, f: F) -> T
    where
        F: FnOnce(&T) -> T,
    {
        let mut guard = self.lock();
        let value = f(&*guard);
        mem::replace(&mut *guard, value)
    }

    /// Returns `true` if the lock is currently held.
    ///
    /// This is a snapshot. Another thread may acquire or release the lock
    /// right after it is taken. Never blocks.
    #[inline]
    pub fn is_locked(&self) -> bool {
        self.inner.is_locked()
    }

    /// Attempts to acquire the lock without blocking.
    ///
    /// The returned probe holds the lock until it is dropped and gives no
    /// access to the stored value. Callers should drop it right away.
    ///
    /// # Returns
    ///
    /// `Some(probe)` if the lock was free, or `None` if it is held
    /// elsewhere.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicCell;
    ///
    /// let cell = AtomicCell::new(0);
    /// let probe = cell.try_acquire().expect("lock should be free");
    /// assert!(cell.try_acquire().is_none());
    /// drop(probe);
    /// assert!(cell.try_acquire().is_some());
    /// ```
    #[inline]
    pub fn try_acquire(&self) -> Option<LockProbe<'_, T>> {
        self.inner.try_lock().map(LockProbe::new)
    }

    /// Consumes the cell, returning the stored value.
    #[inline]
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }

    fn lock(&self) -> MutexGuard<'_, T> {
        if let Some(guard) = self.inner.try_lock() {
            return guard;
        }
        trace!("atomic cell lock contended, blocking");
        self.inner.lock()
    }
}

impl<T: Clone> AtomicCell<T> {
    /// Gets a copy of the current value.
    ///
    /// # Returns
    ///
    /// The current value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicCell;
    ///
    /// let cell = AtomicCell::new(30);
    /// assert_eq!(cell.get(), 30);
    /// ```
    #[inline]
    pub fn get(&self) -> T {
        self.lock().clone()
    }

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
    ///
    /// # Example
    ///
    /// ```rust
    /// use prism3_atomic_cell::AtomicCell;
    ///
    /// let cell = AtomicCell::new(10);
    /// let new = cell.update_and_get(|x| x + 5);
    /// assert_eq!(new, 15);
    /// ```
    #[inline]
    pub fn update_and_get<F>(&self, f: F) -> T
    where
        F: FnOnce(&T) -> T,
    {
        let mut guard = self.lock();
        let value = f(&*guard);
        *guard = value.clone();
        value
    }
}

impl<T: Clone> Atomic for AtomicCell<T> {
    type Value = T;

    #[inline]
    fn get(&self) -> T {
        self.get()
    }

    #[inline]
    fn set(&self, value: T) {
        self.set(value);
    }

    #[inline]
    fn swap(&self, value: T) -> T {
        self.swap(value)
    }
}

impl<T: Clone> UpdatableAtomic for AtomicCell<T> {
    #[inline]
    fn with<R, F>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.with(f)
    }

    #[inline]
    fn try_with<R, E, F>(&self, f: F) -> Result<R, E>
    where
        F: FnOnce(&T) -> Result<R, E>,
    {
        self.try_with(f)
    }

    #[inline]
    fn modify<F>(&self, f: F)
    where
        F: FnOnce(&T) -> T,
    {
        self.modify(f);
    }

    #[inline]
    fn try_modify<E, F>(&self, f: F) -> Result<(), E>
    where
        F: FnOnce(&T) -> Result<T, E>,
    {
        self.try_modify(f)
    }

    #[inline]
    fn get_and_update<F>(&self, f: F) -> T
    where
        F: FnOnce(&T) -> T,
    {
        self.get_and_update(f)
    }

    #[inline]
    fn update_and_get<F>(&self, f: F) -> T
    where
        F: FnOnce(&T) -> T,
    {
        self.update_and_get(f)
    }
}

impl<T: Default> Default for AtomicCell<T> {
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> From<T> for AtomicCell<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for AtomicCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never block inside Debug; a held lock is reported instead.
        match self.inner.try_lock() {
            Some(guard) => f.debug_struct("AtomicCell").field("value", &*guard).finish(),
            None => f
                .debug_struct("AtomicCell")
                .field("value", &format_args!("<locked>"))
                .finish(),
        }
    }
}

impl<T: fmt::Display> fmt::Display for AtomicCell<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.with(|value| write!(f, "{}", value))
    }
}
