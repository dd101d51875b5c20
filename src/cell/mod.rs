/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

//! # Atomic Cells
//!
//! Provides a lock-guarded value cell. All access to the stored value goes
//! through a small set of operations, each of which runs as a single
//! critical section.
//!
//! # Features
//!
//! - Blocking get, set and swap
//! - Read-only and read-modify-write transforms, with fallible variants
//!   whose errors pass through unchanged
//! - Non-blocking lock probe for tests and diagnostics
//!
//! # Author
//!
//! Haixing Hu

mod atomic_cell;
mod atomic_int;
mod lock_probe;
mod traits;

pub use atomic_cell::AtomicCell;
pub use atomic_int::AtomicInt;
pub use lock_probe::LockProbe;
pub use traits::{
    Atomic,
    UpdatableAtomic,
};
