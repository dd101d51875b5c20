/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # prism3-rust-atomic-cell
//!
//! A mutex-guarded cell providing atomic get, set, swap and transform
//! operations on a single value.
//!
//! Every operation runs inside one critical section of an internal lock.
//! The lock is released through a scoped guard on every exit path, so a
//! transform that returns an error (or panics) never leaves the cell
//! blocked.
//!
//! ## Design Goals
//!
//! - **Ease of Use**: No memory orderings to pick, no guards to hold
//! - **Safety**: The payload is only reachable while the lock is held
//! - **Transparency**: Errors from caller transforms propagate unchanged
//!
//! ## Features
//!
//! - Generic cell: `AtomicCell<T>`
//! - Integer cell: `AtomicInt`
//! - Common traits: `Atomic`, `UpdatableAtomic`
//!
//! ## Example
//!
//! ```rust
//! use prism3_atomic_cell::{AtomicInt, UpdatableAtomic};
//! use std::sync::Arc;
//! use std::thread;
//!
//! // Basic usage
//! let counter = AtomicInt::new(0);
//! counter.modify(|x| x + 1);
//! assert_eq!(counter.get(), 1);
//!
//! // Concurrent usage
//! let counter = Arc::new(AtomicInt::new(0));
//! let mut handles = vec![];
//!
//! for _ in 0..10 {
//!     let counter = counter.clone();
//!     let handle = thread::spawn(move || {
//!         for _ in 0..100 {
//!             counter.modify(|x| x + 1);
//!         }
//!     });
//!     handles.push(handle);
//! }
//!
//! for handle in handles {
//!     handle.join().unwrap();
//! }
//!
//! assert_eq!(counter.get(), 1000);
//! ```
//!
//! ## Author
//!
//! Haixing Hu

#![deny(missing_docs)]
#![forbid(unsafe_code)]

pub mod cell;

// Re-export all cell types and traits
pub use cell::{
    Atomic,
    AtomicCell,
    AtomicInt,
    LockProbe,
    UpdatableAtomic,
};
