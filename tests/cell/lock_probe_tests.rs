/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_cell::AtomicCell;
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

#[test]
fn test_try_acquire_on_free_lock() {
    let atomic = AtomicCell::new(0);
    assert!(!atomic.is_locked());
    let probe = atomic.try_acquire();
    assert!(probe.is_some());
    assert!(atomic.is_locked());
}

#[test]
fn test_try_acquire_on_held_lock() {
    let atomic = AtomicCell::new(0);
    let probe = atomic.try_acquire().unwrap();
    assert!(atomic.try_acquire().is_none());
    probe.release();
    assert!(!atomic.is_locked());
    assert!(atomic.try_acquire().is_some());
}

#[test]
fn test_probe_debug() {
    let atomic = AtomicCell::new(0);
    let probe = atomic.try_acquire().unwrap();
    assert_eq!(format!("{:?}", probe), "LockProbe { .. }");
}

#[test]
fn test_probe_blocks_other_threads() {
    let atomic = Arc::new(AtomicCell::new(0));
    let probe = atomic.try_acquire().unwrap();
    let (sender, receiver) = mpsc::channel();

    let handle = {
        let atomic = atomic.clone();
        thread::spawn(move || {
            atomic.set(1);
            sender.send(()).unwrap();
        })
    };

    // The writer cannot finish while the probe holds the lock.
    assert!(receiver.recv_timeout(Duration::from_millis(50)).is_err());
    drop(probe);

    receiver.recv().unwrap();
    handle.join().unwrap();
    assert_eq!(atomic.get(), 1);
}
