/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/
//! # Atomic Cell Counter Example
//!
//! Demonstrates using an atomic cell as a thread-safe counter.

use prism3_atomic_cell::{
    AtomicCell,
    AtomicInt,
};
use std::sync::Arc;
use std::thread;

fn main() {
    println!("=== Atomic Cell Counter Example ===\n");

    // Example 1: Basic cell operations
    println!("1. Basic Cell Operations:");
    let counter = AtomicInt::new(0);
    println!("   Initial value: {}", counter.get());

    counter.modify(|x| x + 10);
    println!("   After modify(+10): {}", counter.get());

    let peek = counter.with(|x| x * 2);
    println!("   with(*2) returned {}, value still {}", peek, counter.get());

    let old = counter.swap(1);
    println!("   swap(1) returned {}, value now {}", old, counter.get());

    // Example 2: Multi-threaded counter
    println!("\n2. Multi-threaded Counter:");
    let counter = Arc::new(AtomicInt::new(0));
    let num_threads = 10;
    let increments_per_thread = 1000;

    let mut handles = vec![];
    for i in 0..num_threads {
        let counter = counter.clone();
        let handle = thread::spawn(move || {
            for _ in 0..increments_per_thread {
                counter.modify(|x| x + 1);
            }
            println!("   Thread {} completed", i);
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    println!(
        "   Final count: {} (expected: {})",
        counter.get(),
        num_threads * increments_per_thread
    );

    // Example 3: Failing transforms
    println!("\n3. Failing Transforms:");
    let balance = AtomicCell::new(100_u32);
    println!("   Initial balance: {}", balance);

    for amount in [30, 50, 40] {
        match balance.try_modify(|b| b.checked_sub(amount).ok_or(amount)) {
            Ok(()) => println!("   Withdrew {}: balance is now {}", amount, balance),
            Err(rejected) => println!(
                "   Rejected withdrawal of {}: balance stays {}",
                rejected, balance
            ),
        }
    }
    println!("   Lock held afterwards: {}", balance.is_locked());

    println!("\n=== Example completed ===");
}
