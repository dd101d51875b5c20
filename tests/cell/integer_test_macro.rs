/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

/// Macro to generate the common operation tests for an integer cell type.
#[macro_export]
macro_rules! test_atomic_cell_integer {
    ($value_type:ty, $test_mod:ident) => {
        mod $test_mod {
            use prism3_atomic_cell::AtomicCell;
            use std::sync::Arc;
            use std::thread;

            use crate::cell::domain_error::DomainError;

            #[test]
            fn test_new() {
                let atomic = AtomicCell::<$value_type>::new(42);
                assert_eq!(atomic.get(), 42);
            }

            #[test]
            fn test_default() {
                let atomic = AtomicCell::<$value_type>::default();
                assert_eq!(atomic.get(), 0);
            }

            #[test]
            fn test_modify_scenario() {
                let atomic = AtomicCell::<$value_type>::new(0);
                atomic.modify(|x| x + 10);
                assert_eq!(atomic.get(), 10);
            }

            #[test]
            fn test_with_scenario() {
                let atomic = AtomicCell::<$value_type>::new(0);
                let result = atomic.with(|x| x + 10);
                assert_eq!(result, 10);
                assert_eq!(atomic.get(), 0);
            }

            #[test]
            fn test_set_scenario() {
                let atomic = AtomicCell::<$value_type>::new(0);
                atomic.set(10);
                assert_eq!(atomic.get(), 10);
            }

            #[test]
            fn test_swap_scenario() {
                let atomic = AtomicCell::<$value_type>::new(1);
                assert_eq!(atomic.swap(10), 1);
                assert_eq!(atomic.get(), 10);
            }

            #[test]
            fn test_try_with_error_scenario() {
                let atomic = AtomicCell::<$value_type>::new(5);
                let result: Result<(), DomainError> =
                    atomic.try_with(|x| Err(DomainError::new(*x as i64)));
                assert_eq!(result, Err(DomainError::new(5)));
                assert_eq!(atomic.get(), 5);
                assert!(atomic.try_acquire().is_some());
            }

            #[test]
            fn test_try_modify_error_scenario() {
                let atomic = AtomicCell::<$value_type>::new(5);
                let result = atomic.try_modify(|x| Err(DomainError::new(*x as i64)));
                assert_eq!(result, Err(DomainError::new(5)));
                assert_eq!(atomic.get(), 5);
                assert!(atomic.try_acquire().is_some());
            }

            #[test]
            fn test_concurrent_modify() {
                let atomic = Arc::new(AtomicCell::<$value_type>::new(0));
                let mut handles = vec![];

                for _ in 0..4 {
                    let atomic = atomic.clone();
                    let handle = thread::spawn(move || {
                        for _ in 0..25 {
                            atomic.modify(|x| x + 1);
                        }
                    });
                    handles.push(handle);
                }

                for handle in handles {
                    handle.join().unwrap();
                }

                assert_eq!(atomic.get(), 100);
            }
        }
    };
}
