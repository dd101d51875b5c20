/*******************************************************************************
 *
 *    Copyright (c) 2025.
 *    3-Prism Co. Ltd.
 *
 *    All rights reserved.
 *
 ******************************************************************************/

use prism3_atomic_cell::AtomicInt;
use proptest::prelude::*;

use crate::cell::domain_error::DomainError;

proptest! {
    #[test]
    fn modify_adds_delta(initial in -1_000_000_000i64..1_000_000_000, delta in -1_000_000_000i64..1_000_000_000) {
        let atomic = AtomicInt::new(initial);
        atomic.modify(|x| x + delta);
        prop_assert_eq!(atomic.get(), initial + delta);
    }

    #[test]
    fn with_never_mutates(initial in any::<i64>(), factor in any::<i64>()) {
        let atomic = AtomicInt::new(initial);
        let result = atomic.with(|x| x.wrapping_mul(factor));
        prop_assert_eq!(result, initial.wrapping_mul(factor));
        prop_assert_eq!(atomic.get(), initial);
    }

    #[test]
    fn set_then_get(initial in any::<i64>(), value in any::<i64>()) {
        let atomic = AtomicInt::new(initial);
        atomic.set(value);
        prop_assert_eq!(atomic.get(), value);
    }

    #[test]
    fn swap_returns_previous(initial in any::<i64>(), value in any::<i64>()) {
        let atomic = AtomicInt::new(initial);
        prop_assert_eq!(atomic.swap(value), initial);
        prop_assert_eq!(atomic.get(), value);
    }

    #[test]
    fn failed_transform_commits_nothing(initial in any::<i64>()) {
        let atomic = AtomicInt::new(initial);

        let modified = atomic.try_modify(|x| Err(DomainError::new(*x)));
        prop_assert_eq!(modified, Err(DomainError::new(initial)));
        prop_assert_eq!(atomic.get(), initial);
        prop_assert!(atomic.try_acquire().is_some());

        let read: Result<(), DomainError> = atomic.try_with(|x| Err(DomainError::new(*x)));
        prop_assert_eq!(read, Err(DomainError::new(initial)));
        prop_assert!(!atomic.is_locked());
    }
}
