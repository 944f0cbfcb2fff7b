//! Scoped-lock helpers for serializing access to shared objects
//!
//! Callers that juggle several threads around one shared object can serialize
//! individual operations through a mutex the object owns. The helpers here
//! take the lock reference explicitly, run the operation while the guard is
//! held, and release on every path (normal return or panic unwind).
//!
//! The underlying [`parking_lot::Mutex`] is not re-entrant: calling back into
//! a synchronized operation from inside one deadlocks. That is a caller
//! responsibility, not handled here.

use parking_lot::Mutex;

/// Run `op` while holding `lock`
///
/// The guard is dropped on all exit paths, including panics raised by `op`,
/// which propagate unchanged.
pub fn with_lock<T, R>(lock: &Mutex<T>, op: impl FnOnce(&mut T) -> R) -> R {
    let mut guard = lock.lock();
    op(&mut guard)
}

/// Shared state whose every access is serialized through an owned mutex
#[derive(Debug, Default)]
pub struct Synchronized<T> {
    inner: Mutex<T>,
}

impl<T> Synchronized<T> {
    /// Wrap `value` so all access goes through the lock
    pub fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(value),
        }
    }

    /// Run `op` with exclusive access to the wrapped value
    pub fn with<R>(&self, op: impl FnOnce(&mut T) -> R) -> R {
        with_lock(&self.inner, op)
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.inner.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_with_lock_returns_closure_result() {
        let lock = Mutex::new(40);
        let result = with_lock(&lock, |value| {
            *value += 2;
            *value
        });
        assert_eq!(result, 42);
    }

    #[test]
    fn test_concurrent_increments_are_serialized() {
        let counter = Arc::new(Synchronized::new(0u64));
        let mut handles = Vec::new();

        for _ in 0..8 {
            let counter = Arc::clone(&counter);
            handles.push(thread::spawn(move || {
                for _ in 0..1000 {
                    counter.with(|value| *value += 1);
                }
            }));
        }
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(counter.with(|value| *value), 8000);
    }

    #[test]
    fn test_lock_released_after_panic() {
        let lock = Arc::new(Mutex::new(0));

        let panicking = Arc::clone(&lock);
        let result = thread::spawn(move || {
            with_lock(&panicking, |_| panic!("boom"));
        })
        .join();
        assert!(result.is_err());

        // Guard was dropped during unwind, so the lock is free again
        assert_eq!(with_lock(&lock, |value| *value), 0);
    }
}
