//! Parallel loop helpers
//!
//! ## Design
//!
//! Both helpers fan the inputs out over scoped threads, one thread per
//! input, and join them all before returning. The first error observed wins;
//! remaining threads still run to completion since scoped threads cannot
//! outlive the call.
//!
//! These are deliberately trivial: no pooling, no chunking, no ordering
//! guarantees beyond "all inputs processed".

use parking_lot::Mutex;
use primo_core::{Error, Func, Proc, Result};
use std::sync::atomic::{AtomicBool, Ordering};

/// Execute a proc over every input on its own thread
///
/// Returns `Ok(())` only if every execution succeeded.
///
/// # Errors
///
/// Returns the first error observed across the threads.
pub fn for_each_in_threads<X, P>(action: &P, inputs: Vec<X>) -> Result<()>
where
    X: Send,
    P: Proc<X> + Sync,
{
    let failure: Mutex<Option<Error>> = Mutex::new(None);
    std::thread::scope(|scope| {
        for input in inputs {
            scope.spawn(|| {
                if let Err(e) = action.exec(input) {
                    let mut slot = failure.lock();
                    if slot.is_none() {
                        *slot = Some(e);
                    }
                }
            });
        }
    });
    match failure.into_inner() {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

/// Apply a bool func to every input on its own thread and AND the results
///
/// The conjunction of zero inputs is `true`.
///
/// # Errors
///
/// Returns the first error observed across the threads.
pub fn and_in_threads<X, F>(predicate: &F, inputs: Vec<X>) -> Result<bool>
where
    X: Send,
    F: Func<X, Output = bool> + Sync,
{
    let verdict = AtomicBool::new(true);
    let failure: Mutex<Option<Error>> = Mutex::new(None);
    std::thread::scope(|scope| {
        for input in inputs {
            scope.spawn(|| match predicate.apply(input) {
                Ok(true) => {}
                Ok(false) => verdict.store(false, Ordering::SeqCst),
                Err(e) => {
                    let mut slot = failure.lock();
                    if slot.is_none() {
                        *slot = Some(e);
                    }
                }
            });
        }
    });
    match failure.into_inner() {
        Some(e) => Err(e),
        None => Ok(verdict.load(Ordering::SeqCst)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{FuncOf, ProcOf};
    use std::sync::atomic::AtomicUsize;

    #[test]
    fn test_for_each_visits_all_inputs() {
        let total = AtomicUsize::new(0);
        let action = ProcOf::new(|n: usize| {
            total.fetch_add(n, Ordering::SeqCst);
            Ok(())
        });
        for_each_in_threads(&action, vec![1, 2, 3, 4]).unwrap();
        assert_eq!(total.load(Ordering::SeqCst), 10);
    }

    #[test]
    fn test_for_each_empty_inputs() {
        let action = ProcOf::new(|_: usize| Ok(()));
        assert!(for_each_in_threads(&action, vec![]).is_ok());
    }

    #[test]
    fn test_for_each_reports_error() {
        let action = ProcOf::new(|n: usize| {
            if n == 3 {
                Err(Error::Failed("three is right out".to_string()))
            } else {
                Ok(())
            }
        });
        assert!(for_each_in_threads(&action, vec![1, 2, 3, 4]).is_err());
    }

    #[test]
    fn test_and_all_true() {
        let predicate = FuncOf::new(|n: i64| Ok(n > 0));
        assert!(and_in_threads(&predicate, vec![1, 2, 3]).unwrap());
    }

    #[test]
    fn test_and_one_false() {
        let predicate = FuncOf::new(|n: i64| Ok(n > 0));
        assert!(!and_in_threads(&predicate, vec![1, -2, 3]).unwrap());
    }

    #[test]
    fn test_and_empty_is_true() {
        let predicate = FuncOf::new(|n: i64| Ok(n > 0));
        assert!(and_in_threads(&predicate, vec![]).unwrap());
    }

    #[test]
    fn test_and_error_wins() {
        let predicate = FuncOf::new(|n: i64| {
            if n == 0 {
                Err(Error::Zero("cannot judge zero".to_string()))
            } else {
                Ok(n > 0)
            }
        });
        assert!(matches!(
            and_in_threads(&predicate, vec![1, 0, 3]),
            Err(Error::Zero(_))
        ));
    }
}
