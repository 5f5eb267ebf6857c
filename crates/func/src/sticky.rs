//! StickyFunc: per-input memoization
//!
//! ## Design
//!
//! Results are memoized in a `parking_lot::Mutex<HashMap>` keyed by input.
//! Only successful results are remembered; a failed application leaves no
//! entry, so the next call with the same input runs the origin again.
//!
//! The lock is NOT held across the origin call, so concurrent misses on the
//! same input may compute twice. The origin must therefore be pure enough
//! that either result is acceptable.

use parking_lot::Mutex;
use primo_core::{Func, Result};
use std::collections::HashMap;
use std::hash::Hash;

/// Func wrapper that memoizes results per input
pub struct StickyFunc<X, F>
where
    F: Func<X>,
{
    origin: F,
    memo: Mutex<HashMap<X, F::Output>>,
}

impl<X, F> StickyFunc<X, F>
where
    X: Eq + Hash + Clone,
    F: Func<X>,
    F::Output: Clone,
{
    /// Wrap an origin func in a memo table
    pub fn new(origin: F) -> Self {
        Self {
            origin,
            memo: Mutex::new(HashMap::new()),
        }
    }
}

impl<X, F> Func<X> for StickyFunc<X, F>
where
    X: Eq + Hash + Clone,
    F: Func<X>,
    F::Output: Clone,
{
    type Output = F::Output;

    fn apply(&self, input: X) -> Result<F::Output> {
        if let Some(hit) = self.memo.lock().get(&input) {
            return Ok(hit.clone());
        }
        let computed = self.origin.apply(input.clone())?;
        self.memo.lock().insert(input, computed.clone());
        Ok(computed)
    }
}
