//! Cached scalar: compute once, cache forever
//!
//! ## Design
//!
//! The first successful `value()` call stores the result in a
//! `once_cell::sync::OnceCell`; every later call clones the stored value
//! without touching the origin again.
//!
//! A failed first computation is NOT cached. The cell stays empty and the
//! next access runs the origin again, so a transiently failing origin can
//! still settle into a cached value.
//!
//! ## Thread Safety
//!
//! `Cached` is `Send + Sync` when the origin and output are. Concurrent
//! first accesses race on the cell; `OnceCell` guarantees exactly one
//! winner is stored and all callers observe it.

use once_cell::sync::OnceCell;
use primo_core::{Result, Scalar};

/// Scalar wrapper that computes its origin once and caches the result
pub struct Cached<S: Scalar> {
    origin: S,
    cell: OnceCell<S::Output>,
}

impl<S> Cached<S>
where
    S: Scalar,
    S::Output: Clone,
{
    /// Wrap an origin scalar in a compute-once cache
    pub fn new(origin: S) -> Self {
        Self {
            origin,
            cell: OnceCell::new(),
        }
    }

    /// Whether the origin has been computed and stored
    pub fn is_filled(&self) -> bool {
        self.cell.get().is_some()
    }
}

impl<S> Scalar for Cached<S>
where
    S: Scalar,
    S::Output: Clone,
{
    type Output = S::Output;

    fn value(&self) -> Result<S::Output> {
        self.cell
            .get_or_try_init(|| {
                tracing::trace!(target: "primo::scalar", "computing cached origin");
                self.origin.value()
            })
            .cloned()
    }
}
