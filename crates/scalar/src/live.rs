//! Live and constant scalars
//!
//! ## Design
//!
//! - `ScalarOf` is the live wrapper: it holds a closure and invokes it on
//!   every `value()` call. Nothing is remembered between accesses.
//! - `Constant` holds an already-computed value and clones it on access.
//!
//! Closures passed to `ScalarOf` may observe external state; that is the
//! point of a live wrapper. Wrap in [`crate::Cached`] to freeze the first
//! result instead.

use primo_core::{Result, Scalar};

/// Live scalar over a closure, recomputed on every access
pub struct ScalarOf<F> {
    origin: F,
}

impl<T, F> ScalarOf<F>
where
    F: Fn() -> Result<T>,
{
    /// Create a live scalar from a closure
    pub fn new(origin: F) -> Self {
        Self { origin }
    }
}

impl<T, F> Scalar for ScalarOf<F>
where
    F: Fn() -> Result<T>,
{
    type Output = T;

    fn value(&self) -> Result<T> {
        (self.origin)()
    }
}

/// Scalar that always yields a clone of a fixed value
#[derive(Debug, Clone)]
pub struct Constant<T: Clone> {
    value: T,
}

impl<T: Clone> Constant<T> {
    /// Create a constant scalar
    pub fn new(value: T) -> Self {
        Self { value }
    }
}

impl<T: Clone> Scalar for Constant<T> {
    type Output = T;

    fn value(&self) -> Result<T> {
        Ok(self.value.clone())
    }
}
