//! Closure adapters for the Func and Proc traits

use primo_core::{Func, Proc, Result};

/// Func over a closure
pub struct FuncOf<F> {
    body: F,
}

impl<F> FuncOf<F> {
    /// Create a func from a closure
    pub fn new(body: F) -> Self {
        Self { body }
    }
}

impl<X, Y, F> Func<X> for FuncOf<F>
where
    F: Fn(X) -> Result<Y>,
{
    type Output = Y;

    fn apply(&self, input: X) -> Result<Y> {
        (self.body)(input)
    }
}

/// Proc over a closure
pub struct ProcOf<F> {
    body: F,
}

impl<F> ProcOf<F> {
    /// Create a proc from a closure
    pub fn new(body: F) -> Self {
        Self { body }
    }
}

impl<X, F> Proc<X> for ProcOf<F>
where
    F: Fn(X) -> Result<()>,
{
    fn exec(&self, input: X) -> Result<()> {
        (self.body)(input)
    }
}
