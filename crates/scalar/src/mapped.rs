//! Mapped scalar: apply a function to an origin value on access

use primo_core::{Result, Scalar};

/// Scalar that maps the origin's value through a closure
///
/// The mapping runs on every access; wrap in [`crate::Cached`] to run it once.
pub struct Mapped<S, F> {
    origin: S,
    map: F,
}

impl<S, F, U> Mapped<S, F>
where
    S: Scalar,
    F: Fn(S::Output) -> Result<U>,
{
    /// Wrap an origin scalar with a mapping closure
    pub fn new(origin: S, map: F) -> Self {
        Self { origin, map }
    }
}

impl<S, F, U> Scalar for Mapped<S, F>
where
    S: Scalar,
    F: Fn(S::Output) -> Result<U>,
{
    type Output = U;

    fn value(&self) -> Result<U> {
        (self.map)(self.origin.value()?)
    }
}
