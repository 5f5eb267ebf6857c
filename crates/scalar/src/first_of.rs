//! FirstOf: ordered fallback across scalars
//!
//! Tries each scalar in order and returns the first `Ok`. Later scalars are
//! never evaluated once one succeeds, so expensive fallbacks cost nothing on
//! the happy path.

use primo_core::{Error, Result, Scalar};

/// Scalar that yields the first successful value from an ordered list
///
/// If every scalar fails, the error from the last one is returned. An empty
/// list yields [`Error::Missing`].
pub struct FirstOf<T> {
    alternatives: Vec<Box<dyn Scalar<Output = T>>>,
}

impl<T> FirstOf<T> {
    /// Create from an ordered list of alternatives
    pub fn new(alternatives: Vec<Box<dyn Scalar<Output = T>>>) -> Self {
        Self { alternatives }
    }
}

impl<T> Scalar for FirstOf<T> {
    type Output = T;

    fn value(&self) -> Result<T> {
        let mut last = None;
        for alternative in &self.alternatives {
            match alternative.value() {
                Ok(found) => return Ok(found),
                Err(e) => last = Some(e),
            }
        }
        Err(last.unwrap_or_else(|| Error::Missing("no alternatives to try".to_string())))
    }
}
