//! Fallback: second chance on failure

use primo_core::{Func, Result};

/// Func wrapper that applies an alternative func when the primary fails
///
/// The fallback receives the SAME input. The primary's error is logged and
/// discarded; the fallback's own error, if any, is what the caller sees.
pub struct Fallback<F, G> {
    primary: F,
    alternative: G,
}

impl<F, G> Fallback<F, G> {
    /// Wrap a primary func with an alternative
    pub fn new(primary: F, alternative: G) -> Self {
        Self {
            primary,
            alternative,
        }
    }
}

impl<X, F, G> Func<X> for Fallback<F, G>
where
    X: Clone,
    F: Func<X>,
    G: Func<X, Output = F::Output>,
{
    type Output = F::Output;

    fn apply(&self, input: X) -> Result<F::Output> {
        match self.primary.apply(input.clone()) {
            Ok(found) => Ok(found),
            Err(e) => {
                tracing::debug!(
                    target: "primo::func",
                    error = %e,
                    "primary failed, engaging fallback"
                );
                self.alternative.apply(input)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FuncOf;
    use primo_core::Error;

    #[test]
    fn test_fallback_unused_on_success() {
        let fallback = Fallback::new(
            FuncOf::new(|n: i64| Ok(n * 2)),
            FuncOf::new(|_: i64| -> Result<i64> { panic!("fallback must stay cold") }),
        );
        assert_eq!(fallback.apply(21).unwrap(), 42);
    }

    #[test]
    fn test_fallback_engaged_on_failure() {
        let fallback = Fallback::new(
            FuncOf::new(|_: i64| -> Result<i64> { Err(Error::Failed("down".to_string())) }),
            FuncOf::new(|n: i64| Ok(n + 100)),
        );
        assert_eq!(fallback.apply(1).unwrap(), 101);
    }

    #[test]
    fn test_fallback_error_surfaces_when_both_fail() {
        let fallback = Fallback::new(
            FuncOf::new(|_: i64| -> Result<i64> { Err(Error::Failed("primary".to_string())) }),
            FuncOf::new(|_: i64| -> Result<i64> { Err(Error::Failed("alternative".to_string())) }),
        );
        match fallback.apply(1) {
            Err(Error::Failed(msg)) => assert_eq!(msg, "alternative"),
            other => panic!("Unexpected result: {other:?}"),
        }
    }
}
