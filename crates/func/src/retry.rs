//! Retry: bounded re-application of a failing func
//!
//! ## Design
//!
//! The wrapper replays the SAME input up to a fixed number of attempts, with
//! an optional fixed delay between them. The input must be `Clone` so it can
//! be replayed.
//!
//! The origin may be called multiple times, so it must be safe to repeat:
//! no irreversible side effects before the point of failure.
//!
//! Exhaustion yields [`Error::Exhausted`] carrying the attempt count and the
//! error from the final attempt.

use primo_core::{Error, Func, Result};
use std::time::Duration;

/// Func wrapper that retries the origin up to a fixed number of attempts
pub struct Retry<F> {
    origin: F,
    attempts: usize,
    delay: Option<Duration>,
}

impl<F> Retry<F> {
    /// Retry up to `attempts` times with no delay between attempts
    ///
    /// An attempt budget of zero is rejected at apply time.
    pub fn new(origin: F, attempts: usize) -> Self {
        Self {
            origin,
            attempts,
            delay: None,
        }
    }

    /// Retry up to `attempts` times, sleeping `delay` between attempts
    pub fn with_delay(origin: F, attempts: usize, delay: Duration) -> Self {
        Self {
            origin,
            attempts,
            delay: Some(delay),
        }
    }
}

impl<X, F> Func<X> for Retry<F>
where
    X: Clone,
    F: Func<X>,
{
    type Output = F::Output;

    fn apply(&self, input: X) -> Result<F::Output> {
        if self.attempts == 0 {
            return Err(Error::Failed(
                "attempt budget must be at least one".to_string(),
            ));
        }
        let mut last = Error::Failed("no attempts made".to_string());
        for attempt in 1..=self.attempts {
            match self.origin.apply(input.clone()) {
                Ok(found) => return Ok(found),
                Err(e) => {
                    tracing::debug!(
                        target: "primo::func",
                        attempt,
                        budget = self.attempts,
                        error = %e,
                        "attempt failed"
                    );
                    last = e;
                    if attempt < self.attempts {
                        if let Some(delay) = self.delay {
                            std::thread::sleep(delay);
                        }
                    }
                }
            }
        }
        Err(Error::Exhausted {
            attempts: self.attempts,
            last: Box::new(last),
        })
    }
}
