//! Timeout: bounded wait around a func
//!
//! ## Design
//!
//! The origin runs on a dedicated worker thread while the caller waits on a
//! channel with a deadline. On expiry the caller returns [`Error::Timeout`]
//! and drops the receiver; the worker keeps running detached and its late
//! result goes nowhere. An arbitrary closure offers no cancellation point,
//! so detaching is the only honest option.
//!
//! A worker that panics disconnects the channel before sending, which the
//! caller reports as [`Error::Failed`].

use primo_core::{Error, Func, Result};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

/// Func wrapper that abandons the origin after a time limit
pub struct Timeout<F> {
    origin: Arc<F>,
    limit: Duration,
}

impl<F> Timeout<F> {
    /// Bound the origin's wall-clock time by `limit`
    pub fn new(origin: F, limit: Duration) -> Self {
        Self {
            origin: Arc::new(origin),
            limit,
        }
    }
}

impl<X, F> Func<X> for Timeout<F>
where
    X: Send + 'static,
    F: Func<X> + Send + Sync + 'static,
    F::Output: Send + 'static,
{
    type Output = F::Output;

    fn apply(&self, input: X) -> Result<F::Output> {
        let (sender, receiver) = mpsc::channel();
        let origin = Arc::clone(&self.origin);
        std::thread::Builder::new()
            .name("primo-timeout-worker".to_string())
            .spawn(move || {
                // The send fails if the caller already gave up; nothing to do
                let _ = sender.send(origin.apply(input));
            })
            .map_err(|e| Error::Failed(format!("could not spawn worker: {e}")))?;

        match receiver.recv_timeout(self.limit) {
            Ok(outcome) => outcome,
            Err(RecvTimeoutError::Timeout) => {
                tracing::warn!(
                    target: "primo::func",
                    limit_ms = self.limit.as_millis() as u64,
                    "origin exceeded time limit, abandoning worker"
                );
                Err(Error::Timeout { waited: self.limit })
            }
            Err(RecvTimeoutError::Disconnected) => Err(Error::Failed(
                "worker exited without producing a result".to_string(),
            )),
        }
    }
}
