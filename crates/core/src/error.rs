//! Error types for Primo wrappers
//!
//! This module defines all error types used throughout the library.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.
//!
//! Fail-guard wrappers map each named precondition to its own variant
//! (`Missing`, `Empty`, `Zero`, `NotANumber`) so callers can match on the
//! exact violation instead of parsing a message.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for Primo operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for Primo wrappers
#[derive(Debug, Error)]
pub enum Error {
    /// A value that was required to be present is absent
    #[error("Missing value: {0}")]
    Missing(String),

    /// A value that was required to be non-empty is empty
    #[error("Empty value: {0}")]
    Empty(String),

    /// A number that was required to be non-zero is zero
    #[error("Zero value: {0}")]
    Zero(String),

    /// A number that was required to be finite is NaN or infinite
    #[error("Not a number: {0}")]
    NotANumber(String),

    /// Decoding or parsing failed (base64, UTF-8, number parsing, date formats)
    #[error("Decode error: {0}")]
    Decode(String),

    /// A wrapped call did not produce a result within its time limit
    #[error("Timed out after {waited:?}")]
    Timeout {
        /// How long the caller waited before giving up
        waited: Duration,
    },

    /// A retrying wrapper used up all of its attempts
    #[error("Gave up after {attempts} attempts: {last}")]
    Exhausted {
        /// Number of attempts made
        attempts: usize,
        /// Error from the final attempt
        last: Box<Error>,
    },

    /// A wrapped operation failed for a reason of its own
    #[error("Operation failed: {0}")]
    Failed(String),
}
