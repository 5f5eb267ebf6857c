//! Core types and traits for Primo
//!
//! This crate defines the foundation every wrapper builds on:
//! - Scalar: zero-argument value accessor
//! - Text: text accessor
//! - Bytes: byte accessor
//! - Func / Proc: function and action abstractions
//! - Error: error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod traits;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use traits::{Bytes, Func, Proc, Scalar, Text};
