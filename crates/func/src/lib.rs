//! Function wrappers for Primo
//!
//! This crate provides the operation side of the library:
//! - FuncOf / ProcOf: closure adapters
//! - Chained / Repeated: composition
//! - StickyFunc: per-input memoization
//! - Retry / Fallback / Timeout: resilience around a single call
//! - for_each_in_threads / and_in_threads: trivial parallel loops

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod chained;
pub mod fallback;
pub mod parallel;
pub mod retry;
pub mod sticky;
pub mod timeout;

pub use adapters::{FuncOf, ProcOf};
pub use chained::{Chained, Repeated};
pub use fallback::Fallback;
pub use parallel::{and_in_threads, for_each_in_threads};
pub use retry::Retry;
pub use sticky::StickyFunc;
pub use timeout::Timeout;
