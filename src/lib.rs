//! Primo - composable object-style value primitives
//!
//! Primo wraps values (strings, bytes, numbers, booleans, dates) and simple
//! operations (mapping, joining, retrying, switching) in small composable
//! wrapper types. Every wrapper implements one of four interfaces:
//!
//! - [`Scalar`]: a zero-argument value accessor
//! - [`Text`]: a text accessor
//! - [`Bytes`]: a byte accessor
//! - [`Func`] / [`Proc`]: a function / action abstraction
//!
//! # Quick Start
//!
//! ```
//! use primo::{Cached, Scalar, ScalarOf};
//!
//! // Live: recomputed on every access
//! let live = ScalarOf::new(|| Ok(2 + 2));
//! assert_eq!(live.value()?, 4);
//!
//! // Cached: computed once, cached forever
//! let cached = Cached::new(ScalarOf::new(|| Ok("expensive".to_string())));
//! assert_eq!(cached.value()?, "expensive");
//! # Ok::<(), primo::Error>(())
//! ```
//!
//! # Architecture
//!
//! The library is a workspace of small crates re-exported flat from here:
//! `primo-core` (traits and errors), `primo-scalar` (scalars, gates, guards,
//! numbers), `primo-codec` (bytes and text), `primo-func` (funcs, retry,
//! fallback, timeout, parallel loops). Wrappers nest freely; the only shared
//! contract is the trait they implement.

// Re-export the public API from the member crates
pub use primo_core::{Bytes, Error, Func, Proc, Result, Scalar, Text};

pub use primo_scalar::{
    AndOf, AvgOf, Cached, Constant, FiniteNumber, FirstOf, FlipSwitch, Mapped, MaxOf, MinOf,
    NonMissing, NonZero, NotOf, NumberOf, OrOf, ScalarOf, SumOf, Ternary,
};

pub use primo_codec::{
    Base64Decoded, Base64Encoded, BytesEqual, BytesOf, DateText, Joined, NonEmptyBytes,
    NonEmptyText, TextAsBytes, TextOf, Utf8Text,
};

pub use primo_func::{
    and_in_threads, for_each_in_threads, Chained, Fallback, FuncOf, ProcOf, Repeated, Retry,
    StickyFunc, Timeout,
};
