//! Scalar wrappers for Primo
//!
//! This crate provides the scalar side of the library:
//! - Constant / ScalarOf: fixed and live values
//! - Cached: compute once, cache forever
//! - Mapped / FirstOf / Ternary: combinators
//! - AndOf / OrOf / NotOf / FlipSwitch: boolean gates and the toggle
//! - NonMissing / NonZero / FiniteNumber: fail-guards
//! - NumberOf / SumOf / AvgOf / MinOf / MaxOf: parsing and aggregation

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cached;
pub mod first_of;
pub mod gates;
pub mod guards;
pub mod live;
pub mod mapped;
pub mod number;
pub mod ternary;

pub use cached::Cached;
pub use first_of::FirstOf;
pub use gates::{AndOf, FlipSwitch, NotOf, OrOf};
pub use guards::{FiniteNumber, NonMissing, NonZero};
pub use live::{Constant, ScalarOf};
pub use mapped::Mapped;
pub use number::{AvgOf, MaxOf, MinOf, NumberOf, SumOf};
pub use ternary::Ternary;
