//! Core trait definitions for Primo
//!
//! This module defines the four interfaces every wrapper in the library
//! implements:
//!
//! - [`Scalar`]: zero-argument value accessor
//! - [`Text`]: text accessor
//! - [`Bytes`]: byte accessor
//! - [`Func`] / [`Proc`]: function and action abstractions
//!
//! All accessors are fallible. A wrapper that can never fail still returns
//! `Result` so wrappers compose without special cases.

use crate::error::Result;

/// A single value computed (or cached) on demand
///
/// Whether `value()` recomputes on every call or caches the first result is
/// a property of the concrete wrapper, not of this trait. Live wrappers
/// recompute; cached wrappers compute once.
///
/// # Errors
///
/// Returns an error if the underlying computation fails.
pub trait Scalar {
    /// The type of the produced value
    type Output;

    /// Produce the value
    fn value(&self) -> Result<Self::Output>;
}

/// A value readable as text
///
/// # Errors
///
/// Returns an error if the underlying source cannot be rendered as a string
/// (for example, bytes that are not valid UTF-8).
pub trait Text {
    /// Render the value as an owned string
    fn as_string(&self) -> Result<String>;
}

/// A value readable as bytes
///
/// # Errors
///
/// Returns an error if the underlying source cannot be produced.
pub trait Bytes {
    /// Produce the raw bytes
    fn as_bytes(&self) -> Result<Vec<u8>>;
}

/// A one-argument function
///
/// Funcs take their input by value. Retrying and parallel wrappers require
/// `Clone` inputs so the same argument can be replayed.
///
/// # Errors
///
/// Returns an error if the application fails.
pub trait Func<X> {
    /// The type of the produced result
    type Output;

    /// Apply the function to the input
    fn apply(&self, input: X) -> Result<Self::Output>;
}

/// A one-argument action with no result
///
/// # Errors
///
/// Returns an error if the action fails.
pub trait Proc<X> {
    /// Execute the action on the input
    fn exec(&self, input: X) -> Result<()>;
}

// Box and reference forwarding so trait objects compose like plain wrappers.

impl<T: Scalar + ?Sized> Scalar for Box<T> {
    type Output = T::Output;

    fn value(&self) -> Result<Self::Output> {
        (**self).value()
    }
}

impl<T: Scalar + ?Sized> Scalar for &T {
    type Output = T::Output;

    fn value(&self) -> Result<Self::Output> {
        (**self).value()
    }
}

impl<T: Text + ?Sized> Text for Box<T> {
    fn as_string(&self) -> Result<String> {
        (**self).as_string()
    }
}

impl<T: Text + ?Sized> Text for &T {
    fn as_string(&self) -> Result<String> {
        (**self).as_string()
    }
}

impl<T: Bytes + ?Sized> Bytes for Box<T> {
    fn as_bytes(&self) -> Result<Vec<u8>> {
        (**self).as_bytes()
    }
}

impl<T: Bytes + ?Sized> Bytes for &T {
    fn as_bytes(&self) -> Result<Vec<u8>> {
        (**self).as_bytes()
    }
}

impl<X, T: Func<X> + ?Sized> Func<X> for Box<T> {
    type Output = T::Output;

    fn apply(&self, input: X) -> Result<Self::Output> {
        (**self).apply(input)
    }
}

impl<X, T: Func<X> + ?Sized> Func<X> for &T {
    type Output = T::Output;

    fn apply(&self, input: X) -> Result<Self::Output> {
        (**self).apply(input)
    }
}

impl<X, T: Proc<X> + ?Sized> Proc<X> for Box<T> {
    fn exec(&self, input: X) -> Result<()> {
        (**self).exec(input)
    }
}

impl<X, T: Proc<X> + ?Sized> Proc<X> for &T {
    fn exec(&self, input: X) -> Result<()> {
        (**self).exec(input)
    }
}
