//! Fail-guards over scalars
//!
//! Each guard checks one named precondition on access and raises the matching
//! error variant when it is violated:
//!
//! - `NonMissing`: the origin produced `None` → [`Error::Missing`]
//! - `NonZero`: the origin produced `0.0` (either sign) → [`Error::Zero`]
//! - `FiniteNumber`: the origin produced NaN or an infinity → [`Error::NotANumber`]
//!
//! Guards pass successful values through untouched.

use primo_core::{Error, Result, Scalar};

/// Guard that unwraps `Some` and fails on `None`
pub struct NonMissing<S> {
    origin: S,
}

impl<S, T> NonMissing<S>
where
    S: Scalar<Output = Option<T>>,
{
    /// Guard the origin against absent values
    pub fn new(origin: S) -> Self {
        Self { origin }
    }
}

impl<S, T> Scalar for NonMissing<S>
where
    S: Scalar<Output = Option<T>>,
{
    type Output = T;

    fn value(&self) -> Result<T> {
        self.origin
            .value()?
            .ok_or_else(|| Error::Missing("origin produced no value".to_string()))
    }
}

/// Guard that rejects zero
pub struct NonZero<S> {
    origin: S,
}

impl<S: Scalar<Output = f64>> NonZero<S> {
    /// Guard the origin against zero
    pub fn new(origin: S) -> Self {
        Self { origin }
    }
}

impl<S: Scalar<Output = f64>> Scalar for NonZero<S> {
    type Output = f64;

    fn value(&self) -> Result<f64> {
        let number = self.origin.value()?;
        // IEEE-754: -0.0 == 0.0, so both signs are caught here
        if number == 0.0 {
            return Err(Error::Zero("origin produced zero".to_string()));
        }
        Ok(number)
    }
}

/// Guard that rejects NaN and infinities
pub struct FiniteNumber<S> {
    origin: S,
}

impl<S: Scalar<Output = f64>> FiniteNumber<S> {
    /// Guard the origin against non-finite values
    pub fn new(origin: S) -> Self {
        Self { origin }
    }
}

impl<S: Scalar<Output = f64>> Scalar for FiniteNumber<S> {
    type Output = f64;

    fn value(&self) -> Result<f64> {
        let number = self.origin.value()?;
        if !number.is_finite() {
            return Err(Error::NotANumber(format!(
                "origin produced non-finite {number}"
            )));
        }
        Ok(number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Constant;

    #[test]
    fn test_non_missing_passes_some() {
        let guard = NonMissing::new(Constant::new(Some("here".to_string())));
        assert_eq!(guard.value().unwrap(), "here");
    }

    #[test]
    fn test_non_missing_fails_none() {
        let guard = NonMissing::new(Constant::new(None::<i64>));
        assert!(matches!(guard.value(), Err(Error::Missing(_))));
    }

    #[test]
    fn test_non_zero_passes_nonzero() {
        let guard = NonZero::new(Constant::new(0.5));
        assert_eq!(guard.value().unwrap(), 0.5);
    }

    #[test]
    fn test_non_zero_fails_positive_zero() {
        let guard = NonZero::new(Constant::new(0.0));
        assert!(matches!(guard.value(), Err(Error::Zero(_))));
    }

    #[test]
    fn test_non_zero_fails_negative_zero() {
        let guard = NonZero::new(Constant::new(-0.0));
        assert!(matches!(guard.value(), Err(Error::Zero(_))));
    }

    #[test]
    fn test_finite_passes_ordinary_number() {
        let guard = FiniteNumber::new(Constant::new(1e300));
        assert_eq!(guard.value().unwrap(), 1e300);
    }

    #[test]
    fn test_finite_fails_nan() {
        let guard = FiniteNumber::new(Constant::new(f64::NAN));
        assert!(matches!(guard.value(), Err(Error::NotANumber(_))));
    }

    #[test]
    fn test_finite_fails_infinity() {
        let guard = FiniteNumber::new(Constant::new(f64::NEG_INFINITY));
        assert!(matches!(guard.value(), Err(Error::NotANumber(_))));
    }
}
