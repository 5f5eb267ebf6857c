//! Number wrappers: parsing and aggregation
//!
//! ## Design
//!
//! All numeric wrappers work in `f64`, matching the pass-through nature of
//! the conversions they wrap. Aggregates are eager over a stored `Vec<f64>`;
//! the scalars themselves stay cheap and reusable.
//!
//! Edge cases:
//! - `SumOf` / `AvgOf` of nothing is `0.0`
//! - `MinOf` / `MaxOf` of nothing is [`Error::Empty`]
//! - `MinOf` / `MaxOf` skip NaN; all-NaN input is [`Error::NotANumber`]
//! - `SumOf` / `AvgOf` let NaN propagate per IEEE-754

use primo_core::{Error, Result, Scalar, Text};

/// Number parsed from text on access
///
/// Surrounding whitespace is tolerated. A failed parse is [`Error::Decode`].
pub struct NumberOf<T> {
    origin: T,
}

impl<T: Text> NumberOf<T> {
    /// Parse the origin text as a number
    pub fn new(origin: T) -> Self {
        Self { origin }
    }
}

impl<T: Text> Scalar for NumberOf<T> {
    type Output = f64;

    fn value(&self) -> Result<f64> {
        let raw = self.origin.as_string()?;
        raw.trim()
            .parse::<f64>()
            .map_err(|e| Error::Decode(format!("not a number {raw:?}: {e}")))
    }
}

/// Sum of a sequence of numbers
pub struct SumOf {
    numbers: Vec<f64>,
}

impl SumOf {
    /// Create from any sequence of numbers
    pub fn new(numbers: impl IntoIterator<Item = f64>) -> Self {
        Self {
            numbers: numbers.into_iter().collect(),
        }
    }
}

impl Scalar for SumOf {
    type Output = f64;

    fn value(&self) -> Result<f64> {
        Ok(self.numbers.iter().sum())
    }
}

/// Arithmetic mean of a sequence of numbers
///
/// The mean of an empty sequence is `0.0`.
pub struct AvgOf {
    numbers: Vec<f64>,
}

impl AvgOf {
    /// Create from any sequence of numbers
    pub fn new(numbers: impl IntoIterator<Item = f64>) -> Self {
        Self {
            numbers: numbers.into_iter().collect(),
        }
    }
}

impl Scalar for AvgOf {
    type Output = f64;

    fn value(&self) -> Result<f64> {
        if self.numbers.is_empty() {
            return Ok(0.0);
        }
        let total: f64 = self.numbers.iter().sum();
        Ok(total / self.numbers.len() as f64)
    }
}

/// Smallest number in a sequence
pub struct MinOf {
    numbers: Vec<f64>,
}

impl MinOf {
    /// Create from any sequence of numbers
    pub fn new(numbers: impl IntoIterator<Item = f64>) -> Self {
        Self {
            numbers: numbers.into_iter().collect(),
        }
    }
}

impl Scalar for MinOf {
    type Output = f64;

    fn value(&self) -> Result<f64> {
        extremum(&self.numbers, f64::min)
    }
}

/// Largest number in a sequence
pub struct MaxOf {
    numbers: Vec<f64>,
}

impl MaxOf {
    /// Create from any sequence of numbers
    pub fn new(numbers: impl IntoIterator<Item = f64>) -> Self {
        Self {
            numbers: numbers.into_iter().collect(),
        }
    }
}

impl Scalar for MaxOf {
    type Output = f64;

    fn value(&self) -> Result<f64> {
        extremum(&self.numbers, f64::max)
    }
}

fn extremum(numbers: &[f64], pick: fn(f64, f64) -> f64) -> Result<f64> {
    if numbers.is_empty() {
        return Err(Error::Empty("no numbers to compare".to_string()));
    }
    // f64::min / f64::max ignore a NaN operand, so a fold over them skips NaN
    let found = numbers.iter().copied().fold(f64::NAN, pick);
    if found.is_nan() {
        return Err(Error::NotANumber("every input was NaN".to_string()));
    }
    Ok(found)
}
