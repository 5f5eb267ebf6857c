//! Ternary: condition-selected scalar

use primo_core::{Result, Scalar};

/// Scalar that evaluates a bool condition and delegates to one of two origins
///
/// Only the selected branch is evaluated.
pub struct Ternary<C, A, B> {
    condition: C,
    when_true: A,
    when_false: B,
}

impl<C, A, B, T> Ternary<C, A, B>
where
    C: Scalar<Output = bool>,
    A: Scalar<Output = T>,
    B: Scalar<Output = T>,
{
    /// Create a ternary over a condition and two branches
    pub fn new(condition: C, when_true: A, when_false: B) -> Self {
        Self {
            condition,
            when_true,
            when_false,
        }
    }
}

impl<C, A, B, T> Scalar for Ternary<C, A, B>
where
    C: Scalar<Output = bool>,
    A: Scalar<Output = T>,
    B: Scalar<Output = T>,
{
    type Output = T;

    fn value(&self) -> Result<T> {
        if self.condition.value()? {
            self.when_true.value()
        } else {
            self.when_false.value()
        }
    }
}
