//! Function composition: chaining and repetition

use primo_core::{Error, Func, Result};

/// Func applying two funcs in sequence: `second(first(x))`
pub struct Chained<F, G> {
    first: F,
    second: G,
}

impl<F, G> Chained<F, G> {
    /// Chain two funcs
    pub fn new(first: F, second: G) -> Self {
        Self { first, second }
    }
}

impl<X, F, G> Func<X> for Chained<F, G>
where
    F: Func<X>,
    G: Func<F::Output>,
{
    type Output = G::Output;

    fn apply(&self, input: X) -> Result<G::Output> {
        self.second.apply(self.first.apply(input)?)
    }
}

/// Func applied to its own output a fixed number of times
///
/// The origin must map a type to itself. A repeat count of zero is rejected:
/// a wrapper that never runs its origin is a construction mistake.
pub struct Repeated<F> {
    origin: F,
    times: usize,
}

impl<F> Repeated<F> {
    /// Repeat the origin `times` times
    pub fn new(origin: F, times: usize) -> Self {
        Self { origin, times }
    }
}

impl<X, F> Func<X> for Repeated<F>
where
    F: Func<X, Output = X>,
{
    type Output = X;

    fn apply(&self, input: X) -> Result<X> {
        if self.times == 0 {
            return Err(Error::Failed(
                "repeat count must be at least one".to_string(),
            ));
        }
        let mut current = input;
        for _ in 0..self.times {
            current = self.origin.apply(current)?;
        }
        Ok(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FuncOf;

    #[test]
    fn test_chained_applies_in_order() {
        let chained = Chained::new(
            FuncOf::new(|n: i64| Ok(n + 1)),
            FuncOf::new(|n: i64| Ok(n * 10)),
        );
        assert_eq!(chained.apply(4).unwrap(), 50);
    }

    #[test]
    fn test_chained_changes_type() {
        let chained = Chained::new(
            FuncOf::new(|s: String| Ok(s.len())),
            FuncOf::new(|n: usize| Ok(n as i64 * 2)),
        );
        assert_eq!(chained.apply("four".to_string()).unwrap(), 8);
    }

    #[test]
    fn test_chained_first_error_stops() {
        let chained = Chained::new(
            FuncOf::new(|_: i64| -> Result<i64> { Err(Error::Failed("early".to_string())) }),
            FuncOf::new(|_: i64| -> Result<i64> { panic!("second func must stay cold") }),
        );
        assert!(chained.apply(1).is_err());
    }

    #[test]
    fn test_repeated_applies_n_times() {
        let repeated = Repeated::new(FuncOf::new(|n: i64| Ok(n * 2)), 3);
        assert_eq!(repeated.apply(1).unwrap(), 8);
    }

    #[test]
    fn test_repeated_once_is_plain_apply() {
        let repeated = Repeated::new(FuncOf::new(|n: i64| Ok(n + 5)), 1);
        assert_eq!(repeated.apply(0).unwrap(), 5);
    }

    #[test]
    fn test_repeated_zero_times_is_error() {
        let repeated = Repeated::new(FuncOf::new(|n: i64| Ok(n)), 0);
        assert!(matches!(repeated.apply(1), Err(Error::Failed(_))));
    }
}
