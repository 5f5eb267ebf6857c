//! Boolean gates and the flip switch
//!
//! ## Design
//!
//! `AndOf` and `OrOf` short-circuit: evaluation stops at the first deciding
//! term, and an error in an undecided term propagates. The empty conjunction
//! is `true`; the empty disjunction is `false`.
//!
//! `FlipSwitch` is the one stateful scalar in the crate. Every access IS the
//! toggle action: it flips the stored state and reports the new value.

use parking_lot::Mutex;
use primo_core::{Result, Scalar};

/// Conjunction over bool scalars, short-circuiting on the first `false`
pub struct AndOf {
    terms: Vec<Box<dyn Scalar<Output = bool>>>,
}

impl AndOf {
    /// Create a conjunction over the given terms
    pub fn new(terms: Vec<Box<dyn Scalar<Output = bool>>>) -> Self {
        Self { terms }
    }
}

impl Scalar for AndOf {
    type Output = bool;

    fn value(&self) -> Result<bool> {
        for term in &self.terms {
            if !term.value()? {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Disjunction over bool scalars, short-circuiting on the first `true`
pub struct OrOf {
    terms: Vec<Box<dyn Scalar<Output = bool>>>,
}

impl OrOf {
    /// Create a disjunction over the given terms
    pub fn new(terms: Vec<Box<dyn Scalar<Output = bool>>>) -> Self {
        Self { terms }
    }
}

impl Scalar for OrOf {
    type Output = bool;

    fn value(&self) -> Result<bool> {
        for term in &self.terms {
            if term.value()? {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

/// Negation of a bool scalar
pub struct NotOf<S> {
    origin: S,
}

impl<S: Scalar<Output = bool>> NotOf<S> {
    /// Negate the origin
    pub fn new(origin: S) -> Self {
        Self { origin }
    }
}

impl<S: Scalar<Output = bool>> Scalar for NotOf<S> {
    type Output = bool;

    fn value(&self) -> Result<bool> {
        Ok(!self.origin.value()?)
    }
}

/// Toggle switch: each access flips the state and returns the new one
///
/// A switch started at `false` yields `true, false, true, ...`.
///
/// Thread-safe: concurrent accesses each observe a distinct flip.
pub struct FlipSwitch {
    state: Mutex<bool>,
}

impl FlipSwitch {
    /// Create a switch with the given starting state
    ///
    /// The first access returns the opposite of `start`.
    pub fn new(start: bool) -> Self {
        Self {
            state: Mutex::new(start),
        }
    }
}

impl Scalar for FlipSwitch {
    type Output = bool;

    fn value(&self) -> Result<bool> {
        let mut state = self.state.lock();
        *state = !*state;
        Ok(*state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Constant, ScalarOf};
    use primo_core::Error;
    use std::sync::Arc;

    fn term(b: bool) -> Box<dyn Scalar<Output = bool>> {
        Box::new(Constant::new(b))
    }

    fn exploding() -> Box<dyn Scalar<Output = bool>> {
        Box::new(ScalarOf::new(|| -> Result<bool> {
            panic!("short circuit must skip this term")
        }))
    }

    #[test]
    fn test_and_all_true() {
        assert!(AndOf::new(vec![term(true), term(true)]).value().unwrap());
    }

    #[test]
    fn test_and_one_false() {
        assert!(!AndOf::new(vec![term(true), term(false)]).value().unwrap());
    }

    #[test]
    fn test_and_empty_is_true() {
        assert!(AndOf::new(vec![]).value().unwrap());
    }

    #[test]
    fn test_and_short_circuits() {
        assert!(!AndOf::new(vec![term(false), exploding()]).value().unwrap());
    }

    #[test]
    fn test_or_one_true() {
        assert!(OrOf::new(vec![term(false), term(true)]).value().unwrap());
    }

    #[test]
    fn test_or_empty_is_false() {
        assert!(!OrOf::new(vec![]).value().unwrap());
    }

    #[test]
    fn test_or_short_circuits() {
        assert!(OrOf::new(vec![term(true), exploding()]).value().unwrap());
    }

    #[test]
    fn test_or_error_propagates() {
        let gate = OrOf::new(vec![
            term(false),
            Box::new(ScalarOf::new(|| -> Result<bool> {
                Err(Error::Failed("undecided".to_string()))
            })),
        ]);
        assert!(gate.value().is_err());
    }

    #[test]
    fn test_not_inverts() {
        assert!(!NotOf::new(Constant::new(true)).value().unwrap());
        assert!(NotOf::new(Constant::new(false)).value().unwrap());
    }

    #[test]
    fn test_flip_switch_alternates() {
        let switch = FlipSwitch::new(false);
        assert!(switch.value().unwrap());
        assert!(!switch.value().unwrap());
        assert!(switch.value().unwrap());
    }

    #[test]
    fn test_flip_switch_starting_true() {
        let switch = FlipSwitch::new(true);
        assert!(!switch.value().unwrap());
        assert!(switch.value().unwrap());
    }

    #[test]
    fn test_flip_switch_concurrent_flips_all_distinct() {
        let switch = Arc::new(FlipSwitch::new(false));
        let handles: Vec<_> = (0..10)
            .map(|_| {
                let switch = Arc::clone(&switch);
                std::thread::spawn(move || switch.value().unwrap())
            })
            .collect();

        let trues = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|&b| b)
            .count();
        // 10 flips from false: exactly half land on true
        assert_eq!(trues, 5);
    }
}
