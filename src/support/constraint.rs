//! Type-level numeric constraints checked at construction time.
//!
//! Physical inputs to the correlation library must satisfy simple numeric
//! invariants before any formula runs: magnitudes are strictly positive and
//! voidage lies in the open unit interval. This module expresses those
//! invariants as zero-sized marker types.
//!
//! # Provided constraints
//!
//! - [`StrictlyPositive`]: Greater than zero
//! - [`UnitIntervalOpen`]: Open unit interval `0 < x < 1`
//!
//! Each marker is used with the generic [`Constrained<T, C>`] wrapper.
//! Correlation inputs are read through it and unwrapped to plain SI values.

mod strictly_positive;
mod unit_interval;

use std::marker::PhantomData;

use thiserror::Error;

pub use strictly_positive::StrictlyPositive;
pub use unit_interval::{UnitBounds, UnitIntervalOpen};

/// A trait for enforcing numeric invariants at construction time.
pub trait Constraint<T> {
    /// Checks that the given value satisfies this constraint.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if the value does not satisfy the constraint.
    fn check(value: &T) -> Result<(), ConstraintError>;
}

/// An error returned when a [`Constraint`] is violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ConstraintError {
    #[error("value must not be negative")]
    Negative,
    #[error("value must not be zero")]
    Zero,
    #[error("value is not a number")]
    NotANumber,
    #[error("value is below the minimum allowed")]
    BelowMinimum,
    #[error("value is above the maximum allowed")]
    AboveMaximum,
}

/// A wrapper enforcing a numeric constraint at construction time.
///
/// # Example
///
/// ```
/// use packed_bed_models::support::constraint::{Constrained, StrictlyPositive};
///
/// let diameter = Constrained::<_, StrictlyPositive>::new(0.003).unwrap();
/// assert_eq!(diameter.into_inner(), 0.003);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Constrained<T, C: Constraint<T>> {
    value: T,
    _marker: PhantomData<C>,
}

impl<T, C: Constraint<T>> Constrained<T, C> {
    /// Constructs a new constrained value.
    ///
    /// # Errors
    ///
    /// Returns an error if the value does not satisfy the constraint.
    pub fn new(value: T) -> Result<Self, ConstraintError> {
        C::check(&value)?;
        Ok(Self {
            value,
            _marker: PhantomData,
        })
    }

    /// Consumes the wrapper and returns the inner value.
    pub fn into_inner(self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrapper_returns_the_checked_value() {
        let voidage = UnitIntervalOpen::new(0.36).map(Constrained::into_inner);
        assert_eq!(voidage, Ok(0.36));
        assert_eq!(
            StrictlyPositive::new(-2.0).map(Constrained::into_inner),
            Err(ConstraintError::Negative)
        );
    }
}
