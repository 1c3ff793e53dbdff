use std::cmp::Ordering;

use super::{Constrained, Constraint, ConstraintError};

/// Supplies 0 and 1 for types bounded by the unit interval.
pub trait UnitBounds: PartialOrd {
    fn zero() -> Self;
    fn one() -> Self;
}

impl UnitBounds for f64 {
    fn zero() -> Self {
        0.0
    }
    fn one() -> Self {
        1.0
    }
}

/// Marker type enforcing that a value lies in the open unit interval: `0 < x < 1`.
///
/// Bed voidage is the one input constrained this way; a fully packed
/// (`ε = 0`) or empty (`ε = 1`) bed makes every correlation degenerate.
///
/// # Examples
///
/// ```
/// use packed_bed_models::support::constraint::UnitIntervalOpen;
///
/// assert!(UnitIntervalOpen::new(0.4).is_ok());
/// assert!(UnitIntervalOpen::new(0.0).is_err());
/// assert!(UnitIntervalOpen::new(1.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct UnitIntervalOpen;

impl UnitIntervalOpen {
    /// Constructs `Constrained<T, UnitIntervalOpen>` if 0 < value < 1.
    ///
    /// # Errors
    ///
    /// - [`ConstraintError::BelowMinimum`] if less than or equal to zero.
    /// - [`ConstraintError::AboveMaximum`] if greater than or equal to one.
    /// - [`ConstraintError::NotANumber`] if comparison is undefined (e.g., NaN).
    pub fn new<T: UnitBounds>(
        value: T,
    ) -> Result<Constrained<T, UnitIntervalOpen>, ConstraintError> {
        Constrained::<T, UnitIntervalOpen>::new(value)
    }
}

impl<T: UnitBounds> Constraint<T> for UnitIntervalOpen {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match (value.partial_cmp(&T::zero()), value.partial_cmp(&T::one())) {
            (None, _) | (_, None) => Err(ConstraintError::NotANumber),
            (Some(Ordering::Less | Ordering::Equal), _) => Err(ConstraintError::BelowMinimum),
            (_, Some(Ordering::Greater | Ordering::Equal)) => Err(ConstraintError::AboveMaximum),
            _ => Ok(()),
        }
    }
}
