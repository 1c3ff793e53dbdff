use std::cmp::Ordering;

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is strictly positive (greater than zero).
///
/// Every physical magnitude fed to a correlation (lengths, velocity,
/// density, viscosity, conductivities, diffusivity) carries this constraint.
///
/// # Examples
///
/// ```
/// use packed_bed_models::support::constraint::StrictlyPositive;
/// use uom::si::{f64::Velocity, velocity::meter_per_second};
///
/// assert!(StrictlyPositive::new(Velocity::new::<meter_per_second>(0.5)).is_ok());
/// assert!(StrictlyPositive::new(0.0).is_err());
/// assert!(StrictlyPositive::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct StrictlyPositive;

impl StrictlyPositive {
    /// Constructs a [`Constrained<T, StrictlyPositive>`] if the value is strictly positive.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is zero, negative, or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, StrictlyPositive>, ConstraintError> {
        Constrained::<T, StrictlyPositive>::new(value)
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for StrictlyPositive {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater) => Ok(()),
            Some(Ordering::Equal) => Err(ConstraintError::Zero),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::{dynamic_viscosity::pascal_second, f64::DynamicViscosity};

    #[test]
    fn floats() {
        assert!(StrictlyPositive::new(1.81e-5).is_ok());
        assert_eq!(StrictlyPositive::new(0.0), Err(ConstraintError::Zero));
        assert_eq!(StrictlyPositive::new(-0.4), Err(ConstraintError::Negative));
        assert_eq!(
            StrictlyPositive::check(&f64::NAN),
            Err(ConstraintError::NotANumber)
        );
    }

    #[test]
    fn viscosities() {
        let mu = DynamicViscosity::new::<pascal_second>(1.81e-5);
        assert!(StrictlyPositive::new(mu).is_ok());

        let mu = DynamicViscosity::new::<pascal_second>(0.0);
        assert!(StrictlyPositive::new(mu).is_err());
    }
}
