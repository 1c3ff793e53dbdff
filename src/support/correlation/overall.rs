//! Overall wall-to-bed heat-transfer coefficient of a packed tube.
//!
//! Combines a wall film coefficient `hw` with an effective radial
//! conductivity `ker` through the two-dimensional pseudo-homogeneous bed
//! model.

use crate::support::{
    bessel,
    dimensionless::{Prandtl, Reynolds},
};

use super::{InputError, InputKind, PhysicalInputs};

/// A packed tube with flow, in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PackedTube {
    pub voidage: f64,
    pub particle_diameter: f64,
    pub tube_diameter: f64,
    pub velocity: f64,
    pub density: f64,
    pub viscosity: f64,
    pub specific_heat: f64,
    pub fluid_conductivity: f64,
    pub solid_conductivity: f64,
}

impl PackedTube {
    pub(super) fn from_inputs(inputs: &PhysicalInputs) -> Result<Self, InputError> {
        Ok(Self {
            voidage: inputs.require(InputKind::Voidage)?,
            particle_diameter: inputs.require(InputKind::ParticleDiameter)?,
            tube_diameter: inputs.require(InputKind::ColumnDiameter)?,
            velocity: inputs.require(InputKind::Velocity)?,
            density: inputs.require(InputKind::FluidDensity)?,
            viscosity: inputs.require(InputKind::FluidViscosity)?,
            specific_heat: inputs.require(InputKind::SpecificHeat)?,
            fluid_conductivity: inputs.require(InputKind::FluidConductivity)?,
            solid_conductivity: inputs.require(InputKind::SolidConductivity)?,
        })
    }
}

/// The two resistances in series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadialTransport {
    /// Wall film coefficient `hw`, W/(m²·K).
    pub wall_coefficient: f64,
    /// Wall Nusselt number `hw·Dt/kf`.
    pub wall_nusselt: f64,
    /// Effective radial conductivity `ker`, W/(m·K).
    pub radial_conductivity: f64,
}

/// Computes `hw` and `ker` for a packed tube.
#[must_use]
pub fn radial_transport(tube: &PackedTube) -> RadialTransport {
    let re = Reynolds::particle(
        tube.density,
        tube.velocity,
        tube.particle_diameter,
        tube.viscosity,
    )
    .value();
    let pr = Prandtl::new(tube.viscosity, tube.specific_heat, tube.fluid_conductivity).value();
    let kf = tube.fluid_conductivity;

    let wall_nusselt = (0.5 * re.sqrt() + 0.2 * re.powf(2.0 / 3.0)) * pr.cbrt();
    let kappa = tube.solid_conductivity / kf;
    let stagnant = kf * (tube.voidage + (1.0 - tube.voidage) * kappa / (1.0 + 0.1 * kappa));

    RadialTransport {
        wall_coefficient: wall_nusselt * kf / tube.tube_diameter,
        wall_nusselt,
        radial_conductivity: stagnant + 0.1 * re * pr * kf,
    }
}

/// Overall coefficient from the full Bessel-function solution.
#[must_use]
pub fn overall_complete(tube: &PackedTube) -> f64 {
    let RadialTransport {
        wall_coefficient: hw,
        radial_conductivity: ker,
        ..
    } = radial_transport(tube);
    let dt = tube.tube_diameter;

    let biot = dt / 2.0 * (4.0 * hw / (ker * dt)).sqrt();
    let bed = dt / (2.0 * ker) * bessel::i0(biot) / (biot * bessel::i1(biot));
    1.0 / (1.0 / hw + bed)
}

/// Overall coefficient with the bed resistance approximated as `Dt/(4·ker)`.
#[must_use]
pub fn overall_approximate(tube: &PackedTube) -> f64 {
    let RadialTransport {
        wall_coefficient: hw,
        radial_conductivity: ker,
        ..
    } = radial_transport(tube);
    1.0 / (1.0 / hw + tube.tube_diameter / (4.0 * ker))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn air_in_ceramic_tube() -> PackedTube {
        PackedTube {
            voidage: 0.4,
            particle_diameter: 0.005,
            tube_diameter: 0.05,
            velocity: 1.0,
            density: 1.2,
            viscosity: 1.8e-5,
            specific_heat: 1005.0,
            fluid_conductivity: 0.026,
            solid_conductivity: 1.0,
        }
    }

    #[test]
    fn wall_film_and_radial_conductivity() {
        let transport = radial_transport(&air_in_ceramic_tube());
        let re: f64 = 1.2 * 1.0 * 0.005 / 1.8e-5;
        let pr: f64 = 1.8e-5 * 1005.0 / 0.026;
        let nu = (0.5 * re.sqrt() + 0.2 * re.powf(2.0 / 3.0)) * pr.cbrt();
        assert_relative_eq!(transport.wall_nusselt, nu, max_relative = 1e-12);
        assert_relative_eq!(transport.wall_coefficient, nu * 0.026 / 0.05, max_relative = 1e-12);
        assert!(transport.radial_conductivity > 0.1 * re * pr * 0.026);
    }

    #[test]
    fn overall_is_below_the_wall_film_coefficient() {
        let tube = air_in_ceramic_tube();
        let hw = radial_transport(&tube).wall_coefficient;
        let complete = overall_complete(&tube);
        let approximate = overall_approximate(&tube);
        assert!(complete > 0.0 && complete < hw);
        assert!(approximate > 0.0 && approximate < hw);
    }

    #[test]
    fn reference_values() {
        let tube = air_in_ceramic_tube();
        assert_relative_eq!(overall_complete(&tube), 4.169_297_9, max_relative = 1e-6);
        assert_relative_eq!(overall_approximate(&tube), 7.533_469_8, max_relative = 1e-6);
    }
}
