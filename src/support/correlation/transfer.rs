//! Particle-to-fluid mass and heat transfer.
//!
//! Mass-transfer correlations return a Sherwood number and heat-transfer
//! correlations a Nusselt number, both based on the particle diameter.
//! None of them gate on their literature ranges.

use crate::support::dimensionless::{Prandtl, Reynolds, Schmidt};

use super::{InputError, InputKind, PhysicalInputs};

/// Flow around a single particle, in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParticleFlow {
    pub particle_diameter: f64,
    pub velocity: f64,
    pub density: f64,
    pub viscosity: f64,
}

impl ParticleFlow {
    pub(super) fn from_inputs(inputs: &PhysicalInputs) -> Result<Self, InputError> {
        Ok(Self {
            particle_diameter: inputs.require(InputKind::ParticleDiameter)?,
            velocity: inputs.require(InputKind::Velocity)?,
            density: inputs.require(InputKind::FluidDensity)?,
            viscosity: inputs.require(InputKind::FluidViscosity)?,
        })
    }

    #[must_use]
    pub fn reynolds(&self) -> Reynolds {
        Reynolds::particle(self.density, self.velocity, self.particle_diameter, self.viscosity)
    }
}

/// Ranz & Marshall, mass: `Sh = 2 + 0.6·Re^0.5·Sc^(1/3)`.
#[must_use]
pub fn ranz_marshall_mass(re: Reynolds, sc: Schmidt) -> f64 {
    2.0 + 0.6 * re.value().sqrt() * sc.value().cbrt()
}

/// Wakao & Funazkri: `Sh = 2 + 1.1·Re^0.6·Sc^(1/3)`.
#[must_use]
pub fn wakao_funazkri(re: Reynolds, sc: Schmidt) -> f64 {
    2.0 + 1.1 * re.value().powf(0.6) * sc.value().cbrt()
}

/// Rowe: `Sh = 1.1·(Re^0.5 + 0.2·Re^0.67)·Sc^0.33`.
#[must_use]
pub fn rowe(re: Reynolds, sc: Schmidt) -> f64 {
    let re = re.value();
    1.1 * (re.sqrt() + 0.2 * re.powf(0.67)) * sc.value().powf(0.33)
}

/// Ranz & Marshall, heat: `Nu = 2 + 0.6·Re^0.5·Pr^(1/3)`.
#[must_use]
pub fn ranz_marshall_heat(re: Reynolds, pr: Prandtl) -> f64 {
    2.0 + 0.6 * re.value().sqrt() * pr.value().cbrt()
}

/// Gnielinski: laminar and turbulent contributions combined in quadrature.
#[must_use]
pub fn gnielinski(re: Reynolds, pr: Prandtl) -> f64 {
    let (re, pr) = (re.value(), pr.value());
    let laminar = 0.664 * re.sqrt() * pr.cbrt();
    let turbulent =
        0.037 * re.powf(0.8) * pr / (1.0 + 2.443 * re.powf(-0.1) * (pr.powf(2.0 / 3.0) - 1.0));
    2.0 + laminar.hypot(turbulent)
}

/// Dittus-Boelter: `Nu = 0.023·Re^0.8·Pr^0.4`.
#[must_use]
pub fn dittus_boelter(re: Reynolds, pr: Prandtl) -> f64 {
    0.023 * re.value().powf(0.8) * pr.value().powf(0.4)
}

/// Hausen, turbulent: `Nu = 0.037·Re^0.8·Pr^(1/3)`.
#[must_use]
pub fn hausen(re: Reynolds, pr: Prandtl) -> f64 {
    0.037 * re.value().powf(0.8) * pr.value().cbrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn stagnant_limit_is_two() {
        let re = Reynolds::new(0.0);
        let sc = Schmidt::new(1.0, 1.0, 1.0);
        let pr = Prandtl::new(1.0, 1.0, 1.0);
        assert_relative_eq!(ranz_marshall_mass(re, sc), 2.0);
        assert_relative_eq!(wakao_funazkri(re, sc), 2.0);
        assert_relative_eq!(ranz_marshall_heat(re, pr), 2.0);
    }

    #[test]
    fn reference_values_at_re_100() {
        let re = Reynolds::new(100.0);
        let sc = Schmidt::new(1.0, 1.0, 1.0);
        let pr = Prandtl::new(1.0, 1.0, 1.0);

        assert_relative_eq!(ranz_marshall_mass(re, sc), 8.0, max_relative = 1e-12);
        assert_relative_eq!(
            wakao_funazkri(re, sc),
            2.0 + 1.1 * 100.0_f64.powf(0.6),
            max_relative = 1e-12
        );
        assert_relative_eq!(ranz_marshall_heat(re, pr), 8.0, max_relative = 1e-12);

        // With Pr = 1 the turbulent correction vanishes.
        let laminar = 6.64;
        let turbulent = 0.037 * 100.0_f64.powf(0.8);
        assert_relative_eq!(
            gnielinski(re, pr),
            2.0 + (laminar * laminar + turbulent * turbulent).sqrt(),
            max_relative = 1e-12
        );
    }

    #[test]
    fn rowe_and_dittus_boelter() {
        let re = Reynolds::new(1.0e4);
        let sc = Schmidt::new(1.0, 1.0, 1.0);
        let pr = Prandtl::new(1.0, 1.0, 1.0);
        assert_relative_eq!(
            rowe(re, sc),
            1.1 * (100.0 + 0.2 * 1.0e4_f64.powf(0.67)),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            dittus_boelter(re, pr),
            0.023 * 1.0e4_f64.powf(0.8),
            max_relative = 1e-12
        );
    }

    #[test]
    fn hausen_for_air_at_re_333() {
        let re = Reynolds::particle(1.2, 1.0, 0.005, 1.8e-5);
        let pr = Prandtl::new(1.8e-5, 1005.0, 0.026);
        let nu = hausen(re, pr);
        assert_relative_eq!(nu, 3.419_740_301_789_015, max_relative = 1e-12);
        assert_relative_eq!(nu * 0.026 / 0.005, 17.782_649_569_302_876, max_relative = 1e-12);
    }

    #[test]
    fn particle_reynolds_number() {
        let flow = ParticleFlow {
            particle_diameter: 0.003,
            velocity: 0.5,
            density: 1.225,
            viscosity: 1.81e-5,
        };
        assert_relative_eq!(flow.reynolds().value(), 101.519_337, max_relative = 1e-6);
    }
}
