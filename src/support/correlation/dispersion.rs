//! Axial and radial dispersion coefficients, in m²/s.
//!
//! Most models combine a molecular term proportional to `Dm` with a
//! convective term proportional to `u₀·dp`.

use crate::support::dimensionless::{Peclet, TubeRatio};

use super::{InputError, InputKind, PhysicalInputs};

/// Flow and diffusion conditions for dispersion, in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispersionFlow {
    pub voidage: f64,
    pub particle_diameter: f64,
    pub velocity: f64,
    pub molecular_diffusivity: f64,
}

impl DispersionFlow {
    pub(super) fn from_inputs(inputs: &PhysicalInputs) -> Result<Self, InputError> {
        Ok(Self {
            voidage: inputs.require(InputKind::Voidage)?,
            particle_diameter: inputs.require(InputKind::ParticleDiameter)?,
            velocity: inputs.require(InputKind::Velocity)?,
            molecular_diffusivity: inputs.require(InputKind::MolecularDiffusivity)?,
        })
    }

    /// `u₀·dp`.
    fn convective(&self) -> f64 {
        self.velocity * self.particle_diameter
    }

    /// Particle Peclet number of a dispersion coefficient.
    #[must_use]
    pub fn peclet(&self, dispersion: f64) -> Peclet {
        Peclet::dispersion(self.velocity, self.particle_diameter, dispersion)
    }
}

/// Edwards & Richardson, axial.
#[must_use]
pub fn edwards_richardson_axial(flow: &DispersionFlow) -> f64 {
    let ud = flow.convective();
    0.73 * flow.molecular_diffusivity + 0.5 * ud / (1.0 + 9.7 * flow.molecular_diffusivity / ud)
}

/// Zehner & Schlünder, axial.
#[must_use]
pub fn zehner_schlunder_axial(flow: &DispersionFlow) -> f64 {
    2.0 * flow.molecular_diffusivity / flow.voidage + 0.5 * flow.convective()
}

/// Gunn, axial.
#[must_use]
pub fn gunn_axial(flow: &DispersionFlow) -> f64 {
    0.7 * flow.molecular_diffusivity + 0.5 * flow.convective()
}

/// Wakao & Kaguei, axial.
#[must_use]
pub fn wakao_kaguei_axial(flow: &DispersionFlow) -> f64 {
    flow.voidage * flow.molecular_diffusivity + 0.5 * flow.convective()
}

/// Edwards & Richardson, radial.
#[must_use]
pub fn edwards_richardson_radial(flow: &DispersionFlow) -> f64 {
    let ud = flow.convective();
    flow.voidage * flow.molecular_diffusivity
        + 0.08 * ud / (1.0 + 9.7 * flow.molecular_diffusivity / ud)
}

/// Zehner & Schlünder, radial.
#[must_use]
pub fn zehner_schlunder_radial(flow: &DispersionFlow) -> f64 {
    flow.voidage * flow.molecular_diffusivity + 0.1 * flow.convective()
}

/// Gunn, radial.
#[must_use]
pub fn gunn_radial(flow: &DispersionFlow) -> f64 {
    flow.voidage * flow.molecular_diffusivity + flow.voidage * 0.1 * flow.convective()
}

/// Wakao & Kaguei, radial.
#[must_use]
pub fn wakao_kaguei_radial(flow: &DispersionFlow) -> f64 {
    flow.voidage * flow.molecular_diffusivity + 0.1 * flow.convective()
}

/// Lerou & Wammes, radial: `Pe = 8/(1 + 20/N²)`.
#[must_use]
pub fn lerou_wammes_radial(flow: &DispersionFlow, tube: TubeRatio) -> f64 {
    let peclet = 8.0 / (1.0 + 20.0 / tube.value().powi(2));
    flow.convective() / peclet
}

/// Bauer, radial: `1/Pe = 0.73ε/(Re·Sc) + 1/(7(2 - (1 - 2/N))²)`.
#[must_use]
pub fn bauer_radial(flow: &DispersionFlow, tube: TubeRatio) -> f64 {
    let molecular = Peclet::dispersion(
        flow.velocity,
        flow.particle_diameter,
        flow.molecular_diffusivity,
    );
    let wall = 2.0 - (1.0 - 2.0 / tube.value());
    let inverse_peclet = 0.73 * flow.voidage / molecular.value() + 1.0 / (7.0 * wall.powi(2));
    flow.convective() * inverse_peclet
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn gas_flow() -> DispersionFlow {
        DispersionFlow {
            voidage: 0.4,
            particle_diameter: 0.003,
            velocity: 0.1,
            molecular_diffusivity: 2.0e-5,
        }
    }

    #[test]
    fn axial_reference_values() {
        let flow = gas_flow();
        // u₀·dp = 3e-4
        assert_relative_eq!(gunn_axial(&flow), 0.7 * 2.0e-5 + 1.5e-4, max_relative = 1e-12);
        assert_relative_eq!(wakao_kaguei_axial(&flow), 0.4 * 2.0e-5 + 1.5e-4, max_relative = 1e-12);
        assert_relative_eq!(zehner_schlunder_axial(&flow), 1.0e-4 + 1.5e-4, max_relative = 1e-12);
        assert_relative_eq!(
            edwards_richardson_axial(&flow),
            0.73 * 2.0e-5 + 1.5e-4 / (1.0 + 9.7 * 2.0e-5 / 3.0e-4),
            max_relative = 1e-12
        );
    }

    #[test]
    fn radial_reference_values() {
        let flow = gas_flow();
        assert_relative_eq!(
            edwards_richardson_radial(&flow),
            2.257_489_878_542_510_4e-5,
            max_relative = 1e-12
        );
        assert_relative_eq!(zehner_schlunder_radial(&flow), 3.8e-5, max_relative = 1e-12);
        assert_relative_eq!(gunn_radial(&flow), 2.0e-5, max_relative = 1e-12);
        assert_relative_eq!(wakao_kaguei_radial(&flow), 3.8e-5, max_relative = 1e-12);
    }

    #[test]
    fn radial_is_smaller_than_axial() {
        let flow = gas_flow();
        assert!(edwards_richardson_radial(&flow) < edwards_richardson_axial(&flow));
        assert!(zehner_schlunder_radial(&flow) < zehner_schlunder_axial(&flow));
        assert!(gunn_radial(&flow) < gunn_axial(&flow));
        assert!(wakao_kaguei_radial(&flow) < wakao_kaguei_axial(&flow));
    }

    #[test]
    fn convective_limit_peclet_numbers() {
        // Negligible molecular diffusion leaves Pe_ax → 2 and Pe_rad → 10.
        let flow = DispersionFlow {
            molecular_diffusivity: 1.0e-30,
            ..gas_flow()
        };
        let axial = wakao_kaguei_axial(&flow);
        let radial = wakao_kaguei_radial(&flow);
        assert_relative_eq!(flow.peclet(axial).value(), 2.0, max_relative = 1e-9);
        assert_relative_eq!(flow.peclet(radial).value(), 10.0, max_relative = 1e-9);
    }

    #[test]
    fn lerou_wammes_approaches_peclet_eight_in_wide_tubes() {
        let flow = gas_flow();
        let d = lerou_wammes_radial(&flow, TubeRatio::new(30.0, 0.003));
        assert_relative_eq!(flow.peclet(d).value(), 8.0, max_relative = 1e-6);
    }

    #[test]
    fn bauer_reference_value() {
        let flow = gas_flow();
        let tube = TubeRatio::new(0.03, 0.003);
        // Re·Sc = u₀·dp/Dm = 15, N = 10.
        let expected = 3.0e-4 * (0.73 * 0.4 / 15.0 + 1.0 / (7.0 * 1.2_f64.powi(2)));
        assert_relative_eq!(bauer_radial(&flow, tube), expected, max_relative = 1e-12);
    }
}
