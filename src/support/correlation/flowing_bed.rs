//! Effective axial and radial conductivity of a bed with fluid flowing through it.
//!
//! Each correlation adds a flow-driven dispersion term to a stagnant
//! contribution. The stagnant terms use the series form weighted by the
//! conductivity ratio `κ = λs/λf`:
//!
//! - axial: `λ⁰ax = λf·(1-ε)·κ/(1 + ε(κ-1))`
//! - radial: `λ⁰er = λf·(1-ε)·κ/(2 + ε(κ-1))`

use crate::support::dimensionless::{Peclet, Prandtl, Reynolds, TubeRatio};

use super::{InputError, InputKind, PhysicalInputs, conductivity::StagnantBed};

/// A packed bed with a single fluid in flow, in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowingBed {
    pub bed: StagnantBed,
    pub particle_diameter: f64,
    pub velocity: f64,
    pub density: f64,
    pub viscosity: f64,
    pub specific_heat: f64,
}

impl FlowingBed {
    pub(super) fn from_inputs(inputs: &PhysicalInputs) -> Result<Self, InputError> {
        Ok(Self {
            bed: StagnantBed::from_inputs(inputs)?,
            particle_diameter: inputs.require(InputKind::ParticleDiameter)?,
            velocity: inputs.require(InputKind::Velocity)?,
            density: inputs.require(InputKind::FluidDensity)?,
            viscosity: inputs.require(InputKind::FluidViscosity)?,
            specific_heat: inputs.require(InputKind::SpecificHeat)?,
        })
    }

    #[must_use]
    pub fn reynolds(&self) -> Reynolds {
        Reynolds::particle(self.density, self.velocity, self.particle_diameter, self.viscosity)
    }

    #[must_use]
    pub fn prandtl(&self) -> Prandtl {
        Prandtl::new(self.viscosity, self.specific_heat, self.bed.fluid_conductivity)
    }

    /// Thermal Peclet number `Re·Pr`.
    #[must_use]
    pub fn peclet(&self) -> Peclet {
        Peclet::heat(self.reynolds(), self.prandtl())
    }

    /// Stagnant axial contribution `λ⁰ax`.
    #[must_use]
    pub fn static_axial(&self) -> f64 {
        self.static_term(1.0)
    }

    /// Stagnant radial contribution `λ⁰er`.
    #[must_use]
    pub fn static_radial(&self) -> f64 {
        self.static_term(2.0)
    }

    fn static_term(&self, offset: f64) -> f64 {
        let StagnantBed {
            voidage,
            fluid_conductivity: kf,
            ..
        } = self.bed;
        let kappa = self.bed.conductivity_ratio();
        kf * (1.0 - voidage) * kappa / (offset + voidage * (kappa - 1.0))
    }

    /// `λ⁰ax + c·Pe·λf`.
    fn axial_with(&self, c: f64) -> f64 {
        self.static_axial() + c * self.peclet().value() * self.bed.fluid_conductivity
    }
}

/// Yagi-Kunii axial conductivity, dispersion term `0.7·Pe·λf`.
#[must_use]
pub fn yagi_kunii_axial(flow: &FlowingBed) -> f64 {
    flow.axial_with(0.7)
}

/// Edwards axial conductivity, dispersion term `0.5·Pe·λf`.
#[must_use]
pub fn edwards_axial(flow: &FlowingBed) -> f64 {
    flow.axial_with(0.5)
}

/// Vortmeyer axial conductivity, dispersion term `0.054·Pe·λf`.
#[must_use]
pub fn vortmeyer_axial(flow: &FlowingBed) -> f64 {
    flow.axial_with(0.054)
}

/// Yagi-Kunii radial conductivity, `λ⁰er + 0.1·Re·λf`.
#[must_use]
pub fn yagi_kunii_radial(flow: &FlowingBed) -> f64 {
    flow.static_radial() + 0.1 * flow.reynolds().value() * flow.bed.fluid_conductivity
}

/// Bauer-Schlünder radial conductivity.
///
/// The flow term scales the stagnant contribution rather than the fluid
/// conductivity.
#[must_use]
pub fn bauer_schlunder_radial(flow: &FlowingBed) -> f64 {
    let voidage = flow.bed.voidage;
    let enhancement = 0.14 * flow.reynolds().value() * (voidage / (1.0 - voidage)).sqrt();
    flow.static_radial() * (1.0 + enhancement)
}

/// Radial conductivity at the limiting radial Peclet number of 10.
#[must_use]
pub fn peclet_radial(flow: &FlowingBed) -> f64 {
    flow.static_radial() + flow.peclet().value() / 10.0 * flow.bed.fluid_conductivity
}

/// Dixon-Cresswell radial conductivity with the tube-size correction
/// `K₅ = 8.65(1 + 1.94/N²)`.
#[must_use]
pub fn dixon_cresswell_radial(flow: &FlowingBed, tube: TubeRatio) -> f64 {
    let k5 = 8.65 * (1.0 + 1.94 / tube.value().powi(2));
    flow.static_radial() + flow.bed.fluid_conductivity * flow.peclet().value() / k5
}
