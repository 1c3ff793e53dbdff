//! Pressure drop for gas and liquid flowing cocurrently through a packed bed.
//!
//! Each phase's single-phase pressure drop is the Ergun equation evaluated
//! at that phase's superficial velocity over the full bed length. The
//! two-phase correlations scale the liquid value by a multiplier. All
//! results are in Pa.

use crate::support::dimensionless::Reynolds;

use super::{
    InputError, InputKind, PhysicalInputs,
    pressure_drop::{BedFlow, ergun},
};

const GRAVITY: f64 = 9.81;

/// Bounds of the Sato multiplier.
const SATO_MULTIPLIER: (f64, f64) = (1.0, 50.0);

/// `ψ` below which the Holub correlation is in the trickle regime.
const HOLUB_TRICKLE_LIMIT: f64 = 100.0;

/// Cocurrent gas-liquid flow through a packed bed, in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TwoPhaseFlow {
    pub length: f64,
    pub voidage: f64,
    pub particle_diameter: f64,
    pub liquid_velocity: f64,
    pub gas_velocity: f64,
    pub liquid_density: f64,
    pub gas_density: f64,
    pub liquid_viscosity: f64,
    pub gas_viscosity: f64,
}

impl TwoPhaseFlow {
    pub(super) fn from_inputs(inputs: &PhysicalInputs) -> Result<Self, InputError> {
        Ok(Self {
            length: inputs.require(InputKind::BedLength)?,
            voidage: inputs.require(InputKind::Voidage)?,
            particle_diameter: inputs.require(InputKind::ParticleDiameter)?,
            liquid_velocity: inputs.require(InputKind::LiquidVelocity)?,
            gas_velocity: inputs.require(InputKind::GasVelocity)?,
            liquid_density: inputs.require(InputKind::LiquidDensity)?,
            gas_density: inputs.require(InputKind::GasDensity)?,
            liquid_viscosity: inputs.require(InputKind::LiquidViscosity)?,
            gas_viscosity: inputs.require(InputKind::GasViscosity)?,
        })
    }

    /// The liquid flowing alone.
    #[must_use]
    pub fn liquid(&self) -> BedFlow {
        BedFlow {
            length: self.length,
            voidage: self.voidage,
            particle_diameter: self.particle_diameter,
            velocity: self.liquid_velocity,
            density: self.liquid_density,
            viscosity: self.liquid_viscosity,
        }
    }

    /// The gas flowing alone.
    #[must_use]
    pub fn gas(&self) -> BedFlow {
        BedFlow {
            velocity: self.gas_velocity,
            density: self.gas_density,
            viscosity: self.gas_viscosity,
            ..self.liquid()
        }
    }

    #[must_use]
    pub fn liquid_reynolds(&self) -> Reynolds {
        Reynolds::particle(
            self.liquid_density,
            self.liquid_velocity,
            self.particle_diameter,
            self.liquid_viscosity,
        )
    }

    #[must_use]
    pub fn gas_reynolds(&self) -> Reynolds {
        Reynolds::particle(
            self.gas_density,
            self.gas_velocity,
            self.particle_diameter,
            self.gas_viscosity,
        )
    }

    /// Liquid Weber number `ρL·uL²·dp/σ`.
    #[must_use]
    pub fn liquid_weber(&self, surface_tension: f64) -> f64 {
        self.liquid_density * self.liquid_velocity.powi(2) * self.particle_diameter
            / surface_tension
    }

    /// Liquid Froude number `uL²/(g·dp)`.
    #[must_use]
    pub fn liquid_froude(&self) -> f64 {
        self.liquid_velocity.powi(2) / (GRAVITY * self.particle_diameter)
    }

    fn velocity_ratio(&self) -> f64 {
        self.gas_velocity / self.liquid_velocity
    }

    fn reynolds_ratio(&self) -> f64 {
        self.gas_reynolds().value() / self.liquid_reynolds().value()
    }

    /// Lockhart-Martinelli multiplier `1 + 20/X + 1/X²`.
    fn martinelli_multiplier(&self) -> f64 {
        let x = (ergun(&self.liquid()) / ergun(&self.gas())).sqrt();
        1.0 + 20.0 / x + 1.0 / x.powi(2)
    }
}

/// Lockhart-Martinelli with the turbulent-turbulent constant `C = 20`.
#[must_use]
pub fn lockhart_martinelli(flow: &TwoPhaseFlow) -> f64 {
    ergun(&flow.liquid()) * flow.martinelli_multiplier()
}

/// Larkins, White & Jeffrey.
#[must_use]
pub fn larkins_white_jeffrey(flow: &TwoPhaseFlow) -> f64 {
    let density_ratio = (flow.gas_density / flow.liquid_density).sqrt();
    let re = flow.liquid_reynolds().value();
    let multiplier = 1.0 + 40.0 * flow.velocity_ratio() * density_ratio * re.powf(-0.2);
    ergun(&flow.liquid()) * multiplier
}

/// Sato et al., with the multiplier held to `[1, 50]`.
#[must_use]
pub fn sato(flow: &TwoPhaseFlow, surface_tension: f64) -> f64 {
    let (lowest, highest) = SATO_MULTIPLIER;
    let multiplier = 1.0
        + 25.0
            * flow.velocity_ratio().powf(0.8)
            * flow.reynolds_ratio().powf(0.3)
            * flow.liquid_weber(surface_tension).powf(-0.15);
    ergun(&flow.liquid()) * multiplier.clamp(lowest, highest)
}

/// Attou, Boyer & Ferschneider.
///
/// A liquid-side Ergun form with gas-liquid interaction `f = 0.3/ReL`,
/// amplified by the gas holdup `αG = uG/(uL + uG)`.
#[must_use]
pub fn attou_boyer_ferschneider(flow: &TwoPhaseFlow) -> f64 {
    let TwoPhaseFlow {
        length,
        voidage,
        particle_diameter: dp,
        liquid_velocity: ul,
        gas_velocity: ug,
        liquid_density,
        liquid_viscosity,
        ..
    } = *flow;
    let re = flow.liquid_reynolds().value();
    let solid = 1.0 - voidage;
    let eps3 = voidage.powi(3);

    let holdup = ug / (ul + ug);
    let interaction = 0.3 / re;
    let kappa = 150.0 * solid.powi(2) / eps3 + 1.75 * solid / eps3 * re;

    let gradient = kappa * liquid_viscosity * ul / dp.powi(2)
        + interaction * liquid_density * ul.powi(2) / dp;
    gradient * (1.0 + 3.0 * holdup) * length
}

/// Holub et al.
///
/// Uses the Lockhart-Martinelli multiplier in the trickle regime
/// (`ψ = ReL·ReG^0.4·FrL^-0.6 < 100`) and a pulsing-flow multiplier above it.
#[must_use]
pub fn holub(flow: &TwoPhaseFlow, surface_tension: f64) -> f64 {
    let psi = flow.liquid_reynolds().value()
        * flow.gas_reynolds().value().powf(0.4)
        * flow.liquid_froude().powf(-0.6);

    let multiplier = if psi < HOLUB_TRICKLE_LIMIT {
        flow.martinelli_multiplier()
    } else {
        1.0 + 60.0
            * flow.velocity_ratio().powf(0.9)
            * flow.reynolds_ratio().powf(0.2)
            * flow.liquid_weber(surface_tension).powf(-0.1)
    };
    ergun(&flow.liquid()) * multiplier
}
