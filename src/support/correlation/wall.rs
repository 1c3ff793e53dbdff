//! Wall-to-bed heat-transfer coefficient.
//!
//! Every correlation here returns the wall Nusselt number `Nu_w = hw·dp/kf`.
//! The Li-Finlayson, Dixon-Cresswell, De Wasch-Froment and Specchia
//! correlations are stated with a validity window on the particle Reynolds
//! number and refuse to produce a value outside it. The rest carry their
//! literature ranges as advisories only.

use crate::support::dimensionless::{Prandtl, Reynolds, TubeRatio};

use super::{
    CorrelationId, Enforcement, Group, InputError, InputKind, PhysicalInputs, RangeViolation,
};

/// Flow conditions near the tube wall, in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallFlow {
    pub particle_diameter: f64,
    pub tube_diameter: f64,
    pub velocity: f64,
    pub density: f64,
    pub viscosity: f64,
    pub specific_heat: f64,
    pub fluid_conductivity: f64,
}

impl WallFlow {
    pub(super) fn from_inputs(inputs: &PhysicalInputs) -> Result<Self, InputError> {
        Ok(Self {
            particle_diameter: inputs.require(InputKind::ParticleDiameter)?,
            tube_diameter: inputs.require(InputKind::ColumnDiameter)?,
            velocity: inputs.require(InputKind::Velocity)?,
            density: inputs.require(InputKind::FluidDensity)?,
            viscosity: inputs.require(InputKind::FluidViscosity)?,
            specific_heat: inputs.require(InputKind::SpecificHeat)?,
            fluid_conductivity: inputs.require(InputKind::FluidConductivity)?,
        })
    }

    /// Particle Reynolds number from the mass flux `G = ρ·u₀`.
    #[must_use]
    pub fn reynolds(&self) -> Reynolds {
        Reynolds::particle(self.density, self.velocity, self.particle_diameter, self.viscosity)
    }

    #[must_use]
    pub fn prandtl(&self) -> Prandtl {
        Prandtl::new(self.viscosity, self.specific_heat, self.fluid_conductivity)
    }

    #[must_use]
    pub fn tube_ratio(&self) -> TubeRatio {
        TubeRatio::new(self.tube_diameter, self.particle_diameter)
    }

    /// Converts a wall Nusselt number into `hw` in W/(m²·K).
    #[must_use]
    pub fn coefficient(&self, nusselt: f64) -> f64 {
        nusselt * self.fluid_conductivity / self.particle_diameter
    }
}

/// `c·Re^a·Pr^0.33·(dp/Dt)^d`, gated by the correlation's Reynolds window.
fn gated_power_law(
    id: CorrelationId,
    (c, a, d): (f64, f64, f64),
    re: Reynolds,
    pr: Prandtl,
    tube: TubeRatio,
) -> Result<f64, RangeViolation> {
    id.definition()
        .check(Group::ParticleReynolds, re.value(), Enforcement::Required)?;
    Ok(c * re.value().powf(a) * pr.value().powf(0.33) * tube.inverse().powf(d))
}

/// Li & Finlayson, valid for `1 < Re < 100`.
///
/// # Errors
///
/// Returns a [`RangeViolation`] outside the Reynolds window.
pub fn li_finlayson(re: Reynolds, pr: Prandtl, tube: TubeRatio) -> Result<f64, RangeViolation> {
    gated_power_law(CorrelationId::LiFinlayson, (0.17, 0.79, -0.25), re, pr, tube)
}

/// Dixon & Cresswell, valid for `1 < Re < 50`.
///
/// # Errors
///
/// Returns a [`RangeViolation`] outside the Reynolds window.
pub fn dixon_cresswell(re: Reynolds, pr: Prandtl, tube: TubeRatio) -> Result<f64, RangeViolation> {
    gated_power_law(CorrelationId::DixonCresswell, (0.23, 0.7, -0.2), re, pr, tube)
}

/// De Wasch & Froment, valid for `100 < Re < 1000`.
///
/// # Errors
///
/// Returns a [`RangeViolation`] outside the Reynolds window.
pub fn de_wasch_froment(re: Reynolds, pr: Prandtl, tube: TubeRatio) -> Result<f64, RangeViolation> {
    gated_power_law(CorrelationId::DeWaschFroment, (0.31, 0.93, -0.5), re, pr, tube)
}

/// De Wasch & Froment with the `0.11`, `(dp/Dt)^-0.485` coefficient set.
///
/// # Errors
///
/// Returns a [`RangeViolation`] outside `100 < Re < 1000`.
pub fn de_wasch_froment_alternate(
    re: Reynolds,
    pr: Prandtl,
    tube: TubeRatio,
) -> Result<f64, RangeViolation> {
    gated_power_law(
        CorrelationId::DeWaschFromentAlternate,
        (0.11, 0.93, -0.485),
        re,
        pr,
        tube,
    )
}

/// Specchia et al., valid for `50 < Re < 500`.
///
/// # Errors
///
/// Returns a [`RangeViolation`] outside the Reynolds window.
pub fn specchia(re: Reynolds, pr: Prandtl, tube: TubeRatio) -> Result<f64, RangeViolation> {
    gated_power_law(CorrelationId::Specchia, (0.27, 0.85, -0.33), re, pr, tube)
}

/// Leva.
#[must_use]
pub fn leva(re: Reynolds, tube: TubeRatio) -> f64 {
    let ratio = tube.inverse();
    0.813 * ratio * (-6.0 * ratio).exp() * re.value().powf(0.9)
}

/// Demirel et al.
#[must_use]
pub fn demirel(re: Reynolds) -> f64 {
    0.047 * re.value().powf(0.927)
}

/// Laguerre et al.
#[must_use]
pub fn laguerre(re: Reynolds, pr: Prandtl) -> f64 {
    1.56 * pr.value().cbrt() * re.value().powf(0.42)
}

/// Das et al.
#[must_use]
pub fn das(re: Reynolds, pr: Prandtl) -> f64 {
    1.351 + 0.1124 * pr.value().cbrt() * re.value().powf(0.878)
}

/// Leva et al., `3.5·(dp/Dt)·e^(-4.6·dp/Dt)·Re^0.7`.
#[must_use]
pub fn leva_et_al(re: Reynolds, tube: TubeRatio) -> f64 {
    let ratio = tube.inverse();
    3.5 * ratio * (-4.6 * ratio).exp() * re.value().powf(0.7)
}

/// Chu & Storrow, for a bed of length `L`, given as `length_ratio = L/Dt`.
#[must_use]
pub fn chu_storrow(re: Reynolds, tube: TubeRatio, length_ratio: f64) -> f64 {
    0.134 * tube.inverse().powf(-0.13) * length_ratio.powf(-0.9) * re.value().powf(1.17)
}

/// Yagi & Wakao, switching from the `Re^0.5` to the `Re^0.8` branch at `Re = 40`.
#[must_use]
pub fn yagi_wakao(re: Reynolds) -> f64 {
    let re = re.value();
    if re < 40.0 {
        0.6 * re.sqrt()
    } else {
        0.2 * re.powf(0.8)
    }
}

/// Kunii et al.
#[must_use]
pub fn kunii_et_al(re: Reynolds, pr: Prandtl) -> f64 {
    0.2 * re.value().powf(0.75) * pr.value().powf(0.33)
}

/// Olbrich & Potter.
#[must_use]
pub fn olbrich_potter(re: Reynolds, pr: Prandtl) -> f64 {
    8.9 * pr.value().cbrt() * re.value().powf(0.34)
}

/// Specchia, Baldi & Sicardi, `2ε + 0.0835·Re^0.91`.
#[must_use]
pub fn specchia_baldi_sicardi(re: Reynolds, voidage: f64) -> f64 {
    2.0 * voidage + 0.0835 * re.value().powf(0.91)
}

/// Colledge & Paterson.
#[must_use]
pub fn colledge_paterson(re: Reynolds, pr: Prandtl, tube: TubeRatio) -> f64 {
    0.523 * (1.0 - tube.inverse()) * pr.value().cbrt() * re.value().powf(0.738)
}

/// Dixon et al.
#[must_use]
pub fn dixon_et_al(re: Reynolds, pr: Prandtl, tube: TubeRatio) -> f64 {
    (1.0 - 1.5 * tube.inverse().powf(1.5)) * pr.value().cbrt() * re.value().powf(0.59)
}

/// Peters et al.
#[must_use]
pub fn peters_et_al(re: Reynolds, pr: Prandtl, tube: TubeRatio) -> f64 {
    4.9 * tube.inverse().powf(0.26) * pr.value().cbrt() * re.value().powf(0.45)
}

/// Martin & Nilles.
///
/// The static term scales with `conductivity_ratio = ker/kf`, the effective
/// radial bed conductivity over the fluid conductivity.
#[must_use]
pub fn martin_nilles(re: Reynolds, pr: Prandtl, tube: TubeRatio, conductivity_ratio: f64) -> f64 {
    (1.3 + 5.0 * tube.inverse()) * conductivity_ratio
        + 0.19 * pr.value().cbrt() * re.value().powf(0.75)
}
