//! Effective thermal conductivity of a stagnant packed bed.

use std::f64::consts::PI;

use super::{InputError, InputKind, PhysicalInputs};

const STEFAN_BOLTZMANN: f64 = 5.67e-8;
const GAS_CONSTANT: f64 = 8.314;

/// Emissivity of the particle surface.
const EMISSIVITY: f64 = 0.8;
/// Flattening coefficient of the particle contact area.
const FLATTENING: f64 = 0.0077;
/// Thermal accommodation coefficient.
const ACCOMMODATION: f64 = 1.0;

/// Conductivities and voidage of a bed without flow, in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StagnantBed {
    pub voidage: f64,
    pub fluid_conductivity: f64,
    pub solid_conductivity: f64,
}

impl StagnantBed {
    pub(super) fn from_inputs(inputs: &PhysicalInputs) -> Result<Self, InputError> {
        Ok(Self {
            voidage: inputs.require(InputKind::Voidage)?,
            fluid_conductivity: inputs.require(InputKind::FluidConductivity)?,
            solid_conductivity: inputs.require(InputKind::SolidConductivity)?,
        })
    }

    /// Conductivity ratio `κ = λs/λf`.
    #[must_use]
    pub fn conductivity_ratio(&self) -> f64 {
        self.solid_conductivity / self.fluid_conductivity
    }
}

/// Gas state needed by the radiation and Knudsen terms, in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasState {
    pub particle_diameter: f64,
    pub temperature: f64,
    pub pressure: f64,
    pub molar_mass: f64,
    pub specific_heat: f64,
}

impl GasState {
    pub(super) fn from_inputs(inputs: &PhysicalInputs) -> Result<Self, InputError> {
        Ok(Self {
            particle_diameter: inputs.require(InputKind::ParticleDiameter)?,
            temperature: inputs.require(InputKind::Temperature)?,
            pressure: inputs.require(InputKind::Pressure)?,
            molar_mass: inputs.require(InputKind::MolarMass)?,
            specific_heat: inputs.require(InputKind::SpecificHeat)?,
        })
    }
}

/// Zehner-Schlünder shape factor `B = 1.25((1-ε)/ε)^(10/9)`.
fn deformation(voidage: f64) -> f64 {
    1.25 * ((1.0 - voidage) / voidage).powf(10.0 / 9.0)
}

/// Zehner-Schlünder model.
#[must_use]
pub fn zehner_schlunder(bed: &StagnantBed) -> f64 {
    let kappa = bed.conductivity_ratio();
    let b = deformation(bed.voidage);
    let phi = 1.0 - (b / kappa) * ((b + kappa) / b).ln();
    let core = (1.0 - bed.voidage).sqrt();

    bed.fluid_conductivity * (1.0 - core + core / (kappa * phi + 2.0 / 3.0))
}

/// Krupiczka model, `λf·κ^n`.
#[must_use]
pub fn krupiczka(bed: &StagnantBed) -> f64 {
    let kappa = bed.conductivity_ratio();
    let n = (0.280 - 0.757 * bed.voidage.log10()) * (0.057 * kappa.log10());
    bed.fluid_conductivity * kappa.powf(n)
}

/// Woodside-Messmer model.
///
/// ```
/// use packed_bed_models::support::correlation::conductivity::{StagnantBed, woodside_messmer};
///
/// let bed = StagnantBed {
///     voidage: 0.4,
///     fluid_conductivity: 0.025,
///     solid_conductivity: 15.0,
/// };
/// assert!((woodside_messmer(&bed) - 0.3774).abs() < 1e-4);
/// ```
#[must_use]
pub fn woodside_messmer(bed: &StagnantBed) -> f64 {
    let StagnantBed {
        voidage,
        fluid_conductivity: kf,
        solid_conductivity: ks,
    } = *bed;
    kf * voidage + ks * (1.0 - voidage) * (kf / ks).sqrt()
}

/// Simplified Kunii-Smith model.
#[must_use]
pub fn kunii_smith(bed: &StagnantBed) -> f64 {
    let StagnantBed {
        voidage,
        fluid_conductivity: kf,
        solid_conductivity: ks,
    } = *bed;
    kf * (voidage + (1.0 - voidage) / ((2.0 / 3.0) * (kf / ks) + 1.0 / 3.0))
}

/// Yagi-Kunii stagnant model: the fluid fraction in parallel with the
/// particles and their gas gaps in series.
#[must_use]
pub fn yagi_kunii_static(bed: &StagnantBed) -> f64 {
    let StagnantBed {
        voidage,
        fluid_conductivity: kf,
        solid_conductivity: ks,
    } = *bed;
    voidage * kf + (1.0 - voidage) / (1.0 / ks + 1.0 / kf)
}

/// Zehner-Bauer-Schlünder model with radiation and gas rarefaction terms.
#[must_use]
pub fn zehner_bauer_schlunder(bed: &StagnantBed, gas: &GasState) -> f64 {
    let StagnantBed {
        voidage,
        fluid_conductivity: kf,
        ..
    } = *bed;
    let GasState {
        particle_diameter: dp,
        temperature: t,
        pressure: p,
        molar_mass: mg,
        specific_heat: cp,
    } = *gas;

    let kappa = bed.conductivity_ratio();
    let b = deformation(voidage);

    let k_r = 4.0 * STEFAN_BOLTZMANN * t.powi(3) * dp / (2.0 / EMISSIVITY - 1.0) / kf;

    // Modified mean free path of the gas molecules.
    let free_path = 2.0 * (2.0 - ACCOMMODATION) / ACCOMMODATION
        * (2.0 * PI * GAS_CONSTANT * t / mg).sqrt()
        * kf
        / (p * (2.0 * cp - GAS_CONSTANT / mg));
    let k_g = 1.0 / (1.0 + free_path / dp);

    let n = 1.0 / k_g * (1.0 + (k_r - b * k_g) / kappa)
        - b * (1.0 / k_g - 1.0) * (1.0 + k_r / kappa);

    let k_c = 2.0 / n
        * (b * (kappa + k_r - 1.0) / (n.powi(2) * k_g * kappa)
            * ((kappa + k_r) / (b * (k_g + (1.0 - k_g) * (kappa + k_r)))).ln())
        + 2.0 / n * (b + 1.0) / (2.0 * b) * (k_r / k_g - b * (1.0 + (1.0 - k_g) / k_g * k_r))
        - 2.0 / n * (b - 1.0) / (n * k_g);

    let core = (1.0 - voidage).sqrt();
    let ratio = (1.0 - core) * voidage * (1.0 / (voidage - 1.0 + 1.0 / k_g) + k_r)
        + core * (FLATTENING * kappa + (1.0 - FLATTENING) * k_c);

    ratio * kf
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn alumina_in_air() -> StagnantBed {
        StagnantBed {
            voidage: 0.4,
            fluid_conductivity: 0.025,
            solid_conductivity: 15.0,
        }
    }

    #[test]
    fn woodside_messmer_reference_value() {
        assert_relative_eq!(
            woodside_messmer(&alumina_in_air()),
            0.025 * 0.4 + 15.0 * 0.6 * (0.025_f64 / 15.0).sqrt(),
            max_relative = 1e-12
        );
        assert_relative_eq!(woodside_messmer(&alumina_in_air()), 0.377_423, max_relative = 1e-5);
    }

    #[test]
    fn zehner_schlunder_reference_value() {
        assert_relative_eq!(
            zehner_schlunder(&alumina_in_air()),
            0.005_667_937,
            max_relative = 1e-6
        );
    }

    #[test]
    fn krupiczka_reference_value() {
        assert_relative_eq!(
            krupiczka(&alumina_in_air()),
            0.045_045_040,
            max_relative = 1e-6
        );
    }

    #[test]
    fn kunii_smith_reduces_to_fluid_conductivity_for_equal_phases() {
        let bed = StagnantBed {
            solid_conductivity: 0.025,
            ..alumina_in_air()
        };
        assert_relative_eq!(kunii_smith(&bed), 0.025, max_relative = 1e-12);
        assert!(kunii_smith(&alumina_in_air()) > 0.025);
    }

    #[test]
    fn yagi_kunii_static_reference_value() {
        let bed = StagnantBed {
            voidage: 0.4,
            fluid_conductivity: 0.026,
            solid_conductivity: 1.0,
        };
        assert_relative_eq!(
            yagi_kunii_static(&bed),
            0.025_604_678_362_573_1,
            max_relative = 1e-12
        );
    }

    #[test]
    fn zbs_reference_value() {
        let bed = StagnantBed {
            voidage: 0.4,
            fluid_conductivity: 0.03,
            solid_conductivity: 1.5,
        };
        let gas = GasState {
            particle_diameter: 0.003,
            temperature: 300.0,
            pressure: 101_325.0,
            molar_mass: 0.029,
            specific_heat: 1005.0,
        };
        assert_relative_eq!(
            zehner_bauer_schlunder(&bed, &gas),
            0.232_462_149,
            max_relative = 1e-6
        );
    }

    #[test]
    fn zbs_increases_with_temperature_through_radiation() {
        let bed = alumina_in_air();
        let cold = GasState {
            particle_diameter: 0.003,
            temperature: 300.0,
            pressure: 101_325.0,
            molar_mass: 0.029,
            specific_heat: 1005.0,
        };
        let hot = GasState {
            temperature: 900.0,
            ..cold
        };
        assert!(zehner_bauer_schlunder(&bed, &hot) > zehner_bauer_schlunder(&bed, &cold));
    }
}
