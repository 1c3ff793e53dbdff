use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    f64::{DiffusionCoefficient, HeatTransfer, Pressure, ThermalConductivity, Velocity},
    heat_transfer::watt_per_square_meter_kelvin,
    pressure::pascal,
    thermal_conductivity::watt_per_meter_kelvin,
    velocity::meter_per_second,
};

use crate::support::dimensionless::Peclet;

/// The value produced by one correlation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Estimate {
    /// Pressure drop across the whole bed length.
    PressureDrop(Pressure),
    /// Effective (stagnant) bed thermal conductivity.
    Conductivity(ThermalConductivity),
    /// A heat-transfer coefficient, with its Nusselt number when the
    /// correlation is stated in one.
    HeatTransfer {
        coefficient: HeatTransfer,
        nusselt: Option<f64>,
    },
    /// An axial or radial dispersion coefficient and its particle Peclet number.
    Dispersion {
        coefficient: DiffusionCoefficient,
        peclet: Peclet,
    },
    /// A particle-to-fluid mass-transfer coefficient and its Sherwood number.
    MassTransfer {
        coefficient: Velocity,
        sherwood: f64,
    },
    /// An overall wall-to-bed coefficient with the two resistances it combines.
    Overall {
        coefficient: HeatTransfer,
        wall_coefficient: HeatTransfer,
        wall_nusselt: f64,
        radial_conductivity: ThermalConductivity,
    },
}

impl Estimate {
    pub(crate) fn pressure_drop(pascals: f64) -> Self {
        Self::PressureDrop(Pressure::new::<pascal>(pascals))
    }

    pub(crate) fn conductivity(value: f64) -> Self {
        Self::Conductivity(ThermalConductivity::new::<watt_per_meter_kelvin>(value))
    }

    pub(crate) fn heat_transfer(coefficient: f64, nusselt: Option<f64>) -> Self {
        Self::HeatTransfer {
            coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(coefficient),
            nusselt,
        }
    }

    pub(crate) fn dispersion(coefficient: f64, peclet: Peclet) -> Self {
        Self::Dispersion {
            coefficient: DiffusionCoefficient::new::<square_meter_per_second>(coefficient),
            peclet,
        }
    }

    pub(crate) fn mass_transfer(coefficient: f64, sherwood: f64) -> Self {
        Self::MassTransfer {
            coefficient: Velocity::new::<meter_per_second>(coefficient),
            sherwood,
        }
    }

    pub(crate) fn overall(
        coefficient: f64,
        wall_coefficient: f64,
        wall_nusselt: f64,
        radial_conductivity: f64,
    ) -> Self {
        Self::Overall {
            coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(coefficient),
            wall_coefficient: HeatTransfer::new::<watt_per_square_meter_kelvin>(wall_coefficient),
            wall_nusselt,
            radial_conductivity: ThermalConductivity::new::<watt_per_meter_kelvin>(
                radial_conductivity,
            ),
        }
    }

    /// The primary value in SI units.
    #[must_use]
    pub fn si_value(&self) -> f64 {
        match self {
            Self::PressureDrop(dp) => dp.get::<pascal>(),
            Self::Conductivity(k) => k.get::<watt_per_meter_kelvin>(),
            Self::HeatTransfer { coefficient, .. } | Self::Overall { coefficient, .. } => {
                coefficient.get::<watt_per_square_meter_kelvin>()
            }
            Self::Dispersion { coefficient, .. } => coefficient.get::<square_meter_per_second>(),
            Self::MassTransfer { coefficient, .. } => coefficient.get::<meter_per_second>(),
        }
    }

    /// The SI unit symbol of [`Estimate::si_value`].
    #[must_use]
    pub fn unit_symbol(&self) -> &'static str {
        match self {
            Self::PressureDrop(_) => "Pa",
            Self::Conductivity(_) => "W/(m·K)",
            Self::HeatTransfer { .. } | Self::Overall { .. } => "W/(m²·K)",
            Self::Dispersion { .. } => "m²/s",
            Self::MassTransfer { .. } => "m/s",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::diffusion_coefficient::square_centimeter_per_second;

    #[test]
    fn dispersion_is_reported_in_square_meters_per_second() {
        let estimate = Estimate::dispersion(2.0e-5, Peclet::new(15.0));
        assert_relative_eq!(estimate.si_value(), 2.0e-5);
        assert_eq!(estimate.unit_symbol(), "m²/s");

        let Estimate::Dispersion { coefficient, .. } = estimate else {
            panic!("expected a dispersion estimate");
        };
        let in_cm2 = coefficient.get::<square_centimeter_per_second>();
        assert_relative_eq!(in_cm2, 0.2, max_relative = 1e-12);
    }

    #[test]
    fn overall_reports_the_combined_coefficient() {
        let estimate = Estimate::overall(80.0, 150.0, 28.8, 0.9);
        assert_relative_eq!(estimate.si_value(), 80.0);
        assert_eq!(estimate.unit_symbol(), "W/(m²·K)");

        let Estimate::Overall {
            wall_coefficient,
            wall_nusselt,
            radial_conductivity,
            ..
        } = estimate
        else {
            panic!("expected an overall estimate");
        };
        assert_relative_eq!(wall_coefficient.get::<watt_per_square_meter_kelvin>(), 150.0);
        assert_relative_eq!(wall_nusselt, 28.8);
        assert_relative_eq!(radial_conductivity.get::<watt_per_meter_kelvin>(), 0.9);
    }
}
