use std::{fmt, str::FromStr};

use uom::si::{
    diffusion_coefficient::square_meter_per_second,
    dynamic_viscosity::pascal_second,
    f64::{
        DiffusionCoefficient, DynamicViscosity, Length, MassDensity, MolarMass, Pressure, Ratio,
        SpecificHeatCapacity, ThermalConductivity, ThermodynamicTemperature, Velocity,
    },
    length::meter,
    mass_density::kilogram_per_cubic_meter,
    molar_mass::kilogram_per_mole,
    pressure::pascal,
    radiant_exposure::joule_per_square_meter,
    ratio::ratio,
    specific_heat_capacity::joule_per_kilogram_kelvin,
    thermal_conductivity::watt_per_meter_kelvin,
    thermodynamic_temperature::kelvin,
    velocity::meter_per_second,
};

use crate::support::{
    constraint::{Constrained, StrictlyPositive, UnitIntervalOpen},
    units::SurfaceTension,
};

use super::InputError;

/// Physical parameters of a packed bed and the fluids flowing through it.
///
/// Every field is optional; a correlation only reads the inputs it needs
/// (see [`CorrelationDefinition::inputs`](super::CorrelationDefinition)).
/// Values are checked when they are read, not when the record is built.
///
/// Single-phase correlations read the `fluid_*` properties and `velocity`.
/// Trickle-bed correlations read the `liquid_*` and `gas_*` properties.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PhysicalInputs {
    pub bed_length: Option<Length>,
    pub voidage: Option<Ratio>,
    pub particle_diameter: Option<Length>,
    /// Superficial (empty-tube) velocity.
    pub velocity: Option<Velocity>,
    pub fluid_density: Option<MassDensity>,
    pub fluid_viscosity: Option<DynamicViscosity>,
    pub fluid_conductivity: Option<ThermalConductivity>,
    pub solid_conductivity: Option<ThermalConductivity>,
    pub specific_heat: Option<SpecificHeatCapacity>,
    pub molecular_diffusivity: Option<DiffusionCoefficient>,
    /// Column or tube inner diameter.
    pub column_diameter: Option<Length>,
    pub temperature: Option<ThermodynamicTemperature>,
    pub pressure: Option<Pressure>,
    /// Molar mass of the gas phase.
    pub molar_mass: Option<MolarMass>,
    /// Effective radial bed conductivity `ker`, when known independently.
    pub radial_conductivity: Option<ThermalConductivity>,
    /// Superficial liquid velocity.
    pub liquid_velocity: Option<Velocity>,
    /// Superficial gas velocity.
    pub gas_velocity: Option<Velocity>,
    pub liquid_density: Option<MassDensity>,
    pub gas_density: Option<MassDensity>,
    pub liquid_viscosity: Option<DynamicViscosity>,
    pub gas_viscosity: Option<DynamicViscosity>,
    /// Gas-liquid surface tension.
    pub surface_tension: Option<SurfaceTension>,
    pub particle_shape: ParticleShape,
}

impl PhysicalInputs {
    /// Returns the SI value of an input after checking its domain.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Missing`] if the input was not supplied, or
    /// [`InputError::Invalid`] if it is not strictly positive (voidage: not
    /// inside `(0, 1)`).
    pub fn require(&self, kind: InputKind) -> Result<f64, InputError> {
        let value = self.si_value(kind).ok_or(InputError::Missing(kind))?;
        let checked = match kind {
            InputKind::Voidage => UnitIntervalOpen::new(value).map(Constrained::into_inner),
            _ => StrictlyPositive::new(value).map(Constrained::into_inner),
        };
        checked.map_err(|source| InputError::Invalid {
            input: kind,
            value,
            source,
        })
    }

    /// Checks every input that is present.
    ///
    /// # Errors
    ///
    /// Returns the first [`InputError::Invalid`] found, in [`InputKind::ALL`] order.
    pub fn validate(&self) -> Result<(), InputError> {
        InputKind::ALL.iter().try_for_each(|&kind| match self.require(kind) {
            Err(InputError::Missing(_)) => Ok(()),
            other => other.map(|_| ()),
        })
    }

    fn si_value(&self, kind: InputKind) -> Option<f64> {
        match kind {
            InputKind::BedLength => self.bed_length.map(|q| q.get::<meter>()),
            InputKind::Voidage => self.voidage.map(|q| q.get::<ratio>()),
            InputKind::ParticleDiameter => self.particle_diameter.map(|q| q.get::<meter>()),
            InputKind::Velocity => self.velocity.map(|q| q.get::<meter_per_second>()),
            InputKind::FluidDensity => self
                .fluid_density
                .map(|q| q.get::<kilogram_per_cubic_meter>()),
            InputKind::FluidViscosity => self.fluid_viscosity.map(|q| q.get::<pascal_second>()),
            InputKind::FluidConductivity => self
                .fluid_conductivity
                .map(|q| q.get::<watt_per_meter_kelvin>()),
            InputKind::SolidConductivity => self
                .solid_conductivity
                .map(|q| q.get::<watt_per_meter_kelvin>()),
            InputKind::SpecificHeat => self
                .specific_heat
                .map(|q| q.get::<joule_per_kilogram_kelvin>()),
            InputKind::MolecularDiffusivity => self
                .molecular_diffusivity
                .map(|q| q.get::<square_meter_per_second>()),
            InputKind::ColumnDiameter => self.column_diameter.map(|q| q.get::<meter>()),
            InputKind::Temperature => self.temperature.map(|q| q.get::<kelvin>()),
            InputKind::Pressure => self.pressure.map(|q| q.get::<pascal>()),
            InputKind::MolarMass => self.molar_mass.map(|q| q.get::<kilogram_per_mole>()),
            InputKind::RadialConductivity => self
                .radial_conductivity
                .map(|q| q.get::<watt_per_meter_kelvin>()),
            InputKind::LiquidVelocity => self.liquid_velocity.map(|q| q.get::<meter_per_second>()),
            InputKind::GasVelocity => self.gas_velocity.map(|q| q.get::<meter_per_second>()),
            InputKind::LiquidDensity => self
                .liquid_density
                .map(|q| q.get::<kilogram_per_cubic_meter>()),
            InputKind::GasDensity => self
                .gas_density
                .map(|q| q.get::<kilogram_per_cubic_meter>()),
            InputKind::LiquidViscosity => self.liquid_viscosity.map(|q| q.get::<pascal_second>()),
            InputKind::GasViscosity => self.gas_viscosity.map(|q| q.get::<pascal_second>()),
            InputKind::SurfaceTension => self
                .surface_tension
                .map(|q| q.get::<joule_per_square_meter>()),
        }
    }
}

/// Names one field of [`PhysicalInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum InputKind {
    BedLength,
    Voidage,
    ParticleDiameter,
    Velocity,
    FluidDensity,
    FluidViscosity,
    FluidConductivity,
    SolidConductivity,
    SpecificHeat,
    MolecularDiffusivity,
    ColumnDiameter,
    Temperature,
    Pressure,
    MolarMass,
    RadialConductivity,
    LiquidVelocity,
    GasVelocity,
    LiquidDensity,
    GasDensity,
    LiquidViscosity,
    GasViscosity,
    SurfaceTension,
}

impl InputKind {
    pub const ALL: [InputKind; 22] = [
        Self::BedLength,
        Self::Voidage,
        Self::ParticleDiameter,
        Self::Velocity,
        Self::FluidDensity,
        Self::FluidViscosity,
        Self::FluidConductivity,
        Self::SolidConductivity,
        Self::SpecificHeat,
        Self::MolecularDiffusivity,
        Self::ColumnDiameter,
        Self::Temperature,
        Self::Pressure,
        Self::MolarMass,
        Self::RadialConductivity,
        Self::LiquidVelocity,
        Self::GasVelocity,
        Self::LiquidDensity,
        Self::GasDensity,
        Self::LiquidViscosity,
        Self::GasViscosity,
        Self::SurfaceTension,
    ];
}

impl fmt::Display for InputKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::BedLength => "bed length",
            Self::Voidage => "voidage",
            Self::ParticleDiameter => "particle diameter",
            Self::Velocity => "superficial velocity",
            Self::FluidDensity => "fluid density",
            Self::FluidViscosity => "fluid viscosity",
            Self::FluidConductivity => "fluid thermal conductivity",
            Self::SolidConductivity => "solid thermal conductivity",
            Self::SpecificHeat => "fluid specific heat",
            Self::MolecularDiffusivity => "molecular diffusivity",
            Self::ColumnDiameter => "column diameter",
            Self::Temperature => "temperature",
            Self::Pressure => "pressure",
            Self::MolarMass => "gas molar mass",
            Self::RadialConductivity => "effective radial conductivity",
            Self::LiquidVelocity => "superficial liquid velocity",
            Self::GasVelocity => "superficial gas velocity",
            Self::LiquidDensity => "liquid density",
            Self::GasDensity => "gas density",
            Self::LiquidViscosity => "liquid viscosity",
            Self::GasViscosity => "gas viscosity",
            Self::SurfaceTension => "surface tension",
        })
    }
}

/// Particle shape category, used by the Eisfeld-Schnitzlein coefficients.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ParticleShape {
    #[default]
    Sphere,
    Cylinder,
    Irregular,
}

impl FromStr for ParticleShape {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sphere" => Ok(Self::Sphere),
            "cylinder" => Ok(Self::Cylinder),
            "irregular" => Ok(Self::Irregular),
            _ => Err(InputError::UnknownShape(s.to_owned())),
        }
    }
}

impl fmt::Display for ParticleShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Sphere => "sphere",
            Self::Cylinder => "cylinder",
            Self::Irregular => "irregular",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::support::constraint::ConstraintError;

    fn bed() -> PhysicalInputs {
        PhysicalInputs {
            voidage: Some(Ratio::new::<ratio>(0.4)),
            particle_diameter: Some(Length::new::<meter>(0.003)),
            velocity: Some(Velocity::new::<meter_per_second>(0.5)),
            ..PhysicalInputs::default()
        }
    }

    #[test]
    fn require_returns_si_values() {
        let inputs = PhysicalInputs {
            particle_diameter: Some(Length::new::<uom::si::length::millimeter>(3.0)),
            ..bed()
        };
        let dp = inputs.require(InputKind::ParticleDiameter).unwrap();
        assert!((dp - 0.003).abs() < 1e-15);
    }

    #[test]
    fn missing_input_is_named() {
        let err = bed().require(InputKind::FluidDensity).unwrap_err();
        assert_eq!(err, InputError::Missing(InputKind::FluidDensity));
        assert_eq!(err.to_string(), "missing input: fluid density");
    }

    #[test]
    fn voidage_must_be_inside_the_unit_interval() {
        let inputs = PhysicalInputs {
            voidage: Some(Ratio::new::<ratio>(1.0)),
            ..bed()
        };
        assert_eq!(
            inputs.require(InputKind::Voidage),
            Err(InputError::Invalid {
                input: InputKind::Voidage,
                value: 1.0,
                source: ConstraintError::AboveMaximum,
            })
        );
        assert!(inputs.validate().is_err());
    }

    #[test]
    fn validate_checks_only_present_inputs() {
        assert!(bed().validate().is_ok());

        let inputs = PhysicalInputs {
            fluid_viscosity: Some(DynamicViscosity::new::<pascal_second>(-1.0)),
            ..bed()
        };
        assert!(matches!(
            inputs.validate(),
            Err(InputError::Invalid {
                input: InputKind::FluidViscosity,
                ..
            })
        ));
    }

    #[test]
    fn nan_is_rejected() {
        let inputs = PhysicalInputs {
            velocity: Some(Velocity::new::<meter_per_second>(f64::NAN)),
            ..bed()
        };
        assert!(matches!(
            inputs.require(InputKind::Velocity),
            Err(InputError::Invalid {
                source: ConstraintError::NotANumber,
                ..
            })
        ));
    }

    #[test]
    fn surface_tension_is_read_in_newtons_per_meter() {
        let inputs = PhysicalInputs {
            surface_tension: Some(SurfaceTension::new::<joule_per_square_meter>(0.072)),
            ..bed()
        };
        let sigma = inputs.require(InputKind::SurfaceTension).unwrap();
        assert!((sigma - 0.072).abs() < 1e-15);
        assert_eq!(
            bed().require(InputKind::SurfaceTension),
            Err(InputError::Missing(InputKind::SurfaceTension))
        );
    }

    #[test]
    fn diffusivity_is_read_in_square_meters_per_second() {
        let inputs = PhysicalInputs {
            molecular_diffusivity: Some(DiffusionCoefficient::new::<
                uom::si::diffusion_coefficient::square_centimeter_per_second,
            >(0.2)),
            ..bed()
        };
        let dm = inputs.require(InputKind::MolecularDiffusivity).unwrap();
        assert!((dm - 2.0e-5).abs() < 1e-18);
    }

    #[test]
    fn shapes_parse_without_fallback() {
        assert_eq!("Sphere".parse::<ParticleShape>(), Ok(ParticleShape::Sphere));
        assert_eq!(
            " cylinder ".parse::<ParticleShape>(),
            Ok(ParticleShape::Cylinder)
        );
        assert_eq!(
            "pellet".parse::<ParticleShape>(),
            Err(InputError::UnknownShape("pellet".to_owned()))
        );
    }
}
