//! Pressure drop across a packed bed.
//!
//! All functions return the pressure drop over the full bed length in Pa.

use crate::support::dimensionless::{Reynolds, TubeRatio};

use super::{InputError, InputKind, ParticleShape, PhysicalInputs};

/// Single-phase flow through a packed bed, in SI units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BedFlow {
    pub length: f64,
    pub voidage: f64,
    pub particle_diameter: f64,
    pub velocity: f64,
    pub density: f64,
    pub viscosity: f64,
}

impl BedFlow {
    pub(super) fn from_inputs(inputs: &PhysicalInputs) -> Result<Self, InputError> {
        Ok(Self {
            length: inputs.require(InputKind::BedLength)?,
            voidage: inputs.require(InputKind::Voidage)?,
            particle_diameter: inputs.require(InputKind::ParticleDiameter)?,
            velocity: inputs.require(InputKind::Velocity)?,
            density: inputs.require(InputKind::FluidDensity)?,
            viscosity: inputs.require(InputKind::FluidViscosity)?,
        })
    }

    /// Voidage-corrected Reynolds number of the flow.
    #[must_use]
    pub fn modified_reynolds(&self) -> Reynolds {
        Reynolds::modified(
            self.density,
            self.velocity,
            self.particle_diameter,
            self.viscosity,
            self.voidage,
        )
    }

    /// `L·ρ·u₀²·(1-ε)/(dp·ε³)`, the scale of the friction-factor forms.
    fn inertial_scale(&self) -> f64 {
        self.length * self.density * self.velocity.powi(2) * (1.0 - self.voidage)
            / (self.particle_diameter * self.voidage.powi(3))
    }
}

/// The viscous and inertial contributions to the Ergun pressure drop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ErgunTerms {
    pub viscous: f64,
    pub inertial: f64,
}

impl ErgunTerms {
    #[must_use]
    pub fn total(&self) -> f64 {
        self.viscous + self.inertial
    }
}

/// Splits the Ergun equation into its two additive terms.
///
/// The inertial term is the Burke-Plummer equation. The viscous term has the
/// Carman-Kozeny form with a constant of 150 instead of 180.
#[must_use]
pub fn ergun_terms(flow: &BedFlow) -> ErgunTerms {
    let BedFlow {
        length,
        voidage,
        particle_diameter: dp,
        velocity: u,
        density,
        viscosity,
    } = *flow;
    let solid = 1.0 - voidage;
    let eps3 = voidage.powi(3);

    ErgunTerms {
        viscous: length / dp * 150.0 * solid.powi(2) * viscosity * u / (eps3 * dp),
        inertial: length / dp * 1.75 * solid * density * u.powi(2) / eps3,
    }
}

/// Ergun equation.
///
/// ```
/// use packed_bed_models::support::correlation::pressure_drop::{BedFlow, ergun};
///
/// let flow = BedFlow {
///     length: 0.5,
///     voidage: 0.4,
///     particle_diameter: 0.003,
///     velocity: 0.5,
///     density: 1.225,
///     viscosity: 1.81e-5,
/// };
/// assert!((ergun(&flow) - 1261.62).abs() < 0.01);
/// ```
#[must_use]
pub fn ergun(flow: &BedFlow) -> f64 {
    ergun_terms(flow).total()
}

/// Carman-Kozeny equation (laminar flow).
#[must_use]
pub fn carman_kozeny(flow: &BedFlow) -> f64 {
    let solid = 1.0 - flow.voidage;
    flow.length * 180.0 * solid.powi(2) * flow.viscosity * flow.velocity
        / (flow.particle_diameter.powi(2) * flow.voidage.powi(3))
}

/// Burke-Plummer equation (fully turbulent flow).
#[must_use]
pub fn burke_plummer(flow: &BedFlow) -> f64 {
    flow.length * 1.75 * (1.0 - flow.voidage) * flow.density * flow.velocity.powi(2)
        / (flow.particle_diameter * flow.voidage.powi(3))
}

/// Eisfeld-Schnitzlein equation, an Ergun form with wall correction.
#[must_use]
pub fn eisfeld_schnitzlein(flow: &BedFlow, column_diameter: f64, shape: ParticleShape) -> f64 {
    let (k1_big, k1, k2) = match shape {
        ParticleShape::Sphere => (154.0, 1.15, 0.87),
        ParticleShape::Cylinder => (190.0, 2.00, 0.77),
        ParticleShape::Irregular => (155.0, 1.42, 0.83),
    };

    let BedFlow {
        length,
        voidage,
        particle_diameter: dp,
        velocity: u,
        density,
        viscosity,
    } = *flow;
    let solid = 1.0 - voidage;
    let eps3 = voidage.powi(3);
    let n = TubeRatio::new(column_diameter, dp);

    let a_w = 1.0 + (2.0 / 3.0) / n.value() / solid;
    let b_w = (k1 * n.inverse().powi(2) + k2).powi(2);
    let a = k1_big * a_w.powi(2);
    let b = a_w / b_w;

    length / dp
        * (a * solid.powi(2) * viscosity * u / (eps3 * dp) + b * solid * density * u.powi(2) / eps3)
}

/// Dixon correlation without wall effect.
#[must_use]
pub fn dixon(flow: &BedFlow) -> f64 {
    let re_m = flow.modified_reynolds().value();
    flow.inertial_scale() * (160.0 / re_m + dixon_inertial(re_m))
}

/// Dixon correlation with the squared wall correction `(1 + 2α/(3(1-ε)N))²`.
#[must_use]
pub fn dixon_wall(flow: &BedFlow, tube: TubeRatio, alpha: f64) -> f64 {
    let re_m = flow.modified_reynolds().value();
    let wall = wall_correction(flow.voidage, tube, alpha);
    flow.inertial_scale() * (160.0 / re_m * wall.powi(2) + dixon_inertial(re_m))
}

/// Dixon correlation with wall effect as written in the single-file page.
///
/// The wall correction is applied unsquared and `Re_m/(Re_m+52)` multiplies
/// only the `16/Re_m^0.46` term.
#[must_use]
pub fn dixon_wall_unsquared(flow: &BedFlow, tube: TubeRatio, alpha: f64) -> f64 {
    let re_m = flow.modified_reynolds().value();
    let wall = wall_correction(flow.voidage, tube, alpha);
    flow.inertial_scale()
        * (160.0 / re_m * wall + 0.922 + 16.0 / re_m.powf(0.46) * re_m / (re_m + 52.0))
}

/// KTA correlation for pebble beds.
#[must_use]
pub fn kta(flow: &BedFlow) -> f64 {
    let re_m = flow.modified_reynolds().value();
    flow.inertial_scale() * (160.0 / re_m + 3.0 / re_m.powf(0.1))
}

fn dixon_inertial(re_m: f64) -> f64 {
    (0.922 + 16.0 / re_m.powf(0.46)) * re_m / (re_m + 52.0)
}

fn wall_correction(voidage: f64, tube: TubeRatio, alpha: f64) -> f64 {
    1.0 + 2.0 * alpha / (3.0 * (1.0 - voidage) * tube.value())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn air_through_spheres() -> BedFlow {
        BedFlow {
            length: 0.5,
            voidage: 0.4,
            particle_diameter: 0.003,
            velocity: 0.5,
            density: 1.225,
            viscosity: 1.81e-5,
        }
    }

    #[test]
    fn ergun_reference_value() {
        let terms = ergun_terms(&air_through_spheres());
        assert_relative_eq!(terms.viscous, 424.218_75, max_relative = 1e-12);
        assert_relative_eq!(terms.inertial, 837.402_343_75, max_relative = 1e-12);
        assert_relative_eq!(ergun(&air_through_spheres()), 1261.621_093_75, max_relative = 1e-12);
    }

    #[test]
    fn ergun_decomposes_into_laminar_and_turbulent_limits() {
        for voidage in [0.2, 0.4, 0.7] {
            let flow = BedFlow {
                voidage,
                ..air_through_spheres()
            };
            let terms = ergun_terms(&flow);

            assert_relative_eq!(terms.inertial, burke_plummer(&flow), max_relative = 1e-12);
            assert_relative_eq!(
                terms.viscous * 180.0 / 150.0,
                carman_kozeny(&flow),
                max_relative = 1e-12
            );
            assert_relative_eq!(terms.total(), ergun(&flow));
        }
    }

    #[test]
    fn ergun_increases_with_velocity() {
        let mut previous = 0.0;
        for velocity in [0.01, 0.1, 0.5, 1.0, 5.0] {
            let dp = ergun(&BedFlow {
                velocity,
                ..air_through_spheres()
            });
            assert!(dp > previous);
            previous = dp;
        }
    }

    #[test]
    fn eisfeld_schnitzlein_depends_on_shape_and_column() {
        let flow = air_through_spheres();
        let narrow = eisfeld_schnitzlein(&flow, 0.03, ParticleShape::Sphere);
        let wide = eisfeld_schnitzlein(&flow, 0.1, ParticleShape::Sphere);
        assert!(narrow.is_finite() && wide.is_finite());
        assert!(narrow > 0.0 && wide > 0.0);
        assert!(
            eisfeld_schnitzlein(&flow, 0.1, ParticleShape::Cylinder)
                != eisfeld_schnitzlein(&flow, 0.1, ParticleShape::Irregular)
        );
    }

    #[test]
    fn eisfeld_schnitzlein_reference_values() {
        let flow = air_through_spheres();
        let cases = [
            (ParticleShape::Sphere, 1_116.777_044_915_780_4),
            (ParticleShape::Cylinder, 1_403.857_216_953_847_2),
            (ParticleShape::Irregular, 1_183.626_994_053_082),
        ];
        for (shape, expected) in cases {
            assert_relative_eq!(
                eisfeld_schnitzlein(&flow, 0.1, shape),
                expected,
                max_relative = 1e-12
            );
        }
    }

    #[test]
    fn friction_factor_forms_reference_values() {
        let flow = air_through_spheres();
        let tube = TubeRatio::new(0.1, flow.particle_diameter);
        assert_relative_eq!(dixon(&flow), 1_342.774_726_835_877_3, max_relative = 1e-12);
        assert_relative_eq!(
            dixon_wall(&flow, tube, 0.564),
            1_359.948_658_435_877,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            dixon_wall_unsquared(&flow, tube, 0.564),
            1_454.998_127_056_298_2,
            max_relative = 1e-12
        );
        assert_relative_eq!(kta(&flow), 1_311.864_928_736_084_7, max_relative = 1e-12);
    }

    #[test]
    fn wall_effect_raises_dixon_pressure_drop() {
        let flow = air_through_spheres();
        let tube = TubeRatio::new(0.1, flow.particle_diameter);
        let plain = dixon(&flow);
        let squared = dixon_wall(&flow, tube, 0.564);
        assert!(squared > plain);

        // Without wall correction the squared form reduces to the plain one.
        assert_relative_eq!(dixon_wall(&flow, tube, 0.0), plain, max_relative = 1e-12);
    }

    #[test]
    fn unsquared_variant_differs_from_canonical_form() {
        let flow = air_through_spheres();
        let tube = TubeRatio::new(0.1, flow.particle_diameter);
        let canonical = dixon_wall(&flow, tube, 0.564);
        let legacy = dixon_wall_unsquared(&flow, tube, 0.564);
        assert!(legacy.is_finite() && legacy > 0.0);
        assert!((canonical - legacy).abs() > 1.0);
    }

    #[test]
    fn kta_is_positive_and_grows_with_velocity() {
        let slow = kta(&air_through_spheres());
        let fast = kta(&BedFlow {
            velocity: 2.0,
            ..air_through_spheres()
        });
        assert!(slow > 0.0);
        assert!(fast > slow);
    }
}
