//! Dimensionless groups that feed the correlations.
//!
//! Every constructor takes SI values as plain `f64`. Positivity of the
//! arguments is the caller's responsibility; the correlation evaluator
//! validates its inputs before any group is formed.

/// Reynolds number for flow through a packed bed.
///
/// Two variants are in use and they are not interchangeable: the particle
/// Reynolds number `ρ·u₀·dp/μ` (transfer, wall and dispersion correlations)
/// and the voidage-corrected `ρ·u₀·dp/(μ·(1-ε))` (pressure drop).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Reynolds(f64);

impl Reynolds {
    /// Wraps an already computed Reynolds number.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Particle Reynolds number `ρ·u₀·dp/μ`.
    ///
    /// ```
    /// use packed_bed_models::support::dimensionless::Reynolds;
    ///
    /// let re = Reynolds::particle(1.225, 0.5, 0.003, 1.81e-5);
    /// assert!((re.value() - 101.519).abs() < 1e-3);
    /// ```
    #[must_use]
    pub fn particle(density: f64, velocity: f64, diameter: f64, viscosity: f64) -> Self {
        Self(density * velocity * diameter / viscosity)
    }

    /// Voidage-corrected Reynolds number `ρ·u₀·dp/(μ·(1-ε))`.
    #[must_use]
    pub fn modified(
        density: f64,
        velocity: f64,
        diameter: f64,
        viscosity: f64,
        voidage: f64,
    ) -> Self {
        Self::particle(density, velocity, diameter, viscosity).to_modified(voidage)
    }

    /// Converts a particle Reynolds number into `Re/(1-ε)`.
    #[must_use]
    pub fn to_modified(self, voidage: f64) -> Self {
        Self(self.0 / (1.0 - voidage))
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Schmidt number `μ/(ρ·Dm)`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Schmidt(f64);

impl Schmidt {
    #[must_use]
    pub fn new(viscosity: f64, density: f64, diffusivity: f64) -> Self {
        Self(viscosity / (density * diffusivity))
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Prandtl number `μ·Cp/kf`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Prandtl(f64);

impl Prandtl {
    #[must_use]
    pub fn new(viscosity: f64, specific_heat: f64, conductivity: f64) -> Self {
        Self(viscosity * specific_heat / conductivity)
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Peclet number: convective over diffusive transport.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Peclet(f64);

impl Peclet {
    /// Wraps an already computed Peclet number.
    #[must_use]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Molecular Peclet number for mass, `Re·Sc`.
    #[must_use]
    pub fn mass(re: Reynolds, sc: Schmidt) -> Self {
        Self(re.value() * sc.value())
    }

    /// Molecular Peclet number for heat, `Re·Pr`.
    #[must_use]
    pub fn heat(re: Reynolds, pr: Prandtl) -> Self {
        Self(re.value() * pr.value())
    }

    /// Particle Peclet number of a dispersion coefficient, `u₀·dp/D`.
    #[must_use]
    pub fn dispersion(velocity: f64, diameter: f64, dispersion: f64) -> Self {
        Self(velocity * diameter / dispersion)
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

/// Tube-to-particle diameter ratio `N = Dt/dp`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct TubeRatio(f64);

impl TubeRatio {
    #[must_use]
    pub fn new(tube_diameter: f64, particle_diameter: f64) -> Self {
        Self(tube_diameter / particle_diameter)
    }

    /// The particle-to-tube ratio `dp/Dt`.
    #[must_use]
    pub fn inverse(self) -> f64 {
        1.0 / self.0
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn particle_reynolds_of_air_through_small_spheres() {
        let re = Reynolds::particle(1.225, 0.5, 0.003, 1.81e-5);
        assert_relative_eq!(re.value(), 101.519_337, max_relative = 1e-6);
    }

    #[test]
    fn modified_reynolds_divides_by_solid_fraction() {
        let re = Reynolds::particle(1.225, 0.5, 0.003, 1.81e-5);
        let re_m = Reynolds::modified(1.225, 0.5, 0.003, 1.81e-5, 0.4);
        assert_relative_eq!(re_m.value(), re.value() / 0.6);
        assert!(re_m > re);
    }

    #[test]
    fn peclet_variants() {
        let re = Reynolds::new(100.0);
        let sc = Schmidt::new(1.81e-5, 1.225, 1.8e-5);
        let pr = Prandtl::new(1.81e-5, 1005.0, 0.0257);

        assert_relative_eq!(Peclet::mass(re, sc).value(), 100.0 * sc.value());
        assert_relative_eq!(Peclet::heat(re, pr).value(), 100.0 * pr.value());
        assert_relative_eq!(pr.value(), 0.707_8, max_relative = 1e-3);
        assert_relative_eq!(Peclet::dispersion(0.5, 0.003, 7.5e-4).value(), 2.0);
    }

    #[test]
    fn tube_ratio_and_inverse() {
        let n = TubeRatio::new(0.1, 0.004);
        assert_relative_eq!(n.value(), 25.0);
        assert_relative_eq!(n.inverse(), 0.04);
    }
}
