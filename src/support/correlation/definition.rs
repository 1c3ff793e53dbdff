use std::fmt;

use super::{CorrelationId, Family, InputKind, RangeViolation};

/// Static metadata describing one correlation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationDefinition {
    pub id: CorrelationId,
    pub name: &'static str,
    pub family: Family,
    /// The correlation in LaTeX, for display.
    pub formula: &'static str,
    /// Inputs read when the correlation is evaluated.
    pub inputs: &'static [InputKind],
    pub applicability: &'static [Applicability],
}

impl CorrelationDefinition {
    /// Checks `value` of `group` against every window of the given enforcement.
    ///
    /// # Errors
    ///
    /// Returns a [`RangeViolation`] for the first window that excludes `value`.
    pub fn check(
        &self,
        group: Group,
        value: f64,
        enforcement: Enforcement,
    ) -> Result<(), RangeViolation> {
        self.applicability
            .iter()
            .filter(|bound| bound.group == group && bound.enforcement == enforcement)
            .try_for_each(|bound| {
                if bound.contains(value) {
                    Ok(())
                } else {
                    Err(RangeViolation {
                        correlation: self.id,
                        value,
                        bound: *bound,
                    })
                }
            })
    }
}

/// A dimensionless group over which applicability is stated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// `ρ·u₀·dp/μ`.
    ParticleReynolds,
    /// `ρ·u₀·dp/(μ·(1-ε))`.
    ModifiedReynolds,
    Schmidt,
    Prandtl,
    /// `Dt/dp`.
    TubeRatio,
    Voidage,
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ParticleReynolds => "Re",
            Self::ModifiedReynolds => "Re_m",
            Self::Schmidt => "Sc",
            Self::Prandtl => "Pr",
            Self::TubeRatio => "N",
            Self::Voidage => "ε",
        })
    }
}

/// Whether a window gates the result or only annotates it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Enforcement {
    /// The correlation refuses to produce a value outside the window.
    Required,
    /// Literature guidance; reported alongside the value.
    Advisory,
}

/// An open interval `lower < x < upper` over a dimensionless group.
///
/// A missing bound is unbounded on that side.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Applicability {
    pub group: Group,
    pub lower: Option<f64>,
    pub upper: Option<f64>,
    pub enforcement: Enforcement,
}

impl Applicability {
    #[must_use]
    pub const fn required(group: Group, lower: f64, upper: f64) -> Self {
        Self {
            group,
            lower: Some(lower),
            upper: Some(upper),
            enforcement: Enforcement::Required,
        }
    }

    #[must_use]
    pub const fn advisory(group: Group, lower: f64, upper: f64) -> Self {
        Self {
            group,
            lower: Some(lower),
            upper: Some(upper),
            enforcement: Enforcement::Advisory,
        }
    }

    #[must_use]
    pub const fn advisory_above(group: Group, lower: f64) -> Self {
        Self {
            group,
            lower: Some(lower),
            upper: None,
            enforcement: Enforcement::Advisory,
        }
    }

    #[must_use]
    pub const fn advisory_below(group: Group, upper: f64) -> Self {
        Self {
            group,
            lower: None,
            upper: Some(upper),
            enforcement: Enforcement::Advisory,
        }
    }

    /// Returns `true` if `value` lies strictly inside the window.
    ///
    /// `NaN` is never contained.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        let above = self.lower.is_none_or(|lower| value > lower);
        let below = self.upper.is_none_or(|upper| value < upper);
        above && below && !value.is_nan()
    }
}

impl fmt::Display for Applicability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.lower, self.upper) {
            (Some(lower), Some(upper)) => write!(f, "{lower} < {} < {upper}", self.group),
            (Some(lower), None) => write!(f, "{} > {lower}", self.group),
            (None, Some(upper)) => write!(f, "{} < {upper}", self.group),
            (None, None) => write!(f, "any {}", self.group),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_are_open() {
        let window = Applicability::required(Group::ParticleReynolds, 1.0, 100.0);
        assert!(!window.contains(1.0));
        assert!(!window.contains(100.0));
        assert!(window.contains(50.0));
        assert!(!window.contains(f64::NAN));
    }

    #[test]
    fn half_open_window() {
        let window = Applicability::advisory_above(Group::ParticleReynolds, 1e4);
        assert!(window.contains(1e6));
        assert!(!window.contains(1e4));
        assert_eq!(window.to_string(), "Re > 10000");
    }

    #[test]
    fn upper_bounded_window() {
        let window = Applicability::advisory_below(Group::ParticleReynolds, 1600.0);
        assert!(window.contains(0.5));
        assert!(!window.contains(1600.0));
        assert_eq!(window.to_string(), "Re < 1600");
        assert_eq!(
            Applicability::advisory(Group::Voidage, 0.35, 0.75).to_string(),
            "0.35 < ε < 0.75"
        );
    }

    #[test]
    fn display_names_the_group() {
        let window = Applicability::required(Group::ParticleReynolds, 50.0, 500.0);
        assert_eq!(window.to_string(), "50 < Re < 500");
    }
}
