use thiserror::Error;

use crate::support::constraint::ConstraintError;

use super::{Applicability, CorrelationId, InputKind};

/// A physical input is missing or outside its domain.
///
/// Invalid input is fatal to a whole evaluation: nothing is computed.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum InputError {
    #[error("missing input: {0}")]
    Missing(InputKind),

    #[error("invalid {input}: {value}")]
    Invalid {
        input: InputKind,
        value: f64,
        #[source]
        source: ConstraintError,
    },

    #[error("unknown particle shape `{0}` (expected sphere, cylinder, or irregular)")]
    UnknownShape(String),
}

/// A correlation's governing dimensionless group lies outside an
/// applicability window.
///
/// Violations are reported per correlation and never stop the evaluation
/// of sibling correlations.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{correlation} is not applicable: {} = {value} is outside {bound}", .bound.group)]
pub struct RangeViolation {
    pub correlation: CorrelationId,
    /// The computed value of the group that triggered the violation.
    pub value: f64,
    pub bound: Applicability,
}

/// Errors from evaluating a single correlation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CorrelationError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Range(#[from] RangeViolation),
}

/// Errors from evaluating a batch of correlations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvaluationError {
    #[error("select at least one correlation")]
    EmptySelection,

    #[error("invalid input")]
    Input(#[from] InputError),

    /// Every selected correlation produced a [`RangeViolation`].
    #[error(
        "no applicable correlation: all {} selected correlations are out of range",
        .violations.len()
    )]
    NoApplicableCorrelation { violations: Vec<RangeViolation> },
}
