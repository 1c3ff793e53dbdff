//! Transport-property correlations for packed and fixed beds.
//!
//! Each published correlation is a pure function of a few physical inputs.
//! The submodules hold the formulas, one file per family, written over SI
//! `f64` values; this module ties them to a registry of [`CorrelationId`]s
//! so they can be evaluated in batches from a [`PhysicalInputs`] record.
//!
//! # Error policy
//!
//! - Invalid or missing input is fatal to a batch ([`EvaluationError::Input`]).
//! - A correlation whose governing group lies outside a required window
//!   yields a [`RangeViolation`] in place of its value; siblings still run.
//! - If every selected correlation is out of range the batch fails with
//!   [`EvaluationError::NoApplicableCorrelation`].
//!
//! Advisory windows (literature ranges that are not enforced by default)
//! are listed in [`Evaluation::advisories`], or enforced with
//! [`AdvisoryPolicy::Enforce`].
//!
//! # Example
//!
//! ```
//! use packed_bed_models::support::correlation::{
//!     CorrelationId, EvaluatorConfig, PhysicalInputs, evaluate_all,
//! };
//! use uom::si::{
//!     dynamic_viscosity::pascal_second,
//!     f64::{DynamicViscosity, Length, MassDensity, Ratio, Velocity},
//!     length::meter,
//!     mass_density::kilogram_per_cubic_meter,
//!     ratio::ratio,
//!     velocity::meter_per_second,
//! };
//!
//! let inputs = PhysicalInputs {
//!     bed_length: Some(Length::new::<meter>(0.5)),
//!     voidage: Some(Ratio::new::<ratio>(0.4)),
//!     particle_diameter: Some(Length::new::<meter>(0.003)),
//!     velocity: Some(Velocity::new::<meter_per_second>(0.5)),
//!     fluid_density: Some(MassDensity::new::<kilogram_per_cubic_meter>(1.225)),
//!     fluid_viscosity: Some(DynamicViscosity::new::<pascal_second>(1.81e-5)),
//!     ..PhysicalInputs::default()
//! };
//!
//! let evaluation = evaluate_all(
//!     [CorrelationId::Ergun, CorrelationId::Dixon],
//!     &inputs,
//!     &EvaluatorConfig::default(),
//! )
//! .unwrap();
//! assert_eq!(evaluation.successes().count(), 2);
//! ```

pub mod conductivity;
pub mod dispersion;
pub mod flowing_bed;
pub mod overall;
pub mod pressure_drop;
pub mod transfer;
pub mod trickle_bed;
pub mod wall;

mod config;
mod definition;
mod error;
mod estimate;
mod evaluate;
mod id;
mod inputs;
mod registry;

pub use config::{AdvisoryPolicy, EvaluatorConfig};
pub use definition::{Applicability, CorrelationDefinition, Enforcement, Group};
pub use error::{CorrelationError, EvaluationError, InputError, RangeViolation};
pub use estimate::Estimate;
pub use evaluate::{Evaluation, advisories, evaluate, evaluate_all};
pub use id::{CorrelationId, Family};
pub use inputs::{InputKind, ParticleShape, PhysicalInputs};
