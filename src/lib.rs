//! # Packed Bed Models
//!
//! Transport-property correlations for packed and fixed-bed reactors:
//! pressure drop, effective thermal conductivity, wall and overall
//! heat-transfer coefficients, axial and radial dispersion, and
//! particle-to-fluid mass and heat transfer.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] adapters over the correlation library.
//! - [`support`]: The correlation library and the numeric utilities it uses.
//!
//! Modules in [`support`] are part of the public API, but their APIs are not
//! stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
