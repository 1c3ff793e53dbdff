//! Public Twine models.
//!
//! Each model is a thin [`twine_core::Model`] adapter that delegates to the
//! computation library in [`crate::support`].

pub mod packed_bed;
