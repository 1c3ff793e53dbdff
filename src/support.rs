//! Supporting utilities used by models.
//!
//! The correlation library lives in [`correlation`]; the remaining modules
//! provide the numeric building blocks it is assembled from.

pub mod bessel;
pub mod constraint;
pub mod correlation;
pub mod dimensionless;
pub mod format;
pub mod units;
