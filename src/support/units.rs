//! Extensions to [`uom`].
//!
//! Quantities at the public boundary are [`uom`] types. Where [`uom`] has no
//! named quantity for a dimension this crate needs, an alias is provided here.
//!
//! ## Surface tension
//!
//! Surface tension (N/m) shares its dimension with radiant exposure (J/m²),
//! so [`SurfaceTension`] values are built with the
//! [`uom::si::radiant_exposure`] units:
//!
//! ```
//! use uom::si::radiant_exposure::joule_per_square_meter;
//! use packed_bed_models::support::units::SurfaceTension;
//!
//! let water = SurfaceTension::new::<joule_per_square_meter>(0.072);
//! assert_eq!(water.get::<joule_per_square_meter>(), 0.072);
//! ```

mod quantities;

pub use quantities::SurfaceTension;
