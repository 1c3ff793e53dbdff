use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N2, P1, Z0},
};

/// Surface tension, N/m in SI.
pub type SurfaceTension = Quantity<ISQ<Z0, P1, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;
