#![cfg_attr(not(test), no_std)]

mod circular;
mod force;
mod potential;
mod roots;

pub use crate::circular::{
    RESONANCE_BRACKET, calc_el, corotation_r, epifreq, lindblad_r, omegac, vcirc,
};
pub use crate::force::{
    AxisymmetricForce, PlanarForce, Potential, evaluate_planar_r2derivs, evaluate_planar_rforces,
    evaluate_potentials, evaluate_rforces, evaluate_zforces,
};
pub use crate::potential::{Jaffe, LogarithmicHalo};
pub use crate::roots::brentq;
