use libm::sqrt;

use crate::force::{
    AxisymmetricForce, PlanarForce, evaluate_planar_r2derivs, evaluate_planar_rforces,
    evaluate_potentials,
};
use crate::roots::{MAXITER, RTOL, XTOL, brentq};

/// Radial bracket searched for resonances.
pub const RESONANCE_BRACKET: (f64, f64) = (1e-7, 1000.);

/// Circular velocity in the plane, `sqrt(R * -F_R)`.
#[inline(always)]
pub fn vcirc<P: PlanarForce>(pots: &[P], r: f64) -> f64 {
    sqrt(r * -evaluate_planar_rforces(pots, r, 0., 0.))
}

#[inline(always)]
pub fn omegac<P: PlanarForce>(pots: &[P], r: f64) -> f64 {
    vcirc(pots, r) / r
}

/// Epicycle frequency, `sqrt(d2Phi/dR2 + 3/R dPhi/dR)`.
#[inline(always)]
pub fn epifreq<P: PlanarForce>(pots: &[P], r: f64) -> f64 {
    let r2deriv = evaluate_planar_r2derivs(pots, r, 0., 0.);
    let rforce = evaluate_planar_rforces(pots, r, 0., 0.);
    sqrt(r2deriv - 3. / r * rforce)
}

/// Radius of the `m`-th order Lindblad resonance, `m (Omega - omega_p) = kappa`.
///
/// Positive `m` gives the inner, negative `m` the outer resonance. `None`
/// when there is no resonance inside [`RESONANCE_BRACKET`].
pub fn lindblad_r<P: PlanarForce>(pots: &[P], omega_p: f64, m: i32) -> Option<f64> {
    let m = m as f64;
    let (lo, hi) = RESONANCE_BRACKET;
    brentq(|r| m * (omegac(pots, r) - omega_p) - epifreq(pots, r), lo, hi, XTOL, RTOL, MAXITER)
}

/// Corotation radius, `Omega(R) = omega_p`.
pub fn corotation_r<P: PlanarForce>(pots: &[P], omega_p: f64) -> Option<f64> {
    let (lo, hi) = RESONANCE_BRACKET;
    brentq(|r| omegac(pots, r) - omega_p, lo, hi, XTOL, RTOL, MAXITER)
}

/// In-plane energy and angular momentum `(E, Lz)` of a star at `R` moving
/// with `(vR, vT)`.
pub fn calc_el<P: AxisymmetricForce>(pots: &[P], r: f64, vr: f64, vt: f64) -> (f64, f64) {
    let e = evaluate_potentials(pots, r, 0., 0., 0.) + vr * vr / 2. + vt * vt / 2.;
    (e, r * vt)
}
