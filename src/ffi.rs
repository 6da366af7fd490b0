//! C ABI entry points, `double f(R, [Z,] phi, t, nargs, args)`.
//!
//! Each reads only the leading arguments it needs from `args`. A null
//! pointer or too short a buffer yields NaN.
#![allow(non_snake_case)]

use std::os::raw::c_int;
use std::slice;

use galpot_kernels::{Jaffe, LogarithmicHalo};

/// # Safety
/// `args` must be null or valid for reads of `nargs` doubles.
#[inline(always)]
unsafe fn leading<'a>(nargs: c_int, args: *const f64, need: usize) -> Option<&'a [f64]> {
    if args.is_null() || nargs < 0 || (nargs as usize) < need {
        return None;
    }
    Some(unsafe { slice::from_raw_parts(args, need) })
}

#[inline(always)]
unsafe fn jaffe(nargs: c_int, args: *const f64) -> Option<Jaffe> {
    unsafe { leading(nargs, args, Jaffe::NARGS) }.map(|a| Jaffe::new(a[0], a[1]))
}

#[inline(always)]
unsafe fn halo(nargs: c_int, args: *const f64) -> Option<LogarithmicHalo> {
    unsafe { leading(nargs, args, LogarithmicHalo::NARGS) }
        .map(|a| LogarithmicHalo::new(a[0], a[1], a[2]))
}

#[inline(always)]
unsafe fn planar_halo(nargs: c_int, args: *const f64) -> Option<LogarithmicHalo> {
    unsafe { leading(nargs, args, LogarithmicHalo::PLANAR_NARGS) }
        .map(|a| LogarithmicHalo::planar(a[0], a[1]))
}

/// # Safety
/// `args` must be null or point to `nargs` readable doubles `amp, a`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn JaffePotentialRforce(
    R: f64,
    Z: f64,
    _phi: f64,
    _t: f64,
    nargs: c_int,
    args: *const f64,
) -> f64 {
    unsafe { jaffe(nargs, args) }.map_or(f64::NAN, |p| p.rforce(R, Z))
}

/// # Safety
/// `args` must be null or point to `nargs` readable doubles `amp, a`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn JaffePotentialPlanarRforce(
    R: f64,
    _phi: f64,
    _t: f64,
    nargs: c_int,
    args: *const f64,
) -> f64 {
    unsafe { jaffe(nargs, args) }.map_or(f64::NAN, |p| p.planar_rforce(R))
}

/// # Safety
/// `args` must be null or point to `nargs` readable doubles `amp, a`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn JaffePotentialzforce(
    R: f64,
    Z: f64,
    _phi: f64,
    _t: f64,
    nargs: c_int,
    args: *const f64,
) -> f64 {
    unsafe { jaffe(nargs, args) }.map_or(f64::NAN, |p| p.zforce(R, Z))
}

/// # Safety
/// `args` must be null or point to `nargs` readable doubles `amp, a`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn JaffePotentialPlanarR2deriv(
    R: f64,
    _phi: f64,
    _t: f64,
    nargs: c_int,
    args: *const f64,
) -> f64 {
    unsafe { jaffe(nargs, args) }.map_or(f64::NAN, |p| p.planar_r2deriv(R))
}

/// # Safety
/// `args` must be null or point to `nargs` readable doubles `amp, q, c`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn LogarithmicHaloPotentialRforce(
    R: f64,
    Z: f64,
    _phi: f64,
    _t: f64,
    nargs: c_int,
    args: *const f64,
) -> f64 {
    unsafe { halo(nargs, args) }.map_or(f64::NAN, |p| p.rforce(R, Z))
}

/// # Safety
/// `args` must be null or point to `nargs` readable doubles `amp, c`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn LogarithmicHaloPotentialPlanarRforce(
    R: f64,
    _phi: f64,
    _t: f64,
    nargs: c_int,
    args: *const f64,
) -> f64 {
    unsafe { planar_halo(nargs, args) }.map_or(f64::NAN, |p| p.planar_rforce(R))
}

/// # Safety
/// `args` must be null or point to `nargs` readable doubles `amp, q, c`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn LogarithmicHaloPotentialzforce(
    R: f64,
    z: f64,
    _phi: f64,
    _t: f64,
    nargs: c_int,
    args: *const f64,
) -> f64 {
    unsafe { halo(nargs, args) }.map_or(f64::NAN, |p| p.zforce(R, z))
}

/// # Safety
/// `args` must be null or point to `nargs` readable doubles `amp, c`.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn LogarithmicHaloPotentialPlanarR2deriv(
    R: f64,
    _phi: f64,
    _t: f64,
    nargs: c_int,
    args: *const f64,
) -> f64 {
    unsafe { planar_halo(nargs, args) }.map_or(f64::NAN, |p| p.planar_r2deriv(R))
}
