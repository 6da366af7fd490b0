use libm::{fabs, fmin};

/// Absolute x tolerance.
pub const XTOL: f64 = 2e-12;
/// Relative x tolerance, 4 ulp.
pub const RTOL: f64 = 4. * f64::EPSILON;
pub const MAXITER: usize = 100;

/// Brent's method on `[xa, xb]`.
///
/// Returns `None` when `f` has the same sign at both ends, is NaN at either
/// end, or the bracket does not shrink below tolerance within `maxiter`
/// steps.
pub fn brentq<F: Fn(f64) -> f64>(f: F, xa: f64, xb: f64, xtol: f64, rtol: f64, maxiter: usize) -> Option<f64> {
    let (mut xpre, mut xcur) = (xa, xb);
    let (mut fpre, mut fcur) = (f(xpre), f(xcur));
    let (mut xblk, mut fblk) = (0., 0.);
    let (mut spre, mut scur) = (0., 0.);

    if fpre.is_nan() || fcur.is_nan() || fpre * fcur > 0. {
        return None;
    }
    if fpre == 0. {
        return Some(xpre);
    }
    if fcur == 0. {
        return Some(xcur);
    }

    for _ in 0..maxiter {
        if fpre != 0. && fcur != 0. && (fpre < 0.) != (fcur < 0.) {
            xblk = xpre;
            fblk = fpre;
            spre = xcur - xpre;
            scur = spre;
        }
        // keep xcur as the best estimate
        if fabs(fblk) < fabs(fcur) {
            xpre = xcur;
            xcur = xblk;
            xblk = xpre;
            fpre = fcur;
            fcur = fblk;
            fblk = fpre;
        }

        let delta = (xtol + rtol * fabs(xcur)) / 2.;
        let sbis = (xblk - xcur) / 2.;
        if fcur == 0. || fabs(sbis) < delta {
            return Some(xcur);
        }

        if fabs(spre) > delta && fabs(fcur) < fabs(fpre) {
            let stry = if xpre == xblk {
                // secant
                -fcur * (xcur - xpre) / (fcur - fpre)
            } else {
                // inverse quadratic interpolation
                let dpre = (fpre - fcur) / (xpre - xcur);
                let dblk = (fblk - fcur) / (xblk - xcur);
                -fcur * (fblk * dblk - fpre * dpre) / (dblk * dpre * (fblk - fpre))
            };
            if 2. * fabs(stry) < fmin(fabs(spre), 3. * fabs(sbis) - delta) {
                spre = scur;
                scur = stry;
            } else {
                spre = sbis;
                scur = sbis;
            }
        } else {
            spre = sbis;
            scur = sbis;
        }

        xpre = xcur;
        fpre = fcur;
        if fabs(scur) > delta {
            xcur += scur;
        } else {
            xcur += if sbis > 0. { delta } else { -delta };
        }
        fcur = f(xcur);
    }
    None
}
