use libm::log;
use libm::pow;
use libm::sqrt;

/// Jaffe (1983) sphere, `Phi(r) = -amp * ln(1 + a/r)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Jaffe {
    pub amp: f64,
    pub a: f64,
}

/// Logarithmic halo, `Phi(R, z) = amp/2 * ln(R^2 + (z/q)^2 + c)`.
///
/// `c` is the squared core radius. `q` flattens the halo along z and has no
/// effect in the plane.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LogarithmicHalo {
    pub amp: f64,
    pub q: f64,
    pub c: f64,
}

impl Jaffe {
    pub const NARGS: usize = 2;

    pub const fn new(amp: f64, a: f64) -> Self {
        Self { amp, a }
    }

    #[inline(always)]
    pub fn value(&self, r: f64, z: f64) -> f64 {
        let sqrt_rz = sqrt(r * r + z * z);
        -self.amp * log(1. + self.a / sqrt_rz)
    }

    #[inline(always)]
    pub fn rforce(&self, r: f64, z: f64) -> f64 {
        let sqrt_rz = sqrt(r * r + z * z);
        -self.amp * self.a * r * pow(sqrt_rz, -3.) / (1. + self.a / sqrt_rz)
    }

    #[inline(always)]
    pub fn zforce(&self, r: f64, z: f64) -> f64 {
        let sqrt_rz = sqrt(r * r + z * z);
        -self.amp * self.a * z * pow(sqrt_rz, -3.) / (1. + self.a / sqrt_rz)
    }

    // z = 0 specialisation, R stands in for sqrt(R^2 + z^2)
    #[inline(always)]
    pub fn planar_rforce(&self, r: f64) -> f64 {
        -self.amp * self.a * pow(r, -2.) / (1. + self.a / r)
    }

    #[inline(always)]
    pub fn planar_r2deriv(&self, r: f64) -> f64 {
        let a = self.a;
        -self.amp * a * (a + 2. * r) * pow(r, -4.) * pow(1. + a / r, -2.)
    }
}

impl LogarithmicHalo {
    pub const NARGS: usize = 3;
    pub const PLANAR_NARGS: usize = 2;

    pub const fn new(amp: f64, q: f64, c: f64) -> Self {
        Self { amp, q, c }
    }

    /// In-plane halo. `q` is fixed to 1 since nothing planar reads it.
    pub const fn planar(amp: f64, c: f64) -> Self {
        Self { amp, q: 1., c }
    }

    #[inline(always)]
    fn denom(&self, r: f64, z: f64) -> f64 {
        let zq = z / self.q;
        r * r + zq * zq + self.c
    }

    #[inline(always)]
    pub fn value(&self, r: f64, z: f64) -> f64 {
        0.5 * self.amp * log(self.denom(r, z))
    }

    #[inline(always)]
    pub fn rforce(&self, r: f64, z: f64) -> f64 {
        -self.amp * r / self.denom(r, z)
    }

    #[inline(always)]
    pub fn zforce(&self, r: f64, z: f64) -> f64 {
        -self.amp * z / self.q / self.q / self.denom(r, z)
    }

    #[inline(always)]
    pub fn planar_rforce(&self, r: f64) -> f64 {
        -self.amp * r / (r * r + self.c)
    }

    #[inline(always)]
    pub fn planar_r2deriv(&self, r: f64) -> f64 {
        let r2c = r * r + self.c;
        self.amp * (1. - 2. * r * r / r2c) / r2c
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const RADII: [f64; 5] = [0.1, 0.5, 1.0, 2.7, 12.0];

    #[test]
    fn jaffe_rforce_in_plane_matches_planar() {
        for a in [0.3, 1.0, 4.0] {
            let pot = Jaffe::new(1., a);
            for r in RADII {
                assert_relative_eq!(pot.rforce(r, 0.), pot.planar_rforce(r), max_relative = 1e-14);
            }
        }
    }

    #[test]
    fn halo_rforce_in_plane_matches_planar() {
        for (q, c) in [(0.9, 0.0), (0.7, 0.25), (1.0, 1.0)] {
            let pot = LogarithmicHalo::new(1., q, c);
            let flat = LogarithmicHalo::planar(1., c);
            for r in RADII {
                assert_relative_eq!(pot.rforce(r, 0.), flat.planar_rforce(r), max_relative = 1e-14);
            }
        }
    }

    #[test]
    fn zforce_is_odd_in_z() {
        let jaffe = Jaffe::new(1.3, 0.8);
        let halo = LogarithmicHalo::new(0.7, 0.8, 0.04);
        for r in RADII {
            for z in [0.05, 0.4, 3.0] {
                assert_eq!(jaffe.zforce(r, z), -jaffe.zforce(r, -z));
                assert_eq!(halo.zforce(r, z), -halo.zforce(r, -z));
            }
        }
    }

    #[test]
    fn amplitude_scales_linearly() {
        let (r, z) = (1.7, 0.3);
        let j1 = Jaffe::new(1., 0.6);
        let j2 = Jaffe::new(2., 0.6);
        assert_relative_eq!(j2.rforce(r, z), 2. * j1.rforce(r, z));
        assert_relative_eq!(j2.zforce(r, z), 2. * j1.zforce(r, z));
        assert_relative_eq!(j2.planar_rforce(r), 2. * j1.planar_rforce(r));
        assert_relative_eq!(j2.planar_r2deriv(r), 2. * j1.planar_r2deriv(r));

        let h1 = LogarithmicHalo::new(1., 0.9, 0.1);
        let h2 = LogarithmicHalo::new(2., 0.9, 0.1);
        assert_relative_eq!(h2.rforce(r, z), 2. * h1.rforce(r, z));
        assert_relative_eq!(h2.zforce(r, z), 2. * h1.zforce(r, z));
        assert_relative_eq!(h2.planar_rforce(r), 2. * h1.planar_rforce(r));
        assert_relative_eq!(h2.planar_r2deriv(r), 2. * h1.planar_r2deriv(r));
        assert!(h2.planar_rforce(r) < 0.);
    }

    #[test]
    fn known_values() {
        assert_relative_eq!(
            Jaffe::new(1., 1.).planar_r2deriv(2.),
            -5. / 16. / 2.25,
            max_relative = 1e-14
        );
        assert_eq!(LogarithmicHalo::planar(1., 1.).planar_rforce(1.), -0.5);
        assert_eq!(LogarithmicHalo::new(1., 0.5, 0.).zforce(0., 1.), -1.);
    }

    #[test]
    fn forces_are_negative_gradient() {
        let h = 1e-6;
        let jaffe = Jaffe::new(1.1, 0.9);
        let halo = LogarithmicHalo::new(0.8, 0.75, 0.2);
        for r in [0.4, 1.0, 3.0] {
            let z = 0.35;
            let dr = |f: &dyn Fn(f64, f64) -> f64| -(f(r + h, z) - f(r - h, z)) / (2. * h);
            let dz = |f: &dyn Fn(f64, f64) -> f64| -(f(r, z + h) - f(r, z - h)) / (2. * h);
            assert_relative_eq!(jaffe.rforce(r, z), dr(&|r, z| jaffe.value(r, z)), max_relative = 1e-6);
            assert_relative_eq!(jaffe.zforce(r, z), dz(&|r, z| jaffe.value(r, z)), max_relative = 1e-6);
            assert_relative_eq!(halo.rforce(r, z), dr(&|r, z| halo.value(r, z)), max_relative = 1e-6);
            assert_relative_eq!(halo.zforce(r, z), dz(&|r, z| halo.value(r, z)), max_relative = 1e-6);
        }
    }

    #[test]
    fn r2deriv_is_derivative_of_planar_force() {
        let h = 1e-6;
        let jaffe = Jaffe::new(1., 0.5);
        let halo = LogarithmicHalo::planar(1., 0.3);
        for r in [0.3, 1.0, 2.5] {
            let num = -(jaffe.planar_rforce(r + h) - jaffe.planar_rforce(r - h)) / (2. * h);
            assert_relative_eq!(jaffe.planar_r2deriv(r), num, max_relative = 1e-6);
            let num = -(halo.planar_rforce(r + h) - halo.planar_rforce(r - h)) / (2. * h);
            assert_relative_eq!(halo.planar_r2deriv(r), num, max_relative = 1e-6);
        }
    }

    #[test]
    fn origin_is_not_trapped() {
        let jaffe = Jaffe::new(1., 1.);
        assert!(!jaffe.rforce(0., 0.).is_finite());
        assert!(!jaffe.planar_r2deriv(0.).is_finite());
        let halo = LogarithmicHalo::new(1., 1., 0.);
        assert!(halo.rforce(0., 0.).is_nan());
    }
}
