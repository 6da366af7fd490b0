use crate::potential::{Jaffe, LogarithmicHalo};

/// Forces of an axisymmetric, static potential at cylindrical `(R, z)`.
///
/// `phi` and `t` are part of the signature so every potential can be driven
/// the same way by an integrator; none of the potentials here read them.
pub trait AxisymmetricForce {
    fn potential(&self, r: f64, z: f64, phi: f64, t: f64) -> f64;
    fn rforce(&self, r: f64, z: f64, phi: f64, t: f64) -> f64;
    fn zforce(&self, r: f64, z: f64, phi: f64, t: f64) -> f64;
}

/// In-plane (z = 0) force and its radial derivative.
pub trait PlanarForce {
    fn planar_rforce(&self, r: f64, phi: f64, t: f64) -> f64;
    fn planar_r2deriv(&self, r: f64, phi: f64, t: f64) -> f64;
}

macro_rules! impl_forces {
    ($ty:ty) => {
        impl AxisymmetricForce for $ty {
            #[inline(always)]
            fn potential(&self, r: f64, z: f64, _phi: f64, _t: f64) -> f64 {
                self.value(r, z)
            }
            #[inline(always)]
            fn rforce(&self, r: f64, z: f64, _phi: f64, _t: f64) -> f64 {
                <$ty>::rforce(self, r, z)
            }
            #[inline(always)]
            fn zforce(&self, r: f64, z: f64, _phi: f64, _t: f64) -> f64 {
                <$ty>::zforce(self, r, z)
            }
        }

        impl PlanarForce for $ty {
            #[inline(always)]
            fn planar_rforce(&self, r: f64, _phi: f64, _t: f64) -> f64 {
                <$ty>::planar_rforce(self, r)
            }
            #[inline(always)]
            fn planar_r2deriv(&self, r: f64, _phi: f64, _t: f64) -> f64 {
                <$ty>::planar_r2deriv(self, r)
            }
        }
    };
}

impl_forces!(Jaffe);
impl_forces!(LogarithmicHalo);

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Potential {
    LogarithmicHalo(LogarithmicHalo),
    Jaffe(Jaffe),
}

impl Potential {
    /// Type codes understood by the flat `(pot_type, pot_args)` layout.
    pub const LOGARITHMIC_HALO: i32 = 0;
    pub const JAFFE: i32 = 10;

    pub fn type_code(&self) -> i32 {
        match self {
            Potential::LogarithmicHalo(_) => Self::LOGARITHMIC_HALO,
            Potential::Jaffe(_) => Self::JAFFE,
        }
    }

    pub fn nargs(&self) -> usize {
        match self {
            Potential::LogarithmicHalo(_) => LogarithmicHalo::NARGS,
            Potential::Jaffe(_) => Jaffe::NARGS,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Potential::LogarithmicHalo(_) => "LogarithmicHaloPotential",
            Potential::Jaffe(_) => "JaffePotential",
        }
    }

    pub fn amp(&self) -> f64 {
        match self {
            Potential::LogarithmicHalo(p) => p.amp,
            Potential::Jaffe(p) => p.amp,
        }
    }

    pub fn with_amp(self, amp: f64) -> Self {
        match self {
            Potential::LogarithmicHalo(p) => Potential::LogarithmicHalo(LogarithmicHalo { amp, ..p }),
            Potential::Jaffe(p) => Potential::Jaffe(Jaffe { amp, ..p }),
        }
    }

    /// Rescales `amp` so that `-planar_rforce(1) == fraction`, i.e. the
    /// circular velocity at R = 1 is `sqrt(fraction)`.
    pub fn normalized(self, fraction: f64) -> Self {
        let f1 = -self.planar_rforce(1., 0., 0.);
        self.with_amp(self.amp() * fraction / f1)
    }
}

impl From<Jaffe> for Potential {
    fn from(p: Jaffe) -> Self {
        Potential::Jaffe(p)
    }
}

impl From<LogarithmicHalo> for Potential {
    fn from(p: LogarithmicHalo) -> Self {
        Potential::LogarithmicHalo(p)
    }
}

impl AxisymmetricForce for Potential {
    fn potential(&self, r: f64, z: f64, phi: f64, t: f64) -> f64 {
        match self {
            Potential::LogarithmicHalo(p) => AxisymmetricForce::potential(p, r, z, phi, t),
            Potential::Jaffe(p) => AxisymmetricForce::potential(p, r, z, phi, t),
        }
    }

    fn rforce(&self, r: f64, z: f64, phi: f64, t: f64) -> f64 {
        match self {
            Potential::LogarithmicHalo(p) => AxisymmetricForce::rforce(p, r, z, phi, t),
            Potential::Jaffe(p) => AxisymmetricForce::rforce(p, r, z, phi, t),
        }
    }

    fn zforce(&self, r: f64, z: f64, phi: f64, t: f64) -> f64 {
        match self {
            Potential::LogarithmicHalo(p) => AxisymmetricForce::zforce(p, r, z, phi, t),
            Potential::Jaffe(p) => AxisymmetricForce::zforce(p, r, z, phi, t),
        }
    }
}

impl PlanarForce for Potential {
    fn planar_rforce(&self, r: f64, phi: f64, t: f64) -> f64 {
        match self {
            Potential::LogarithmicHalo(p) => PlanarForce::planar_rforce(p, r, phi, t),
            Potential::Jaffe(p) => PlanarForce::planar_rforce(p, r, phi, t),
        }
    }

    fn planar_r2deriv(&self, r: f64, phi: f64, t: f64) -> f64 {
        match self {
            Potential::LogarithmicHalo(p) => PlanarForce::planar_r2deriv(p, r, phi, t),
            Potential::Jaffe(p) => PlanarForce::planar_r2deriv(p, r, phi, t),
        }
    }
}

pub fn evaluate_potentials<P: AxisymmetricForce>(pots: &[P], r: f64, z: f64, phi: f64, t: f64) -> f64 {
    pots.iter().map(|p| p.potential(r, z, phi, t)).sum()
}

pub fn evaluate_rforces<P: AxisymmetricForce>(pots: &[P], r: f64, z: f64, phi: f64, t: f64) -> f64 {
    pots.iter().map(|p| p.rforce(r, z, phi, t)).sum()
}

pub fn evaluate_zforces<P: AxisymmetricForce>(pots: &[P], r: f64, z: f64, phi: f64, t: f64) -> f64 {
    pots.iter().map(|p| p.zforce(r, z, phi, t)).sum()
}

pub fn evaluate_planar_rforces<P: PlanarForce>(pots: &[P], r: f64, phi: f64, t: f64) -> f64 {
    pots.iter().map(|p| p.planar_rforce(r, phi, t)).sum()
}

pub fn evaluate_planar_r2derivs<P: PlanarForce>(pots: &[P], r: f64, phi: f64, t: f64) -> f64 {
    pots.iter().map(|p| p.planar_r2deriv(r, phi, t)).sum()
}
