//! Positional parameter layouts at the library boundary.
//!
//! Integrators hand potentials over as a list of type codes plus one flat
//! `f64` buffer holding every potential's arguments back to back:
//!
//! * logarithmic halo (code 0): `amp, q, c` (`amp, c` in the plane)
//! * Jaffe (code 10): `amp, a`

use std::fmt;
use std::str::FromStr;

use galpot_kernels::{Jaffe, LogarithmicHalo, Potential};
use tracing::debug;

use crate::error::{GalpotError, Result};

pub trait PositionalArgs: Sized {
    const NAME: &'static str;
    const NARGS: usize;

    fn from_args(args: &[f64]) -> Result<Self>;
    fn to_args(&self) -> Vec<f64>;
}

fn check_len(name: &'static str, expected: usize, args: &[f64]) -> Result<()> {
    if args.len() != expected {
        return Err(GalpotError::ArgCount {
            potential: name,
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

impl PositionalArgs for Jaffe {
    const NAME: &'static str = "JaffePotential";
    const NARGS: usize = Jaffe::NARGS;

    fn from_args(args: &[f64]) -> Result<Self> {
        check_len(Self::NAME, Self::NARGS, args)?;
        Ok(Jaffe::new(args[0], args[1]))
    }

    fn to_args(&self) -> Vec<f64> {
        vec![self.amp, self.a]
    }
}

impl PositionalArgs for LogarithmicHalo {
    const NAME: &'static str = "LogarithmicHaloPotential";
    const NARGS: usize = LogarithmicHalo::NARGS;

    fn from_args(args: &[f64]) -> Result<Self> {
        check_len(Self::NAME, Self::NARGS, args)?;
        Ok(LogarithmicHalo::new(args[0], args[1], args[2]))
    }

    fn to_args(&self) -> Vec<f64> {
        vec![self.amp, self.q, self.c]
    }
}

/// In-plane halo from `[amp, c]`.
pub fn planar_halo_from_args(args: &[f64]) -> Result<LogarithmicHalo> {
    check_len("planar LogarithmicHaloPotential", LogarithmicHalo::PLANAR_NARGS, args)?;
    Ok(LogarithmicHalo::planar(args[0], args[1]))
}

pub fn potential_from_args(code: i32, args: &[f64]) -> Result<Potential> {
    match code {
        Potential::LOGARITHMIC_HALO => LogarithmicHalo::from_args(args).map(Potential::from),
        Potential::JAFFE => Jaffe::from_args(args).map(Potential::from),
        other => Err(GalpotError::UnknownPotentialType(other)),
    }
}

pub fn potential_to_args(pot: &Potential) -> Vec<f64> {
    match pot {
        Potential::LogarithmicHalo(p) => p.to_args(),
        Potential::Jaffe(p) => p.to_args(),
    }
}

fn arity(code: i32) -> Result<usize> {
    match code {
        Potential::LOGARITHMIC_HALO => Ok(LogarithmicHalo::NARGS),
        Potential::JAFFE => Ok(Jaffe::NARGS),
        other => Err(GalpotError::UnknownPotentialType(other)),
    }
}

/// Splits a flat `(pot_type, pot_args)` description into potentials.
pub fn parse_potentials(types: &[i32], args: &[f64]) -> Result<Vec<Potential>> {
    let mut pots = Vec::with_capacity(types.len());
    let mut rest = args;
    for &code in types {
        let n = arity(code)?;
        if rest.len() < n {
            return Err(GalpotError::ArgCount {
                potential: potential_name(code),
                expected: n,
                got: rest.len(),
            });
        }
        let (head, tail) = rest.split_at(n);
        pots.push(potential_from_args(code, head)?);
        rest = tail;
    }
    if !rest.is_empty() {
        return Err(GalpotError::TrailingArgs(rest.len()));
    }
    debug!(npot = pots.len(), nargs = args.len(), "parsed potentials");
    Ok(pots)
}

fn potential_name(code: i32) -> &'static str {
    match code {
        Potential::JAFFE => Jaffe::NAME,
        _ => LogarithmicHalo::NAME,
    }
}

pub fn flatten_potentials(pots: &[Potential]) -> (Vec<i32>, Vec<f64>) {
    let types = pots.iter().map(Potential::type_code).collect();
    let args = pots.iter().flat_map(potential_to_args).collect();
    (types, args)
}

/// Textual potential description, e.g. `jaffe:1,0.5` or `loghalo:1,0.9,1e-16`.
///
/// The numbers follow the positional layout of the potential.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PotentialSpec(pub Potential);

impl FromStr for PotentialSpec {
    type Err = GalpotError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: String| GalpotError::InvalidSpec {
            spec: s.to_string(),
            reason,
        };
        let (kind, params) = s
            .split_once(':')
            .ok_or_else(|| invalid("expected KIND:ARG,ARG,...".into()))?;
        let args = params
            .split(',')
            .map(|v| v.trim().parse::<f64>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| invalid(e.to_string()))?;
        let code = match kind.trim().to_ascii_lowercase().as_str() {
            "jaffe" => Potential::JAFFE,
            "loghalo" | "log" | "logarithmichalo" => Potential::LOGARITHMIC_HALO,
            other => return Err(invalid(format!("unknown potential kind {other:?}"))),
        };
        potential_from_args(code, &args).map(PotentialSpec)
    }
}

impl fmt::Display for PotentialSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.0 {
            Potential::LogarithmicHalo(_) => "loghalo",
            Potential::Jaffe(_) => "jaffe",
        };
        let args: Vec<String> = potential_to_args(&self.0).iter().map(f64::to_string).collect();
        write!(f, "{kind}:{}", args.join(","))
    }
}
