use std::f64::consts::TAU;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::ops::Range;
use std::path::Path;

use galpot_kernels::{PlanarForce, vcirc};
use rand::Rng;
use tracing::{info, warn};

use crate::error::{GalpotError, Result};

/// Phase-space state `x, y, z, vx, vy, vz`.
pub type State = [f64; 6];

/// Draws `n` prograde circular orbits in the plane with R uniform over
/// `r_range` and a uniform azimuth.
pub fn sample_circular<P: PlanarForce, R: Rng>(
    pots: &[P],
    n: usize,
    r_range: Range<f64>,
    rng: &mut R,
) -> Result<Vec<State>> {
    if !(r_range.start.is_finite() && r_range.end.is_finite())
        || r_range.start <= 0.
        || r_range.start >= r_range.end
    {
        return Err(GalpotError::InvalidRange {
            min: r_range.start,
            max: r_range.end,
        });
    }

    let mut states = Vec::with_capacity(n);
    for _ in 0..n {
        let r = rng.random_range(r_range.clone());
        let theta = rng.random_range(0.0..TAU);
        let (sin, cos) = theta.sin_cos();
        let v = vcirc(pots, r);
        states.push([r * cos, r * sin, 0.0, -v * sin, v * cos, 0.0]);
    }

    let unbound = states.iter().filter(|s| s[3].is_nan()).count();
    if unbound > 0 {
        warn!(unbound, "no circular velocity at some sampled radii");
    }
    Ok(states)
}

pub fn write_initial_conditions(filename: impl AsRef<Path>, states: &[State]) -> Result<()> {
    let filename = filename.as_ref();
    let mut writer = BufWriter::new(File::create(filename)?);
    writeln!(writer, "x,y,z,vx,vy,vz")?;
    for s in states {
        writeln!(writer, "{},{},{},{},{},{}", s[0], s[1], s[2], s[3], s[4], s[5])?;
    }
    writer.flush()?;
    info!(path = %filename.display(), rows = states.len(), "wrote initial conditions");
    Ok(())
}
