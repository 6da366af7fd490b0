use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use galpot_kernels::{PlanarForce, epifreq, evaluate_planar_rforces, omegac, vcirc};
use tracing::info;

use crate::error::{GalpotError, Result};

pub fn linspace(start: f64, stop: f64, n: usize) -> Result<Vec<f64>> {
    if n < 2 {
        return Err(GalpotError::InvalidGrid(n));
    }
    let dr = (stop - start) / (n as f64 - 1.0);
    Ok((0..n).map(|i| start + i as f64 * dr).collect())
}

pub fn calc_rotcurve<P: PlanarForce>(pots: &[P], rs: &[f64]) -> Vec<f64> {
    rs.iter().map(|&r| vcirc(pots, r)).collect()
}

/// Writes `R,vc,omega,kappa,rforce` rows over an even grid in R.
pub fn precompute_rotcurve<P: PlanarForce>(
    filename: impl AsRef<Path>,
    pots: &[P],
    r_min: f64,
    r_max: f64,
    n_points: usize,
) -> Result<usize> {
    let filename = filename.as_ref();
    let rs = linspace(r_min, r_max, n_points)?;
    let mut writer = BufWriter::new(File::create(filename)?);
    writeln!(writer, "R,vc,omega,kappa,rforce")?;

    for &r in &rs {
        let vc = vcirc(pots, r);
        let omega = omegac(pots, r);
        let kappa = epifreq(pots, r);
        let fr = evaluate_planar_rforces(pots, r, 0., 0.);
        writeln!(writer, "{},{},{},{},{}", r, vc, omega, kappa, fr)?;
    }
    writer.flush()?;

    info!(path = %filename.display(), rows = rs.len(), "wrote rotation curve");
    Ok(rs.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use galpot_kernels::{Jaffe, LogarithmicHalo, Potential};

    #[test]
    fn linspace_endpoints() {
        let rs = linspace(0.01, 5., 1001).unwrap();
        assert_eq!(rs.len(), 1001);
        assert_eq!(rs[0], 0.01);
        assert_relative_eq!(rs[1000], 5., max_relative = 1e-14);
        assert!(matches!(linspace(0., 1., 1), Err(GalpotError::InvalidGrid(1))));
    }

    #[test]
    fn rotcurve_of_flat_halo() {
        let pots = [LogarithmicHalo::new(1., 0.9, 0.)];
        for vc in calc_rotcurve(&pots, &[0.5, 1., 2.]) {
            assert_relative_eq!(vc, 1., max_relative = 1e-14);
        }
    }

    #[test]
    fn writes_csv_table() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rotcurve.csv");
        let pots = [
            Potential::from(LogarithmicHalo::new(1., 0.9, 0.01)),
            Potential::from(Jaffe::new(0.5, 1.)),
        ];
        let rows = precompute_rotcurve(&path, &pots, 0.1, 3., 30).unwrap();
        assert_eq!(rows, 30);

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("R,vc,omega,kappa,rforce"));
        let first: Vec<f64> = lines
            .next()
            .unwrap()
            .split(',')
            .map(|v| v.parse().unwrap())
            .collect();
        assert_eq!(first[0], 0.1);
        assert_relative_eq!(first[1], vcirc(&pots, 0.1));
        assert!(first[4] < 0.);
        assert_eq!(text.lines().count(), 31);
    }
}
