use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use galpot::initial::{sample_circular, write_initial_conditions};
use galpot::logging::init_tracing;
use galpot::precompute_rotcurve::precompute_rotcurve;
use galpot::{
    Potential, PotentialSpec, corotation_r, epifreq, evaluate_planar_r2derivs,
    evaluate_planar_rforces, evaluate_potentials, evaluate_rforces, evaluate_zforces, lindblad_r,
    omegac, vcirc,
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

const N: usize = 1024;
const R_MIN: f64 = 1.0;
const R_MAX: f64 = 5.0;

const ROTCURVE_R_MIN: f64 = 0.01;
const ROTCURVE_R_MAX: f64 = 5.0;
const ROTCURVE_POINTS: usize = 1001;

#[derive(Parser)]
#[command(author, version, about = "Closed-form forces of galactic potentials")]
struct Cli {
    /// Potential component as KIND:ARGS, e.g. `loghalo:1,0.9,1e-16` or
    /// `jaffe:1,0.5`. Repeat to sum several components.
    #[arg(short, long = "potential", required = true)]
    potentials: Vec<PotentialSpec>,

    /// Rescale every component so that it alone has vc(1)^2 = F
    #[arg(long, value_name = "F", global = true)]
    normalize: Option<f64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the potential, forces and R2deriv at one position
    Eval {
        #[arg(short = 'R', long, default_value_t = 1.0)]
        r: f64,
        #[arg(short, long, default_value_t = 0.0)]
        z: f64,
    },
    /// Tabulate vc, omega, kappa and the radial force over R
    Rotcurve {
        #[arg(long, default_value_t = ROTCURVE_R_MIN)]
        r_min: f64,
        #[arg(long, default_value_t = ROTCURVE_R_MAX)]
        r_max: f64,
        #[arg(long, default_value_t = ROTCURVE_POINTS)]
        points: usize,
        #[arg(short, long, default_value = "rotcurve.csv")]
        out: PathBuf,
    },
    /// Find corotation and the Lindblad resonances for a pattern speed
    Resonances {
        #[arg(long)]
        omega_p: f64,
        /// Resonance order, negative for the outer resonance
        #[arg(short, default_value_t = 2, allow_negative_numbers = true)]
        m: i32,
    },
    /// Sample circular-orbit initial conditions
    Sample {
        #[arg(short, default_value_t = N)]
        n: usize,
        #[arg(long, default_value_t = R_MIN)]
        r_min: f64,
        #[arg(long, default_value_t = R_MAX)]
        r_max: f64,
        /// Seed for reproducible draws, OS entropy otherwise
        #[arg(long)]
        seed: Option<u64>,
        #[arg(short, long, default_value = "initial_conditions.csv")]
        out: PathBuf,
    },
}

fn components(specs: &[PotentialSpec], normalize: Option<f64>) -> Vec<Potential> {
    specs
        .iter()
        .map(|spec| match normalize {
            Some(fraction) => spec.0.normalized(fraction),
            None => spec.0,
        })
        .collect()
}

fn main() -> ExitCode {
    init_tracing();
    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let pots = components(&cli.potentials, cli.normalize);
    for pot in &pots {
        debug!(name = pot.name(), spec = %PotentialSpec(*pot), "component");
    }

    match cli.command {
        Command::Eval { r, z } => {
            println!("potential    = {:.12e}", evaluate_potentials(&pots, r, z, 0., 0.));
            println!("Rforce       = {:.12e}", evaluate_rforces(&pots, r, z, 0., 0.));
            println!("zforce       = {:.12e}", evaluate_zforces(&pots, r, z, 0., 0.));
            println!("planarRforce = {:.12e}", evaluate_planar_rforces(&pots, r, 0., 0.));
            println!("planarR2deriv= {:.12e}", evaluate_planar_r2derivs(&pots, r, 0., 0.));
            println!("vc           = {:.12e}", vcirc(&pots, r));
            println!("omega        = {:.12e}", omegac(&pots, r));
            println!("kappa        = {:.12e}", epifreq(&pots, r));
        }
        Command::Rotcurve { r_min, r_max, points, out } => {
            let rows = precompute_rotcurve(&out, &pots, r_min, r_max, points)?;
            println!("Wrote {} rows to {}", rows, out.display());
        }
        Command::Resonances { omega_p, m } => {
            let show = |r: Option<f64>| match r {
                Some(r) => format!("{r:.12e}"),
                None => "none".to_string(),
            };
            println!("corotation   = {}", show(corotation_r(&pots, omega_p)));
            println!("ILR (m={:>3}) = {}", m, show(lindblad_r(&pots, omega_p, m)));
            let outer = m.saturating_neg();
            println!("OLR (m={:>3}) = {}", outer, show(lindblad_r(&pots, omega_p, outer)));
        }
        Command::Sample { n, r_min, r_max, seed, out } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            let states = sample_circular(&pots, n, r_min..r_max, &mut rng)?;
            write_initial_conditions(&out, &states)?;
            info!(n, r_min, r_max, "sampled circular orbits");
            println!("Wrote {} rows to {}", states.len(), out.display());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use galpot::PlanarForce;

    #[test]
    fn normalize_after_subcommand_takes_a_fraction() {
        let cli = Cli::try_parse_from(["galpot", "-p", "jaffe:1,1", "rotcurve", "--normalize", "2"]).unwrap();
        assert_eq!(cli.normalize, Some(2.0));
        let pots = components(&cli.potentials, cli.normalize);
        assert_relative_eq!(pots[0].planar_rforce(1., 0., 0.), -2., max_relative = 1e-14);
        assert_relative_eq!(vcirc(&pots, 1.), 2f64.sqrt(), max_relative = 1e-14);
    }

    #[test]
    fn normalize_is_optional() {
        let cli = Cli::try_parse_from(["galpot", "-p", "jaffe:3,1", "--normalize", "0.5", "eval"]).unwrap();
        assert_eq!(cli.normalize, Some(0.5));
        let cli = Cli::try_parse_from(["galpot", "-p", "jaffe:3,1", "eval"]).unwrap();
        assert_eq!(cli.normalize, None);
        let pots = components(&cli.potentials, cli.normalize);
        assert_eq!(pots[0].amp(), 3.);
        assert!(Cli::try_parse_from(["galpot", "-p", "jaffe:1,1", "rotcurve", "--normalize"]).is_err());
    }

    #[test]
    fn outer_resonance_order_parses() {
        let cli =
            Cli::try_parse_from(["galpot", "-p", "loghalo:1,1,0", "resonances", "--omega-p", "0.5", "-m", "-2"])
                .unwrap();
        assert!(matches!(cli.command, Command::Resonances { m: -2, .. }));
    }

    #[test]
    fn boundary_errors_report_their_message() {
        let cli = Cli::try_parse_from(["galpot", "-p", "jaffe:1,1", "rotcurve", "--points", "1"]).unwrap();
        let err = run(cli).unwrap_err();
        assert_eq!(err.to_string(), "grid needs at least 2 points, got 1");
    }
}
