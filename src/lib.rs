pub mod args;
pub mod error;
pub mod ffi;
pub mod initial;
pub mod logging;
pub mod precompute_rotcurve;

pub use galpot_kernels::*;

pub use crate::args::{PositionalArgs, PotentialSpec, flatten_potentials, parse_potentials};
pub use crate::error::{GalpotError, Result};
