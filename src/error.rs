use thiserror::Error;

pub type Result<T> = std::result::Result<T, GalpotError>;

#[derive(Debug, Error)]
pub enum GalpotError {
    #[error("{potential} takes {expected} arguments, got {got}")]
    ArgCount {
        potential: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("unknown potential type code {0}")]
    UnknownPotentialType(i32),

    #[error("{0} argument(s) left over after parsing all potentials")]
    TrailingArgs(usize),

    #[error("invalid potential spec {spec:?}: {reason}")]
    InvalidSpec { spec: String, reason: String },

    #[error("grid needs at least 2 points, got {0}")]
    InvalidGrid(usize),

    #[error("invalid radial range [{min}, {max}]")]
    InvalidRange { min: f64, max: f64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
