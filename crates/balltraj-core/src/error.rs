use thiserror::Error;

/// Failure classes of a single trajectory solve.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Degenerate geometry: {0}")]
    DegenerateGeometry(String),

    #[error("No physical solution: shape coefficient {shape_coefficient} is not positive")]
    NoPhysicalSolution { shape_coefficient: f64 },
}

impl SolveError {
    /// Short, stable label for the failure class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Configuration(_) => "configuration",
            Self::DegenerateGeometry(_) => "degenerate-geometry",
            Self::NoPhysicalSolution { .. } => "no-physical-solution",
        }
    }
}

#[derive(Debug, Error)]
pub enum TrajError {
    #[error(transparent)]
    Solve(#[from] SolveError),

    #[error("Not computed: {0}")]
    NotComputed(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl TrajError {
    /// The underlying solve failure, if this error came from the solver.
    pub fn as_solve(&self) -> Option<&SolveError> {
        match self {
            Self::Solve(e) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, TrajError>;
pub type SolveResult<T> = std::result::Result<T, SolveError>;
