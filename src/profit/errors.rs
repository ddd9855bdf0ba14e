use crate::optimization::errors::SolverError;

/// Result alias for profit-layer operations.
pub type ProfitResult<T> = Result<T, ProfitError>;

/// Errors surfaced by business-parameter validation, profit curve
/// evaluation, and the bounded profit search.
#[derive(Debug, Clone, PartialEq)]
pub enum ProfitError {
    // ---- Business parameters ----
    /// Maximum impressions must be finite and strictly positive.
    InvalidMaxImpressions {
        value: f64,
        reason: &'static str,
    },

    /// Conversion rate must be finite and within [0, 1].
    InvalidCvr {
        value: f64,
        reason: &'static str,
    },

    /// Average revenue per user must be finite and non-negative.
    InvalidArpu {
        value: f64,
        reason: &'static str,
    },

    /// Cost per impression must be finite and non-negative.
    InvalidCostPerImpression {
        value: f64,
        reason: &'static str,
    },

    // ---- Search and evaluation ----
    /// The search bracket collapses: max_impressions must exceed the
    /// 100-impression search floor.
    DegenerateBounds {
        max_impressions: f64,
    },

    /// A profit curve needs at least two points (both endpoints).
    InvalidCurveLength {
        num_points: usize,
    },

    /// The bounded search stopped without meeting a convergence criterion.
    DidNotConverge {
        status: String,
        iterations: usize,
    },

    /// Wrapper for errors raised in the shared solver layer.
    Solver(SolverError),
}

impl std::error::Error for ProfitError {}

impl std::fmt::Display for ProfitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Business parameters ----
            ProfitError::InvalidMaxImpressions { value, reason } => {
                write!(f, "Invalid maximum impressions {value}: {reason}")
            }
            ProfitError::InvalidCvr { value, reason } => {
                write!(f, "Invalid conversion rate {value}: {reason}")
            }
            ProfitError::InvalidArpu { value, reason } => {
                write!(f, "Invalid ARPU {value}: {reason}")
            }
            ProfitError::InvalidCostPerImpression { value, reason } => {
                write!(f, "Invalid cost per impression {value}: {reason}")
            }

            // ---- Search and evaluation ----
            ProfitError::DegenerateBounds { max_impressions } => {
                write!(
                    f,
                    "Degenerate search bounds: maximum impressions {max_impressions} must exceed the search floor of 100"
                )
            }
            ProfitError::InvalidCurveLength { num_points } => {
                write!(f, "Invalid curve length {num_points}: at least 2 points are required")
            }
            ProfitError::DidNotConverge { status, iterations } => {
                write!(
                    f,
                    "Profit search did not converge after {iterations} iteration(s): {status}"
                )
            }
            ProfitError::Solver(err) => {
                write!(f, "Solver error: {err}")
            }
        }
    }
}

impl From<SolverError> for ProfitError {
    fn from(err: SolverError) -> Self {
        ProfitError::Solver(err)
    }
}
