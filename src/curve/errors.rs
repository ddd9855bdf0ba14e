use crate::optimization::errors::SolverError;

/// Result alias for curve-fitting operations.
pub type FitResult<T> = Result<T, FitError>;

/// Errors surfaced by observation validation and power-law fitting.
///
/// A failed fit is always reported to the caller; fitted parameters are never
/// silently defaulted.
#[derive(Debug, Clone, PartialEq)]
pub enum FitError {
    // ---- Observations ----
    /// Fewer than two observations were provided.
    InsufficientObservations {
        count: usize,
    },

    /// Fewer than two distinct impression values were provided.
    DegenerateImpressions {
        distinct: usize,
    },

    /// Impression values must be finite and strictly positive.
    InvalidImpressions {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// CTR values must be finite and within [0, 1].
    InvalidCtr {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// Percent-scale CTR values must be finite and within [0, 100].
    InvalidCtrPercent {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// Paired impression/CTR slices must have equal lengths.
    LengthMismatch {
        impressions: usize,
        ctrs: usize,
    },

    // ---- Fitting ----
    /// Initial guess coefficients must be finite.
    InvalidInitialGuess {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// A fitted or constructed curve coefficient is invalid.
    InvalidCurveParam {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// The solver stopped without meeting a convergence criterion.
    DidNotConverge {
        status: String,
        iterations: usize,
    },

    /// Wrapper for errors raised in the shared solver layer.
    Solver(SolverError),
}

impl std::error::Error for FitError {}

impl std::fmt::Display for FitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Observations ----
            FitError::InsufficientObservations { count } => {
                write!(f, "Insufficient observations: {count}, at least 2 are required")
            }
            FitError::DegenerateImpressions { distinct } => {
                write!(
                    f,
                    "Degenerate impressions: only {distinct} distinct value(s), at least 2 are required"
                )
            }
            FitError::InvalidImpressions { index, value, reason } => {
                write!(f, "Invalid impressions at index {index}: {value}: {reason}")
            }
            FitError::InvalidCtr { index, value, reason } => {
                write!(f, "Invalid CTR at index {index}: {value}: {reason}")
            }
            FitError::InvalidCtrPercent { index, value, reason } => {
                write!(f, "Invalid percent CTR at index {index}: {value}: {reason}")
            }
            FitError::LengthMismatch { impressions, ctrs } => {
                write!(f, "Length mismatch: {impressions} impression values vs {ctrs} CTR values")
            }

            // ---- Fitting ----
            FitError::InvalidInitialGuess { index, value, reason } => {
                write!(f, "Invalid initial guess at index {index}: {value}: {reason}")
            }
            FitError::InvalidCurveParam { name, value, reason } => {
                write!(f, "Invalid curve parameter {name}: {value}: {reason}")
            }
            FitError::DidNotConverge { status, iterations } => {
                write!(
                    f,
                    "Curve fit did not converge after {iterations} iteration(s): {status}"
                )
            }
            FitError::Solver(err) => {
                write!(f, "Solver error: {err}")
            }
        }
    }
}

impl From<SolverError> for FitError {
    fn from(err: SolverError) -> Self {
        FitError::Solver(err)
    }
}
