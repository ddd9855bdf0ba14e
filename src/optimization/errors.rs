use argmin::core::{ArgminError, Error};

/// Crate-wide result alias for solver-layer operations.
pub type SolverResult<T> = Result<T, SolverError>;

#[derive(Debug, Clone, PartialEq)]
pub enum SolverError {
    // ---- Objective ----
    /// Objective returned a non-finite value.
    NonFiniteCost {
        value: f64,
    },

    // ---- Gradient ----
    /// Gradient dimensions do not match parameter dimensions.
    GradientDimMismatch {
        expected: usize,
        found: usize,
    },

    /// Gradient elements need to be finite.
    InvalidGradient {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    // ---- FitOptions ----
    /// Gradient tolerance needs to be positive and finite.
    InvalidTolGrad {
        tol: f64,
        reason: &'static str,
    },
    /// Cost change tolerance needs to be positive and finite.
    InvalidTolCost {
        tol: f64,
        reason: &'static str,
    },
    /// Maximum iterations needs to be positive.
    InvalidMaxIter {
        max_iter: usize,
        reason: &'static str,
    },
    /// At least one tolerance must be provided.
    NoTolerancesProvided,

    /// Invalid line searcher name.
    InvalidLineSearch {
        name: String,
        reason: &'static str,
    },

    /// lbfgs_mem needs to be at least 1.
    InvalidLbfgsMem {
        mem: usize,
        reason: &'static str,
    },

    // ---- Bounded scalar search ----
    /// Search bracket must be finite with lower < upper.
    InvalidBracket {
        lower: f64,
        upper: f64,
        reason: &'static str,
    },

    /// Scalar search tolerance needs to be positive and finite.
    InvalidScalarTol {
        tol: f64,
        reason: &'static str,
    },

    // ---- Solver outcome ----
    /// Estimated parameters must be finite.
    InvalidThetaHat {
        index: usize,
        value: f64,
        reason: &'static str,
    },

    /// Best parameter is missing from the solver state.
    MissingThetaHat,

    /// Best objective value must be finite.
    InvalidBestValue {
        value: f64,
    },

    // ---- Model data ----
    /// Predictor and response vectors must have matching lengths.
    DataLengthMismatch {
        xs: usize,
        ys: usize,
    },

    /// Fit data must contain at least one point.
    EmptyData,

    // ---- Argmin ----
    /// Wrapper for argmin::InvalidParameter
    InvalidParameter {
        text: String,
    },
    /// Wrapper for argmin::NotImplemented
    NotImplemented {
        text: String,
    },
    /// Wrapper for argmin::NotInitialized
    NotInitialized {
        text: String,
    },
    /// Wrapper for argmin::ConditionViolated
    ConditionViolated {
        text: String,
    },
    /// Wrapper for argmin::CheckPointNotFound
    CheckPointNotFound {
        text: String,
    },
    /// Wrapper for argmin::PotentialBug
    PotentialBug {
        text: String,
    },
    /// Wrapper for argmin::ImpossibleError
    ImpossibleError {
        text: String,
    },
    /// Wrapper for other argmin::Error types
    BackendError {
        text: String,
    },

    // ---- Fallback ----
    UnknownError,
}

impl std::error::Error for SolverError {}

impl std::fmt::Display for SolverError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Objective ----
            SolverError::NonFiniteCost { value } => {
                write!(f, "Non-finite cost value: {value}")
            }

            // ---- Gradient ----
            SolverError::GradientDimMismatch { expected, found } => {
                write!(f, "Gradient dimension mismatch: expected {expected}, found {found}")
            }
            SolverError::InvalidGradient { index, value, reason } => {
                write!(f, "Invalid gradient at index {index}: {value}: {reason}")
            }

            // ---- FitOptions ----
            SolverError::InvalidTolGrad { tol, reason } => {
                write!(f, "Invalid gradient tolerance {tol}: {reason}")
            }
            SolverError::InvalidTolCost { tol, reason } => {
                write!(f, "Invalid cost function change tolerance {tol}: {reason}")
            }
            SolverError::InvalidMaxIter { max_iter, reason } => {
                write!(f, "Invalid maximum iterations {max_iter}: {reason}")
            }
            SolverError::NoTolerancesProvided => {
                write!(f, "No tolerances provided")
            }
            SolverError::InvalidLineSearch { name, reason } => {
                write!(f, "Invalid line searcher '{name}': {reason}")
            }
            SolverError::InvalidLbfgsMem { mem, reason } => {
                write!(f, "Invalid L-BFGS memory {mem}: {reason}")
            }

            // ---- Bounded scalar search ----
            SolverError::InvalidBracket { lower, upper, reason } => {
                write!(f, "Invalid search bracket [{lower}, {upper}]: {reason}")
            }
            SolverError::InvalidScalarTol { tol, reason } => {
                write!(f, "Invalid scalar search tolerance {tol}: {reason}")
            }

            // ---- Solver outcome ----
            SolverError::InvalidThetaHat { index, value, reason } => {
                write!(f, "Invalid estimated parameter at index {index}: {value}: {reason}")
            }
            SolverError::MissingThetaHat => {
                write!(f, "Missing estimated parameters from solver state")
            }
            SolverError::InvalidBestValue { value } => {
                write!(f, "Invalid best objective value: {value}, must be finite")
            }

            // ---- Model data ----
            SolverError::DataLengthMismatch { xs, ys } => {
                write!(f, "Fit data length mismatch: {xs} predictors vs {ys} responses")
            }
            SolverError::EmptyData => {
                write!(f, "Fit data must contain at least one point")
            }

            // ---- Argmin ----
            SolverError::InvalidParameter { text } => {
                write!(f, "Invalid parameter: {text}")
            }
            SolverError::NotImplemented { text } => {
                write!(f, "Not implemented: {text}")
            }
            SolverError::NotInitialized { text } => {
                write!(f, "Not initialized: {text}")
            }
            SolverError::ConditionViolated { text } => {
                write!(f, "Condition violated: {text}")
            }
            SolverError::CheckPointNotFound { text } => {
                write!(f, "Checkpoint not found: {text}")
            }
            SolverError::PotentialBug { text } => {
                write!(f, "Potential bug: {text}")
            }
            SolverError::ImpossibleError { text } => {
                write!(f, "Impossible error: {text}")
            }
            SolverError::BackendError { text } => {
                write!(f, "Backend error: {text}")
            }

            // ---- Fallback ----
            SolverError::UnknownError => {
                write!(f, "Unknown error")
            }
        }
    }
}

impl From<Error> for SolverError {
    fn from(original_err: Error) -> Self {
        match original_err.downcast() {
            Ok(solver_err) => match solver_err {
                ArgminError::InvalidParameter { text } => SolverError::InvalidParameter { text },
                ArgminError::NotImplemented { text } => SolverError::NotImplemented { text },
                ArgminError::NotInitialized { text } => SolverError::NotInitialized { text },
                ArgminError::ConditionViolated { text } => SolverError::ConditionViolated { text },
                ArgminError::CheckpointNotFound { text } => SolverError::CheckPointNotFound { text },
                ArgminError::PotentialBug { text } => SolverError::PotentialBug { text },
                ArgminError::ImpossibleError { text } => SolverError::ImpossibleError { text },
                _ => SolverError::UnknownError,
            },
            Err(err) => SolverError::BackendError { text: err.to_string() },
        }
    }
}
