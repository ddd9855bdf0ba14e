//! Public API surface for least-squares minimization.
//!
//! - [`ResidualModel`]: trait users implement for their curve model.
//! - [`FitData`]: validated predictor/response vectors.
//! - [`FitOptions`] and [`Tolerances`]: configuration for the optimizer.
//! - [`LineSearcher`]: choice of line search used by L-BFGS.
//! - [`FitOutcome`]: normalized result returned by the high-level
//!   `fit_least_squares` API.
//!
//! Convention: the solver minimizes the sum of squared residuals
//! `SSR(θ) = Σᵢ (yᵢ - f(xᵢ, θ))²` directly; no sign flips happen anywhere in
//! the pipeline. Models supply the prediction `f(x, θ)` and the per-point
//! partials `∂f/∂θ`, and the adapter assembles the SSR gradient from them.
use crate::optimization::{
    errors::{SolverError, SolverResult},
    types::{Cost, FnEvalMap, Grad, Theta},
    validation::{validate_theta_hat, validate_value, verify_tol_cost, verify_tol_grad},
};
use argmin::core::{TerminationReason, TerminationStatus};
use ndarray::Array1;
use std::str::FromStr;

/// User-implemented residual-model interface.
///
/// The solver minimizes `SSR(θ) = Σᵢ (yᵢ - predict(xᵢ, θ))²`.
///
/// Required:
/// - `predict(x, &Theta) -> f64`: evaluate the model function `f(x, θ)`.
/// - `partials(x, &Theta) -> Grad`: the per-point partial derivatives
///   `∂f(x, θ)/∂θ`, one entry per coefficient. The adapter combines these
///   into the SSR gradient, so models never see residuals or sums.
/// - `check(&Theta, &FitData) -> SolverResult<()>`: validation hook to reject
///   obviously invalid `θ`/`data` pairs. Called once before optimization.
pub trait ResidualModel {
    fn predict(&self, x: f64, theta: &Theta) -> f64;
    fn partials(&self, x: f64, theta: &Theta) -> Grad;
    fn check(&self, theta: &Theta, data: &FitData) -> SolverResult<()>;
}

/// Validated predictor/response data for a least-squares fit.
///
/// Invariants (enforced by [`FitData::new`]):
/// - `xs` and `ys` have equal, non-zero length.
///
/// Finiteness and domain constraints on the values themselves are the
/// responsibility of the calling layer, which knows what its model admits.
#[derive(Debug, Clone, PartialEq)]
pub struct FitData {
    xs: Array1<f64>,
    ys: Array1<f64>,
}

impl FitData {
    /// Construct validated fit data.
    ///
    /// # Errors
    /// - [`SolverError::DataLengthMismatch`] if the vectors differ in length.
    /// - [`SolverError::EmptyData`] if the vectors are empty.
    pub fn new(xs: Array1<f64>, ys: Array1<f64>) -> SolverResult<Self> {
        if xs.len() != ys.len() {
            return Err(SolverError::DataLengthMismatch { xs: xs.len(), ys: ys.len() });
        }
        if xs.is_empty() {
            return Err(SolverError::EmptyData);
        }
        Ok(Self { xs, ys })
    }

    /// Predictor values.
    pub fn xs(&self) -> &Array1<f64> {
        &self.xs
    }

    /// Response values.
    pub fn ys(&self) -> &Array1<f64> {
        &self.ys
    }

    /// Number of data points.
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// Whether the data set is empty (never true for a constructed value).
    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }
}

/// Choice of line search used inside the L-BFGS solver.
///
/// Variants:
/// - `MoreThuente`: More–Thuente line search.
/// - `HagerZhang`: Hager–Zhang line search.
///
/// Parsing:
/// This enum implements `FromStr` and accepts case-insensitive names
/// (`"MoreThuente"`, `"HagerZhang"`). Unknown names return
/// `SolverError::InvalidLineSearch`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineSearcher {
    MoreThuente,
    HagerZhang,
}

impl FromStr for LineSearcher {
    type Err = SolverError;

    /// Parse a line-search choice from a string (case-insensitive).
    ///
    /// Accepts:
    /// - `"MoreThuente"`
    /// - `"HagerZhang"`
    /// - Any case variant (e.g., `"morethuente"`, `"HAGERZHANG"`).
    ///
    /// Any other value returns `SolverError::InvalidLineSearch` with a helpful
    /// message.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "morethuente" => Ok(LineSearcher::MoreThuente),
            "hagerzhang" => Ok(LineSearcher::HagerZhang),
            _ => Err(SolverError::InvalidLineSearch {
                name: s.to_string(),
                reason: "Valid options are case insensitive 'MoreThuente' or 'HagerZhang'.",
            }),
        }
    }
}

/// Optimizer-level configuration.
///
/// Fields:
/// - `tols: Tolerances` — numerical tolerances and iteration limits.
/// - `line_searcher: LineSearcher` — line-search algorithm used by L-BFGS.
/// - `verbose: bool` — if `true`, attaches an observer (behind the `obs_slog`
///   feature) and prints progress.
/// - `lbfgs_mem: Option<usize>` — L-BFGS history size override.
///
/// Constructor:
/// - `new(tols, line_searcher, verbose, lbfgs_mem) -> SolverResult<Self>` —
///   builds options; validation of numeric values is handled in
///   `Tolerances::new`.
///
/// Default:
/// - `tols`: `tol_grad = 1e-8`, `tol_cost = None`, `max_iter = 300`
/// - `line_searcher`: `MoreThuente`
/// - `verbose`: `false`
/// - `lbfgs_mem`: `None` (uses default of 7)
#[derive(Debug, Clone, PartialEq)]
pub struct FitOptions {
    pub tols: Tolerances,
    pub line_searcher: LineSearcher,
    pub verbose: bool,
    pub lbfgs_mem: Option<usize>,
}

impl FitOptions {
    /// Create a new set of optimizer options.
    ///
    /// This constructor does not mutate values; validation of numeric fields is
    /// performed inside [`Tolerances::new`].
    pub fn new(
        tols: Tolerances, line_searcher: LineSearcher, verbose: bool, lbfgs_mem: Option<usize>,
    ) -> SolverResult<Self> {
        if let Some(m) = lbfgs_mem {
            if m == 0 {
                return Err(SolverError::InvalidLbfgsMem {
                    mem: m,
                    reason: "L-BFGS memory must be greater than zero.",
                });
            }
        }
        Ok(Self { tols, line_searcher, verbose, lbfgs_mem })
    }
}

impl Default for FitOptions {
    fn default() -> Self {
        Self {
            tols: Tolerances { tol_grad: Some(1e-8), tol_cost: None, max_iter: Some(300) },
            line_searcher: LineSearcher::MoreThuente,
            verbose: false,
            lbfgs_mem: None,
        }
    }
}

/// Numerical tolerances and iteration limits used by the optimizer.
///
/// - `tol_grad`: terminate when the gradient norm falls below this threshold.
/// - `tol_cost`: terminate when the change in cost falls below this threshold.
/// - `max_iter`: hard cap on the number of iterations.
///
/// Any field can be `None` but **at least one** of the three must be provided
/// (see [`Tolerances::new`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tolerances {
    pub tol_grad: Option<f64>,
    pub tol_cost: Option<f64>,
    pub max_iter: Option<usize>,
}

impl Tolerances {
    /// Construct validated tolerances.
    ///
    /// # Rules
    /// - At least one of `tol_grad`, `tol_cost`, or `max_iter` must be `Some`.
    /// - If provided, tolerances must be **finite and strictly positive**.
    /// - If provided, `max_iter` must be `> 0`.
    ///
    /// # Errors
    /// - [`SolverError::NoTolerancesProvided`] if all three are `None`.
    /// - [`SolverError::InvalidTolGrad`] / [`SolverError::InvalidTolCost`] for
    ///   non-finite or non-positive tolerances.
    /// - `SolverError::InvalidMaxIter` if `max_iter == 0`.
    pub fn new(
        tol_grad: Option<f64>, tol_cost: Option<f64>, max_iter: Option<usize>,
    ) -> SolverResult<Self> {
        if tol_grad.is_none() && tol_cost.is_none() && max_iter.is_none() {
            return Err(SolverError::NoTolerancesProvided);
        }
        verify_tol_cost(tol_cost)?;
        verify_tol_grad(tol_grad)?;
        if let Some(max_iter) = max_iter {
            if max_iter == 0 {
                return Err(SolverError::InvalidMaxIter {
                    max_iter,
                    reason: "Maximum iterations must be greater than zero.",
                });
            }
        }
        Ok(Self { tol_grad, tol_cost, max_iter })
    }
}

/// Canonical result returned by `fit_least_squares`.
///
/// - `theta_hat`: best parameter vector found.
/// - `ssr`: best sum of squared residuals.
/// - `converged`: `true` only if the solver stopped because a convergence
///   criterion fired (`SolverConverged` or `TargetCostReached`). Hitting the
///   iteration cap does **not** count as convergence.
/// - `status`: human-readable termination status string.
/// - `iterations`: number of optimizer iterations performed.
/// - `fn_evals`: function-evaluation counters reported by `argmin`
///   (keys follow argmin's counters, e.g., cost_count, gradient_count).
#[derive(Debug, Clone, PartialEq)]
pub struct FitOutcome {
    pub theta_hat: Theta,
    pub ssr: Cost,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
    pub fn_evals: FnEvalMap,
}

impl FitOutcome {
    /// Build a validated [`FitOutcome`] from raw solver state.
    ///
    /// Performs:
    /// - `theta_hat` check via `validate_theta_hat` (present and all finite).
    /// - `ssr` check via `validate_value` (finite).
    /// - Maps `TerminationStatus` into `(converged, status)`. Only
    ///   `SolverConverged` and `TargetCostReached` count as convergence;
    ///   `MaxItersReached` and `NotTerminated` do not.
    ///
    /// # Errors
    /// - Propagates any validation errors for `theta_hat` or `ssr`.
    pub fn new(
        theta_hat_opt: Option<Theta>, ssr: Cost, termination: TerminationStatus, iterations: u64,
        fn_evals: FnEvalMap,
    ) -> SolverResult<Self> {
        let theta_hat = validate_theta_hat(theta_hat_opt)?;
        validate_value(ssr)?;
        let status = match &termination {
            TerminationStatus::NotTerminated => "Not terminated".to_string(),
            TerminationStatus::Terminated(reason) => format!("{reason:?}"),
        };
        let converged = matches!(
            termination,
            TerminationStatus::Terminated(
                TerminationReason::SolverConverged | TerminationReason::TargetCostReached
            )
        );
        let iterations = iterations as usize;
        Ok(Self { theta_hat, ssr, converged, status, iterations, fn_evals })
    }
}
