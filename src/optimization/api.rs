//! High-level entry point for fitting a user-provided `ResidualModel`.
//!
//! This selects an L-BFGS solver with either Hager–Zhang or More–Thuente line
//! search, wraps the model in an `SsrAdapter` (which minimizes the sum of
//! squared residuals), and delegates the run to `run_lbfgs`.
use crate::optimization::{
    adapter::SsrAdapter,
    builders::{build_solver_hager_zhang, build_solver_more_thuente},
    errors::SolverResult,
    run::run_lbfgs,
    traits::{FitData, FitOptions, FitOutcome, LineSearcher, ResidualModel},
    types::Theta,
};

/// Fit a residual model to data by least squares using L-BFGS.
///
/// # Behavior
/// - Validates the initial guess via `model.check(theta0, data)`.
/// - Wraps `(model, data)` in an `SsrAdapter` that exposes the SSR objective
///   and its analytic gradient to `argmin`.
/// - Builds an L-BFGS solver with either **Hager–Zhang** or **More–Thuente**
///   line search based on `opts.line_searcher`.
/// - Calls `run_lbfgs`, which configures the executor (initial params,
///   max iters, optional observers) and returns a `FitOutcome`.
///
/// # Parameters
/// - `model`: Your model implementing [`ResidualModel`].
/// - `theta0`: Initial parameter vector.
/// - `data`: Validated predictor/response data.
/// - `opts`: Optimizer options (tolerances, line search choice, verbosity).
///
/// # Errors
/// - Propagates any error from `model.check`.
/// - Propagates builder errors from `build_solver_*`.
/// - Propagates runtime errors from `run_lbfgs` (e.g., line search failures).
///
/// # Returns
/// A [`FitOutcome`] containing `theta_hat`, the best SSR, termination status,
/// iteration counts, and function-evaluation counts. Callers decide what a
/// `converged == false` outcome means for their domain; this layer reports it
/// without failing.
pub fn fit_least_squares<M: ResidualModel>(
    model: &M, theta0: Theta, data: &FitData, opts: &FitOptions,
) -> SolverResult<FitOutcome> {
    model.check(&theta0, data)?;
    let problem = SsrAdapter::new(model, data);
    match opts.line_searcher {
        LineSearcher::MoreThuente => {
            let solver = build_solver_more_thuente(opts)?;
            run_lbfgs(theta0, opts, problem, solver)
        }
        LineSearcher::HagerZhang => {
            let solver = build_solver_hager_zhang(opts)?;
            run_lbfgs(theta0, opts, problem, solver)
        }
    }
}
