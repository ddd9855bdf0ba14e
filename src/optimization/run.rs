//! Execution helper that runs an `argmin` solver on a least-squares problem
//! and returns a crate-friendly [`FitOutcome`].
use crate::optimization::{
    adapter::SsrAdapter,
    errors::SolverResult,
    traits::{FitOptions, FitOutcome, ResidualModel},
    types::{Grad, Theta},
};
use argmin::core::{Executor, State};

/// Run an `argmin` optimization for a least-squares problem.
///
/// This is the shared runner used by both line-search variants. It wires up:
/// - the user model via [`SsrAdapter`],
/// - the chosen `Solver` (L-BFGS with Hager–Zhang/More–Thuente),
/// - initial parameter `theta0`,
/// - optional observers (behind the `obs_slog` feature),
/// - optional `max_iters`,
///   then executes the solver and converts the result into [`FitOutcome`].
///
/// # Arguments
/// - `theta0`: Initial parameter vector. It is **consumed** and set on the
///   optimizer state via `state.param(theta0)`.
/// - `opts`: Optimizer options (tolerances, verbosity, max iters).
/// - `problem`: An [`SsrAdapter`] wrapping the user's model and data.
/// - `solver`: A fully constructed solver from the builder module.
///
/// # Feature flags
/// If the `obs_slog` feature is enabled and `opts.verbose == true`, a
/// terminal slog observer is attached with `ObserverMode::Always`.
///
/// # Errors
/// - Propagates any `argmin` runtime error (observer failures, solver errors,
///   line-search failures) via the crate's `From<argmin::core::Error>`
///   conversion.
/// - Propagates any validation errors encountered when constructing
///   [`FitOutcome`].
pub fn run_lbfgs<'a, M, S>(
    theta0: Theta, opts: &FitOptions, problem: SsrAdapter<'a, M>, solver: S,
) -> SolverResult<FitOutcome>
where
    M: ResidualModel,
    S: argmin::core::Solver<
            SsrAdapter<'a, M>,
            argmin::core::IterState<Theta, Grad, (), (), (), f64>,
        > + Send
        + 'static,
{
    let mut optimizer = Executor::new(problem, solver);
    optimizer = optimizer.configure(|state| state.param(theta0));
    #[cfg(feature = "obs_slog")]
    if opts.verbose {
        let observer = argmin_observer_slog::SlogLogger::term_noblock();
        optimizer = optimizer.add_observer(observer, argmin::core::observers::ObserverMode::Always);
    }
    if let Some(max_iter) = opts.tols.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }

    let mut result = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let function_counts = result.get_func_counts().clone();
    let termination = result.get_termination_status().clone();
    FitOutcome::new(
        result.take_best_param(),
        result.get_best_cost(),
        termination,
        iterations,
        function_counts,
    )
}
