//! Bounded one-dimensional minimization via Brent's method.
//!
//! Purpose
//! -------
//! Minimize a scalar objective `f(x)` over a closed bracket `[lower, upper]`
//! without derivatives. This is the search primitive behind the profit
//! optimizer; it shares the error taxonomy and executor conventions of the
//! least-squares layer so callers see one solver surface.
//!
//! Key behaviors
//! -------------
//! - Validates the bracket (finite, `lower < upper`) and options up front.
//! - Wraps the closure in a private `argmin` problem and runs `BrentOpt`
//!   through the same `Executor` machinery as the L-BFGS runner.
//! - Objective failures inside the closure propagate as `SolverError`; a
//!   non-finite objective value is rejected rather than returned to the
//!   solver.
//!
//! Invariants & assumptions
//! ------------------------
//! - Brent's bounded method converges to the global minimum for unimodal
//!   objectives; for multimodal objectives it returns the best local minimum
//!   it brackets. Callers that need global guarantees must establish
//!   unimodality themselves.
use crate::optimization::{
    errors::{SolverError, SolverResult},
    types::DEFAULT_SCALAR_MAX_ITER,
    validation::validate_value,
};
use argmin::core::{CostFunction, Error, Executor, State, TerminationReason, TerminationStatus};
use argmin::solver::brent::BrentOpt;

/// Configuration for the bounded scalar search.
///
/// - `max_iter`: hard cap on Brent iterations (default 100).
/// - `tol`: absolute positional tolerance `t` passed to Brent; `None` keeps
///   the backend default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalarOptions {
    pub max_iter: Option<usize>,
    pub tol: Option<f64>,
}

impl ScalarOptions {
    /// Construct validated scalar-search options.
    ///
    /// # Errors
    /// - [`SolverError::InvalidMaxIter`] if `max_iter == 0`.
    /// - [`SolverError::InvalidScalarTol`] if `tol` is non-finite or ≤ 0.0.
    pub fn new(max_iter: Option<usize>, tol: Option<f64>) -> SolverResult<Self> {
        if let Some(max_iter) = max_iter {
            if max_iter == 0 {
                return Err(SolverError::InvalidMaxIter {
                    max_iter,
                    reason: "Maximum iterations must be greater than zero.",
                });
            }
        }
        if let Some(tol) = tol {
            if !tol.is_finite() {
                return Err(SolverError::InvalidScalarTol {
                    tol,
                    reason: "Tolerance must be finite.",
                });
            }
            if tol <= 0.0 {
                return Err(SolverError::InvalidScalarTol {
                    tol,
                    reason: "Tolerance must be positive.",
                });
            }
        }
        Ok(Self { max_iter, tol })
    }
}

impl Default for ScalarOptions {
    fn default() -> Self {
        Self { max_iter: Some(DEFAULT_SCALAR_MAX_ITER), tol: None }
    }
}

/// Result of a bounded scalar search.
///
/// - `x`: argmin location inside the bracket.
/// - `value`: objective value at `x`.
/// - `converged`: `true` only when Brent stopped on its convergence
///   criterion; hitting the iteration cap reports `false`.
/// - `status`: human-readable termination status string.
/// - `iterations`: Brent iterations performed.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarOutcome {
    pub x: f64,
    pub value: f64,
    pub converged: bool,
    pub status: String,
    pub iterations: usize,
}

impl ScalarOutcome {
    /// Build a validated [`ScalarOutcome`] from raw solver state.
    ///
    /// # Errors
    /// - [`SolverError::MissingThetaHat`] if the solver produced no best
    ///   parameter.
    /// - [`SolverError::InvalidThetaHat`] / [`SolverError::InvalidBestValue`]
    ///   for non-finite results.
    pub fn new(
        x_opt: Option<f64>, value: f64, termination: TerminationStatus, iterations: u64,
    ) -> SolverResult<Self> {
        let x = match x_opt {
            Some(x) if x.is_finite() => x,
            Some(x) => {
                return Err(SolverError::InvalidThetaHat {
                    index: 0,
                    value: x,
                    reason: "Scalar optimum must be finite.",
                });
            }
            None => return Err(SolverError::MissingThetaHat),
        };
        validate_value(value)?;
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
        Ok(Self { x, value, converged, status, iterations: iterations as usize })
    }
}

/// Private argmin problem over a fallible scalar closure.
struct ScalarProblem<F: Fn(f64) -> SolverResult<f64>> {
    f: F,
}

impl<F: Fn(f64) -> SolverResult<f64>> CostFunction for ScalarProblem<F> {
    type Param = f64;
    type Output = f64;

    fn cost(&self, x: &Self::Param) -> Result<Self::Output, Error> {
        let value = (self.f)(*x)?;
        if !value.is_finite() {
            return Err((SolverError::NonFiniteCost { value }).into());
        }
        Ok(value)
    }
}

/// Minimize `f(x)` over `[lower, upper]` using Brent's bounded method.
///
/// # Parameters
/// - `f`: Objective closure. Returning an `Err` aborts the search; returning
///   a non-finite value is converted into [`SolverError::NonFiniteCost`].
/// - `lower`, `upper`: Search bracket; both finite with `lower < upper`.
/// - `opts`: Iteration cap and optional positional tolerance.
///
/// # Errors
/// - [`SolverError::InvalidBracket`] for a malformed bracket.
/// - Objective errors and any `argmin` runtime error, converted via the
///   crate's `From<argmin::core::Error>`.
/// - Validation errors when assembling the [`ScalarOutcome`].
pub fn minimize_bounded<F>(
    f: F, lower: f64, upper: f64, opts: &ScalarOptions,
) -> SolverResult<ScalarOutcome>
where
    F: Fn(f64) -> SolverResult<f64>,
{
    if !lower.is_finite() || !upper.is_finite() {
        return Err(SolverError::InvalidBracket {
            lower,
            upper,
            reason: "Bracket endpoints must be finite.",
        });
    }
    if lower >= upper {
        return Err(SolverError::InvalidBracket {
            lower,
            upper,
            reason: "Lower bound must be strictly below the upper bound.",
        });
    }

    let mut solver = BrentOpt::new(lower, upper);
    if let Some(t) = opts.tol {
        solver = solver.set_tolerance(f64::EPSILON.sqrt(), t);
    }

    let problem = ScalarProblem { f };
    let mut optimizer = Executor::new(problem, solver);
    if let Some(max_iter) = opts.max_iter {
        optimizer = optimizer.configure(|state| state.max_iters(max_iter as u64));
    }

    let mut result = optimizer.run()?.state().clone();
    let iterations = result.get_iter();
    let termination = result.get_termination_status().clone();
    ScalarOutcome::new(
        result.take_best_param(),
        result.get_best_cost(),
        termination,
        iterations,
    )
}

#[cfg(test)]
mod tests {
    /*
    Scope
    -----
    Unit tests for the bounded scalar search: convergence on a smooth convex
    objective, bracket validation, options validation, and objective error
    propagation.
    */
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn finds_the_minimum_of_a_parabola() {
        // Purpose: Brent locates an interior minimum of a convex objective.
        // Given: f(x) = (x - 2)² over [0, 5].
        // Expect: x ≈ 2, value ≈ 0, converged.
        // Arrange
        let f = |x: f64| Ok((x - 2.0) * (x - 2.0));

        // Act
        let out = minimize_bounded(f, 0.0, 5.0, &ScalarOptions::default()).unwrap();

        // Assert
        assert!(out.converged, "status: {}", out.status);
        assert_abs_diff_eq!(out.x, 2.0, epsilon = 1e-6);
        assert_abs_diff_eq!(out.value, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn honors_an_explicit_tolerance() {
        // Purpose: a caller-supplied tolerance still converges correctly.
        // Given: the same parabola with tol = 1e-4.
        // Expect: x within 1e-3 of the true minimum.
        let opts = ScalarOptions::new(Some(200), Some(1e-4)).unwrap();

        let out = minimize_bounded(|x| Ok((x - 2.0) * (x - 2.0)), 0.0, 5.0, &opts).unwrap();

        assert_abs_diff_eq!(out.x, 2.0, epsilon = 1e-3);
    }

    #[test]
    fn rejects_malformed_brackets() {
        // Purpose: reversed, collapsed, and non-finite brackets never reach
        //          the solver.
        // Given: [5, 0], [1, 1], and [-inf, 1].
        // Expect: InvalidBracket for each.
        let f = |x: f64| Ok(x * x);
        let opts = ScalarOptions::default();

        assert!(matches!(
            minimize_bounded(f, 5.0, 0.0, &opts),
            Err(SolverError::InvalidBracket { .. })
        ));
        assert!(matches!(
            minimize_bounded(f, 1.0, 1.0, &opts),
            Err(SolverError::InvalidBracket { .. })
        ));
        assert!(matches!(
            minimize_bounded(f, f64::NEG_INFINITY, 1.0, &opts),
            Err(SolverError::InvalidBracket { .. })
        ));
    }

    #[test]
    fn objective_errors_abort_the_search() {
        // Purpose: a failing objective surfaces to the caller instead of
        //          being swallowed by the backend.
        // Given: an objective that always errors.
        // Expect: Err from minimize_bounded.
        let f = |_x: f64| -> SolverResult<f64> {
            Err(SolverError::NonFiniteCost { value: f64::NAN })
        };

        let result = minimize_bounded(f, 0.0, 1.0, &ScalarOptions::default());

        assert!(result.is_err());
    }

    #[test]
    fn options_reject_zero_iterations_and_bad_tolerance() {
        // Purpose: invalid configuration fails fast with structured errors.
        // Given: max_iter = 0, then tol = -1.
        // Expect: InvalidMaxIter, then InvalidScalarTol.
        assert!(matches!(
            ScalarOptions::new(Some(0), None),
            Err(SolverError::InvalidMaxIter { max_iter: 0, .. })
        ));
        assert!(matches!(
            ScalarOptions::new(Some(10), Some(-1.0)),
            Err(SolverError::InvalidScalarTol { .. })
        ));
    }
}
