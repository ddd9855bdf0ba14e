//! optimization::builders — L-BFGS solver construction helpers.
//!
//! Purpose
//! -------
//! Provide small, focused builders for the L-BFGS solvers used by the
//! least-squares layer. These helpers hide Argmin's generic wiring and apply
//! crate-level options (tolerances, memory size) so that higher-level code
//! can request a configured solver without touching Argmin-specific types.
//!
//! Key behaviors
//! -------------
//! - Construct L-BFGS solvers with either Hager–Zhang or More–Thuente line
//!   search based on crate-level aliases.
//! - Apply optional gradient and cost-change tolerances from [`FitOptions`]
//!   via a shared configuration helper.
//! - Leave the initial parameter vector and maximum iterations to the
//!   runner/executor layer, keeping these builders side-effect free.
//!
//! Invariants & assumptions
//! ------------------------
//! - All solvers operate on the canonical numeric types [`Theta`], [`Grad`],
//!   and [`Cost`] as defined in `optimization::types`.
//! - The L-BFGS memory (`m`) is either provided via `opts.lbfgs_mem` or
//!   defaults to [`DEFAULT_LBFGS_MEM`].
//! - Any invalid tolerance passed into Argmin's `with_tolerance_grad` /
//!   `with_tolerance_cost` is surfaced as a [`SolverError`](crate::optimization::errors::SolverError)
//!   via the crate's `From<Error>` implementation.
use argmin::solver::quasinewton::LBFGS;

use crate::optimization::{
    errors::SolverResult,
    traits::FitOptions,
    types::{
        Cost, DEFAULT_LBFGS_MEM, Grad, HagerZhangLS, LbfgsHagerZhang, LbfgsMoreThuente,
        MoreThuenteLS, Theta,
    },
};

/// Construct L-BFGS with Hager–Zhang line search.
///
/// Consults `opts.lbfgs_mem` (falling back to [`DEFAULT_LBFGS_MEM`]) and
/// wires `opts.tols.tol_grad` / `opts.tols.tol_cost` into the solver. The
/// initial parameter vector and `max_iters` are runtime concerns applied by
/// the runner, not here.
///
/// # Errors
/// Returns a converted `SolverError` if Argmin rejects a tolerance setting.
pub fn build_solver_hager_zhang(opts: &FitOptions) -> SolverResult<LbfgsHagerZhang> {
    let hager_zhang = HagerZhangLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsHagerZhang::new(hager_zhang, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Construct L-BFGS with More–Thuente line search.
///
/// Same contract as [`build_solver_hager_zhang`] with the More–Thuente
/// line-search strategy.
///
/// # Errors
/// Returns a converted `SolverError` if Argmin rejects a tolerance setting.
pub fn build_solver_more_thuente(opts: &FitOptions) -> SolverResult<LbfgsMoreThuente> {
    let more_thuente = MoreThuenteLS::new();
    let mem = opts.lbfgs_mem.unwrap_or(DEFAULT_LBFGS_MEM);
    let lbfgs = LbfgsMoreThuente::new(more_thuente, mem);
    configure_lbfgs(lbfgs, opts)
}

/// Apply optional tolerances to an L-BFGS solver.
///
/// Generic over the line-search type so both builders share one wiring path.
/// When a tolerance is `None`, the corresponding `with_tolerance_*` method is
/// not called and Argmin's defaults remain in effect.
///
/// # Errors
/// Returns a converted `SolverError` when `with_tolerance_grad` or
/// `with_tolerance_cost` rejects a value.
pub fn configure_lbfgs<L>(
    mut solver: LBFGS<L, Theta, Grad, Cost>, opts: &FitOptions,
) -> SolverResult<LBFGS<L, Theta, Grad, Cost>> {
    if let Some(g) = opts.tols.tol_grad {
        solver = solver.with_tolerance_grad(g)?;
    }
    if let Some(c) = opts.tols.tol_cost {
        solver = solver.with_tolerance_cost(c)?;
    }
    Ok(solver)
}
