//! optimization — argmin-powered solver layer.
//!
//! Purpose
//! -------
//! Provide the crate's two optimization primitives behind a uniform,
//! Argmin-backed surface:
//!
//! - **Least squares**: callers implement [`ResidualModel`] and invoke
//!   [`fit_least_squares`] to run L-BFGS with a configurable line search and
//!   tolerances on the sum-of-squared-residuals objective.
//! - **Bounded scalar search**: [`minimize_bounded`] runs Brent's
//!   derivative-free method over a closed bracket.
//!
//! Key behaviors
//! -------------
//! - Convert user-supplied residual models into Argmin-compatible cost and
//!   gradient functions via [`adapter::SsrAdapter`].
//! - Expose [`fit_least_squares`], which:
//!   - validates the initial guess with [`ResidualModel::check`],
//!   - selects an L-BFGS solver via [`builders`] based on
//!     [`traits::LineSearcher`],
//!   - executes the solver via [`run::run_lbfgs`], and
//!   - normalizes results into a [`FitOutcome`].
//! - Centralize optimizer configuration ([`Tolerances`], [`FitOptions`],
//!   [`ScalarOptions`]) and validation logic ([`validation`]) so downstream
//!   code can assume sane, finite inputs.
//!
//! Invariants & assumptions
//! ------------------------
//! - The least-squares objective is minimized directly; models implement the
//!   prediction `f(x, θ)` and its partials, never the SSR or its gradient.
//! - [`ResidualModel::predict`] and [`ResidualModel::partials`] are
//!   infallible; finiteness is enforced by the adapter after aggregation.
//! - Vectors use the canonical aliases [`Theta`] and [`Grad`]
//!   (`Array1<f64>`); all are assumed finite whenever optimization proceeds.
//! - Errors bubble up as [`SolverResult<T>`] / [`SolverError`]; this module
//!   and its children never intentionally panic or use `unsafe`.
//!
//! Downstream usage
//! ----------------
//! - The curve layer implements [`ResidualModel`] for its power-law model and
//!   calls [`fit_least_squares`].
//! - The profit layer calls [`minimize_bounded`] on the negated profit
//!   function.
//! - Neither layer touches `argmin` types directly; backend errors are
//!   normalized into [`SolverError`] at this boundary.

pub mod adapter;
pub mod api;
pub mod builders;
pub mod errors;
pub mod run;
pub mod scalar;
pub mod traits;
pub mod types;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::api::fit_least_squares;
pub use self::errors::{SolverError, SolverResult};
pub use self::scalar::{ScalarOptions, ScalarOutcome, minimize_bounded};
pub use self::traits::{
    FitData, FitOptions, FitOutcome, LineSearcher, ResidualModel, Tolerances,
};
pub use self::types::{Cost, DEFAULT_LBFGS_MEM, FnEvalMap, Grad, Theta};
