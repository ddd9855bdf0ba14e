//! Bounded search for the profit-maximizing impression volume.
//!
//! Purpose
//! -------
//! Find the impression volume `x*` that maximizes `profit(x)` under the
//! fitted CTR curve and the campaign economics, by minimizing `-profit(x)`
//! over the bracket `[100, max_impressions + 1]` with Brent's bounded
//! method.
//!
//! Invariants & assumptions
//! ------------------------
//! - For fitted coefficients with `a > 0` and `-1 < b < 0` the profit
//!   function is unimodal on `x > 0`, so Brent converges to the global
//!   optimum. For other coefficient regimes the search returns the best
//!   local optimum it brackets; this is documented rather than detected.
//! - The reported impression count is floored to a whole number, but the
//!   profit, CTR, and ROAS metrics are evaluated at the continuous optimum.
//!   Ad platforms buy integer impressions while the model is continuous;
//!   reporting the metrics at the continuous argmin keeps them consistent
//!   with the profit value the search actually found.
use crate::{
    curve::CurveParams,
    profit::{
        errors::{ProfitError, ProfitResult},
        function::breakdown,
        params::BusinessParams,
    },
    optimization::{ScalarOptions, minimize_bounded},
};

/// Lower edge of the search bracket and the curve grid.
///
/// Volumes below 100 impressions are treated as noise rather than a
/// campaign; the original business rule and the bracket both start here.
pub const MIN_IMPRESSIONS: f64 = 100.0;

/// The profit-maximizing impression volume and its economics.
///
/// - `impressions`: continuous optimum floored to a whole impression count
///   and clamped to the campaign budget.
/// - `profit` / `ctr` / `roas`: evaluated at the continuous optimum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Optimum {
    pub impressions: u64,
    pub profit: f64,
    pub ctr: f64,
    pub roas: f64,
}

/// Find the profit-maximizing impression volume with default search options.
///
/// # Errors
/// See [`optimize_with_options`].
pub fn optimize(curve: &CurveParams, business: &BusinessParams) -> ProfitResult<Optimum> {
    optimize_with_options(curve, business, &ScalarOptions::default())
}

/// Find the profit-maximizing impression volume.
///
/// # Behavior
/// - Rejects budgets at or below the search floor up front.
/// - Minimizes `-profit(x)` over `[100, max_impressions + 1]` via the shared
///   bounded scalar search.
/// - Requires the search to report convergence; hitting the iteration cap is
///   surfaced as [`ProfitError::DidNotConverge`].
/// - Assembles the [`Optimum`] from the continuous argmin: impressions
///   floored and clamped to `max_impressions`, negated best objective as
///   profit, and CTR/ROAS from the profit breakdown at the continuous
///   volume.
///
/// # Errors
/// - [`ProfitError::DegenerateBounds`] if `max_impressions <= 100`.
/// - [`ProfitError::DidNotConverge`] if no convergence criterion fired.
/// - [`ProfitError::Solver`] for any error raised in the solver layer.
pub fn optimize_with_options(
    curve: &CurveParams, business: &BusinessParams, opts: &ScalarOptions,
) -> ProfitResult<Optimum> {
    if business.max_impressions <= MIN_IMPRESSIONS {
        return Err(ProfitError::DegenerateBounds { max_impressions: business.max_impressions });
    }

    let objective = |x: f64| Ok(-breakdown(x, curve, business).profit);
    let outcome =
        minimize_bounded(objective, MIN_IMPRESSIONS, business.max_impressions + 1.0, opts)?;
    if !outcome.converged {
        return Err(ProfitError::DidNotConverge {
            status: outcome.status,
            iterations: outcome.iterations,
        });
    }

    let best = breakdown(outcome.x, curve, business);
    // The bracket extends to max_impressions + 1, so a boundary optimum can
    // floor to a volume above the budget. Clamp the report to the budget.
    Ok(Optimum {
        impressions: outcome.x.floor().min(business.max_impressions) as u64,
        profit: -outcome.value,
        ctr: best.ctr,
        roas: best.roas,
    })
}
