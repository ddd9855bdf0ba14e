//! simulation — the complete fit → optimize → curve pipeline.
//!
//! Purpose
//! -------
//! Run the full campaign analysis in one call: fit the CTR curve to the
//! observed data, search for the profit-maximizing impression volume, and
//! evaluate the visualization curve. This mirrors how the pieces are meant
//! to compose; callers that need finer control use the `curve` and `profit`
//! modules directly.
//!
//! Key behaviors
//! -------------
//! - Every run recomputes from scratch; there is no cached state, so the
//!   same inputs always produce the same report.
//! - Errors from either stage are unified into [`SimError`] via `From`, so
//!   one `?` works across the whole pipeline.
use crate::{
    curve::{self, CtrObservations, CurveParams, FitError},
    optimization::{FitOptions, ScalarOptions},
    profit::{
        BusinessParams, DEFAULT_CURVE_POINTS, Optimum, ProfitError, ProfitPoint, evaluate_curve,
        optimize_with_options,
    },
};

/// Result alias for pipeline operations.
pub type SimResult<T> = Result<T, SimError>;

/// Unified error for the two pipeline stages.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Curve-fitting stage failed.
    Fit(FitError),
    /// Profit optimization or curve evaluation failed.
    Profit(ProfitError),
}

impl std::error::Error for SimError {}

impl std::fmt::Display for SimError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SimError::Fit(err) => write!(f, "Curve fit failed: {err}"),
            SimError::Profit(err) => write!(f, "Profit optimization failed: {err}"),
        }
    }
}

impl From<FitError> for SimError {
    fn from(err: FitError) -> Self {
        SimError::Fit(err)
    }
}

impl From<ProfitError> for SimError {
    fn from(err: ProfitError) -> Self {
        SimError::Profit(err)
    }
}

/// Everything a dashboard needs from one simulation run.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationReport {
    pub curve_params: CurveParams,
    pub optimum: Optimum,
    pub curve: Vec<ProfitPoint>,
}

/// Configuration for [`run_simulation`].
///
/// `Default` reproduces the standard pipeline: default fit options, default
/// search options, and a 100-point curve.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationOptions {
    pub fit: FitOptions,
    pub search: ScalarOptions,
    pub curve_points: usize,
}

impl Default for SimulationOptions {
    fn default() -> Self {
        Self {
            fit: FitOptions::default(),
            search: ScalarOptions::default(),
            curve_points: DEFAULT_CURVE_POINTS,
        }
    }
}

/// Run fit → optimize → evaluate_curve with default options.
///
/// # Errors
/// See [`run_simulation_with_options`].
pub fn run_simulation(
    observations: &CtrObservations, business: &BusinessParams,
) -> SimResult<SimulationReport> {
    run_simulation_with_options(observations, business, &SimulationOptions::default())
}

/// Run the full pipeline with explicit stage options.
///
/// # Errors
/// - [`SimError::Fit`] for any curve-fitting failure.
/// - [`SimError::Profit`] for any search or curve-evaluation failure
///   (including degenerate bounds, checked before the fit result is
///   consumed by the search).
pub fn run_simulation_with_options(
    observations: &CtrObservations, business: &BusinessParams, opts: &SimulationOptions,
) -> SimResult<SimulationReport> {
    let curve_params =
        curve::fit_with_options(observations, curve::DEFAULT_INITIAL_GUESS, &opts.fit)?;
    let optimum = optimize_with_options(&curve_params, business, &opts.search)?;
    let curve = evaluate_curve(&curve_params, business, opts.curve_points)?;
    Ok(SimulationReport { curve_params, optimum, curve })
}
