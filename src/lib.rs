//! ctr_profit — power-law CTR curve fitting and impression-volume profit
//! optimization, with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the simulator core to Python via the `_ctr_profit` extension
//! module. The crate estimates `ctr(x) = a · x^b` from observed campaign
//! data, finds the impression volume that maximizes profit under a linear
//! cost/revenue model, and evaluates the profit curve used for charts.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`curve`, `profit`, `optimization`,
//!   `simulation`) as the public crate surface.
//! - Define `#[pyfunction]` wrappers and the `#[pymodule]` initializer for
//!   the `_ctr_profit` Python extension when the `python-bindings` feature
//!   is enabled.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work is implemented in the inner Rust modules; this file
//!   performs only FFI glue, input conversion, and error mapping.
//! - Errors from core Rust code are propagated as rich error types
//!   internally and converted to `PyValueError` at the PyO3 boundary.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend directly on the inner modules and can
//!   ignore the PyO3 items guarded by the `python-bindings` feature.
//! - Python callers see three functions: `fit_power_law`,
//!   `optimize_profit`, and `profit_curve`, mirroring the Rust entry points
//!   `curve::fit`, `profit::optimize`, and `profit::evaluate_curve`.

pub mod curve;
pub mod optimization;
pub mod profit;
pub mod simulation;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyReadonlyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyDict};

#[cfg(feature = "python-bindings")]
use ndarray::Array1;

#[cfg(feature = "python-bindings")]
use crate::{
    curve::{CtrObservations, CurveParams, Observation},
    profit::{BusinessParams, evaluate_curve, optimize},
};

/// Fit the power-law CTR curve from paired observation arrays.
///
/// Parameters
/// ----------
/// - `impressions`: 1-D array of impression volumes, finite and > 0.
/// - `ctr`: 1-D array of click-through rates in `[0, 1]`, same length.
///
/// Returns
/// -------
/// The fitted `(a, b)` pair.
///
/// Errors
/// ------
/// Raises `ValueError` for invalid observations or a fit that does not
/// converge; coefficients are never defaulted.
#[cfg(feature = "python-bindings")]
#[pyfunction]
fn fit_power_law(
    impressions: PyReadonlyArray1<'_, f64>, ctr: PyReadonlyArray1<'_, f64>,
) -> PyResult<(f64, f64)> {
    let observations = to_observations(&impressions, &ctr)?;
    let params = curve::fit(&observations).map_err(to_value_error)?;
    Ok((params.a, params.b))
}

/// Find the profit-maximizing impression volume.
///
/// Parameters
/// ----------
/// - `a`, `b`: fitted curve coefficients.
/// - `max_impressions`, `cvr`, `arpu`, `cost_per_impression`: campaign
///   economics; `max_impressions` must exceed the 100-impression floor.
///
/// Returns
/// -------
/// A dict with `impressions` (int), `profit`, `ctr`, and `roas`. `roas` is
/// NaN when the cost per impression is zero.
#[cfg(feature = "python-bindings")]
#[pyfunction]
fn optimize_profit<'py>(
    py: Python<'py>, a: f64, b: f64, max_impressions: f64, cvr: f64, arpu: f64,
    cost_per_impression: f64,
) -> PyResult<Bound<'py, PyDict>> {
    let curve_params = CurveParams::new(a, b).map_err(to_value_error)?;
    let business = BusinessParams::new(max_impressions, cvr, arpu, cost_per_impression)
        .map_err(to_value_error)?;
    let optimum = optimize(&curve_params, &business).map_err(to_value_error)?;

    let result = PyDict::new(py);
    result.set_item("impressions", optimum.impressions)?;
    result.set_item("profit", optimum.profit)?;
    result.set_item("ctr", optimum.ctr)?;
    result.set_item("roas", optimum.roas)?;
    Ok(result)
}

/// Evaluate the profit curve on an evenly spaced impression grid.
///
/// Parameters
/// ----------
/// - `a`, `b`: fitted curve coefficients.
/// - `max_impressions`, `cvr`, `arpu`, `cost_per_impression`: campaign
///   economics.
/// - `num_points`: grid size, at least 2; defaults to 100.
///
/// Returns
/// -------
/// A dict of 1-D numpy arrays keyed `impressions`, `ctr`, `clicks`,
/// `conversions`, `cost`, `revenue`, `profit`, and `roas`, each of length
/// `num_points`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (a, b, max_impressions, cvr, arpu, cost_per_impression, num_points = 100))]
fn profit_curve<'py>(
    py: Python<'py>, a: f64, b: f64, max_impressions: f64, cvr: f64, arpu: f64,
    cost_per_impression: f64, num_points: usize,
) -> PyResult<Bound<'py, PyDict>> {
    let curve_params = CurveParams::new(a, b).map_err(to_value_error)?;
    let business = BusinessParams::new(max_impressions, cvr, arpu, cost_per_impression)
        .map_err(to_value_error)?;
    let points = evaluate_curve(&curve_params, &business, num_points).map_err(to_value_error)?;

    let column = |f: fn(&profit::ProfitPoint) -> f64| -> Array1<f64> {
        points.iter().map(f).collect()
    };

    let result = PyDict::new(py);
    result.set_item("impressions", column(|p| p.impressions).into_pyarray(py))?;
    result.set_item("ctr", column(|p| p.ctr).into_pyarray(py))?;
    result.set_item("clicks", column(|p| p.clicks).into_pyarray(py))?;
    result.set_item("conversions", column(|p| p.conversions).into_pyarray(py))?;
    result.set_item("cost", column(|p| p.cost).into_pyarray(py))?;
    result.set_item("revenue", column(|p| p.revenue).into_pyarray(py))?;
    result.set_item("profit", column(|p| p.profit).into_pyarray(py))?;
    result.set_item("roas", column(|p| p.roas).into_pyarray(py))?;
    Ok(result)
}

// ---- Helper methods --------------------------------------------------------

#[cfg(feature = "python-bindings")]
fn to_observations(
    impressions: &PyReadonlyArray1<'_, f64>, ctr: &PyReadonlyArray1<'_, f64>,
) -> PyResult<CtrObservations> {
    let impressions = impressions.as_slice().map_err(|_| {
        PyValueError::new_err("impressions must be a contiguous 1-D float64 array")
    })?;
    let ctr = ctr
        .as_slice()
        .map_err(|_| PyValueError::new_err("ctr must be a contiguous 1-D float64 array"))?;
    if impressions.len() != ctr.len() {
        return Err(PyValueError::new_err(format!(
            "impressions and ctr must have equal lengths, got {} and {}",
            impressions.len(),
            ctr.len()
        )));
    }
    let observations = impressions
        .iter()
        .zip(ctr.iter())
        .map(|(&impressions, &ctr)| Observation::new(impressions, ctr))
        .collect();
    CtrObservations::new(observations).map_err(to_value_error)
}

#[cfg(feature = "python-bindings")]
fn to_value_error<E: std::fmt::Display>(err: E) -> PyErr {
    PyValueError::new_err(err.to_string())
}

#[cfg(feature = "python-bindings")]
#[pymodule]
fn _ctr_profit(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(fit_power_law, m)?)?;
    m.add_function(wrap_pyfunction!(optimize_profit, m)?)?;
    m.add_function(wrap_pyfunction!(profit_curve, m)?)?;
    Ok(())
}
