//! Validation helpers for the solver layer.
//!
//! This module centralizes the consistency checks used across the
//! least-squares and scalar-search interfaces:
//!
//! - **Tolerance checks**: [`verify_tol_grad`], [`verify_tol_cost`] ensure
//!   numeric tolerances are finite and strictly positive when provided.
//! - **Gradient validation**: [`validate_grad`] enforces correct dimension
//!   and finite entries.
//! - **Parameter estimates**: [`validate_theta_hat`] ensures a candidate
//!   `theta_hat` exists and contains only finite values.
//! - **Objective values**: [`validate_value`] checks objective outputs for
//!   finiteness.
//!
//! These helpers standardize error reporting by returning domain-specific
//! [`SolverError`] variants, making higher-level code more uniform and easier
//! to debug.
use crate::optimization::{
    errors::{SolverError, SolverResult},
    types::{Grad, Theta},
};

/// Validate the optional gradient-norm tolerance.
///
/// - Accepts `None` (no stopping rule on gradient).
/// - If `Some`, the value must be **finite** and **strictly positive**.
///
/// # Errors
/// Returns [`SolverError::InvalidTolGrad`] if the value is non-finite or ≤ 0.0.
pub fn verify_tol_grad(tol: Option<f64>) -> SolverResult<()> {
    if let Some(tol) = tol {
        if !tol.is_finite() {
            return Err(SolverError::InvalidTolGrad { tol, reason: "Tolerance must be finite." });
        }
        if tol <= 0.0 {
            return Err(SolverError::InvalidTolGrad { tol, reason: "Tolerance must be positive." });
        }
    }
    Ok(())
}

/// Validate the optional cost-change tolerance (for convergence).
///
/// - Accepts `None` (no stopping rule on cost change).
/// - If `Some`, the value must be **finite** and **strictly positive**.
///
/// # Errors
/// Returns [`SolverError::InvalidTolCost`] if the value is non-finite or ≤ 0.0.
pub fn verify_tol_cost(tol: Option<f64>) -> SolverResult<()> {
    if let Some(tol) = tol {
        if !tol.is_finite() {
            return Err(SolverError::InvalidTolCost { tol, reason: "Tolerance must be finite." });
        }
        if tol <= 0.0 {
            return Err(SolverError::InvalidTolCost { tol, reason: "Tolerance must be positive." });
        }
    }
    Ok(())
}

/// Validate a gradient vector against dimension and finiteness.
///
/// Checks:
/// - `grad.len() == dim`
/// - every element is finite (`NaN` or `±∞` are rejected)
///
/// # Errors
/// - [`SolverError::GradientDimMismatch`] if length does not match `dim`.
/// - [`SolverError::InvalidGradient`] with the index/value/reason of the first
///   offending element.
pub fn validate_grad(grad: &Grad, dim: usize) -> SolverResult<()> {
    if grad.len() != dim {
        return Err(SolverError::GradientDimMismatch { expected: dim, found: grad.len() });
    }
    for (index, &value) in grad.iter().enumerate() {
        if !value.is_finite() {
            return Err(SolverError::InvalidGradient {
                index,
                value,
                reason: "Gradient elements must be finite.",
            });
        }
    }
    Ok(())
}

/// Validate and unwrap an estimated parameter vector (`theta_hat`).
///
/// Accepts only a present vector with all **finite** entries.
///
/// # Returns
/// The owned `Theta` if valid.
///
/// # Errors
/// - [`SolverError::MissingThetaHat`] if no vector was provided.
/// - [`SolverError::InvalidThetaHat`] if any element is non-finite.
pub fn validate_theta_hat(theta_hat: Option<Theta>) -> SolverResult<Theta> {
    match theta_hat {
        Some(t) => {
            for (index, &value) in t.iter().enumerate() {
                if !value.is_finite() {
                    return Err(SolverError::InvalidThetaHat {
                        index,
                        value,
                        reason: "Parameter estimates must be finite.",
                    });
                }
            }
            Ok(t)
        }
        None => Err(SolverError::MissingThetaHat),
    }
}

/// Validate that a scalar objective value is finite.
///
/// Negative values are fine as long as they are finite.
///
/// # Errors
/// Returns [`SolverError::InvalidBestValue`] if the value is `NaN` or infinite.
pub fn validate_value(value: f64) -> SolverResult<()> {
    if !value.is_finite() {
        return Err(SolverError::InvalidBestValue { value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    /*
    Scope
    -----
    Unit tests for the solver-layer validation helpers: tolerance checks,
    gradient dimension/finiteness checks, and best-parameter/value checks.
    */
    use super::*;
    use ndarray::array;

    // ---- verify_tol_grad / verify_tol_cost ----

    #[test]
    fn tol_checks_accept_none_and_positive_finite() {
        // Purpose: absent tolerances and valid tolerances pass unchanged.
        // Given: None and a small positive tolerance.
        // Expect: Ok for both helpers.
        assert!(verify_tol_grad(None).is_ok());
        assert!(verify_tol_cost(None).is_ok());
        assert!(verify_tol_grad(Some(1e-8)).is_ok());
        assert!(verify_tol_cost(Some(1e-10)).is_ok());
    }

    #[test]
    fn tol_checks_reject_non_positive_and_non_finite() {
        // Purpose: bad tolerances surface the right structured variant.
        // Given: zero, negative, and NaN tolerances.
        // Expect: InvalidTolGrad / InvalidTolCost.
        assert!(matches!(
            verify_tol_grad(Some(0.0)),
            Err(SolverError::InvalidTolGrad { .. })
        ));
        assert!(matches!(
            verify_tol_grad(Some(f64::NAN)),
            Err(SolverError::InvalidTolGrad { .. })
        ));
        assert!(matches!(
            verify_tol_cost(Some(-1.0)),
            Err(SolverError::InvalidTolCost { .. })
        ));
    }

    // ---- validate_grad ----

    #[test]
    fn validate_grad_accepts_matching_finite_vector() {
        // Purpose: a well-formed gradient passes.
        // Given: a finite 2-vector checked against dim = 2.
        // Expect: Ok(()).
        let grad = array![1.0, -2.5];
        assert!(validate_grad(&grad, 2).is_ok());
    }

    #[test]
    fn validate_grad_rejects_dim_mismatch_and_nan() {
        // Purpose: shape and finiteness violations are distinguished.
        // Given: a 2-vector checked against dim = 3, and a vector with NaN.
        // Expect: GradientDimMismatch, then InvalidGradient at index 1.
        let grad = array![1.0, 2.0];
        assert_eq!(
            validate_grad(&grad, 3),
            Err(SolverError::GradientDimMismatch { expected: 3, found: 2 })
        );

        let bad = array![0.0, f64::NAN];
        assert!(matches!(
            validate_grad(&bad, 2),
            Err(SolverError::InvalidGradient { index: 1, .. })
        ));
    }

    // ---- validate_theta_hat / validate_value ----

    #[test]
    fn validate_theta_hat_unwraps_finite_vectors() {
        // Purpose: a present, finite estimate is returned by value.
        // Given: Some([0.8, -0.3]).
        // Expect: the same vector back.
        let theta = validate_theta_hat(Some(array![0.8, -0.3])).unwrap();
        assert_eq!(theta, array![0.8, -0.3]);
    }

    #[test]
    fn validate_theta_hat_rejects_missing_and_non_finite() {
        // Purpose: absent or corrupted estimates cannot leak out.
        // Given: None, then a vector containing infinity.
        // Expect: MissingThetaHat, then InvalidThetaHat at index 0.
        assert_eq!(validate_theta_hat(None), Err(SolverError::MissingThetaHat));
        assert!(matches!(
            validate_theta_hat(Some(array![f64::INFINITY, 1.0])),
            Err(SolverError::InvalidThetaHat { index: 0, .. })
        ));
    }

    #[test]
    fn validate_value_rejects_nan() {
        // Purpose: the objective finiteness guard fires on NaN.
        // Given: a finite value and NaN.
        // Expect: Ok, then InvalidBestValue.
        assert!(validate_value(-12.5).is_ok());
        assert!(matches!(
            validate_value(f64::NAN),
            Err(SolverError::InvalidBestValue { .. })
        ));
    }
}
