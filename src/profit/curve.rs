//! Profit curve evaluation over an impression grid.
use crate::{
    curve::CurveParams,
    profit::{
        errors::{ProfitError, ProfitResult},
        function::{ProfitPoint, breakdown},
        optimizer::MIN_IMPRESSIONS,
        params::BusinessParams,
    },
};
use ndarray::Array1;

/// Default number of grid points for a profit curve.
pub const DEFAULT_CURVE_POINTS: usize = 100;

/// Evaluate the profit breakdown on an evenly spaced impression grid.
///
/// The grid runs from the 100-impression floor to `max_impressions`
/// inclusive, with exactly `num_points` strictly increasing points. Each
/// point is mapped through [`breakdown`], so a zero cost per impression
/// yields `roas = NaN` at every point rather than a fault.
///
/// Evaluation is pure: the same inputs always produce the same curve, and
/// repeated calls are independent.
///
/// # Errors
/// - [`ProfitError::InvalidCurveLength`] if `num_points < 2` (a curve must
///   contain both endpoints).
/// - [`ProfitError::DegenerateBounds`] if `max_impressions` does not exceed
///   the search floor.
pub fn evaluate_curve(
    curve: &CurveParams, business: &BusinessParams, num_points: usize,
) -> ProfitResult<Vec<ProfitPoint>> {
    if num_points < 2 {
        return Err(ProfitError::InvalidCurveLength { num_points });
    }
    if business.max_impressions <= MIN_IMPRESSIONS {
        return Err(ProfitError::DegenerateBounds { max_impressions: business.max_impressions });
    }
    let grid = Array1::linspace(MIN_IMPRESSIONS, business.max_impressions, num_points);
    Ok(grid.iter().map(|&x| breakdown(x, curve, business)).collect())
}

#[cfg(test)]
mod tests {
    /*
    Scope
    -----
    Unit tests for profit curve evaluation: grid shape and endpoints,
    monotonicity of the impression axis, error paths, and determinism.
    */
    use super::*;
    use approx::assert_relative_eq;

    fn curve() -> CurveParams {
        CurveParams::new(1.0, -2.0 / 7.0).unwrap()
    }

    fn business() -> BusinessParams {
        BusinessParams::new(1_000_000.0, 0.1, 10_000.0, 20.0).unwrap()
    }

    #[test]
    fn grid_has_exact_length_and_endpoints() {
        // Purpose: the grid contract (count, first, last) holds exactly.
        // Given: the default 100 points over [100, 1e6].
        // Expect: 100 points, first at 100, last at 1e6.
        // Arrange / Act
        let points = evaluate_curve(&curve(), &business(), DEFAULT_CURVE_POINTS).unwrap();

        // Assert
        assert_eq!(points.len(), 100);
        assert_relative_eq!(points[0].impressions, 100.0);
        assert_relative_eq!(points[99].impressions, 1_000_000.0);
    }

    #[test]
    fn impressions_are_strictly_increasing() {
        // Purpose: the impression axis never repeats or reverses.
        // Given: a 50-point curve.
        // Expect: each point's volume exceeds its predecessor's.
        let points = evaluate_curve(&curve(), &business(), 50).unwrap();

        for pair in points.windows(2) {
            assert!(pair[1].impressions > pair[0].impressions);
        }
    }

    #[test]
    fn two_points_is_the_minimal_curve() {
        // Purpose: num_points = 2 degenerates to just the endpoints.
        // Given: num_points = 2.
        // Expect: exactly the floor and the budget.
        let points = evaluate_curve(&curve(), &business(), 2).unwrap();

        assert_eq!(points.len(), 2);
        assert_relative_eq!(points[0].impressions, 100.0);
        assert_relative_eq!(points[1].impressions, 1_000_000.0);
    }

    #[test]
    fn rejects_short_curves_and_degenerate_bounds() {
        // Purpose: both preconditions fail with their own variants.
        // Given: num_points = 1, then max_impressions = 100.
        // Expect: InvalidCurveLength, then DegenerateBounds.
        assert_eq!(
            evaluate_curve(&curve(), &business(), 1),
            Err(ProfitError::InvalidCurveLength { num_points: 1 })
        );

        let tight = BusinessParams::new(100.0, 0.1, 10_000.0, 20.0).unwrap();
        assert!(matches!(
            evaluate_curve(&curve(), &tight, DEFAULT_CURVE_POINTS),
            Err(ProfitError::DegenerateBounds { .. })
        ));
    }

    #[test]
    fn evaluation_is_deterministic() {
        // Purpose: repeated evaluation returns identical curves.
        // Given: two calls with the same inputs.
        // Expect: equal point vectors.
        let first = evaluate_curve(&curve(), &business(), 25).unwrap();
        let second = evaluate_curve(&curve(), &business(), 25).unwrap();

        assert_eq!(first, second);
    }
}
