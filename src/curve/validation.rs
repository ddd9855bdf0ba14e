//! Observation and coefficient validation for the curve layer.
//!
//! Purpose
//! -------
//! Centralize the sanity checks applied at the boundaries of the curve API so
//! constructors and fit entry points can fail fast with structured errors.
//! The first violation encountered wins; callers see one error at a time.
//!
//! Key behaviors
//! -------------
//! - Validate observation collections (count, finiteness, CTR range, distinct
//!   impression values) before they reach the solver.
//! - Validate individual curve coefficients and initial guesses.
//!
//! Conventions
//! -----------
//! - Indices in errors are 0-based positions in the input collection.
//! - These helpers contain no I/O and no logging; they only inspect numeric
//!   values and collection shapes.
use crate::curve::{
    data::Observation,
    errors::{FitError, FitResult},
};

/// Minimum number of observations required for a two-parameter fit.
pub const MIN_OBSERVATIONS: usize = 2;

/// Validate a slice of observations for power-law fitting.
///
/// Checks, in order:
/// 1. At least [`MIN_OBSERVATIONS`] observations.
/// 2. Every impression value is finite and strictly positive.
/// 3. Every CTR value is finite and within `[0, 1]`.
/// 4. At least two distinct impression values (a constant predictor cannot
///    identify both coefficients).
///
/// # Errors
/// - [`FitError::InsufficientObservations`]
/// - [`FitError::InvalidImpressions`] / [`FitError::InvalidCtr`] with the
///   index and value of the first offending entry.
/// - [`FitError::DegenerateImpressions`]
pub fn validate_observations(observations: &[Observation]) -> FitResult<()> {
    if observations.len() < MIN_OBSERVATIONS {
        return Err(FitError::InsufficientObservations { count: observations.len() });
    }
    for (index, obs) in observations.iter().enumerate() {
        if !obs.impressions.is_finite() {
            return Err(FitError::InvalidImpressions {
                index,
                value: obs.impressions,
                reason: "Impression values must be finite.",
            });
        }
        if obs.impressions <= 0.0 {
            return Err(FitError::InvalidImpressions {
                index,
                value: obs.impressions,
                reason: "Impression values must be strictly positive.",
            });
        }
        if !obs.ctr.is_finite() {
            return Err(FitError::InvalidCtr {
                index,
                value: obs.ctr,
                reason: "CTR values must be finite.",
            });
        }
        if !(0.0..=1.0).contains(&obs.ctr) {
            return Err(FitError::InvalidCtr {
                index,
                value: obs.ctr,
                reason: "CTR values must lie within [0, 1].",
            });
        }
    }
    let distinct = count_distinct_impressions(observations);
    if distinct < MIN_OBSERVATIONS {
        return Err(FitError::DegenerateImpressions { distinct });
    }
    Ok(())
}

/// Validate a single named curve coefficient for finiteness.
///
/// # Errors
/// Returns [`FitError::InvalidCurveParam`] if the value is NaN or infinite.
pub fn validate_curve_param(name: &'static str, value: f64) -> FitResult<()> {
    if !value.is_finite() {
        return Err(FitError::InvalidCurveParam {
            name,
            value,
            reason: "Curve coefficients must be finite.",
        });
    }
    Ok(())
}

/// Validate an initial guess `(a0, b0)` for the fit.
///
/// # Errors
/// Returns [`FitError::InvalidInitialGuess`] with the index of the first
/// non-finite coefficient.
pub fn validate_initial_guess(guess: &[f64; 2]) -> FitResult<()> {
    for (index, &value) in guess.iter().enumerate() {
        if !value.is_finite() {
            return Err(FitError::InvalidInitialGuess {
                index,
                value,
                reason: "Initial guess coefficients must be finite.",
            });
        }
    }
    Ok(())
}

/// Count distinct impression values by exact bit pattern.
///
/// Exact comparison is intentional: two observations entered with the same
/// impression count are the degenerate case being detected, not values that
/// drifted apart by rounding.
fn count_distinct_impressions(observations: &[Observation]) -> usize {
    let mut seen: Vec<u64> = Vec::with_capacity(observations.len());
    for obs in observations {
        let bits = obs.impressions.to_bits();
        if !seen.contains(&bits) {
            seen.push(bits);
        }
    }
    seen.len()
}

#[cfg(test)]
mod tests {
    /*
    Scope
    -----
    Unit tests for the observation validators: count, finiteness, CTR range,
    and the distinct-impressions requirement. Boundary cases (CTR exactly 0
    and 1) are included.
    */
    use super::*;

    fn obs(impressions: f64, ctr: f64) -> Observation {
        Observation { impressions, ctr }
    }

    #[test]
    fn accepts_a_minimal_valid_collection() {
        // Purpose: two distinct, in-range observations pass.
        // Given: (1000, 0.1) and (10000, 0.05).
        // Expect: Ok(()).
        let data = vec![obs(1000.0, 0.1), obs(10_000.0, 0.05)];
        assert!(validate_observations(&data).is_ok());
    }

    #[test]
    fn accepts_boundary_ctr_values() {
        // Purpose: CTR of exactly 0 and exactly 1 are inside the domain.
        // Given: observations with ctr = 0.0 and ctr = 1.0.
        // Expect: Ok(()).
        let data = vec![obs(100.0, 1.0), obs(1000.0, 0.0)];
        assert!(validate_observations(&data).is_ok());
    }

    #[test]
    fn rejects_too_few_observations() {
        // Purpose: a two-parameter model cannot be fit to one point.
        // Given: a single observation.
        // Expect: InsufficientObservations { count: 1 }.
        let data = vec![obs(1000.0, 0.1)];
        assert_eq!(
            validate_observations(&data),
            Err(FitError::InsufficientObservations { count: 1 })
        );
    }

    #[test]
    fn rejects_non_positive_and_non_finite_impressions() {
        // Purpose: the impressions domain (finite, > 0) is enforced.
        // Given: a zero impression count, then a NaN.
        // Expect: InvalidImpressions with the offending index.
        let zero = vec![obs(0.0, 0.1), obs(1000.0, 0.05)];
        assert!(matches!(
            validate_observations(&zero),
            Err(FitError::InvalidImpressions { index: 0, .. })
        ));

        let nan = vec![obs(1000.0, 0.1), obs(f64::NAN, 0.05)];
        assert!(matches!(
            validate_observations(&nan),
            Err(FitError::InvalidImpressions { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_ctr() {
        // Purpose: CTR is a rate, not a percent, at this layer.
        // Given: ctr = 1.5.
        // Expect: InvalidCtr at index 1.
        let data = vec![obs(1000.0, 0.1), obs(10_000.0, 1.5)];
        assert!(matches!(
            validate_observations(&data),
            Err(FitError::InvalidCtr { index: 1, .. })
        ));
    }

    #[test]
    fn rejects_constant_impressions() {
        // Purpose: repeated impression values cannot identify (a, b).
        // Given: three observations sharing one impression count.
        // Expect: DegenerateImpressions { distinct: 1 }.
        let data = vec![obs(1000.0, 0.1), obs(1000.0, 0.09), obs(1000.0, 0.11)];
        assert_eq!(
            validate_observations(&data),
            Err(FitError::DegenerateImpressions { distinct: 1 })
        );
    }

    #[test]
    fn initial_guess_must_be_finite() {
        // Purpose: a NaN guess fails before reaching the solver.
        // Given: [NaN, -0.1].
        // Expect: InvalidInitialGuess at index 0.
        assert!(validate_initial_guess(&[1.0, -0.1]).is_ok());
        assert!(matches!(
            validate_initial_guess(&[f64::NAN, -0.1]),
            Err(FitError::InvalidInitialGuess { index: 0, .. })
        ));
    }
}
