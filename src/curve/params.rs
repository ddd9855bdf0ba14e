//! Fitted power-law curve coefficients.
use crate::curve::{errors::FitResult, validation::validate_curve_param};

/// Coefficients of the fitted CTR curve `ctr(x) = a · x^b`.
///
/// Both coefficients are finite on construction and unconstrained otherwise;
/// for real campaign data `a > 0` and `b < 0` (CTR decays as volume grows),
/// but the model does not force that shape.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParams {
    pub a: f64,
    pub b: f64,
}

impl CurveParams {
    /// Construct validated curve coefficients.
    ///
    /// # Errors
    /// Returns [`FitError::InvalidCurveParam`](crate::curve::errors::FitError::InvalidCurveParam)
    /// if either coefficient is non-finite.
    pub fn new(a: f64, b: f64) -> FitResult<Self> {
        validate_curve_param("a", a)?;
        validate_curve_param("b", b)?;
        Ok(Self { a, b })
    }

    /// Predicted CTR at an impression volume `x`.
    ///
    /// Defined for `x > 0`; the observation and business-parameter validators
    /// keep non-positive volumes out of the pipeline.
    pub fn ctr_at(&self, x: f64) -> f64 {
        self.a * x.powf(self.b)
    }
}

#[cfg(test)]
mod tests {
    /*
    Scope
    -----
    Unit tests for curve coefficient construction and point prediction.
    */
    use super::*;
    use crate::curve::errors::FitError;
    use approx::assert_relative_eq;

    #[test]
    fn predicts_the_power_law_exactly() {
        // Purpose: ctr_at computes a·x^b without surprises.
        // Given: a = 2, b = -0.5.
        // Expect: ctr(10000) = 2 / 100 = 0.02.
        let params = CurveParams::new(2.0, -0.5).unwrap();
        assert_relative_eq!(params.ctr_at(10_000.0), 0.02);
    }

    #[test]
    fn rejects_non_finite_coefficients() {
        // Purpose: NaN coefficients cannot be constructed.
        // Given: a = NaN.
        // Expect: InvalidCurveParam naming "a".
        assert!(matches!(
            CurveParams::new(f64::NAN, -0.5),
            Err(FitError::InvalidCurveParam { name: "a", .. })
        ));
    }
}
