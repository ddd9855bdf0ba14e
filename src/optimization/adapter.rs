//! Adapter that exposes a user `ResidualModel` as an `argmin` problem.
//!
//! The objective is the sum of squared residuals
//! `SSR(θ) = Σᵢ (yᵢ - f(xᵢ, θ))²`, minimized directly. The gradient is
//! assembled from the model's per-point partials:
//! `∇SSR(θ) = Σᵢ -2 rᵢ ∂f(xᵢ, θ)/∂θ` with `rᵢ = yᵢ - f(xᵢ, θ)`.
use crate::optimization::{
    errors::SolverError,
    traits::{FitData, ResidualModel},
    types::{Cost, Grad, Theta},
    validation::validate_grad,
};
use argmin::core::{CostFunction, Error, Gradient};
use ndarray::Array1;

/// Bridges a user `ResidualModel` to `argmin`'s `CostFunction` and `Gradient`.
///
/// - `CostFunction::cost` returns `SSR(θ)`.
/// - `Gradient::gradient` accumulates `-2 rᵢ · partials(xᵢ, θ)` over all data
///   points and validates the result before handing it to the solver.
#[derive(Debug, Clone)]
pub struct SsrAdapter<'a, M: ResidualModel> {
    pub model: &'a M,
    pub data: &'a FitData,
}

impl<'a, M: ResidualModel> SsrAdapter<'a, M> {
    /// Construct a new adapter over a user `ResidualModel` and its data.
    pub fn new(model: &'a M, data: &'a FitData) -> Self {
        Self { model, data }
    }
}

impl<'a, M: ResidualModel> CostFunction for SsrAdapter<'a, M> {
    type Param = Theta;
    type Output = Cost;

    /// Evaluate `SSR(θ)` over the fit data.
    ///
    /// # Errors
    /// Returns `Error(NonFiniteCost)` if the accumulated sum is not finite
    /// (e.g., a prediction overflowed or produced NaN).
    fn cost(&self, theta: &Self::Param) -> Result<Self::Output, Error> {
        let mut ssr = 0.0;
        for (&x, &y) in self.data.xs().iter().zip(self.data.ys().iter()) {
            let residual = y - self.model.predict(x, theta);
            ssr += residual * residual;
        }
        if !ssr.is_finite() {
            return Err((SolverError::NonFiniteCost { value: ssr }).into());
        }
        Ok(ssr)
    }
}

impl<'a, M: ResidualModel> Gradient for SsrAdapter<'a, M> {
    type Param = Theta;
    type Gradient = Grad;

    /// Evaluate `∇SSR(θ)` from the model's per-point partials.
    ///
    /// Each data point contributes `-2 rᵢ · ∂f(xᵢ, θ)/∂θ`. Every per-point
    /// partials vector is checked for the right dimension, and the assembled
    /// gradient is validated for finiteness before it reaches the solver.
    ///
    /// # Errors
    /// - `GradientDimMismatch` if the model returns partials of the wrong
    ///   length for any data point.
    /// - `InvalidGradient` if the assembled gradient contains non-finite
    ///   entries.
    fn gradient(&self, theta: &Self::Param) -> Result<Self::Gradient, Error> {
        let dim = theta.len();
        let mut grad: Grad = Array1::zeros(dim);
        for (&x, &y) in self.data.xs().iter().zip(self.data.ys().iter()) {
            let residual = y - self.model.predict(x, theta);
            let partials = self.model.partials(x, theta);
            if partials.len() != dim {
                return Err((SolverError::GradientDimMismatch {
                    expected: dim,
                    found: partials.len(),
                })
                .into());
            }
            grad.scaled_add(-2.0 * residual, &partials);
        }
        validate_grad(&grad, dim)?;
        Ok(grad)
    }
}

#[cfg(test)]
mod tests {
    /*
    Scope
    -----
    Unit tests for the SSR adapter: cost accumulation, analytic gradient
    assembly against a hand-computed reference, and the finiteness and
    dimension guards. A simple linear model y = θ₀ + θ₁·x stands in for the
    production curve model so the expected values are exact.
    */
    use super::*;
    use crate::optimization::errors::SolverResult;
    use approx::assert_relative_eq;
    use ndarray::array;

    /// y = θ₀ + θ₁·x, with partials [1, x].
    struct LinearModel;

    impl ResidualModel for LinearModel {
        fn predict(&self, x: f64, theta: &Theta) -> f64 {
            theta[0] + theta[1] * x
        }

        fn partials(&self, x: f64, _theta: &Theta) -> Grad {
            array![1.0, x]
        }

        fn check(&self, _theta: &Theta, _data: &FitData) -> SolverResult<()> {
            Ok(())
        }
    }

    /// Like LinearModel but reports partials of the wrong length.
    struct ShortPartialsModel;

    impl ResidualModel for ShortPartialsModel {
        fn predict(&self, x: f64, theta: &Theta) -> f64 {
            theta[0] + theta[1] * x
        }

        fn partials(&self, _x: f64, _theta: &Theta) -> Grad {
            array![1.0]
        }

        fn check(&self, _theta: &Theta, _data: &FitData) -> SolverResult<()> {
            Ok(())
        }
    }

    fn sample_data() -> FitData {
        // y = 1 + 2x, exactly.
        FitData::new(array![0.0, 1.0, 2.0], array![1.0, 3.0, 5.0]).unwrap()
    }

    #[test]
    fn cost_is_zero_at_exact_parameters_and_positive_off_them() {
        // Purpose: the SSR objective matches the textbook definition.
        // Given: exact data for y = 1 + 2x, evaluated at the true and at a
        //        perturbed parameter vector.
        // Expect: SSR = 0 at (1, 2); SSR = Σ rᵢ² = 3·0.25 at (1.5, 2).
        // Arrange
        let data = sample_data();
        let adapter = SsrAdapter::new(&LinearModel, &data);

        // Act / Assert
        assert_relative_eq!(adapter.cost(&array![1.0, 2.0]).unwrap(), 0.0);
        // residuals are all -0.5 when θ₀ is off by +0.5
        assert_relative_eq!(adapter.cost(&array![1.5, 2.0]).unwrap(), 0.75);
    }

    #[test]
    fn gradient_matches_hand_computed_reference() {
        // Purpose: the assembled gradient equals Σ -2 rᵢ [1, xᵢ].
        // Given: θ = (0, 0) over the sample data, so rᵢ = yᵢ.
        // Expect: ∇SSR = (-2 Σ yᵢ, -2 Σ yᵢ xᵢ) = (-18, -26).
        // Arrange
        let data = sample_data();
        let adapter = SsrAdapter::new(&LinearModel, &data);

        // Act
        let grad = adapter.gradient(&array![0.0, 0.0]).unwrap();

        // Assert
        assert_relative_eq!(grad[0], -18.0);
        assert_relative_eq!(grad[1], -26.0);
    }

    #[test]
    fn gradient_is_zero_at_the_least_squares_solution() {
        // Purpose: the stationarity condition holds at the exact solution.
        // Given: θ = (1, 2) which reproduces the data perfectly.
        // Expect: both gradient components vanish.
        let data = sample_data();
        let adapter = SsrAdapter::new(&LinearModel, &data);

        let grad = adapter.gradient(&array![1.0, 2.0]).unwrap();

        assert_relative_eq!(grad[0], 0.0);
        assert_relative_eq!(grad[1], 0.0);
    }

    #[test]
    fn non_finite_cost_is_reported_not_returned() {
        // Purpose: the finiteness guard converts overflow into an error.
        // Given: parameters large enough that the squared residual overflows.
        // Expect: Err, and the error downcasts to NonFiniteCost.
        let data = sample_data();
        let adapter = SsrAdapter::new(&LinearModel, &data);

        let err = adapter.cost(&array![f64::MAX, f64::MAX]).unwrap_err();

        let solver_err: SolverError = err.into();
        assert!(matches!(solver_err, SolverError::BackendError { .. }));
    }

    #[test]
    fn wrong_partials_length_is_a_dim_mismatch() {
        // Purpose: a model bug in partials cannot silently corrupt the fit.
        // Given: a model whose partials have length 1 against a 2-vector θ.
        // Expect: the gradient call fails.
        let data = sample_data();
        let adapter = SsrAdapter::new(&ShortPartialsModel, &data);

        assert!(adapter.gradient(&array![1.0, 2.0]).is_err());
    }
}
