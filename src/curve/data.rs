//! Observed campaign data for curve fitting.
//!
//! Purpose
//! -------
//! Carry validated (impressions, CTR) pairs from the caller into the fit.
//! [`CtrObservations`] enforces the fit preconditions on construction, so
//! downstream code can assume well-formed data.
//!
//! Conventions
//! -----------
//! - CTR is stored as a rate in `[0, 1]`. Presentation layers that work in
//!   percent enter through [`CtrObservations::from_percent`], which divides
//!   by 100 at the boundary.
//! - Insertion order is preserved but has no effect on the fitted
//!   coefficients.
use crate::{
    curve::{
        errors::{FitError, FitResult},
        validation::validate_observations,
    },
    optimization::FitData,
};
use ndarray::Array1;

/// A single observed (impressions, CTR) pair.
///
/// - `impressions`: finite, strictly positive.
/// - `ctr`: finite, within `[0, 1]`.
///
/// Invariants are enforced by [`CtrObservations`], not by this plain struct.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub impressions: f64,
    pub ctr: f64,
}

impl Observation {
    /// Convenience constructor.
    pub fn new(impressions: f64, ctr: f64) -> Self {
        Self { impressions, ctr }
    }
}

/// Validated collection of observations ready for fitting.
///
/// Invariants (enforced on construction):
/// - at least 2 observations,
/// - every impression value finite and strictly positive,
/// - every CTR finite and within `[0, 1]`,
/// - at least 2 distinct impression values.
#[derive(Debug, Clone, PartialEq)]
pub struct CtrObservations {
    observations: Vec<Observation>,
}

impl CtrObservations {
    /// Construct validated observations from rate-scale CTR values.
    ///
    /// # Errors
    /// Any violation reported by
    /// [`validate_observations`](crate::curve::validation::validate_observations).
    pub fn new(observations: Vec<Observation>) -> FitResult<Self> {
        validate_observations(&observations)?;
        Ok(Self { observations })
    }

    /// Construct validated observations from percent-scale CTR values.
    ///
    /// Accepts paired slices where CTR is expressed in percent (`[0, 100]`)
    /// and converts to rate scale by dividing by 100. This matches the data
    /// entry convention of marketing dashboards, where "2.5" means 2.5 %.
    ///
    /// # Errors
    /// - [`FitError::LengthMismatch`] if the slices differ in length.
    /// - [`FitError::InvalidCtrPercent`] if a percent value is non-finite or
    ///   outside `[0, 100]`.
    /// - Any violation reported by `validate_observations` on the converted
    ///   values.
    pub fn from_percent(impressions: &[f64], ctr_percent: &[f64]) -> FitResult<Self> {
        if impressions.len() != ctr_percent.len() {
            return Err(FitError::LengthMismatch {
                impressions: impressions.len(),
                ctrs: ctr_percent.len(),
            });
        }
        for (index, &value) in ctr_percent.iter().enumerate() {
            if !value.is_finite() {
                return Err(FitError::InvalidCtrPercent {
                    index,
                    value,
                    reason: "Percent CTR values must be finite.",
                });
            }
            if !(0.0..=100.0).contains(&value) {
                return Err(FitError::InvalidCtrPercent {
                    index,
                    value,
                    reason: "Percent CTR values must lie within [0, 100].",
                });
            }
        }
        let observations = impressions
            .iter()
            .zip(ctr_percent.iter())
            .map(|(&impressions, &percent)| Observation { impressions, ctr: percent / 100.0 })
            .collect();
        Self::new(observations)
    }

    /// The validated observations, in insertion order.
    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Always `false` for a constructed value; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// Geometric mean of the impression values.
    ///
    /// Used as the predictor rescaling factor for the fit: dividing the
    /// impression volumes by their geometric mean centers `ln x` on zero, so
    /// the solver sees predictors of order one instead of spanning several
    /// orders of magnitude. Well-defined because every impression value is
    /// finite and strictly positive.
    pub(crate) fn impression_scale(&self) -> f64 {
        let mean_ln = self.observations.iter().map(|o| o.impressions.ln()).sum::<f64>()
            / self.observations.len() as f64;
        mean_ln.exp()
    }

    /// Assemble solver-layer fit data (xs = impressions / x_scale, ys = CTR).
    pub(crate) fn fit_data(&self, x_scale: f64) -> FitResult<FitData> {
        let xs: Array1<f64> =
            self.observations.iter().map(|o| o.impressions / x_scale).collect();
        let ys: Array1<f64> = self.observations.iter().map(|o| o.ctr).collect();
        Ok(FitData::new(xs, ys)?)
    }
}
