//! Validated business parameters for the profit model.
use crate::profit::errors::{ProfitError, ProfitResult};

/// Campaign economics used by the profit function.
///
/// Invariants (enforced on construction):
/// - `max_impressions`: finite, strictly positive.
/// - `cvr`: finite, within `[0, 1]` (conversion rate of clicks to
///   conversions).
/// - `arpu`: finite, non-negative (average revenue per converting user).
/// - `cost_per_impression`: finite, non-negative.
///
/// The 100-impression search floor is a property of the optimizer, not of
/// the business inputs, so `max_impressions <= 100` is accepted here and
/// rejected by the search and curve-evaluation entry points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BusinessParams {
    pub max_impressions: f64,
    pub cvr: f64,
    pub arpu: f64,
    pub cost_per_impression: f64,
}

impl BusinessParams {
    /// Construct validated business parameters.
    ///
    /// # Errors
    /// - [`ProfitError::InvalidMaxImpressions`] for non-finite or
    ///   non-positive budgets.
    /// - [`ProfitError::InvalidCvr`] for conversion rates outside `[0, 1]`.
    /// - [`ProfitError::InvalidArpu`] / [`ProfitError::InvalidCostPerImpression`]
    ///   for negative or non-finite economics.
    pub fn new(
        max_impressions: f64, cvr: f64, arpu: f64, cost_per_impression: f64,
    ) -> ProfitResult<Self> {
        if !max_impressions.is_finite() {
            return Err(ProfitError::InvalidMaxImpressions {
                value: max_impressions,
                reason: "Maximum impressions must be finite.",
            });
        }
        if max_impressions <= 0.0 {
            return Err(ProfitError::InvalidMaxImpressions {
                value: max_impressions,
                reason: "Maximum impressions must be strictly positive.",
            });
        }
        if !cvr.is_finite() {
            return Err(ProfitError::InvalidCvr {
                value: cvr,
                reason: "Conversion rate must be finite.",
            });
        }
        if !(0.0..=1.0).contains(&cvr) {
            return Err(ProfitError::InvalidCvr {
                value: cvr,
                reason: "Conversion rate must lie within [0, 1].",
            });
        }
        if !arpu.is_finite() {
            return Err(ProfitError::InvalidArpu {
                value: arpu,
                reason: "ARPU must be finite.",
            });
        }
        if arpu < 0.0 {
            return Err(ProfitError::InvalidArpu {
                value: arpu,
                reason: "ARPU must be non-negative.",
            });
        }
        if !cost_per_impression.is_finite() {
            return Err(ProfitError::InvalidCostPerImpression {
                value: cost_per_impression,
                reason: "Cost per impression must be finite.",
            });
        }
        if cost_per_impression < 0.0 {
            return Err(ProfitError::InvalidCostPerImpression {
                value: cost_per_impression,
                reason: "Cost per impression must be non-negative.",
            });
        }
        Ok(Self { max_impressions, cvr, arpu, cost_per_impression })
    }
}
