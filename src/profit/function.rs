//! The pure profit model: volume in, economics out.
//!
//! Purpose
//! -------
//! Decompose a single impression volume into the full funnel under the
//! fitted CTR curve and the campaign economics:
//!
//! ```text
//! clicks      = x · ctr(x)
//! conversions = clicks · cvr
//! revenue     = conversions · arpu
//! cost        = x · cost_per_impression
//! profit      = revenue - cost
//! roas        = revenue / cost · 100      (NaN when cost == 0)
//! ```
//!
//! Everything here is deterministic arithmetic; the same inputs always
//! produce the same breakdown.
use crate::{curve::CurveParams, profit::params::BusinessParams};

/// Full economic breakdown of one impression volume.
///
/// `roas` is return on ad spend in percent. At `cost == 0` it is the
/// explicit sentinel `f64::NAN`: the ratio is undefined there and a NaN
/// survives into downstream consumers without masquerading as a real value.
/// This is the single deliberate sentinel in the crate; every other
/// undefined quantity is an error.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfitPoint {
    pub impressions: f64,
    pub ctr: f64,
    pub clicks: f64,
    pub conversions: f64,
    pub cost: f64,
    pub revenue: f64,
    pub profit: f64,
    pub roas: f64,
}

/// Compute the profit breakdown at an impression volume `x`.
///
/// Defined for `x >= 0`. At `x == 0` the funnel is all zeros and `ctr` is
/// reported as 0 rather than evaluating the power law at zero (where
/// `x^b` with `b < 0` diverges).
pub fn breakdown(x: f64, curve: &CurveParams, business: &BusinessParams) -> ProfitPoint {
    if x == 0.0 {
        return ProfitPoint {
            impressions: 0.0,
            ctr: 0.0,
            clicks: 0.0,
            conversions: 0.0,
            cost: 0.0,
            revenue: 0.0,
            profit: 0.0,
            roas: f64::NAN,
        };
    }
    let ctr = curve.ctr_at(x);
    let clicks = x * ctr;
    let conversions = clicks * business.cvr;
    let revenue = conversions * business.arpu;
    let cost = x * business.cost_per_impression;
    let profit = revenue - cost;
    let roas = if cost == 0.0 { f64::NAN } else { revenue / cost * 100.0 };
    ProfitPoint { impressions: x, ctr, clicks, conversions, cost, revenue, profit, roas }
}
