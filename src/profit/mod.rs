//! profit — campaign economics and the impression-volume search.
//!
//! Purpose
//! -------
//! Turn a fitted CTR curve plus campaign economics into actionable numbers:
//! the profit-maximizing impression volume ([`optimize`]) and a full profit
//! curve for visualization ([`evaluate_curve`]).
//!
//! Key behaviors
//! -------------
//! - [`BusinessParams`] validates the economics once at the boundary.
//! - [`breakdown`] is the pure funnel arithmetic shared by the search and
//!   the curve; its only sentinel is `roas = NaN` at zero cost.
//! - [`optimize`] minimizes `-profit(x)` over `[100, max_impressions + 1]`
//!   with Brent's bounded method; non-convergence is an error.
//! - [`evaluate_curve`] samples the breakdown on an inclusive, evenly
//!   spaced grid from 100 to `max_impressions`.

pub mod curve;
pub mod errors;
pub mod function;
pub mod optimizer;
pub mod params;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::curve::{DEFAULT_CURVE_POINTS, evaluate_curve};
pub use self::errors::{ProfitError, ProfitResult};
pub use self::function::{ProfitPoint, breakdown};
pub use self::optimizer::{MIN_IMPRESSIONS, Optimum, optimize, optimize_with_options};
pub use self::params::BusinessParams;
