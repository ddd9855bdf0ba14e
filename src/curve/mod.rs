//! curve — power-law CTR curve estimation.
//!
//! Purpose
//! -------
//! Estimate how click-through rate decays as advertising impression volume
//! grows. Callers supply observed (impressions, CTR) pairs; the module fits
//! `ctr(x) = a · x^b` by nonlinear least squares and returns validated
//! [`CurveParams`].
//!
//! Key behaviors
//! -------------
//! - [`CtrObservations`] validates inputs once at the boundary (count,
//!   finiteness, CTR range, distinct impression values) and offers a
//!   percent-scale constructor for dashboard-style data entry.
//! - [`fit`] / [`fit_with_guess`] / [`fit_with_options`] run the shared
//!   L-BFGS solver with analytic gradients; a fit that does not converge is
//!   an error, never a defaulted coefficient pair.
//!
//! Downstream usage
//! ----------------
//! - The profit layer consumes [`CurveParams`] to predict CTR inside its
//!   objective; the simulation layer chains fit → optimize → curve
//!   evaluation.

pub mod data;
pub mod errors;
pub mod fit;
pub mod params;
pub mod validation;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::data::{CtrObservations, Observation};
pub use self::errors::{FitError, FitResult};
pub use self::fit::{DEFAULT_INITIAL_GUESS, PowerLawModel, fit, fit_with_guess, fit_with_options};
pub use self::params::CurveParams;
