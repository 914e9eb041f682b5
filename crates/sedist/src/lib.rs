//! sedist - smooth empirical distributions
//!
//! Build a continuous distribution object from a finite sample of scalar
//! observations by fitting a smoothed, invertible piecewise-linear
//! estimate of the empirical CDF.
//!
//! # Key Components
//!
//! - **[`ScdfFit`]**: the fitted CDF - knot selection, forward map, and
//!   inverse map, with optional [`Compression`] of the knot set
//! - **[`SmoothEmpirical`]**: wraps a fit in the standard
//!   [`ContinuousDistribution`] surface (cdf, ppf, mean, var, std)
//! - **[`PeakedCdf`]**: two-sided significance accessors
//!   (`pcdf`, `logpcdf`) available on every distribution in the crate,
//!   parametric or empirical
//! - **[`Normal`]/[`Exponential`]**: frozen parametric references
//!
//! # Example
//!
//! ```
//! use sedist::{Compression, ContinuousDistribution, PeakedCdf, SmoothEmpirical};
//!
//! let sample: Vec<f64> = (0..100).map(|i| (i as f64 - 49.5) / 10.0).collect();
//! let d = SmoothEmpirical::fit_with(&sample, Compression::Log, 1000)?;
//!
//! assert!((d.cdf(0.0) - 0.5).abs() < 0.05);
//! assert!(d.pcdf(0.0) <= 0.5);
//! assert!((d.ppf(d.cdf(1.0)) - 1.0).abs() < 1e-9);
//! # Ok::<(), sedist::SedistError>(())
//! ```

pub mod dist;
pub mod ecdf;
pub mod error;
pub mod frozen;
pub mod interp;
pub mod peaked;

pub use dist::{ContinuousDistribution, SmoothEmpirical};
pub use ecdf::{Compression, ScdfFit, DEFAULT_MAX_KNOTS};
pub use error::{Result, SedistError};
pub use frozen::{Exponential, Normal};
pub use interp::LinearInterp;
pub use peaked::PeakedCdf;
