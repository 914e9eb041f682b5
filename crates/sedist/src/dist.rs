//! Continuous-distribution interface and the smooth empirical distribution
//!
//! [`ContinuousDistribution`] is the common query surface every frozen
//! distribution in this crate implements. [`SmoothEmpirical`] is the
//! data-driven one: it wraps a fitted [`ScdfFit`] and caches the sample
//! moments at construction time.

use crate::ecdf::{Compression, ScdfFit, DEFAULT_MAX_KNOTS};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Common query surface for continuous distributions with fixed
/// parameters.
///
/// Implementors get the peaked-CDF accessors from
/// [`PeakedCdf`](crate::peaked::PeakedCdf) for free.
pub trait ContinuousDistribution {
    /// Cumulative distribution function P(X <= x)
    fn cdf(&self, x: f64) -> f64;

    /// Quantile function (inverse CDF). Returns x such that P(X <= x) = p.
    fn ppf(&self, p: f64) -> f64;

    /// Expected value E\[X\]
    fn mean(&self) -> f64;

    /// Variance Var(X)
    fn var(&self) -> f64;

    /// Standard deviation
    fn std(&self) -> f64 {
        self.var().sqrt()
    }

    /// Evaluate the CDF at multiple points
    fn cdf_batch(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.cdf(x)).collect()
    }

    /// Evaluate the quantile function at multiple probabilities
    fn ppf_batch(&self, ps: &[f64]) -> Vec<f64> {
        ps.iter().map(|&p| self.ppf(p)).collect()
    }
}

/// Smooth empirical distribution fit to a sample of observations.
///
/// The CDF is the sample's piecewise-linearly interpolated empirical
/// CDF; support is bounded by the observed minimum and maximum.
/// `mean`/`var`/`std` report the cached sample moments rather than
/// moments integrated from the fitted CDF - a deliberate simplification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmoothEmpirical {
    scdf: ScdfFit,
    compression: Compression,
    /// Number of finite observations
    n: usize,
    /// Sample mean
    mu: f64,
    /// Sample variance (population form, divisor n)
    mu2: f64,
}

impl SmoothEmpirical {
    /// Fit with the default settings: no compression preference and a
    /// knot cap of [`DEFAULT_MAX_KNOTS`].
    pub fn fit(sample: &[f64]) -> Result<Self> {
        Self::fit_with(sample, Compression::None, DEFAULT_MAX_KNOTS)
    }

    /// Fit with an explicit compression policy and knot cap
    ///
    /// Fails if the sample has fewer than 2 finite observations.
    /// Construction is atomic: on error no partially fitted value
    /// escapes.
    pub fn fit_with(sample: &[f64], compression: Compression, max_knots: usize) -> Result<Self> {
        let scdf = ScdfFit::fit(sample, compression, max_knots)?;

        // Moments over the same finite observations the fit used
        let finite: Vec<f64> = sample.iter().copied().filter(|x| x.is_finite()).collect();
        let n = finite.len();
        let mu = finite.iter().sum::<f64>() / n as f64;
        let mu2 = finite.iter().map(|x| (x - mu).powi(2)).sum::<f64>() / n as f64;

        Ok(Self {
            scdf,
            compression,
            n,
            mu,
            mu2,
        })
    }

    /// Knot values of the fitted CDF (the selected order statistics)
    pub fn knots(&self) -> &[f64] {
        self.scdf.knots()
    }

    /// Fitted probability at each knot, in (0, 1]
    ///
    /// This exposes the fit directly, the counterpart of evaluating the
    /// CDF "with no argument".
    pub fn fitted_probabilities(&self) -> &[f64] {
        self.scdf.probabilities()
    }

    /// Number of observations the distribution was fit to
    pub fn sample_size(&self) -> usize {
        self.n
    }

    /// Number of interpolation knots the fit retained
    pub fn n_fit(&self) -> usize {
        self.scdf.n_fit()
    }

    /// Compression policy used to build the fit
    pub fn compression(&self) -> Compression {
        self.compression
    }

    /// Support bounds (observed minimum, observed maximum)
    pub fn support(&self) -> (f64, f64) {
        self.scdf.support()
    }

    /// True when the support collapsed to a single point
    pub fn is_degenerate(&self) -> bool {
        self.scdf.is_degenerate()
    }
}

impl ContinuousDistribution for SmoothEmpirical {
    fn cdf(&self, x: f64) -> f64 {
        self.scdf.forward().eval(x)
    }

    fn ppf(&self, p: f64) -> f64 {
        self.scdf.inverse().eval(p)
    }

    fn mean(&self) -> f64 {
        self.mu
    }

    fn var(&self) -> f64 {
        self.mu2
    }
}
