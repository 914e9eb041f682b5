//! Peaked-CDF significance accessors
//!
//! The peaked CDF `min(F(x), 1 - F(x))` expresses a two-sided
//! significance level: 0.5 at the median (least significant), falling
//! toward 0 in either tail. The blanket implementation below gives the
//! accessors to every [`ContinuousDistribution`] in the process,
//! parametric and empirical alike.

use crate::dist::ContinuousDistribution;

/// Two-sided tail-probability accessors.
pub trait PeakedCdf {
    /// Peaked CDF `min(F(x), 1 - F(x))`, always in [0, 0.5]
    fn pcdf(&self, x: f64) -> f64;

    /// Natural log of the peaked CDF
    ///
    /// Evaluates to negative infinity at or beyond the support
    /// boundary, where the peaked CDF is exactly 0. That is a valid
    /// result meaning "beyond observed tail resolution", not an error.
    fn logpcdf(&self, x: f64) -> f64 {
        self.pcdf(x).ln()
    }

    /// Evaluate the peaked CDF at multiple points
    fn pcdf_batch(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.pcdf(x)).collect()
    }

    /// Evaluate the log peaked CDF at multiple points
    fn logpcdf_batch(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.logpcdf(x)).collect()
    }
}

impl<T: ContinuousDistribution + ?Sized> PeakedCdf for T {
    fn pcdf(&self, x: f64) -> f64 {
        let f = self.cdf(x);
        f.min(1.0 - f)
    }
}
