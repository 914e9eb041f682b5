//! Smoothed empirical CDF fitting
//!
//! Turns a finite sample into a monotone, invertible piecewise-linear
//! estimate of its CDF. For samples larger than the knot cap, a
//! [`Compression`] policy selects which order statistics become
//! interpolation knots:
//!
//! - `Linear`: evenly spaced ranks
//! - `Log`: log-spaced ranks mirrored about the median, which keeps
//!   tail resolution (important when consumers take logs of small
//!   tail probabilities) while thinning knots near the median
//! - `None`: no preference; evenly spaced ranks when the cap binds

use crate::error::{Result, SedistError};
use crate::interp::LinearInterp;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Default cap on the number of interpolation knots.
pub const DEFAULT_MAX_KNOTS: usize = 1000;

/// Knot-selection policy applied when the sample exceeds the knot cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    /// Evenly spaced ranks from minimum to maximum
    Linear,
    /// Log-spaced ranks concentrated toward both tails
    Log,
    /// No policy; falls back to evenly spaced ranks when the cap binds
    #[default]
    None,
}

impl FromStr for Compression {
    type Err = std::convert::Infallible;

    /// Any unrecognized mode behaves as `None`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(match s {
            "linear" => Compression::Linear,
            "log" => Compression::Log,
            _ => Compression::None,
        })
    }
}

impl fmt::Display for Compression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compression::Linear => write!(f, "linear"),
            Compression::Log => write!(f, "log"),
            Compression::None => write!(f, "none"),
        }
    }
}

/// A fitted, invertible smooth empirical CDF.
///
/// Holds the forward map (value -> probability, flat 0/1 outside the
/// observed range) and the inverse map (probability -> value, clamped to
/// the observed min/max outside [0, 1]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScdfFit {
    forward: LinearInterp,
    inverse: LinearInterp,
    /// Number of finite observations the fit was built from
    n: usize,
}

impl ScdfFit {
    /// Fit a smooth empirical CDF to a sample
    ///
    /// Non-finite observations are dropped before fitting. Fails with
    /// [`SedistError::InvalidInput`] if fewer than 2 finite observations
    /// remain. `max_knots` below 2 is treated as 2.
    pub fn fit(sample: &[f64], compression: Compression, max_knots: usize) -> Result<Self> {
        let mut sorted: Vec<f64> = sample.iter().copied().filter(|x| x.is_finite()).collect();
        if sorted.len() < 2 {
            return Err(SedistError::InvalidInput { len: sorted.len() });
        }
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let n = sorted.len();
        let m = max_knots.max(2).min(n);

        // 1-based ranks into the sorted sample
        let ranks: Vec<usize> = if m == n {
            (1..=n).collect()
        } else {
            match compression {
                Compression::Log => log_ranks(n, m),
                Compression::Linear | Compression::None => linear_ranks(n, m),
            }
        };

        // Map ranks to knot pairs; equal values collapse onto the
        // highest rank reached, keeping the abscissae strictly increasing
        let mut knots: Vec<f64> = Vec::with_capacity(ranks.len());
        let mut probs: Vec<f64> = Vec::with_capacity(ranks.len());
        for rank in ranks {
            let value = sorted[rank - 1];
            let p = rank as f64 / n as f64;
            if knots.last() == Some(&value) {
                *probs.last_mut().unwrap() = p;
            } else {
                knots.push(value);
                probs.push(p);
            }
        }

        if knots.len() == 1 {
            tracing::warn!(
                n,
                value = knots[0],
                "sample has zero-width support; fitted CDF degenerates to a step"
            );
        }

        let a = knots[0];
        let b = knots[knots.len() - 1];
        let forward = LinearInterp::new(knots.clone(), probs.clone(), (0.0, 1.0));
        let inverse = LinearInterp::new(probs, knots, (a, b));
        Ok(Self { forward, inverse, n })
    }

    /// Forward map: value -> cumulative probability
    pub fn forward(&self) -> &LinearInterp {
        &self.forward
    }

    /// Inverse map: cumulative probability -> value
    pub fn inverse(&self) -> &LinearInterp {
        &self.inverse
    }

    /// Knot values (the selected order statistics)
    pub fn knots(&self) -> &[f64] {
        self.forward.xs()
    }

    /// Fitted probability at each knot, in (0, 1]
    pub fn probabilities(&self) -> &[f64] {
        self.forward.ys()
    }

    /// Number of finite observations in the sample
    pub fn n(&self) -> usize {
        self.n
    }

    /// Number of knots the fit retained
    pub fn n_fit(&self) -> usize {
        self.forward.len()
    }

    /// True when all observations were identical and the support
    /// collapsed to a single point
    pub fn is_degenerate(&self) -> bool {
        self.n_fit() == 1
    }

    /// Support of the fitted distribution: (min knot, max knot)
    pub fn support(&self) -> (f64, f64) {
        let knots = self.knots();
        (knots[0], knots[knots.len() - 1])
    }
}

/// `count` evenly spaced 1-based ranks from 1 to `n` inclusive.
///
/// Requires 2 <= count < n.
fn linear_ranks(n: usize, count: usize) -> Vec<usize> {
    let step = (n - 1) as f64 / (count - 1) as f64;
    let mut ranks: Vec<usize> = (0..count)
        .map(|i| 1 + (i as f64 * step).round() as usize)
        .collect();
    ranks.dedup();
    ranks
}

/// Log-spaced 1-based ranks from 1 toward the sample midpoint, unioned
/// with their mirror image about the midpoint (`n - rank + 1`), unique
/// and sorted. Rank 1 and rank `n` are always present.
fn log_ranks(n: usize, count: usize) -> Vec<usize> {
    let half = (count / 2).max(2);
    let top = (n as f64 / 2.0 - 1.0).max(1.0);
    let hi = top.log10();

    let mut ranks: Vec<usize> = Vec::with_capacity(2 * half);
    for i in 0..half {
        let t = i as f64 / (half - 1) as f64;
        let r = (10f64.powf(t * hi).round() as usize).clamp(1, n);
        ranks.push(r);
        ranks.push(n - r + 1);
    }
    ranks.sort_unstable();
    ranks.dedup();
    ranks
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_fit_small_sample_uses_all_ranks() {
        let data = vec![3.0, 1.0, 2.0, 5.0, 4.0];
        let fit = ScdfFit::fit(&data, Compression::None, 1000).unwrap();

        assert_eq!(fit.n(), 5);
        assert_eq!(fit.n_fit(), 5);
        assert_eq!(fit.knots(), &[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(fit.probabilities(), &[0.2, 0.4, 0.6, 0.8, 1.0]);
    }

    #[test]
    fn test_fit_rejects_short_samples() {
        assert!(matches!(
            ScdfFit::fit(&[], Compression::None, 1000),
            Err(SedistError::InvalidInput { len: 0 })
        ));
        assert!(matches!(
            ScdfFit::fit(&[1.0], Compression::None, 1000),
            Err(SedistError::InvalidInput { len: 1 })
        ));
        // Non-finite observations do not count toward the minimum
        assert!(matches!(
            ScdfFit::fit(&[1.0, f64::NAN, f64::INFINITY], Compression::None, 1000),
            Err(SedistError::InvalidInput { len: 1 })
        ));
    }

    #[test]
    fn test_ties_collapse_to_highest_rank() {
        let data = vec![1.0, 1.0, 2.0, 2.0, 2.0, 3.0];
        let fit = ScdfFit::fit(&data, Compression::None, 1000).unwrap();

        assert_eq!(fit.knots(), &[1.0, 2.0, 3.0]);
        let probs = fit.probabilities();
        assert!((probs[0] - 2.0 / 6.0).abs() < 1e-12);
        assert!((probs[1] - 5.0 / 6.0).abs() < 1e-12);
        assert!((probs[2] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_linear_compression_knot_count() {
        let data: Vec<f64> = (0..10000).map(|i| i as f64).collect();
        let fit = ScdfFit::fit(&data, Compression::Linear, 1000).unwrap();

        assert_eq!(fit.n_fit(), 1000);
        assert_eq!(fit.knots()[0], 0.0);
        assert_eq!(fit.knots()[999], 9999.0);
    }

    #[test]
    fn test_log_compression_keeps_both_extremes() {
        let data: Vec<f64> = (0..10000).map(|i| i as f64).collect();
        let fit = ScdfFit::fit(&data, Compression::Log, 1000).unwrap();

        assert!(fit.n_fit() <= 1000);
        assert_eq!(fit.knots()[0], 0.0);
        assert_eq!(fit.knots()[fit.n_fit() - 1], 9999.0);

        // Knots are denser in the tails than around the median
        let knots = fit.knots();
        let first_gap = knots[1] - knots[0];
        let mid = fit.n_fit() / 2;
        let mid_gap = knots[mid + 1] - knots[mid];
        assert!(first_gap < mid_gap);
    }

    #[test]
    fn test_none_mode_falls_back_to_even_spacing() {
        let data: Vec<f64> = (0..10000).map(|i| i as f64).collect();
        let fit = ScdfFit::fit(&data, Compression::None, 100).unwrap();

        assert_eq!(fit.n_fit(), 100);
        assert_eq!(fit.knots()[0], 0.0);
        assert_eq!(fit.knots()[99], 9999.0);
    }

    #[test]
    fn test_unrecognized_mode_parses_as_none() {
        assert_eq!("linear".parse::<Compression>().unwrap(), Compression::Linear);
        assert_eq!("log".parse::<Compression>().unwrap(), Compression::Log);
        assert_eq!("".parse::<Compression>().unwrap(), Compression::None);
        assert_eq!("cubic".parse::<Compression>().unwrap(), Compression::None);
    }

    #[test]
    fn test_degenerate_sample() {
        let fit = ScdfFit::fit(&[1.0, 1.0, 1.0, 1.0, 1.0], Compression::None, 1000).unwrap();

        assert!(fit.is_degenerate());
        assert_eq!(fit.n_fit(), 1);
        assert_eq!(fit.support(), (1.0, 1.0));
        assert_eq!(fit.forward().eval(1.0), 1.0);
        assert_eq!(fit.forward().eval(0.9), 0.0);
        assert_eq!(fit.inverse().eval(0.5), 1.0);
    }

    #[test]
    fn test_forward_map_monotone_and_bounded() {
        let mut rng = StdRng::seed_from_u64(7);
        for &mode in &[Compression::None, Compression::Linear, Compression::Log] {
            let data: Vec<f64> = (0..500).map(|_| rng.gen::<f64>() * 20.0 - 10.0).collect();
            let fit = ScdfFit::fit(&data, mode, 100).unwrap();

            let mut prev = -1.0;
            for i in 0..=400 {
                let x = -12.0 + i as f64 * 0.06;
                let p = fit.forward().eval(x);
                assert!((0.0..=1.0).contains(&p), "cdf out of bounds at {x}: {p}");
                assert!(p >= prev, "cdf decreased at {x}");
                prev = p;
            }
        }
    }

    #[test]
    fn test_forward_map_bounded_for_constant_sample() {
        let fit = ScdfFit::fit(&[4.2; 50], Compression::Log, 10).unwrap();
        for i in 0..100 {
            let x = i as f64 * 0.1;
            let p = fit.forward().eval(x);
            assert!((0.0..=1.0).contains(&p));
        }
    }

    #[test]
    fn test_log_ranks_small_samples_degrade_gracefully() {
        // Odd and tiny sample sizes must still give sorted, unique,
        // in-range ranks covering both extremes
        for n in [5usize, 7, 9, 11, 101] {
            for count in [2usize, 3, 4, 10] {
                if count >= n {
                    continue;
                }
                let ranks = log_ranks(n, count);
                assert_eq!(ranks[0], 1);
                assert_eq!(ranks[ranks.len() - 1], n);
                assert!(ranks.windows(2).all(|w| w[0] < w[1]));
                assert!(ranks.iter().all(|&r| r >= 1 && r <= n));
            }
        }
    }
}
