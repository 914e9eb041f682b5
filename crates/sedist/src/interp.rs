//! Monotone piecewise-linear interpolation
//!
//! [`LinearInterp`] maps a sorted knot sequence to ordinates by linear
//! interpolation, with flat fill values outside the knot range. Both the
//! forward CDF map (fill 0 below, 1 above) and its inverse (fill min/max
//! knot value) are instances of this one type with the roles of the two
//! axes swapped.

use serde::{Deserialize, Serialize};

/// Piecewise-linear map over strictly increasing knot abscissae.
///
/// Outside `[xs[0], xs[last]]` the map is flat: `below` to the left,
/// `above` to the right. This is deliberate boundary policy, not linear
/// extrapolation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearInterp {
    /// Knot abscissae, strictly increasing
    xs: Vec<f64>,
    /// Ordinates at each knot
    ys: Vec<f64>,
    /// Value returned left of the first knot
    below: f64,
    /// Value returned right of the last knot
    above: f64,
}

impl LinearInterp {
    /// Build from knot pairs. `xs` must be non-empty, strictly
    /// increasing, and the same length as `ys`.
    pub(crate) fn new(xs: Vec<f64>, ys: Vec<f64>, fill: (f64, f64)) -> Self {
        debug_assert!(!xs.is_empty());
        debug_assert_eq!(xs.len(), ys.len());
        debug_assert!(xs.windows(2).all(|w| w[0] < w[1]));
        Self {
            xs,
            ys,
            below: fill.0,
            above: fill.1,
        }
    }

    /// Evaluate the map at a point
    ///
    /// Time complexity: O(log n)
    pub fn eval(&self, x: f64) -> f64 {
        if x.is_nan() {
            return f64::NAN;
        }
        let last = self.xs.len() - 1;
        if x < self.xs[0] {
            return self.below;
        }
        if x > self.xs[last] {
            return self.above;
        }

        // Index of the first knot >= x; in range because of the guards above
        let idx = self.xs.partition_point(|&v| v < x);
        if self.xs[idx] == x {
            return self.ys[idx];
        }

        let (x0, x1) = (self.xs[idx - 1], self.xs[idx]);
        let (y0, y1) = (self.ys[idx - 1], self.ys[idx]);
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }

    /// Evaluate the map at multiple points
    pub fn eval_batch(&self, xs: &[f64]) -> Vec<f64> {
        xs.iter().map(|&x| self.eval(x)).collect()
    }

    /// Get the knot abscissae
    pub fn xs(&self) -> &[f64] {
        &self.xs
    }

    /// Get the knot ordinates
    pub fn ys(&self) -> &[f64] {
        &self.ys
    }

    /// Number of knots
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    /// A map always has at least one knot
    pub fn is_empty(&self) -> bool {
        false
    }
}
