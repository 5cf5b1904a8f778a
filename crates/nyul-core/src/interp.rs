use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{NyulError, Result};

/// Interpolation kind used when remapping intensities onto the standard scale.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum InterpKind {
    /// Piecewise-linear between landmarks; boundary segments are extended
    /// linearly outside the landmark range.
    #[default]
    Linear,
    /// Value of the nearest landmark; end landmarks are held outside the
    /// landmark range.
    Nearest,
}

impl fmt::Display for InterpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpKind::Linear => write!(f, "Linear"),
            InterpKind::Nearest => write!(f, "Nearest"),
        }
    }
}

/// One-dimensional interpolator over strictly increasing domain nodes.
///
/// Construction is where monotonicity is enforced; evaluation never fails,
/// inputs outside the node range extrapolate according to the kind.
#[derive(Clone, Debug)]
pub struct Interp1d {
    xs: Vec<f64>,
    ys: Vec<f64>,
    kind: InterpKind,
}

impl Interp1d {
    /// Build an interpolator from matched node arrays.
    ///
    /// `xs` must be strictly increasing and hold at least two nodes.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>, kind: InterpKind) -> Result<Self> {
        if xs.len() != ys.len() {
            return Err(NyulError::InvalidConfig(format!(
                "interpolation nodes mismatched: {} domain vs {} range",
                xs.len(),
                ys.len()
            )));
        }
        if xs.len() < 2 {
            return Err(NyulError::InvalidConfig(
                "interpolation requires at least two nodes".to_string(),
            ));
        }
        for (i, pair) in xs.windows(2).enumerate() {
            if pair[1] < pair[0] {
                return Err(NyulError::NonMonotonicLandmarks { index: i + 1 });
            }
            if pair[1] == pair[0] {
                return Err(NyulError::DegenerateLandmarks);
            }
        }
        Ok(Self { xs, ys, kind })
    }

    pub fn eval(&self, x: f64) -> f64 {
        match self.kind {
            InterpKind::Linear => self.eval_linear(x),
            InterpKind::Nearest => self.eval_nearest(x),
        }
    }

    /// Index of the segment [xs[i], xs[i+1]] covering `x`. The boundary
    /// segments cover everything outside the node range.
    fn segment(&self, x: f64) -> usize {
        let n = self.xs.len();
        let idx = self.xs.partition_point(|&node| node <= x);
        idx.clamp(1, n - 1) - 1
    }

    fn eval_linear(&self, x: f64) -> f64 {
        let i = self.segment(x);
        let (x0, x1) = (self.xs[i], self.xs[i + 1]);
        let (y0, y1) = (self.ys[i], self.ys[i + 1]);
        y0 + (x - x0) * (y1 - y0) / (x1 - x0)
    }

    fn eval_nearest(&self, x: f64) -> f64 {
        let i = self.segment(x);
        let mid = 0.5 * (self.xs[i] + self.xs[i + 1]);
        if x <= mid {
            self.ys[i]
        } else {
            self.ys[i + 1]
        }
    }
}
