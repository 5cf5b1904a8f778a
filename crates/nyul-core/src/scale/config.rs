use serde::{Deserialize, Serialize};

use crate::consts::{
    DEFAULT_I_MAX, DEFAULT_I_MIN, DEFAULT_I_S_MAX, DEFAULT_I_S_MIN, DEFAULT_L_PERCENTILE,
    DEFAULT_STEP, DEFAULT_U_PERCENTILE,
};
use crate::error::{NyulError, Result};

/// Percentile-landmark configuration for learning a standard scale.
///
/// `i_min`/`i_max` bound the intensity-of-interest window; samples outside
/// it are treated as outliers. `i_s_min`/`i_s_max` are the standard-scale
/// intensities those window endpoints map onto, so they fix the range of the
/// learned scale. Interior landmarks run from `l_percentile` to
/// `u_percentile` in increments of `step` (decile formulation by default).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LandmarkConfig {
    pub i_min: f64,
    pub i_max: f64,
    pub i_s_min: f64,
    pub i_s_max: f64,
    pub l_percentile: f64,
    pub u_percentile: f64,
    pub step: f64,
}

impl Default for LandmarkConfig {
    fn default() -> Self {
        Self {
            i_min: DEFAULT_I_MIN,
            i_max: DEFAULT_I_MAX,
            i_s_min: DEFAULT_I_S_MIN,
            i_s_max: DEFAULT_I_S_MAX,
            l_percentile: DEFAULT_L_PERCENTILE,
            u_percentile: DEFAULT_U_PERCENTILE,
            step: DEFAULT_STEP,
        }
    }
}

impl LandmarkConfig {
    /// The percentile ladder: `[i_min, l, l+step, ..., u, i_max]`.
    ///
    /// Interior points follow the half-open arange rule: `l + k*step` while
    /// strictly below `u + 1`, so `u` itself is included exactly when
    /// `u - l` is a multiple of `step`. With the default configuration this
    /// is `[1, 10, 20, 30, 40, 50, 60, 70, 80, 90, 99]`.
    pub fn percentiles(&self) -> Vec<f64> {
        let mut percs = vec![self.i_min];
        if self.step > 0.0 {
            let mut p = self.l_percentile;
            while p < self.u_percentile + 1.0 {
                percs.push(p);
                p += self.step;
            }
        }
        percs.push(self.i_max);
        percs
    }

    /// Reject configurations whose ladder would not be strictly increasing
    /// inside [0, 100].
    pub fn validate(&self) -> Result<()> {
        if !(self.step > 0.0) {
            return Err(NyulError::InvalidConfig(format!(
                "step must be positive, got {}",
                self.step
            )));
        }

        let percs = self.percentiles();
        if percs[0] < 0.0 || percs[percs.len() - 1] > 100.0 {
            return Err(NyulError::InvalidConfig(format!(
                "percentile ladder must lie in [0, 100], got [{}, {}]",
                percs[0],
                percs[percs.len() - 1]
            )));
        }
        for pair in percs.windows(2) {
            if pair[1] <= pair[0] {
                return Err(NyulError::InvalidConfig(format!(
                    "percentile ladder is not strictly increasing: {} then {}",
                    pair[0], pair[1]
                )));
            }
        }
        Ok(())
    }
}
