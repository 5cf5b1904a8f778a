//! Learning and applying the standard intensity scale.

pub mod apply;
pub mod config;
pub mod learn;

use serde::{Deserialize, Serialize};

use crate::error::{NyulError, Result};

/// A learned standard scale together with the percentile ladder that
/// produced it.
///
/// The two arrays are aligned index-by-index and meaningless apart, so they
/// travel (and serialize) as a unit. Consumed read-only by application.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandardScale {
    /// Corpus-averaged rescaled landmark intensities.
    pub values: Vec<f64>,
    /// Percentile ladder the landmarks were taken at.
    pub percentiles: Vec<f64>,
}

impl StandardScale {
    /// Number of landmarks in the scale.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub(crate) fn check(&self) -> Result<()> {
        if self.values.len() != self.percentiles.len() {
            return Err(NyulError::InvalidConfig(format!(
                "standard scale holds {} values but {} percentiles",
                self.values.len(),
                self.percentiles.len()
            )));
        }
        if self.values.len() < 2 {
            return Err(NyulError::InvalidConfig(
                "standard scale needs at least two landmarks".to_string(),
            ));
        }
        Ok(())
    }
}
