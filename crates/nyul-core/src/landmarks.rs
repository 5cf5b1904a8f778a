//! Landmark extraction and the shared foreground heuristic.

use ndarray::{Array, Dimension};

use crate::error::{NyulError, Result};
use crate::stats;

/// Samples strictly above the image's own mean intensity.
///
/// Coarse background suppression: brightness alone decides membership, no
/// segmentation. Learning and application must use the identical rule.
pub fn foreground_samples<D: Dimension>(image: &Array<f64, D>) -> Vec<f64> {
    match image.mean() {
        Some(mean) => image.iter().copied().filter(|&v| v > mean).collect(),
        None => Vec::new(),
    }
}

/// Intensity values at the given percentiles of `samples`.
///
/// `samples` are expected to be already masked; no foreground logic lives
/// here. Inputs are not mutated.
pub fn get_landmarks(samples: &[f64], percentiles: &[f64]) -> Result<Vec<f64>> {
    if samples.is_empty() {
        return Err(NyulError::EmptyForeground);
    }

    let mut sorted = samples.to_vec();
    stats::sort_intensities(&mut sorted);

    Ok(percentiles
        .iter()
        .map(|&p| stats::percentile_of_sorted(&sorted, p))
        .collect())
}
