use ndarray::{Array, Dimension};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::consts::PARALLEL_IMAGE_THRESHOLD;
use crate::error::{NyulError, Result};
use crate::interp::{Interp1d, InterpKind};
use crate::landmarks::foreground_samples;
use crate::stats::{percentile_of_sorted, sort_intensities};

use super::config::LandmarkConfig;
use super::StandardScale;

/// Learn the standard scale from a training corpus.
///
/// Each image contributes its foreground landmarks, linearly rescaled so the
/// image's own `i_min`/`i_max` percentiles land on `i_s_min`/`i_s_max`. The
/// scale is the element-wise mean of those contributions.
///
/// Fails on an empty corpus, on any image whose foreground mask is empty
/// (constant image), and on any image whose intensity-of-interest window has
/// zero width. No partial results are produced.
pub fn learn_standard_scale<D: Dimension>(
    images: &[Array<f64, D>],
    config: &LandmarkConfig,
) -> Result<StandardScale> {
    config.validate()?;
    if images.is_empty() {
        return Err(NyulError::EmptyCorpus);
    }

    let percs = config.percentiles();
    debug!(
        corpus = images.len(),
        landmarks = percs.len(),
        "learning standard scale"
    );

    let per_image: Vec<Vec<f64>> = if images.len() >= PARALLEL_IMAGE_THRESHOLD {
        images
            .par_iter()
            .map(|img| rescaled_landmarks(img, &percs, config))
            .collect::<Result<_>>()?
    } else {
        images
            .iter()
            .map(|img| rescaled_landmarks(img, &percs, config))
            .collect::<Result<_>>()?
    };

    // Sum in corpus order so floating-point accumulation is reproducible
    // regardless of the parallel gate above.
    let mut sum = vec![0.0f64; percs.len()];
    for landmarks in &per_image {
        for (acc, v) in sum.iter_mut().zip(landmarks) {
            *acc += v;
        }
    }

    let n = images.len() as f64;
    info!(corpus = images.len(), "standard scale learned");

    Ok(StandardScale {
        values: sum.into_iter().map(|s| s / n).collect(),
        percentiles: percs,
    })
}

/// One image's foreground landmarks, rescaled onto the standard intensity
/// frame.
fn rescaled_landmarks<D: Dimension>(
    image: &Array<f64, D>,
    percs: &[f64],
    config: &LandmarkConfig,
) -> Result<Vec<f64>> {
    let mut foreground = foreground_samples(image);
    if foreground.is_empty() {
        return Err(NyulError::EmptyForeground);
    }
    sort_intensities(&mut foreground);

    let landmarks: Vec<f64> = percs
        .iter()
        .map(|&p| percentile_of_sorted(&foreground, p))
        .collect();

    let min_p = percentile_of_sorted(&foreground, config.i_min);
    let max_p = percentile_of_sorted(&foreground, config.i_max);

    // Two-point linear map min_p -> i_s_min, max_p -> i_s_max; degenerate
    // when the intensity-of-interest window collapses to a point.
    let rescale = Interp1d::new(
        vec![min_p, max_p],
        vec![config.i_s_min, config.i_s_max],
        InterpKind::Linear,
    )?;

    Ok(landmarks.iter().map(|&l| rescale.eval(l)).collect())
}
