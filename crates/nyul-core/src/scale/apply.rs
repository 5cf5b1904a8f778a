use ndarray::{Array, Dimension};
use tracing::debug;

use crate::consts::PARALLEL_PIXEL_THRESHOLD;
use crate::error::Result;
use crate::interp::{Interp1d, InterpKind};
use crate::landmarks::{foreground_samples, get_landmarks};

use super::StandardScale;

/// Normalize an image onto a learned standard scale.
///
/// The image's own foreground landmarks (taken at `scale.percentiles`, the
/// exact ladder used at learning time) form the interpolation domain and
/// `scale.values` the range. Every element of the raw input, foreground and
/// background alike, is mapped through that function; shape is preserved and
/// out-of-range intensities extrapolate rather than fail.
///
/// The extracted landmarks must be strictly increasing; inversions and
/// zero-width domains (near-constant images) are rejected before any output
/// is produced.
pub fn apply_standard_scale<D: Dimension>(
    image: &Array<f64, D>,
    scale: &StandardScale,
    kind: InterpKind,
) -> Result<Array<f64, D>> {
    scale.check()?;

    let foreground = foreground_samples(image);
    let landmarks = get_landmarks(&foreground, &scale.percentiles)?;
    let map = Interp1d::new(landmarks, scale.values.clone(), kind)?;

    debug!(elements = image.len(), kind = ?kind, "applying standard scale");

    let mut normalized = image.clone();
    if normalized.len() >= PARALLEL_PIXEL_THRESHOLD {
        normalized.par_mapv_inplace(|v| map.eval(v));
    } else {
        normalized.mapv_inplace(|v| map.eval(v));
    }
    Ok(normalized)
}
