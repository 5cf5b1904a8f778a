//! Percentile statistics over intensity samples.

/// Sort samples into ascending order. NaNs sort last under `total_cmp`.
pub fn sort_intensities(samples: &mut [f64]) {
    samples.sort_by(|a, b| a.total_cmp(b));
}

/// The `p`-th percentile of pre-sorted samples.
///
/// Uses the fractional-rank rule: the percentile sits at rank
/// `p/100 * (n-1)` and is linearly interpolated between the two nearest
/// order statistics. `p` is clamped to [0, 100].
pub fn percentile_of_sorted(sorted: &[f64], p: f64) -> f64 {
    debug_assert!(!sorted.is_empty(), "percentile of empty sample set");
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let rank = p.clamp(0.0, 100.0) / 100.0 * (n - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;

    if lo == hi {
        sorted[lo]
    } else {
        let w = rank - lo as f64;
        sorted[lo] * (1.0 - w) + sorted[hi] * w
    }
}
