/// Default lower percentile of the intensity-of-interest window. Samples
/// below it are treated as outliers.
pub const DEFAULT_I_MIN: f64 = 1.0;

/// Default upper percentile of the intensity-of-interest window.
pub const DEFAULT_I_MAX: f64 = 99.0;

/// Default standard-scale intensity the `i_min` landmark maps onto.
pub const DEFAULT_I_S_MIN: f64 = 1.0;

/// Default standard-scale intensity the `i_max` landmark maps onto.
pub const DEFAULT_I_S_MAX: f64 = 100.0;

/// Default lowest interior percentile of the landmark ladder.
pub const DEFAULT_L_PERCENTILE: f64 = 10.0;

/// Default highest interior percentile of the landmark ladder.
pub const DEFAULT_U_PERCENTILE: f64 = 90.0;

/// Default spacing between interior percentiles (decile formulation).
pub const DEFAULT_STEP: f64 = 10.0;

/// Minimum element count (whole image) to use Rayon parallelism when
/// remapping intensities.
pub const PARALLEL_PIXEL_THRESHOLD: usize = 65_536;

/// Minimum corpus size to use Rayon parallelism across training images.
pub const PARALLEL_IMAGE_THRESHOLD: usize = 4;
