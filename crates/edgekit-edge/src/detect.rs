//! Whole-pipeline edge detection
//!
//! Chains the four pipeline stages behind one call: Gaussian smoothing,
//! gradient computation, non-maximum suppression, double thresholding
//! and hysteresis tracking. Each stage consumes the previous stage's
//! output and returns a fresh image; nothing is mutated in place.

use crate::{EdgeResult, double_threshold, edge_track, gradient, non_maximum_suppression};
use edgekit_core::Image;
use edgekit_filter::smooth;

/// Parameters for [`detect_edges`].
///
/// The defaults are the reference parameters the pipeline was tuned
/// with: sigma 1.4, thresholds 0.03 / 0.17 on the normalized magnitude,
/// strong/weak sentinels 1.0 / 0.25.
#[derive(Debug, Clone, Copy)]
pub struct EdgeParams {
    /// Standard deviation of the smoothing Gaussian
    pub sigma: f32,
    /// Low threshold on normalized gradient magnitude
    pub low: f32,
    /// High threshold on normalized gradient magnitude
    pub high: f32,
    /// Sentinel value assigned to strong classifications
    pub strong_val: f32,
    /// Sentinel value assigned to weak classifications
    pub weak_val: f32,
}

impl Default for EdgeParams {
    fn default() -> Self {
        EdgeParams {
            sigma: 1.4,
            low: 0.03,
            high: 0.17,
            strong_val: 1.0,
            weak_val: 0.25,
        }
    }
}

/// Run the full edge-detection pipeline on an image.
///
/// Stages, in order: Gaussian smoothing (channel-summed), gradient
/// magnitude/direction, non-maximum suppression, double thresholding,
/// hysteresis tracking. The result is a single-channel binary edge map
/// whose samples are exactly 0.0 or 1.0.
///
/// # Errors
///
/// Propagates kernel and convolution failures from the smoothing and
/// gradient stages.
///
/// # Examples
///
/// ```
/// use edgekit_core::Image;
/// use edgekit_edge::{EdgeParams, detect_edges};
///
/// let mut im = Image::new(16, 16, 1);
/// for y in 0..16 {
///     for x in 8..16 {
///         im.set(x, y, 0, 1.0);
///     }
/// }
/// let edges = detect_edges(&im, &EdgeParams::default()).unwrap();
/// assert!(edges.data().iter().all(|&v| v == 0.0 || v == 1.0));
/// ```
pub fn detect_edges(image: &Image, params: &EdgeParams) -> EdgeResult<Image> {
    let smoothed = smooth(image, params.sigma)?;
    let grad = gradient(&smoothed)?;
    let thinned = non_maximum_suppression(&grad.magnitude, &grad.direction)?;
    let classified = double_threshold(
        &thinned,
        params.low,
        params.high,
        params.strong_val,
        params.weak_val,
    );
    Ok(edge_track(&classified, params.weak_val, params.strong_val))
}
