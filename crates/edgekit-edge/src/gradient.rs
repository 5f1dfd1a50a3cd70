//! Gradient computation
//!
//! Derives per-pixel gradient magnitude and direction from a pair of
//! Sobel convolutions. Both convolutions run with channel summing, so a
//! multi-channel input collapses to one response field per axis.

use crate::EdgeResult;
use edgekit_core::Image;
use edgekit_filter::{convolve, kernel};

/// Gradient magnitude and direction fields.
///
/// Both are single-channel images with the input's width and height.
/// After [`gradient`], magnitude is normalized to [0, 1]; direction is
/// in radians in (-pi, pi].
#[derive(Debug, Clone)]
pub struct GradientField {
    /// Gradient strength per pixel
    pub magnitude: Image,
    /// Gradient orientation per pixel, `atan2(gy, gx)`
    pub direction: Image,
}

/// Raw Sobel gradient response, without normalization.
///
/// Convolves the input with the horizontal and vertical Sobel kernels
/// (channel-summed), then combines them per pixel:
/// magnitude `sqrt(gx^2 + gy^2)`, direction `atan2(gy, gx)`.
///
/// # Errors
///
/// Propagates convolution failures.
pub fn sobel_response(image: &Image) -> EdgeResult<GradientField> {
    let gx = convolve(image, &kernel::sobel_horizontal(), false)?;
    let gy = convolve(image, &kernel::sobel_vertical(), false)?;

    let (w, h, _) = image.dimensions();
    let mut magnitude = Image::new(w, h, 1);
    let mut direction = Image::new(w, h, 1);

    for y in 0..h {
        for x in 0..w {
            let dx = gx.at(x, y, 0);
            let dy = gy.at(x, y, 0);
            magnitude.set(x as i32, y as i32, 0, (dx * dx + dy * dy).sqrt());
            direction.set(x as i32, y as i32, 0, dy.atan2(dx));
        }
    }

    Ok(GradientField {
        magnitude,
        direction,
    })
}

/// Compute the normalized gradient of an image.
///
/// The Sobel magnitude field is feature-normalized into [0, 1]: the
/// global minimum maps to 0 and the maximum to 1. A constant input
/// (zero magnitude range) yields an all-zero magnitude field rather
/// than a division by zero, so the output never contains NaN.
///
/// # Errors
///
/// Propagates convolution failures.
///
/// # Examples
///
/// ```
/// use edgekit_core::Image;
/// use edgekit_edge::gradient;
///
/// let mut im = Image::new(8, 8, 1);
/// for y in 0..8 {
///     im.set(4, y, 0, 1.0); // vertical line
/// }
/// let grad = gradient(&im).unwrap();
/// assert_eq!(grad.magnitude.dimensions(), (8, 8, 1));
/// ```
pub fn gradient(image: &Image) -> EdgeResult<GradientField> {
    let mut grad = sobel_response(image)?;
    grad.magnitude.feature_normalize();
    Ok(grad)
}
