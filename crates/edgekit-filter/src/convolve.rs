//! Convolution engine
//!
//! Applies an arbitrary kernel image to an input image with
//! replicate-edge border handling: every sample read outside the image
//! goes through the clamped accessor, so borders repeat their nearest
//! edge value. There is no zero padding and no reflection.

use crate::{FilterError, FilterResult, kernel};
use edgekit_core::Image;

/// Convolve an image with a kernel.
///
/// The kernel anchor is its cell at `(filter.width() / 2,
/// filter.height() / 2)`; an even-sized kernel therefore anchors toward
/// its lower/left cell rather than symmetrically.
///
/// The filter must have either 1 channel (the same kernel is applied to
/// every input channel) or exactly as many channels as the input (one
/// kernel per channel).
///
/// With `preserve_channels` set, the output keeps the input's channel
/// count and each channel is convolved independently. Without it, the
/// per-channel responses are summed in channel order into a
/// single-channel output; this is how a color image collapses to one
/// gradient-style response field.
///
/// # Errors
///
/// Returns [`FilterError::ChannelMismatch`] if the filter channel count
/// is neither 1 nor the image's channel count.
///
/// # Examples
///
/// ```
/// use edgekit_core::Image;
/// use edgekit_filter::convolve;
///
/// let mut im = Image::new(8, 8, 1);
/// im.set(4, 4, 0, 1.0);
///
/// // A 1x1 identity kernel returns the input unchanged.
/// let identity = Image::from_data(1, 1, 1, vec![1.0]).unwrap();
/// let out = convolve(&im, &identity, true).unwrap();
/// assert_eq!(out, im);
/// ```
pub fn convolve(image: &Image, filter: &Image, preserve_channels: bool) -> FilterResult<Image> {
    if filter.channels() != 1 && filter.channels() != image.channels() {
        return Err(FilterError::ChannelMismatch {
            filter: filter.channels(),
            image: image.channels(),
        });
    }

    let (w, h, c) = image.dimensions();
    let kw = filter.width();
    let kh = filter.height();
    let kcx = (kw / 2) as i32;
    let kcy = (kh / 2) as i32;
    let shared_kernel = filter.channels() == 1;

    let out_channels = if preserve_channels { c } else { 1 };
    let mut out = Image::new(w, h, out_channels);

    for y in 0..h as i32 {
        for x in 0..w as i32 {
            if preserve_channels {
                for ch in 0..c {
                    let kch = if shared_kernel { 0 } else { ch };
                    let mut sum = 0.0f32;
                    for ky in 0..kh {
                        for kx in 0..kw {
                            let sx = x + kx as i32 - kcx;
                            let sy = y + ky as i32 - kcy;
                            sum += filter.at(kx, ky, kch) * image.clamped(sx, sy, ch as i32);
                        }
                    }
                    out.set(x, y, ch as i32, sum);
                }
            } else {
                // Channels are reduced in fixed order so the float
                // summation is bit-reproducible.
                let mut sum = 0.0f32;
                for ch in 0..c {
                    let kch = if shared_kernel { 0 } else { ch };
                    for ky in 0..kh {
                        for kx in 0..kw {
                            let sx = x + kx as i32 - kcx;
                            let sy = y + ky as i32 - kcy;
                            sum += filter.at(kx, ky, kch) * image.clamped(sx, sy, ch as i32);
                        }
                    }
                }
                out.set(x, y, 0, sum);
            }
        }
    }

    Ok(out)
}

/// Smooth an image with a Gaussian kernel of the given standard
/// deviation.
///
/// The per-channel responses are summed into a single-channel output,
/// matching the front step of the edge-detection pipeline.
///
/// # Errors
///
/// Returns [`FilterError::InvalidKernel`] if `sigma` is not positive
/// and finite.
pub fn smooth(image: &Image, sigma: f32) -> FilterResult<Image> {
    let filter = kernel::gaussian(sigma)?;
    convolve(image, &filter, false)
}
