//! Image resizing
//!
//! Nearest-neighbor and bilinear resampling. Sub-pixel reads use the
//! center-offset coordinate convention `src = (dst + 0.5) * scale - 0.5`
//! and clamp at the borders, consistent with the replicate-edge policy
//! used everywhere else in the library.

use crate::{TransformError, TransformResult};
use edgekit_core::Image;

/// Sample an image at a fractional position using the nearest pixel.
///
/// The position is rounded to the nearest integer coordinate and read
/// with replicate-edge clamping.
pub fn sample_nearest(im: &Image, x: f32, y: f32, ch: u32) -> f32 {
    im.clamped(x.round() as i32, y.round() as i32, ch as i32)
}

/// Sample an image at a fractional position with bilinear interpolation.
///
/// Blends the four surrounding pixels by their fractional coverage;
/// all four reads are clamped at the borders.
pub fn sample_bilinear(im: &Image, x: f32, y: f32, ch: u32) -> f32 {
    let x0 = x.floor();
    let y0 = y.floor();
    let fx = x - x0;
    let fy = y - y0;
    let (x0, y0) = (x0 as i32, y0 as i32);
    let ch = ch as i32;

    let top_left = im.clamped(x0, y0, ch);
    let top_right = im.clamped(x0 + 1, y0, ch);
    let bottom_left = im.clamped(x0, y0 + 1, ch);
    let bottom_right = im.clamped(x0 + 1, y0 + 1, ch);

    let top = top_left * (1.0 - fx) + top_right * fx;
    let bottom = bottom_left * (1.0 - fx) + bottom_right * fx;
    top * (1.0 - fy) + bottom * fy
}

/// Resize an image with nearest-neighbor sampling.
///
/// # Errors
///
/// Returns [`TransformError::InvalidSize`] if either target dimension
/// is 0.
pub fn resize_nearest(im: &Image, width: u32, height: u32) -> TransformResult<Image> {
    resize_with(im, width, height, sample_nearest)
}

/// Resize an image with bilinear interpolation.
///
/// # Errors
///
/// Returns [`TransformError::InvalidSize`] if either target dimension
/// is 0.
pub fn resize_bilinear(im: &Image, width: u32, height: u32) -> TransformResult<Image> {
    resize_with(im, width, height, sample_bilinear)
}

fn resize_with(
    im: &Image,
    width: u32,
    height: u32,
    sample: fn(&Image, f32, f32, u32) -> f32,
) -> TransformResult<Image> {
    if width == 0 || height == 0 {
        return Err(TransformError::InvalidSize { width, height });
    }

    let scale_x = im.width() as f32 / width as f32;
    let scale_y = im.height() as f32 / height as f32;
    let mut out = Image::new(width, height, im.channels());

    for ch in 0..im.channels() {
        for y in 0..height {
            for x in 0..width {
                let sx = (x as f32 + 0.5) * scale_x - 0.5;
                let sy = (y as f32 + 0.5) * scale_y - 0.5;
                out.set(x as i32, y as i32, ch as i32, sample(im, sx, sy, ch));
            }
        }
    }

    Ok(out)
}
