//! Convolution kernels
//!
//! Factories for the fixed and parametric kernels consumed by the
//! convolution engine. A kernel is an ordinary [`Image`], typically
//! small, odd-dimensioned and single-channel; the engine broadcasts a
//! 1-channel kernel across every input channel.

use crate::{FilterError, FilterResult};
use edgekit_core::Image;

/// Create a box (averaging) kernel of the given size.
///
/// All entries are `1 / size^2`, so the kernel sums to 1 and preserves
/// mean brightness.
///
/// # Errors
///
/// Returns [`FilterError::InvalidKernel`] if `size` is 0.
pub fn box_kernel(size: u32) -> FilterResult<Image> {
    if size == 0 {
        return Err(FilterError::InvalidKernel("box size must be >= 1".into()));
    }
    let n = (size as usize) * (size as usize);
    let value = 1.0 / (n as f32);
    Ok(fixed(size, size, vec![value; n]))
}

/// Create a Gaussian kernel from a standard deviation.
///
/// The kernel dimension is the smallest odd integer `>= 6 * sigma`, so
/// the footprint covers three standard deviations on each side of the
/// center. The entry at offset (dx, dy) from the center is
/// `exp(-(dx^2 + dy^2) / (2 sigma^2))`; the kernel is then renormalized
/// so its entries sum to 1.
///
/// # Errors
///
/// Returns [`FilterError::InvalidKernel`] if `sigma` is not a positive
/// finite number.
pub fn gaussian(sigma: f32) -> FilterResult<Image> {
    if sigma <= 0.0 || !sigma.is_finite() {
        return Err(FilterError::InvalidKernel(format!(
            "sigma must be positive and finite, got {sigma}"
        )));
    }

    let mut size = (6.0 * sigma).ceil() as u32;
    if size % 2 == 0 {
        size += 1;
    }
    let center = (size / 2) as i32;
    let two_sigma_sq = 2.0 * sigma * sigma;

    let mut data = Vec::with_capacity((size as usize) * (size as usize));
    for y in 0..size as i32 {
        for x in 0..size as i32 {
            let dx = x - center;
            let dy = y - center;
            data.push((-((dx * dx + dy * dy) as f32) / two_sigma_sq).exp());
        }
    }

    let mut kernel = fixed(size, size, data);
    kernel.l1_normalize();
    Ok(kernel)
}

/// Sobel kernel for horizontal gradients (responds to vertical edges).
pub fn sobel_horizontal() -> Image {
    fixed(
        3,
        3,
        vec![
            -1.0, 0.0, 1.0, //
            -2.0, 0.0, 2.0, //
            -1.0, 0.0, 1.0,
        ],
    )
}

/// Sobel kernel for vertical gradients; the transpose of
/// [`sobel_horizontal`].
pub fn sobel_vertical() -> Image {
    fixed(
        3,
        3,
        vec![
            -1.0, -2.0, -1.0, //
            0.0, 0.0, 0.0, //
            1.0, 2.0, 1.0,
        ],
    )
}

/// Sharpening kernel. Sums to 1, so overall brightness is preserved.
pub fn sharpen() -> Image {
    fixed(
        3,
        3,
        vec![
            0.0, -1.0, 0.0, //
            -1.0, 5.0, -1.0, //
            0.0, -1.0, 0.0,
        ],
    )
}

/// Emboss kernel.
pub fn emboss() -> Image {
    fixed(
        3,
        3,
        vec![
            -2.0, -1.0, 0.0, //
            -1.0, 1.0, 1.0, //
            0.0, 1.0, 2.0,
        ],
    )
}

/// Highpass kernel. Sums to 0, so flat regions map to zero response.
pub fn highpass() -> Image {
    fixed(
        3,
        3,
        vec![
            0.0, -1.0, 0.0, //
            -1.0, 4.0, -1.0, //
            0.0, -1.0, 0.0,
        ],
    )
}

/// Build a single-channel kernel image from row-major values.
fn fixed(width: u32, height: u32, data: Vec<f32>) -> Image {
    Image::from_data(width, height, 1, data).expect("kernel buffer matches its dimensions")
}
