//! Convolution regression test
//!
//! Covers the engine's contract surface: identity convolution, channel
//! policies, border replication and the kernel bank's numeric
//! guarantees.

use edgekit_core::Image;
use edgekit_filter::{FilterError, convolve, kernel, smooth};
use edgekit_test::{assert_images_close, constant, ramp, vertical_step};

#[test]
fn convolve_reg() {
    let im = ramp(9, 6);

    // --- Identity: 1x1 kernel of 1.0 returns the input unchanged ---
    let identity = Image::from_data(1, 1, 1, vec![1.0]).unwrap();
    let out = convolve(&im, &identity, true).unwrap();
    assert_eq!(out, im);

    // Same with channel summing on a single-channel input.
    let out = convolve(&im, &identity, false).unwrap();
    assert_eq!(out, im);

    // --- Box blur preserves a constant field exactly (replicate border) ---
    let flat = constant(7, 7, 3, 0.31);
    let box3 = kernel::box_kernel(3).unwrap();
    let blurred = convolve(&flat, &box3, true).unwrap();
    assert_images_close(&blurred, &flat, 1e-6);

    // --- Channel summing collapses a 3-channel image to one response ---
    let summed = convolve(&flat, &box3, false).unwrap();
    assert_eq!(summed.channels(), 1);
    assert_images_close(&summed, &constant(7, 7, 1, 0.93), 1e-5);

    // --- Kernel channel policy ---
    let bad_filter = Image::new(3, 3, 2);
    match convolve(&flat, &bad_filter, true) {
        Err(FilterError::ChannelMismatch { filter: 2, image: 3 }) => {}
        other => panic!("expected ChannelMismatch, got {other:?}"),
    }

    // --- Smoothing a step keeps the output within the input range ---
    let step = vertical_step(16, 8);
    let smoothed = smooth(&step, 1.4).unwrap();
    assert_eq!(smoothed.dimensions(), (16, 8, 1));
    assert!(
        smoothed
            .data()
            .iter()
            .all(|&v| (-1e-6..=1.0 + 1e-6).contains(&v))
    );
}

#[test]
fn kernel_bank_reg() {
    // Gaussian: entries sum to 1 within 1e-6 for a sweep of sigmas.
    for &sigma in &[0.3f32, 0.5, 1.0, 1.4, 2.5, 4.0] {
        let k = kernel::gaussian(sigma).unwrap();
        assert_eq!(k.width() % 2, 1, "gaussian width must be odd");
        assert_eq!(k.width(), k.height());
        let sum: f32 = k.data().iter().sum();
        assert!((sum - 1.0).abs() < 1e-6, "sigma {sigma}: sum {sum}");
    }

    // Box: n^2 entries of 1/n^2.
    let b = kernel::box_kernel(5).unwrap();
    assert_eq!(b.len(), 25);
    assert!(b.data().iter().all(|&v| (v - 0.04).abs() < 1e-7));

    // Sobel pair: transposes of each other, zero-sum.
    let gx = kernel::sobel_horizontal();
    let gy = kernel::sobel_vertical();
    assert_eq!(gx.at(0, 0, 0), -1.0);
    assert_eq!(gx.at(2, 1, 0), 2.0);
    for y in 0..3 {
        for x in 0..3 {
            assert_eq!(gx.at(x, y, 0), gy.at(y, x, 0));
        }
    }

    // Sharpen preserves brightness (sum 1); highpass does not (sum 0).
    let sharpen_sum: f32 = kernel::sharpen().data().iter().sum();
    let highpass_sum: f32 = kernel::highpass().data().iter().sum();
    assert_eq!(sharpen_sum, 1.0);
    assert_eq!(highpass_sum, 0.0);

    // Highpass of any constant field is zero.
    let flat = constant(6, 6, 1, 0.8);
    let response = convolve(&flat, &kernel::highpass(), true).unwrap();
    assert_images_close(&response, &Image::new(6, 6, 1), 1e-6);
}
