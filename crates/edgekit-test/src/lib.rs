//! edgekit-test - Shared test helpers
//!
//! Synthetic image builders and comparison assertions used by the
//! integration suites of the other crates. The builders produce the
//! handful of fixtures the pipeline tests rely on: constant fields,
//! ramps and step edges.

use edgekit_core::Image;

/// Constant image: every sample set to `value`.
pub fn constant(width: u32, height: u32, channels: u32, value: f32) -> Image {
    let mut im = Image::new(width, height, channels);
    im.fill(value);
    im
}

/// Single-channel horizontal ramp from 0 at the left edge to 1 at the
/// right edge.
pub fn ramp(width: u32, height: u32) -> Image {
    let mut im = Image::new(width, height, 1);
    if width < 2 {
        return im;
    }
    for y in 0..height as i32 {
        for x in 0..width as i32 {
            im.set(x, y, 0, x as f32 / (width - 1) as f32);
        }
    }
    im
}

/// Single-channel vertical step edge: the left half is 0, the right
/// half is 1.
pub fn vertical_step(width: u32, height: u32) -> Image {
    let mut im = Image::new(width, height, 1);
    for y in 0..height {
        for x in width / 2..width {
            im.set(x as i32, y as i32, 0, 1.0);
        }
    }
    im
}

/// Largest absolute per-sample difference between two images.
///
/// # Panics
///
/// Panics if the shapes differ; shape equality is part of what the
/// calling test asserts.
pub fn max_abs_diff(a: &Image, b: &Image) -> f32 {
    assert_eq!(
        a.dimensions(),
        b.dimensions(),
        "comparing images of different shapes"
    );
    a.data()
        .iter()
        .zip(b.data())
        .map(|(x, y)| (x - y).abs())
        .fold(0.0, f32::max)
}

/// Assert that two images have the same shape and samples within `eps`.
pub fn assert_images_close(a: &Image, b: &Image, eps: f32) {
    let diff = max_abs_diff(a, b);
    assert!(diff <= eps, "images differ by {diff} (allowed {eps})");
}

/// Assert that every sample of an image is one of the given values.
pub fn assert_samples_in(im: &Image, allowed: &[f32]) {
    for (i, &v) in im.data().iter().enumerate() {
        assert!(
            allowed.contains(&v),
            "sample {i} has value {v}, expected one of {allowed:?}"
        );
    }
}
