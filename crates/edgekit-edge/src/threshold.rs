//! Double thresholding
//!
//! Ternary classification of the thinned magnitude field: each pixel
//! becomes strong, weak or background according to two thresholds. The
//! strong/weak sentinel values chosen here are what the hysteresis
//! tracker later matches against.

use edgekit_core::Image;

/// Classify channel 0 of an image against a low and a high threshold.
///
/// Per pixel: value `>= high` maps to `strong_val`; `low <= value <
/// high` maps to `weak_val`; everything else maps to 0. Only channel 0
/// is classified; the output keeps the input's dimensions and channel
/// count, with channels beyond 0 explicitly zero-filled.
///
/// # Examples
///
/// ```
/// use edgekit_core::Image;
/// use edgekit_edge::double_threshold;
///
/// let im = Image::from_data(4, 1, 1, vec![0.0, 0.05, 0.2, 0.6]).unwrap();
/// let out = double_threshold(&im, 0.1, 0.5, 1.0, 0.25);
/// assert_eq!(out.data(), &[0.0, 0.0, 0.25, 1.0]);
/// ```
pub fn double_threshold(
    image: &Image,
    low: f32,
    high: f32,
    strong_val: f32,
    weak_val: f32,
) -> Image {
    let (w, h, c) = image.dimensions();
    let mut out = Image::new(w, h, c);

    for y in 0..h {
        for x in 0..w {
            let value = image.at(x, y, 0);
            let class = if value >= high {
                strong_val
            } else if value >= low {
                weak_val
            } else {
                0.0
            };
            out.set(x as i32, y as i32, 0, class);
        }
    }

    out
}
