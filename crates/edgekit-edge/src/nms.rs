//! Non-maximum suppression
//!
//! Thins the gradient magnitude field to one-pixel-wide ridges by
//! keeping only pixels that are local maxima along their gradient
//! direction.

use crate::{EdgeError, EdgeResult};
use edgekit_core::Image;
use std::f32::consts::{FRAC_PI_4, PI};

/// Suppress non-maximal magnitude samples along the gradient direction.
///
/// The direction at each pixel is shifted into [0, pi) by adding pi when
/// negative, then quantized with `round(direction / (pi/4))` into a
/// bucket in {0..4}. Buckets 0 and 4 both denote a horizontal gradient
/// and share the same neighbor pair:
///
/// | bucket | neighbors compared |
/// |--------|--------------------|
/// | 0 or 4 | (-1, 0), (+1, 0)   |
/// | 1      | (-1,-1), (+1,+1)   |
/// | 2      | ( 0,-1), ( 0,+1)   |
/// | 3      | (+1,-1), (-1,+1)   |
///
/// The quantization boundaries matter for neighbor selection, so the
/// shift-then-round-divide formula is kept exactly as stated; do not
/// substitute a different angle-bucketing scheme.
///
/// Neighbors are read with replicate-edge clamping. The output sample
/// equals the input magnitude where it is `>=` both neighbors, else 0,
/// so the result is pointwise bounded by the magnitude field.
///
/// # Errors
///
/// Returns [`EdgeError::FieldMismatch`] if the two fields differ in
/// width or height.
pub fn non_maximum_suppression(magnitude: &Image, direction: &Image) -> EdgeResult<Image> {
    if magnitude.width() != direction.width() || magnitude.height() != direction.height() {
        return Err(EdgeError::FieldMismatch {
            magnitude: (magnitude.width(), magnitude.height()),
            direction: (direction.width(), direction.height()),
        });
    }

    let (w, h, _) = magnitude.dimensions();
    let mut out = Image::new(w, h, 1);

    for y in 0..h {
        for x in 0..w {
            let mut dir = direction.at(x, y, 0);
            if dir < 0.0 {
                dir += PI;
            }

            let bucket = (dir / FRAC_PI_4).round().abs() as i32;
            let ((dx1, dy1), (dx2, dy2)) = match bucket {
                0 | 4 => ((-1, 0), (1, 0)),
                1 => ((-1, -1), (1, 1)),
                2 => ((0, -1), (0, 1)),
                3 => ((1, -1), (-1, 1)),
                _ => unreachable!("direction bucket out of range: {bucket}"),
            };

            let (xi, yi) = (x as i32, y as i32);
            let neighbor1 = magnitude.clamped(xi + dx1, yi + dy1, 0);
            let neighbor2 = magnitude.clamped(xi + dx2, yi + dy2, 0);

            let value = magnitude.at(x, y, 0);
            if value >= neighbor1 && value >= neighbor2 {
                out.set(xi, yi, 0, value);
            }
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    /// Magnitude field with a single horizontal ridge at the given row.
    fn ridge_row(w: u32, h: u32, row: i32) -> Image {
        let mut mag = Image::new(w, h, 1);
        for x in 0..w as i32 {
            mag.set(x, row, 0, 1.0);
            mag.set(x, row - 1, 0, 0.4);
            mag.set(x, row + 1, 0, 0.4);
        }
        mag
    }

    #[test]
    fn test_vertical_gradient_keeps_ridge() {
        // Gradient pointing up/down (bucket 2) compares (0,-1) and
        // (0,+1): the ridge row survives, its flanks are suppressed.
        let mag = ridge_row(5, 5, 2);
        let mut dir = Image::new(5, 5, 1);
        dir.fill(FRAC_PI_2);
        let out = non_maximum_suppression(&mag, &dir).unwrap();
        for x in 0..5 {
            assert_eq!(out.at(x, 2, 0), 1.0);
            assert_eq!(out.at(x, 1, 0), 0.0);
            assert_eq!(out.at(x, 3, 0), 0.0);
        }
    }

    #[test]
    fn test_horizontal_gradient_keeps_plateau() {
        // Gradient along the ridge (bucket 0) compares left/right
        // neighbors, which are all equal on the ridge; the >= comparison
        // keeps the whole plateau.
        let mag = ridge_row(5, 5, 2);
        let dir = Image::new(5, 5, 1); // all zeros: horizontal
        let out = non_maximum_suppression(&mag, &dir).unwrap();
        for x in 0..5 {
            assert_eq!(out.at(x, 2, 0), 1.0);
        }
    }

    #[test]
    fn test_negative_direction_shifted() {
        // -pi/2 shifts to pi/2: same neighbor pair as bucket 2.
        let mag = ridge_row(5, 5, 2);
        let mut dir = Image::new(5, 5, 1);
        dir.fill(-FRAC_PI_2);
        let out = non_maximum_suppression(&mag, &dir).unwrap();
        for x in 0..5 {
            assert_eq!(out.at(x, 2, 0), 1.0);
            assert_eq!(out.at(x, 1, 0), 0.0);
        }
    }

    #[test]
    fn test_output_bounded_by_magnitude() {
        let mut mag = Image::new(7, 7, 1);
        let mut dir = Image::new(7, 7, 1);
        for y in 0..7 {
            for x in 0..7 {
                mag.set(x, y, 0, ((x * 13 + y * 7) % 11) as f32 / 11.0);
                dir.set(x, y, 0, ((x + y) as f32 / 14.0 - 0.5) * 2.0 * PI);
            }
        }
        let out = non_maximum_suppression(&mag, &dir).unwrap();
        for y in 0..7 {
            for x in 0..7 {
                assert!(out.at(x, y, 0) <= mag.at(x, y, 0));
            }
        }
    }

    #[test]
    fn test_field_mismatch_rejected() {
        let mag = Image::new(4, 4, 1);
        let dir = Image::new(5, 4, 1);
        assert!(matches!(
            non_maximum_suppression(&mag, &dir),
            Err(EdgeError::FieldMismatch { .. })
        ));
    }

    #[test]
    fn test_diagonal_bucket_neighbors() {
        // Direction pi/4 (bucket 1) compares (-1,-1) and (+1,+1).
        let mut mag = Image::new(3, 3, 1);
        mag.set(1, 1, 0, 0.5);
        mag.set(0, 0, 0, 0.9); // beats the center along the diagonal
        let mut dir = Image::new(3, 3, 1);
        dir.fill(FRAC_PI_4);
        let out = non_maximum_suppression(&mag, &dir).unwrap();
        assert_eq!(out.at(1, 1, 0), 0.0);
        // the corner itself survives: its clamped neighbors replicate
        // edge samples that never exceed it
        assert_eq!(out.at(0, 0, 0), 0.9);
    }
}
