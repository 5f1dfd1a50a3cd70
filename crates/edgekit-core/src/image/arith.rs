//! Image arithmetic
//!
//! Elementwise addition and subtraction of same-shaped images. Shape
//! mismatches are typed errors, not panics, since callers may combine
//! images from independent sources.

use super::Image;
use crate::error::{Error, Result};

/// Elementwise sum of two images of identical shape.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if the widths, heights or channel
/// counts differ.
pub fn add(a: &Image, b: &Image) -> Result<Image> {
    check_same_shape(a, b)?;
    let data = a
        .data()
        .iter()
        .zip(b.data())
        .map(|(x, y)| x + y)
        .collect();
    Ok(Image {
        width: a.width,
        height: a.height,
        channels: a.channels,
        data,
    })
}

/// Elementwise difference `a - b` of two images of identical shape.
///
/// # Errors
///
/// Returns [`Error::ShapeMismatch`] if the widths, heights or channel
/// counts differ.
pub fn sub(a: &Image, b: &Image) -> Result<Image> {
    check_same_shape(a, b)?;
    let data = a
        .data()
        .iter()
        .zip(b.data())
        .map(|(x, y)| x - y)
        .collect();
    Ok(Image {
        width: a.width,
        height: a.height,
        channels: a.channels,
        data,
    })
}

fn check_same_shape(a: &Image, b: &Image) -> Result<()> {
    if a.dimensions() != b.dimensions() {
        return Err(Error::ShapeMismatch {
            expected: a.dimensions(),
            actual: b.dimensions(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_sub_roundtrip() {
        let a = Image::from_data(2, 1, 1, vec![1.0, 2.0]).unwrap();
        let b = Image::from_data(2, 1, 1, vec![0.5, -1.0]).unwrap();
        let sum = add(&a, &b).unwrap();
        assert_eq!(sum.data(), &[1.5, 1.0]);
        let back = sub(&sum, &b).unwrap();
        assert_eq!(back.data(), a.data());
    }

    #[test]
    fn test_shape_mismatch() {
        let a = Image::new(2, 2, 1);
        let b = Image::new(2, 2, 3);
        assert!(add(&a, &b).is_err());
        assert!(sub(&a, &b).is_err());
    }
}
