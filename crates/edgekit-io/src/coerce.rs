//! Channel-count coercion for codec loads
//!
//! Codecs deliver whatever channel layout the file carries; callers
//! often need a fixed layout instead (grayscale input to the edge
//! pipeline, RGB for display). Coercion runs after decoding, on the
//! planar float image.

use crate::{IoError, IoResult};
use edgekit_core::{Image, convert};

/// Coerce an image to a target channel count.
///
/// Supported targets are 1 (grayscale), 3 (RGB) and 4 (RGBA), from any
/// source layout of 1-4 channels:
///
/// - to 1: RGB(A) collapses to luma, gray+alpha drops alpha
/// - to 3: grayscale replicates, RGBA drops alpha
/// - to 4: an opaque alpha channel is appended (gray+alpha keeps its
///   alpha)
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for unsupported target or
/// source channel counts.
pub fn coerce_channels(im: Image, target: u32) -> IoResult<Image> {
    let source = im.channels();
    if source == target {
        return Ok(im);
    }
    if !(1..=4).contains(&source) || !matches!(target, 1 | 3 | 4) {
        return Err(IoError::UnsupportedFormat(format!(
            "cannot coerce a {source}-channel image to {target} channels"
        )));
    }

    // Split off color and alpha parts of the source.
    let color = match source {
        1 | 3 => im.clone(),
        2 => im.channel(0)?,
        _ => {
            let mut rgb = Image::new(im.width(), im.height(), 3);
            for ch in 0..3 {
                rgb.set_channel(ch, &im.channel(ch)?)?;
            }
            rgb
        }
    };
    let alpha = match source {
        2 => Some(im.channel(1)?),
        4 => Some(im.channel(3)?),
        _ => None,
    };

    let result = match target {
        1 => match color.channels() {
            1 => color,
            _ => convert::rgb_to_grayscale(&color)?,
        },
        3 => match color.channels() {
            3 => color,
            _ => convert::grayscale_to_rgb(&color, 1.0, 1.0, 1.0)?,
        },
        _ => {
            let rgb = match color.channels() {
                3 => color,
                _ => convert::grayscale_to_rgb(&color, 1.0, 1.0, 1.0)?,
            };
            let mut rgba = Image::new(im.width(), im.height(), 4);
            for ch in 0..3 {
                rgba.set_channel(ch, &rgb.channel(ch)?)?;
            }
            let alpha = alpha.unwrap_or_else(|| {
                let mut opaque = Image::new(im.width(), im.height(), 1);
                opaque.fill(1.0);
                opaque
            });
            rgba.set_channel(3, &alpha)?;
            rgba
        }
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_to_rgb_drops_alpha() {
        let mut im = Image::new(2, 2, 4);
        im.fill(0.5);
        im.set(0, 0, 3, 0.0);
        let rgb = coerce_channels(im, 3).unwrap();
        assert_eq!(rgb.channels(), 3);
        assert_eq!(rgb.at(0, 0, 0), 0.5);
    }

    #[test]
    fn test_gray_to_rgb_replicates() {
        let im = Image::from_data(2, 1, 1, vec![0.2, 0.8]).unwrap();
        let rgb = coerce_channels(im, 3).unwrap();
        for ch in 0..3 {
            assert_eq!(rgb.at(0, 0, ch), 0.2);
            assert_eq!(rgb.at(1, 0, ch), 0.8);
        }
    }

    #[test]
    fn test_rgb_to_gray_luma() {
        let im = Image::from_data(1, 1, 3, vec![1.0, 1.0, 1.0]).unwrap();
        let gray = coerce_channels(im, 1).unwrap();
        assert_eq!(gray.channels(), 1);
        assert!((gray.at(0, 0, 0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_gray_to_rgba_opaque_alpha() {
        let im = Image::from_data(1, 1, 1, vec![0.4]).unwrap();
        let rgba = coerce_channels(im, 4).unwrap();
        assert_eq!(rgba.at(0, 0, 3), 1.0);
        assert_eq!(rgba.at(0, 0, 1), 0.4);
    }

    #[test]
    fn test_gray_alpha_to_rgba_keeps_alpha() {
        let im = Image::from_data(1, 1, 2, vec![0.4, 0.7]).unwrap();
        let rgba = coerce_channels(im, 4).unwrap();
        assert!((rgba.at(0, 0, 3) - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_identity_untouched() {
        let im = Image::from_data(2, 1, 3, vec![0.0; 6]).unwrap();
        let out = coerce_channels(im.clone(), 3).unwrap();
        assert_eq!(out, im);
    }

    #[test]
    fn test_unsupported_target() {
        let im = Image::new(2, 2, 3);
        assert!(coerce_channels(im, 2).is_err());
    }
}
