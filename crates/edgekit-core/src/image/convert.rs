//! Grayscale conversion
//!
//! Conversions between 3-channel RGB and single-channel grayscale
//! images. RGB collapses to luma with the usual Rec. 601 weights; the
//! inverse spreads a grayscale plane across three channels with
//! caller-chosen weights.

use super::Image;
use crate::error::{Error, Result};

/// Luma weights for RGB -> grayscale (Rec. 601).
const LUMA_R: f32 = 0.299;
const LUMA_G: f32 = 0.587;
const LUMA_B: f32 = 0.114;

/// Collapse a 3-channel RGB image to a single luma channel.
///
/// # Errors
///
/// Returns [`Error::UnsupportedChannels`] if the input does not have
/// exactly 3 channels.
pub fn rgb_to_grayscale(im: &Image) -> Result<Image> {
    if im.channels() != 3 {
        return Err(Error::UnsupportedChannels(im.channels()));
    }
    let plane = (im.width() as usize) * (im.height() as usize);
    let data = im.data();
    let (r, rest) = data.split_at(plane);
    let (g, b) = rest.split_at(plane);
    let gray = (0..plane)
        .map(|i| LUMA_R * r[i] + LUMA_G * g[i] + LUMA_B * b[i])
        .collect();
    Ok(Image {
        width: im.width,
        height: im.height,
        channels: 1,
        data: gray,
    })
}

/// Spread a grayscale image across three channels, scaling each channel
/// by the given weight.
///
/// # Errors
///
/// Returns [`Error::UnsupportedChannels`] if the input is not a
/// 1-channel image.
pub fn grayscale_to_rgb(im: &Image, r: f32, g: f32, b: f32) -> Result<Image> {
    if im.channels() != 1 {
        return Err(Error::UnsupportedChannels(im.channels()));
    }
    let plane = im.data();
    let mut data = Vec::with_capacity(plane.len() * 3);
    for &w in [r, g, b].iter() {
        data.extend(plane.iter().map(|v| v * w));
    }
    Ok(Image {
        width: im.width,
        height: im.height,
        channels: 3,
        data,
    })
}
