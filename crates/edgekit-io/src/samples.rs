//! Sample layout conversion between codecs and the planar float model
//!
//! Codecs exchange interleaved 8-bit samples (HWC order); the core
//! image model is channel-planar `f32` in [0, 1]. These two conversions
//! are shared by every codec module.

use edgekit_core::Image;

/// Convert interleaved 8-bit samples to a planar float image.
///
/// Each 8-bit sample is scaled by `1/255` into [0, 1].
pub(crate) fn from_interleaved_u8(width: u32, height: u32, channels: u32, data: &[u8]) -> Image {
    let mut im = Image::new(width, height, channels);
    let plane = (width as usize) * (height as usize);
    let c = channels as usize;
    let out = im.data_mut();
    for ch in 0..c {
        for i in 0..plane {
            out[ch * plane + i] = data[i * c + ch] as f32 / 255.0;
        }
    }
    im
}

/// Convert a planar float image to interleaved 8-bit samples.
///
/// Samples are clamped to [0, 1], scaled by 255 and rounded.
pub(crate) fn to_interleaved_u8(im: &Image) -> Vec<u8> {
    let plane = (im.width() as usize) * (im.height() as usize);
    let c = im.channels() as usize;
    let data = im.data();
    let mut out = vec![0u8; plane * c];
    for ch in 0..c {
        for i in 0..plane {
            let v = data[ch * plane + i].clamp(0.0, 1.0);
            out[i * c + ch] = (v * 255.0).round() as u8;
        }
    }
    out
}
