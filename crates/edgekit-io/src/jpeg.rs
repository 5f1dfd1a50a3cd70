//! JPEG image format support
//!
//! Reads JPEG images with the `jpeg-decoder` crate and writes them with
//! `jpeg-encoder`. Grayscale and RGB are supported; CMYK and 16-bit
//! luma streams are reported as unsupported.

use crate::{IoError, IoResult, samples};
use edgekit_core::Image;
use jpeg_decoder::PixelFormat;
use std::io::{Read, Write};

/// Encoding quality used when writing. Matches the library's historical
/// save path, which prioritized fidelity over size.
const JPEG_QUALITY: u8 = 100;

/// Read a JPEG image.
///
/// Decoded 8-bit interleaved samples are converted to planar `f32`
/// scaled into [0, 1]: single-channel for grayscale streams, 3-channel
/// for RGB.
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<Image> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let pixels = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {e}")))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG stream carries no image info".to_string()))?;

    let channels = match info.pixel_format {
        PixelFormat::L8 => 1,
        PixelFormat::RGB24 => 3,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {other:?}"
            )));
        }
    };

    Ok(samples::from_interleaved_u8(
        info.width as u32,
        info.height as u32,
        channels,
        &pixels,
    ))
}

/// Write an image as a JPEG.
///
/// Samples are clamped to [0, 1] and rounded to 8 bits before encoding.
/// 1-channel images encode as luma, 3-channel as RGB.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for other channel counts and
/// [`IoError::EncodeError`] if either dimension exceeds the JPEG limit
/// of 65535 or the encoder fails.
pub fn write_jpeg<W: Write>(im: &Image, mut writer: W) -> IoResult<()> {
    let color_type = match im.channels() {
        1 => jpeg_encoder::ColorType::Luma,
        3 => jpeg_encoder::ColorType::Rgb,
        c => {
            return Err(IoError::UnsupportedFormat(format!(
                "cannot encode a {c}-channel image as JPEG"
            )));
        }
    };

    if im.width() > u16::MAX as u32 || im.height() > u16::MAX as u32 {
        return Err(IoError::EncodeError(format!(
            "image too large for JPEG: {}x{}",
            im.width(),
            im.height()
        )));
    }

    let data = samples::to_interleaved_u8(im);
    let mut jpeg_buf = Vec::new();
    let encoder = jpeg_encoder::Encoder::new(&mut jpeg_buf, JPEG_QUALITY);
    encoder
        .encode(&data, im.width() as u16, im.height() as u16, color_type)
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {e}")))?;

    writer.write_all(&jpeg_buf)?;
    Ok(())
}
