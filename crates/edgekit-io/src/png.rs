//! PNG image format support
//!
//! Decodes 8-bit PNG images into the planar float model and encodes
//! planar float images back to 8-bit PNG. Only 8-bit depths are
//! handled; 16-bit, packed sub-byte and palette images are reported as
//! unsupported rather than silently converted.

use crate::{IoError, IoResult, samples};
use edgekit_core::Image;
use ::png::{BitDepth, ColorType, Decoder, Encoder};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image.
///
/// The decoded 8-bit interleaved samples are converted to planar `f32`
/// scaled into [0, 1]. Alpha, when present, is kept as a trailing
/// channel; discarding it is the caller's policy (see
/// [`read_image`](crate::read_image)).
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Image> {
    let decoder = Decoder::new(reader);
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {e}")))?;

    let info = reader.info();
    let width = info.width;
    let height = info.height;
    let color_type = info.color_type;
    let bit_depth = info.bit_depth;

    let channels = match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::Eight) => 1,
        (ColorType::GrayscaleAlpha, BitDepth::Eight) => 2,
        (ColorType::Rgb, BitDepth::Eight) => 3,
        (ColorType::Rgba, BitDepth::Eight) => 4,
        _ => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG format: {color_type:?} {bit_depth:?}"
            )));
        }
    };

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {e}")))?;
    let data = &buf[..output_info.buffer_size()];

    Ok(samples::from_interleaved_u8(width, height, channels, data))
}

/// Write an image as an 8-bit PNG.
///
/// Samples are clamped to [0, 1] and rounded to 8 bits. The channel
/// count selects the PNG color type: 1 grayscale, 2 grayscale+alpha,
/// 3 RGB, 4 RGBA.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for any other channel count
/// and [`IoError::EncodeError`] if the encoder rejects the image (for
/// example, zero-sized dimensions).
pub fn write_png<W: Write>(im: &Image, writer: W) -> IoResult<()> {
    let color_type = match im.channels() {
        1 => ColorType::Grayscale,
        2 => ColorType::GrayscaleAlpha,
        3 => ColorType::Rgb,
        4 => ColorType::Rgba,
        c => {
            return Err(IoError::UnsupportedFormat(format!(
                "cannot encode a {c}-channel image as PNG"
            )));
        }
    };

    let mut encoder = Encoder::new(writer, im.width(), im.height());
    encoder.set_color(color_type);
    encoder.set_depth(BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {e}")))?;

    let data = samples::to_interleaved_u8(im);
    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {e}")))?;

    Ok(())
}
