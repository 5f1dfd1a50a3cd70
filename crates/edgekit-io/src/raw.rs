//! Native raw format support
//!
//! Thin wrappers over the core type's binary serialization (see
//! [`edgekit_core::image::serial`]): a 12-byte header of `w`, `h`, `c`
//! as little-endian `i32`, followed by the planar `f32` samples. Fast,
//! uncompressed and bit-exact.

use crate::IoResult;
use edgekit_core::Image;
use std::io::{Read, Write};

/// Read an image in the native raw format.
pub fn read_raw<R: Read>(mut reader: R) -> IoResult<Image> {
    Ok(Image::read_from_reader(&mut reader)?)
}

/// Write an image in the native raw format.
pub fn write_raw<W: Write>(im: &Image, mut writer: W) -> IoResult<()> {
    Ok(im.write_to_writer(&mut writer)?)
}
