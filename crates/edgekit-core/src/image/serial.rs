//! Raw binary serialization for Image
//!
//! Uncompressed, bit-exact persistence of the planar float buffer.
//!
//! # Format
//!
//! ```text
//! w: i32 little-endian
//! h: i32 little-endian
//! c: i32 little-endian
//! <w*h*c f32 samples, little-endian, channel-planar order>
//! ```
//!
//! The round-trip is bit-exact: every sample is written and restored by
//! its raw bit pattern, so NaN payloads and signed zeros survive.

use super::Image;
use crate::error::{Error, Result};
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Maximum sample count accepted when decoding (2^29).
const MAX_SAMPLES: u64 = 1 << 29;

/// Maximum input size in bytes accepted from a reader.
const MAX_INPUT_SIZE: u64 = 500_000_000;

impl Image {
    /// Read an image from a reader.
    pub fn read_from_reader(reader: &mut impl Read) -> Result<Self> {
        let mut buf = Vec::new();
        reader.take(MAX_INPUT_SIZE + 1).read_to_end(&mut buf)?;
        if buf.len() as u64 > MAX_INPUT_SIZE {
            return Err(Error::DecodeError(format!(
                "input too large: exceeds maximum allowed size of {MAX_INPUT_SIZE} bytes"
            )));
        }
        Self::read_from_bytes(&buf)
    }

    /// Read an image from a file.
    pub fn read_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let file = std::fs::File::open(path.as_ref())?;
        Self::read_from_reader(&mut BufReader::new(file))
    }

    /// Read an image from a byte slice.
    ///
    /// Trailing bytes beyond the declared payload are ignored, matching
    /// stream semantics.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DecodeError`] for a truncated header or payload,
    /// negative dimensions, or an implausibly large sample count.
    pub fn read_from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < 12 {
            return Err(Error::DecodeError(format!(
                "header truncated: need 12 bytes but only have {}",
                data.len()
            )));
        }

        let w = i32::from_le_bytes([data[0], data[1], data[2], data[3]]);
        let h = i32::from_le_bytes([data[4], data[5], data[6], data[7]]);
        let c = i32::from_le_bytes([data[8], data[9], data[10], data[11]]);
        if w < 0 || h < 0 || c < 0 {
            return Err(Error::DecodeError(format!(
                "invalid dimensions: w={w}, h={h}, c={c}"
            )));
        }
        let (w, h, c) = (w as u32, h as u32, c as u32);

        let nsamples = w as u64 * h as u64 * c as u64;
        if nsamples > MAX_SAMPLES {
            return Err(Error::DecodeError(format!(
                "image too large: {nsamples} samples exceeds maximum {MAX_SAMPLES}"
            )));
        }

        let payload_end = 12 + (nsamples as usize) * 4;
        if data.len() < payload_end {
            return Err(Error::DecodeError(format!(
                "sample data truncated: need {payload_end} bytes but only have {}",
                data.len()
            )));
        }

        let samples: Vec<f32> = data[12..payload_end]
            .chunks_exact(4)
            .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect();

        Ok(Image {
            width: w,
            height: h,
            channels: c,
            data: samples,
        })
    }

    /// Write the image to a writer.
    pub fn write_to_writer(&self, writer: &mut impl Write) -> Result<()> {
        writer.write_all(&(self.width as i32).to_le_bytes())?;
        writer.write_all(&(self.height as i32).to_le_bytes())?;
        writer.write_all(&(self.channels as i32).to_le_bytes())?;
        for &val in &self.data {
            writer.write_all(&val.to_le_bytes())?;
        }
        Ok(())
    }

    /// Write the image to a file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())?;
        let mut writer = BufWriter::new(file);
        self.write_to_writer(&mut writer)?;
        Ok(writer.flush()?)
    }

    /// Write the image to a byte vector.
    pub fn write_to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::with_capacity(12 + self.data.len() * 4);
        self.write_to_writer(&mut buf)?;
        Ok(buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip_bit_exact() {
        let mut im = Image::new(4, 3, 2);
        im.set(0, 0, 0, 1.5);
        im.set(3, 2, 1, -42.0);
        im.set(1, 1, 0, f32::MIN_POSITIVE);
        im.set(2, 0, 1, -0.0);

        let bytes = im.write_to_bytes().unwrap();
        assert_eq!(bytes.len(), 12 + 4 * 3 * 2 * 4);
        let restored = Image::read_from_bytes(&bytes).unwrap();

        assert_eq!(restored.dimensions(), (4, 3, 2));
        for (a, b) in im.data().iter().zip(restored.data()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_file_roundtrip() {
        let mut im = Image::new(3, 2, 1);
        im.set(2, 1, 0, 7.5);

        let dir = std::env::temp_dir().join("edgekit_test_serial");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("im.bin");

        im.write_to_file(&path).unwrap();
        let restored = Image::read_from_file(&path).unwrap();
        assert_eq!(im, restored);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn test_truncated_header() {
        assert!(Image::read_from_bytes(b"short").is_err());
    }

    #[test]
    fn test_truncated_payload() {
        let im = Image::new(4, 4, 1);
        let mut bytes = im.write_to_bytes().unwrap();
        bytes.truncate(bytes.len() - 1);
        assert!(Image::read_from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_negative_dimension_rejected() {
        let mut bytes = Vec::new();
        bytes.extend((-1i32).to_le_bytes());
        bytes.extend(2i32.to_le_bytes());
        bytes.extend(1i32.to_le_bytes());
        assert!(Image::read_from_bytes(&bytes).is_err());
    }

    #[test]
    fn test_zero_sized_image() {
        let im = Image::new(0, 5, 3);
        let bytes = im.write_to_bytes().unwrap();
        assert_eq!(bytes.len(), 12);
        let restored = Image::read_from_bytes(&bytes).unwrap();
        assert_eq!(restored.dimensions(), (0, 5, 3));
    }
}
