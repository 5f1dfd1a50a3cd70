//! edgekit-io - Image I/O
//!
//! Reading and writing [`Image`]s in the native raw format and through
//! compressed codecs:
//!
//! - [`raw`] - uncompressed, bit-exact float serialization
//! - [`png`] - PNG, behind the `png-format` feature (default on)
//! - [`jpeg`] - JPEG, behind the `jpeg` feature (default on)
//!
//! [`read_image`] and [`write_image`] dispatch on the file extension.
//! Codec loads follow the library's convention of discarding a lone
//! alpha channel (4 channels coerce to 3); [`read_image_forced`]
//! instead coerces to an explicit channel count.

mod coerce;
mod error;
mod format;
#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;
pub mod raw;
mod samples;

pub use coerce::coerce_channels;
pub use error::{IoError, IoResult};
pub use format::ImageFormat;

use edgekit_core::Image;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Read an image from a file, choosing the codec by extension.
///
/// Codec loads (PNG, JPEG) that decode to 4 channels are coerced to 3
/// channels, discarding alpha. Raw-format loads are returned exactly as
/// stored.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for unrecognized extensions
/// or formats whose feature is disabled, and decode/I/O errors from the
/// underlying codec.
pub fn read_image(path: impl AsRef<Path>) -> IoResult<Image> {
    read_image_inner(path.as_ref(), None)
}

/// Read an image and coerce it to an explicit channel count.
///
/// See [`coerce_channels`] for the supported targets and conversion
/// rules. Raw-format loads are coerced as well.
pub fn read_image_forced(path: impl AsRef<Path>, channels: u32) -> IoResult<Image> {
    read_image_inner(path.as_ref(), Some(channels))
}

fn read_image_inner(path: &Path, force: Option<u32>) -> IoResult<Image> {
    let fmt = ImageFormat::from_path(path).ok_or_else(|| {
        IoError::UnsupportedFormat(format!("unrecognized extension: {}", path.display()))
    })?;

    let im = match fmt {
        ImageFormat::Raw => Image::read_from_file(path)?,
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(BufReader::new(File::open(path)?))?,
        #[cfg(not(feature = "png-format"))]
        ImageFormat::Png => {
            return Err(IoError::UnsupportedFormat(
                "PNG support not enabled (feature `png-format`)".to_string(),
            ));
        }
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(BufReader::new(File::open(path)?))?,
        #[cfg(not(feature = "jpeg"))]
        ImageFormat::Jpeg => {
            return Err(IoError::UnsupportedFormat(
                "JPEG support not enabled (feature `jpeg`)".to_string(),
            ));
        }
    };

    match force {
        Some(channels) => coerce_channels(im, channels),
        None if fmt != ImageFormat::Raw && im.channels() == 4 => coerce_channels(im, 3),
        None => Ok(im),
    }
}

/// Write an image to a file, choosing the codec by extension.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] for unrecognized extensions
/// or formats whose feature is disabled, and encode/I/O errors from the
/// underlying codec.
pub fn write_image(im: &Image, path: impl AsRef<Path>) -> IoResult<()> {
    let path = path.as_ref();
    let fmt = ImageFormat::from_path(path).ok_or_else(|| {
        IoError::UnsupportedFormat(format!("unrecognized extension: {}", path.display()))
    })?;

    match fmt {
        ImageFormat::Raw => Ok(im.write_to_file(path)?),
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(im, BufWriter::new(File::create(path)?)),
        #[cfg(not(feature = "png-format"))]
        ImageFormat::Png => Err(IoError::UnsupportedFormat(
            "PNG support not enabled (feature `png-format`)".to_string(),
        )),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(im, BufWriter::new(File::create(path)?)),
        #[cfg(not(feature = "jpeg"))]
        ImageFormat::Jpeg => Err(IoError::UnsupportedFormat(
            "JPEG support not enabled (feature `jpeg`)".to_string(),
        )),
    }
}
