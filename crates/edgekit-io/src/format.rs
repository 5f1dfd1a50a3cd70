//! Image format identification

use std::path::Path;

/// Supported image file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// edgekit's native uncompressed float format
    Raw,
    /// PNG (lossless, 8-bit)
    Png,
    /// JPEG (lossy, 8-bit)
    Jpeg,
}

impl ImageFormat {
    /// Guess a format from a file path's extension.
    ///
    /// Recognized: `bin` / `raw` (native), `png`, `jpg` / `jpeg`.
    pub fn from_path(path: impl AsRef<Path>) -> Option<ImageFormat> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "bin" | "raw" => Some(ImageFormat::Raw),
            "png" => Some(ImageFormat::Png),
            "jpg" | "jpeg" => Some(ImageFormat::Jpeg),
            _ => None,
        }
    }
}
