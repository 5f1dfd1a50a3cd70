//! edgekit - Image processing toolkit centered on edge detection
//!
//! edgekit provides a planar floating-point image model, a generic 2D
//! convolution engine and a Canny-style edge-detection pipeline, plus
//! the surrounding pieces a working toolkit needs: kernel factories,
//! resizing, raw and codec I/O.
//!
//! # Overview
//!
//! - [`Image`] - the data model: multi-channel `f32` samples in
//!   channel-planar layout, with strict, clamped and tolerant-write
//!   accessors
//! - [`filter`] - kernel bank and convolution with replicate-edge
//!   borders
//! - [`edge`] - gradient, non-maximum suppression, double thresholding
//!   and hysteresis tracking
//! - [`transform`] - nearest/bilinear resizing
//! - [`io`] - raw binary persistence plus PNG/JPEG codecs
//!
//! # Example
//!
//! ```
//! use edgekit::Image;
//! use edgekit::edge::{EdgeParams, detect_edges};
//!
//! let mut im = Image::new(32, 32, 1);
//! for y in 0..32 {
//!     for x in 16..32 {
//!         im.set(x, y, 0, 1.0);
//!     }
//! }
//!
//! let edges = detect_edges(&im, &EdgeParams::default()).unwrap();
//! assert!(edges.data().iter().all(|&v| v == 0.0 || v == 1.0));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use edgekit_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use edgekit_edge as edge;
pub use edgekit_filter as filter;
pub use edgekit_io as io;
pub use edgekit_transform as transform;
