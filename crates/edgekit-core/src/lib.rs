//! edgekit-core - The image data model for edgekit
//!
//! This crate provides the fundamental data structure used throughout the
//! edgekit image processing library:
//!
//! - [`Image`] - planar multi-channel floating-point image with strict,
//!   clamped and tolerant-write pixel access
//! - elementwise operations (shift, scale, clamp, normalization)
//! - image arithmetic ([`arith::add`] / [`arith::sub`])
//! - grayscale conversion ([`convert::rgb_to_grayscale`])
//! - raw binary serialization (see [`image::serial`])
//!
//! # Examples
//!
//! ```
//! use edgekit_core::Image;
//!
//! let mut im = Image::new(64, 48, 1);
//! im.set(10, 10, 0, 0.8);
//! assert_eq!(im.at(10, 10, 0), 0.8);
//! ```

pub mod error;
pub mod image;

pub use error::{Error, Result};
pub use image::Image;
pub use image::arith;
pub use image::convert;
