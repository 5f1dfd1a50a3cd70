//! edgekit-filter - Convolution engine and kernel bank
//!
//! This crate provides:
//!
//! - Convolution with arbitrary kernel images ([`convolve`]), with
//!   replicate-edge border handling and a channel-reduction policy
//! - Gaussian smoothing ([`smooth`])
//! - Kernel factories ([`kernel`]): box, Gaussian, Sobel, sharpen,
//!   emboss, highpass

pub mod convolve;
mod error;
pub mod kernel;

pub use convolve::{convolve, smooth};
pub use error::{FilterError, FilterResult};
