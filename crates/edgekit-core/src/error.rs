//! Error types for edgekit-core
//!
//! Provides a unified error type for all operations in the core crate.
//! Each variant captures enough context for diagnostics without exposing
//! internal implementation details.
//!
//! Bounds violations on the strict accessor are deliberately NOT part of
//! this taxonomy: they are contract violations and panic (see
//! [`Image::at`](crate::Image::at)). Out-of-range writes through
//! [`Image::set`](crate::Image::set) are defined as silent no-ops and are
//! not errors either.

use thiserror::Error;

/// edgekit error type
#[derive(Error, Debug)]
pub enum Error {
    /// Sample buffer length does not match the declared dimensions
    #[error("buffer length {actual} does not match {width}x{height}x{channels} = {expected}")]
    BufferSizeMismatch {
        width: u32,
        height: u32,
        channels: u32,
        expected: usize,
        actual: usize,
    },

    /// Channel index out of range
    #[error("channel {ch} out of range for {channels}-channel image")]
    ChannelOutOfRange { ch: u32, channels: u32 },

    /// Incompatible image shapes
    #[error("incompatible image shapes: {}x{}x{} vs {}x{}x{}", .expected.0, .expected.1, .expected.2, .actual.0, .actual.1, .actual.2)]
    ShapeMismatch {
        expected: (u32, u32, u32),
        actual: (u32, u32, u32),
    },

    /// Unsupported channel count for this operation
    #[error("unsupported channel count: {0}")]
    UnsupportedChannels(u32),

    /// Invalid parameter value
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialized image decode error
    #[error("decode error: {0}")]
    DecodeError(String),

    /// Serialized image encode error
    #[error("encode error: {0}")]
    EncodeError(String),
}

/// Result type alias for edgekit operations
pub type Result<T> = std::result::Result<T, Error>;
