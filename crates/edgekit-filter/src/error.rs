//! Error types for edgekit-filter

use thiserror::Error;

/// Errors that can occur during filtering operations
#[derive(Debug, Error)]
pub enum FilterError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] edgekit_core::Error),

    /// Filter channel count is neither 1 nor the image's channel count
    #[error("filter has {filter} channels but image has {image}; expected 1 or {image}")]
    ChannelMismatch { filter: u32, image: u32 },

    /// Invalid kernel parameters
    #[error("invalid kernel: {0}")]
    InvalidKernel(String),
}

/// Result type for filter operations
pub type FilterResult<T> = Result<T, FilterError>;
