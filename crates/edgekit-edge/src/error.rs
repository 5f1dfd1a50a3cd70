//! Error types for edgekit-edge

use thiserror::Error;

/// Errors that can occur in the edge-detection pipeline
#[derive(Debug, Error)]
pub enum EdgeError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] edgekit_core::Error),

    /// Filtering error from the convolution stages
    #[error("filter error: {0}")]
    Filter(#[from] edgekit_filter::FilterError),

    /// Magnitude and direction fields have different sizes
    #[error("field size mismatch: magnitude {}x{} vs direction {}x{}", .magnitude.0, .magnitude.1, .direction.0, .direction.1)]
    FieldMismatch {
        magnitude: (u32, u32),
        direction: (u32, u32),
    },
}

/// Result type for edge-detection operations
pub type EdgeResult<T> = Result<T, EdgeError>;
