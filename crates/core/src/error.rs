use thiserror::Error;

/// Errors raised by image construction and resizing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResizeError {
    /// The source image has no pixels to sample from.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: usize, height: usize },

    /// Zero sub-samples per axis would divide by zero.
    #[error("invalid sample count: {0}")]
    InvalidSampleCount(u32),

    /// Pixel buffer length does not match `width * height`.
    #[error("size mismatch: expected {expected}, got {actual}")]
    SizeMismatch { expected: usize, actual: usize },
}
