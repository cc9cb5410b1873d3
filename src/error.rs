use alloc::string::String;
use enough::StopReason;

/// Errors from pixel buffer operations and TGA encoding.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum TgaError {
    #[error("coordinate ({x}, {y}) is outside the {width}x{height} image")]
    OutOfBounds {
        x: u16,
        y: u16,
        width: u16,
        height: u16,
    },

    #[cfg(feature = "std")]
    #[error("could not save image at {path:?}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[cfg(feature = "std")]
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("image dimensions must be non-zero, got {width}x{height}")]
    ZeroDimensions { width: u16, height: u16 },

    #[error("pixel count mismatch: expected {expected}, got {actual}")]
    BufferSize { expected: usize, actual: usize },

    #[error("dimensions too large: {width}x{height}")]
    DimensionsTooLarge { width: u64, height: u64 },

    #[error("limit exceeded: {0}")]
    LimitExceeded(String),

    #[error("operation cancelled")]
    Cancelled(StopReason),
}

impl From<StopReason> for TgaError {
    fn from(r: StopReason) -> Self {
        TgaError::Cancelled(r)
    }
}
