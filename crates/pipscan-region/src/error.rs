//! Error types for pipscan-region

use pipscan_core::PixelDepth;
use thiserror::Error;

/// Errors that can occur during region processing operations
#[derive(Debug, Error)]
pub enum RegionError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pipscan_core::Error),

    /// Unsupported pixel depth for this operation
    #[error("unsupported depth: expected {expected}, got {actual}")]
    UnsupportedDepth { expected: &'static str, actual: u32 },

    /// Invalid seed position
    #[error("invalid seed position: ({x}, {y})")]
    InvalidSeed { x: u32, y: u32 },

    /// Input to labeling holds a value other than 0 or 1
    #[error("not a binary image: value {value} at ({x}, {y})")]
    NotBinary { value: u8, x: u32, y: u32 },

    /// More regions than distinct labels
    #[error("label capacity exceeded: at most {max} regions per pass")]
    LabelCapacityExceeded { max: usize },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for region operations
pub type RegionResult<T> = Result<T, RegionError>;

/// Check that a buffer is 8 bpp.
pub(crate) fn check_8bpp(depth: PixelDepth) -> RegionResult<()> {
    if depth != PixelDepth::Bit8 {
        return Err(RegionError::UnsupportedDepth {
            expected: "8-bpp",
            actual: depth.bits(),
        });
    }
    Ok(())
}
