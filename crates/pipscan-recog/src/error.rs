//! Error types for pipscan-recog

use thiserror::Error;

/// Errors that can occur during recognition
#[derive(Debug, Error)]
pub enum RecogError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] pipscan_core::Error),

    /// Morphology error
    #[error("morphology error: {0}")]
    Morph(#[from] pipscan_morph::MorphError),

    /// Region processing error
    #[error("region error: {0}")]
    Region(#[from] pipscan_region::RegionError),

    /// Input is not an 8-bit intensity image
    #[error("invalid buffer type: expected 8 bpp, got {actual} bpp")]
    InvalidBufferType { actual: u32 },

    /// Invalid parameters
    #[error("invalid parameters: {0}")]
    InvalidParameters(String),
}

/// Result type for recognition operations
pub type RecogResult<T> = Result<T, RecogError>;
