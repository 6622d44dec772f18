//! pipscan - Dice and pip detection for Rust
//!
//! Segments 8-bit intensity images into labeled regions and classifies
//! them: bright objects such as dice, and small dark features such as the
//! pips on a die.
//!
//! # Overview
//!
//! - Image I/O (PNM, PNG, JPEG decoding to gray)
//! - Binary morphology (erosion, dilation, opening, closing)
//! - Region labeling, filtering, statistics and rendering
//! - Recognition pipelines built from the above
//!
//! # Example
//!
//! ```
//! use pipscan::{DiceOptions, Pix, PixelDepth, locate_dice};
//!
//! let pix = Pix::new(64, 48, PixelDepth::Bit8).unwrap();
//! let report = locate_dice(&pix, &DiceOptions::default()).unwrap();
//! assert!(report.faces.is_empty());
//! ```

// Re-export core types (primary data structures used everywhere)
pub use pipscan_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use pipscan_io as io;
pub use pipscan_morph as morph;
pub use pipscan_recog as recog;
pub use pipscan_region as region;

// The recognition entry points
pub use pipscan_recog::{
    Classification, DiceOptions, DiceReport, DieFace, FeatureOptions, ObjectOptions,
    classify_features, classify_objects, erase_region, locate_dice,
};
