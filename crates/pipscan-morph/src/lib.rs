//! pipscan-morph - Binary morphology
//!
//! This crate provides the morphological operations used to clean binary
//! masks before region labeling:
//!
//! - Structuring elements (SEL) for defining operation neighborhoods
//! - Erosion, dilation, opening and closing with an arbitrary SEL
//! - Separable brick (rectangle) variants running in O(1) per pixel
//!
//! Binary images are 8-bit `Pix` values where any nonzero sample is
//! foreground. Results always contain only 0 and 1. Pixels outside the
//! image count as background.

pub mod binary;
mod error;
pub mod sel;

pub use error::{MorphError, MorphResult};
pub use sel::{Sel, SelElement};

pub use binary::{close, close_brick, dilate, dilate_brick, erode, erode_brick, open, open_brick};
