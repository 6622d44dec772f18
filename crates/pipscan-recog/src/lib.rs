//! pipscan-recog - Dice and pip recognition
//!
//! Segments intensity images into labeled regions and selects the ones of
//! interest:
//!
//! - [`classify_objects`] - Bright objects, keeping those at least half
//!   the size of the largest
//! - [`classify_features`] - Dark, roughly square features with a very
//!   dark core (hysteresis thresholding)
//! - [`locate_dice`] - Both stages combined: dice in a scene and the
//!   pips on each die
//!
//! # Examples
//!
//! ```
//! use pipscan_core::{Pix, PixelDepth};
//! use pipscan_recog::{ObjectOptions, classify_objects};
//!
//! let mut pm = Pix::new(20, 20, PixelDepth::Bit8).unwrap().into_mut();
//! for y in 4..14 {
//!     for x in 4..14 {
//!         pm.set_pixel(x, y, 200).unwrap();
//!     }
//! }
//! let pix: Pix = pm.into();
//!
//! let result = classify_objects(&pix, &ObjectOptions::default()).unwrap();
//! assert_eq!(result.regions.len(), 1);
//! assert_eq!(result.regions[0].pixel_count, 100);
//! ```

pub mod classify;
pub mod dice;
mod error;
pub mod threshold;

pub use classify::{
    Classification, FeatureOptions, ObjectOptions, classify_features, classify_objects,
};
pub use dice::{DiceOptions, DiceReport, DieFace, locate_dice};
pub use error::{RecogError, RecogResult};
pub use pipscan_region::erase_region;
pub use threshold::value_in_dynamic_range;
