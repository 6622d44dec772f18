//! pipscan-region - Region labeling and selection
//!
//! This crate provides the region processing used by the recognition
//! pipeline:
//!
//! - **Seed fill** - Breadth-first 4-connected flood fill that both labels
//!   and erases regions
//! - **Labeling** - Assigning labels 2..=255 to the regions of a binary
//!   buffer
//! - **Selection** - Removing regions that fail a predicate
//! - **Statistics** - Region sizes and intensity ranges
//! - **Rendering** - Colorized label buffers with annotations
//!
//! # Examples
//!
//! ```
//! use pipscan_core::Pix;
//! use pipscan_region::{MinSize, filter_regions, label_regions};
//!
//! let binary = Pix::from_rows(&[
//!     &[1, 1, 0, 1],
//!     &[1, 1, 0, 0],
//! ])
//! .unwrap();
//!
//! let labeling = label_regions(&binary).unwrap();
//! assert_eq!(labeling.regions.len(), 2);
//!
//! let (labels, kept) = filter_regions(labeling.pix, labeling.regions, &mut MinSize(2)).unwrap();
//! assert_eq!(kept.len(), 1);
//! assert_eq!(labels.get_pixel(3, 0), Some(0));
//! ```

pub mod error;
pub mod label;
pub mod region;
pub mod render;
pub mod seedfill;
pub mod select;
pub mod stats;

pub use error::{RegionError, RegionResult};
pub use label::{LabelStatus, Labeling, label_regions};
pub use region::{FIRST_LABEL, MAX_REGIONS, Region};
pub use render::{annotate_regions, labels_to_rgb};
pub use seedfill::{erase_region, floodfill};
pub use select::{MinSize, PipSelect, RegionPredicate, filter_regions};
pub use stats::{IntensityRange, count_label, max_region_size, region_intensity_range};
