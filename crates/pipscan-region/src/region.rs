//! Region records
//!
//! A [`Region`] summarizes one 4-connected set of equal-valued pixels in
//! a label buffer: where it was seeded, how many pixels it holds, its
//! centroid and its bounding box.

use pipscan_core::{Box, Point};

/// Smallest label assigned to a region; 0 is background and 1 marks
/// foreground that has not been labeled yet.
pub const FIRST_LABEL: u8 = 2;

/// Maximum number of regions one labeling pass can produce (labels 2..=255).
pub const MAX_REGIONS: usize = (u8::MAX - FIRST_LABEL) as usize + 1;

/// A labeled region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    /// Value written to the region's pixels
    pub label: u8,
    /// Pixel the region was grown from; refilling from here reaches the
    /// whole region
    pub seed: Point,
    /// Number of member pixels
    pub pixel_count: u32,
    /// Mean member position
    pub centroid: Point,
    /// Minimal axis-aligned box containing every member pixel
    pub bounds: Box,
}

impl Region {
    /// A region with no pixels, anchored at its seed.
    pub fn empty(label: u8, seed: Point) -> Self {
        Self {
            label,
            seed,
            pixel_count: 0,
            centroid: seed,
            bounds: Box::new_unchecked(seed.x, seed.y, 0, 0),
        }
    }

    /// Check if the region has no pixels
    pub fn is_empty(&self) -> bool {
        self.pixel_count == 0
    }

    /// Shorter bounding box side over the longer one.
    pub fn aspect_ratio(&self) -> f64 {
        self.bounds.aspect_ratio()
    }
}

/// Running sums collected while a region grows.
#[derive(Debug, Clone)]
pub(crate) struct RegionAccumulator {
    count: u32,
    sum_x: u64,
    sum_y: u64,
    min_x: u32,
    min_y: u32,
    max_x: u32,
    max_y: u32,
}

impl RegionAccumulator {
    pub(crate) fn new() -> Self {
        Self {
            count: 0,
            sum_x: 0,
            sum_y: 0,
            min_x: u32::MAX,
            min_y: u32::MAX,
            max_x: 0,
            max_y: 0,
        }
    }

    #[inline]
    pub(crate) fn add(&mut self, x: u32, y: u32) {
        self.count += 1;
        self.sum_x += x as u64;
        self.sum_y += y as u64;
        self.min_x = self.min_x.min(x);
        self.min_y = self.min_y.min(y);
        self.max_x = self.max_x.max(x);
        self.max_y = self.max_y.max(y);
    }

    /// Build the region record.
    ///
    /// The centroid is `(sum + 0.5) / count`, truncated.
    pub(crate) fn finish(self, label: u8, seed: Point) -> Region {
        if self.count == 0 {
            return Region::empty(label, seed);
        }
        let n = self.count as f64;
        let centroid = Point::new(
            ((self.sum_x as f64 + 0.5) / n) as i32,
            ((self.sum_y as f64 + 0.5) / n) as i32,
        );
        Region {
            label,
            seed,
            pixel_count: self.count,
            centroid,
            bounds: Box::from_extrema(
                self.min_x as i32,
                self.min_y as i32,
                self.max_x as i32,
                self.max_y as i32,
            ),
        }
    }
}
