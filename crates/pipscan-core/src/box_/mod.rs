//! Box - Rectangle regions
//!
//! Axis-aligned rectangles used as region bounding boxes and clip
//! rectangles.

use crate::error::{Error, Result};

/// A rectangle region
///
/// A simple Copy type since it's small and frequently copied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Box {
    /// Left x coordinate
    pub x: i32,
    /// Top y coordinate
    pub y: i32,
    /// Width
    pub w: i32,
    /// Height
    pub h: i32,
}

impl Box {
    /// Create a new box
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is negative.
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Result<Self> {
        if w < 0 || h < 0 {
            return Err(Error::InvalidParameter(format!(
                "box dimensions must be non-negative: w={}, h={}",
                w, h
            )));
        }
        Ok(Self { x, y, w, h })
    }

    /// Create a box without validation
    pub const fn new_unchecked(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// Create the minimal box containing the inclusive extrema
    /// `[min_x, max_x] x [min_y, max_y]`.
    pub const fn from_extrema(min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> Self {
        Self {
            x: min_x,
            y: min_y,
            w: max_x - min_x + 1,
            h: max_y - min_y + 1,
        }
    }

    /// Get the right x coordinate (exclusive)
    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    /// Get the bottom y coordinate (exclusive)
    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// Get the area
    #[inline]
    pub fn area(&self) -> i64 {
        self.w as i64 * self.h as i64
    }

    /// Check if the box is empty (zero area)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.w <= 0 || self.h <= 0
    }

    /// Check if a point is inside the box
    #[inline]
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Compute the intersection of two boxes
    pub fn intersect(&self, other: &Box) -> Option<Box> {
        let x = self.x.max(other.x);
        let y = self.y.max(other.y);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());

        if x < right && y < bottom {
            Some(Box {
                x,
                y,
                w: right - x,
                h: bottom - y,
            })
        } else {
            None
        }
    }

    /// Clip the box to an image of the given size.
    ///
    /// Returns `None` if nothing of the box lies inside the image.
    pub fn clip_to(&self, width: u32, height: u32) -> Option<Box> {
        self.intersect(&Box::new_unchecked(0, 0, width as i32, height as i32))
    }

    /// Ratio of the shorter side to the longer side, in `[0, 1]`.
    ///
    /// A square gives 1.0; an empty box gives 0.0.
    pub fn aspect_ratio(&self) -> f64 {
        if self.is_empty() {
            return 0.0;
        }
        let (short, long) = if self.w < self.h {
            (self.w, self.h)
        } else {
            (self.h, self.w)
        };
        short as f64 / long as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_box_creation() {
        let b = Box::new(10, 20, 30, 40).unwrap();
        assert_eq!(b.right(), 40);
        assert_eq!(b.bottom(), 60);
        assert_eq!(b.area(), 1200);
        assert!(Box::new(0, 0, -1, 5).is_err());
    }

    #[test]
    fn test_from_extrema() {
        let b = Box::from_extrema(3, 4, 3, 4);
        assert_eq!(b, Box::new_unchecked(3, 4, 1, 1));
        let b = Box::from_extrema(0, 2, 9, 5);
        assert_eq!((b.w, b.h), (10, 4));
    }

    #[test]
    fn test_contains_point() {
        let b = Box::new_unchecked(2, 2, 3, 3);
        assert!(b.contains_point(2, 2));
        assert!(b.contains_point(4, 4));
        assert!(!b.contains_point(5, 4));
        assert!(!b.contains_point(1, 3));
    }

    #[test]
    fn test_intersect_and_clip() {
        let a = Box::new_unchecked(0, 0, 10, 10);
        let b = Box::new_unchecked(5, 5, 10, 10);
        assert_eq!(a.intersect(&b), Some(Box::new_unchecked(5, 5, 5, 5)));
        assert_eq!(a.intersect(&Box::new_unchecked(20, 20, 1, 1)), None);

        assert_eq!(
            Box::new_unchecked(-3, 4, 10, 10).clip_to(5, 8),
            Some(Box::new_unchecked(0, 4, 5, 4))
        );
        assert_eq!(Box::new_unchecked(6, 0, 2, 2).clip_to(5, 5), None);
    }

    #[test]
    fn test_aspect_ratio() {
        assert_eq!(Box::new_unchecked(0, 0, 10, 10).aspect_ratio(), 1.0);
        assert!((Box::new_unchecked(0, 0, 10, 12).aspect_ratio() - 0.8333).abs() < 1e-3);
        assert_eq!(Box::new_unchecked(0, 0, 20, 10).aspect_ratio(), 0.5);
        assert_eq!(Box::new_unchecked(0, 0, 0, 10).aspect_ratio(), 0.0);
    }
}
