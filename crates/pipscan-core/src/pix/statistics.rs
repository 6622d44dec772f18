//! Image statistics
//!
//! Dynamic range and value counts over 8-bit images.

use super::Pix;
use crate::error::{Error, Result};

/// The `[min, max]` sample interval of an 8-bit image or sub-image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DynamicRange {
    /// Smallest sample
    pub min: u8,
    /// Largest sample
    pub max: u8,
}

impl DynamicRange {
    /// Width of the interval (`max - min`).
    #[inline]
    pub fn span(&self) -> u8 {
        self.max - self.min
    }

    /// Gray value at `percent` of the dynamic range.
    ///
    /// Computes `min + percent / 100 * (max - min)`, truncated toward zero.
    /// Evaluated in integer arithmetic so the truncation is exact.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if `percent > 100`.
    pub fn value_at_percent(&self, percent: u8) -> Result<u8> {
        if percent > 100 {
            return Err(Error::InvalidParameter(format!(
                "percentage must be in [0, 100], got {percent}"
            )));
        }
        let value = self.min as u32 + percent as u32 * self.span() as u32 / 100;
        Ok(value as u8)
    }
}

impl Pix {
    /// Compute the minimum and maximum sample of an 8-bit image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] for non-8-bit images.
    pub fn dynamic_range(&self) -> Result<DynamicRange> {
        self.require_8bpp()?;
        let (min, max) = self
            .data()
            .iter()
            .fold((u8::MAX, u8::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        Ok(DynamicRange { min, max })
    }

    /// Count the pixels of an 8-bit image equal to `val`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] for non-8-bit images.
    pub fn count_pixels_with_value(&self, val: u8) -> Result<u32> {
        self.require_8bpp()?;
        Ok(self.data().iter().filter(|&&v| v == val).count() as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PixelDepth;

    #[test]
    fn test_dynamic_range() {
        let pix = Pix::from_rows(&[&[30, 40, 50], &[200, 10, 90]]).unwrap();
        let range = pix.dynamic_range().unwrap();
        assert_eq!(range, DynamicRange { min: 10, max: 200 });
        assert_eq!(range.span(), 190);
    }

    #[test]
    fn test_constant_image_range() {
        let mut pm = Pix::new(4, 4, PixelDepth::Bit8).unwrap().to_mut();
        pm.set_all(77);
        let pix: Pix = pm.into();
        let range = pix.dynamic_range().unwrap();
        assert_eq!(range.min, 77);
        assert_eq!(range.max, 77);
        assert_eq!(range.value_at_percent(50).unwrap(), 77);
    }

    #[test]
    fn test_value_at_percent() {
        let range = DynamicRange { min: 10, max: 210 };
        assert_eq!(range.value_at_percent(0).unwrap(), 10);
        assert_eq!(range.value_at_percent(100).unwrap(), 210);
        assert_eq!(range.value_at_percent(70).unwrap(), 150);
        // 0 + 0.05 * 255 = 12.75 truncates to 12
        let full = DynamicRange { min: 0, max: 255 };
        assert_eq!(full.value_at_percent(5).unwrap(), 12);
        assert!(full.value_at_percent(101).is_err());
    }

    #[test]
    fn test_value_at_percent_exact_products() {
        // Exact products stay exact: 29% of 100 is 29, not 28
        let range = DynamicRange { min: 0, max: 100 };
        assert_eq!(range.value_at_percent(29).unwrap(), 29);
        assert_eq!(range.value_at_percent(57).unwrap(), 57);
        let offset = DynamicRange { min: 20, max: 120 };
        assert_eq!(offset.value_at_percent(29).unwrap(), 49);
    }

    #[test]
    fn test_count_pixels_with_value() {
        let pix = Pix::from_rows(&[&[1, 0, 1], &[1, 2, 0]]).unwrap();
        assert_eq!(pix.count_pixels_with_value(1).unwrap(), 3);
        assert_eq!(pix.count_pixels_with_value(9).unwrap(), 0);
    }

    #[test]
    fn test_rgb_rejected() {
        let pix = Pix::new(2, 2, PixelDepth::Bit32).unwrap();
        assert!(pix.dynamic_range().is_err());
    }
}
