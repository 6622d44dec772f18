//! Rectangular clipping
//!
//! Extracting sub-images, e.g. the region of interest given by a
//! bounding box.

use super::{Pix, PixData};
use crate::box_::Box;
use crate::error::{Error, Result};
use std::sync::Arc;

impl Pix {
    /// Extract the part of the image covered by `region`.
    ///
    /// The box is first clipped to the image. The result has the clipped
    /// box's dimensions and the same depth as `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidParameter`] if the box does not overlap the
    /// image.
    pub fn clip_rectangle(&self, region: &Box) -> Result<Pix> {
        let clipped = region
            .clip_to(self.width(), self.height())
            .ok_or_else(|| {
                Error::InvalidParameter(format!(
                    "box {:?} does not overlap {}x{} image",
                    region,
                    self.width(),
                    self.height()
                ))
            })?;

        let bpp = self.depth().bytes_per_pixel();
        let row_len = clipped.w as usize * bpp;
        let mut data = Vec::with_capacity(row_len * clipped.h as usize);
        for y in clipped.y..clipped.bottom() {
            let start = clipped.x as usize * bpp;
            data.extend_from_slice(&self.row(y as u32)[start..start + row_len]);
        }

        Ok(Pix {
            inner: Arc::new(PixData {
                width: clipped.w as u32,
                height: clipped.h as u32,
                depth: self.depth(),
                informat: self.informat(),
                data,
            }),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PixelDepth;

    fn ramp(width: u32, height: u32) -> Pix {
        let data = (0..width * height).map(|i| (i % 256) as u8).collect();
        Pix::from_gray_bytes(width, height, data).unwrap()
    }

    #[test]
    fn test_clip_inside() {
        let pix = ramp(10, 10);
        let sub = pix.clip_rectangle(&Box::new_unchecked(2, 3, 4, 2)).unwrap();
        assert_eq!(sub.width(), 4);
        assert_eq!(sub.height(), 2);
        assert_eq!(sub.get_pixel(0, 0), Some(32));
        assert_eq!(sub.get_pixel(3, 1), Some(45));
    }

    #[test]
    fn test_clip_partially_outside() {
        let pix = ramp(10, 10);
        let sub = pix.clip_rectangle(&Box::new_unchecked(8, -2, 5, 4)).unwrap();
        assert_eq!((sub.width(), sub.height()), (2, 2));
        assert_eq!(sub.get_pixel(0, 0), Some(8));
    }

    #[test]
    fn test_clip_outside_fails() {
        let pix = ramp(10, 10);
        assert!(pix.clip_rectangle(&Box::new_unchecked(10, 0, 3, 3)).is_err());
    }

    #[test]
    fn test_clip_rgb() {
        let mut pm = Pix::new(4, 4, PixelDepth::Bit32).unwrap().to_mut();
        pm.set_rgb(2, 2, 1, 2, 3).unwrap();
        let pix: Pix = pm.into();
        let sub = pix.clip_rectangle(&Box::new_unchecked(1, 1, 2, 2)).unwrap();
        assert_eq!(sub.depth(), PixelDepth::Bit32);
        assert_eq!(sub.get_rgb(1, 1), Some((1, 2, 3)));
    }
}
