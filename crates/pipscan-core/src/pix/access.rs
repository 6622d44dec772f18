//! Pixel access functions
//!
//! Getters and setters for individual pixels. Values are returned as
//! `u32`: the sample itself for 8-bit images, `0xRRGGBBAA` for 32-bit.

use super::{Pix, PixMut, PixData, PixelDepth};
use crate::error::{Error, Result};

impl PixData {
    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * self.depth.bytes_per_pixel()
    }

    #[inline]
    fn in_bounds(&self, x: u32, y: u32) -> bool {
        x < self.width && y < self.height
    }

    #[inline]
    fn read(&self, x: u32, y: u32) -> u32 {
        let i = self.offset(x, y);
        match self.depth {
            PixelDepth::Bit8 => self.data[i] as u32,
            PixelDepth::Bit32 => u32::from_be_bytes([
                self.data[i],
                self.data[i + 1],
                self.data[i + 2],
                self.data[i + 3],
            ]),
        }
    }

    #[inline]
    fn write(&mut self, x: u32, y: u32, val: u32) {
        let i = self.offset(x, y);
        match self.depth {
            PixelDepth::Bit8 => self.data[i] = (val & 0xff) as u8,
            PixelDepth::Bit32 => self.data[i..i + 4].copy_from_slice(&val.to_be_bytes()),
        }
    }

    fn row(&self, y: u32) -> &[u8] {
        let len = self.width as usize * self.depth.bytes_per_pixel();
        let start = y as usize * len;
        &self.data[start..start + len]
    }
}

impl Pix {
    /// Get a pixel value at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        self.inner.in_bounds(x, y).then(|| self.inner.read(x, y))
    }

    /// Get a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.read(x, y)
    }

    /// Get RGB values at (x, y). Only valid for 32-bit images.
    pub fn get_rgb(&self, x: u32, y: u32) -> Option<(u8, u8, u8)> {
        if self.depth() != PixelDepth::Bit32 {
            return None;
        }
        self.get_pixel(x, y).map(crate::color::extract_rgb)
    }

    /// Get the bytes of row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    pub fn row(&self, y: u32) -> &[u8] {
        self.inner.row(y)
    }
}

impl PixMut {
    /// Get a pixel value at (x, y).
    pub fn get_pixel(&self, x: u32, y: u32) -> Option<u32> {
        self.inner.in_bounds(x, y).then(|| self.inner.read(x, y))
    }

    /// Get a pixel value without bounds checking.
    #[inline]
    pub fn get_pixel_unchecked(&self, x: u32, y: u32) -> u32 {
        self.inner.read(x, y)
    }

    /// Set a pixel value at (x, y).
    ///
    /// For 8-bit images only the low byte of `val` is stored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::IndexOutOfBounds`] if coordinates are out of bounds.
    pub fn set_pixel(&mut self, x: u32, y: u32, val: u32) -> Result<()> {
        if !self.inner.in_bounds(x, y) {
            let (index, len) = if x >= self.inner.width {
                (x as usize, self.inner.width as usize)
            } else {
                (y as usize, self.inner.height as usize)
            };
            return Err(Error::IndexOutOfBounds { index, len });
        }
        self.inner.write(x, y, val);
        Ok(())
    }

    /// Set a pixel value without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn set_pixel_unchecked(&mut self, x: u32, y: u32, val: u32) {
        self.inner.write(x, y, val);
    }

    /// Set an RGB pixel at (x, y). Only valid for 32-bit images.
    ///
    /// # Errors
    ///
    /// Returns an error for other depths or out-of-bounds coordinates.
    pub fn set_rgb(&mut self, x: u32, y: u32, r: u8, g: u8, b: u8) -> Result<()> {
        if self.depth() != PixelDepth::Bit32 {
            return Err(Error::UnsupportedDepth(self.depth().bits()));
        }
        self.set_pixel(x, y, crate::color::compose_rgb(r, g, b))
    }

    /// Get the bytes of row `y`.
    pub fn row(&self, y: u32) -> &[u8] {
        self.inner.row(y)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Pix, PixelDepth};

    #[test]
    fn test_get_set_8bpp() {
        let mut pm = Pix::new(5, 4, PixelDepth::Bit8).unwrap().to_mut();
        pm.set_pixel(4, 3, 200).unwrap();
        assert_eq!(pm.get_pixel(4, 3), Some(200));
        assert_eq!(pm.get_pixel(5, 3), None);
        assert!(pm.set_pixel(0, 4, 1).is_err());

        let pix: Pix = pm.into();
        assert_eq!(pix.get_pixel_unchecked(4, 3), 200);
        assert_eq!(pix.row(3), &[0, 0, 0, 0, 200]);
    }

    #[test]
    fn test_8bpp_truncates_to_byte() {
        let mut pm = Pix::new(1, 1, PixelDepth::Bit8).unwrap().to_mut();
        pm.set_pixel(0, 0, 0x1ff).unwrap();
        assert_eq!(pm.get_pixel(0, 0), Some(0xff));
    }

    #[test]
    fn test_rgb_access() {
        let mut pm = Pix::new(3, 3, PixelDepth::Bit32).unwrap().to_mut();
        pm.set_rgb(1, 2, 10, 20, 30).unwrap();
        let pix: Pix = pm.into();
        assert_eq!(pix.get_rgb(1, 2), Some((10, 20, 30)));
        assert_eq!(pix.get_rgb(0, 0), Some((0, 0, 0)));
    }

    #[test]
    fn test_rgb_on_gray_rejected() {
        let mut pm = Pix::new(3, 3, PixelDepth::Bit8).unwrap().to_mut();
        assert!(pm.set_rgb(0, 0, 1, 2, 3).is_err());
        let pix: Pix = pm.into();
        assert_eq!(pix.get_rgb(0, 0), None);
    }
}
