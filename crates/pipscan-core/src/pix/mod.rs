//! PIX - The main image container
//!
//! The `Pix` structure is the fundamental image type. Two depths are
//! supported:
//!
//! - 8 bpp: one byte per pixel. Used for intensity images, binary masks
//!   (values 0 and 1) and label maps (0 = background, 2..=255 = labels).
//! - 32 bpp: RGBA packed as `0xRRGGBBAA`, stored as four bytes per pixel.
//!   Used for rendered output only.
//!
//! # Ownership model
//!
//! `Pix` uses `Arc` for efficient cloning (shared ownership).
//! To modify pixel data, convert to `PixMut` via [`Pix::try_into_mut`]
//! or [`Pix::to_mut`], then convert back with `Into<Pix>`.

mod access;
pub mod clip;
pub mod graphics;
pub mod statistics;

use crate::error::{Error, Result};
use std::sync::Arc;

/// Pixel depth (bits per pixel)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u32)]
pub enum PixelDepth {
    /// 8-bit grayscale, binary mask or label map
    Bit8 = 8,
    /// 32-bit RGBA
    Bit32 = 32,
}

impl PixelDepth {
    /// Create `PixelDepth` from a raw bit count.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDepth`] if `bits` is not 8 or 32.
    pub fn from_bits(bits: u32) -> Result<Self> {
        match bits {
            8 => Ok(PixelDepth::Bit8),
            32 => Ok(PixelDepth::Bit32),
            _ => Err(Error::InvalidDepth(bits)),
        }
    }

    /// Get the number of bits per pixel.
    pub fn bits(self) -> u32 {
        self as u32
    }

    /// Number of bytes used to store one pixel.
    pub fn bytes_per_pixel(self) -> usize {
        (self.bits() / 8) as usize
    }
}

/// Image file format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImageFormat {
    /// Unknown format
    #[default]
    Unknown,
    /// PNG format
    Png,
    /// JFIF JPEG format
    Jpeg,
    /// PNM format (PGM / PPM)
    Pnm,
}

impl ImageFormat {
    /// Get the file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Unknown => "dat",
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Pnm => "pnm",
        }
    }
}

/// Internal PIX data
#[derive(Debug, Clone)]
struct PixData {
    width: u32,
    height: u32,
    depth: PixelDepth,
    /// Input file format, if the image was decoded from a file
    informat: ImageFormat,
    /// Row-major pixel bytes, `depth.bytes_per_pixel()` per pixel
    data: Vec<u8>,
}

/// PIX - Main image container
///
/// # Examples
///
/// ```
/// use pipscan_core::{Pix, PixelDepth};
///
/// let pix = Pix::new(640, 480, PixelDepth::Bit8).unwrap();
/// assert_eq!(pix.width(), 640);
/// assert_eq!(pix.height(), 480);
/// ```
#[derive(Debug, Clone)]
pub struct Pix {
    inner: Arc<PixData>,
}

impl Pix {
    /// Create a new PIX with the specified dimensions and depth.
    ///
    /// The image data is initialized to zero.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32, depth: PixelDepth) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }

        let size = width as usize * height as usize * depth.bytes_per_pixel();
        let inner = PixData {
            width,
            height,
            depth,
            informat: ImageFormat::Unknown,
            data: vec![0u8; size],
        };

        Ok(Pix {
            inner: Arc::new(inner),
        })
    }

    /// Create an 8-bit image from row-major samples.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] for an empty geometry and
    /// [`Error::BufferSize`] if `data.len() != width * height`.
    pub fn from_gray_bytes(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::BufferSize {
                expected,
                actual: data.len(),
            });
        }

        Ok(Pix {
            inner: Arc::new(PixData {
                width,
                height,
                depth: PixelDepth::Bit8,
                informat: ImageFormat::Unknown,
                data,
            }),
        })
    }

    /// Create an 8-bit image from a slice of rows.
    ///
    /// Convenient for small hand-written test images.
    ///
    /// # Errors
    ///
    /// Returns an error if there are no rows or the rows differ in length.
    pub fn from_rows(rows: &[&[u8]]) -> Result<Self> {
        let height = rows.len() as u32;
        let width = rows.first().map_or(0, |r| r.len()) as u32;
        if rows.iter().any(|r| r.len() as u32 != width) {
            return Err(Error::InvalidParameter(
                "all rows must have the same length".to_string(),
            ));
        }
        Self::from_gray_bytes(width, height, rows.concat())
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel depth.
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Get the input file format.
    #[inline]
    pub fn informat(&self) -> ImageFormat {
        self.inner.informat
    }

    /// Get the raw row-major pixel bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Check that this is an 8-bit image.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedDepth`] for any other depth.
    pub fn require_8bpp(&self) -> Result<()> {
        match self.depth() {
            PixelDepth::Bit8 => Ok(()),
            other => Err(Error::UnsupportedDepth(other.bits())),
        }
    }

    /// Check whether two images have the same width and height.
    pub fn sizes_equal(&self, other: &Pix) -> bool {
        self.width() == other.width() && self.height() == other.height()
    }

    /// Try to get mutable access to the image data.
    ///
    /// Succeeds only if there is exactly one reference to the data.
    /// If successful, returns a [`PixMut`] that allows modification.
    pub fn try_into_mut(self) -> std::result::Result<PixMut, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(data) => Ok(PixMut { inner: data }),
            Err(arc) => Err(Pix { inner: arc }),
        }
    }

    /// Create a mutable copy of this PIX.
    ///
    /// Always creates a new copy that can be modified.
    pub fn to_mut(&self) -> PixMut {
        PixMut {
            inner: (*self.inner).clone(),
        }
    }

    /// Get mutable access, copying only when the data is shared.
    pub fn into_mut(self) -> PixMut {
        self.try_into_mut().unwrap_or_else(|p| p.to_mut())
    }
}

impl PartialEq for Pix {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self.depth() == other.depth()
            && self.data() == other.data()
    }
}

impl Eq for Pix {}

/// Mutable PIX
///
/// Allows modification of image data. Convert back to an immutable
/// [`Pix`] using `Into<Pix>`.
#[derive(Debug)]
pub struct PixMut {
    inner: PixData,
}

impl PixMut {
    /// Get the image width.
    #[inline]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Get the image height.
    #[inline]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Get the pixel depth.
    #[inline]
    pub fn depth(&self) -> PixelDepth {
        self.inner.depth
    }

    /// Set the input format.
    pub fn set_informat(&mut self, format: ImageFormat) {
        self.inner.informat = format;
    }

    /// Get the raw row-major pixel bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.inner.data
    }

    /// Get mutable access to the raw pixel bytes.
    #[inline]
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.inner.data
    }

    /// Set all pixels to zero.
    pub fn clear(&mut self) {
        self.inner.data.fill(0);
    }

    /// Set every byte of the image to `val`.
    ///
    /// For 32-bit images this sets all channels, so `0xff` gives white.
    pub fn set_all(&mut self, val: u8) {
        self.inner.data.fill(val);
    }
}

impl From<PixMut> for Pix {
    fn from(pix_mut: PixMut) -> Self {
        Pix {
            inner: Arc::new(pix_mut.inner),
        }
    }
}
