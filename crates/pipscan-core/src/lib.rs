//! pipscan-core - Basic data structures for region analysis
//!
//! This crate provides the fundamental data structures used throughout
//! the pipscan workspace:
//!
//! - [`Pix`] / [`PixMut`] - The image container (immutable / mutable)
//! - [`Box`] - Axis-aligned rectangles (bounding boxes, clip regions)
//! - [`Point`] - Integer pixel coordinates
//! - [`DynamicRange`] - Minimum and maximum sample of an 8-bit image
//!
//! 8-bit images carry intensities, binary masks (values 0/1) and label
//! maps; 32-bit images carry RGB output for rendering.

pub mod box_;
pub mod error;
pub mod pix;
pub mod point;

pub use box_::Box;
pub use error::{Error, Result};
pub use pix::graphics::Color;
pub use pix::statistics::DynamicRange;
pub use pix::{ImageFormat, Pix, PixMut, PixelDepth};
pub use point::Point;

/// Color channel helpers for 32-bit RGBA pixels.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | (255 << ALPHA_SHIFT)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (
            ((pixel >> RED_SHIFT) & 0xff) as u8,
            ((pixel >> GREEN_SHIFT) & 0xff) as u8,
            ((pixel >> BLUE_SHIFT) & 0xff) as u8,
        )
    }

    /// Luma of an RGB triple using ITU-R BT.601 weights, rounded.
    #[inline]
    pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
        let y = 0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32;
        (y + 0.5).min(255.0) as u8
    }

    /// HSV color values.
    ///
    /// Ranges: h [0..239] (h=240 wraps to 0), s [0..255], v [0..255].
    ///
    /// Hue correspondence:
    /// - 0: red
    /// - 40: yellow
    /// - 80: green
    /// - 120: cyan
    /// - 160: blue
    /// - 200: magenta
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Hsv {
        pub h: i32,
        pub s: i32,
        pub v: i32,
    }

    /// Convert HSV to RGB color space.
    pub fn hsv_to_rgb(hsv: Hsv) -> (u8, u8, u8) {
        let Hsv {
            mut h,
            s: sval,
            v: vval,
        } = hsv;

        if sval == 0 {
            return (vval as u8, vval as u8, vval as u8);
        }

        if h == 240 {
            h = 0;
        }
        let hf = h as f32 / 40.0;
        let i = hf as i32;
        let f = hf - i as f32;
        let s = sval as f32 / 255.0;
        let x = (vval as f32 * (1.0 - s) + 0.5) as i32;
        let y = (vval as f32 * (1.0 - s * f) + 0.5) as i32;
        let z = (vval as f32 * (1.0 - s * (1.0 - f)) + 0.5) as i32;

        let (r, g, b) = match i {
            0 => (vval, z, x),
            1 => (y, vval, x),
            2 => (x, vval, z),
            3 => (x, y, vval),
            4 => (z, x, vval),
            5 => (vval, x, y),
            _ => (0, 0, 0),
        };

        (r as u8, g as u8, b as u8)
    }

}
