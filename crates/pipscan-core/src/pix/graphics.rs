//! Drawing primitives
//!
//! Box outlines and point markers for annotating rendered output.
//! On 32-bit images the color is written as RGB; on 8-bit images its
//! luma is written instead.

use super::{PixMut, PixelDepth};
use crate::box_::Box;
use crate::color;
use crate::point::Point;

/// An RGB drawing color
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::new(0, 0, 0);
    pub const WHITE: Color = Color::new(255, 255, 255);
    pub const RED: Color = Color::new(255, 0, 0);

    /// Create a new color
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    fn pixel_value(self, depth: PixelDepth) -> u32 {
        match depth {
            PixelDepth::Bit8 => color::rgb_to_gray(self.r, self.g, self.b) as u32,
            PixelDepth::Bit32 => color::compose_rgb(self.r, self.g, self.b),
        }
    }
}

impl PixMut {
    /// Set a pixel given signed coordinates; points outside are ignored.
    fn plot(&mut self, x: i32, y: i32, val: u32) {
        if x >= 0 && y >= 0 && (x as u32) < self.width() && (y as u32) < self.height() {
            self.set_pixel_unchecked(x as u32, y as u32, val);
        }
    }

    /// Draw the outline of `b` with the given line width.
    ///
    /// The line is drawn inside the box. Parts outside the image are
    /// clipped.
    pub fn render_box(&mut self, b: &Box, line_width: u32, color: Color) {
        if b.is_empty() {
            return;
        }
        let val = color.pixel_value(self.depth());
        let lw = (line_width.max(1) as i32).min(b.w.max(b.h));
        for y in b.y..b.bottom() {
            for x in b.x..b.right() {
                let on_edge = x < b.x + lw
                    || x >= b.right() - lw
                    || y < b.y + lw
                    || y >= b.bottom() - lw;
                if on_edge {
                    self.plot(x, y, val);
                }
            }
        }
    }

    /// Draw a `+` marker centered at `center` with arms of length `half`.
    pub fn render_cross(&mut self, center: Point, half: i32, color: Color) {
        let val = color.pixel_value(self.depth());
        for d in -half..=half {
            self.plot(center.x + d, center.y, val);
            self.plot(center.x, center.y + d, val);
        }
    }
}
