//! Rendering of label buffers
//!
//! Colorizes a label buffer for display and draws region annotations on
//! top of it. Output images are 32 bpp RGB.

use crate::error::{RegionResult, check_8bpp};
use crate::region::Region;
use pipscan_core::color::{self, Hsv};
use pipscan_core::{Color, Pix, PixMut, PixelDepth};

/// Hue step between consecutive labels (hue space is 0..240)
const HUE_STEP: i32 = 40;
/// Value used for the first hue cycle
const VALUE_START: i32 = 200;
/// Darkening applied after each full hue cycle
const VALUE_STEP: i32 = 50;
/// Values below this wrap back to `VALUE_START`
const VALUE_MIN: i32 = 100;

/// Half length of the centroid marker arms
const CROSS_HALF: i32 = 2;

/// RGB color for each of the 256 possible label values.
///
/// 0 is white. Label `i >= 1` takes hue `(i - 1) * 40` modulo 240 at full
/// saturation. Successive hue cycles are darker: value 200, then 150, then
/// 100, then 200 again.
pub fn label_palette() -> [Color; 256] {
    let mut palette = [Color::WHITE; 256];
    let hues_per_cycle = 240 / HUE_STEP;
    let value_levels = (VALUE_START - VALUE_MIN) / VALUE_STEP + 1;

    for (i, entry) in palette.iter_mut().enumerate().skip(1) {
        let n = i as i32 - 1;
        let h = (n * HUE_STEP) % 240;
        let v = VALUE_START - VALUE_STEP * ((n / hues_per_cycle) % value_levels);
        let (r, g, b) = color::hsv_to_rgb(Hsv { h, s: 255, v });
        *entry = Color::new(r, g, b);
    }
    palette
}

/// Colorize a label buffer.
///
/// Background (0) becomes white; every other value gets its palette
/// color, so distinct labels are visually distinct.
pub fn labels_to_rgb(labels: &Pix) -> RegionResult<Pix> {
    check_8bpp(labels.depth())?;
    let palette = label_palette();

    let mut out = Pix::new(labels.width(), labels.height(), PixelDepth::Bit32)?.into_mut();
    for y in 0..labels.height() {
        for (x, &label) in labels.row(y).iter().enumerate() {
            let c = palette[label as usize];
            out.set_pixel_unchecked(x as u32, y, color::compose_rgb(c.r, c.g, c.b));
        }
    }
    Ok(out.into())
}

/// Draw a red bounding box and a black centroid cross for each region.
pub fn annotate_regions(rgb: &mut PixMut, regions: &[Region]) {
    for region in regions.iter().filter(|r| !r.is_empty()) {
        rgb.render_box(&region.bounds, 1, Color::RED);
        rgb.render_cross(region.centroid, CROSS_HALF, Color::BLACK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::label_regions;

    #[test]
    fn test_palette() {
        let palette = label_palette();
        assert_eq!(palette[0], Color::WHITE);
        // Label 1: hue 0 (red) at value 200
        assert_eq!(palette[1], Color::new(200, 0, 0));
        // Label 3: hue 80 (green)
        assert_eq!(palette[3], Color::new(0, 200, 0));
        // Label 7 starts the second hue cycle at value 150
        assert_eq!(palette[7], Color::new(150, 0, 0));
        // Label 13 starts the third at 100, label 19 wraps back to 200
        assert_eq!(palette[13], Color::new(100, 0, 0));
        assert_eq!(palette[19], Color::new(200, 0, 0));
    }

    #[test]
    fn test_labels_to_rgb() {
        let binary = Pix::from_rows(&[&[1, 0, 1]]).unwrap();
        let labeling = label_regions(&binary).unwrap();
        let rgb = labels_to_rgb(&labeling.pix).unwrap();

        assert_eq!(rgb.depth(), PixelDepth::Bit32);
        assert_eq!(rgb.get_rgb(1, 0), Some((255, 255, 255)));
        assert_ne!(rgb.get_rgb(0, 0), rgb.get_rgb(2, 0));
    }

    #[test]
    fn test_annotate_regions() {
        let binary = Pix::from_rows(&[
            &[0, 0, 0, 0, 0, 0, 0],
            &[0, 1, 1, 1, 1, 1, 0],
            &[0, 1, 1, 1, 1, 1, 0],
            &[0, 1, 1, 1, 1, 1, 0],
            &[0, 1, 1, 1, 1, 1, 0],
            &[0, 1, 1, 1, 1, 1, 0],
            &[0, 0, 0, 0, 0, 0, 0],
        ])
        .unwrap();
        let labeling = label_regions(&binary).unwrap();
        let mut rgb = labels_to_rgb(&labeling.pix).unwrap().into_mut();
        annotate_regions(&mut rgb, &labeling.regions);
        let rgb: Pix = rgb.into();

        // Box outline on the region border
        assert_eq!(rgb.get_rgb(1, 1), Some((255, 0, 0)));
        assert_eq!(rgb.get_rgb(5, 5), Some((255, 0, 0)));
        // Centroid cross at (3, 3)
        assert_eq!(rgb.get_rgb(3, 3), Some((0, 0, 0)));
        assert_eq!(rgb.get_rgb(4, 3), Some((0, 0, 0)));
        // Background stays white
        assert_eq!(rgb.get_rgb(0, 0), Some((255, 255, 255)));
    }
}
