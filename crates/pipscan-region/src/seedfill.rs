//! Seed fill
//!
//! Breadth-first flood fill over 4-connected pixels of an 8-bit buffer.
//! The same primitive labels regions (`match_value = 1`, `new_label >= 2`)
//! and erases them again (`new_label = 0`, `match_value = label`).

use crate::error::{RegionError, RegionResult, check_8bpp};
use crate::region::{Region, RegionAccumulator};
use pipscan_core::{PixMut, Point};
use std::collections::VecDeque;

/// Flood fill from a seed point, returning the statistics of the filled
/// region.
///
/// Every pixel 4-connected to the seed through pixels equal to
/// `match_value` is set to `new_label`. The buffer is modified in place.
///
/// # Arguments
///
/// * `pix` - Mutable 8-bit buffer
/// * `seed_x` - X coordinate of the seed point
/// * `seed_y` - Y coordinate of the seed point
/// * `new_label` - Value written to the filled pixels
/// * `match_value` - Value of the pixels to fill
///
/// # Returns
///
/// The filled [`Region`]. It is empty when the seed pixel does not hold
/// `match_value`, or when `new_label == match_value` (the buffer is then
/// left untouched).
///
/// # Errors
///
/// Returns an error if the seed position is out of bounds or the buffer
/// is not 8 bpp.
pub fn floodfill(
    pix: &mut PixMut,
    seed_x: u32,
    seed_y: u32,
    new_label: u8,
    match_value: u8,
) -> RegionResult<Region> {
    check_8bpp(pix.depth())?;

    let width = pix.width();
    let height = pix.height();

    if seed_x >= width || seed_y >= height {
        return Err(RegionError::InvalidSeed {
            x: seed_x,
            y: seed_y,
        });
    }

    let seed = Point::new(seed_x as i32, seed_y as i32);
    if new_label == match_value {
        return Ok(Region::empty(new_label, seed));
    }

    let match_value = match_value as u32;
    let mut acc = RegionAccumulator::new();
    let mut queue = VecDeque::new();
    queue.push_back((seed_x, seed_y));

    while let Some((x, y)) = queue.pop_front() {
        if pix.get_pixel_unchecked(x, y) != match_value {
            continue;
        }

        pix.set_pixel_unchecked(x, y, new_label as u32);
        acc.add(x, y);

        if x > 0 {
            queue.push_back((x - 1, y));
        }
        if x + 1 < width {
            queue.push_back((x + 1, y));
        }
        if y > 0 {
            queue.push_back((x, y - 1));
        }
        if y + 1 < height {
            queue.push_back((x, y + 1));
        }
    }

    Ok(acc.finish(new_label, seed))
}

/// Erase a region from a label buffer by setting its pixels to 0.
///
/// Returns the number of pixels cleared, which equals
/// `region.pixel_count` as long as the region is still present.
pub fn erase_region(labels: &mut PixMut, region: &Region) -> RegionResult<u32> {
    if region.is_empty() {
        return Ok(0);
    }
    let erased = floodfill(
        labels,
        region.seed.x as u32,
        region.seed.y as u32,
        0,
        region.label,
    )?;
    Ok(erased.pixel_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipscan_core::{Box, Pix, PixelDepth};

    fn l_shape() -> PixMut {
        Pix::from_rows(&[
            &[1, 0, 0, 0],
            &[1, 0, 0, 1],
            &[1, 1, 1, 0],
            &[0, 0, 0, 0],
        ])
        .unwrap()
        .into_mut()
    }

    #[test]
    fn test_floodfill_four_connected() {
        let mut pm = l_shape();
        let region = floodfill(&mut pm, 0, 0, 2, 1).unwrap();

        assert_eq!(region.label, 2);
        assert_eq!(region.pixel_count, 5);
        assert_eq!(region.bounds, Box::new_unchecked(0, 0, 3, 3));
        assert_eq!(region.seed, Point::new(0, 0));
        // The diagonal neighbor at (3, 1) is not 4-connected
        assert_eq!(pm.get_pixel(3, 1), Some(1));
        assert_eq!(pm.get_pixel(2, 2), Some(2));
    }

    #[test]
    fn test_floodfill_mismatched_seed_is_empty() {
        let mut pm = l_shape();
        let before: Pix = l_shape().into();
        let region = floodfill(&mut pm, 1, 0, 2, 1).unwrap();
        assert!(region.is_empty());
        let after: Pix = pm.into();
        assert_eq!(after, before);
    }

    #[test]
    fn test_floodfill_same_label_is_noop() {
        let mut pm = l_shape();
        let region = floodfill(&mut pm, 0, 0, 1, 1).unwrap();
        assert!(region.is_empty());
        assert_eq!(pm.get_pixel(0, 0), Some(1));
    }

    #[test]
    fn test_floodfill_invalid_seed() {
        let mut pm = l_shape();
        assert!(matches!(
            floodfill(&mut pm, 4, 0, 2, 1),
            Err(RegionError::InvalidSeed { x: 4, y: 0 })
        ));
    }

    #[test]
    fn test_floodfill_rejects_rgb() {
        let mut pm = Pix::new(3, 3, PixelDepth::Bit32).unwrap().into_mut();
        assert!(matches!(
            floodfill(&mut pm, 0, 0, 2, 0),
            Err(RegionError::UnsupportedDepth { actual: 32, .. })
        ));
    }

    #[test]
    fn test_floodfill_whole_image() {
        let mut pm = Pix::new(10, 10, PixelDepth::Bit8).unwrap().into_mut();
        let region = floodfill(&mut pm, 5, 5, 9, 0).unwrap();
        assert_eq!(region.pixel_count, 100);
        assert_eq!(region.centroid, Point::new(4, 4));
    }

    #[test]
    fn test_erase_region() {
        let mut pm = l_shape();
        let region = floodfill(&mut pm, 0, 0, 2, 1).unwrap();
        assert_eq!(erase_region(&mut pm, &region).unwrap(), 5);

        let pix: Pix = pm.into();
        assert_eq!(pix.count_pixels_with_value(2).unwrap(), 0);
        assert_eq!(pix.count_pixels_with_value(1).unwrap(), 1);
    }
}
