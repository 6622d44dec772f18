//! Region statistics
//!
//! Summaries computed from a label buffer and, where intensities are
//! needed, the source image it was derived from.

use crate::error::{RegionResult, check_8bpp};
use crate::region::Region;
use pipscan_core::{Error, Pix};

/// Minimum and maximum source intensity over a region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntensityRange {
    pub min: u8,
    pub max: u8,
}

/// Size of the largest region, or 0 for an empty list.
pub fn max_region_size(regions: &[Region]) -> u32 {
    regions.iter().map(|r| r.pixel_count).max().unwrap_or(0)
}

/// Intensity range of `source` over the pixels of `region`.
///
/// Only the region's bounding box is scanned. A region with no pixels in
/// `labels` yields `min = 255, max = 0`.
///
/// # Errors
///
/// Returns an error if either image is not 8 bpp or their sizes differ.
pub fn region_intensity_range(
    source: &Pix,
    labels: &Pix,
    region: &Region,
) -> RegionResult<IntensityRange> {
    check_8bpp(source.depth())?;
    check_8bpp(labels.depth())?;
    if !source.sizes_equal(labels) {
        return Err(Error::DimensionMismatch {
            expected: (labels.width(), labels.height()),
            actual: (source.width(), source.height()),
        }
        .into());
    }

    let mut range = IntensityRange { min: 255, max: 0 };
    let Some(b) = region.bounds.clip_to(labels.width(), labels.height()) else {
        return Ok(range);
    };

    for y in b.y..b.bottom() {
        let label_row = labels.row(y as u32);
        let source_row = source.row(y as u32);
        for x in b.x as usize..b.right() as usize {
            if label_row[x] == region.label {
                range.min = range.min.min(source_row[x]);
                range.max = range.max.max(source_row[x]);
            }
        }
    }

    Ok(range)
}

/// Number of pixels in `labels` equal to `label`.
pub fn count_label(labels: &Pix, label: u8) -> RegionResult<u32> {
    Ok(labels.count_pixels_with_value(label)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::label::label_regions;

    #[test]
    fn test_max_region_size() {
        assert_eq!(max_region_size(&[]), 0);

        let pix = Pix::from_rows(&[&[1, 1, 0, 1], &[0, 1, 0, 0]]).unwrap();
        let labeling = label_regions(&pix).unwrap();
        assert_eq!(max_region_size(&labeling.regions), 3);
    }

    #[test]
    fn test_region_intensity_range() {
        let source = Pix::from_rows(&[&[50, 9, 200], &[70, 80, 3]]).unwrap();
        let binary = Pix::from_rows(&[&[1, 1, 0], &[1, 0, 1]]).unwrap();
        let labeling = label_regions(&binary).unwrap();

        let first = region_intensity_range(&source, &labeling.pix, &labeling.regions[0]).unwrap();
        assert_eq!(first, IntensityRange { min: 9, max: 70 });

        let second = region_intensity_range(&source, &labeling.pix, &labeling.regions[1]).unwrap();
        assert_eq!(second, IntensityRange { min: 3, max: 3 });
    }

    #[test]
    fn test_region_intensity_range_size_mismatch() {
        let source = Pix::from_rows(&[&[1, 2]]).unwrap();
        let binary = Pix::from_rows(&[&[1], &[1]]).unwrap();
        let labeling = label_regions(&binary).unwrap();
        assert!(region_intensity_range(&source, &labeling.pix, &labeling.regions[0]).is_err());
    }

    #[test]
    fn test_count_label() {
        let pix = Pix::from_rows(&[&[1, 0, 1], &[1, 0, 1]]).unwrap();
        let labeling = label_regions(&pix).unwrap();
        for region in &labeling.regions {
            assert_eq!(
                count_label(&labeling.pix, region.label).unwrap(),
                region.pixel_count
            );
        }
    }
}
