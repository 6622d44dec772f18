//! Region selection
//!
//! Removes regions that fail a predicate from both the label buffer and
//! the region list.

use crate::error::{RegionError, RegionResult, check_8bpp};
use crate::region::Region;
use crate::seedfill::erase_region;
use crate::stats::region_intensity_range;
use pipscan_core::Pix;

/// Decides whether a region survives [`filter_regions`].
///
/// Implemented for closures `FnMut(&Region, &Pix) -> bool`, which cannot
/// fail.
pub trait RegionPredicate {
    /// Return `Ok(true)` to keep `region`. `labels` is the label buffer as
    /// it was before any region was removed.
    ///
    /// An error aborts [`filter_regions`].
    fn keep(&mut self, region: &Region, labels: &Pix) -> RegionResult<bool>;
}

impl<F> RegionPredicate for F
where
    F: FnMut(&Region, &Pix) -> bool,
{
    fn keep(&mut self, region: &Region, labels: &Pix) -> RegionResult<bool> {
        Ok(self(region, labels))
    }
}

/// Keep regions with at least this many pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MinSize(pub u32);

impl RegionPredicate for MinSize {
    fn keep(&mut self, region: &Region, _labels: &Pix) -> RegionResult<bool> {
        Ok(region.pixel_count >= self.0)
    }
}

/// Hysteresis selection of dark, roughly square regions.
///
/// A region is kept when its darkest source pixel is at or below
/// `dark_limit` and its bounding box aspect ratio (short side over long
/// side) is at least `min_aspect_ratio`. Regions labeled from a loose
/// threshold thus survive only if they contain a strongly dark core.
#[derive(Debug, Clone, Copy)]
pub struct PipSelect<'a> {
    source: &'a Pix,
    dark_limit: u8,
    min_aspect_ratio: f64,
}

impl<'a> PipSelect<'a> {
    /// Create the predicate for regions labeled from `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is not 8 bpp or `min_aspect_ratio`
    /// lies outside `[0, 1]`.
    pub fn new(source: &'a Pix, dark_limit: u8, min_aspect_ratio: f64) -> RegionResult<Self> {
        check_8bpp(source.depth())?;
        if !(0.0..=1.0).contains(&min_aspect_ratio) {
            return Err(RegionError::InvalidParameters(format!(
                "min_aspect_ratio must be in [0, 1], got {min_aspect_ratio}"
            )));
        }
        Ok(Self {
            source,
            dark_limit,
            min_aspect_ratio,
        })
    }

    pub fn dark_limit(&self) -> u8 {
        self.dark_limit
    }

    pub fn min_aspect_ratio(&self) -> f64 {
        self.min_aspect_ratio
    }
}

impl RegionPredicate for PipSelect<'_> {
    fn keep(&mut self, region: &Region, labels: &Pix) -> RegionResult<bool> {
        if region.aspect_ratio() < self.min_aspect_ratio {
            return Ok(false);
        }
        let range = region_intensity_range(self.source, labels, region)?;
        Ok(range.min <= self.dark_limit)
    }
}

/// Remove the regions rejected by `predicate`.
///
/// Every region is judged against the unmodified label buffer; rejected
/// regions are then erased (set to 0) and dropped from the list. Surviving
/// regions keep their relative order and their labels.
///
/// # Errors
///
/// Returns an error if `labels` is not 8 bpp, a region's seed lies
/// outside the buffer, or the predicate fails. On error no region is
/// removed.
pub fn filter_regions<P>(
    labels: Pix,
    regions: Vec<Region>,
    predicate: &mut P,
) -> RegionResult<(Pix, Vec<Region>)>
where
    P: RegionPredicate + ?Sized,
{
    check_8bpp(labels.depth())?;

    let verdicts = regions
        .iter()
        .map(|r| predicate.keep(r, &labels))
        .collect::<RegionResult<Vec<bool>>>()?;
    if verdicts.iter().all(|&keep| keep) {
        return Ok((labels, regions));
    }

    let total = regions.len();
    let mut pm = labels.into_mut();
    let mut survivors = Vec::with_capacity(total);
    for (region, keep) in regions.into_iter().zip(verdicts) {
        if keep {
            survivors.push(region);
        } else {
            erase_region(&mut pm, &region)?;
        }
    }

    tracing::debug!("kept {} of {} regions", survivors.len(), total);
    Ok((pm.into(), survivors))
}
