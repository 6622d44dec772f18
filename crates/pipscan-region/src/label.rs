//! Region labeling
//!
//! Turns a binary buffer (values 0 and 1) into a label buffer where each
//! 4-connected foreground region carries its own value in `2..=255`.

use crate::error::{RegionError, RegionResult, check_8bpp};
use crate::region::{FIRST_LABEL, MAX_REGIONS, Region};
use crate::seedfill::floodfill;
use pipscan_core::Pix;

/// Whether a labeling pass saw every region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LabelStatus {
    /// Every foreground region was labeled
    #[default]
    Complete,
    /// Labels ran out; regions beyond the first [`MAX_REGIONS`] were
    /// dropped
    CapacityExceeded,
}

/// Result of [`label_regions`]
#[derive(Debug, Clone)]
pub struct Labeling {
    /// Label buffer: 0 for background, region labels elsewhere
    pub pix: Pix,
    /// Regions in label order
    pub regions: Vec<Region>,
    /// Whether labeling covered the whole image
    pub status: LabelStatus,
}

impl Labeling {
    /// Check if every region was labeled
    pub fn is_complete(&self) -> bool {
        self.status == LabelStatus::Complete
    }

    /// Turn a capacity overflow into an error.
    pub fn check_capacity(&self) -> RegionResult<()> {
        match self.status {
            LabelStatus::Complete => Ok(()),
            LabelStatus::CapacityExceeded => {
                Err(RegionError::LabelCapacityExceeded { max: MAX_REGIONS })
            }
        }
    }
}

/// Label the 4-connected foreground regions of a binary buffer.
///
/// Pixels are scanned in row-major order; each unlabeled foreground pixel
/// seeds a flood fill with the next label, starting at 2. When a region
/// is found after all labels are used, scanning stops, the remaining
/// unlabeled foreground is cleared to 0 and the status is
/// [`LabelStatus::CapacityExceeded`]. The returned buffer therefore never
/// contains the value 1 and holds exactly the returned regions.
///
/// # Errors
///
/// Returns [`RegionError::UnsupportedDepth`] for non-8-bit input and
/// [`RegionError::NotBinary`] if any sample is greater than 1.
pub fn label_regions(binary: &Pix) -> RegionResult<Labeling> {
    check_8bpp(binary.depth())?;
    check_binary_values(binary)?;

    let width = binary.width();
    let height = binary.height();
    let mut pm = binary.to_mut();
    let mut regions: Vec<Region> = Vec::new();
    let mut status = LabelStatus::Complete;

    'scan: for y in 0..height {
        for x in 0..width {
            if pm.get_pixel_unchecked(x, y) != 1 {
                continue;
            }
            if regions.len() == MAX_REGIONS {
                status = LabelStatus::CapacityExceeded;
                break 'scan;
            }
            let label = FIRST_LABEL + regions.len() as u8;
            regions.push(floodfill(&mut pm, x, y, label, 1)?);
        }
    }

    if status == LabelStatus::CapacityExceeded {
        let mut dropped = 0usize;
        for v in pm.data_mut().iter_mut().filter(|v| **v == 1) {
            *v = 0;
            dropped += 1;
        }
        tracing::warn!(
            "label capacity of {} regions reached; cleared {} unlabeled foreground pixels",
            MAX_REGIONS,
            dropped
        );
    }

    tracing::debug!(
        "labeled {} regions in {}x{} ({:?})",
        regions.len(),
        width,
        height,
        status
    );

    Ok(Labeling {
        pix: pm.into(),
        regions,
        status,
    })
}

fn check_binary_values(pix: &Pix) -> RegionResult<()> {
    match pix.data().iter().position(|&v| v > 1) {
        None => Ok(()),
        Some(i) => Err(RegionError::NotBinary {
            value: pix.data()[i],
            x: i as u32 % pix.width(),
            y: i as u32 / pix.width(),
        }),
    }
}
