//! Thresholding relative to the dynamic range
//!
//! Thresholds are given as a percentage of an image's dynamic range,
//! `tau = min + percent / 100 * (max - min)`, so the same setting adapts
//! to differently exposed inputs.

use crate::{RecogError, RecogResult};
use pipscan_core::{Pix, PixelDepth};

/// Gray value at `percent` of the dynamic range of `pix`, truncated.
pub fn value_in_dynamic_range(pix: &Pix, percent: u8) -> RecogResult<u8> {
    Ok(pix.dynamic_range()?.value_at_percent(percent)?)
}

/// Binary mask of the samples strictly brighter than `tau`.
pub fn threshold_bright(pix: &Pix, tau: u8) -> RecogResult<Pix> {
    check_gray(pix)?;
    let data = pix.data().iter().map(|&v| (v > tau) as u8).collect();
    Ok(Pix::from_gray_bytes(pix.width(), pix.height(), data)?)
}

/// Complement of a binary mask.
pub fn invert_mask(mask: &Pix) -> RecogResult<Pix> {
    check_gray(mask)?;
    let data = mask.data().iter().map(|&v| (v == 0) as u8).collect();
    Ok(Pix::from_gray_bytes(mask.width(), mask.height(), data)?)
}

/// Reject anything but 8-bit input.
pub(crate) fn check_gray(pix: &Pix) -> RecogResult<()> {
    if pix.depth() != PixelDepth::Bit8 {
        return Err(RecogError::InvalidBufferType {
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_in_dynamic_range() {
        let pix = Pix::from_rows(&[&[10, 60], &[110, 210]]).unwrap();
        assert_eq!(value_in_dynamic_range(&pix, 0).unwrap(), 10);
        assert_eq!(value_in_dynamic_range(&pix, 70).unwrap(), 150);
        assert_eq!(value_in_dynamic_range(&pix, 100).unwrap(), 210);
        assert!(value_in_dynamic_range(&pix, 101).is_err());
    }

    #[test]
    fn test_threshold_is_strict() {
        let pix = Pix::from_rows(&[&[99, 100, 101]]).unwrap();
        let mask = threshold_bright(&pix, 100).unwrap();
        assert_eq!(mask.row(0), &[0, 0, 1]);
        assert_eq!(invert_mask(&mask).unwrap().row(0), &[1, 1, 0]);
    }

    #[test]
    fn test_rgb_rejected() {
        let pix = Pix::new(2, 2, PixelDepth::Bit32).unwrap();
        assert!(matches!(
            threshold_bright(&pix, 0),
            Err(RecogError::InvalidBufferType { actual: 32 })
        ));
    }
}
