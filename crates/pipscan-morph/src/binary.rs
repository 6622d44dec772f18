//! Binary morphological operations
//!
//! Implements erosion, dilation, opening, and closing for 8-bpp binary
//! masks. Input samples are read as foreground when nonzero; output
//! samples are always 0 or 1. The image border is treated as background
//! for every operation, so erosion never grows from outside the image.

use crate::{MorphError, MorphResult, Sel};
use pipscan_core::{Pix, PixelDepth};

/// Dilate a binary image.
///
/// For each hit `(dx, dy)` in the SEL, the output at `(x, y)` is set when
/// the source is foreground at `(x - dx, y - dy)`.
pub fn dilate(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    check_binary(pix)?;
    let offsets = hit_offsets(sel)?;

    let (w, h) = (pix.width() as i32, pix.height() as i32);
    let src = pix.data();
    let mut out = Pix::new(pix.width(), pix.height(), PixelDepth::Bit8)?.into_mut();
    let dst = out.data_mut();

    for y in 0..h {
        for x in 0..w {
            let hit = offsets.iter().any(|&(dx, dy)| {
                let (sx, sy) = (x - dx, y - dy);
                sx >= 0 && sy >= 0 && sx < w && sy < h && src[(sy * w + sx) as usize] != 0
            });
            dst[(y * w + x) as usize] = hit as u8;
        }
    }

    Ok(out.into())
}

/// Erode a binary image.
///
/// The output at `(x, y)` is set only when the source is foreground at
/// `(x + dx, y + dy)` for every hit `(dx, dy)`. Positions outside the
/// image count as background.
pub fn erode(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    check_binary(pix)?;
    let offsets = hit_offsets(sel)?;

    let (w, h) = (pix.width() as i32, pix.height() as i32);
    let src = pix.data();
    let mut out = Pix::new(pix.width(), pix.height(), PixelDepth::Bit8)?.into_mut();
    let dst = out.data_mut();

    for y in 0..h {
        for x in 0..w {
            let all = offsets.iter().all(|&(dx, dy)| {
                let (sx, sy) = (x + dx, y + dy);
                sx >= 0 && sy >= 0 && sx < w && sy < h && src[(sy * w + sx) as usize] != 0
            });
            dst[(y * w + x) as usize] = all as u8;
        }
    }

    Ok(out.into())
}

/// Open a binary image (erosion followed by dilation).
///
/// Removes foreground structures that cannot contain the SEL.
pub fn open(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    let eroded = erode(pix, sel)?;
    dilate(&eroded, sel)
}

/// Close a binary image (dilation followed by erosion).
pub fn close(pix: &Pix, sel: &Sel) -> MorphResult<Pix> {
    let dilated = dilate(pix, sel)?;
    erode(&dilated, sel)
}

/// Dilate with a `width` x `height` brick.
///
/// Separable: a horizontal pass followed by a vertical pass, each using
/// running sums so the cost does not depend on the brick size. A size of
/// 0 or 1 along an axis skips that pass.
pub fn dilate_brick(pix: &Pix, width: u32, height: u32) -> MorphResult<Pix> {
    check_binary(pix)?;
    let mut data = normalized(pix);
    brick_pass(&mut data, pix.width(), pix.height(), width, Axis::Horizontal, Op::Dilate);
    brick_pass(&mut data, pix.width(), pix.height(), height, Axis::Vertical, Op::Dilate);
    Ok(Pix::from_gray_bytes(pix.width(), pix.height(), data)?)
}

/// Erode with a `width` x `height` brick.
pub fn erode_brick(pix: &Pix, width: u32, height: u32) -> MorphResult<Pix> {
    check_binary(pix)?;
    let mut data = normalized(pix);
    brick_pass(&mut data, pix.width(), pix.height(), width, Axis::Horizontal, Op::Erode);
    brick_pass(&mut data, pix.width(), pix.height(), height, Axis::Vertical, Op::Erode);
    Ok(Pix::from_gray_bytes(pix.width(), pix.height(), data)?)
}

/// Open with a brick structuring element.
///
/// With both sizes at most 1 this is the identity on a 0/1 mask.
pub fn open_brick(pix: &Pix, width: u32, height: u32) -> MorphResult<Pix> {
    check_binary(pix)?;
    if width <= 1 && height <= 1 {
        return Ok(pix.clone());
    }
    let eroded = erode_brick(pix, width, height)?;
    dilate_brick(&eroded, width, height)
}

/// Close with a brick structuring element.
pub fn close_brick(pix: &Pix, width: u32, height: u32) -> MorphResult<Pix> {
    check_binary(pix)?;
    if width <= 1 && height <= 1 {
        return Ok(pix.clone());
    }
    let dilated = dilate_brick(pix, width, height)?;
    erode_brick(&dilated, width, height)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Horizontal,
    Vertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    Erode,
    Dilate,
}

/// Run a 1-D brick of length `size` along every row or column, in place.
///
/// The brick origin is at `size / 2`, matching [`Sel::create_brick`].
fn brick_pass(data: &mut [u8], w: u32, h: u32, size: u32, axis: Axis, op: Op) {
    if size <= 1 {
        return;
    }
    let (w, h) = (w as usize, h as usize);
    let (nlines, len) = match axis {
        Axis::Horizontal => (h, w),
        Axis::Vertical => (w, h),
    };
    let index = |line: usize, i: usize| match axis {
        Axis::Horizontal => line * w + i,
        Axis::Vertical => i * w + line,
    };

    let size = size as i64;
    let c = size / 2;
    let n = len as i64;
    // prefix[i] = number of foreground samples in [0, i)
    let mut prefix = vec![0u32; len + 1];

    for line in 0..nlines {
        for i in 0..len {
            prefix[i + 1] = prefix[i] + data[index(line, i)] as u32;
        }
        let count = |lo: i64, hi: i64| prefix[hi as usize + 1] - prefix[lo as usize];

        for i in 0..n {
            let v = match op {
                Op::Erode => {
                    let lo = i - c;
                    let hi = lo + size - 1;
                    lo >= 0 && hi < n && count(lo, hi) as i64 == size
                }
                Op::Dilate => {
                    let lo = (i + c - size + 1).max(0);
                    let hi = (i + c).min(n - 1);
                    lo <= hi && count(lo, hi) > 0
                }
            };
            data[index(line, i as usize)] = v as u8;
        }
    }
}

/// Copy of the mask with every nonzero sample mapped to 1.
fn normalized(pix: &Pix) -> Vec<u8> {
    pix.data().iter().map(|&v| (v != 0) as u8).collect()
}

fn hit_offsets(sel: &Sel) -> MorphResult<Vec<(i32, i32)>> {
    let offsets: Vec<_> = sel.hit_offsets().collect();
    if offsets.is_empty() {
        return Err(MorphError::InvalidSel("SEL has no hits".to_string()));
    }
    Ok(offsets)
}

/// Check that the image is an 8-bpp mask
fn check_binary(pix: &Pix) -> MorphResult<()> {
    if pix.depth() != PixelDepth::Bit8 {
        return Err(MorphError::UnsupportedDepth {
            expected: "8-bpp binary",
            actual: pix.depth().bits(),
        });
    }
    Ok(())
}
