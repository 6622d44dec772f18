//! Deterministic synthetic scenes
//!
//! Builds gray images of dice lying on a dark table so the recognition
//! pipeline can be exercised without shipping binary fixtures. All
//! randomness is driven by an explicit seed.

use crate::TestResult;
use pipscan_core::{Error, Pix, PixMut};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Table (background) intensity
pub const TABLE: u8 = 30;
/// Die face intensity
pub const FACE: u8 = 220;
/// Pip intensity
pub const PIP: u8 = 15;

/// Placement of one die in a scene
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DieSpec {
    /// Left edge of the face
    pub x: u32,
    /// Top edge of the face
    pub y: u32,
    /// Side length of the square face
    pub size: u32,
    /// Number of pips shown, 1..=6
    pub pips: u8,
}

impl DieSpec {
    pub fn new(x: u32, y: u32, size: u32, pips: u8) -> Self {
        Self { x, y, size, pips }
    }

    /// Pip radius used when drawing this die.
    pub fn pip_radius(&self) -> u32 {
        (self.size / 14).max(1)
    }

    /// Pip centers in image coordinates, in the usual die layout.
    pub fn pip_centers(&self) -> Vec<(u32, u32)> {
        let lo = self.size / 4;
        let mid = self.size / 2;
        let hi = self.size - self.size / 4;
        let layout: &[(u32, u32)] = match self.pips {
            1 => &[(mid, mid)],
            2 => &[(lo, lo), (hi, hi)],
            3 => &[(lo, lo), (mid, mid), (hi, hi)],
            4 => &[(lo, lo), (hi, lo), (lo, hi), (hi, hi)],
            5 => &[(lo, lo), (hi, lo), (mid, mid), (lo, hi), (hi, hi)],
            6 => &[(lo, lo), (hi, lo), (lo, mid), (hi, mid), (lo, hi), (hi, hi)],
            _ => &[],
        };
        layout
            .iter()
            .map(|&(px, py)| (self.x + px, self.y + py))
            .collect()
    }
}

/// Draw dice on a table of the given size.
///
/// # Errors
///
/// Fails if a die does not fit inside the image or shows no 1..=6 pips.
pub fn dice_scene(width: u32, height: u32, dice: &[DieSpec]) -> TestResult<Pix> {
    let mut pm = Pix::from_gray_bytes(
        width,
        height,
        vec![TABLE; width as usize * height as usize],
    )?
    .into_mut();

    for die in dice {
        if die.x + die.size > width || die.y + die.size > height {
            return Err(Error::InvalidParameter(format!("die {die:?} outside {width}x{height}")).into());
        }
        if !(1..=6).contains(&die.pips) {
            return Err(Error::InvalidParameter(format!("die shows {} pips", die.pips)).into());
        }
        fill_rect(&mut pm, die.x, die.y, die.size, die.size, FACE);
        for (cx, cy) in die.pip_centers() {
            fill_disc(&mut pm, cx, cy, die.pip_radius(), PIP);
        }
    }

    Ok(pm.into())
}

/// Scatter `count` isolated bright single-pixel specks over the image.
pub fn add_specks(pix: &Pix, count: usize, seed: u64) -> Pix {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pm = pix.to_mut();
    for _ in 0..count {
        let x = rng.random_range(0..pix.width());
        let y = rng.random_range(0..pix.height());
        pm.set_pixel_unchecked(x, y, FACE as u32);
    }
    pm.into()
}

/// Add uniform noise in `[-amplitude, amplitude]` to every sample.
pub fn add_noise(pix: &Pix, amplitude: u8, seed: u64) -> Pix {
    let mut rng = StdRng::seed_from_u64(seed);
    let amp = amplitude as i16;
    let mut pm = pix.to_mut();
    for v in pm.data_mut() {
        let delta = rng.random_range(-amp..=amp);
        *v = (*v as i16 + delta).clamp(0, 255) as u8;
    }
    pm.into()
}

/// Random binary mask where each pixel is foreground with probability
/// `density`.
pub fn random_mask(width: u32, height: u32, density: f64, seed: u64) -> TestResult<Pix> {
    let mut rng = StdRng::seed_from_u64(seed);
    let data = (0..width as usize * height as usize)
        .map(|_| rng.random_bool(density.clamp(0.0, 1.0)) as u8)
        .collect();
    Ok(Pix::from_gray_bytes(width, height, data)?)
}

fn fill_rect(pm: &mut PixMut, x: u32, y: u32, w: u32, h: u32, val: u8) {
    for yy in y..(y + h).min(pm.height()) {
        for xx in x..(x + w).min(pm.width()) {
            pm.set_pixel_unchecked(xx, yy, val as u32);
        }
    }
}

fn fill_disc(pm: &mut PixMut, cx: u32, cy: u32, r: u32, val: u8) {
    let r = r as i64;
    for dy in -r..=r {
        for dx in -r..=r {
            if dx * dx + dy * dy > r * r {
                continue;
            }
            let (x, y) = (cx as i64 + dx, cy as i64 + dy);
            if x >= 0 && y >= 0 && x < pm.width() as i64 && y < pm.height() as i64 {
                pm.set_pixel_unchecked(x as u32, y as u32, val as u32);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dice_scene_values() {
        let die = DieSpec::new(10, 10, 42, 1);
        let pix = dice_scene(80, 60, &[die]).unwrap();
        assert_eq!(pix.get_pixel(0, 0), Some(TABLE as u32));
        assert_eq!(pix.get_pixel(12, 12), Some(FACE as u32));
        assert_eq!(pix.get_pixel(30, 30), Some(PIP as u32));
    }

    #[test]
    fn test_pip_layouts() {
        for n in 1..=6 {
            assert_eq!(DieSpec::new(0, 0, 60, n).pip_centers().len(), n as usize);
        }
    }

    #[test]
    fn test_die_outside_rejected() {
        assert!(dice_scene(50, 50, &[DieSpec::new(20, 20, 40, 3)]).is_err());
        assert!(dice_scene(50, 50, &[DieSpec::new(0, 0, 40, 7)]).is_err());
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let a = random_mask(20, 20, 0.3, 7).unwrap();
        let b = random_mask(20, 20, 0.3, 7).unwrap();
        assert_eq!(a, b);
        assert!(a.data().iter().all(|&v| v <= 1));

        let base = dice_scene(40, 40, &[DieSpec::new(5, 5, 30, 2)]).unwrap();
        assert_eq!(add_noise(&base, 4, 1), add_noise(&base, 4, 1));
    }
}
