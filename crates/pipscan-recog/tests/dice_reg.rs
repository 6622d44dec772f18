//! Dice recognition regression test
//!
//! Runs the full pipeline on a synthetic scene of four dice with noise
//! and bright specks.
//!
//! Run with:
//! ```
//! cargo test -p pipscan-recog --test dice_reg
//! ```
//!
//! Generate golden files:
//! ```
//! REGTEST_MODE=generate cargo test -p pipscan-recog --test dice_reg
//! ```

use pipscan_core::{ImageFormat, Pix};
use pipscan_recog::{
    DiceOptions, FeatureOptions, ObjectOptions, classify_features, classify_objects, locate_dice,
};
use pipscan_region::{annotate_regions, count_label, labels_to_rgb};
use pipscan_test::RegParams;
use pipscan_test::synthetic::{self, DieSpec};

/// Four 70-pixel dice, listed in the order labeling finds them.
fn dice() -> [DieSpec; 4] {
    [
        DieSpec::new(10, 10, 70, 1),
        DieSpec::new(170, 10, 70, 4),
        DieSpec::new(90, 40, 70, 3),
        DieSpec::new(245, 60, 70, 6),
    ]
}

fn scene() -> Pix {
    let clean = synthetic::dice_scene(320, 140, &dice()).unwrap();
    let noisy = synthetic::add_noise(&clean, 6, 42);
    synthetic::add_specks(&noisy, 40, 7)
}

#[test]
fn dice_reg() {
    pipscan_test::init_logging();
    let mut rp = RegParams::new("dice");
    let pix = scene();

    let sequential = locate_dice(&pix, &DiceOptions::default().with_parallel(false)).unwrap();
    rp.compare_values(4.0, sequential.dice.len() as f64, 0.0);

    let expected: Vec<usize> = dice().iter().map(|d| d.pips as usize).collect();
    assert_eq!(sequential.pip_counts(), expected);
    rp.compare_values(14.0, sequential.total_pips() as f64, 0.0);

    for (face, spec) in sequential.faces.iter().zip(dice()) {
        let b = face.region.bounds;
        rp.compare_values(spec.x as f64, b.x as f64, 0.0);
        rp.compare_values(spec.y as f64, b.y as f64, 0.0);
        rp.compare_values(spec.size as f64, b.w as f64, 0.0);
        rp.compare_values(spec.size as f64, b.h as f64, 0.0);

        // Pip centroids land on the drawn pip centers
        for (pip, (cx, cy)) in face.pips.regions.iter().zip(spec.pip_centers()) {
            let x = pip.centroid.x + b.x;
            let y = pip.centroid.y + b.y;
            assert!((x - cx as i32).abs() <= 1 && (y - cy as i32).abs() <= 1);
        }
    }

    // The parallel run matches the sequential one exactly
    let parallel = locate_dice(&pix, &DiceOptions::default()).unwrap();
    rp.compare_pix(&sequential.dice.labels, &parallel.dice.labels);
    assert_eq!(sequential.pip_counts(), parallel.pip_counts());
    for (s, p) in sequential.faces.iter().zip(&parallel.faces) {
        assert_eq!(s.region, p.region);
        assert_eq!(s.pips.regions, p.pips.regions);
        rp.compare_pix(&s.pips.labels, &p.pips.labels);
    }

    let mut rgb = labels_to_rgb(&sequential.dice.labels).unwrap().into_mut();
    annotate_regions(&mut rgb, &sequential.dice.regions);
    rp.write_pix_and_check(&rgb.into(), ImageFormat::Png).unwrap();

    assert!(rp.cleanup(), "dice regression test failed");
}

#[test]
fn dice_stages_reg() {
    let mut rp = RegParams::new("dice_stages");
    let pix = scene();

    // Classification is idempotent and leaves the input alone
    let before = pix.clone();
    let first = classify_objects(&pix, &ObjectOptions::default()).unwrap();
    let second = classify_objects(&pix, &ObjectOptions::default()).unwrap();
    rp.compare_pix(&first.labels, &second.labels);
    assert_eq!(first.regions, second.regions);
    rp.compare_pix(&before, &pix);

    // The label buffer reflects exactly the surviving regions
    let nonzero = first.labels.data().iter().filter(|&&v| v != 0).count() as u32;
    let total: u32 = first.regions.iter().map(|r| r.pixel_count).sum();
    rp.compare_values(total as f64, nonzero as f64, 0.0);
    for region in &first.regions {
        let n = count_label(&first.labels, region.label).unwrap();
        rp.compare_values(region.pixel_count as f64, n as f64, 0.0);
    }

    // Pips of one die, on its crop
    let crop = pix.clip_rectangle(&first.regions[3].bounds).unwrap();
    let pips = classify_features(&crop, &FeatureOptions::default()).unwrap();
    rp.compare_values(6.0, pips.len() as f64, 0.0);
    assert!(pips.dark_limit.is_some_and(|limit| limit < pips.threshold));
    rp.write_pix_and_check(&labels_to_rgb(&pips.labels).unwrap(), ImageFormat::Png)
        .unwrap();

    // A stricter squareness requirement never keeps more
    let strict = FeatureOptions::default().with_min_aspect_ratio(1.0);
    let square_only = classify_features(&crop, &strict).unwrap();
    assert!(square_only.len() <= pips.len());

    assert!(rp.cleanup(), "dice_stages regression test failed");
}
