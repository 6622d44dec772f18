//! Region labeling regression test
//!
//! Checks the invariants of `label_regions` on seeded random masks and the
//! label capacity boundary.
//!
//! Run with:
//! ```
//! cargo test -p pipscan-region --test label_reg
//! ```
//!
//! Generate golden files:
//! ```
//! REGTEST_MODE=generate cargo test -p pipscan-region --test label_reg
//! ```

use pipscan_core::{ImageFormat, Pix, PixelDepth};
use pipscan_region::{
    LabelStatus, MAX_REGIONS, RegionError, count_label, erase_region, label_regions,
    labels_to_rgb,
};
use pipscan_test::{RegParams, synthetic};

/// Row of `n` isolated single-pixel regions.
fn dotted_row(n: u32) -> Pix {
    let mut pm = Pix::new(2 * n, 1, PixelDepth::Bit8).unwrap().into_mut();
    for i in 0..n {
        pm.set_pixel(2 * i, 0, 1).unwrap();
    }
    pm.into()
}

#[test]
fn label_reg() {
    pipscan_test::init_logging();
    let mut rp = RegParams::new("label");

    let binary = synthetic::random_mask(64, 48, 0.45, 17).unwrap();
    let labeling = label_regions(&binary).unwrap();
    eprintln!(
        "{} regions, status {:?}",
        labeling.regions.len(),
        labeling.status
    );

    // The final buffer never holds the transient foreground value
    rp.compare_values(0.0, count_label(&labeling.pix, 1).unwrap() as f64, 0.0);

    // Conservation and centroid containment
    let mut labeled_total = 0u32;
    for (i, region) in labeling.regions.iter().enumerate() {
        assert_eq!(region.label as usize, i + 2, "labels are consecutive");
        let n = count_label(&labeling.pix, region.label).unwrap();
        assert_eq!(n, region.pixel_count, "conservation for label {}", region.label);
        assert!(
            region.bounds.contains_point(region.centroid.x, region.centroid.y),
            "centroid {:?} outside {:?}",
            region.centroid,
            region.bounds
        );
        assert!(region.pixel_count as i64 <= region.bounds.area());
        labeled_total += n;
    }
    let foreground = binary.count_pixels_with_value(1).unwrap();
    if labeling.status == LabelStatus::Complete {
        rp.compare_values(foreground as f64, labeled_total as f64, 0.0);
    } else {
        assert!(labeled_total < foreground);
    }

    // Labeling is deterministic
    let again = label_regions(&binary).unwrap();
    rp.compare_pix(&labeling.pix, &again.pix);
    assert_eq!(labeling.regions, again.regions);

    let rgb = labels_to_rgb(&labeling.pix).unwrap();
    rp.write_pix_and_check(&rgb, ImageFormat::Png).unwrap();

    assert!(rp.cleanup(), "label regression test failed");
}

#[test]
fn label_erase_roundtrip_reg() {
    let mut rp = RegParams::new("label_erase");

    // Small enough that labels cannot run out
    let binary = synthetic::random_mask(24, 16, 0.5, 3).unwrap();
    let labeling = label_regions(&binary).unwrap();
    assert_eq!(labeling.status, LabelStatus::Complete);

    for region in labeling.regions.iter().step_by(5) {
        let mut labels = labeling.pix.to_mut();
        let erased = erase_region(&mut labels, region).unwrap();
        rp.compare_values(region.pixel_count as f64, erased as f64, 0.0);
        let labels: Pix = labels.into();

        // Foreground that is no longer labeled is exactly the erased region
        let mut restored = Pix::new(24, 16, PixelDepth::Bit8).unwrap().into_mut();
        for (i, (&b, &l)) in binary.data().iter().zip(labels.data()).enumerate() {
            restored.data_mut()[i] = (b == 1 && l == 0) as u8;
        }
        let relabeled = label_regions(&restored.into()).unwrap();

        assert_eq!(relabeled.regions.len(), 1);
        let again = relabeled.regions[0];
        assert_eq!(again.pixel_count, region.pixel_count);
        assert_eq!(again.centroid, region.centroid);
        assert_eq!(again.bounds, region.bounds);
    }

    assert!(rp.cleanup(), "label_erase regression test failed");
}

#[test]
fn label_capacity_reg() {
    let mut rp = RegParams::new("label_capacity");

    let full = label_regions(&dotted_row(MAX_REGIONS as u32)).unwrap();
    rp.compare_values(254.0, full.regions.len() as f64, 0.0);
    assert_eq!(full.status, LabelStatus::Complete);
    assert!(full.check_capacity().is_ok());
    assert_eq!(full.regions.last().map(|r| r.label), Some(255));

    let over = label_regions(&dotted_row(MAX_REGIONS as u32 + 1)).unwrap();
    rp.compare_values(254.0, over.regions.len() as f64, 0.0);
    assert_eq!(over.status, LabelStatus::CapacityExceeded);
    assert!(matches!(
        over.check_capacity(),
        Err(RegionError::LabelCapacityExceeded { max: 254 })
    ));

    // The unlabeled dot is cleared, not left at 1
    rp.compare_values(0.0, count_label(&over.pix, 1).unwrap() as f64, 0.0);
    rp.compare_values(0.0, over.pix.get_pixel(2 * 254, 0).unwrap() as f64, 0.0);
    let labeled = over.pix.data().iter().filter(|&&v| v >= 2).count();
    rp.compare_values(254.0, labeled as f64, 0.0);

    assert!(rp.cleanup(), "label_capacity regression test failed");
}
