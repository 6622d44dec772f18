//! Dice location and pip counting
//!
//! Finds dice as bright objects in a scene, then classifies the pips on
//! each die within a crop of its bounding box. The per-die stage can run
//! on the rayon thread pool; each worker owns its crop.

use crate::classify::{
    Classification, FeatureOptions, ObjectOptions, classify_features, classify_objects,
};
use crate::threshold::check_gray;
use crate::RecogResult;
use pipscan_core::Pix;
use pipscan_region::Region;
use rayon::prelude::*;

/// Options for [`locate_dice`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiceOptions {
    /// Options for finding the dice
    pub objects: ObjectOptions,
    /// Options for finding the pips on each die
    pub features: FeatureOptions,
    /// Analyze dice in parallel
    pub parallel: bool,
}

impl Default for DiceOptions {
    fn default() -> Self {
        Self {
            objects: ObjectOptions::default(),
            features: FeatureOptions::default(),
            parallel: true,
        }
    }
}

impl DiceOptions {
    /// Set the die options
    pub fn with_objects(mut self, objects: ObjectOptions) -> Self {
        self.objects = objects;
        self
    }

    /// Set the pip options
    pub fn with_features(mut self, features: FeatureOptions) -> Self {
        self.features = features;
        self
    }

    /// Enable or disable parallel pip analysis
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }
}

/// One die and the pips found on it
#[derive(Debug, Clone)]
pub struct DieFace {
    /// The die's region in the scene
    pub region: Region,
    /// Pip classification in die-local coordinates (relative to the top
    /// left corner of `region.bounds`)
    pub pips: Classification,
}

impl DieFace {
    /// Number of pips on the die
    pub fn pip_count(&self) -> usize {
        self.pips.len()
    }
}

/// Result of [`locate_dice`]
#[derive(Debug, Clone)]
pub struct DiceReport {
    /// Dice classification of the whole scene
    pub dice: Classification,
    /// One entry per die, in the order of `dice.regions`
    pub faces: Vec<DieFace>,
}

impl DiceReport {
    /// Pip count of each die
    pub fn pip_counts(&self) -> Vec<usize> {
        self.faces.iter().map(DieFace::pip_count).collect()
    }

    /// Sum of the pips over all dice
    pub fn total_pips(&self) -> usize {
        self.faces.iter().map(DieFace::pip_count).sum()
    }
}

/// Locate dice in a scene and count the pips on each.
///
/// Results are identical whether or not `options.parallel` is set.
pub fn locate_dice(pix: &Pix, options: &DiceOptions) -> RecogResult<DiceReport> {
    check_gray(pix)?;
    options.objects.validate()?;
    options.features.validate()?;

    let dice = classify_objects(pix, &options.objects)?;
    tracing::debug!(
        "found {} dice, analyzing {}",
        dice.len(),
        if options.parallel { "in parallel" } else { "sequentially" }
    );

    let features = &options.features;
    let faces = if options.parallel {
        dice.regions
            .par_iter()
            .map(|region| analyze_die(pix, region, features))
            .collect::<RecogResult<Vec<_>>>()?
    } else {
        dice.regions
            .iter()
            .map(|region| analyze_die(pix, region, features))
            .collect::<RecogResult<Vec<_>>>()?
    };

    Ok(DiceReport { dice, faces })
}

fn analyze_die(pix: &Pix, region: &Region, features: &FeatureOptions) -> RecogResult<DieFace> {
    let crop = pix.clip_rectangle(&region.bounds)?;
    let pips = classify_features(&crop, features)?;
    tracing::debug!("die {} at {:?}: {} pips", region.label, region.bounds, pips.len());
    Ok(DieFace {
        region: *region,
        pips,
    })
}
