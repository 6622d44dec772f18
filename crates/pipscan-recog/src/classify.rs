//! Object and feature classification
//!
//! Both classifiers run the same staged pipeline on an 8-bit intensity
//! image:
//!
//! 1. Threshold at a percentage of the dynamic range (`sample > tau`)
//! 2. Clean the bright mask with a square morphological opening
//! 3. Pick the polarity: bright objects, or the dark complement for
//!    features
//! 4. Label 4-connected regions
//! 5. Filter the regions
//!
//! Every stage produces a new buffer; the input is never modified.

use crate::threshold::{check_gray, invert_mask, threshold_bright, value_in_dynamic_range};
use crate::{RecogError, RecogResult};
use pipscan_core::Pix;
use pipscan_region::{
    LabelStatus, Labeling, MinSize, PipSelect, Region, filter_regions, label_regions,
    max_region_size,
};

/// Options for [`classify_objects`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObjectOptions {
    /// Threshold as a percentage of the dynamic range
    pub threshold_percent: u8,
    /// Side of the square opening used for cleanup
    pub morph_size: u32,
}

impl Default for ObjectOptions {
    fn default() -> Self {
        Self {
            threshold_percent: 70,
            morph_size: 3,
        }
    }
}

impl ObjectOptions {
    /// Set the threshold percentage
    pub fn with_threshold_percent(mut self, percent: u8) -> Self {
        self.threshold_percent = percent;
        self
    }

    /// Set the opening size
    pub fn with_morph_size(mut self, size: u32) -> Self {
        self.morph_size = size;
        self
    }

    /// Check the parameters.
    pub fn validate(&self) -> RecogResult<()> {
        check_percent("threshold_percent", self.threshold_percent)?;
        check_morph_size(self.morph_size)
    }
}

/// Options for [`classify_features`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureOptions {
    /// Threshold as a percentage of the dynamic range
    pub threshold_percent: u8,
    /// Side of the square opening used for cleanup
    pub morph_size: u32,
    /// Percentage of the dynamic range a region's darkest pixel must not
    /// exceed
    pub dark_percent: u8,
    /// Minimum bounding box aspect ratio (short side over long side)
    pub min_aspect_ratio: f64,
}

impl Default for FeatureOptions {
    fn default() -> Self {
        Self {
            threshold_percent: 40,
            morph_size: 5,
            dark_percent: 5,
            min_aspect_ratio: 0.75,
        }
    }
}

impl FeatureOptions {
    /// Set the threshold percentage
    pub fn with_threshold_percent(mut self, percent: u8) -> Self {
        self.threshold_percent = percent;
        self
    }

    /// Set the opening size
    pub fn with_morph_size(mut self, size: u32) -> Self {
        self.morph_size = size;
        self
    }

    /// Set the dark-core percentage
    pub fn with_dark_percent(mut self, percent: u8) -> Self {
        self.dark_percent = percent;
        self
    }

    /// Set the minimum aspect ratio
    pub fn with_min_aspect_ratio(mut self, ratio: f64) -> Self {
        self.min_aspect_ratio = ratio;
        self
    }

    /// Check the parameters.
    pub fn validate(&self) -> RecogResult<()> {
        check_percent("threshold_percent", self.threshold_percent)?;
        check_morph_size(self.morph_size)?;
        check_percent("dark_percent", self.dark_percent)?;
        if !(0.0..=1.0).contains(&self.min_aspect_ratio) {
            return Err(RecogError::InvalidParameters(format!(
                "min_aspect_ratio must be in [0, 1], got {}",
                self.min_aspect_ratio
            )));
        }
        Ok(())
    }
}

fn check_percent(name: &str, percent: u8) -> RecogResult<()> {
    if percent > 100 {
        return Err(RecogError::InvalidParameters(format!(
            "{name} must be at most 100, got {percent}"
        )));
    }
    Ok(())
}

fn check_morph_size(size: u32) -> RecogResult<()> {
    if size == 0 {
        return Err(RecogError::InvalidParameters(
            "morph_size must be positive".to_string(),
        ));
    }
    Ok(())
}

/// Output of a classification call
#[derive(Debug, Clone)]
pub struct Classification {
    /// Label buffer holding exactly the surviving regions
    pub labels: Pix,
    /// Surviving regions, in label order
    pub regions: Vec<Region>,
    /// Whether labeling saw every region before filtering
    pub status: LabelStatus,
    /// Threshold used for the binary mask
    pub threshold: u8,
    /// Dark-core limit, for feature classification
    pub dark_limit: Option<u8>,
}

impl Classification {
    /// Number of surviving regions
    pub fn len(&self) -> usize {
        self.regions.len()
    }

    /// Check if no region survived
    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }

    /// Turn a label capacity overflow into an error.
    pub fn check_capacity(&self) -> RecogResult<()> {
        match self.status {
            LabelStatus::Complete => Ok(()),
            LabelStatus::CapacityExceeded => Err(
                pipscan_region::RegionError::LabelCapacityExceeded {
                    max: pipscan_region::MAX_REGIONS,
                }
                .into(),
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Polarity {
    /// Label the bright mask
    Bright,
    /// Label the complement of the bright mask
    Dark,
}

/// Stages 1 to 4: threshold, clean, pick polarity, label.
fn segment(
    pix: &Pix,
    percent: u8,
    morph_size: u32,
    polarity: Polarity,
) -> RecogResult<(Labeling, u8)> {
    let tau = value_in_dynamic_range(pix, percent)?;
    let mask = threshold_bright(pix, tau)?;
    tracing::debug!("threshold at {}% of dynamic range: tau = {}", percent, tau);

    let cleaned = pipscan_morph::open_brick(&mask, morph_size, morph_size)?;
    tracing::debug!("opened mask with {}x{} brick", morph_size, morph_size);

    let foreground = match polarity {
        Polarity::Bright => cleaned,
        Polarity::Dark => invert_mask(&cleaned)?,
    };

    let labeling = label_regions(&foreground)?;
    tracing::debug!(
        "labeled {} {:?} regions ({:?})",
        labeling.regions.len(),
        polarity,
        labeling.status
    );
    Ok((labeling, tau))
}

/// Find bright objects (e.g. dice) in an intensity image.
///
/// Regions smaller than half the largest region are removed.
///
/// # Errors
///
/// Returns [`RecogError::InvalidBufferType`] for non-8-bit input and
/// [`RecogError::InvalidParameters`] for invalid options.
pub fn classify_objects(pix: &Pix, options: &ObjectOptions) -> RecogResult<Classification> {
    check_gray(pix)?;
    options.validate()?;

    let (labeling, threshold) = segment(
        pix,
        options.threshold_percent,
        options.morph_size,
        Polarity::Bright,
    )?;

    let min_size = max_region_size(&labeling.regions) / 2;
    let (labels, regions) =
        filter_regions(labeling.pix, labeling.regions, &mut MinSize(min_size))?;
    tracing::debug!("{} objects of at least {} pixels", regions.len(), min_size);

    Ok(Classification {
        labels,
        regions,
        status: labeling.status,
        threshold,
        dark_limit: None,
    })
}

/// Find dark, roughly square features (e.g. pips) in an intensity image.
///
/// The image should show a single object, typically a crop of one region
/// returned by [`classify_objects`]. Dark regions are kept only if they
/// contain a pixel at or below `dark_percent` of the dynamic range and
/// their bounding box is close enough to square.
///
/// # Errors
///
/// Returns [`RecogError::InvalidBufferType`] for non-8-bit input and
/// [`RecogError::InvalidParameters`] for invalid options.
pub fn classify_features(pix: &Pix, options: &FeatureOptions) -> RecogResult<Classification> {
    check_gray(pix)?;
    options.validate()?;

    let (labeling, threshold) = segment(
        pix,
        options.threshold_percent,
        options.morph_size,
        Polarity::Dark,
    )?;

    let dark_limit = value_in_dynamic_range(pix, options.dark_percent)?;
    let mut select = PipSelect::new(pix, dark_limit, options.min_aspect_ratio)?;
    let (labels, regions) = filter_regions(labeling.pix, labeling.regions, &mut select)?;
    tracing::debug!("{} features with dark limit {}", regions.len(), dark_limit);

    Ok(Classification {
        labels,
        regions,
        status: labeling.status,
        threshold,
        dark_limit: Some(dark_limit),
    })
}
