//! Size Recommendation
//!
//! Threshold ladders on the primary girth measurement of each garment.
//! Brackets are upper-exclusive: a value exactly on a threshold falls into
//! the next (larger) size.
//!
//! Dresses are sized on chest and hips independently and take the larger of
//! the two, so the dress is never undersized on either axis. A garment with
//! any of its axes unmeasured gets the default size.

use crate::measurements::Measurements;
use crate::types::{GarmentType, MeasurementKey, SizeLabel};
use serde::Serialize;
use smallvec::SmallVec;

/// Upper-exclusive threshold ladder for one measurement
#[derive(Debug)]
pub struct SizeLadder {
    pub key: MeasurementKey,
    /// (exclusive upper bound, size) in ascending order
    pub brackets: &'static [(f64, SizeLabel)],
    /// Size for values at or above the last bound
    pub top: SizeLabel,
}

impl SizeLadder {
    pub fn classify(&self, value: f64) -> SizeLabel {
        self.brackets
            .iter()
            .find(|(upper, _)| value < *upper)
            .map(|(_, size)| *size)
            .unwrap_or(self.top)
    }
}

// ============================================================================
// LADDERS
// ============================================================================

pub static CHEST_LADDER: SizeLadder = SizeLadder {
    key: MeasurementKey::Chest,
    brackets: &[
        (90.0, SizeLabel::XS),
        (100.0, SizeLabel::S),
        (110.0, SizeLabel::M),
        (120.0, SizeLabel::L),
    ],
    top: SizeLabel::XL,
};

pub static WAIST_LADDER: SizeLadder = SizeLadder {
    key: MeasurementKey::Waist,
    brackets: &[
        (75.0, SizeLabel::XS),
        (85.0, SizeLabel::S),
        (95.0, SizeLabel::M),
        (105.0, SizeLabel::L),
    ],
    top: SizeLabel::XL,
};

pub static HIPS_LADDER: SizeLadder = SizeLadder {
    key: MeasurementKey::Hips,
    brackets: &[
        (90.0, SizeLabel::XS),
        (100.0, SizeLabel::S),
        (110.0, SizeLabel::M),
        (120.0, SizeLabel::L),
    ],
    top: SizeLabel::XL,
};

static UPPER_BODY_LADDERS: [&SizeLadder; 1] = [&CHEST_LADDER];
static PANTS_LADDERS: [&SizeLadder; 1] = [&WAIST_LADDER];
static DRESS_LADDERS: [&SizeLadder; 2] = [&CHEST_LADDER, &HIPS_LADDER];

/// Ladders consulted for a garment
pub fn ladders_for(garment: GarmentType) -> &'static [&'static SizeLadder] {
    match garment {
        GarmentType::Tshirt | GarmentType::Jacket => &UPPER_BODY_LADDERS,
        GarmentType::Pants => &PANTS_LADDERS,
        GarmentType::Dress => &DRESS_LADDERS,
    }
}

// ============================================================================
// RECOMMENDER
// ============================================================================

/// Recommendation with the per-axis sizes that produced it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizeRecommendation {
    pub size: SizeLabel,
    pub axes: SmallVec<[(MeasurementKey, SizeLabel); 2]>,
    /// True when no usable measurement was available
    pub used_default: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct SizeRecommender {
    default_size: SizeLabel,
}

impl SizeRecommender {
    pub fn new(default_size: SizeLabel) -> Self {
        Self { default_size }
    }

    /// Recommended size label for a garment
    pub fn recommend(&self, garment: GarmentType, measurements: Option<&Measurements>) -> SizeLabel {
        self.recommend_detailed(garment, measurements).size
    }

    pub fn recommend_detailed(
        &self,
        garment: GarmentType,
        measurements: Option<&Measurements>,
    ) -> SizeRecommendation {
        let axes: SmallVec<[(MeasurementKey, SizeLabel); 2]> = measurements
            .map(|m| {
                ladders_for(garment)
                    .iter()
                    .filter_map(|ladder| m.get(ladder.key).map(|v| (ladder.key, ladder.classify(v))))
                    .collect()
            })
            .unwrap_or_default();

        // Every axis of the garment must be measured; the larger size wins
        let complete = axes.len() == ladders_for(garment).len();
        let recommendation = match axes.iter().map(|(_, size)| *size).max().filter(|_| complete) {
            Some(size) => SizeRecommendation {
                size,
                axes,
                used_default: false,
            },
            None => SizeRecommendation {
                size: self.default_size,
                axes,
                used_default: true,
            },
        };

        tracing::debug!(
            "Recommended {} for '{}' (axes: {:?}, default: {})",
            recommendation.size,
            garment,
            recommendation.axes,
            recommendation.used_default
        );

        recommendation
    }
}

impl Default for SizeRecommender {
    fn default() -> Self {
        Self::new(SizeLabel::M)
    }
}
