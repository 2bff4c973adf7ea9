//! Fit Evaluation
//!
//! Combines the reference table, the size recommender and the fit multiplier
//! table into a per-region fit result. The derived garment measurement for a
//! region is the user's body measurement scaled by the ease multiplier of
//! that region's fit class, rounded half-up to the nearest centimeter.

use super::reference_table::FitReferenceTable;
use super::size_recommender::SizeRecommender;
use crate::measurements::Measurements;
use crate::types::{FitClass, GarmentType, Region, SizeLabel};
use serde::{Serialize, Serializer};
use smallvec::SmallVec;
use std::collections::BTreeMap;

/// Garment-to-body ease multiplier per fit class, strictly increasing
pub static FIT_MULTIPLIERS: [(FitClass, f64); 5] = [
    (FitClass::Tight, 0.92),
    (FitClass::Snug, 0.97),
    (FitClass::Perfect, 1.03),
    (FitClass::Relaxed, 1.10),
    (FitClass::Loose, 1.20),
];

pub fn fit_multiplier(fit: FitClass) -> f64 {
    FIT_MULTIPLIERS[fit.ordinal()].1
}

/// Derived garment measurement for one region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DerivedMeasurement {
    Known(u32),
    Unknown,
}

impl DerivedMeasurement {
    pub fn value(&self) -> Option<u32> {
        match self {
            DerivedMeasurement::Known(v) => Some(*v),
            DerivedMeasurement::Unknown => None,
        }
    }

    pub fn is_known(&self) -> bool {
        matches!(self, DerivedMeasurement::Known(_))
    }
}

impl Serialize for DerivedMeasurement {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DerivedMeasurement::Known(v) => serializer.serialize_u32(*v),
            DerivedMeasurement::Unknown => serializer.serialize_str("unknown"),
        }
    }
}

/// Scale a body measurement by the fit multiplier, rounding half-up.
/// Results beyond `u32::MAX` cm are clamped with a warning.
pub fn derive_garment_measurement(user_value: f64, fit: FitClass) -> u32 {
    // Values are validated positive, so round() (half away from zero) is half-up
    let rounded = (user_value * fit_multiplier(fit)).round();
    if rounded > u32::MAX as f64 {
        tracing::warn!(
            "Derived measurement {} cm out of range for a {} fit; clamping to {}",
            rounded,
            fit,
            u32::MAX
        );
        return u32::MAX;
    }
    rounded as u32
}

/// Complete per-region fit for one garment/size/measurement combination
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitResult {
    pub garment: GarmentType,
    /// Size the caller asked for; `None` when the token was not a size
    pub requested_size: Option<SizeLabel>,
    /// Size whose reference row supplied the classes
    pub reference_size: SizeLabel,
    pub regions: SmallVec<[Region; 4]>,
    pub classes: BTreeMap<Region, FitClass>,
    /// Valid user measurements per region, where the region has one
    pub user_measurements: BTreeMap<Region, f64>,
    pub derived: BTreeMap<Region, DerivedMeasurement>,
    pub recommended_size: SizeLabel,
    pub is_recommended_size: bool,
    pub garment_fell_back: bool,
    pub size_fell_back: bool,
}

impl FitResult {
    pub fn class_of(&self, region: Region) -> Option<FitClass> {
        self.classes.get(&region).copied()
    }

    pub fn derived_of(&self, region: Region) -> DerivedMeasurement {
        self.derived
            .get(&region)
            .copied()
            .unwrap_or(DerivedMeasurement::Unknown)
    }

    pub fn user_measurement_of(&self, region: Region) -> Option<f64> {
        self.user_measurements.get(&region).copied()
    }

    /// Banner text shown next to the recommended size
    pub fn recommendation_message(&self) -> String {
        if self.is_recommended_size {
            "This is your ideal size based on your measurements.".to_string()
        } else {
            format!("Consider trying size {} for a better fit.", self.recommended_size)
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FitEvaluator {
    table: FitReferenceTable,
    recommender: SizeRecommender,
}

impl FitEvaluator {
    pub fn new(table: FitReferenceTable, recommender: SizeRecommender) -> Self {
        Self { table, recommender }
    }

    pub fn table(&self) -> &FitReferenceTable {
        &self.table
    }

    pub fn recommender(&self) -> &SizeRecommender {
        &self.recommender
    }

    /// Evaluate a garment in a specific size
    pub fn evaluate(
        &self,
        garment: GarmentType,
        size: SizeLabel,
        measurements: Option<&Measurements>,
    ) -> FitResult {
        self.evaluate_requested(garment, Some(size), measurements)
    }

    /// Evaluate with a possibly unrecognised size. `None` uses the default
    /// reference row and is never the recommended size.
    pub(crate) fn evaluate_requested(
        &self,
        garment: GarmentType,
        requested_size: Option<SizeLabel>,
        measurements: Option<&Measurements>,
    ) -> FitResult {
        let lookup_size = requested_size.unwrap_or_else(|| self.table.default_size());
        let lookup = self.table.lookup(garment, lookup_size);
        let regions: SmallVec<[Region; 4]> = self.table.regions(garment).iter().copied().collect();

        let mut user_measurements = BTreeMap::new();
        let mut derived = BTreeMap::new();

        for &region in &regions {
            let Some(fit) = lookup.classes.get(&region).copied() else {
                tracing::error!("No fit class for '{}' region '{}'", lookup.garment, region);
                derived.insert(region, DerivedMeasurement::Unknown);
                continue;
            };

            let user_value = region.measurement_key().and_then(|key| {
                if let Some(m) = measurements {
                    if m.is_invalid(key) {
                        tracing::warn!("Ignoring invalid {} measurement: {:?}", key, m.raw(key));
                    }
                }
                measurements.and_then(|m| m.get(key))
            });

            let value = match user_value {
                Some(v) => {
                    user_measurements.insert(region, v);
                    DerivedMeasurement::Known(derive_garment_measurement(v, fit))
                }
                None => DerivedMeasurement::Unknown,
            };
            derived.insert(region, value);
        }

        let recommended_size = self.recommender.recommend(garment, measurements);

        tracing::debug!(
            "Evaluated '{}' size {:?} (reference {}): {} of {} regions measured, recommended {}",
            garment,
            requested_size,
            lookup.size,
            user_measurements.len(),
            regions.len(),
            recommended_size
        );

        FitResult {
            garment: lookup.garment,
            requested_size,
            reference_size: lookup.size,
            regions,
            classes: lookup.classes,
            user_measurements,
            derived,
            recommended_size,
            is_recommended_size: requested_size == Some(recommended_size),
            garment_fell_back: lookup.garment_fell_back,
            size_fell_back: lookup.size_fell_back || requested_size.is_none(),
        }
    }
}

impl Default for FitEvaluator {
    fn default() -> Self {
        Self::new(FitReferenceTable::builtin(), SizeRecommender::default())
    }
}
