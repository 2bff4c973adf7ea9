//! Fit Engine Core
//!
//! Pure, stateless fit computation. Nothing here renders; the
//! visualization module and formatters consume the results.
//!
//! ## Architecture
//! - `color_scale.rs` - Fit class → color, legend and badge styling
//! - `reference_table.rs` - Static garment/size/region → fit class data
//! - `size_recommender.rs` - Threshold ladders and the dress tie-break
//! - `evaluator.rs` - Per-region fit result with derived garment measurements

pub mod color_scale;
pub mod reference_table;
pub mod size_recommender;
pub mod evaluator;

// Re-export public API
pub use color_scale::{ColorScale, LegendEntry, FIT_COLORS};
pub use reference_table::{FitReferenceTable, GarmentFitTable, ReferenceLookup, SizeFitRow};
pub use size_recommender::{SizeLadder, SizeRecommendation, SizeRecommender, CHEST_LADDER, HIPS_LADDER, WAIST_LADDER};
pub use evaluator::{
    derive_garment_measurement,
    fit_multiplier,
    DerivedMeasurement,
    FitEvaluator,
    FitResult,
    FIT_MULTIPLIERS,
};
