//! Configuration errors
//!
//! Only structural defects in the static tables are errors. They are caught
//! by the startup self-check in `FitEngine::new`; per-call evaluation never
//! fails.

use crate::types::{GarmentType, Region, SizeLabel};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("no fit reference table for garment type '{garment}'")]
    GarmentTableMissing { garment: GarmentType },

    #[error("fit reference table for '{garment}' size {size} has no fit class for region '{region}'")]
    ReferenceTableIncomplete {
        garment: GarmentType,
        size: SizeLabel,
        region: Region,
    },

    #[error("fit reference table for '{garment}' does not declare the default size {size}")]
    DefaultSizeMissing { garment: GarmentType, size: SizeLabel },

    #[error("silhouette for '{garment}' has no shape for region '{region}'")]
    SilhouetteIncomplete { garment: GarmentType, region: Region },

    #[error("silhouette for '{garment}' draws regions as {found:?}, expected {expected:?}")]
    SilhouetteOutOfOrder {
        garment: GarmentType,
        expected: Vec<Region>,
        found: Vec<Region>,
    },
}
