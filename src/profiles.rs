//! Sample measurement profiles
//!
//! Three hardcoded body profiles spanning the size ladders, used by the
//! report binary, benchmarks and tests.

use crate::measurements::Measurements;
use crate::types::MeasurementKey;

#[derive(Debug, Clone)]
pub struct SampleProfile {
    pub name: &'static str,
    pub measurements: Measurements,
}

/// Small frame: XS on every ladder
pub fn petite() -> SampleProfile {
    SampleProfile {
        name: "Petite",
        measurements: Measurements::from_pairs([
            (MeasurementKey::Chest, 84.0),
            (MeasurementKey::Waist, 68.0),
            (MeasurementKey::Hips, 88.0),
            (MeasurementKey::Inseam, 74.0),
            (MeasurementKey::Shoulders, 38.0),
            (MeasurementKey::Sleeves, 56.0),
            (MeasurementKey::Thighs, 50.0),
        ]),
    }
}

/// Mid-range frame: M on every ladder
pub fn average() -> SampleProfile {
    SampleProfile {
        name: "Average",
        measurements: Measurements::from_pairs([
            (MeasurementKey::Chest, 100.0),
            (MeasurementKey::Waist, 85.0),
            (MeasurementKey::Hips, 100.0),
            (MeasurementKey::Inseam, 80.0),
            (MeasurementKey::Shoulders, 44.0),
            (MeasurementKey::Sleeves, 62.0),
            (MeasurementKey::Thighs, 56.0),
        ]),
    }
}

/// Tall frame: L for tops and pants, chest decides the dress
pub fn tall() -> SampleProfile {
    SampleProfile {
        name: "Tall",
        measurements: Measurements::from_pairs([
            (MeasurementKey::Chest, 112.0),
            (MeasurementKey::Waist, 96.0),
            (MeasurementKey::Hips, 108.0),
            (MeasurementKey::Inseam, 88.0),
            (MeasurementKey::Shoulders, 48.0),
            (MeasurementKey::Sleeves, 66.0),
            (MeasurementKey::Thighs, 60.0),
        ]),
    }
}

pub fn sample_profiles() -> Vec<SampleProfile> {
    vec![petite(), average(), tall()]
}
