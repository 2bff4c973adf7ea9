//! Fit Domain Types
//!
//! Closed enums for garment types, sizes, body regions, fit classes and
//! measurement keys. Selection controls hand us plain string tokens, so each
//! enum also parses leniently (trimmed, case-insensitive) and returns `None`
//! for anything it does not recognise. The caller decides the fallback.

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Garment Type
// ============================================================================

/// Garment categories supported by the fit engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentType {
    Tshirt,
    Jacket,
    Pants,
    Dress,
}

impl GarmentType {
    /// Parse a selection token such as "tshirt" or "Pants"
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "tshirt" => Some(GarmentType::Tshirt),
            "jacket" => Some(GarmentType::Jacket),
            "pants" => Some(GarmentType::Pants),
            "dress" => Some(GarmentType::Dress),
            _ => None,
        }
    }

    /// Wire token (matches the serde representation)
    pub fn as_str(&self) -> &'static str {
        match self {
            GarmentType::Tshirt => "tshirt",
            GarmentType::Jacket => "jacket",
            GarmentType::Pants => "pants",
            GarmentType::Dress => "dress",
        }
    }

    /// Friendly name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            GarmentType::Tshirt => "T-Shirt",
            GarmentType::Jacket => "Jacket",
            GarmentType::Pants => "Pants",
            GarmentType::Dress => "Dress",
        }
    }

    /// Upper-body garments share the shorter silhouette canvas
    pub fn is_upper_body(&self) -> bool {
        matches!(self, GarmentType::Tshirt | GarmentType::Jacket)
    }

    /// Get all garment types
    pub fn all() -> &'static [GarmentType] {
        &[
            GarmentType::Tshirt,
            GarmentType::Jacket,
            GarmentType::Pants,
            GarmentType::Dress,
        ]
    }
}

impl fmt::Display for GarmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Size Label
// ============================================================================

/// Standard size tokens, totally ordered from smallest to largest.
///
/// `XXL` parses and orders correctly but the built-in reference tables do not
/// declare it, so lookups for it fall back to the default size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SizeLabel {
    XS,
    S,
    M,
    L,
    XL,
    XXL,
}

impl SizeLabel {
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_uppercase().as_str() {
            "XS" => Some(SizeLabel::XS),
            "S" => Some(SizeLabel::S),
            "M" => Some(SizeLabel::M),
            "L" => Some(SizeLabel::L),
            "XL" => Some(SizeLabel::XL),
            "XXL" => Some(SizeLabel::XXL),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SizeLabel::XS => "XS",
            SizeLabel::S => "S",
            SizeLabel::M => "M",
            SizeLabel::L => "L",
            SizeLabel::XL => "XL",
            SizeLabel::XXL => "XXL",
        }
    }

    pub fn all() -> &'static [SizeLabel] {
        &[
            SizeLabel::XS,
            SizeLabel::S,
            SizeLabel::M,
            SizeLabel::L,
            SizeLabel::XL,
            SizeLabel::XXL,
        ]
    }
}

impl fmt::Display for SizeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Measurement Key
// ============================================================================

/// Body dimensions a caller may supply (all in centimeters)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeasurementKey {
    Chest,
    Waist,
    Hips,
    Inseam,
    Shoulders,
    Sleeves,
    Thighs,
    Length,
}

impl MeasurementKey {
    pub fn parse(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "chest" => Some(MeasurementKey::Chest),
            "waist" => Some(MeasurementKey::Waist),
            "hips" => Some(MeasurementKey::Hips),
            "inseam" => Some(MeasurementKey::Inseam),
            "shoulders" => Some(MeasurementKey::Shoulders),
            "sleeves" => Some(MeasurementKey::Sleeves),
            "thighs" => Some(MeasurementKey::Thighs),
            "length" => Some(MeasurementKey::Length),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementKey::Chest => "chest",
            MeasurementKey::Waist => "waist",
            MeasurementKey::Hips => "hips",
            MeasurementKey::Inseam => "inseam",
            MeasurementKey::Shoulders => "shoulders",
            MeasurementKey::Sleeves => "sleeves",
            MeasurementKey::Thighs => "thighs",
            MeasurementKey::Length => "length",
        }
    }
}

impl fmt::Display for MeasurementKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Region
// ============================================================================

/// Body/garment area used as the unit of fit classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Region {
    Chest,
    Shoulders,
    Waist,
    Hips,
    Inseam,
    Thighs,
    Sleeves,
    Length,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::Chest => "chest",
            Region::Shoulders => "shoulders",
            Region::Waist => "waist",
            Region::Hips => "hips",
            Region::Inseam => "inseam",
            Region::Thighs => "thighs",
            Region::Sleeves => "sleeves",
            Region::Length => "length",
        }
    }

    /// Capitalized name for tables and tooltips
    pub fn display_name(&self) -> &'static str {
        match self {
            Region::Chest => "Chest",
            Region::Shoulders => "Shoulders",
            Region::Waist => "Waist",
            Region::Hips => "Hips",
            Region::Inseam => "Inseam",
            Region::Thighs => "Thighs",
            Region::Sleeves => "Sleeves",
            Region::Length => "Length",
        }
    }

    /// User measurement that feeds the derived garment measurement.
    /// Only the girth and inseam regions read one; the rest are classified
    /// but show no measurements.
    pub fn measurement_key(&self) -> Option<MeasurementKey> {
        match self {
            Region::Chest => Some(MeasurementKey::Chest),
            Region::Waist => Some(MeasurementKey::Waist),
            Region::Hips => Some(MeasurementKey::Hips),
            Region::Inseam => Some(MeasurementKey::Inseam),
            Region::Shoulders | Region::Thighs | Region::Sleeves | Region::Length => None,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Fit Class
// ============================================================================

/// Qualitative fit rating for a region, ordered tight → loose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitClass {
    Tight,
    Snug,
    Perfect,
    Relaxed,
    Loose,
}

impl FitClass {
    /// Position on the ordinal scale (tight = 0)
    pub fn ordinal(&self) -> usize {
        match self {
            FitClass::Tight => 0,
            FitClass::Snug => 1,
            FitClass::Perfect => 2,
            FitClass::Relaxed => 3,
            FitClass::Loose => 4,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FitClass::Tight => "tight",
            FitClass::Snug => "snug",
            FitClass::Perfect => "perfect",
            FitClass::Relaxed => "relaxed",
            FitClass::Loose => "loose",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            FitClass::Tight => "Tight",
            FitClass::Snug => "Snug",
            FitClass::Perfect => "Perfect",
            FitClass::Relaxed => "Relaxed",
            FitClass::Loose => "Loose",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            FitClass::Tight => "The garment will fit closely to your body with minimal ease.",
            FitClass::Snug => "A comfortable close fit with limited movement.",
            FitClass::Perfect => "Ideal balance of comfort and fit, with appropriate ease.",
            FitClass::Relaxed => "Looser fit with more room and movement.",
            FitClass::Loose => "Very generous fit, may appear oversized.",
        }
    }

    /// All classes in ordinal order
    pub fn all() -> &'static [FitClass] {
        &[
            FitClass::Tight,
            FitClass::Snug,
            FitClass::Perfect,
            FitClass::Relaxed,
            FitClass::Loose,
        ]
    }
}

impl fmt::Display for FitClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_garment_parse_is_lenient() {
        assert_eq!(GarmentType::parse("tshirt"), Some(GarmentType::Tshirt));
        assert_eq!(GarmentType::parse("  Pants "), Some(GarmentType::Pants));
        assert_eq!(GarmentType::parse("DRESS"), Some(GarmentType::Dress));
        assert_eq!(GarmentType::parse("scarf"), None);
        assert_eq!(GarmentType::parse(""), None);
    }

    #[test]
    fn test_size_ordering() {
        assert!(SizeLabel::XS < SizeLabel::S);
        assert!(SizeLabel::L < SizeLabel::XL);
        assert!(SizeLabel::XL < SizeLabel::XXL);
        assert_eq!(SizeLabel::S.max(SizeLabel::L), SizeLabel::L);
    }

    #[test]
    fn test_size_parse_round_trips_display() {
        for size in SizeLabel::all() {
            assert_eq!(SizeLabel::parse(&size.to_string()), Some(*size));
        }
        assert_eq!(SizeLabel::parse("xl"), Some(SizeLabel::XL));
        assert_eq!(SizeLabel::parse("XXXL"), None);
    }

    #[test]
    fn test_fit_class_ordinal_matches_declaration_order() {
        for (i, fit) in FitClass::all().iter().enumerate() {
            assert_eq!(fit.ordinal(), i);
        }
        assert!(FitClass::Tight < FitClass::Loose);
    }

    #[test]
    fn test_measurement_keys_cover_girth_and_inseam_only() {
        assert_eq!(Region::Length.measurement_key(), None);
        assert_eq!(Region::Shoulders.measurement_key(), None);
        assert_eq!(Region::Sleeves.measurement_key(), None);
        assert_eq!(Region::Thighs.measurement_key(), None);
        assert_eq!(Region::Hips.measurement_key(), Some(MeasurementKey::Hips));
        assert_eq!(Region::Chest.measurement_key(), Some(MeasurementKey::Chest));
        assert_eq!(Region::Inseam.measurement_key(), Some(MeasurementKey::Inseam));
    }

    #[test]
    fn test_serde_tokens() {
        assert_eq!(serde_json::to_string(&GarmentType::Tshirt).unwrap(), "\"tshirt\"");
        assert_eq!(serde_json::to_string(&SizeLabel::XL).unwrap(), "\"XL\"");
        assert_eq!(serde_json::to_string(&FitClass::Perfect).unwrap(), "\"perfect\"");
        assert_eq!(serde_json::to_string(&Region::Shoulders).unwrap(), "\"shoulders\"");
    }
}
