//! Engine Configuration
//!
//! Runtime knobs for the fallbacks. The reference data itself is static and
//! lives in `fit::reference_table` and `visualization::silhouette`.

use crate::types::{GarmentType, SizeLabel};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Size recommended without usable measurements, and the reference row
    /// used for undeclared sizes
    pub default_size: SizeLabel,

    /// Garment used for unknown garment type tokens
    pub fallback_garment: GarmentType,

    /// Run the table/silhouette self-check when the engine is built
    pub validate_on_startup: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            default_size: SizeLabel::M,
            fallback_garment: GarmentType::Tshirt,
            validate_on_startup: true,
        }
    }
}

impl EngineConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read engine config: {:?}", path))?;
        Self::from_json_str(&contents)
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).with_context(|| "Failed to parse engine config JSON")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.default_size, SizeLabel::M);
        assert_eq!(config.fallback_garment, GarmentType::Tshirt);
        assert!(config.validate_on_startup);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EngineConfig::from_json_str(r#"{"default_size": "L"}"#).unwrap();
        assert_eq!(config.default_size, SizeLabel::L);
        assert_eq!(config.fallback_garment, GarmentType::Tshirt);
    }

    #[test]
    fn test_bad_json_is_an_error() {
        assert!(EngineConfig::from_json_str(r#"{"default_size": "huge"}"#).is_err());
        assert!(EngineConfig::load(Path::new("/nonexistent/fit_engine.json")).is_err());
    }
}
