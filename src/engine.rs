//! Fit Engine
//!
//! Composed entry points over the fit core: `recommend` and
//! `evaluate_and_visualize`, taking the raw string tokens a selection
//! control supplies. Unknown tokens fall back (with a warning) instead of
//! failing; only the startup self-check in `new`/`with_config` can fail.
//!
//! The engine holds no mutable state and is `Send + Sync`, so one instance
//! can serve any number of threads. `evaluate_many` uses rayon for batches.

use crate::config::EngineConfig;
use crate::error::ConfigError;
use crate::fit::{FitEvaluator, FitReferenceTable, FitResult, SizeRecommender};
use crate::measurements::Measurements;
use crate::types::{GarmentType, SizeLabel};
use crate::visualization::{validate_layouts, VisualizationMapper, VisualizationSpec};
use rayon::prelude::*;
use serde::Serialize;

/// Combined output of one evaluation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FitReport {
    pub fit: FitResult,
    pub visualization: VisualizationSpec,
}

/// One entry of a batch evaluation
#[derive(Debug, Clone, Default)]
pub struct FitRequest {
    pub garment_type: String,
    pub size: String,
    pub measurements: Option<Measurements>,
}

impl FitRequest {
    pub fn new(garment_type: &str, size: &str, measurements: Option<Measurements>) -> Self {
        Self {
            garment_type: garment_type.to_string(),
            size: size.to_string(),
            measurements,
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FitEngine {
    config: EngineConfig,
    evaluator: FitEvaluator,
}

impl FitEngine {
    /// Engine over the built-in tables with default configuration
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_config(EngineConfig::default())
    }

    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        let table = FitReferenceTable::new_builtin(config.default_size, config.fallback_garment);

        if config.validate_on_startup {
            table.validate()?;
            validate_layouts(&table)?;
            tracing::info!(
                "Fit reference tables and silhouettes validated ({} garment types)",
                GarmentType::all().len()
            );
        }

        Ok(Self {
            config,
            evaluator: FitEvaluator::new(table, SizeRecommender::new(config.default_size)),
        })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &FitEvaluator {
        &self.evaluator
    }

    /// Parse a garment token, falling back to the configured garment
    pub fn resolve_garment(&self, garment_type: &str) -> GarmentType {
        GarmentType::parse(garment_type).unwrap_or_else(|| {
            tracing::warn!(
                "Unknown garment type '{}'; falling back to '{}'",
                garment_type,
                self.config.fallback_garment
            );
            self.config.fallback_garment
        })
    }

    /// Recommended size for a garment type token
    pub fn recommend(&self, garment_type: &str, measurements: Option<&Measurements>) -> SizeLabel {
        let garment = self.resolve_garment(garment_type);
        self.evaluator.recommender().recommend(garment, measurements)
    }

    /// Fit result only, without the visualization
    pub fn evaluate(
        &self,
        garment_type: &str,
        size: &str,
        measurements: Option<&Measurements>,
    ) -> FitResult {
        let garment = self.resolve_garment(garment_type);
        let requested = SizeLabel::parse(size);
        if requested.is_none() {
            tracing::warn!(
                "Unknown size '{}'; using the {} reference entry",
                size,
                self.config.default_size
            );
        }

        let mut result = self.evaluator.evaluate_requested(garment, requested, measurements);
        result.garment_fell_back |= GarmentType::parse(garment_type).is_none();
        result
    }

    /// Fit result plus its visualization
    pub fn evaluate_and_visualize(
        &self,
        garment_type: &str,
        size: &str,
        measurements: Option<&Measurements>,
    ) -> FitReport {
        let fit = self.evaluate(garment_type, size, measurements);
        let visualization = VisualizationMapper::map(fit.garment, &fit);
        FitReport { fit, visualization }
    }

    /// Evaluate independent requests in parallel, preserving input order
    pub fn evaluate_many(&self, requests: &[FitRequest]) -> Vec<FitReport> {
        tracing::debug!("Batch evaluation of {} requests", requests.len());
        requests
            .par_iter()
            .map(|req| {
                self.evaluate_and_visualize(&req.garment_type, &req.size, req.measurements.as_ref())
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MeasurementKey, Region};

    #[test]
    fn test_builtin_engine_builds() {
        assert!(FitEngine::new().is_ok());
    }

    #[test]
    fn test_unknown_garment_falls_back_to_tshirt() {
        let engine = FitEngine::new().unwrap();
        let m = Measurements::new().with(MeasurementKey::Chest, 95.0);
        assert_eq!(engine.recommend("poncho", Some(&m)), SizeLabel::S);

        let report = engine.evaluate_and_visualize("poncho", "M", Some(&m));
        assert_eq!(report.fit.garment, GarmentType::Tshirt);
        assert!(report.fit.garment_fell_back);
        assert_eq!(report.visualization.garment, GarmentType::Tshirt);
    }

    #[test]
    fn test_unknown_size_uses_m_row() {
        let engine = FitEngine::new().unwrap();
        let result = engine.evaluate("jacket", "XXXL", None);
        assert_eq!(result.requested_size, None);
        assert_eq!(result.reference_size, SizeLabel::M);
        assert!(result.size_fell_back);
        assert!(!result.is_recommended_size);
        assert_eq!(
            result.classes,
            engine.evaluator().table().classes_for(GarmentType::Jacket, SizeLabel::M)
        );
    }

    #[test]
    fn test_configured_default_size() {
        let config = EngineConfig {
            default_size: SizeLabel::L,
            ..EngineConfig::default()
        };
        let engine = FitEngine::with_config(config).unwrap();
        assert_eq!(engine.recommend("dress", None), SizeLabel::L);
        assert_eq!(engine.evaluate("dress", "??", None).reference_size, SizeLabel::L);
    }

    #[test]
    fn test_undeclared_default_fails_startup_check() {
        let config = EngineConfig {
            default_size: SizeLabel::XXL,
            ..EngineConfig::default()
        };
        assert!(matches!(
            FitEngine::with_config(config),
            Err(ConfigError::DefaultSizeMissing { .. })
        ));
    }

    #[test]
    fn test_evaluate_many_preserves_order() {
        let engine = FitEngine::new().unwrap();
        let m = Measurements::new()
            .with(MeasurementKey::Waist, 90.0)
            .with(MeasurementKey::Chest, 101.0);
        let requests = vec![
            FitRequest::new("pants", "M", Some(m.clone())),
            FitRequest::new("tshirt", "XS", Some(m.clone())),
            FitRequest::new("dress", "L", None),
        ];

        let reports = engine.evaluate_many(&requests);
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].fit.garment, GarmentType::Pants);
        assert_eq!(reports[1].fit.garment, GarmentType::Tshirt);
        assert_eq!(reports[2].fit.garment, GarmentType::Dress);

        for (req, report) in requests.iter().zip(&reports) {
            let single = engine.evaluate_and_visualize(&req.garment_type, &req.size, req.measurements.as_ref());
            assert_eq!(&single, report);
        }
        assert_eq!(reports[1].fit.derived_of(Region::Chest).value(), Some(93));
    }
}
