//! Garment Fit Engine
//!
//! Evaluates how a garment size fits a body, region by region, recommends a
//! size from body measurements, and maps the result onto a colored garment
//! silhouette.
//!
//! Layout:
//! - `types`, `measurements`: closed vocabularies and the measurement bag
//! - `fit/`: reference tables, size recommendation, fit evaluation, colors
//! - `visualization/`: static silhouettes and the result → shapes mapper
//! - `formatters/`: SVG, Markdown and JSON renderings
//! - `engine`: string-token entry points with fallbacks and batch evaluation

pub mod types;
pub mod measurements;
pub mod error;
pub mod config;
pub mod fit;
pub mod visualization;
pub mod formatters;
pub mod engine;
pub mod profiles;

// Re-export commonly used types
pub use types::{FitClass, GarmentType, MeasurementKey, Region, SizeLabel};
pub use measurements::Measurements;
pub use error::ConfigError;
pub use config::EngineConfig;
pub use fit::{ColorScale, DerivedMeasurement, FitEvaluator, FitReferenceTable, FitResult, SizeRecommender};
pub use visualization::{VisualizationMapper, VisualizationSpec};
pub use formatters::{JsonFormatter, MarkdownFormatter, SvgFormatter};
pub use engine::{FitEngine, FitReport, FitRequest};
