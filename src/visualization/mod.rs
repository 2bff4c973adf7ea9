//! Fit Visualization
//!
//! Maps fit results onto static garment silhouettes. The output
//! (`VisualizationSpec`) is plain data for any 2D surface; see `formatters`
//! for the SVG and markdown adapters.

pub mod silhouette;
pub mod mapper;

pub use silhouette::{layout_for, validate_layouts, Canvas, Geometry, SilhouetteLayout};
pub use mapper::{DetailRow, ShapeDescriptor, VisualizationMapper, VisualizationSpec, MISSING_VALUE, NEUTRAL_FILL};
