//! Rendering adapters for `VisualizationSpec` and `FitReport`.
//! None of these contain fit logic.

pub mod svg;
pub mod markdown;
pub mod json;

pub use svg::SvgFormatter;
pub use markdown::MarkdownFormatter;
pub use json::JsonFormatter;
