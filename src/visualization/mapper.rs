//! Visualization Mapping
//!
//! Turns a `FitResult` plus the garment's static silhouette into a
//! renderer-agnostic `VisualizationSpec`: colored shapes in draw order, the
//! legend, and the detail-table rows. No fit logic lives past this point.

use super::silhouette::{layout_for, Canvas, Geometry};
use crate::fit::{ColorScale, DerivedMeasurement, FitResult, LegendEntry};
use crate::measurements::format_cm;
use crate::types::{FitClass, GarmentType, Region, SizeLabel};
use serde::Serialize;

/// Fill for backdrop shapes and regions without a class
pub const NEUTRAL_FILL: &str = "#e0e0e0";

/// Placeholder for missing values in the detail table
pub const MISSING_VALUE: &str = "--";

/// One drawable shape
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShapeDescriptor {
    pub region: Option<Region>,
    pub label: &'static str,
    pub geometry: Geometry,
    pub color_hex: &'static str,
    pub opacity: f64,
    pub tooltip: Option<String>,
}

/// One row of the detail table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailRow {
    pub region: Region,
    pub region_label: &'static str,
    pub fit_class: Option<FitClass>,
    pub fit_label: String,
    /// Body measurement in cm, or "--"
    pub user_measurement: String,
    /// Derived garment measurement in cm, or "--"
    pub garment_measurement: String,
    pub badge_background: String,
    pub badge_text_color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VisualizationSpec {
    pub garment: GarmentType,
    pub canvas: Canvas,
    pub shapes: Vec<ShapeDescriptor>,
    pub legend: Vec<LegendEntry>,
    pub detail_rows: Vec<DetailRow>,
    pub recommended_size: SizeLabel,
    pub is_recommended_size: bool,
    pub recommendation_message: String,
}

impl VisualizationSpec {
    /// Distinct regions in shape draw order
    pub fn region_order(&self) -> Vec<Region> {
        let mut order: Vec<Region> = Vec::new();
        for region in self.shapes.iter().filter_map(|s| s.region) {
            if order.last() != Some(&region) {
                order.push(region);
            }
        }
        order
    }

    pub fn shapes_for(&self, region: Region) -> impl Iterator<Item = &ShapeDescriptor> {
        self.shapes.iter().filter(move |s| s.region == Some(region))
    }
}

/// Tooltip summarising a region's classification
pub fn region_tooltip(region: Region, fit: FitClass, derived: DerivedMeasurement) -> String {
    match derived {
        DerivedMeasurement::Known(cm) => format!(
            "{}: {} fit (garment ≈ {} cm). {}",
            region.display_name(),
            fit.display_name(),
            cm,
            fit.description()
        ),
        DerivedMeasurement::Unknown => format!(
            "{}: {} fit. {}",
            region.display_name(),
            fit.display_name(),
            fit.description()
        ),
    }
}

pub struct VisualizationMapper;

impl VisualizationMapper {
    /// Map a fit result onto its garment's silhouette. The layout always
    /// follows `fit.garment`; a disagreeing `garment` is logged and ignored.
    pub fn map(garment: GarmentType, fit: &FitResult) -> VisualizationSpec {
        if garment != fit.garment {
            tracing::warn!(
                "Visualization requested for '{}' but the fit result is for '{}'; using '{}'",
                garment,
                fit.garment,
                fit.garment
            );
        }
        let garment = fit.garment;
        let layout = layout_for(garment);

        let shapes = layout
            .shapes
            .iter()
            .map(|template| {
                let Some(region) = template.region else {
                    return ShapeDescriptor {
                        region: None,
                        label: template.label,
                        geometry: template.geometry,
                        color_hex: NEUTRAL_FILL,
                        opacity: template.opacity,
                        tooltip: None,
                    };
                };

                match fit.class_of(region) {
                    Some(class) => {
                        let geometry = match template.length_rule {
                            Some(rule) => template.geometry.with_height(rule.height_for(class)),
                            None => template.geometry,
                        };
                        ShapeDescriptor {
                            region: Some(region),
                            label: template.label,
                            geometry,
                            color_hex: ColorScale::color_for(class),
                            opacity: template.opacity,
                            tooltip: Some(region_tooltip(region, class, fit.derived_of(region))),
                        }
                    }
                    None => ShapeDescriptor {
                        region: Some(region),
                        label: template.label,
                        geometry: template.geometry,
                        color_hex: NEUTRAL_FILL,
                        opacity: template.opacity,
                        tooltip: None,
                    },
                }
            })
            .collect();

        let detail_rows = fit
            .regions
            .iter()
            .map(|&region| Self::detail_row(region, fit))
            .collect();

        VisualizationSpec {
            garment,
            canvas: layout.canvas,
            shapes,
            legend: ColorScale::legend_entries(),
            detail_rows,
            recommended_size: fit.recommended_size,
            is_recommended_size: fit.is_recommended_size,
            recommendation_message: fit.recommendation_message(),
        }
    }

    fn detail_row(region: Region, fit: &FitResult) -> DetailRow {
        let class = fit.class_of(region);

        let user_measurement = fit
            .user_measurement_of(region)
            .map(format_cm)
            .unwrap_or_else(|| MISSING_VALUE.to_string());

        let garment_measurement = fit
            .derived_of(region)
            .value()
            .map(|cm| cm.to_string())
            .unwrap_or_else(|| MISSING_VALUE.to_string());

        DetailRow {
            region,
            region_label: region.display_name(),
            fit_class: class,
            fit_label: class
                .map(|c| c.display_name().to_string())
                .unwrap_or_else(|| MISSING_VALUE.to_string()),
            user_measurement,
            garment_measurement,
            badge_background: class
                .map(ColorScale::badge_background)
                .unwrap_or_else(|| NEUTRAL_FILL.to_string()),
            badge_text_color: class.map(ColorScale::badge_text_color).unwrap_or("#374151"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fit::FitEvaluator;
    use crate::measurements::Measurements;
    use crate::types::MeasurementKey;

    fn tshirt_m(chest: f64) -> FitResult {
        let m = Measurements::new().with(MeasurementKey::Chest, chest);
        FitEvaluator::default().evaluate(GarmentType::Tshirt, SizeLabel::M, Some(&m))
    }

    #[test]
    fn test_region_order_matches_canonical_regions() {
        for &garment in GarmentType::all() {
            let fit = FitEvaluator::default().evaluate(garment, SizeLabel::S, None);
            let spec = VisualizationMapper::map(garment, &fit);
            assert_eq!(spec.region_order(), fit.regions.to_vec());
        }
    }

    #[test]
    fn test_layout_follows_the_fit_result_garment() {
        let fit = tshirt_m(100.0);
        let spec = VisualizationMapper::map(GarmentType::Pants, &fit);
        assert_eq!(spec.garment, GarmentType::Tshirt);
        assert_eq!(spec.region_order(), fit.regions.to_vec());
        assert_eq!(spec, VisualizationMapper::map(GarmentType::Tshirt, &fit));
    }

    #[test]
    fn test_region_shapes_take_class_color() {
        let spec = VisualizationMapper::map(GarmentType::Tshirt, &tshirt_m(100.0));
        for shape in spec.shapes_for(Region::Chest) {
            assert_eq!(shape.color_hex, "#32CD32");
        }
        // Waist is relaxed in M
        assert!(spec.shapes_for(Region::Waist).all(|s| s.color_hex == "#00BFFF"));
        // Both sleeves follow the shoulders
        assert_eq!(spec.shapes_for(Region::Shoulders).count(), 3);
    }

    #[test]
    fn test_backdrop_shapes_are_neutral() {
        let spec = VisualizationMapper::map(GarmentType::Tshirt, &tshirt_m(100.0));
        let backdrop: Vec<_> = spec.shapes.iter().filter(|s| s.region.is_none()).collect();
        assert_eq!(backdrop.len(), 4);
        assert!(backdrop.iter().all(|s| s.color_hex == NEUTRAL_FILL && s.tooltip.is_none()));
    }

    #[test]
    fn test_tooltip_mentions_class_and_derived_value() {
        let spec = VisualizationMapper::map(GarmentType::Tshirt, &tshirt_m(100.0));
        let chest = spec.shapes_for(Region::Chest).next().unwrap();
        let tooltip = chest.tooltip.as_deref().unwrap();
        assert!(tooltip.starts_with("Chest: Perfect fit"));
        assert!(tooltip.contains("103 cm"));

        let length = spec.shapes_for(Region::Length).next().unwrap();
        assert!(length.tooltip.as_deref().unwrap().starts_with("Length: Perfect fit."));
    }

    #[test]
    fn test_detail_rows() {
        let spec = VisualizationMapper::map(GarmentType::Tshirt, &tshirt_m(100.0));
        assert_eq!(spec.detail_rows.len(), 4);

        let chest = &spec.detail_rows[0];
        assert_eq!(chest.region, Region::Chest);
        assert_eq!(chest.fit_label, "Perfect");
        assert_eq!(chest.user_measurement, "100");
        assert_eq!(chest.garment_measurement, "103");
        assert_eq!(chest.badge_background, "#32CD3230");

        let shoulders = &spec.detail_rows[1];
        assert_eq!(shoulders.user_measurement, MISSING_VALUE);
        assert_eq!(shoulders.garment_measurement, MISSING_VALUE);
    }

    #[test]
    fn test_inseam_height_depends_on_class() {
        let fit = FitEvaluator::default().evaluate(GarmentType::Pants, SizeLabel::M, None);
        let spec = VisualizationMapper::map(GarmentType::Pants, &fit);
        for leg in spec.shapes_for(Region::Inseam) {
            match leg.geometry {
                Geometry::Rect { height, .. } => assert_eq!(height, 160.0),
                _ => panic!("legs are rectangles"),
            }
        }
    }

    #[test]
    fn test_legend_and_banner() {
        let spec = VisualizationMapper::map(GarmentType::Tshirt, &tshirt_m(112.0));
        assert_eq!(spec.legend.len(), 5);
        assert_eq!(spec.recommended_size, SizeLabel::L);
        assert!(!spec.is_recommended_size);
        assert_eq!(spec.recommendation_message, "Consider trying size L for a better fit.");
    }
}
