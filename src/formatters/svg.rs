//! SVG rendering of a `VisualizationSpec`.
//!
//! One element per shape in draw order. Region shapes carry a
//! `data-region` attribute and a `<title>` tooltip.

use crate::visualization::{Geometry, ShapeDescriptor, VisualizationSpec};

/// SVG formatter for fit visualizations
pub struct SvgFormatter;

impl SvgFormatter {
    pub fn format(spec: &VisualizationSpec) -> String {
        let mut svg = String::with_capacity(256 + spec.shapes.len() * 160);

        svg.push_str(&format!(
            "<svg xmlns=\"http://www.w3.org/2000/svg\" viewBox=\"0 0 {} {}\" width=\"{}\" height=\"{}\" data-garment=\"{}\">\n",
            spec.canvas.width,
            spec.canvas.height,
            spec.canvas.width,
            spec.canvas.height,
            spec.garment.as_str()
        ));

        for shape in &spec.shapes {
            Self::format_shape(&mut svg, shape);
        }

        svg.push_str("</svg>\n");
        svg
    }

    fn format_shape(svg: &mut String, shape: &ShapeDescriptor) {
        let (tag, geometry_attrs) = match shape.geometry {
            Geometry::Rect { x, y, width, height, corner_radius } => {
                let mut attrs = format!(
                    "x=\"{}\" y=\"{}\" width=\"{}\" height=\"{}\"",
                    x, y, width, height
                );
                if corner_radius > 0.0 {
                    attrs.push_str(&format!(" rx=\"{}\"", corner_radius));
                }
                ("rect", attrs)
            }
            Geometry::Circle { cx, cy, r } => {
                ("circle", format!("cx=\"{}\" cy=\"{}\" r=\"{}\"", cx, cy, r))
            }
            Geometry::Path { d } => ("path", format!("d=\"{}\"", d)),
        };

        let region_attr = shape
            .region
            .map(|r| format!(" data-region=\"{}\"", r.as_str()))
            .unwrap_or_default();

        let open = format!(
            "  <{} {} fill=\"{}\" opacity=\"{}\"{} data-label=\"{}\"",
            tag,
            geometry_attrs,
            shape.color_hex,
            shape.opacity,
            region_attr,
            escape_xml(shape.label)
        );

        match &shape.tooltip {
            Some(tooltip) => {
                svg.push_str(&format!(
                    "{}><title>{}</title></{}>\n",
                    open,
                    escape_xml(tooltip),
                    tag
                ));
            }
            None => {
                svg.push_str(&open);
                svg.push_str("/>\n");
            }
        }
    }
}

fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::FitEngine;
    use crate::measurements::Measurements;
    use crate::types::MeasurementKey;

    #[test]
    fn test_format_svg() {
        let m = Measurements::new().with(MeasurementKey::Chest, 100.0);
        let report = FitEngine::new().unwrap().evaluate_and_visualize("tshirt", "M", Some(&m));
        let svg = SvgFormatter::format(&report.visualization);

        assert!(svg.starts_with("<svg"));
        assert!(svg.contains("viewBox=\"0 0 240 300\""));
        assert!(svg.contains("<circle cx=\"120\" cy=\"40\" r=\"20\" fill=\"#e0e0e0\""));
        assert!(svg.contains(
            "<rect x=\"80\" y=\"90\" width=\"80\" height=\"40\" fill=\"#32CD32\" opacity=\"0.8\" data-region=\"chest\""
        ));
        assert!(svg.contains("<title>Chest: Perfect fit (garment ≈ 103 cm)."));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_one_element_per_shape() {
        let report = FitEngine::new().unwrap().evaluate_and_visualize("pants", "L", None);
        let svg = SvgFormatter::format(&report.visualization);

        let elements = svg
            .lines()
            .filter(|l| l.starts_with("  <rect") || l.starts_with("  <circle") || l.starts_with("  <path"))
            .count();
        assert_eq!(elements, report.visualization.shapes.len());
        assert!(svg.contains("viewBox=\"0 0 240 400\""));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml("a < b & \"c\""), "a &lt; b &amp; &quot;c&quot;");
    }
}
