use crate::engine::FitReport;
use crate::visualization::{VisualizationSpec, MISSING_VALUE};

/// Markdown formatter for fit reports
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    /// Format report as markdown
    pub fn format(report: &FitReport) -> String {
        let mut md = String::with_capacity(1024);
        let fit = &report.fit;

        // Title
        match fit.requested_size {
            Some(size) => md.push_str(&format!(
                "# {} - Size {}\n\n",
                fit.garment.display_name(),
                size
            )),
            None => md.push_str(&format!(
                "# {} - Size {} (reference)\n\n",
                fit.garment.display_name(),
                fit.reference_size
            )),
        }

        Self::format_body(&mut md, &report.visualization);
        md
    }

    /// Recommendation banner, detail table and legend for a visualization
    pub fn format_body(md: &mut String, spec: &VisualizationSpec) {
        // Recommendation banner
        let marker = if spec.is_recommended_size { "✅" } else { "💡" };
        md.push_str(&format!(
            "{} **Recommended Size:** {}  \n{}\n\n",
            marker, spec.recommended_size, spec.recommendation_message
        ));

        // Detail table
        md.push_str("## Fit Details\n\n");
        md.push_str("| Body Region | Fit Type | Your Measurement | Garment Measurement |\n");
        md.push_str("|-------------|----------|------------------|---------------------|\n");
        for row in &spec.detail_rows {
            md.push_str(&format!(
                "| {} | {} | {} | {} |\n",
                row.region_label,
                row.fit_label,
                with_unit(&row.user_measurement),
                with_unit(&row.garment_measurement)
            ));
        }
        md.push('\n');

        // Legend
        md.push_str("## Understanding Your Fit\n\n");
        for entry in &spec.legend {
            md.push_str(&format!(
                "- **{}** (`{}`): {}\n",
                entry.label, entry.color_hex, entry.description
            ));
        }
    }
}

fn with_unit(value: &str) -> String {
    if value == MISSING_VALUE {
        value.to_string()
    } else {
        format!("{} cm", value)
    }
}
