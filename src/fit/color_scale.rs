//! Fit Color Scale
//!
//! Ordinal heat-map colors for fit classes, from orange-red (tight) through
//! green (perfect) to blue (loose), plus the legend and table badge styling
//! derived from them.

use crate::types::FitClass;
use serde::Serialize;

/// Display color per fit class, in ordinal order
pub static FIT_COLORS: [(FitClass, &str); 5] = [
    (FitClass::Tight, "#FF4500"),   // Orange-red
    (FitClass::Snug, "#FFA500"),    // Orange
    (FitClass::Perfect, "#32CD32"), // Green
    (FitClass::Relaxed, "#00BFFF"), // Light blue
    (FitClass::Loose, "#0000FF"),   // Blue
];

/// Badge alpha suffix appended to the class color (hex `30` ≈ 19% opacity)
pub const BADGE_ALPHA: &str = "30";

/// One key entry of the legend
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub fit_class: FitClass,
    pub label: &'static str,
    pub color_hex: &'static str,
    pub description: &'static str,
}

/// Fixed ordinal color mapping
pub struct ColorScale;

impl ColorScale {
    /// Color for a fit class. Total over all classes.
    pub fn color_for(fit: FitClass) -> &'static str {
        FIT_COLORS[fit.ordinal()].1
    }

    /// Legend entries ordered tight → loose
    pub fn legend_entries() -> Vec<LegendEntry> {
        FitClass::all()
            .iter()
            .map(|&fit| LegendEntry {
                fit_class: fit,
                label: fit.display_name(),
                color_hex: Self::color_for(fit),
                description: fit.description(),
            })
            .collect()
    }

    /// Translucent badge background for the detail table, e.g. "#32CD3230"
    pub fn badge_background(fit: FitClass) -> String {
        format!("{}{}", Self::color_for(fit), BADGE_ALPHA)
    }

    /// Badge text color: dark green for perfect, dark red at the extremes,
    /// dark blue in between.
    pub fn badge_text_color(fit: FitClass) -> &'static str {
        match fit {
            FitClass::Perfect => "#166534",
            FitClass::Tight | FitClass::Loose => "#7C2D12",
            FitClass::Snug | FitClass::Relaxed => "#1E40AF",
        }
    }
}
