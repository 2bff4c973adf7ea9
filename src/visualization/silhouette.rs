//! Garment Silhouettes
//!
//! Static per-garment shape layouts in canvas units (SVG viewBox space).
//! Upper-body garments use a 240×300 canvas, pants and dresses 240×400.
//!
//! Each layout lists neutral backdrop shapes first (head, neck, reference
//! limbs), then region shapes grouped in the garment's canonical region order.
//! A region may own several shapes (left/right sleeves, both legs).

use crate::error::ConfigError;
use crate::fit::FitReferenceTable;
use crate::types::{FitClass, GarmentType, Region};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

pub const UPPER_BODY_CANVAS: Canvas = Canvas { width: 240.0, height: 300.0 };
pub const FULL_BODY_CANVAS: Canvas = Canvas { width: 240.0, height: 400.0 };

/// Shape primitive in canvas units
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Geometry {
    Rect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        corner_radius: f64,
    },
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
    },
    /// SVG path data
    Path { d: &'static str },
}

impl Geometry {
    /// Rectangle with its height replaced
    pub fn with_height(self, new_height: f64) -> Self {
        match self {
            Geometry::Rect { x, y, width, corner_radius, .. } => Geometry::Rect {
                x,
                y,
                width,
                height: new_height,
                corner_radius,
            },
            other => other,
        }
    }
}

/// Height that depends on the region's fit class (pants legs)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthRule {
    pub perfect_height: f64,
    pub other_height: f64,
}

impl LengthRule {
    pub fn height_for(&self, fit: FitClass) -> f64 {
        if fit == FitClass::Perfect {
            self.perfect_height
        } else {
            self.other_height
        }
    }
}

/// One entry of a silhouette layout
#[derive(Debug, Clone, Copy)]
pub struct ShapeTemplate {
    /// `None` for neutral backdrop shapes
    pub region: Option<Region>,
    pub label: &'static str,
    pub geometry: Geometry,
    pub opacity: f64,
    pub length_rule: Option<LengthRule>,
}

#[derive(Debug)]
pub struct SilhouetteLayout {
    pub garment: GarmentType,
    pub canvas: Canvas,
    pub shapes: &'static [ShapeTemplate],
}

impl SilhouetteLayout {
    /// Distinct regions in draw order
    pub fn region_order(&self) -> Vec<Region> {
        let mut order: Vec<Region> = Vec::new();
        for region in self.shapes.iter().filter_map(|s| s.region) {
            if order.last() != Some(&region) {
                order.push(region);
            }
        }
        order
    }
}

// ============================================================================
// SHAPE CONSTRUCTORS
// ============================================================================

const REGION_OPACITY: f64 = 0.8;
const BACKDROP_OPACITY: f64 = 0.3;

const fn rect(x: f64, y: f64, width: f64, height: f64) -> Geometry {
    Geometry::Rect { x, y, width, height, corner_radius: 0.0 }
}

const fn rounded(x: f64, y: f64, width: f64, height: f64) -> Geometry {
    Geometry::Rect { x, y, width, height, corner_radius: 5.0 }
}

const fn region(region: Region, label: &'static str, geometry: Geometry) -> ShapeTemplate {
    ShapeTemplate {
        region: Some(region),
        label,
        geometry,
        opacity: REGION_OPACITY,
        length_rule: None,
    }
}

const fn backdrop(label: &'static str, geometry: Geometry, opacity: f64) -> ShapeTemplate {
    ShapeTemplate {
        region: None,
        label,
        geometry,
        opacity,
        length_rule: None,
    }
}

const HEAD: ShapeTemplate = backdrop("head", Geometry::Circle { cx: 120.0, cy: 40.0, r: 20.0 }, 1.0);
const NECK: ShapeTemplate = backdrop("neck", rect(110.0, 60.0, 20.0, 10.0), 1.0);

const INSEAM_RULE: LengthRule = LengthRule {
    perfect_height: 160.0,
    other_height: 150.0,
};

// ============================================================================
// LAYOUTS
// ============================================================================

static TSHIRT_SHAPES: [ShapeTemplate; 10] = [
    HEAD,
    NECK,
    backdrop("left leg", Geometry::Path { d: "M85,185 L85,250 Q85,270 100,270 Q115,270 115,250 L115,185 Z" }, BACKDROP_OPACITY),
    backdrop("right leg", Geometry::Path { d: "M155,185 L155,250 Q155,270 140,270 Q125,270 125,250 L125,185 Z" }, BACKDROP_OPACITY),
    region(Region::Chest, "chest", rect(80.0, 90.0, 80.0, 40.0)),
    region(Region::Shoulders, "shoulders", rounded(70.0, 70.0, 100.0, 20.0)),
    region(Region::Shoulders, "left sleeve", Geometry::Path { d: "M70,70 L50,100 L65,110 L80,90 Z" }),
    region(Region::Shoulders, "right sleeve", Geometry::Path { d: "M170,70 L190,100 L175,110 L160,90 Z" }),
    region(Region::Waist, "torso", rect(85.0, 130.0, 70.0, 50.0)),
    region(Region::Length, "hem", rect(85.0, 180.0, 70.0, 5.0)),
];

static JACKET_SHAPES: [ShapeTemplate; 9] = [
    HEAD,
    NECK,
    backdrop("left leg", Geometry::Path { d: "M85,200 L85,250 Q85,270 100,270 Q115,270 115,250 L115,200 Z" }, BACKDROP_OPACITY),
    backdrop("right leg", Geometry::Path { d: "M155,200 L155,250 Q155,270 140,270 Q125,270 125,250 L125,200 Z" }, BACKDROP_OPACITY),
    region(Region::Chest, "chest", rect(80.0, 90.0, 80.0, 40.0)),
    region(Region::Shoulders, "shoulders", rounded(70.0, 70.0, 100.0, 20.0)),
    region(Region::Waist, "torso", rect(85.0, 130.0, 70.0, 70.0)),
    region(Region::Sleeves, "left sleeve", Geometry::Path { d: "M70,70 L30,110 L40,140 L65,110 Z" }),
    region(Region::Sleeves, "right sleeve", Geometry::Path { d: "M170,70 L210,110 L200,140 L175,110 Z" }),
];

static PANTS_SHAPES: [ShapeTemplate; 7] = [
    backdrop("upper body", rounded(90.0, 20.0, 60.0, 80.0), BACKDROP_OPACITY),
    region(Region::Waist, "waistband", rounded(85.0, 100.0, 70.0, 20.0)),
    region(Region::Hips, "hips", rect(75.0, 120.0, 90.0, 30.0)),
    ShapeTemplate { length_rule: Some(INSEAM_RULE), ..region(Region::Inseam, "left leg", rect(80.0, 200.0, 30.0, 160.0)) },
    ShapeTemplate { length_rule: Some(INSEAM_RULE), ..region(Region::Inseam, "right leg", rect(130.0, 200.0, 30.0, 160.0)) },
    region(Region::Thighs, "left thigh", rect(80.0, 150.0, 30.0, 50.0)),
    region(Region::Thighs, "right thigh", rect(130.0, 150.0, 30.0, 50.0)),
];

static DRESS_SHAPES: [ShapeTemplate; 7] = [
    HEAD,
    NECK,
    backdrop("shoulders", rounded(70.0, 70.0, 100.0, 20.0), BACKDROP_OPACITY),
    region(Region::Chest, "bodice", rect(80.0, 90.0, 80.0, 40.0)),
    region(Region::Waist, "waist", rect(85.0, 130.0, 70.0, 30.0)),
    region(Region::Hips, "skirt top", rect(75.0, 160.0, 90.0, 40.0)),
    ShapeTemplate { opacity: 0.7, ..region(Region::Length, "skirt", Geometry::Path { d: "M75,200 L75,320 Q120,330 165,320 L165,200 Z" }) },
];

static LAYOUTS: [SilhouetteLayout; 4] = [
    SilhouetteLayout { garment: GarmentType::Tshirt, canvas: UPPER_BODY_CANVAS, shapes: &TSHIRT_SHAPES },
    SilhouetteLayout { garment: GarmentType::Jacket, canvas: UPPER_BODY_CANVAS, shapes: &JACKET_SHAPES },
    SilhouetteLayout { garment: GarmentType::Pants, canvas: FULL_BODY_CANVAS, shapes: &PANTS_SHAPES },
    SilhouetteLayout { garment: GarmentType::Dress, canvas: FULL_BODY_CANVAS, shapes: &DRESS_SHAPES },
];

/// Static layout for a garment
pub fn layout_for(garment: GarmentType) -> &'static SilhouetteLayout {
    match garment {
        GarmentType::Tshirt => &LAYOUTS[0],
        GarmentType::Jacket => &LAYOUTS[1],
        GarmentType::Pants => &LAYOUTS[2],
        GarmentType::Dress => &LAYOUTS[3],
    }
}

/// Startup self-check: every canonical region has at least one shape and
/// region shapes are grouped in canonical order.
pub fn validate_layouts(table: &FitReferenceTable) -> Result<(), ConfigError> {
    for &garment in GarmentType::all() {
        let layout = layout_for(garment);
        let expected = table.regions(garment);
        let found = layout.region_order();

        if let Some(&missing) = expected.iter().find(|r| !found.contains(r)) {
            return Err(ConfigError::SilhouetteIncomplete { garment, region: missing });
        }

        if found.as_slice() != expected {
            return Err(ConfigError::SilhouetteOutOfOrder {
                garment,
                expected: expected.to_vec(),
                found,
            });
        }
    }

    Ok(())
}
