//! Fit Reference Tables
//!
//! Static (garment × size × region) → fit class data, plus the canonical
//! ordered region list per garment. Region order here is also the draw order
//! of region shapes in the silhouettes.
//!
//! Lookups never fail. A garment with no table falls back to the configured
//! fallback garment, and an undeclared size falls back to the default size row.
//! Both fallbacks log a warning. Missing entries inside a declared row are
//! configuration defects, reported by `validate()` at startup.

use crate::error::ConfigError;
use crate::types::{FitClass, GarmentType, Region, SizeLabel};
use std::collections::BTreeMap;

use FitClass::*;

/// Fit classes for one size of one garment
#[derive(Debug)]
pub struct SizeFitRow {
    pub size: SizeLabel,
    pub classes: &'static [(Region, FitClass)],
}

impl SizeFitRow {
    pub fn class_for(&self, region: Region) -> Option<FitClass> {
        self.classes
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, fit)| *fit)
    }
}

/// Reference data for one garment type
#[derive(Debug)]
pub struct GarmentFitTable {
    pub garment: GarmentType,
    pub regions: &'static [Region],
    pub sizes: &'static [SizeFitRow],
}

impl GarmentFitTable {
    pub fn row(&self, size: SizeLabel) -> Option<&SizeFitRow> {
        self.sizes.iter().find(|row| row.size == size)
    }

    pub fn declared_sizes(&self) -> impl Iterator<Item = SizeLabel> + '_ {
        self.sizes.iter().map(|row| row.size)
    }
}

// ============================================================================
// EMBEDDED REFERENCE DATA
// ============================================================================

static BUILTIN_TABLES: &[GarmentFitTable] = &[
    GarmentFitTable {
        garment: GarmentType::Tshirt,
        regions: &[Region::Chest, Region::Shoulders, Region::Waist, Region::Length],
        sizes: &[
            SizeFitRow { size: SizeLabel::XS, classes: &[(Region::Chest, Tight), (Region::Shoulders, Tight), (Region::Waist, Snug), (Region::Length, Perfect)] },
            SizeFitRow { size: SizeLabel::S, classes: &[(Region::Chest, Snug), (Region::Shoulders, Perfect), (Region::Waist, Perfect), (Region::Length, Perfect)] },
            SizeFitRow { size: SizeLabel::M, classes: &[(Region::Chest, Perfect), (Region::Shoulders, Perfect), (Region::Waist, Relaxed), (Region::Length, Perfect)] },
            SizeFitRow { size: SizeLabel::L, classes: &[(Region::Chest, Relaxed), (Region::Shoulders, Relaxed), (Region::Waist, Loose), (Region::Length, Relaxed)] },
            SizeFitRow { size: SizeLabel::XL, classes: &[(Region::Chest, Loose), (Region::Shoulders, Loose), (Region::Waist, Loose), (Region::Length, Loose)] },
        ],
    },
    GarmentFitTable {
        garment: GarmentType::Jacket,
        regions: &[Region::Chest, Region::Shoulders, Region::Waist, Region::Sleeves],
        sizes: &[
            SizeFitRow { size: SizeLabel::XS, classes: &[(Region::Chest, Tight), (Region::Shoulders, Tight), (Region::Waist, Tight), (Region::Sleeves, Tight)] },
            SizeFitRow { size: SizeLabel::S, classes: &[(Region::Chest, Snug), (Region::Shoulders, Snug), (Region::Waist, Perfect), (Region::Sleeves, Perfect)] },
            SizeFitRow { size: SizeLabel::M, classes: &[(Region::Chest, Perfect), (Region::Shoulders, Perfect), (Region::Waist, Relaxed), (Region::Sleeves, Perfect)] },
            SizeFitRow { size: SizeLabel::L, classes: &[(Region::Chest, Relaxed), (Region::Shoulders, Relaxed), (Region::Waist, Loose), (Region::Sleeves, Relaxed)] },
            SizeFitRow { size: SizeLabel::XL, classes: &[(Region::Chest, Loose), (Region::Shoulders, Loose), (Region::Waist, Loose), (Region::Sleeves, Loose)] },
        ],
    },
    GarmentFitTable {
        garment: GarmentType::Pants,
        regions: &[Region::Waist, Region::Hips, Region::Inseam, Region::Thighs],
        sizes: &[
            SizeFitRow { size: SizeLabel::XS, classes: &[(Region::Waist, Tight), (Region::Hips, Tight), (Region::Inseam, Perfect), (Region::Thighs, Tight)] },
            SizeFitRow { size: SizeLabel::S, classes: &[(Region::Waist, Snug), (Region::Hips, Snug), (Region::Inseam, Perfect), (Region::Thighs, Perfect)] },
            SizeFitRow { size: SizeLabel::M, classes: &[(Region::Waist, Perfect), (Region::Hips, Perfect), (Region::Inseam, Perfect), (Region::Thighs, Perfect)] },
            SizeFitRow { size: SizeLabel::L, classes: &[(Region::Waist, Relaxed), (Region::Hips, Relaxed), (Region::Inseam, Perfect), (Region::Thighs, Relaxed)] },
            SizeFitRow { size: SizeLabel::XL, classes: &[(Region::Waist, Loose), (Region::Hips, Loose), (Region::Inseam, Perfect), (Region::Thighs, Loose)] },
        ],
    },
    GarmentFitTable {
        garment: GarmentType::Dress,
        regions: &[Region::Chest, Region::Waist, Region::Hips, Region::Length],
        sizes: &[
            SizeFitRow { size: SizeLabel::XS, classes: &[(Region::Chest, Tight), (Region::Waist, Tight), (Region::Hips, Tight), (Region::Length, Perfect)] },
            SizeFitRow { size: SizeLabel::S, classes: &[(Region::Chest, Snug), (Region::Waist, Perfect), (Region::Hips, Snug), (Region::Length, Perfect)] },
            SizeFitRow { size: SizeLabel::M, classes: &[(Region::Chest, Perfect), (Region::Waist, Relaxed), (Region::Hips, Perfect), (Region::Length, Perfect)] },
            SizeFitRow { size: SizeLabel::L, classes: &[(Region::Chest, Relaxed), (Region::Waist, Loose), (Region::Hips, Relaxed), (Region::Length, Relaxed)] },
            SizeFitRow { size: SizeLabel::XL, classes: &[(Region::Chest, Loose), (Region::Waist, Loose), (Region::Hips, Loose), (Region::Length, Loose)] },
        ],
    },
];

// ============================================================================
// LOOKUP
// ============================================================================

/// Result of a reference lookup, including which row actually answered
#[derive(Debug, Clone, PartialEq)]
pub struct ReferenceLookup {
    pub garment: GarmentType,
    pub size: SizeLabel,
    pub classes: BTreeMap<Region, FitClass>,
    pub garment_fell_back: bool,
    pub size_fell_back: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct FitReferenceTable {
    tables: &'static [GarmentFitTable],
    default_size: SizeLabel,
    fallback_garment: GarmentType,
}

impl FitReferenceTable {
    /// Built-in tables with the standard fallbacks (tshirt, M)
    pub fn builtin() -> Self {
        Self::new_builtin(SizeLabel::M, GarmentType::Tshirt)
    }

    /// Built-in tables with configured fallbacks
    pub fn new_builtin(default_size: SizeLabel, fallback_garment: GarmentType) -> Self {
        Self::new(BUILTIN_TABLES, default_size, fallback_garment)
    }

    pub fn new(
        tables: &'static [GarmentFitTable],
        default_size: SizeLabel,
        fallback_garment: GarmentType,
    ) -> Self {
        Self {
            tables,
            default_size,
            fallback_garment,
        }
    }

    pub fn default_size(&self) -> SizeLabel {
        self.default_size
    }

    fn find(&self, garment: GarmentType) -> Option<&'static GarmentFitTable> {
        self.tables.iter().find(|t| t.garment == garment)
    }

    /// Table for `garment`, or the fallback garment's table
    fn table_for(&self, garment: GarmentType) -> Option<(&'static GarmentFitTable, bool)> {
        if let Some(table) = self.find(garment) {
            return Some((table, false));
        }
        tracing::warn!(
            "No fit reference table for '{}'; falling back to '{}'",
            garment,
            self.fallback_garment
        );
        self.find(self.fallback_garment).map(|t| (t, true))
    }

    /// Canonical ordered region list for a garment
    pub fn regions(&self, garment: GarmentType) -> &'static [Region] {
        self.table_for(garment).map(|(t, _)| t.regions).unwrap_or(&[])
    }

    /// Sizes the table declares for a garment, smallest first
    pub fn declared_sizes(&self, garment: GarmentType) -> Vec<SizeLabel> {
        let mut sizes: Vec<SizeLabel> = self
            .table_for(garment)
            .map(|(t, _)| t.declared_sizes().collect())
            .unwrap_or_default();
        sizes.sort();
        sizes
    }

    /// Region → fit class for a garment and size
    pub fn classes_for(&self, garment: GarmentType, size: SizeLabel) -> BTreeMap<Region, FitClass> {
        self.lookup(garment, size).classes
    }

    /// Full lookup with fallback bookkeeping
    pub fn lookup(&self, garment: GarmentType, size: SizeLabel) -> ReferenceLookup {
        let Some((table, garment_fell_back)) = self.table_for(garment) else {
            tracing::error!("Fit reference table has neither '{}' nor the fallback garment", garment);
            return ReferenceLookup {
                garment,
                size,
                classes: BTreeMap::new(),
                garment_fell_back: true,
                size_fell_back: false,
            };
        };

        let (row, size_fell_back) = match table.row(size) {
            Some(row) => (Some(row), false),
            None => {
                tracing::warn!(
                    "Size {} not declared for '{}'; using the {} reference entry",
                    size,
                    table.garment,
                    self.default_size
                );
                (table.row(self.default_size), true)
            }
        };

        let mut classes = BTreeMap::new();
        if let Some(row) = row {
            for region in table.regions {
                if let Some(fit) = row.class_for(*region) {
                    classes.insert(*region, fit);
                }
            }
        }

        ReferenceLookup {
            garment: table.garment,
            size: row.map(|r| r.size).unwrap_or(size),
            classes,
            garment_fell_back,
            size_fell_back,
        }
    }

    /// Startup self-check: every garment has a table, every table declares the
    /// default size, and every declared row covers every canonical region.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for &garment in GarmentType::all() {
            let table = self
                .find(garment)
                .ok_or(ConfigError::GarmentTableMissing { garment })?;

            if table.row(self.default_size).is_none() {
                return Err(ConfigError::DefaultSizeMissing {
                    garment,
                    size: self.default_size,
                });
            }

            for row in table.sizes {
                for &region in table.regions {
                    if row.class_for(region).is_none() {
                        return Err(ConfigError::ReferenceTableIncomplete {
                            garment,
                            size: row.size,
                            region,
                        });
                    }
                }
            }
        }

        Ok(())
    }
}

impl Default for FitReferenceTable {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_tables_validate() {
        assert_eq!(FitReferenceTable::builtin().validate(), Ok(()));
    }

    #[test]
    fn test_every_declared_size_covers_every_region() {
        let table = FitReferenceTable::builtin();
        for &garment in GarmentType::all() {
            let regions = table.regions(garment);
            assert_eq!(regions.len(), 4);
            for size in table.declared_sizes(garment) {
                let classes = table.classes_for(garment, size);
                for region in regions {
                    assert!(classes.contains_key(region), "{} {} missing {}", garment, size, region);
                }
                assert_eq!(classes.len(), regions.len());
            }
        }
    }

    #[test]
    fn test_canonical_region_order() {
        let table = FitReferenceTable::builtin();
        assert_eq!(
            table.regions(GarmentType::Tshirt),
            &[Region::Chest, Region::Shoulders, Region::Waist, Region::Length]
        );
        assert_eq!(
            table.regions(GarmentType::Pants),
            &[Region::Waist, Region::Hips, Region::Inseam, Region::Thighs]
        );
    }

    #[test]
    fn test_known_entries() {
        let table = FitReferenceTable::builtin();
        let m = table.classes_for(GarmentType::Tshirt, SizeLabel::M);
        assert_eq!(m[&Region::Chest], FitClass::Perfect);
        assert_eq!(m[&Region::Waist], FitClass::Relaxed);

        let xs = table.classes_for(GarmentType::Jacket, SizeLabel::XS);
        assert!(xs.values().all(|f| *f == FitClass::Tight));

        let pants_xl = table.classes_for(GarmentType::Pants, SizeLabel::XL);
        assert_eq!(pants_xl[&Region::Inseam], FitClass::Perfect);
    }

    #[test]
    fn test_undeclared_size_falls_back_to_default_row() {
        let table = FitReferenceTable::builtin();
        let lookup = table.lookup(GarmentType::Dress, SizeLabel::XXL);
        assert!(lookup.size_fell_back);
        assert_eq!(lookup.size, SizeLabel::M);
        assert_eq!(lookup.classes, table.classes_for(GarmentType::Dress, SizeLabel::M));
    }

    static TSHIRT_ONLY: &[GarmentFitTable] = &[GarmentFitTable {
        garment: GarmentType::Tshirt,
        regions: &[Region::Chest, Region::Length],
        sizes: &[SizeFitRow { size: SizeLabel::M, classes: &[(Region::Chest, Perfect), (Region::Length, Snug)] }],
    }];

    #[test]
    fn test_missing_garment_falls_back_to_fallback_table() {
        let table = FitReferenceTable::new(TSHIRT_ONLY, SizeLabel::M, GarmentType::Tshirt);
        let lookup = table.lookup(GarmentType::Jacket, SizeLabel::M);
        assert!(lookup.garment_fell_back);
        assert_eq!(lookup.garment, GarmentType::Tshirt);
        assert_eq!(table.regions(GarmentType::Jacket), &[Region::Chest, Region::Length]);

        assert_eq!(
            table.validate(),
            Err(ConfigError::GarmentTableMissing { garment: GarmentType::Jacket })
        );
    }

    static INCOMPLETE: &[GarmentFitTable] = &[GarmentFitTable {
        garment: GarmentType::Tshirt,
        regions: &[Region::Chest, Region::Waist],
        sizes: &[
            SizeFitRow { size: SizeLabel::M, classes: &[(Region::Chest, Perfect), (Region::Waist, Relaxed)] },
            SizeFitRow { size: SizeLabel::L, classes: &[(Region::Chest, Relaxed)] },
        ],
    }];

    #[test]
    fn test_incomplete_row_is_a_config_error() {
        let table = FitReferenceTable::new(INCOMPLETE, SizeLabel::M, GarmentType::Tshirt);
        // Jacket is checked after tshirt, so the tshirt defect is reported first
        assert_eq!(
            table.validate(),
            Err(ConfigError::ReferenceTableIncomplete {
                garment: GarmentType::Tshirt,
                size: SizeLabel::L,
                region: Region::Waist,
            })
        );
    }

    #[test]
    fn test_undeclared_default_size_is_a_config_error() {
        let table = FitReferenceTable::new(BUILTIN_TABLES, SizeLabel::XXL, GarmentType::Tshirt);
        assert_eq!(
            table.validate(),
            Err(ConfigError::DefaultSizeMissing { garment: GarmentType::Tshirt, size: SizeLabel::XXL })
        );
    }
}
