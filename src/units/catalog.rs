//! Unit types and conversion constants
//!
//! Static catalog of the units the converter understands, grouped by
//! category, with each unit's ratio to its category's SI base unit.

use serde::{Deserialize, Serialize};

/// Category of a measurement unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitCategory {
    /// Weight/mass units (g, oz, lb, st), base unit gram
    Weight,
    /// Volume units (ml, l, fl oz, cup), base unit milliliter
    Volume,
    /// Count/discrete units (slice, piece, pinch); recognized but not convertible
    Count,
}

impl UnitCategory {
    /// Get the canonical SI unit string for this category
    pub fn canonical_unit(&self) -> &'static str {
        match self {
            UnitCategory::Weight => "g",
            UnitCategory::Volume => "ml",
            UnitCategory::Count => "each",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UnitCategory::Weight => "weight",
            UnitCategory::Volume => "volume",
            UnitCategory::Count => "count",
        }
    }

    /// Whether units of this category take part in conversions
    pub fn is_convertible(&self) -> bool {
        matches!(self, UnitCategory::Weight | UnitCategory::Volume)
    }
}

/// Volume units whose size depends on the country's culinary convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContainerKind {
    Cup,
    Tablespoon,
    Teaspoon,
}

/// A unit definition
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnitDef {
    /// Display name (e.g. "fluid ounce")
    pub name: &'static str,
    /// Other names the unit is known by, matched like the display name
    pub aliases: &'static [&'static str],
    /// Symbol shown in results (e.g. "fl oz"); unique within the category
    pub si: &'static str,
    /// Multiplier to convert one of this unit to the category's base unit
    pub ratio: f64,
    /// Set for cup, tablespoon and teaspoon
    pub container: Option<ContainerKind>,
}

impl UnitDef {
    const fn new(name: &'static str, si: &'static str, ratio: f64) -> Self {
        Self {
            name,
            aliases: &[],
            si,
            ratio,
            container: None,
        }
    }

    const fn aka(mut self, aliases: &'static [&'static str]) -> Self {
        self.aliases = aliases;
        self
    }

    const fn container(mut self, kind: ContainerKind) -> Self {
        self.container = Some(kind);
        self
    }

    /// Every name this unit answers to: display name, aliases and symbol
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        let aliases: &'static [&'static str] = self.aliases;
        std::iter::once(self.name)
            .chain(aliases.iter().copied())
            .chain(std::iter::once(self.si))
    }
}

/// A category and the units that belong to it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Category {
    pub kind: UnitCategory,
    pub units: &'static [UnitDef],
}

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

/// Grams per milligram
pub const G_PER_MG: f64 = 0.001;
/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per avoirdupois ounce
pub const G_PER_OZ: f64 = 28.349523125;
/// Grams per pound
pub const G_PER_LB: f64 = 453.59237;
/// Grams per stone (14 lb)
pub const G_PER_STONE: f64 = 6350.29318;

// ============================================================================
// Volume Conversion Constants (to milliliters)
// ============================================================================

/// Milliliters per centiliter
pub const ML_PER_CL: f64 = 10.0;
/// Milliliters per deciliter
pub const ML_PER_DL: f64 = 100.0;
/// Milliliters per liter
pub const ML_PER_LITER: f64 = 1000.0;
/// Milliliters per US fluid ounce
pub const ML_PER_FL_OZ: f64 = 29.5735295625;
/// Milliliters per pint (US)
pub const ML_PER_PINT: f64 = 473.176473;
/// Milliliters per quart (US)
pub const ML_PER_QUART: f64 = 946.352946;
/// Milliliters per gallon (US)
pub const ML_PER_GALLON: f64 = 3785.411784;
/// Milliliters per cup (US legal cup, the default container convention)
pub const ML_PER_CUP: f64 = 240.0;
/// Milliliters per tablespoon (US legal)
pub const ML_PER_TBSP: f64 = 15.0;
/// Milliliters per teaspoon (US legal)
pub const ML_PER_TSP: f64 = 5.0;

// ============================================================================
// Catalog
// ============================================================================

const WEIGHT_UNITS: &[UnitDef] = &[
    UnitDef::new("gram", "g", 1.0).aka(&["gramme", "gr"]),
    UnitDef::new("milligram", "mg", G_PER_MG).aka(&["milligramme"]),
    UnitDef::new("kilogram", "kg", G_PER_KG).aka(&["kilogramme", "kilo"]),
    UnitDef::new("ounce", "oz", G_PER_OZ),
    UnitDef::new("pound", "lb", G_PER_LB),
    UnitDef::new("stone", "st", G_PER_STONE),
];

const VOLUME_UNITS: &[UnitDef] = &[
    UnitDef::new("milliliter", "ml", 1.0).aka(&["millilitre"]),
    UnitDef::new("centiliter", "cl", ML_PER_CL).aka(&["centilitre"]),
    UnitDef::new("deciliter", "dl", ML_PER_DL).aka(&["decilitre"]),
    UnitDef::new("liter", "l", ML_PER_LITER).aka(&["litre"]),
    UnitDef::new("fluid ounce", "fl oz", ML_PER_FL_OZ).aka(&["fl ounce", "fluid oz"]),
    UnitDef::new("pint", "pt", ML_PER_PINT),
    UnitDef::new("quart", "qt", ML_PER_QUART),
    UnitDef::new("gallon", "gal", ML_PER_GALLON),
    UnitDef::new("cup", "cup", ML_PER_CUP).container(ContainerKind::Cup),
    UnitDef::new("tablespoon", "tbsp", ML_PER_TBSP)
        .aka(&["tbs", "tbl"])
        .container(ContainerKind::Tablespoon),
    UnitDef::new("teaspoon", "tsp", ML_PER_TSP).container(ContainerKind::Teaspoon),
];

const COUNT_UNITS: &[UnitDef] = &[
    UnitDef::new("each", "each", 1.0).aka(&["ea"]),
    UnitDef::new("piece", "piece", 1.0).aka(&["pc"]),
    UnitDef::new("slice", "slice", 1.0),
    UnitDef::new("pinch", "pinch", 1.0),
    UnitDef::new("dash", "dash", 1.0),
    UnitDef::new("clove", "clove", 1.0),
    UnitDef::new("can", "can", 1.0),
    UnitDef::new("stick", "stick", 1.0),
];

/// All unit categories, in lookup order
pub static CATEGORIES: &[Category] = &[
    Category {
        kind: UnitCategory::Weight,
        units: WEIGHT_UNITS,
    },
    Category {
        kind: UnitCategory::Volume,
        units: VOLUME_UNITS,
    },
    Category {
        kind: UnitCategory::Count,
        units: COUNT_UNITS,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ratios_positive() {
        for category in CATEGORIES {
            for unit in category.units {
                assert!(unit.ratio > 0.0, "{} has a non-positive ratio", unit.name);
            }
        }
    }

    #[test]
    fn test_si_unique_within_category() {
        for category in CATEGORIES {
            let symbols: HashSet<&str> = category.units.iter().map(|u| u.si).collect();
            assert_eq!(symbols.len(), category.units.len(), "{:?}", category.kind);
        }
    }

    #[test]
    fn test_base_units() {
        assert_eq!(UnitCategory::Weight.canonical_unit(), "g");
        assert_eq!(UnitCategory::Volume.canonical_unit(), "ml");
        assert!(WEIGHT_UNITS.iter().any(|u| u.si == "g" && u.ratio == 1.0));
        assert!(VOLUME_UNITS.iter().any(|u| u.si == "ml" && u.ratio == 1.0));
    }

    #[test]
    fn test_containers_are_volume() {
        let containers: Vec<&str> = CATEGORIES
            .iter()
            .flat_map(|c| c.units.iter().map(move |u| (c.kind, u)))
            .filter(|(_, u)| u.container.is_some())
            .map(|(kind, u)| {
                assert_eq!(kind, UnitCategory::Volume);
                u.si
            })
            .collect();
        assert_eq!(containers, vec!["cup", "tbsp", "tsp"]);
    }

    #[test]
    fn test_convertible_categories() {
        assert!(UnitCategory::Weight.is_convertible());
        assert!(UnitCategory::Volume.is_convertible());
        assert!(!UnitCategory::Count.is_convertible());
    }
}
