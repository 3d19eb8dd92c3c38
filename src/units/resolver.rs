//! Unit resolution
//!
//! Maps free-text unit tokens onto catalog entries. Tokens are compared after
//! lowercasing, removing punctuation and spaces, and singularizing, so "Fl. Ozs",
//! "fluid ounces" and "fl oz" all land on the same unit.

use std::collections::HashMap;
use std::sync::LazyLock;

use tracing::{trace, warn};

use super::catalog::{Category, UnitDef, CATEGORIES};
use crate::text::normalize_unit;

/// A catalog hit: the unit and the category that owns it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedUnit {
    pub category: &'static Category,
    pub unit: &'static UnitDef,
}

/// Matching key -> catalog entry, built once from the catalog
static UNIT_INDEX: LazyLock<HashMap<String, ResolvedUnit>> = LazyLock::new(|| {
    let mut index = HashMap::new();
    for category in CATEGORIES {
        for unit in category.units {
            for name in unit.names() {
                let key = unit_key(name);
                let previous = index.insert(key.clone(), ResolvedUnit { category, unit });
                if let Some(previous) = previous.filter(|p| !std::ptr::eq(p.unit, unit)) {
                    warn!(
                        "Unit key '{}' is shared by {} and {}",
                        key, previous.unit.name, unit.name
                    );
                }
            }
        }
    }
    index
});

/// Reduce a unit token to its matching key
///
/// Examples:
/// - "Fluid Ounces" -> "fluidounce"
/// - "fl. ozs" -> "floz"
/// - "lbs" -> "lb"
pub fn unit_key(token: &str) -> String {
    let compact: String = normalize_unit(token).split_whitespace().collect();
    singularize(&compact)
}

/// Strip an English plural suffix
pub fn singularize(word: &str) -> String {
    if word.ends_with("ss") || word.len() < 2 {
        return word.to_string();
    }
    if let Some(stem) = word.strip_suffix("ies") {
        if !stem.is_empty() {
            return format!("{stem}y");
        }
    }
    for suffix in ["ches", "shes", "xes"] {
        if word.ends_with(suffix) {
            return word[..word.len() - 2].to_string();
        }
    }
    match word.strip_suffix('s') {
        Some(stem) => stem.to_string(),
        None => word.to_string(),
    }
}

/// Look up a unit token in the catalog
pub fn resolve_unit(token: &str) -> Option<ResolvedUnit> {
    let key = unit_key(token);
    if key.is_empty() {
        return None;
    }
    let resolved = UNIT_INDEX.get(&key).copied();
    if resolved.is_none() {
        trace!("Unit '{}' (key '{}') is not in the catalog", token, key);
    }
    resolved
}

/// Find the catalog entry for a unit token
pub fn find_unit(token: &str) -> Option<&'static UnitDef> {
    resolve_unit(token).map(|r| r.unit)
}

/// Find the category a unit token belongs to
pub fn find_category(token: &str) -> Option<&'static Category> {
    resolve_unit(token).map(|r| r.category)
}

/// Get the symbol to display for a unit token
pub fn get_si(token: &str) -> Option<&'static str> {
    find_unit(token).map(|u| u.si)
}
