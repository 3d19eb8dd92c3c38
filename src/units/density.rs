//! Ingredient density data for weight/volume conversion.
//!
//! Densities are stored as grams per milliliter. Values derive from
//! grams-per-US-cup figures (King Arthur Baking, USDA) divided by 236.588.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Ingredient density data: canonical name -> grams per milliliter.
pub static DENSITY_DATA: LazyLock<HashMap<&'static str, f64>> = LazyLock::new(|| {
    let mut m = HashMap::new();

    // Liquids
    m.insert("water", 1.0);
    m.insert("milk", 1.035);
    m.insert("heavy cream", 1.006);
    m.insert("buttermilk", 1.03);
    m.insert("vegetable oil", 0.921);
    m.insert("olive oil", 0.913);
    m.insert("honey", 1.437);
    m.insert("maple syrup", 1.331);
    m.insert("soy sauce", 1.15);
    m.insert("vinegar", 1.01);

    // Flours and starches
    m.insert("all-purpose flour", 0.528);
    m.insert("bread flour", 0.537);
    m.insert("whole wheat flour", 0.507);
    m.insert("cornstarch", 0.541);
    m.insert("cocoa powder", 0.364);
    m.insert("rolled oats", 0.338);
    m.insert("rice", 0.782);

    // Sugars and salt
    m.insert("granulated sugar", 0.845);
    m.insert("brown sugar", 0.93); // packed
    m.insert("powdered sugar", 0.507);
    m.insert("table salt", 1.217);

    // Dairy and fats
    m.insert("butter", 0.959);
    m.insert("sour cream", 1.023);
    m.insert("yogurt", 1.036);
    m.insert("peanut butter", 1.09);

    m
});

/// Aliases mapping common ingredient names to canonical names in DENSITY_DATA.
pub static INGREDIENT_ALIASES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| {
        let mut m = HashMap::new();

        m.insert("flour", "all-purpose flour");
        m.insert("plain flour", "all-purpose flour");
        m.insert("ap flour", "all-purpose flour");
        m.insert("sugar", "granulated sugar");
        m.insert("white sugar", "granulated sugar");
        m.insert("caster sugar", "granulated sugar");
        m.insert("icing sugar", "powdered sugar");
        m.insert("confectioners sugar", "powdered sugar");
        m.insert("salt", "table salt");
        m.insert("oil", "vegetable oil");
        m.insert("cream", "heavy cream");
        m.insert("double cream", "heavy cream");
        m.insert("oats", "rolled oats");
        m.insert("yoghurt", "yogurt");
        m.insert("whole milk", "milk");

        m
    });

/// Common modifiers to strip from ingredient names before matching.
const MODIFIERS_TO_STRIP: &[&str] = &[
    "room temperature ",
    "cold ",
    "warm ",
    "melted ",
    "softened ",
    "sifted ",
    ", softened",
    ", melted",
    ", sifted",
];

fn strip_modifiers(s: &str) -> String {
    let mut result = s.to_string();
    for modifier in MODIFIERS_TO_STRIP {
        if let Some(stripped) = result.strip_prefix(modifier) {
            result = stripped.to_string();
        }
        if let Some(stripped) = result.strip_suffix(modifier) {
            result = stripped.to_string();
        }
    }
    result
}

fn lookup(name: &str) -> Option<f64> {
    if let Some(&density) = DENSITY_DATA.get(name) {
        return Some(density);
    }

    if let Some(canonical) = INGREDIENT_ALIASES.get(name) {
        return DENSITY_DATA.get(canonical).copied();
    }

    // "eggs" -> "egg", "oat" -> "oats"
    if let Some(singular) = name.strip_suffix('s') {
        if let Some(density) = lookup_exact(singular) {
            return Some(density);
        }
    }
    lookup_exact(&format!("{name}s"))
}

fn lookup_exact(name: &str) -> Option<f64> {
    DENSITY_DATA.get(name).copied().or_else(|| {
        INGREDIENT_ALIASES
            .get(name)
            .and_then(|canonical| DENSITY_DATA.get(canonical).copied())
    })
}

/// Find the density (grams per ml) for an ingredient name.
///
/// Lookup order:
/// 1. Direct lookup
/// 2. Alias lookup
/// 3. Plural/singular variation
/// 4. After stripping preparation modifiers, retry 1-3
pub fn find_density(ingredient: &str) -> Option<f64> {
    let normalized = ingredient.trim().to_lowercase();
    if normalized.is_empty() {
        return None;
    }

    if let Some(density) = lookup(&normalized) {
        return Some(density);
    }

    let stripped = strip_modifiers(&normalized);
    if stripped != normalized {
        return lookup(stripped.trim());
    }

    None
}
