//! Quantity/unit splitting
//!
//! Separates a normalized "quantity + unit" string into its two parts.

use std::sync::LazyLock;

use regex::Regex;
use tracing::trace;

/// Trailing "fl oz" / "fl. oz." / "fluid ounce" phrase, optionally pluralized
static FLUID_OUNCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.*?)\s*((?:fl|fluid)\.?\s*(?:oz|ounce)s*\.?)$")
        .expect("fluid ounce pattern should be valid")
});

/// Digits glued to letters, e.g. "5mls" or "2.5kg"
static GLUED_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)([a-z]+)").expect("glued quantity pattern should be valid")
});

/// Split a quantity + unit string into quantity and unit
///
/// Expects text already passed through `normalize_numeric`. Three shapes are
/// recognized, first match wins:
/// 1. fluid ounce compounds: "5 fl ozs" -> ("5", "fl ozs"),
///    "five fluid ounces" -> ("five", "fluid ounces")
/// 2. digits glued to the unit: "5mls" -> ("5", "mls")
/// 3. anything else, split at the last space: "five hundred cups" ->
///    ("five hundred", "cups"); a single token is a bare unit: "cups" ->
///    (None, "cups")
pub fn split_quantity_unit(text: &str) -> (Option<String>, String) {
    let text = text.trim();

    if let Some(caps) = FLUID_OUNCE_REGEX.captures(text) {
        let quantity = non_empty(&caps[1]);
        trace!("Split fluid ounce compound '{}' -> {:?}, '{}'", text, quantity, &caps[2]);
        return (quantity, caps[2].to_string());
    }

    if let Some(caps) = GLUED_REGEX.captures(text) {
        trace!("Split glued quantity '{}' -> '{}', '{}'", text, &caps[1], &caps[2]);
        return (Some(caps[1].to_string()), caps[2].to_string());
    }

    match text.rsplit_once(' ') {
        Some((quantity, unit)) => (non_empty(quantity), unit.to_string()),
        None => (None, text.to_string()),
    }
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parts(quantity: Option<&str>, unit: &str) -> (Option<String>, String) {
        (quantity.map(str::to_string), unit.to_string())
    }

    #[test]
    fn test_split_fluid_ounces() {
        assert_eq!(split_quantity_unit("5 fl ozs"), parts(Some("5"), "fl ozs"));
        assert_eq!(split_quantity_unit("5 fluid ounces"), parts(Some("5"), "fluid ounces"));
        assert_eq!(split_quantity_unit("five fluid ounces"), parts(Some("five"), "fluid ounces"));
        assert_eq!(split_quantity_unit("1 1/2 fluid ounce"), parts(Some("1 1/2"), "fluid ounce"));
        assert_eq!(
            split_quantity_unit("one hundred and 2 fl ozs"),
            parts(Some("one hundred and 2"), "fl ozs")
        );
        assert_eq!(split_quantity_unit("2floz"), parts(Some("2"), "floz"));
    }

    #[test]
    fn test_split_abbreviated_fluid_ounces() {
        assert_eq!(split_quantity_unit("1.5 fl. oz."), parts(Some("1.5"), "fl. oz."));
        assert_eq!(split_quantity_unit("1.5 fl oz."), parts(Some("1.5"), "fl oz."));
        assert_eq!(split_quantity_unit("2 fl.oz"), parts(Some("2"), "fl.oz"));
        assert_eq!(split_quantity_unit("2 tbsp."), parts(Some("2"), "tbsp."));
    }

    #[test]
    fn test_split_bare_fluid_ounce() {
        assert_eq!(split_quantity_unit("fluid ounce"), parts(None, "fluid ounce"));
    }

    #[test]
    fn test_split_glued() {
        assert_eq!(split_quantity_unit("5mls"), parts(Some("5"), "mls"));
        assert_eq!(split_quantity_unit("2.5kg"), parts(Some("2.5"), "kg"));
        assert_eq!(split_quantity_unit("5mlls"), parts(Some("5"), "mlls"));
    }

    #[test]
    fn test_split_generic() {
        assert_eq!(split_quantity_unit("5 cups"), parts(Some("5"), "cups"));
        assert_eq!(split_quantity_unit("2.5 stones"), parts(Some("2.5"), "stones"));
        assert_eq!(split_quantity_unit("five hundred cups"), parts(Some("five hundred"), "cups"));
        assert_eq!(split_quantity_unit("cups"), parts(None, "cups"));
        assert_eq!(split_quantity_unit(""), parts(None, ""));
    }
}
