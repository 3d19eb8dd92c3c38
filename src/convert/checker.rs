//! Convertibility checks
//!
//! Decides whether a (value, from_unit, to_unit, ingredient) request can be
//! performed at all, before any arithmetic happens.

use tracing::debug;

use crate::error::{ConversionFailure, ConvertResult};
use crate::units::find_category;

/// Check if the given units can be converted
///
/// Fails when the value is missing or not finite, when either unit is unknown
/// or outside the weight/volume categories, or when the units sit in
/// different categories and neither an ingredient nor a density override was
/// supplied to bridge them. Same-category requests never need an ingredient.
pub fn can_convert(
    value: Option<f64>,
    from_unit: &str,
    to_unit: &str,
    ingredient: Option<&str>,
    ingredient_density: Option<f64>,
) -> ConvertResult<bool> {
    match value {
        Some(v) if v.is_finite() => {}
        Some(v) => return Err(ConversionFailure::InvalidValue(v.to_string())),
        None => return Err(ConversionFailure::InvalidValue("None".to_string())),
    }

    let from_category =
        find_category(from_unit).ok_or_else(|| ConversionFailure::UnknownUnit(from_unit.to_string()))?;
    let to_category =
        find_category(to_unit).ok_or_else(|| ConversionFailure::UnknownUnit(to_unit.to_string()))?;

    if !from_category.kind.is_convertible() || !to_category.kind.is_convertible() {
        return Err(ConversionFailure::IncompatibleCategory {
            from: from_category.kind.as_str().to_string(),
            to: to_category.kind.as_str().to_string(),
        });
    }

    if from_category.kind != to_category.kind {
        let has_ingredient = ingredient.is_some_and(|i| !i.trim().is_empty());
        if !has_ingredient && ingredient_density.is_none() {
            return Err(ConversionFailure::MissingIngredient);
        }
        debug!(
            "'{}' -> '{}' crosses {} -> {}, density bridge required",
            from_unit,
            to_unit,
            from_category.kind.as_str(),
            to_category.kind.as_str()
        );
    }

    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_category() {
        assert_eq!(can_convert(Some(1.0), "ml", "fl oz", None, None), Ok(true));
        assert_eq!(can_convert(Some(2.5), "lbs", "gram", None, None), Ok(true));
        assert_eq!(can_convert(Some(1.0), "cup", "tsp", None, None), Ok(true));
    }

    #[test]
    fn test_cross_category_needs_bridge() {
        assert_eq!(
            can_convert(Some(1.0), "g", "ml", None, None),
            Err(ConversionFailure::MissingIngredient)
        );
        assert_eq!(
            can_convert(Some(1.0), "g", "ml", Some("  "), None),
            Err(ConversionFailure::MissingIngredient)
        );
        assert_eq!(can_convert(Some(1.0), "g", "ml", Some("water"), None), Ok(true));
        assert_eq!(can_convert(Some(1.0), "g", "ml", None, Some(0.5)), Ok(true));
    }

    #[test]
    fn test_invalid_value() {
        assert!(matches!(
            can_convert(None, "ml", "ml", None, None),
            Err(ConversionFailure::InvalidValue(_))
        ));
        assert!(matches!(
            can_convert(Some(f64::NAN), "ml", "ml", None, None),
            Err(ConversionFailure::InvalidValue(_))
        ));
    }

    #[test]
    fn test_unknown_units() {
        assert_eq!(
            can_convert(Some(1.0), "invalid unit", "ml", None, None),
            Err(ConversionFailure::UnknownUnit("invalid unit".to_string()))
        );
        assert_eq!(
            can_convert(Some(1.0), "ml", "", None, None),
            Err(ConversionFailure::UnknownUnit(String::new()))
        );
    }

    #[test]
    fn test_count_units_rejected() {
        assert_eq!(
            can_convert(Some(1.0), "slice", "g", Some("bread"), None),
            Err(ConversionFailure::IncompatibleCategory {
                from: "count".to_string(),
                to: "weight".to_string(),
            })
        );
    }
}
