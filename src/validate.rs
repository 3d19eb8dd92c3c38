//! Validation helpers
//!
//! [`validate`] turns a boolean check into `Ok(())` or a [`ValidationFailure`]
//! that records which check failed and what it was given.

use std::fmt::Display;

use serde::Serialize;
use tracing::debug;

use crate::error::{ConversionFailure, ConvertResult, ValidationFailure};
use crate::text::{normalize_numeric, parse_number, split_quantity_unit};
use crate::units::find_unit;

/// Run `check` on `args`
///
/// `Ok(false)` becomes a failure without a message; `Err(e)` becomes a
/// failure carrying `e`'s message.
pub fn validate<A, E, F>(predicate: &'static str, check: F, args: A) -> Result<(), ValidationFailure>
where
    A: Serialize,
    E: Display,
    F: FnOnce(&A) -> Result<bool, E>,
{
    let message = match check(&args) {
        Ok(true) => return Ok(()),
        Ok(false) => None,
        Err(e) => Some(e.to_string()),
    };

    let args = serde_json::to_value(&args).unwrap_or(serde_json::Value::Null);
    debug!("Validation {} failed for {}", predicate, args);
    Err(ValidationFailure {
        predicate,
        args,
        message,
    })
}

/// Check that `value` is a food unit, optionally preceded by a quantity
///
/// Accepts "cup", "Fluid Ounce", "2mls", "one hundred and 2 fl ozs".
pub fn is_valid_unit(value: &str) -> Result<(), ValidationFailure> {
    validate("food_unit", |value: &&str| food_unit(value), value)
}

fn food_unit(value: &str) -> ConvertResult<bool> {
    let cleaned = normalize_numeric(value);

    // A bare number has no unit
    if cleaned.is_empty() || parse_number(&cleaned).is_some() {
        return Ok(false);
    }

    let (quantity, unit) = split_quantity_unit(&cleaned);
    if let Some(quantity) = quantity {
        if parse_number(&quantity).is_none() {
            return Err(ConversionFailure::InvalidValue(quantity));
        }
    }

    Ok(find_unit(&unit).is_some())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_valid_food_units() {
        for value in [
            "cup",
            "ounces",
            "Fluid Ounce",
            "slices",
            "2 mls",
            "2mls",
            "2 fl ozs",
            "one hundred and 2 fl ozs",
            "1½ cups",
        ] {
            assert!(is_valid_unit(value).is_ok(), "{value} should be valid");
        }
    }

    #[test]
    fn test_invalid_food_units() {
        for value in ["", "not_a_unit", "5mlls", "42", "many cups"] {
            assert!(is_valid_unit(value).is_err(), "{value} should be invalid");
        }
    }

    #[test]
    fn test_failure_details() {
        let failure = is_valid_unit("5mlls").unwrap_err();
        assert_eq!(failure.predicate, "food_unit");
        assert_eq!(failure.args, json!("5mlls"));
        assert_eq!(failure.message, None);

        let failure = is_valid_unit("many cups").unwrap_err();
        assert!(failure.message.is_some_and(|m| m.contains("many")));
    }

    #[test]
    fn test_validate_wrapper() {
        let even = |n: &i64| Ok::<bool, String>(n % 2 == 0);
        assert_eq!(validate("even", even, 4), Ok(()));

        let failure = validate("even", even, 5).unwrap_err();
        assert_eq!(failure.args, json!(5));
        assert_eq!(failure.to_string(), "even failed for 5");

        let failure = validate("positive", |_: &i64| Err::<bool, _>("boom"), -1).unwrap_err();
        assert_eq!(failure.message.as_deref(), Some("boom"));
        assert_eq!(failure.to_string(), "positive failed for -1: boom");
    }
}
