//! Error types
//!
//! Failures raised by the conversion pipeline and the unit validator.

use serde::Serialize;
use thiserror::Error;

/// Conversion error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConversionFailure {
    #[error("The processed value {0} should be a number")]
    InvalidValue(String),

    #[error("Unknown unit: {0:?}")]
    UnknownUnit(String),

    #[error("Both units should be in [\"weight\", \"volume\"] category, got {from} and {to}")]
    IncompatibleCategory { from: String, to: String },

    #[error("Since units are in different categories, ingredient should be provided")]
    MissingIngredient,

    #[error("Ingredient {0} is not found")]
    UnknownIngredient(String),

    #[error("Country {0} is not found")]
    UnknownCountry(String),

    #[error("Ingredient density should be a positive number, got {0}")]
    InvalidDensity(f64),

    #[error("No conversion path from {from:?} to {to:?}")]
    NoConversionPath { from: String, to: String },

    #[error("Converted value is out of range for {0:?}")]
    OutOfRange(String),
}

/// Result type for conversion operations
pub type ConvertResult<T> = Result<T, ConversionFailure>;

/// A failed validation, carrying the predicate name and the arguments it saw
#[derive(Debug, Clone, PartialEq, Serialize, Error)]
#[error("{predicate} failed for {args}{}", message_suffix(.message))]
pub struct ValidationFailure {
    pub predicate: &'static str,
    pub args: serde_json::Value,
    pub message: Option<String>,
}

fn message_suffix(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {m}"),
        None => String::new(),
    }
}
