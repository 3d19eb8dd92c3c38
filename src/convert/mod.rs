//! Conversion module
//!
//! Convertibility rules and the conversion pipeline.

pub mod checker;
pub mod engine;

pub use checker::can_convert;
pub use engine::{
    convert, ConversionRequest, ConversionResult, Converter, Quantity, DEFAULT_COUNTRY,
    DEFAULT_DECIMAL_PLACES,
};
