//! Food Units Library
//!
//! Converts cooking quantities written as free text ("1 1/2 fluid ounce",
//! "2.5 stones", "600 mls") into a target unit: metric/imperial ratios,
//! weight/volume through ingredient density, and country-dependent cups and
//! spoons.

pub mod convert;
pub mod error;
pub mod lookup;
pub mod text;
pub mod units;
pub mod validate;

pub use convert::{
    can_convert, convert, ConversionRequest, ConversionResult, Converter, Quantity,
    DEFAULT_COUNTRY, DEFAULT_DECIMAL_PLACES,
};
pub use error::{ConversionFailure, ConvertResult, ValidationFailure};
pub use lookup::{CountryTable, DensityTable, NameResolver};
pub use validate::{is_valid_unit, validate};
