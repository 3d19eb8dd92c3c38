//! Text parsing module
//!
//! Normalizes free-form quantity text and extracts numbers and unit tokens.

pub mod normalize;
pub mod number;
pub mod split;

pub use normalize::{normalize_numeric, normalize_unit};
pub use number::{literal_decimal_places, parse_number};
pub use split::split_quantity_unit;
