//! Conversion engine
//!
//! Runs the full pipeline for one request: parse the value text, normalize
//! both units, check convertibility, pick a conversion path, round.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use super::checker::can_convert;
use crate::error::{ConversionFailure, ConvertResult};
use crate::lookup::{CountryTable, DensityTable, NameResolver};
use crate::text::{
    literal_decimal_places, normalize_numeric, normalize_unit, parse_number, split_quantity_unit,
};
use crate::units::{container_volume, resolve_unit, ResolvedUnit, UnitCategory, METRIC};

/// Country used when the request names none
pub const DEFAULT_COUNTRY: &str = "US";
/// Decimal places used when neither the request nor the input decides
pub const DEFAULT_DECIMAL_PLACES: u32 = 2;
/// Beyond this, scaling for rounding loses more than it keeps
const MAX_DECIMAL_PLACES: u32 = 12;

/// The value to convert: a plain number, or text such as "1 1/2 fl oz"
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(f64),
    Text(String),
}

impl From<f64> for Quantity {
    fn from(value: f64) -> Self {
        Quantity::Number(value)
    }
}

impl From<i32> for Quantity {
    fn from(value: i32) -> Self {
        Quantity::Number(f64::from(value))
    }
}

impl From<&str> for Quantity {
    fn from(value: &str) -> Self {
        Quantity::Text(value.to_string())
    }
}

impl From<String> for Quantity {
    fn from(value: String) -> Self {
        Quantity::Text(value)
    }
}

impl std::fmt::Display for Quantity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Quantity::Number(n) => write!(f, "{n}"),
            Quantity::Text(text) => f.write_str(text),
        }
    }
}

/// One conversion request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionRequest {
    pub value: Quantity,
    pub to_unit: String,
    /// Overrides any unit found in the value text
    #[serde(default)]
    pub from_unit: Option<String>,
    #[serde(default)]
    pub ingredient: Option<String>,
    /// Grams per milliliter; takes precedence over the ingredient lookup
    #[serde(default)]
    pub ingredient_density: Option<f64>,
    #[serde(default = "default_country")]
    pub country: String,
    /// When unset, inferred from a decimal literal in the value text, else 2
    #[serde(default)]
    pub decimal_places: Option<u32>,
}

fn default_country() -> String {
    DEFAULT_COUNTRY.to_string()
}

impl ConversionRequest {
    pub fn new(value: impl Into<Quantity>, to_unit: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            to_unit: to_unit.into(),
            from_unit: None,
            ingredient: None,
            ingredient_density: None,
            country: default_country(),
            decimal_places: None,
        }
    }

    pub fn from_unit(mut self, unit: impl Into<String>) -> Self {
        self.from_unit = Some(unit.into());
        self
    }

    pub fn ingredient(mut self, ingredient: impl Into<String>) -> Self {
        self.ingredient = Some(ingredient.into());
        self
    }

    pub fn ingredient_density(mut self, grams_per_ml: f64) -> Self {
        self.ingredient_density = Some(grams_per_ml);
        self
    }

    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    pub fn decimal_places(mut self, places: u32) -> Self {
        self.decimal_places = Some(places);
        self
    }
}

/// A converted value and the symbol of the unit it is expressed in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversionResult {
    pub converted_value: f64,
    pub unit: String,
}

/// Outcome of the parse stage
#[derive(Debug, Clone, PartialEq)]
struct ParsedValue {
    value: Option<f64>,
    from_unit: String,
    decimal_places: Option<u32>,
}

/// Converter with pluggable country and ingredient lookups
pub struct Converter {
    countries: Box<dyn NameResolver<Resolved = String>>,
    ingredients: Box<dyn NameResolver<Resolved = f64>>,
}

impl Default for Converter {
    fn default() -> Self {
        Self {
            countries: Box::new(CountryTable),
            ingredients: Box::new(DensityTable),
        }
    }
}

impl std::fmt::Debug for Converter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Converter").finish_non_exhaustive()
    }
}

impl Converter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_country_resolver(
        mut self,
        resolver: impl NameResolver<Resolved = String> + 'static,
    ) -> Self {
        self.countries = Box::new(resolver);
        self
    }

    pub fn with_ingredient_resolver(
        mut self,
        resolver: impl NameResolver<Resolved = f64> + 'static,
    ) -> Self {
        self.ingredients = Box::new(resolver);
        self
    }

    /// Convert the request's value into `to_unit`
    pub fn convert(&self, request: &ConversionRequest) -> ConvertResult<ConversionResult> {
        let parsed = parse_value(&request.value, request.from_unit.as_deref());
        trace!("Parsed {:?} -> {:?}", request.value, parsed);

        let from_unit = normalize_unit(&parsed.from_unit);
        let to_unit = normalize_unit(&request.to_unit);

        let Some(value) = parsed.value else {
            return Err(ConversionFailure::InvalidValue(request.value.to_string()));
        };

        can_convert(
            Some(value),
            &from_unit,
            &to_unit,
            request.ingredient.as_deref(),
            request.ingredient_density,
        )?;

        // can_convert guarantees both of these
        let (Some(from), Some(to)) = (resolve_unit(&from_unit), resolve_unit(&to_unit)) else {
            return Err(ConversionFailure::UnknownUnit(from_unit));
        };

        let decimal_places = request
            .decimal_places
            .or(parsed.decimal_places)
            .unwrap_or(DEFAULT_DECIMAL_PLACES);

        // Container sizes depend on the country, even between identical units
        let country = match from.unit.container.or(to.unit.container) {
            Some(_) => Some(self.countries.resolve(&request.country)?),
            None => None,
        };

        if std::ptr::eq(from.unit, to.unit) {
            debug!("'{}' and '{}' are the same unit", from_unit, to_unit);
            return Ok(ConversionResult {
                converted_value: value,
                unit: to.unit.si.to_string(),
            });
        }

        let converted = match (from.unit.container, to.unit.container) {
            (None, None) if from.category.kind == to.category.kind => {
                debug!("Metric/imperial: {} -> {}", from.unit.name, to.unit.name);
                value * from.unit.ratio / to.unit.ratio
            }
            (None, None) => {
                let si_amount = value * from.unit.ratio;
                self.bridge(si_amount, from, to, to.unit.ratio, request)?
            }
            (from_kind, to_kind) => {
                if let (Some(a), Some(b)) = (from_kind, to_kind) {
                    if a != b {
                        warn!("No path between containers {:?} and {:?}", a, b);
                        return Err(ConversionFailure::NoConversionPath {
                            from: from_unit,
                            to: to_unit,
                        });
                    }
                }

                // resolved above whenever either unit is a container
                let country = country.as_deref().unwrap_or(METRIC);
                let from_ratio = unit_ratio(from, country);
                let to_ratio = unit_ratio(to, country);
                debug!(
                    "Container ({}): {} = {} ml, {} = {} ml",
                    country, from.unit.name, from_ratio, to.unit.name, to_ratio
                );

                if from.category.kind == to.category.kind {
                    value * from_ratio / to_ratio
                } else {
                    self.bridge(value * from_ratio, from, to, to_ratio, request)?
                }
            }
        };

        if !converted.is_finite() {
            warn!("Converting {} {} to {} overflowed", value, from.unit.name, to.unit.name);
            return Err(ConversionFailure::OutOfRange(to.unit.si.to_string()));
        }

        Ok(ConversionResult {
            converted_value: round_to(converted, decimal_places),
            unit: to.unit.si.to_string(),
        })
    }

    /// Cross a weight/volume boundary through the ingredient's density
    ///
    /// `si_amount` is in the source category's base unit; the result is in
    /// the target unit, whose base-unit ratio is `to_ratio`.
    fn bridge(
        &self,
        si_amount: f64,
        from: ResolvedUnit,
        to: ResolvedUnit,
        to_ratio: f64,
        request: &ConversionRequest,
    ) -> ConvertResult<f64> {
        let density = self.density(request)?;
        let target_si = match (from.category.kind, to.category.kind) {
            (UnitCategory::Volume, UnitCategory::Weight) => si_amount * density,
            (UnitCategory::Weight, UnitCategory::Volume) => si_amount / density,
            _ => {
                return Err(ConversionFailure::NoConversionPath {
                    from: from.unit.name.to_string(),
                    to: to.unit.name.to_string(),
                })
            }
        };
        debug!(
            "Density bridge: {} {} -> {} {} at {} g/ml",
            si_amount,
            from.category.kind.canonical_unit(),
            target_si,
            to.category.kind.canonical_unit(),
            density
        );
        Ok(target_si / to_ratio)
    }

    /// Explicit override first, then the ingredient lookup
    fn density(&self, request: &ConversionRequest) -> ConvertResult<f64> {
        let density = match (request.ingredient_density, request.ingredient.as_deref()) {
            (Some(density), _) => density,
            (None, Some(ingredient)) if !ingredient.trim().is_empty() => {
                self.ingredients.resolve(ingredient)?
            }
            (None, _) => return Err(ConversionFailure::MissingIngredient),
        };

        if density.is_finite() && density > 0.0 {
            Ok(density)
        } else {
            Err(ConversionFailure::InvalidDensity(density))
        }
    }
}

static DEFAULT_CONVERTER: LazyLock<Converter> = LazyLock::new(Converter::default);

/// Convert with the built-in country and density tables
pub fn convert(request: &ConversionRequest) -> ConvertResult<ConversionResult> {
    DEFAULT_CONVERTER.convert(request)
}

/// Parse stage: number, unit found in the text, inferred precision
fn parse_value(value: &Quantity, from_unit: Option<&str>) -> ParsedValue {
    let explicit_unit = from_unit.filter(|u| !u.trim().is_empty());

    match value {
        Quantity::Number(n) => ParsedValue {
            value: Some(*n),
            from_unit: explicit_unit.unwrap_or_default().to_string(),
            decimal_places: None,
        },
        Quantity::Text(text) => {
            let cleaned = normalize_numeric(text);

            if let Some(number) = parse_number(&cleaned) {
                return ParsedValue {
                    value: Some(number),
                    from_unit: explicit_unit.unwrap_or_default().to_string(),
                    decimal_places: literal_decimal_places(&cleaned),
                };
            }

            let (quantity, unit) = split_quantity_unit(&cleaned);
            let number = quantity.as_deref().and_then(parse_number);
            if number.is_none() {
                debug!("No numeric quantity in '{}'", text);
            }

            ParsedValue {
                value: number,
                from_unit: explicit_unit.map(str::to_string).unwrap_or(unit),
                decimal_places: quantity.as_deref().and_then(literal_decimal_places),
            }
        }
    }
}

/// Milliliters (or grams) per unit, with containers sized for the country
fn unit_ratio(resolved: ResolvedUnit, country: &str) -> f64 {
    match resolved.unit.container {
        Some(kind) => container_volume(country, kind),
        None => resolved.unit.ratio,
    }
}

/// Round half away from zero
///
/// Values too large to scale carry no fractional digits and come back as is.
fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10f64.powi(places.min(MAX_DECIMAL_PLACES) as i32);
    let scaled = value * factor;
    if scaled.is_finite() {
        scaled.round() / factor
    } else {
        value
    }
}
