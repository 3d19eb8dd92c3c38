//! Name resolution collaborators
//!
//! Countries and ingredients arrive as free text. The converter resolves
//! them through the [`NameResolver`] trait so callers can swap in their own
//! lookup (or a deterministic stub in tests).

use tracing::debug;

use crate::error::{ConversionFailure, ConvertResult};
use crate::units::{find_density, METRIC};

/// Resolves a free-text name to a canonical value
pub trait NameResolver: Send + Sync {
    type Resolved;

    fn resolve(&self, name: &str) -> ConvertResult<Self::Resolved>;
}

/// Country code, names and aliases
struct CountryEntry {
    code: &'static str,
    names: &'static [&'static str],
}

const fn country(code: &'static str, names: &'static [&'static str]) -> CountryEntry {
    CountryEntry { code, names }
}

const COUNTRIES: &[CountryEntry] = &[
    country("US", &["united states", "united states of america", "usa", "america"]),
    country(
        "GB",
        &["united kingdom", "great britain", "britain", "uk", "england", "scotland", "wales"],
    ),
    country("AU", &["australia"]),
    country("NZ", &["new zealand"]),
    country("CA", &["canada"]),
    country("ZA", &["south africa"]),
    country("JP", &["japan"]),
    country("IE", &["ireland"]),
    country("FR", &["france"]),
    country("DE", &["germany"]),
    country("IT", &["italy"]),
    country("ES", &["spain"]),
    country("NL", &["netherlands", "holland"]),
    country("IN", &["india"]),
    country("CN", &["china"]),
    country("MX", &["mexico"]),
    country("BR", &["brazil"]),
    country(METRIC, &["metric", "international"]),
];

/// Built-in country lookup
///
/// Matches alpha-2 codes and names case-insensitively, then falls back to the
/// first country whose name contains the query (three characters or more).
#[derive(Debug, Clone, Copy, Default)]
pub struct CountryTable;

impl NameResolver for CountryTable {
    type Resolved = String;

    fn resolve(&self, name: &str) -> ConvertResult<String> {
        let query = name.trim().to_lowercase();
        let not_found = || ConversionFailure::UnknownCountry(name.to_string());

        if query.is_empty() {
            return Err(not_found());
        }

        let exact = COUNTRIES.iter().find(|c| {
            c.code.eq_ignore_ascii_case(&query) || c.names.iter().any(|n| *n == query)
        });
        if let Some(country) = exact {
            return Ok(country.code.to_string());
        }

        if query.len() >= 3 {
            let partial = COUNTRIES
                .iter()
                .find(|c| c.names.iter().any(|n| n.contains(query.as_str())));
            if let Some(country) = partial {
                debug!("Country '{}' matched partially to {}", name, country.code);
                return Ok(country.code.to_string());
            }
        }

        Err(not_found())
    }
}

/// Built-in ingredient density lookup, in grams per milliliter
#[derive(Debug, Clone, Copy, Default)]
pub struct DensityTable;

impl NameResolver for DensityTable {
    type Resolved = f64;

    fn resolve(&self, name: &str) -> ConvertResult<f64> {
        find_density(name).ok_or_else(|| ConversionFailure::UnknownIngredient(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_country_codes_and_names() {
        assert_eq!(CountryTable.resolve("US").unwrap(), "US");
        assert_eq!(CountryTable.resolve("us").unwrap(), "US");
        assert_eq!(CountryTable.resolve("United Kingdom").unwrap(), "GB");
        assert_eq!(CountryTable.resolve(" Australia ").unwrap(), "AU");
        assert_eq!(CountryTable.resolve("metric").unwrap(), METRIC);
    }

    #[test]
    fn test_country_partial_match() {
        assert_eq!(CountryTable.resolve("zealand").unwrap(), "NZ");
        assert_eq!(CountryTable.resolve("states").unwrap(), "US");
    }

    #[test]
    fn test_country_unknown() {
        assert_eq!(
            CountryTable.resolve("Atlantis"),
            Err(ConversionFailure::UnknownCountry("Atlantis".to_string()))
        );
        assert!(CountryTable.resolve("").is_err());
        assert!(CountryTable.resolve("xx").is_err());
    }

    #[test]
    fn test_density_table() {
        assert_eq!(DensityTable.resolve("water").unwrap(), 1.0);
        assert_eq!(
            DensityTable.resolve("moon dust"),
            Err(ConversionFailure::UnknownIngredient("moon dust".to_string()))
        );
    }
}
