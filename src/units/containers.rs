//! Country-dependent container sizes
//!
//! Cup, tablespoon and teaspoon sizes differ by culinary convention. Sizes
//! are in milliliters and keyed by ISO 3166 alpha-2 code, plus the
//! pseudo-country `metric`.

use tracing::debug;

use super::catalog::ContainerKind;

/// Pseudo-country for the international metric convention
pub const METRIC: &str = "metric";

/// One country's container sizes in milliliters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContainerConvention {
    pub country: &'static str,
    pub cup: f64,
    pub tablespoon: f64,
    pub teaspoon: f64,
}

impl ContainerConvention {
    /// Milliliters held by one container of the given kind
    pub fn volume(&self, kind: ContainerKind) -> f64 {
        match kind {
            ContainerKind::Cup => self.cup,
            ContainerKind::Tablespoon => self.tablespoon,
            ContainerKind::Teaspoon => self.teaspoon,
        }
    }
}

const fn convention(country: &'static str, cup: f64, tablespoon: f64, teaspoon: f64) -> ContainerConvention {
    ContainerConvention {
        country,
        cup,
        tablespoon,
        teaspoon,
    }
}

const METRIC_CONVENTION: ContainerConvention = convention(METRIC, 250.0, 15.0, 5.0);

/// Known conventions; countries not listed use [`METRIC`]
pub static CONTAINER_SIZES: &[ContainerConvention] = &[
    // US legal (nutrition labeling) measures
    convention("US", 240.0, 15.0, 5.0),
    METRIC_CONVENTION,
    // Imperial: half an imperial pint
    convention("GB", 284.131, 17.758, 5.919),
    convention("AU", 250.0, 20.0, 5.0),
    convention("NZ", 250.0, 15.0, 5.0),
    convention("CA", 250.0, 15.0, 5.0),
    convention("ZA", 250.0, 15.0, 5.0),
    convention("JP", 200.0, 15.0, 5.0),
];

/// Find the convention for a resolved country code
pub fn find_convention(country: &str) -> Option<&'static ContainerConvention> {
    CONTAINER_SIZES
        .iter()
        .find(|c| c.country.eq_ignore_ascii_case(country))
}

/// Milliliters held by one container of `kind` in `country`
///
/// Falls back to the metric convention when the country has none of its own.
pub fn container_volume(country: &str, kind: ContainerKind) -> f64 {
    match find_convention(country) {
        Some(convention) => convention.volume(kind),
        None => {
            debug!("No container convention for '{}', using metric", country);
            METRIC_CONVENTION.volume(kind)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_us_cup() {
        assert_eq!(container_volume("US", ContainerKind::Cup), 240.0);
        assert_eq!(container_volume("us", ContainerKind::Teaspoon), 5.0);
    }

    #[test]
    fn test_locale_differs() {
        assert_ne!(
            container_volume("US", ContainerKind::Cup),
            container_volume(METRIC, ContainerKind::Cup)
        );
        assert_eq!(container_volume("AU", ContainerKind::Tablespoon), 20.0);
        assert!((container_volume("GB", ContainerKind::Cup) - 284.131).abs() < 0.001);
    }

    #[test]
    fn test_unlisted_country_uses_metric() {
        assert_eq!(container_volume("FR", ContainerKind::Cup), 250.0);
        assert!(find_convention("FR").is_none());
        assert_eq!(find_convention(METRIC), Some(&METRIC_CONVENTION));
    }

    #[test]
    fn test_sizes_positive() {
        for c in CONTAINER_SIZES {
            assert!(c.cup > 0.0 && c.tablespoon > 0.0 && c.teaspoon > 0.0);
        }
    }
}
