//! Food Units
//!
//! Command line front end for the converter.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use foodunits::{convert, ConversionRequest, DEFAULT_COUNTRY};

#[derive(Parser, Debug)]
#[command(name = "foodunits")]
#[command(about = "Convert a cooking quantity into another unit", long_about = None)]
struct Cli {
    /// Value to convert, a number or text such as "1 1/2 fl oz"
    value: String,

    /// Unit to convert into
    to_unit: String,

    /// Source unit, overriding any unit found in the value
    #[arg(long)]
    from: Option<String>,

    /// Ingredient name, needed between weight and volume
    #[arg(long)]
    ingredient: Option<String>,

    /// Ingredient density in grams per milliliter
    #[arg(long)]
    density: Option<f64>,

    /// Country deciding cup and spoon sizes
    #[arg(long, env = "FOODUNITS_COUNTRY", default_value = DEFAULT_COUNTRY)]
    country: String,

    /// Decimal places to round to
    #[arg(long)]
    decimals: Option<u32>,
}

impl Cli {
    fn into_request(self) -> ConversionRequest {
        let mut request = ConversionRequest::new(self.value, self.to_unit).country(self.country);
        if let Some(from) = self.from {
            request = request.from_unit(from);
        }
        if let Some(ingredient) = self.ingredient {
            request = request.ingredient(ingredient);
        }
        if let Some(density) = self.density {
            request = request.ingredient_density(density);
        }
        if let Some(places) = self.decimals {
            request = request.decimal_places(places);
        }
        request
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout carries only the result
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("foodunits=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    match convert(&cli.into_request()) {
        Ok(result) => {
            println!("{}", serde_json::to_string(&result)?);
            Ok(())
        }
        Err(e) => {
            eprintln!("Conversion failed: {e}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use foodunits::Quantity;

    #[test]
    fn test_cli_minimal() {
        let cli = Cli::try_parse_from(["foodunits", "2.5 lbs", "gram"]).unwrap();
        let request = cli.into_request();
        assert_eq!(request.value, Quantity::Text("2.5 lbs".to_string()));
        assert_eq!(request.to_unit, "gram");
        assert_eq!(request.from_unit, None);
        assert_eq!(request.decimal_places, None);
    }

    #[test]
    fn test_cli_options() {
        let cli = Cli::try_parse_from([
            "foodunits", "2.5", "g", "--from", "cup", "--ingredient", "flour", "--density",
            "0.6", "--country", "metric", "--decimals", "1",
        ])
        .unwrap();
        let request = cli.into_request();
        assert_eq!(request.from_unit.as_deref(), Some("cup"));
        assert_eq!(request.ingredient.as_deref(), Some("flour"));
        assert_eq!(request.ingredient_density, Some(0.6));
        assert_eq!(request.country, "metric");
        assert_eq!(request.decimal_places, Some(1));
    }

    #[test]
    fn test_cli_errors() {
        assert!(Cli::try_parse_from(["foodunits", "1"]).is_err());
        assert!(Cli::try_parse_from(["foodunits", "1", "g", "--from"]).is_err());
        assert!(Cli::try_parse_from(["foodunits", "1", "g", "--density", "heavy"]).is_err());
        assert!(Cli::try_parse_from(["foodunits", "1", "g", "--decimals", "-1"]).is_err());
        assert!(Cli::try_parse_from(["foodunits", "1", "g", "--colour", "red"]).is_err());
    }
}
