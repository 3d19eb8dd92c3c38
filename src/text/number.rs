//! Numeric token parsing
//!
//! Turns a normalized quantity token into a number. Accepts integer and
//! decimal literals, fractions ("3/4", "1 1/2") and spelled-out English
//! cardinals ("one hundred and two", "twenty-five").

use tracing::trace;

/// Number words that add to the low-order accumulator
const UNIT_WORDS: &[(&str, f64)] = &[
    ("zero", 0.0),
    ("one", 1.0),
    ("two", 2.0),
    ("three", 3.0),
    ("four", 4.0),
    ("five", 5.0),
    ("six", 6.0),
    ("seven", 7.0),
    ("eight", 8.0),
    ("nine", 9.0),
    ("ten", 10.0),
    ("eleven", 11.0),
    ("twelve", 12.0),
    ("thirteen", 13.0),
    ("fourteen", 14.0),
    ("fifteen", 15.0),
    ("sixteen", 16.0),
    ("seventeen", 17.0),
    ("eighteen", 18.0),
    ("nineteen", 19.0),
    ("twenty", 20.0),
    ("thirty", 30.0),
    ("forty", 40.0),
    ("fifty", 50.0),
    ("sixty", 60.0),
    ("seventy", 70.0),
    ("eighty", 80.0),
    ("ninety", 90.0),
];

/// Number words that close out the accumulator into the running total
const SCALE_WORDS: &[(&str, f64)] = &[
    ("hundred", 100.0),
    ("thousand", 1_000.0),
    ("million", 1_000_000.0),
    ("billion", 1_000_000_000.0),
];

/// Parse a numeric token
///
/// Tries, in order: integer literal, decimal literal, fraction or mixed
/// number, spelled-out number phrase. Returns None if every branch fails.
///
/// Examples:
/// - "5" -> Some(5.0)
/// - "2.5" -> Some(2.5)
/// - "1 1/2" -> Some(1.5)
/// - "two thousand three hundred" -> Some(2300.0)
/// - "cup" -> None
pub fn parse_number(token: &str) -> Option<f64> {
    let token = token.trim();

    if let Some(value) = parse_integer(token) {
        return Some(value);
    }
    if let Some(value) = parse_decimal(token) {
        return Some(value);
    }
    if let Some(value) = parse_mixed_fraction(token) {
        return Some(value);
    }

    let value = parse_number_words(token);
    if value.is_none() {
        trace!("'{}' is not numeric", token);
    }
    value
}

/// Count the digits after the decimal point of a decimal literal
///
/// Returns None for anything that is not a plain decimal literal with an
/// explicit fractional part ("2", "one", "1/2", "2.").
pub fn literal_decimal_places(token: &str) -> Option<u32> {
    let token = token.trim();
    let (whole, fraction) = token.split_once('.')?;
    let digits_only = |s: &str| s.chars().all(|c| c.is_ascii_digit());

    if fraction.is_empty() || !digits_only(whole) || !digits_only(fraction) {
        return None;
    }

    u32::try_from(fraction.len()).ok()
}

fn parse_integer(token: &str) -> Option<f64> {
    token.parse::<i64>().ok().map(|n| n as f64)
}

fn parse_decimal(token: &str) -> Option<f64> {
    // Only digits and one dot, so "inf", "NaN" and exponents stay out
    if token.is_empty() || !token.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }
    token.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn parse_fraction(token: &str) -> Option<f64> {
    let (numerator, denominator) = token.split_once('/')?;
    let numerator = numerator.parse::<u64>().ok()?;
    let denominator = denominator.parse::<u64>().ok()?;
    if denominator == 0 {
        return None;
    }
    Some(numerator as f64 / denominator as f64)
}

/// "3/4" or "1 3/4"
fn parse_mixed_fraction(token: &str) -> Option<f64> {
    let parts: Vec<&str> = token.split_whitespace().collect();
    match parts.as_slice() {
        [fraction] => parse_fraction(fraction),
        [whole, fraction] => {
            let whole = whole.parse::<u64>().ok()? as f64;
            Some(whole + parse_fraction(fraction)?)
        }
        _ => None,
    }
}

/// Spelled-out cardinal phrase, with embedded literals allowed
///
/// Each scale word multiplies the accumulator and folds it into the total,
/// so "two thousand three hundred" is 2000 + 300.
fn parse_number_words(token: &str) -> Option<f64> {
    let lower = token.to_lowercase();
    let words: Vec<&str> = lower
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|w| !w.is_empty())
        .collect();

    if words.is_empty() {
        return None;
    }

    let mut total = 0.0;
    let mut current = 0.0;

    for word in words {
        if word == "and" {
            continue;
        }
        if let Some((_, scale)) = SCALE_WORDS.iter().find(|(w, _)| *w == word) {
            total += current * scale;
            current = 0.0;
        } else if let Some((_, value)) = UNIT_WORDS.iter().find(|(w, _)| *w == word) {
            current += value;
        } else if let Some(value) = parse_integer(word).or_else(|| parse_fraction(word)) {
            current += value;
        } else {
            return None;
        }
    }

    Some(total + current)
}
