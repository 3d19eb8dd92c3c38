//! Input text normalization
//!
//! Strips punctuation and noise from free-form quantity text, leaving only
//! lowercase letters, digits, single spaces and (for the numeric policy) the
//! decimal point and digit-to-digit fraction slashes.

/// Unicode vulgar fractions and their ASCII expansions
const VULGAR_FRACTIONS: &[(char, &str)] = &[
    ('½', "1/2"),
    ('⅓', "1/3"),
    ('⅔', "2/3"),
    ('¼', "1/4"),
    ('¾', "3/4"),
    ('⅕', "1/5"),
    ('⅖', "2/5"),
    ('⅗', "3/5"),
    ('⅘', "4/5"),
    ('⅙', "1/6"),
    ('⅚', "5/6"),
    ('⅛', "1/8"),
    ('⅜', "3/8"),
    ('⅝', "5/8"),
    ('⅞', "7/8"),
];

/// Normalize text for numeric parsing
///
/// Keeps letters, digits, whitespace, `.` and any `/` that sits between two
/// digits. Runs of whitespace collapse to one space and the ends are trimmed.
///
/// Examples:
/// - "  1.5 Fluid-Ounce!! " -> "1.5 fluidounce"
/// - "1½ cups" -> "1 1/2 cups"
pub fn normalize_numeric(text: &str) -> String {
    let expanded = expand_vulgar_fractions(text);
    let chars: Vec<char> = expanded.chars().collect();

    let mut kept = String::with_capacity(chars.len());
    for (i, &c) in chars.iter().enumerate() {
        if c.is_ascii_alphanumeric() || c == '.' || c.is_whitespace() {
            kept.push(c.to_ascii_lowercase());
        } else if c == '/' && is_digit_at(&chars, i.wrapping_sub(1)) && is_digit_at(&chars, i + 1) {
            kept.push(c);
        }
    }

    collapse_whitespace(&kept)
}

/// Normalize text for unit-token matching
///
/// Same as [`normalize_numeric`] but drops `.` and `/` as well, so "fl. oz."
/// and "fl oz" normalize identically.
pub fn normalize_unit(text: &str) -> String {
    let kept: String = text
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .map(|c| c.to_ascii_lowercase())
        .collect();

    collapse_whitespace(&kept)
}

fn expand_vulgar_fractions(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match VULGAR_FRACTIONS.iter().find(|(v, _)| *v == c) {
            Some((_, ascii)) => {
                out.push(' ');
                out.push_str(ascii);
            }
            None => out.push(c),
        }
    }
    out
}

fn is_digit_at(chars: &[char], i: usize) -> bool {
    chars.get(i).is_some_and(|c| c.is_ascii_digit())
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_numeric_strips_noise() {
        assert_eq!(normalize_numeric("  1.5 Fluid-Ounce!! "), "1.5 fluidounce");
        assert_eq!(normalize_numeric("600   mls"), "600 mls");
        assert_eq!(normalize_numeric("2,5 (kg)"), "25 kg");
    }

    #[test]
    fn test_normalize_numeric_keeps_fractions() {
        assert_eq!(normalize_numeric("1 1/2 fluid ounce"), "1 1/2 fluid ounce");
        assert_eq!(normalize_numeric("1½ cups"), "1 1/2 cups");
        assert_eq!(normalize_numeric("¾ tsp"), "3/4 tsp");
        assert_eq!(normalize_numeric("cups / tsp"), "cups tsp");
    }

    #[test]
    fn test_normalize_unit_drops_dot() {
        assert_eq!(normalize_unit("fl. oz."), "fl oz");
        assert_eq!(normalize_unit("  Fluid   Ounces "), "fluid ounces");
        assert_eq!(normalize_unit("not_a_unit"), "notaunit");
    }

    #[test]
    fn test_normalize_empty() {
        assert_eq!(normalize_numeric(""), "");
        assert_eq!(normalize_unit("   "), "");
        assert_eq!(normalize_unit("!!!"), "");
    }
}
