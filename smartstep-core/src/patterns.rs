//! Regex construction for the marking passes.

use std::sync::LazyLock;

use regex::{Regex, RegexBuilder};

use crate::catalog::PreparedCatalog;

/// A bare number followed by a Celsius or Fahrenheit marker: "400F",
/// "180 C", "350 °F". Case-sensitive, so "at 400 f" is left alone.
static TEMPERATURE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b\d+(?:\.\d+)?\s?(?:°\s?)?[CF]\b").expect("temperature regex is invalid")
});

/// Quantities accepted in front of a unit: mixed numbers ("1 1/2"),
/// fractions ("3/4", "1.5/2"), decimals and integers. Fractions take a
/// decimal numerator so a match never starts after the point.
const QUANTITY: &str = r"(?:\d+\s+\d+/\d+|\d+(?:\.\d+)?/\d+|\d+(?:\.\d+)?)";

pub fn temperature_pattern() -> &'static Regex {
    &TEMPERATURE
}

/// Patterns compiled from one prepared catalog.
#[derive(Debug, Clone, Default)]
pub struct CompiledPatterns {
    pub entities: Option<Regex>,
    pub measurements: Option<Regex>,
}

impl CompiledPatterns {
    pub fn new(catalog: &PreparedCatalog) -> Self {
        Self {
            entities: entity_pattern(catalog.entity_names()),
            measurements: measurement_pattern(catalog.unit_forms()),
        }
    }
}

/// Case-insensitive alternation over entity names, tried in the given order.
///
/// Callers pass names with the most words first so "cast iron pan" wins
/// over "pan" at the same position. Returns `None` for an empty list.
pub fn entity_pattern(names: &[String]) -> Option<Regex> {
    if names.is_empty() {
        return None;
    }

    let alternation = names
        .iter()
        .map(|name| {
            let body = literal(name);
            let start = if name.starts_with(is_word_char) { r"\b" } else { "" };
            let end = if name.ends_with(is_word_char) { r"\b" } else { "" };
            format!("{}{}{}", start, body, end)
        })
        .collect::<Vec<_>>()
        .join("|");

    compile(&format!("(?:{})", alternation), "entity")
}

/// A quantity, optional whitespace, then one of the unit forms.
///
/// Longer forms are tried first ("tablespoons" before "tablespoon").
/// Every form matches case-insensitively, so a catalog with a "c" form
/// reads "180 C" as cups; [`crate::validate_catalog`] flags such forms.
pub fn measurement_pattern(forms: &[String]) -> Option<Regex> {
    if forms.is_empty() {
        return None;
    }

    let mut sorted: Vec<&str> = forms.iter().map(String::as_str).collect();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()));

    let units = sorted
        .iter()
        .map(|form| {
            let body = literal(form);
            let end = if form.ends_with(is_word_char) { r"\b" } else { "" };
            format!("{}{}", body, end)
        })
        .collect::<Vec<_>>()
        .join("|");

    compile(
        &format!(r"\b{}\s?(?:{})", QUANTITY, units),
        "measurement",
    )
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Escape a name, letting its internal whitespace match any whitespace run.
fn literal(name: &str) -> String {
    name.split_whitespace()
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join(r"\s+")
}

fn compile(pattern: &str, what: &str) -> Option<Regex> {
    match RegexBuilder::new(pattern).case_insensitive(true).build() {
        Ok(re) => Some(re),
        Err(e) => {
            tracing::warn!("Failed to compile {} pattern, skipping stage: {}", what, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    fn matches(re: &Regex, text: &str) -> Vec<String> {
        re.find_iter(text).map(|m| m.as_str().to_string()).collect()
    }

    #[test]
    fn test_empty_lists_build_nothing() {
        assert!(entity_pattern(&[]).is_none());
        assert!(measurement_pattern(&[]).is_none());
    }

    #[test]
    fn test_entity_whole_words_only() {
        let re = entity_pattern(&names(&["pan"])).unwrap();
        assert!(matches(&re, "panko breadcrumbs").is_empty());
        assert_eq!(matches(&re, "grease the Pan."), vec!["Pan"]);
    }

    #[test]
    fn test_entity_order_is_respected() {
        let re = entity_pattern(&names(&["cast iron pan", "pan"])).unwrap();
        assert_eq!(
            matches(&re, "heat the cast iron pan, then a pan"),
            vec!["cast iron pan", "pan"]
        );
    }

    #[test]
    fn test_entity_flexible_spacing_and_punctuation() {
        let re = entity_pattern(&names(&["olive oil", "St. Germain", "salt & pepper"])).unwrap();
        assert_eq!(matches(&re, "drizzle olive  oil"), vec!["olive  oil"]);
        assert_eq!(matches(&re, "add St. Germain slowly"), vec!["St. Germain"]);
        assert_eq!(matches(&re, "season with salt & pepper"), vec!["salt & pepper"]);
    }

    #[test]
    fn test_measurement_quantities() {
        let re = measurement_pattern(&names(&["cup", "cups", "oz"])).unwrap();
        assert_eq!(matches(&re, "add 1 1/2 cups of flour"), vec!["1 1/2 cups"]);
        assert_eq!(matches(&re, "add 3/4 cup milk"), vec!["3/4 cup"]);
        assert_eq!(matches(&re, "add 12 oz butter"), vec!["12 oz"]);
        assert_eq!(matches(&re, "add 2.5 Cups water"), vec!["2.5 Cups"]);
        assert_eq!(matches(&re, "add 12oz butter"), vec!["12oz"]);
    }

    #[test]
    fn test_measurement_requires_unit_boundary() {
        let re = measurement_pattern(&names(&["cup", "cups"])).unwrap();
        assert!(matches(&re, "bake 24 cupcakes").is_empty());
        assert!(matches(&re, "add 2 eggs").is_empty());
    }

    #[test]
    fn test_single_letter_units_ignore_case() {
        let re = measurement_pattern(&names(&["c", "g"])).unwrap();
        assert_eq!(matches(&re, "add 2 c flour and 50 g sugar"), vec!["2 c", "50 g"]);
        assert_eq!(matches(&re, "add 2 C flour and 50 G sugar"), vec!["2 C", "50 G"]);
    }

    #[test]
    fn test_measurement_never_starts_inside_a_decimal() {
        let re = measurement_pattern(&names(&["cup", "cups"])).unwrap();
        assert_eq!(matches(&re, "mix 1.5/2 cups"), vec!["1.5/2 cups"]);
        assert_eq!(matches(&re, "mix 1.5 cups"), vec!["1.5 cups"]);
    }

    #[test]
    fn test_temperature_forms() {
        let re = temperature_pattern();
        assert_eq!(matches(re, "bake at 400F for 20 minutes"), vec!["400F"]);
        assert_eq!(matches(re, "set oven to 180 C"), vec!["180 C"]);
        assert_eq!(matches(re, "heat to 350 °F"), vec!["350 °F"]);
        assert_eq!(matches(re, "oil at 177.5°C"), vec!["177.5°C"]);
        assert!(matches(re, "add 2 Cups").is_empty());
        assert!(matches(re, "at 400 f").is_empty());
    }
}
