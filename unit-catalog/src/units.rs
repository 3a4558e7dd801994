//! Unit definitions and the built-in unit catalog.
//!
//! The built-in catalog is stored in `data/units.json` and compiled into the
//! binary. Every name, abbreviation and plural in it is unique after
//! lowercasing, which the annotator relies on to resolve a matched unit back
//! to exactly one definition.

use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// What a unit measures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitProperty {
    Volume,
    Mass,
    Weight,
    Other,
}

impl UnitProperty {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitProperty::Volume => "volume",
            UnitProperty::Mass => "mass",
            UnitProperty::Weight => "weight",
            UnitProperty::Other => "other",
        }
    }
}

/// A measurement unit known to the application.
///
/// `abbreviation` and `plural` may be empty (e.g. "pinch" has no
/// abbreviation); empty forms are never matched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UnitDefinition {
    pub name: String,
    #[serde(default)]
    pub abbreviation: String,
    #[serde(default)]
    pub plural: String,
    pub property: UnitProperty,
}

impl UnitDefinition {
    pub fn new(name: &str, abbreviation: &str, plural: &str, property: UnitProperty) -> Self {
        Self {
            name: name.to_string(),
            abbreviation: abbreviation.to_string(),
            plural: plural.to_string(),
            property,
        }
    }

    /// The non-empty textual forms of this unit, in name, abbreviation,
    /// plural order.
    pub fn match_forms(&self) -> impl Iterator<Item = &str> {
        [
            self.name.as_str(),
            self.abbreviation.as_str(),
            self.plural.as_str(),
        ]
        .into_iter()
        .map(str::trim)
        .filter(|form| !form.is_empty())
    }
}

#[derive(Deserialize)]
struct UnitsFile {
    units: Vec<UnitDefinition>,
}

static UNITS_JSON: &str = include_str!("data/units.json");

static BUILTIN_UNITS: LazyLock<Vec<UnitDefinition>> = LazyLock::new(|| {
    let file: UnitsFile =
        serde_json::from_str(UNITS_JSON).expect("units.json should be valid JSON");
    file.units
});

/// The built-in unit catalog.
pub fn builtin_units() -> &'static [UnitDefinition] {
    &BUILTIN_UNITS
}

/// Find a built-in unit by any of its forms, ignoring case.
pub fn find_builtin_unit(form: &str) -> Option<&'static UnitDefinition> {
    let form = form.trim().to_lowercase();
    if form.is_empty() {
        return None;
    }
    builtin_units()
        .iter()
        .find(|unit| unit.match_forms().any(|f| f.to_lowercase() == form))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_forms_are_unique() {
        let mut seen = HashSet::new();
        for unit in builtin_units() {
            for form in unit.match_forms() {
                assert!(
                    seen.insert(form.to_lowercase()),
                    "duplicate unit form: {}",
                    form
                );
            }
        }
    }

    #[test]
    fn test_find_builtin_unit() {
        let tbsp = find_builtin_unit("TBSP").unwrap();
        assert_eq!(tbsp.name, "tablespoon");
        assert_eq!(tbsp.property, UnitProperty::Volume);

        assert_eq!(find_builtin_unit("grams").unwrap().name, "gram");
        assert_eq!(find_builtin_unit("oz").unwrap().property, UnitProperty::Weight);
        assert!(find_builtin_unit("smidgen").is_none());
        assert!(find_builtin_unit("").is_none());
    }

    #[test]
    fn test_no_builtin_form_reads_as_a_temperature() {
        for unit in builtin_units() {
            for form in unit.match_forms() {
                assert!(
                    !form.eq_ignore_ascii_case("c") && !form.eq_ignore_ascii_case("f"),
                    "unit form {:?} collides with a temperature letter",
                    form
                );
            }
        }
    }

    #[test]
    fn test_match_forms_skip_empty() {
        let pinch = find_builtin_unit("pinch").unwrap();
        let forms: Vec<&str> = pinch.match_forms().collect();
        assert_eq!(forms, vec!["pinch", "pinches"]);
    }

    #[test]
    fn test_deserialize_without_optional_forms() {
        let unit: UnitDefinition =
            serde_json::from_str(r#"{"name": "handful", "property": "other"}"#).unwrap();
        assert_eq!(unit.abbreviation, "");
        assert_eq!(unit.match_forms().count(), 1);
    }
}
