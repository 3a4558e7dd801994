//! CLI command for annotation golden fixture management.
//!
//! Reruns the annotator on each fixture's `text` and rewrites `expected`.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use smartstep_core::{builtin_units, Annotator, RecipeCatalog, Segment, UnitDefinition};
use std::fs;
use std::path::{Path, PathBuf};

/// A golden test case for instruction annotation
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TestCase {
    text: String,
    #[serde(default, skip_serializing_if = "is_empty_recipe")]
    recipe: RecipeCatalog,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    units: Option<Vec<UnitDefinition>>,
    expected: Vec<ExpectedSegment>,
}

/// Expected segment, reduced to the fields worth diffing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ExpectedSegment {
    Text {
        text: String,
    },
    Entity {
        text: String,
        id: String,
    },
    Measurement {
        text: String,
        quantity: String,
        unit: String,
    },
    Temperature {
        text: String,
        quantity: String,
        unit: String,
    },
}

impl From<&Segment> for ExpectedSegment {
    fn from(segment: &Segment) -> Self {
        match segment {
            Segment::Text { text } => ExpectedSegment::Text { text: text.clone() },
            Segment::Entity(m) => ExpectedSegment::Entity {
                text: m.matched_text.clone(),
                id: m.entity.id().to_string(),
            },
            Segment::Measurement(m) => ExpectedSegment::Measurement {
                text: m.matched_text.clone(),
                quantity: m.quantity.clone(),
                unit: m.unit.name.clone(),
            },
            Segment::Temperature(t) => ExpectedSegment::Temperature {
                text: t.matched_text.clone(),
                quantity: t.quantity.clone(),
                unit: t.unit.letter().to_string(),
            },
        }
    }
}

fn is_empty_recipe(recipe: &RecipeCatalog) -> bool {
    recipe.ingredients.is_empty() && recipe.equipment.is_empty()
}

/// Default path to the fixtures directory
fn default_fixtures_dir() -> PathBuf {
    PathBuf::from("smartstep-core/tests/fixtures/annotation")
}

fn expected_for(case: &TestCase) -> Vec<ExpectedSegment> {
    let units = case.units.as_deref().unwrap_or(builtin_units());
    Annotator::new(&case.recipe.entities(), units)
        .annotate(&case.text)
        .iter()
        .map(ExpectedSegment::from)
        .collect()
}

/// Update all annotation fixtures to match current annotator output.
pub fn update_fixtures(fixtures_dir: Option<&Path>) -> Result<()> {
    let fixtures_dir = fixtures_dir
        .map(PathBuf::from)
        .unwrap_or_else(default_fixtures_dir);

    let mut updated = 0;
    let mut unchanged = 0;

    for entry in fs::read_dir(&fixtures_dir)
        .with_context(|| format!("Failed to read {}", fixtures_dir.display()))?
    {
        let path = entry?.path();
        if !path.extension().map(|e| e == "json").unwrap_or(false) {
            continue;
        }

        let content = fs::read_to_string(&path)?;
        let mut test_case: TestCase = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse {}", path.display()))?;

        let actual = expected_for(&test_case);
        if actual != test_case.expected {
            test_case.expected = actual;
            let json = serde_json::to_string_pretty(&test_case)?;
            fs::write(&path, json + "\n")?;
            tracing::info!(path = %path.display(), "updated fixture");
            updated += 1;
        } else {
            unchanged += 1;
        }
    }

    println!("Updated {} fixtures ({} unchanged)", updated, unchanged);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_for_fixture_case() {
        let case: TestCase = serde_json::from_str(
            r#"{
                "text": "Melt 2 tbsp butter",
                "recipe": { "ingredients": [{ "id": "i1", "name": "butter" }] },
                "expected": []
            }"#,
        )
        .unwrap();

        assert_eq!(
            expected_for(&case),
            vec![
                ExpectedSegment::Text {
                    text: "Melt ".to_string()
                },
                ExpectedSegment::Measurement {
                    text: "2 tbsp".to_string(),
                    quantity: "2".to_string(),
                    unit: "tablespoon".to_string(),
                },
                ExpectedSegment::Text {
                    text: " ".to_string()
                },
                ExpectedSegment::Entity {
                    text: "butter".to_string(),
                    id: "i1".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_serialization_keeps_explicit_empty_units() {
        let case: TestCase =
            serde_json::from_str(r#"{ "text": "x", "units": [], "expected": [] }"#).unwrap();
        let json = serde_json::to_string(&case).unwrap();
        assert_eq!(json, r#"{"text":"x","units":[],"expected":[]}"#);
    }
}
