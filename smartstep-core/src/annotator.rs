//! Instruction annotation.
//!
//! Runs the pipeline for one instruction: mark entities, then measurements,
//! then temperatures; split the marked text; resolve each fragment.

use unit_catalog::UnitDefinition;

use crate::catalog::PreparedCatalog;
use crate::config::AnnotatorConfig;
use crate::markup::{self, MarkKind};
use crate::patterns::{temperature_pattern, CompiledPatterns};
use crate::resolve::resolve_fragment;
use crate::split::split_marked;
use crate::types::{Entity, Segment};

/// A prepared catalog with its compiled patterns.
///
/// Building one compiles the entity and unit alternations, so reuse it for
/// every instruction of a recipe (or go through [`crate::AnnotatorCache`]).
#[derive(Debug, Clone)]
pub struct Annotator {
    catalog: PreparedCatalog,
    patterns: CompiledPatterns,
    mark_temperatures: bool,
}

impl Annotator {
    pub fn new(entities: &[Entity], units: &[UnitDefinition]) -> Self {
        Self::with_config(entities, units, &AnnotatorConfig::default())
    }

    pub fn with_config(
        entities: &[Entity],
        units: &[UnitDefinition],
        config: &AnnotatorConfig,
    ) -> Self {
        let catalog = PreparedCatalog::new(entities, units);
        let patterns = CompiledPatterns::new(&catalog);
        Self {
            catalog,
            patterns,
            mark_temperatures: config.mark_temperatures,
        }
    }

    pub fn catalog(&self) -> &PreparedCatalog {
        &self.catalog
    }

    /// The marked-up intermediate form of `text`.
    pub fn mark(&self, text: &str) -> String {
        let mut marked = text.to_string();

        if let Some(re) = &self.patterns.entities {
            marked = markup::mark(&marked, re, MarkKind::Entity);
        }
        if let Some(re) = &self.patterns.measurements {
            marked = markup::mark(&marked, re, MarkKind::Measurement);
        }
        if self.mark_temperatures {
            marked = markup::mark(&marked, temperature_pattern(), MarkKind::Temperature);
        }

        marked
    }

    /// Annotate one instruction.
    ///
    /// Always returns a non-empty segment list whose display texts
    /// concatenate back to `text`. Empty text yields one empty text segment.
    pub fn annotate(&self, text: &str) -> Vec<Segment> {
        if text.is_empty() {
            return vec![Segment::text(text)];
        }

        if markup::contains_reserved(text) {
            tracing::warn!("Instruction contains reserved markup characters, not annotating");
            return vec![Segment::text(text)];
        }

        let marked = self.mark(text);
        let segments = split_marked(&marked)
            .into_iter()
            .map(|fragment| resolve_fragment(fragment, &self.catalog));

        coalesce_text(segments)
    }
}

/// Annotate one instruction against the given catalogs.
///
/// Prepares and compiles the catalogs on every call; prefer [`Annotator`]
/// when annotating several instructions.
pub fn annotate(text: &str, entities: &[Entity], units: &[UnitDefinition]) -> Vec<Segment> {
    Annotator::new(entities, units).annotate(text)
}

/// Merge runs of adjacent text segments, which appear when a tagged span
/// falls back to text.
fn coalesce_text(segments: impl Iterator<Item = Segment>) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::new();
    for segment in segments {
        if let (Some(Segment::Text { text: previous }), Segment::Text { text }) =
            (out.last_mut(), &segment)
        {
            previous.push_str(text);
            continue;
        }
        out.push(segment);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Ingredient;
    use unit_catalog::UnitProperty;

    fn ingredient(name: &str) -> Entity {
        Entity::Ingredient(Ingredient {
            id: name.to_string(),
            name: Some(name.to_string()),
            quantity: None,
            unit: None,
            substitutes: vec![],
            optional: false,
            notes: None,
        })
    }

    fn concat(segments: &[Segment]) -> String {
        segments.iter().map(Segment::display_text).collect()
    }

    #[test]
    fn test_mark_applies_stages_in_order() {
        let units = vec![UnitDefinition::new("cup", "", "cups", UnitProperty::Volume)];
        let annotator = Annotator::new(&[ingredient("flour")], &units);
        let marked = annotator.mark("sift 2 cups flour, bake at 350F");
        assert_eq!(
            marked,
            "sift \u{E002}2 cups\u{E003} \u{E000}flour\u{E001}, bake at \u{E004}350F\u{E005}"
        );
    }

    #[test]
    fn test_entity_shields_measurement() {
        // The measurement pass must not see inside an already tagged name.
        let units = vec![UnitDefinition::new("cup", "", "cups", UnitProperty::Other)];
        let annotator = Annotator::new(&[ingredient("2 cup blend")], &units);
        let segments = annotator.annotate("stir in the 2 cup blend");
        assert_eq!(segments.len(), 2);
        assert!(matches!(segments[1], Segment::Entity(_)));
    }

    #[test]
    fn test_temperatures_can_be_disabled() {
        let config = AnnotatorConfig {
            mark_temperatures: false,
            ..AnnotatorConfig::default()
        };
        let annotator = Annotator::with_config(&[], &[], &config);
        assert_eq!(
            annotator.annotate("bake at 400F"),
            vec![Segment::text("bake at 400F")]
        );
    }

    #[test]
    fn test_reserved_characters_are_not_annotated() {
        let annotator = Annotator::new(&[ingredient("flour")], &[]);
        let text = "add flour \u{E001}";
        assert_eq!(annotator.annotate(text), vec![Segment::text(text)]);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(
            annotate("", &[ingredient("flour")], &[]),
            vec![Segment::text("")]
        );
    }

    #[test]
    fn test_coalesces_fallback_text() {
        let segments = coalesce_text(
            vec![
                Segment::text("add "),
                Segment::text("3 pints"),
                Segment::text(" of stock"),
            ]
            .into_iter(),
        );
        assert_eq!(segments, vec![Segment::text("add 3 pints of stock")]);
    }

    #[test]
    fn test_round_trip_mixed_instruction() {
        let units = unit_catalog::builtin_units();
        let entities = vec![ingredient("butter"), ingredient("brown sugar")];
        let text = "Cream 1/2 cup butter with 3/4 cup Brown Sugar, then bake at 175 °C.";
        let segments = annotate(text, &entities, units);
        assert_eq!(concat(&segments), text);
        assert_eq!(segments.iter().filter(|s| !s.is_text()).count(), 5);
    }
}
