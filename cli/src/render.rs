//! Plain-text rendering of annotated instructions for the terminal.

use smartstep_core::markup::MarkKind;
use smartstep_core::{Segment, TemperatureScale};

/// Render segments inline, e.g.
/// `Add [measure: 2 cups (volume)] [ingredient: flour]`.
pub fn render_segments(segments: &[Segment]) -> String {
    segments.iter().map(render_segment).collect()
}

fn render_segment(segment: &Segment) -> String {
    match segment {
        Segment::Text { text } => text.clone(),
        Segment::Entity(m) => format!("[{}: {}]", m.kind.as_str(), m.matched_text),
        Segment::Measurement(m) => {
            format!("[measure: {} ({})]", m.matched_text, m.unit.property.as_str())
        }
        Segment::Temperature(t) => {
            let other = match t.unit {
                TemperatureScale::Celsius => TemperatureScale::Fahrenheit,
                _ => TemperatureScale::Celsius,
            };
            match t.label_in(other) {
                Some(converted) => format!("[temp: {} / {}]", t.label, converted),
                None => format!("[temp: {}]", t.label),
            }
        }
    }
}

/// Replace the private-use delimiters with printable brackets.
pub fn visible_markup(marked: &str) -> String {
    marked
        .chars()
        .map(|c| {
            if let Some(kind) = MarkKind::from_open(c) {
                return match kind {
                    MarkKind::Entity => "{{",
                    MarkKind::Measurement => "<<",
                    MarkKind::Temperature => "((",
                }
                .to_string();
            }
            if let Some(kind) = MarkKind::from_close(c) {
                return match kind {
                    MarkKind::Entity => "}}",
                    MarkKind::Measurement => ">>",
                    MarkKind::Temperature => "))",
                }
                .to_string();
            }
            c.to_string()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use smartstep_core::{annotate, builtin_units, Entity, Ingredient};

    fn flour() -> Entity {
        Entity::Ingredient(Ingredient {
            id: "i1".to_string(),
            name: Some("flour".to_string()),
            quantity: None,
            unit: None,
            substitutes: vec![],
            optional: false,
            notes: None,
        })
    }

    #[test]
    fn test_render_segments() {
        let segments = annotate(
            "Sift 1 1/2 cups flour, bake at 180 C",
            &[flour()],
            builtin_units(),
        );
        assert_eq!(
            render_segments(&segments),
            "Sift [measure: 1 1/2 cups (volume)] [ingredient: flour], \
             bake at [temp: 180°C / 356°F]"
        );
    }

    #[test]
    fn test_visible_markup() {
        let marked = format!(
            "add {}flour{} at {}400F{}",
            MarkKind::Entity.open(),
            MarkKind::Entity.close(),
            MarkKind::Temperature.open(),
            MarkKind::Temperature.close()
        );
        assert_eq!(visible_markup(&marked), "add {{flour}} at ((400F))");
    }
}
