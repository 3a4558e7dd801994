//! Object resolution: turning marked fragments back into typed segments.
//!
//! Nothing here fails. A tagged span that cannot be resolved becomes plain
//! text, which only costs the reader a tooltip.

use unit_catalog::TemperatureScale;

use crate::catalog::PreparedCatalog;
use crate::markup::MarkKind;
use crate::types::{EntityMention, MeasurementMention, Segment, TemperatureMention};

/// Resolve one fragment produced by [`crate::split::split_marked`].
pub fn resolve_fragment(fragment: &str, catalog: &PreparedCatalog) -> Segment {
    let Some((kind, inner)) = strip_tag(fragment) else {
        return Segment::text(fragment);
    };

    let resolved = match kind {
        MarkKind::Entity => resolve_entity(inner, catalog),
        MarkKind::Measurement => resolve_measurement(inner, catalog),
        MarkKind::Temperature => resolve_temperature(inner),
    };

    resolved.unwrap_or_else(|| {
        tracing::debug!("Could not resolve {:?} span {:?}, keeping as text", kind, inner);
        Segment::text(inner)
    })
}

/// Split a tagged fragment into its kind and the text between delimiters.
fn strip_tag(fragment: &str) -> Option<(MarkKind, &str)> {
    let mut chars = fragment.chars();
    let kind = MarkKind::from_open(chars.next()?)?;
    let inner = chars.as_str().strip_suffix(kind.close())?;
    Some((kind, inner))
}

fn resolve_entity(inner: &str, catalog: &PreparedCatalog) -> Option<Segment> {
    let entity = catalog.entity(inner)?;
    Some(Segment::Entity(EntityMention {
        kind: entity.kind(),
        entity: entity.clone(),
        matched_text: inner.to_string(),
    }))
}

/// The quantity runs up to the first letter; the rest is the unit.
fn resolve_measurement(inner: &str, catalog: &PreparedCatalog) -> Option<Segment> {
    let boundary = inner.find(char::is_alphabetic)?;
    let quantity = inner[..boundary].trim();
    let unit_text = inner[boundary..].trim();
    if quantity.is_empty() || unit_text.is_empty() {
        return None;
    }

    let unit = catalog.unit(unit_text)?;
    Some(Segment::Measurement(MeasurementMention {
        matched_text: inner.to_string(),
        quantity: quantity.to_string(),
        unit: unit.clone(),
    }))
}

/// The number is the leading run of digits; the scale is the final letter.
fn resolve_temperature(inner: &str) -> Option<Segment> {
    let unit = TemperatureScale::from_letter(inner.chars().last()?)?;

    let end = inner
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(inner.len());
    let quantity = &inner[..end];
    if quantity.is_empty() {
        return None;
    }

    Some(Segment::Temperature(TemperatureMention {
        matched_text: inner.to_string(),
        quantity: quantity.to_string(),
        unit,
        label: format!("{}°{}", quantity, unit.letter()),
    }))
}
