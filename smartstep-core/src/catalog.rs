//! Catalog preparation.
//!
//! Turns a recipe's entities and the unit catalog into the lookup maps and
//! match lists used by the rest of the pipeline. Entries that cannot be
//! matched (no name, blank name) are skipped here rather than reported;
//! [`validate_catalog`] is the reporting counterpart.

use std::cmp::Reverse;
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use sha2::{Digest, Sha256};
use unit_catalog::UnitDefinition;

use crate::error::CatalogError;
use crate::markup::contains_reserved;
use crate::types::Entity;

/// Lookup key for names and unit forms: lowercase with whitespace runs
/// collapsed to a single space.
pub fn normalize_key(s: &str) -> String {
    s.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Lookup structures built from one recipe's entities and one unit catalog.
#[derive(Debug, Clone, Default)]
pub struct PreparedCatalog {
    entities: HashMap<String, Entity>,
    /// Matchable names, most words first.
    entity_names: Vec<String>,
    units: HashMap<String, UnitDefinition>,
    unit_forms: Vec<String>,
}

impl PreparedCatalog {
    /// Unit forms that differ only in case share one lookup key; only the
    /// first of them is matched.
    pub fn new(entities: &[Entity], units: &[UnitDefinition]) -> Self {
        let mut entity_map = HashMap::new();
        let mut entity_names = Vec::new();
        let mut skipped = 0usize;

        for entity in entities {
            let Some(name) = matchable_name(entity) else {
                skipped += 1;
                continue;
            };
            if let Entry::Vacant(slot) = entity_map.entry(normalize_key(name)) {
                slot.insert(entity.clone());
                entity_names.push(name.to_string());
            }
        }

        // Stable sort keeps the original order among names of equal length.
        entity_names.sort_by_key(|name| Reverse(name.split_whitespace().count()));

        let mut unit_map = HashMap::new();
        let mut unit_forms = Vec::new();
        for unit in units {
            for form in unit.match_forms() {
                if contains_reserved(form) {
                    continue;
                }
                if let Entry::Vacant(slot) = unit_map.entry(normalize_key(form)) {
                    slot.insert(unit.clone());
                    unit_forms.push(form.to_string());
                }
            }
        }

        tracing::debug!(
            "Prepared catalog: {} entity names ({} skipped), {} unit forms",
            entity_names.len(),
            skipped,
            unit_forms.len()
        );

        Self {
            entities: entity_map,
            entity_names,
            units: unit_map,
            unit_forms,
        }
    }

    /// Look up the entity for a matched name, ignoring case and spacing.
    pub fn entity(&self, matched: &str) -> Option<&Entity> {
        self.entities.get(&normalize_key(matched))
    }

    /// Look up the unit for a matched unit form, ignoring case and spacing.
    pub fn unit(&self, form: &str) -> Option<&UnitDefinition> {
        self.units.get(&normalize_key(form))
    }

    pub fn entity_names(&self) -> &[String] {
        &self.entity_names
    }

    pub fn unit_forms(&self) -> &[String] {
        &self.unit_forms
    }
}

fn matchable_name(entity: &Entity) -> Option<&str> {
    let name = entity.name()?.trim();
    if name.is_empty() || contains_reserved(name) {
        return None;
    }
    Some(name)
}

/// Report everything in the catalogs that annotation silently works around.
pub fn validate_catalog(entities: &[Entity], units: &[UnitDefinition]) -> Vec<CatalogError> {
    let mut errors = Vec::new();

    let mut seen_names: HashMap<String, &str> = HashMap::new();
    for entity in entities {
        let name = match entity.name().map(str::trim) {
            Some(name) if !name.is_empty() => name,
            _ => {
                errors.push(CatalogError::UnnamedEntity {
                    kind: entity.kind(),
                    id: entity.id().to_string(),
                });
                continue;
            }
        };

        if contains_reserved(name) {
            errors.push(CatalogError::ReservedCharacter {
                name: name.to_string(),
            });
        }

        match seen_names.entry(normalize_key(name)) {
            Entry::Occupied(first) => errors.push(CatalogError::DuplicateEntityName {
                name: name.to_string(),
                first_id: first.get().to_string(),
                second_id: entity.id().to_string(),
            }),
            Entry::Vacant(slot) => {
                slot.insert(entity.id());
            }
        }
    }

    let mut seen_forms: HashMap<String, &str> = HashMap::new();
    for unit in units {
        let mut own_forms = Vec::new();
        for form in unit.match_forms() {
            if contains_reserved(form) {
                errors.push(CatalogError::ReservedCharacter {
                    name: form.to_string(),
                });
                continue;
            }

            let key = normalize_key(form);
            // A unit whose plural equals its name is not ambiguous.
            if own_forms.contains(&key) {
                continue;
            }
            own_forms.push(key.clone());

            if key == "c" || key == "f" {
                errors.push(CatalogError::TemperatureLetterForm {
                    form: form.to_string(),
                    unit: unit.name.clone(),
                });
            }

            match seen_forms.entry(key) {
                Entry::Occupied(first) => errors.push(CatalogError::AmbiguousUnitForm {
                    form: form.to_string(),
                    first: first.get().to_string(),
                    second: unit.name.clone(),
                }),
                Entry::Vacant(slot) => {
                    slot.insert(unit.name.as_str());
                }
            }
        }
    }

    errors
}

/// Stable identifier for a pair of catalogs, used to key prepared patterns.
pub fn catalog_fingerprint(entities: &[Entity], units: &[UnitDefinition]) -> String {
    let input = serde_json::to_string(&(entities, units)).unwrap_or_default();
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    format!("{:x}", hasher.finalize())
}
