use serde::{Deserialize, Serialize};
use unit_catalog::{TemperatureScale, UnitDefinition};

use crate::amount::parse_amount;

/// An ingredient used by a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub id: String,
    /// Display name. Ingredients without a name are never matched.
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<UnitDefinition>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub substitutes: Vec<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A piece of equipment used by a recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: String,
    pub name: Option<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Ingredient,
    Equipment,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Ingredient => "ingredient",
            EntityKind::Equipment => "equipment",
        }
    }
}

/// Something a recipe instruction can mention by name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Entity {
    Ingredient(Ingredient),
    Equipment(Equipment),
}

impl Entity {
    pub fn kind(&self) -> EntityKind {
        match self {
            Entity::Ingredient(_) => EntityKind::Ingredient,
            Entity::Equipment(_) => EntityKind::Equipment,
        }
    }

    pub fn id(&self) -> &str {
        match self {
            Entity::Ingredient(i) => &i.id,
            Entity::Equipment(e) => &e.id,
        }
    }

    pub fn name(&self) -> Option<&str> {
        match self {
            Entity::Ingredient(i) => i.name.as_deref(),
            Entity::Equipment(e) => e.name.as_deref(),
        }
    }
}

impl From<Ingredient> for Entity {
    fn from(ingredient: Ingredient) -> Self {
        Entity::Ingredient(ingredient)
    }
}

impl From<Equipment> for Entity {
    fn from(equipment: Equipment) -> Self {
        Entity::Equipment(equipment)
    }
}

/// The ingredients and equipment of one recipe, as stored alongside it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RecipeCatalog {
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub equipment: Vec<Equipment>,
}

impl RecipeCatalog {
    /// All entities, ingredients first, in their stored order.
    pub fn entities(&self) -> Vec<Entity> {
        self.ingredients
            .iter()
            .cloned()
            .map(Entity::from)
            .chain(self.equipment.iter().cloned().map(Entity::from))
            .collect()
    }
}

/// A resolved mention of a recipe entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntityMention {
    pub kind: EntityKind,
    pub entity: Entity,
    /// The text as written in the instruction, which may differ in case from
    /// the entity's name.
    pub matched_text: String,
}

/// A quantity followed by a known unit, e.g. "1 1/2 cups".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasurementMention {
    pub matched_text: String,
    pub quantity: String,
    pub unit: UnitDefinition,
}

impl MeasurementMention {
    /// The quantity as a number, if it parses.
    pub fn amount(&self) -> Option<f64> {
        parse_amount(&self.quantity)
    }
}

/// A temperature setting, e.g. "400F" or "180 °C".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemperatureMention {
    pub matched_text: String,
    pub quantity: String,
    pub unit: TemperatureScale,
    /// Normalized display form, e.g. "400°F".
    pub label: String,
}

impl TemperatureMention {
    pub fn value(&self) -> Option<f64> {
        parse_amount(&self.quantity)
    }

    /// The temperature expressed in another scale, formatted for display.
    pub fn label_in(&self, scale: TemperatureScale) -> Option<String> {
        let value = self.value()?;
        Some(scale.format(self.unit.convert(value, scale)))
    }
}

/// One unit of annotated output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Segment {
    Text { text: String },
    Entity(EntityMention),
    Measurement(MeasurementMention),
    Temperature(TemperatureMention),
}

impl Segment {
    pub fn text(text: impl Into<String>) -> Self {
        Segment::Text { text: text.into() }
    }

    /// The instruction text this segment covers. Concatenating the display
    /// text of every segment reproduces the instruction.
    pub fn display_text(&self) -> &str {
        match self {
            Segment::Text { text } => text,
            Segment::Entity(m) => &m.matched_text,
            Segment::Measurement(m) => &m.matched_text,
            Segment::Temperature(m) => &m.matched_text,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, Segment::Text { .. })
    }
}
