pub mod amount;
pub mod annotator;
pub mod cache;
pub mod catalog;
pub mod config;
pub mod error;
pub mod markup;
pub mod patterns;
pub mod resolve;
pub mod split;
pub mod types;

pub use annotator::{annotate, Annotator};
pub use cache::{AnnotatorCache, CacheStats};
pub use catalog::{catalog_fingerprint, validate_catalog, PreparedCatalog};
pub use config::AnnotatorConfig;
pub use error::{CatalogError, ConfigError};
pub use types::{
    Entity, EntityKind, EntityMention, Equipment, Ingredient, MeasurementMention, RecipeCatalog,
    Segment, TemperatureMention,
};
pub use unit_catalog::{builtin_units, TemperatureScale, UnitDefinition, UnitProperty};
