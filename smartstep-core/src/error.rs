use thiserror::Error;

use crate::types::EntityKind;

/// Problems found in a recipe's catalogs.
///
/// Annotation never fails on these: unnamed entities are skipped and the
/// first of two clashing names wins. [`crate::catalog::validate_catalog`]
/// reports them so they can be fixed where the recipe is edited.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("{} {id} has no name and cannot be referenced", .kind.as_str())]
    UnnamedEntity { kind: EntityKind, id: String },

    #[error("{name:?} is used by both {first_id} and {second_id}")]
    DuplicateEntityName {
        name: String,
        first_id: String,
        second_id: String,
    },

    #[error("unit form {form:?} is shared by units {first:?} and {second:?}")]
    AmbiguousUnitForm {
        form: String,
        first: String,
        second: String,
    },

    #[error("unit form {form:?} of {unit:?} swallows temperatures such as \"180 {form}\"")]
    TemperatureLetterForm { form: String, unit: String },

    #[error("{name:?} contains a character reserved for annotation markup")]
    ReservedCharacter { name: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    InvalidValue { name: String, value: String },
}
