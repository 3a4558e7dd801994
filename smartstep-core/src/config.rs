//! Annotator configuration from environment variables.

use std::env;

use crate::error::ConfigError;

/// Default number of prepared catalogs kept by [`crate::AnnotatorCache`].
pub const DEFAULT_CACHE_CAPACITY: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnotatorConfig {
    /// Whether bare temperatures ("400F", "180 °C") are marked.
    pub mark_temperatures: bool,
    /// Maximum number of prepared catalogs kept in memory.
    pub cache_capacity: usize,
}

impl Default for AnnotatorConfig {
    fn default() -> Self {
        Self {
            mark_temperatures: true,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
        }
    }
}

impl AnnotatorConfig {
    /// Load configuration from environment variables.
    ///
    /// Optional:
    /// - `SMARTSTEP_MARK_TEMPERATURES`: "true"/"1" or "false"/"0" (default: true)
    /// - `SMARTSTEP_CACHE_CAPACITY`: prepared catalogs to keep (default: 64)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let mark_temperatures = match lookup("SMARTSTEP_MARK_TEMPERATURES") {
            Some(value) => parse_bool("SMARTSTEP_MARK_TEMPERATURES", &value)?,
            None => defaults.mark_temperatures,
        };

        let cache_capacity = match lookup("SMARTSTEP_CACHE_CAPACITY") {
            Some(value) => value.trim().parse::<usize>().map_err(|_| ConfigError::InvalidValue {
                name: "SMARTSTEP_CACHE_CAPACITY".to_string(),
                value: value.clone(),
            })?,
            None => defaults.cache_capacity,
        };

        Ok(Self {
            mark_temperatures,
            cache_capacity,
        })
    }
}

fn parse_bool(name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "1" => Ok(true),
        "false" | "0" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            name: name.to_string(),
            value: value.to_string(),
        }),
    }
}
