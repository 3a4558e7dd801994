//! Measurement units and temperature scales for recipe instructions.
//!
//! This crate provides the unit definitions the annotator matches against,
//! a built-in catalog of common cooking units, and conversions between the
//! four temperature scales that can appear in an oven setting.
//!
//! # Example
//!
//! ```
//! use unit_catalog::{find_builtin_unit, TemperatureScale, UnitProperty};
//!
//! let cup = find_builtin_unit("Cups").unwrap();
//! assert_eq!(cup.name, "cup");
//! assert_eq!(cup.property, UnitProperty::Volume);
//!
//! let fahrenheit = TemperatureScale::Celsius.convert(180.0, TemperatureScale::Fahrenheit);
//! assert_eq!(TemperatureScale::Fahrenheit.format(fahrenheit), "356°F");
//! ```

mod temperature;
mod units;

pub use temperature::TemperatureScale;
pub use units::{builtin_units, find_builtin_unit, UnitDefinition, UnitProperty};
