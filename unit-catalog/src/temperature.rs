//! Temperature scales.
//!
//! Instructions only ever mention Celsius or Fahrenheit, but a reader may
//! want the setting shown in any of the four scales, so conversions go
//! through Kelvin.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemperatureScale {
    #[serde(rename = "C")]
    Celsius,
    #[serde(rename = "F")]
    Fahrenheit,
    #[serde(rename = "K")]
    Kelvin,
    #[serde(rename = "R")]
    Rankine,
}

impl TemperatureScale {
    pub const ALL: &'static [TemperatureScale] = &[
        TemperatureScale::Celsius,
        TemperatureScale::Fahrenheit,
        TemperatureScale::Kelvin,
        TemperatureScale::Rankine,
    ];

    /// Parse a scale from its single-letter code, ignoring case.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'C' => Some(TemperatureScale::Celsius),
            'F' => Some(TemperatureScale::Fahrenheit),
            'K' => Some(TemperatureScale::Kelvin),
            'R' => Some(TemperatureScale::Rankine),
            _ => None,
        }
    }

    pub fn letter(&self) -> char {
        match self {
            TemperatureScale::Celsius => 'C',
            TemperatureScale::Fahrenheit => 'F',
            TemperatureScale::Kelvin => 'K',
            TemperatureScale::Rankine => 'R',
        }
    }

    fn to_kelvin(self, value: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => value + 273.15,
            TemperatureScale::Fahrenheit => (value + 459.67) * 5.0 / 9.0,
            TemperatureScale::Kelvin => value,
            TemperatureScale::Rankine => value * 5.0 / 9.0,
        }
    }

    fn from_kelvin(self, kelvin: f64) -> f64 {
        match self {
            TemperatureScale::Celsius => kelvin - 273.15,
            TemperatureScale::Fahrenheit => kelvin * 9.0 / 5.0 - 459.67,
            TemperatureScale::Kelvin => kelvin,
            TemperatureScale::Rankine => kelvin * 9.0 / 5.0,
        }
    }

    /// Convert a value in this scale to `to`.
    pub fn convert(self, value: f64, to: TemperatureScale) -> f64 {
        if self == to {
            return value;
        }
        to.from_kelvin(self.to_kelvin(value))
    }

    /// Format a value in this scale, e.g. "180°C" or "453.15K".
    ///
    /// Values are rounded to two decimal places with trailing zeros dropped.
    pub fn format(&self, value: f64) -> String {
        let rounded = (value * 100.0).round() / 100.0;
        let mut number = format!("{:.2}", rounded);
        while number.ends_with('0') {
            number.pop();
        }
        if number.ends_with('.') {
            number.pop();
        }
        if number == "-0" {
            number = "0".to_string();
        }

        match self {
            TemperatureScale::Kelvin => format!("{}K", number),
            _ => format!("{}°{}", number, self.letter()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_letter() {
        assert_eq!(TemperatureScale::from_letter('c'), Some(TemperatureScale::Celsius));
        assert_eq!(TemperatureScale::from_letter('F'), Some(TemperatureScale::Fahrenheit));
        assert_eq!(TemperatureScale::from_letter('k'), Some(TemperatureScale::Kelvin));
        assert_eq!(TemperatureScale::from_letter('R'), Some(TemperatureScale::Rankine));
        assert_eq!(TemperatureScale::from_letter('X'), None);
    }

    #[test]
    fn test_convert_oven_settings() {
        let f = TemperatureScale::Celsius.convert(180.0, TemperatureScale::Fahrenheit);
        assert!((f - 356.0).abs() < 1e-9);

        let c = TemperatureScale::Fahrenheit.convert(400.0, TemperatureScale::Celsius);
        assert_eq!(TemperatureScale::Celsius.format(c), "204.44°C");

        let k = TemperatureScale::Celsius.convert(0.0, TemperatureScale::Kelvin);
        assert_eq!(TemperatureScale::Kelvin.format(k), "273.15K");

        let r = TemperatureScale::Fahrenheit.convert(32.0, TemperatureScale::Rankine);
        assert_eq!(TemperatureScale::Rankine.format(r), "491.67°R");
    }

    #[test]
    fn test_convert_same_scale_is_identity() {
        for scale in TemperatureScale::ALL {
            assert_eq!(scale.convert(123.4, *scale), 123.4);
        }
    }

    #[test]
    fn test_format_trims_zeros() {
        assert_eq!(TemperatureScale::Fahrenheit.format(400.0), "400°F");
        assert_eq!(TemperatureScale::Celsius.format(62.5), "62.5°C");
        assert_eq!(TemperatureScale::Celsius.format(-0.001), "0°C");
    }

    #[test]
    fn test_serde_uses_letter() {
        let json = serde_json::to_string(&TemperatureScale::Fahrenheit).unwrap();
        assert_eq!(json, "\"F\"");
        let scale: TemperatureScale = serde_json::from_str("\"C\"").unwrap();
        assert_eq!(scale, TemperatureScale::Celsius);
    }
}
