//! Temperature conversion
//!
//! Temperature has no linear base unit, so each of the six C/F/K pairs gets
//! its own formula; equal units are the identity.

use crate::error::{OmnicalcError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Temperature scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TempUnit {
    Celsius,
    Fahrenheit,
    Kelvin,
}

impl TempUnit {
    /// Parse from widget symbol (case-insensitive)
    pub fn from_symbol(symbol: &str) -> Result<Self> {
        match symbol.trim().to_uppercase().as_str() {
            "C" => Ok(TempUnit::Celsius),
            "F" => Ok(TempUnit::Fahrenheit),
            "K" => Ok(TempUnit::Kelvin),
            other => Err(OmnicalcError::UnknownUnit {
                family: "temperature".to_string(),
                unit: other.to_string(),
            }),
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            TempUnit::Celsius => "C",
            TempUnit::Fahrenheit => "F",
            TempUnit::Kelvin => "K",
        }
    }
}

impl fmt::Display for TempUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Convert a temperature reading between scales, unrounded
pub fn convert(from: TempUnit, to: TempUnit, value: f64) -> f64 {
    use TempUnit::{Celsius, Fahrenheit, Kelvin};

    match (from, to) {
        (Celsius, Fahrenheit) => value * 9.0 / 5.0 + 32.0,
        (Fahrenheit, Celsius) => (value - 32.0) * 5.0 / 9.0,
        (Celsius, Kelvin) => value + 273.15,
        (Kelvin, Celsius) => value - 273.15,
        (Fahrenheit, Kelvin) => (value - 32.0) * 5.0 / 9.0 + 273.15,
        (Kelvin, Fahrenheit) => (value - 273.15) * 9.0 / 5.0 + 32.0,
        _ => value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_from_symbol() {
        assert_eq!(TempUnit::from_symbol("C").unwrap(), TempUnit::Celsius);
        assert_eq!(TempUnit::from_symbol("f").unwrap(), TempUnit::Fahrenheit);
        assert_eq!(TempUnit::from_symbol(" k ").unwrap(), TempUnit::Kelvin);
        assert!(TempUnit::from_symbol("R").is_err());
    }

    #[test]
    fn test_fixed_points() {
        assert_relative_eq!(convert(TempUnit::Celsius, TempUnit::Fahrenheit, 0.0), 32.0);
        assert_relative_eq!(convert(TempUnit::Celsius, TempUnit::Kelvin, 0.0), 273.15);
        assert_relative_eq!(convert(TempUnit::Fahrenheit, TempUnit::Celsius, 32.0), 0.0);
        assert_relative_eq!(convert(TempUnit::Celsius, TempUnit::Fahrenheit, 100.0), 212.0);
    }

    #[test]
    fn test_fahrenheit_kelvin() {
        assert_relative_eq!(convert(TempUnit::Fahrenheit, TempUnit::Kelvin, 32.0), 273.15);
        assert_relative_eq!(convert(TempUnit::Kelvin, TempUnit::Fahrenheit, 273.15), 32.0);
    }

    #[test]
    fn test_identity() {
        for unit in [TempUnit::Celsius, TempUnit::Fahrenheit, TempUnit::Kelvin] {
            assert_eq!(convert(unit, unit, 42.5), 42.5);
        }
    }

    #[test]
    fn test_negative_readings_allowed() {
        assert_relative_eq!(convert(TempUnit::Celsius, TempUnit::Fahrenheit, -40.0), -40.0);
    }
}
