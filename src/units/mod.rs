//! Table-driven unit conversion
//!
//! Linear families convert through their base unit in two steps (value →
//! base → target); temperature is special-cased with pairwise formulas.
//! Linear results are rounded to 6 fractional digits, temperature to 2 —
//! an asymmetric but deliberate output contract.

pub mod tables;
pub mod temperature;

pub use temperature::TempUnit;

use crate::error::{OmnicalcError, Result};
use crate::types::round_dp;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitFamily {
    Length,
    Weight,
    Volume,
    Speed,
    Temperature,
}

impl UnitFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            UnitFamily::Length => "length",
            UnitFamily::Weight => "weight",
            UnitFamily::Volume => "volume",
            UnitFamily::Speed => "speed",
            UnitFamily::Temperature => "temperature",
        }
    }

    /// Parse from widget value (case-insensitive)
    pub fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "length" => Ok(UnitFamily::Length),
            "weight" => Ok(UnitFamily::Weight),
            "volume" => Ok(UnitFamily::Volume),
            "speed" => Ok(UnitFamily::Speed),
            "temperature" => Ok(UnitFamily::Temperature),
            other => Err(OmnicalcError::InvalidInput(format!(
                "Unknown unit family: {}",
                other
            ))),
        }
    }

    pub fn all() -> Vec<UnitFamily> {
        vec![
            UnitFamily::Length,
            UnitFamily::Weight,
            UnitFamily::Volume,
            UnitFamily::Speed,
            UnitFamily::Temperature,
        ]
    }

    /// Unit symbols in this family, for widget population
    pub fn units(&self) -> Vec<&'static str> {
        let table = match self {
            UnitFamily::Temperature => return vec!["C", "F", "K"],
            UnitFamily::Length => tables::length(),
            UnitFamily::Weight => tables::weight(),
            UnitFamily::Volume => tables::volume(),
            UnitFamily::Speed => tables::speed(),
        };
        let mut symbols: Vec<&'static str> = table.keys().copied().collect();
        symbols.sort_unstable();
        symbols
    }

    /// Pivot unit for two-step conversion; None for temperature
    pub fn base_unit(&self) -> Option<&'static str> {
        match self {
            UnitFamily::Length => Some("m"),
            UnitFamily::Weight => Some("kg"),
            UnitFamily::Volume => Some("l"),
            UnitFamily::Speed => Some("m/s"),
            UnitFamily::Temperature => None,
        }
    }

    /// Default from/to pair for a freshly rendered widget
    pub fn default_pair(&self) -> (&'static str, &'static str) {
        match self {
            UnitFamily::Length => ("m", "ft"),
            UnitFamily::Weight => ("kg", "lb"),
            UnitFamily::Volume => ("l", "ml"),
            UnitFamily::Speed => ("m/s", "km/h"),
            UnitFamily::Temperature => ("C", "F"),
        }
    }
}

impl fmt::Display for UnitFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Convert `value` from `from_unit` to `to_unit` within `family`
///
/// Linear families go through the base unit: `value * factor[from] /
/// factor[to]`, rounded to 6 digits. Temperature uses pairwise formulas,
/// rounded to 2 digits.
pub fn convert(family: UnitFamily, from_unit: &str, to_unit: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(OmnicalcError::InvalidValue(format!(
            "value must be a finite number, got: {}",
            value
        )));
    }

    let table = match family {
        UnitFamily::Temperature => {
            let from = TempUnit::from_symbol(from_unit)?;
            let to = TempUnit::from_symbol(to_unit)?;
            return Ok(round_dp(temperature::convert(from, to, value), 2));
        }
        UnitFamily::Length => tables::length(),
        UnitFamily::Weight => tables::weight(),
        UnitFamily::Volume => tables::volume(),
        UnitFamily::Speed => tables::speed(),
    };
    let from_factor = table
        .get(from_unit)
        .ok_or_else(|| OmnicalcError::UnknownUnit {
            family: family.as_str().to_string(),
            unit: from_unit.to_string(),
        })?;
    let to_factor = table.get(to_unit).ok_or_else(|| OmnicalcError::UnknownUnit {
        family: family.as_str().to_string(),
        unit: to_unit.to_string(),
    })?;

    // Two-step path: into the base unit, then out to the target.
    let in_base = value * from_factor;
    Ok(round_dp(in_base / to_factor, 6))
}
