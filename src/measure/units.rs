//! Unit types and conversion constants
//!
//! Provides the supported measurement units, their families, and the
//! canonical factors into each family's base unit (grams, milliliters).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Volume Conversion Constants (to milliliters)
// ============================================================================

/// Milliliters per liter
pub const ML_PER_L: f64 = 1000.0;
/// Milliliters per teaspoon (metric)
pub const ML_PER_TSP: f64 = 5.0;
/// Milliliters per tablespoon (metric)
pub const ML_PER_TBSP: f64 = 15.0;
/// Milliliters per cup (metric)
pub const ML_PER_CUP: f64 = 250.0;

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;

/// Error returned when a unit symbol is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseUnitError {
    #[error("Unknown unit: '{0}'")]
    Unknown(String),
}

/// Dimensional family of a unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitFamily {
    /// Weight units, base unit gram
    Mass,
    /// Volume units, base unit milliliter
    Volume,
    /// Dimensionless counts ("3 eggs"); never converted
    Countable,
}

impl UnitFamily {
    /// Canonical base unit symbol, if the family has one
    pub fn base_symbol(&self) -> Option<&'static str> {
        match self {
            UnitFamily::Mass => Some("g"),
            UnitFamily::Volume => Some("mL"),
            UnitFamily::Countable => None,
        }
    }
}

/// Mass units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MassUnit {
    Gram,
    Kilogram,
}

impl MassUnit {
    /// Conversion factor to grams
    pub fn grams_per_unit(&self) -> f64 {
        match self {
            MassUnit::Gram => 1.0,
            MassUnit::Kilogram => G_PER_KG,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            MassUnit::Gram => "g",
            MassUnit::Kilogram => "kg",
        }
    }
}

/// Volume units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VolumeUnit {
    Milliliter,
    Liter,
    Teaspoon,
    Tablespoon,
    Cup,
}

impl VolumeUnit {
    /// Conversion factor to milliliters
    pub fn ml_per_unit(&self) -> f64 {
        match self {
            VolumeUnit::Milliliter => 1.0,
            VolumeUnit::Liter => ML_PER_L,
            VolumeUnit::Teaspoon => ML_PER_TSP,
            VolumeUnit::Tablespoon => ML_PER_TBSP,
            VolumeUnit::Cup => ML_PER_CUP,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            VolumeUnit::Milliliter => "mL",
            VolumeUnit::Liter => "L",
            VolumeUnit::Teaspoon => "tsp",
            VolumeUnit::Tablespoon => "tbsp",
            VolumeUnit::Cup => "cup",
        }
    }
}

/// A supported measurement unit, tagged with its family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Unit {
    Mass(MassUnit),
    Volume(VolumeUnit),
    /// The "n" unit: counted items, exempt from conversion
    Countable,
}

impl Unit {
    pub const GRAM: Unit = Unit::Mass(MassUnit::Gram);
    pub const KILOGRAM: Unit = Unit::Mass(MassUnit::Kilogram);
    pub const MILLILITER: Unit = Unit::Volume(VolumeUnit::Milliliter);
    pub const LITER: Unit = Unit::Volume(VolumeUnit::Liter);
    pub const TEASPOON: Unit = Unit::Volume(VolumeUnit::Teaspoon);
    pub const TABLESPOON: Unit = Unit::Volume(VolumeUnit::Tablespoon);
    pub const CUP: Unit = Unit::Volume(VolumeUnit::Cup);

    /// Every supported unit, grouped by family
    pub fn all() -> [Unit; 8] {
        [
            Unit::GRAM,
            Unit::KILOGRAM,
            Unit::MILLILITER,
            Unit::LITER,
            Unit::TEASPOON,
            Unit::TABLESPOON,
            Unit::CUP,
            Unit::Countable,
        ]
    }

    pub fn family(&self) -> UnitFamily {
        match self {
            Unit::Mass(_) => UnitFamily::Mass,
            Unit::Volume(_) => UnitFamily::Volume,
            Unit::Countable => UnitFamily::Countable,
        }
    }

    /// Factor into the family's base unit. `None` for the countable unit.
    pub fn factor(&self) -> Option<f64> {
        match self {
            Unit::Mass(m) => Some(m.grams_per_unit()),
            Unit::Volume(v) => Some(v.ml_per_unit()),
            Unit::Countable => None,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Unit::Mass(m) => m.symbol(),
            Unit::Volume(v) => v.symbol(),
            Unit::Countable => "n",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Unit {
    type Err = ParseUnitError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        let trimmed = lower.trim();

        match trimmed {
            "g" | "gram" | "grams" | "gramme" | "grammes" => Ok(Unit::GRAM),
            "kg" | "kilogram" | "kilograms" | "kilo" | "kilos" => Ok(Unit::KILOGRAM),
            "ml" | "milliliter" | "milliliters" | "millilitre" | "millilitres" => {
                Ok(Unit::MILLILITER)
            }
            "l" | "liter" | "liters" | "litre" | "litres" => Ok(Unit::LITER),
            "tsp" | "teaspoon" | "teaspoons" => Ok(Unit::TEASPOON),
            "tbsp" | "tablespoon" | "tablespoons" => Ok(Unit::TABLESPOON),
            "cup" | "cups" => Ok(Unit::CUP),
            "" | "n" | "count" | "each" | "piece" | "pieces" | "pc" | "pcs" => {
                Ok(Unit::Countable)
            }
            _ => Err(ParseUnitError::Unknown(s.trim().to_string())),
        }
    }
}

impl TryFrom<String> for Unit {
    type Error = ParseUnitError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.symbol().to_string()
    }
}

impl From<MassUnit> for Unit {
    fn from(unit: MassUnit) -> Self {
        Unit::Mass(unit)
    }
}

impl From<VolumeUnit> for Unit {
    fn from(unit: VolumeUnit) -> Self {
        Unit::Volume(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_is_total() {
        assert_eq!(Unit::GRAM.family(), UnitFamily::Mass);
        assert_eq!(Unit::KILOGRAM.family(), UnitFamily::Mass);
        assert_eq!(Unit::MILLILITER.family(), UnitFamily::Volume);
        assert_eq!(Unit::LITER.family(), UnitFamily::Volume);
        assert_eq!(Unit::TEASPOON.family(), UnitFamily::Volume);
        assert_eq!(Unit::TABLESPOON.family(), UnitFamily::Volume);
        assert_eq!(Unit::CUP.family(), UnitFamily::Volume);
        assert_eq!(Unit::Countable.family(), UnitFamily::Countable);
    }

    #[test]
    fn test_canonical_factors() {
        assert_eq!(Unit::GRAM.factor(), Some(1.0));
        assert_eq!(Unit::KILOGRAM.factor(), Some(1000.0));
        assert_eq!(Unit::MILLILITER.factor(), Some(1.0));
        assert_eq!(Unit::LITER.factor(), Some(1000.0));
        assert_eq!(Unit::TEASPOON.factor(), Some(5.0));
        assert_eq!(Unit::TABLESPOON.factor(), Some(15.0));
        assert_eq!(Unit::CUP.factor(), Some(250.0));
        assert_eq!(Unit::Countable.factor(), None);
    }

    #[test]
    fn test_parse_symbols_and_aliases() {
        assert_eq!("g".parse::<Unit>(), Ok(Unit::GRAM));
        assert_eq!("mL".parse::<Unit>(), Ok(Unit::MILLILITER));
        assert_eq!("L".parse::<Unit>(), Ok(Unit::LITER));
        assert_eq!(" Tablespoons ".parse::<Unit>(), Ok(Unit::TABLESPOON));
        assert_eq!("cups".parse::<Unit>(), Ok(Unit::CUP));
        assert_eq!("n".parse::<Unit>(), Ok(Unit::Countable));
        assert_eq!("".parse::<Unit>(), Ok(Unit::Countable));
    }

    #[test]
    fn test_parse_unknown() {
        assert_eq!(
            "scoop".parse::<Unit>(),
            Err(ParseUnitError::Unknown("scoop".to_string()))
        );
    }

    #[test]
    fn test_symbols_round_trip_through_parser() {
        for unit in Unit::all() {
            assert_eq!(unit.symbol().parse::<Unit>(), Ok(unit));
        }
    }

    #[test]
    fn test_serde_uses_symbols() {
        let json = serde_json::to_string(&Unit::TABLESPOON).unwrap();
        assert_eq!(json, "\"tbsp\"");

        let unit: Unit = serde_json::from_str("\"kg\"").unwrap();
        assert_eq!(unit, Unit::KILOGRAM);

        assert!(serde_json::from_str::<Unit>("\"furlong\"").is_err());
    }
}
