//! Unit conversion functions
//!
//! Same-family conversion goes through the family's base unit. Weight/volume
//! conversion needs an ingredient density and lives on `ConversionEngine`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::density::DensityTable;
use super::format::format_quantity;
use super::units::{MassUnit, Unit, VolumeUnit, G_PER_KG, ML_PER_L};

/// Conversion errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Cannot convert {from} to {to} without a density; use weight/volume conversion")]
    FamilyMismatch { from: Unit, to: Unit },
}

/// An amount paired with its unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quantity {
    pub amount: f64,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(amount: f64, unit: Unit) -> Self {
        Self { amount, unit }
    }
}

/// A unit with a fixed factor into its family's base unit.
///
/// Only units of one family share an implementation, so `convert` cannot be
/// called with a gram on one side and a cup on the other.
pub trait LinearUnit: Copy + PartialEq {
    fn base_factor(&self) -> f64;
}

impl LinearUnit for MassUnit {
    fn base_factor(&self) -> f64 {
        self.grams_per_unit()
    }
}

impl LinearUnit for VolumeUnit {
    fn base_factor(&self) -> f64 {
        self.ml_per_unit()
    }
}

/// Convert between two units of the same family
pub fn convert<U: LinearUnit>(amount: f64, from: U, to: U) -> f64 {
    if from == to {
        return amount;
    }
    amount * from.base_factor() / to.base_factor()
}

/// Convert between units chosen at runtime.
///
/// Identity when the units match or either one is countable. Mass/volume
/// pairs are rejected; those need `ConversionEngine::convert_ingredient`.
pub fn convert_units(amount: f64, from: Unit, to: Unit) -> Result<f64, ConversionError> {
    match (from, to) {
        (Unit::Countable, _) | (_, Unit::Countable) => Ok(amount),
        (Unit::Mass(a), Unit::Mass(b)) => Ok(convert(amount, a, b)),
        (Unit::Volume(a), Unit::Volume(b)) => Ok(convert(amount, a, b)),
        (Unit::Mass(_), Unit::Volume(_)) | (Unit::Volume(_), Unit::Mass(_)) => {
            Err(ConversionError::FamilyMismatch { from, to })
        }
    }
}

/// Re-express a quantity in the most readable metric unit of its family.
///
/// Mass becomes kg at 1000 g and above, otherwise g. Volume becomes L at
/// 1000 mL and above, otherwise mL. Countable quantities pass through.
/// Normalizing an already-normalized quantity returns it unchanged.
pub fn normalize(amount: f64, unit: Unit) -> Quantity {
    match unit {
        Unit::Mass(m) => {
            let grams = convert(amount, m, MassUnit::Gram);
            let target = if grams >= G_PER_KG {
                MassUnit::Kilogram
            } else {
                MassUnit::Gram
            };
            Quantity::new(convert(amount, m, target), Unit::Mass(target))
        }
        Unit::Volume(v) => {
            let ml = convert(amount, v, VolumeUnit::Milliliter);
            let target = if ml >= ML_PER_L {
                VolumeUnit::Liter
            } else {
                VolumeUnit::Milliliter
            };
            Quantity::new(convert(amount, v, target), Unit::Volume(target))
        }
        Unit::Countable => Quantity::new(amount, unit),
    }
}

/// Conversion engine carrying the ingredient density context
#[derive(Debug, Clone, Default)]
pub struct ConversionEngine {
    densities: DensityTable,
}

impl ConversionEngine {
    pub fn new(densities: DensityTable) -> Self {
        Self { densities }
    }

    pub fn densities(&self) -> &DensityTable {
        &self.densities
    }

    /// Grams to milliliters using the ingredient's density (1.0 if unknown)
    pub fn weight_to_volume(&self, weight_grams: f64, ingredient: &str) -> f64 {
        weight_grams / self.densities.density(ingredient)
    }

    /// Milliliters to grams using the ingredient's density (1.0 if unknown)
    pub fn volume_to_weight(&self, volume_ml: f64, ingredient: &str) -> f64 {
        volume_ml * self.densities.density(ingredient)
    }

    /// Same-family conversion; see [`convert_units`]
    pub fn convert(&self, amount: f64, from: Unit, to: Unit) -> Result<f64, ConversionError> {
        convert_units(amount, from, to)
    }

    pub fn normalize(&self, amount: f64, unit: Unit) -> Quantity {
        normalize(amount, unit)
    }

    pub fn format_quantity(&self, amount: f64) -> String {
        format_quantity(amount)
    }

    /// Convert an ingredient amount between any two units.
    ///
    /// Mass/volume pairs go through the base units and the ingredient's
    /// density. Countable stays an identity.
    pub fn convert_ingredient(&self, amount: f64, from: Unit, to: Unit, ingredient: &str) -> f64 {
        match (from, to) {
            (Unit::Mass(m), Unit::Volume(v)) => {
                let grams = convert(amount, m, MassUnit::Gram);
                let ml = self.weight_to_volume(grams, ingredient);
                convert(ml, VolumeUnit::Milliliter, v)
            }
            (Unit::Volume(v), Unit::Mass(m)) => {
                let ml = convert(amount, v, VolumeUnit::Milliliter);
                let grams = self.volume_to_weight(ml, ingredient);
                convert(grams, MassUnit::Gram, m)
            }
            (Unit::Mass(a), Unit::Mass(b)) => convert(amount, a, b),
            (Unit::Volume(a), Unit::Volume(b)) => convert(amount, a, b),
            (Unit::Countable, _) | (_, Unit::Countable) => amount,
        }
    }
}
