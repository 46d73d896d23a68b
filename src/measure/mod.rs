//! Measurement module
//!
//! Unit registry, unit and density-aware conversions, and quantity formatting.

pub mod converter;
pub mod density;
pub mod format;
pub mod units;

pub use converter::{
    convert, convert_units, normalize, ConversionEngine, ConversionError, LinearUnit, Quantity,
};
pub use density::{DensityError, DensityTable, DEFAULT_DENSITY};
pub use format::{format_quantity, round_for_display};
pub use units::{MassUnit, ParseUnitError, Unit, UnitFamily, VolumeUnit};
