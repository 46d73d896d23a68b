//! Recipe scaling module
//!
//! Rescales ingredient lists when the serving count changes.

pub mod scaler;

pub use scaler::{scale_ingredients, scale_ingredients_with_stats, ScaleStats};
