//! Data models
//!
//! Plain data handed in by the surrounding recipe application.

mod ingredient;
mod serving;

pub use ingredient::{EnteredAmount, Ingredient, IngredientQuantity};
pub use serving::ServingScale;
