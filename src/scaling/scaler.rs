//! Serving-count scaling of ingredient lists
//!
//! Pure transform: the input list is never mutated and every returned
//! ingredient is a fresh value.

use serde::{Deserialize, Serialize};

use crate::measure::round_for_display;
use crate::models::{Ingredient, IngredientQuantity, ServingScale};

/// Statistics about a scaling pass.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleStats {
    /// Ingredients whose quantity was multiplied
    pub scaled: usize,
    /// Ingredients returned as-is (freeform quantity or no scale factor)
    pub passed_through: usize,
    /// `target / original`; absent when original servings was 0
    pub factor: Option<f64>,
}

/// Scale every numeric ingredient quantity from `original_servings` to
/// `target_servings`.
///
/// Freeform quantities ("to taste") pass through. With zero original
/// servings the list is returned unchanged.
pub fn scale_ingredients(
    ingredients: &[Ingredient],
    original_servings: u32,
    target_servings: u32,
) -> Vec<Ingredient> {
    scale_ingredients_with_stats(ingredients, original_servings, target_servings).0
}

/// Like [`scale_ingredients`], also reporting what was scaled.
pub fn scale_ingredients_with_stats(
    ingredients: &[Ingredient],
    original_servings: u32,
    target_servings: u32,
) -> (Vec<Ingredient>, ScaleStats) {
    let scale = ServingScale::new(original_servings, target_servings);

    let Some(factor) = scale.factor() else {
        tracing::debug!(
            "Original servings is 0; leaving {} ingredients unscaled",
            ingredients.len()
        );
        let stats = ScaleStats {
            passed_through: ingredients.len(),
            ..Default::default()
        };
        return (ingredients.to_vec(), stats);
    };

    let mut stats = ScaleStats {
        factor: Some(factor),
        ..Default::default()
    };

    let scaled: Vec<Ingredient> = ingredients
        .iter()
        .map(|ingredient| match ingredient.quantity.amount() {
            Some(amount) => {
                stats.scaled += 1;
                Ingredient {
                    quantity: IngredientQuantity::scaled(round_for_display(amount * factor)),
                    ..ingredient.clone()
                }
            }
            None => {
                stats.passed_through += 1;
                ingredient.clone()
            }
        })
        .collect();

    tracing::debug!(
        "Scaled {} ingredients by {} ({} passed through)",
        stats.scaled,
        factor,
        stats.passed_through
    );

    (scaled, stats)
}
