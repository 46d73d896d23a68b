//! Scaling MCP Tools
//!
//! Rescales an ingredient list to a new serving count.

use serde::Serialize;
use serde_json::Value;

use crate::models::{Ingredient, IngredientQuantity};
use crate::scaling::{self, ScaleStats};

use super::conversions::parse_unit;

/// Response for scale_ingredients
#[derive(Debug, Serialize)]
pub struct ScaleIngredientsResponse {
    pub original_servings: u32,
    pub target_servings: u32,
    pub ingredients: Vec<Ingredient>,
    pub stats: ScaleStats,
}

/// Build an ingredient from loosely-typed tool input
pub fn ingredient_from_parts(
    name: &str,
    quantity: &Value,
    unit: &str,
) -> Result<Ingredient, String> {
    let quantity = serde_json::from_value::<IngredientQuantity>(quantity.clone()).map_err(|_| {
        format!(
            "Quantity for '{}' must be a number or string, got {}",
            name, quantity
        )
    })?;

    Ok(Ingredient {
        name: name.to_string(),
        quantity,
        unit: parse_unit(unit)?,
    })
}

/// Scale ingredients from `original_servings` to `target_servings`
pub fn scale_ingredients(
    ingredients: &[Ingredient],
    original_servings: u32,
    target_servings: u32,
) -> Result<ScaleIngredientsResponse, String> {
    if target_servings < 1 {
        return Err("Target servings must be at least 1".to_string());
    }

    let (scaled, stats) =
        scaling::scale_ingredients_with_stats(ingredients, original_servings, target_servings);

    Ok(ScaleIngredientsResponse {
        original_servings,
        target_servings,
        ingredients: scaled,
        stats,
    })
}

/// Scale a JSON ingredient list, returning the scaled list as pretty JSON
pub fn scale_ingredients_json(
    input: &str,
    original_servings: u32,
    target_servings: u32,
) -> Result<(String, ScaleStats), String> {
    let ingredients: Vec<Ingredient> =
        serde_json::from_str(input).map_err(|e| format!("Invalid ingredient list: {}", e))?;

    let response = scale_ingredients(&ingredients, original_servings, target_servings)?;
    let json = serde_json::to_string_pretty(&response.ingredients)
        .map_err(|e| format!("Serialization error: {}", e))?;

    Ok((json, response.stats))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::Unit;
    use serde_json::json;

    #[test]
    fn test_ingredient_from_parts() {
        let flour = ingredient_from_parts("flour", &json!("200"), "g").unwrap();
        assert_eq!(flour, Ingredient::new("flour", "200", Unit::GRAM));

        let eggs = ingredient_from_parts("eggs", &json!(3), "n").unwrap();
        assert_eq!(eggs.quantity.amount(), Some(3.0));

        let salt = ingredient_from_parts("salt", &json!("to taste"), "").unwrap();
        assert_eq!(salt.unit, Unit::Countable);
        assert!(!salt.quantity.is_numeric());
    }

    #[test]
    fn test_ingredient_from_parts_rejects_bad_input() {
        assert!(ingredient_from_parts("flour", &json!(null), "g").is_err());
        assert!(ingredient_from_parts("flour", &json!([1]), "g").is_err());
        assert!(ingredient_from_parts("flour", &json!("1"), "bushel").is_err());
    }

    #[test]
    fn test_scale_tool_output_shape() {
        let ingredients = vec![
            Ingredient::new("flour", "200", Unit::GRAM),
            Ingredient::new("salt", "to taste", Unit::Countable),
        ];
        let resp = scale_ingredients(&ingredients, 4, 6).unwrap();

        let json = serde_json::to_value(&resp.ingredients).unwrap();
        assert_eq!(
            json,
            json!([
                {"name": "flour", "quantity": "300", "unit": "g"},
                {"name": "salt", "quantity": "to taste", "unit": "n"}
            ])
        );
        assert_eq!(resp.stats.scaled, 1);
    }

    #[test]
    fn test_zero_original_servings_returns_input_json() {
        let input = json!([
            {"name": "vanilla", "quantity": "1.25", "unit": "tsp"},
            {"name": "water", "quantity": "0.50", "unit": "L"},
            {"name": "yeast", "quantity": 0.004, "unit": "kg"},
            {"name": "eggs", "quantity": 2, "unit": "n"},
            {"name": "salt", "quantity": "to taste", "unit": "n"}
        ]);
        let ingredients: Vec<Ingredient> = serde_json::from_value(input.clone()).unwrap();

        let resp = scale_ingredients(&ingredients, 0, 4).unwrap();

        assert_eq!(serde_json::to_value(&resp.ingredients).unwrap(), input);
        assert_eq!(resp.stats.passed_through, 5);
    }

    #[test]
    fn test_scale_tool_rejects_zero_target() {
        let ingredients = vec![Ingredient::new("flour", "200", Unit::GRAM)];
        assert!(scale_ingredients(&ingredients, 4, 0).is_err());
    }

    #[test]
    fn test_scale_json_round_trip() {
        let input = r#"[
            {"name": "flour", "quantity": "200", "unit": "g"},
            {"name": "yeast", "quantity": 0.004, "unit": "kg"},
            {"name": "salt", "quantity": "to taste", "unit": "n"}
        ]"#;

        let (output, stats) = scale_ingredients_json(input, 4, 6).unwrap();
        let output: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(
            output,
            json!([
                {"name": "flour", "quantity": "300", "unit": "g"},
                {"name": "yeast", "quantity": "0.01", "unit": "kg"},
                {"name": "salt", "quantity": "to taste", "unit": "n"}
            ])
        );
        assert_eq!(stats.scaled, 2);
        assert_eq!(stats.passed_through, 1);
    }

    #[test]
    fn test_scale_json_zero_servings_keeps_input() {
        let input = r#"[{"name": "yeast", "quantity": 0.004, "unit": "kg"}]"#;
        let (output, _) = scale_ingredients_json(input, 0, 4).unwrap();
        let output: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(output, json!([{"name": "yeast", "quantity": 0.004, "unit": "kg"}]));
    }

    #[test]
    fn test_scale_json_rejects_bad_input() {
        assert!(scale_ingredients_json("not json", 4, 6).is_err());
        assert!(scale_ingredients_json("[]", 4, 0).is_err());
    }
}
