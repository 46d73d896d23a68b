//! Ingredient model
//!
//! Represents a recipe ingredient as handed over by the surrounding
//! application: a name, a quantity that may be user-entered text, and a unit.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::measure::{format_quantity, Unit};

/// A quantity exactly as the caller supplied it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EnteredAmount {
    Number(serde_json::Number),
    Text(String),
}

/// An ingredient's quantity.
///
/// User-entered text that reads as a non-negative number becomes `Numeric`;
/// anything else ("to taste", "a pinch") is kept verbatim as `Freeform`.
/// `entered` holds the caller's original form and is `None` once the value
/// has been computed (scaled).
#[derive(Debug, Clone, PartialEq)]
pub enum IngredientQuantity {
    Numeric {
        value: f64,
        entered: Option<EnteredAmount>,
    },
    Freeform(String),
}

fn is_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

impl IngredientQuantity {
    /// Classify quantity text
    pub fn parse(text: &str) -> Self {
        match text.trim().parse::<f64>() {
            Ok(value) if is_amount(value) => IngredientQuantity::Numeric {
                value,
                entered: Some(EnteredAmount::Text(text.to_string())),
            },
            _ => IngredientQuantity::Freeform(text.to_string()),
        }
    }

    /// A computed amount, rendered with `format_quantity` on output
    pub fn scaled(value: f64) -> Self {
        IngredientQuantity::Numeric {
            value,
            entered: None,
        }
    }

    /// The numeric amount, if there is one
    pub fn amount(&self) -> Option<f64> {
        match self {
            IngredientQuantity::Numeric { value, .. } => Some(*value),
            IngredientQuantity::Freeform(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        matches!(self, IngredientQuantity::Numeric { .. })
    }
}

impl From<f64> for IngredientQuantity {
    fn from(value: f64) -> Self {
        if is_amount(value) {
            IngredientQuantity::Numeric {
                value,
                entered: serde_json::Number::from_f64(value).map(EnteredAmount::Number),
            }
        } else {
            IngredientQuantity::Freeform(value.to_string())
        }
    }
}

impl From<&str> for IngredientQuantity {
    fn from(text: &str) -> Self {
        IngredientQuantity::parse(text)
    }
}

impl fmt::Display for IngredientQuantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IngredientQuantity::Numeric { value, .. } => f.write_str(&format_quantity(*value)),
            IngredientQuantity::Freeform(text) => f.write_str(text),
        }
    }
}

// Untouched quantities go out as they came in; computed ones as formatted strings
impl Serialize for IngredientQuantity {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            IngredientQuantity::Numeric {
                entered: Some(entered),
                ..
            } => entered.serialize(serializer),
            IngredientQuantity::Numeric { value, entered: None } => {
                serializer.serialize_str(&format_quantity(*value))
            }
            IngredientQuantity::Freeform(text) => serializer.serialize_str(text),
        }
    }
}

impl<'de> Deserialize<'de> for IngredientQuantity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match EnteredAmount::deserialize(deserializer)? {
            EnteredAmount::Number(number) => match number.as_f64() {
                Some(value) if is_amount(value) => IngredientQuantity::Numeric {
                    value,
                    entered: Some(EnteredAmount::Number(number)),
                },
                _ => IngredientQuantity::Freeform(number.to_string()),
            },
            EnteredAmount::Text(text) => IngredientQuantity::parse(&text),
        })
    }
}

/// A recipe ingredient
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: IngredientQuantity,
    pub unit: Unit,
}

impl Ingredient {
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<IngredientQuantity>,
        unit: Unit,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_numeric_text() {
        assert_eq!(IngredientQuantity::parse("200").amount(), Some(200.0));
        assert_eq!(IngredientQuantity::parse(" 1.5 ").amount(), Some(1.5));
    }

    #[test]
    fn test_parse_freeform_text() {
        assert_eq!(
            IngredientQuantity::parse("to taste"),
            IngredientQuantity::Freeform("to taste".to_string())
        );
        assert!(!IngredientQuantity::parse("").is_numeric());
        assert!(!IngredientQuantity::parse("-2").is_numeric());
        assert!(!IngredientQuantity::parse("NaN").is_numeric());
        assert!(!IngredientQuantity::parse("inf").is_numeric());
    }

    #[test]
    fn test_deserialize_string_or_number() {
        let json = r#"[
            {"name": "flour", "quantity": "200", "unit": "g"},
            {"name": "eggs", "quantity": 3, "unit": "n"},
            {"name": "salt", "quantity": "to taste", "unit": "n"}
        ]"#;
        let ingredients: Vec<Ingredient> = serde_json::from_str(json).unwrap();

        assert_eq!(ingredients[0], Ingredient::new("flour", "200", Unit::GRAM));
        assert_eq!(ingredients[1].quantity.amount(), Some(3.0));
        assert_eq!(
            ingredients[2].quantity,
            IngredientQuantity::Freeform("to taste".to_string())
        );
    }

    #[test]
    fn test_unscaled_quantities_serialize_as_entered() {
        let json = json!([
            {"name": "vanilla", "quantity": "1.25", "unit": "tsp"},
            {"name": "water", "quantity": "0.50", "unit": "L"},
            {"name": "yeast", "quantity": 0.004, "unit": "kg"},
            {"name": "eggs", "quantity": 3, "unit": "n"}
        ]);
        let ingredients: Vec<Ingredient> = serde_json::from_value(json.clone()).unwrap();
        assert_eq!(serde_json::to_value(&ingredients).unwrap(), json);
    }

    #[test]
    fn test_scaled_quantity_serializes_formatted() {
        let ingredient = Ingredient {
            name: "milk".to_string(),
            quantity: IngredientQuantity::scaled(1.25),
            unit: Unit::CUP,
        };
        let json = serde_json::to_value(&ingredient).unwrap();
        assert_eq!(json, json!({"name": "milk", "quantity": "1.3", "unit": "cup"}));

        let salt = Ingredient::new("salt", "a pinch", Unit::Countable);
        let json = serde_json::to_value(&salt).unwrap();
        assert_eq!(json["quantity"], "a pinch");
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let json = r#"{"name": "ice", "quantity": "1", "unit": "bucket"}"#;
        assert!(serde_json::from_str::<Ingredient>(json).is_err());
    }
}
