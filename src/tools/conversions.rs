//! Conversion MCP Tools
//!
//! Tools for unit conversion, weight/volume conversion, and formatting.

use serde::Serialize;

use crate::measure::{self, ConversionEngine, Unit, UnitFamily, DEFAULT_DENSITY};

/// Response for convert_units
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    pub amount: f64,
    pub from: Unit,
    pub to: Unit,
    pub result: f64,
    pub formatted: String,
}

/// Response for convert_ingredient
#[derive(Debug, Serialize)]
pub struct ConvertIngredientResponse {
    pub ingredient: String,
    pub amount: f64,
    pub from: Unit,
    pub to: Unit,
    pub result: f64,
    pub formatted: String,
    /// Density applied when crossing weight/volume, in g/mL
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density: Option<f64>,
    /// False when the density fell back to water
    pub density_known: bool,
}

/// Response for normalize_quantity
#[derive(Debug, Serialize)]
pub struct NormalizeResponse {
    pub amount: f64,
    pub unit: Unit,
    pub formatted: String,
}

/// Response for format_quantity
#[derive(Debug, Serialize)]
pub struct FormatResponse {
    pub amount: f64,
    pub formatted: String,
}

/// Response for weight_to_volume / volume_to_weight
#[derive(Debug, Serialize)]
pub struct DensityConversionResponse {
    pub ingredient: String,
    pub input: f64,
    pub input_unit: Unit,
    pub output: f64,
    pub output_unit: Unit,
    pub formatted: String,
    pub density: f64,
    pub density_known: bool,
}

/// Response for lookup_density
#[derive(Debug, Serialize)]
pub struct DensityLookupResponse {
    pub ingredient: String,
    pub density: f64,
    pub density_known: bool,
}

/// Single unit in list_units
#[derive(Debug, Serialize)]
pub struct UnitInfo {
    pub symbol: &'static str,
    pub family: UnitFamily,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_unit: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub factor: Option<f64>,
}

/// Response for list_densities
#[derive(Debug, Serialize)]
pub struct ListDensitiesResponse {
    pub densities: Vec<DensityEntry>,
    pub count: usize,
    pub fallback_density: f64,
}

#[derive(Debug, Serialize)]
pub struct DensityEntry {
    pub ingredient: String,
    pub density: f64,
}

/// Parse a unit symbol from a tool argument
pub(crate) fn parse_unit(symbol: &str) -> Result<Unit, String> {
    symbol.parse::<Unit>().map_err(|e| e.to_string())
}

/// Reject negative and non-finite amounts from tool arguments
pub(crate) fn check_amount(amount: f64) -> Result<f64, String> {
    if !amount.is_finite() || amount < 0.0 {
        return Err(format!("Amount must be a non-negative number, got {}", amount));
    }
    Ok(amount)
}

/// Convert between two units of the same family
pub fn convert_units(amount: f64, from: &str, to: &str) -> Result<ConvertResponse, String> {
    let amount = check_amount(amount)?;
    let from = parse_unit(from)?;
    let to = parse_unit(to)?;

    let result = measure::convert_units(amount, from, to).map_err(|e| e.to_string())?;

    Ok(ConvertResponse {
        amount,
        from,
        to,
        result,
        formatted: measure::format_quantity(result),
    })
}

/// Convert an ingredient amount between any two units, using density across weight/volume
pub fn convert_ingredient(
    engine: &ConversionEngine,
    ingredient: &str,
    amount: f64,
    from: &str,
    to: &str,
) -> Result<ConvertIngredientResponse, String> {
    let amount = check_amount(amount)?;
    let from = parse_unit(from)?;
    let to = parse_unit(to)?;

    let crosses_families = matches!(
        (from.family(), to.family()),
        (UnitFamily::Mass, UnitFamily::Volume) | (UnitFamily::Volume, UnitFamily::Mass)
    );
    let known = engine.densities().lookup(ingredient);

    let result = engine.convert_ingredient(amount, from, to, ingredient);

    Ok(ConvertIngredientResponse {
        ingredient: ingredient.to_string(),
        amount,
        from,
        to,
        result,
        formatted: measure::format_quantity(result),
        density: crosses_families.then(|| known.unwrap_or(DEFAULT_DENSITY)),
        density_known: known.is_some(),
    })
}

/// Re-express a quantity in the most readable metric unit
pub fn normalize_quantity(amount: f64, unit: &str) -> Result<NormalizeResponse, String> {
    let amount = check_amount(amount)?;
    let unit = parse_unit(unit)?;

    let normalized = measure::normalize(amount, unit);

    Ok(NormalizeResponse {
        amount: normalized.amount,
        unit: normalized.unit,
        formatted: format!(
            "{} {}",
            measure::format_quantity(normalized.amount),
            normalized.unit
        ),
    })
}

/// Format an amount with magnitude-scaled precision
pub fn format_quantity(amount: f64) -> Result<FormatResponse, String> {
    let amount = check_amount(amount)?;
    Ok(FormatResponse {
        amount,
        formatted: measure::format_quantity(amount),
    })
}

/// Grams to milliliters for an ingredient
pub fn weight_to_volume(
    engine: &ConversionEngine,
    weight_grams: f64,
    ingredient: &str,
) -> Result<DensityConversionResponse, String> {
    let weight_grams = check_amount(weight_grams)?;
    let output = engine.weight_to_volume(weight_grams, ingredient);
    let known = engine.densities().lookup(ingredient);

    Ok(DensityConversionResponse {
        ingredient: ingredient.to_string(),
        input: weight_grams,
        input_unit: Unit::GRAM,
        output,
        output_unit: Unit::MILLILITER,
        formatted: measure::format_quantity(output),
        density: known.unwrap_or(DEFAULT_DENSITY),
        density_known: known.is_some(),
    })
}

/// Milliliters to grams for an ingredient
pub fn volume_to_weight(
    engine: &ConversionEngine,
    volume_ml: f64,
    ingredient: &str,
) -> Result<DensityConversionResponse, String> {
    let volume_ml = check_amount(volume_ml)?;
    let output = engine.volume_to_weight(volume_ml, ingredient);
    let known = engine.densities().lookup(ingredient);

    Ok(DensityConversionResponse {
        ingredient: ingredient.to_string(),
        input: volume_ml,
        input_unit: Unit::MILLILITER,
        output,
        output_unit: Unit::GRAM,
        formatted: measure::format_quantity(output),
        density: known.unwrap_or(DEFAULT_DENSITY),
        density_known: known.is_some(),
    })
}

/// Density used for an ingredient
pub fn lookup_density(engine: &ConversionEngine, ingredient: &str) -> DensityLookupResponse {
    let known = engine.densities().lookup(ingredient);
    DensityLookupResponse {
        ingredient: ingredient.to_string(),
        density: known.unwrap_or(DEFAULT_DENSITY),
        density_known: known.is_some(),
    }
}

/// All known densities
pub fn list_densities(engine: &ConversionEngine) -> ListDensitiesResponse {
    let densities: Vec<DensityEntry> = engine
        .densities()
        .entries()
        .into_iter()
        .map(|(name, density)| DensityEntry {
            ingredient: name.to_string(),
            density,
        })
        .collect();

    ListDensitiesResponse {
        count: densities.len(),
        densities,
        fallback_density: DEFAULT_DENSITY,
    }
}

/// All supported units with their family and base-unit factor
pub fn list_units() -> Vec<UnitInfo> {
    Unit::all()
        .into_iter()
        .map(|unit| UnitInfo {
            symbol: unit.symbol(),
            family: unit.family(),
            base_unit: unit.family().base_symbol(),
            factor: unit.factor(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_units_tool() {
        let resp = convert_units(2.0, "cup", "ml").unwrap();
        assert_eq!(resp.result, 500.0);
        assert_eq!(resp.formatted, "500");
        assert_eq!(resp.to, Unit::MILLILITER);
    }

    #[test]
    fn test_convert_units_tool_rejects_cross_family() {
        let err = convert_units(100.0, "g", "cup").unwrap_err();
        assert!(err.contains("density"));
    }

    #[test]
    fn test_convert_units_tool_rejects_bad_input() {
        assert!(convert_units(-1.0, "g", "kg").is_err());
        assert!(convert_units(1.0, "g", "stone").is_err());
    }

    #[test]
    fn test_convert_ingredient_tool_reports_density() {
        let engine = ConversionEngine::default();

        let resp = convert_ingredient(&engine, "butter", 1.0, "cup", "g").unwrap();
        assert_eq!(resp.density, Some(0.959));
        assert!(resp.density_known);
        assert_eq!(resp.formatted, "240");

        let resp = convert_ingredient(&engine, "butter", 1.0, "kg", "g").unwrap();
        assert_eq!(resp.density, None);
        assert_eq!(resp.result, 1000.0);
    }

    #[test]
    fn test_normalize_tool() {
        let resp = normalize_quantity(1500.0, "mL").unwrap();
        assert_eq!(resp.amount, 1.5);
        assert_eq!(resp.unit, Unit::LITER);
        assert_eq!(resp.formatted, "1.5 L");
    }

    #[test]
    fn test_density_tools_fall_back() {
        let engine = ConversionEngine::default();
        let resp = weight_to_volume(&engine, 80.0, "dragon fruit").unwrap();
        assert_eq!(resp.output, 80.0);
        assert!(!resp.density_known);

        let lookup = lookup_density(&engine, "dragon fruit");
        assert_eq!(lookup.density, DEFAULT_DENSITY);
        assert!(!lookup.density_known);
    }

    #[test]
    fn test_list_units() {
        let units = list_units();
        assert_eq!(units.len(), 8);
        let cup = units.iter().find(|u| u.symbol == "cup").unwrap();
        assert_eq!(cup.family, UnitFamily::Volume);
        assert_eq!(cup.base_unit, Some("mL"));
        assert_eq!(cup.factor, Some(250.0));
        let n = units.iter().find(|u| u.symbol == "n").unwrap();
        assert_eq!(n.factor, None);
    }
}
