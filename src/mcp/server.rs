//! RSM MCP Server Implementation
//!
//! Implements the MCP server with all RSM tools.

use std::path::PathBuf;
use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::measure::ConversionEngine;
use crate::tools::conversions;
use crate::tools::scaling;
use crate::tools::status::{StatusTracker, CONVERSION_INSTRUCTIONS};

/// RSM MCP Service
#[derive(Clone)]
pub struct RsmService {
    status_tracker: Arc<StatusTracker>,
    engine: Arc<ConversionEngine>,
    tool_router: ToolRouter<RsmService>,
}

impl RsmService {
    pub fn new(engine: ConversionEngine, density_overrides_path: Option<PathBuf>) -> Self {
        let density_entries = engine.densities().len();
        Self {
            status_tracker: Arc::new(StatusTracker::new(density_overrides_path, density_entries)),
            engine: Arc::new(engine),
            tool_router: Self::tool_router(),
        }
    }
}

/// Serialize a tool response as pretty JSON
fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Conversion Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertUnitsParams {
    /// Amount to convert (non-negative)
    pub amount: f64,
    /// Source unit symbol (g, kg, mL, L, tsp, tbsp, cup, n)
    pub from: String,
    /// Target unit symbol of the same family
    pub to: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ConvertIngredientParams {
    /// Ingredient name, used for the density lookup (e.g., "flour")
    pub ingredient: String,
    /// Amount to convert (non-negative)
    pub amount: f64,
    /// Source unit symbol
    pub from: String,
    /// Target unit symbol (may be a different family)
    pub to: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NormalizeQuantityParams {
    pub amount: f64,
    /// Unit symbol of the amount
    pub unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FormatQuantityParams {
    pub amount: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct WeightToVolumeParams {
    /// Weight in grams
    pub weight_grams: f64,
    pub ingredient: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct VolumeToWeightParams {
    /// Volume in milliliters
    pub volume_ml: f64,
    pub ingredient: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupDensityParams {
    pub ingredient: String,
}

// ============================================================================
// Scaling Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct IngredientParams {
    pub name: String,
    /// Number or text; text that is not a number ("to taste") is left unscaled
    pub quantity: serde_json::Value,
    /// Unit symbol (defaults to the countable unit "n")
    #[serde(default)]
    pub unit: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ScaleIngredientsParams {
    pub ingredients: Vec<IngredientParams>,
    /// Servings the quantities are written for
    pub original_servings: u32,
    /// Servings wanted (at least 1)
    pub target_servings: u32,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl RsmService {
    // --- Status ---

    #[tool(description = "Get the current status of the RSM service including build info, density table size, and process information")]
    fn rsm_status(&self) -> Result<CallToolResult, McpError> {
        json_result(&self.status_tracker.get_status())
    }

    #[tool(description = "Get instructions for converting units and scaling recipes. Call this when unsure which conversion tool to use.")]
    fn conversion_instructions(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(CONVERSION_INSTRUCTIONS)]))
    }

    // --- Units ---

    #[tool(description = "List supported units with their family (mass, volume, countable) and factor into the base unit")]
    fn list_units(&self) -> Result<CallToolResult, McpError> {
        json_result(&conversions::list_units())
    }

    #[tool(description = "Convert an amount between two units of the same family (e.g., cup to mL, g to kg). Countable units are returned unchanged.")]
    fn convert_units(&self, Parameters(p): Parameters<ConvertUnitsParams>) -> Result<CallToolResult, McpError> {
        let result = conversions::convert_units(p.amount, &p.from, &p.to)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Convert an ingredient amount between any two units, using the ingredient's density for weight/volume (e.g., 2 cups flour to grams)")]
    fn convert_ingredient(&self, Parameters(p): Parameters<ConvertIngredientParams>) -> Result<CallToolResult, McpError> {
        let result = conversions::convert_ingredient(&self.engine, &p.ingredient, p.amount, &p.from, &p.to)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Re-express a quantity in the most readable metric unit (1500 mL becomes 1.5 L, 0.2 kg becomes 200 g)")]
    fn normalize_quantity(&self, Parameters(p): Parameters<NormalizeQuantityParams>) -> Result<CallToolResult, McpError> {
        let result = conversions::normalize_quantity(p.amount, &p.unit)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Format an amount for display with precision scaled to its magnitude")]
    fn format_quantity(&self, Parameters(p): Parameters<FormatQuantityParams>) -> Result<CallToolResult, McpError> {
        let result = conversions::format_quantity(p.amount)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    // --- Density ---

    #[tool(description = "Convert grams of an ingredient to milliliters using its density (unknown ingredients are treated as water)")]
    fn weight_to_volume(&self, Parameters(p): Parameters<WeightToVolumeParams>) -> Result<CallToolResult, McpError> {
        let result = conversions::weight_to_volume(&self.engine, p.weight_grams, &p.ingredient)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Convert milliliters of an ingredient to grams using its density (unknown ingredients are treated as water)")]
    fn volume_to_weight(&self, Parameters(p): Parameters<VolumeToWeightParams>) -> Result<CallToolResult, McpError> {
        let result = conversions::volume_to_weight(&self.engine, p.volume_ml, &p.ingredient)
            .map_err(|e| McpError::internal_error(e, None))?;
        json_result(&result)
    }

    #[tool(description = "Look up the density (g/mL) used for an ingredient and whether it is known")]
    fn lookup_density(&self, Parameters(p): Parameters<LookupDensityParams>) -> Result<CallToolResult, McpError> {
        json_result(&conversions::lookup_density(&self.engine, &p.ingredient))
    }

    #[tool(description = "List every ingredient with a known density")]
    fn list_densities(&self) -> Result<CallToolResult, McpError> {
        json_result(&conversions::list_densities(&self.engine))
    }

    // --- Scaling ---

    #[tool(description = "Scale a recipe's ingredient list from its original serving count to a target serving count. Non-numeric quantities are left unchanged.")]
    fn scale_ingredients(&self, Parameters(p): Parameters<ScaleIngredientsParams>) -> Result<CallToolResult, McpError> {
        let ingredients = p
            .ingredients
            .iter()
            .map(|i| scaling::ingredient_from_parts(&i.name, &i.quantity, &i.unit))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| McpError::invalid_params(e, None))?;
        let result = scaling::scale_ingredients(&ingredients, p.original_servings, p.target_servings)
            .map_err(|e| McpError::invalid_params(e, None))?;
        json_result(&result)
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for RsmService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "rsm".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Recipe Scaling Manager".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Recipe Scaling Manager (RSM) - Cooking unit conversion and recipe scaling. \
                 Call conversion_instructions first if unsure which tool to use. \
                 Units: list_units, convert_units (same family), normalize_quantity, format_quantity. \
                 Weight/volume: convert_ingredient, weight_to_volume, volume_to_weight, lookup_density, list_densities. \
                 Scaling: scale_ingredients. \
                 Status: rsm_status."
                    .into(),
            ),
        }
    }
}
