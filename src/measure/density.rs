//! Ingredient density data for weight/volume conversion.
//!
//! Densities are stored as grams per milliliter, keyed by lower-cased
//! ingredient name. Defaults are derived from King Arthur Baking and USDA
//! grams-per-cup figures.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Density assumed for ingredients not in the table (water-equivalent)
pub const DEFAULT_DENSITY: f64 = 1.0;

/// Built-in densities: canonical name -> grams per milliliter.
pub const DEFAULT_DENSITIES: &[(&str, f64)] = &[
    // Liquids
    ("water", 1.0),
    ("milk", 1.036),
    ("heavy cream", 1.006),
    ("sour cream", 1.023),
    ("yogurt", 1.03),
    ("honey", 1.437),
    ("maple syrup", 1.331),
    // Fats/Oils
    ("butter", 0.959),
    ("vegetable oil", 0.921),
    ("olive oil", 0.913),
    ("coconut oil", 0.921),
    ("peanut butter", 1.091),
    // Flours
    ("flour", 0.528),
    ("bread flour", 0.537),
    ("cake flour", 0.482),
    ("whole wheat flour", 0.507),
    ("almond flour", 0.406),
    ("cornstarch", 0.541),
    ("cocoa powder", 0.364),
    // Sugars
    ("sugar", 0.845),
    ("brown sugar", 0.93),
    ("powdered sugar", 0.507),
    // Other common
    ("salt", 1.154),
    ("rice", 0.845),
    ("rolled oats", 0.338),
];

/// Aliases mapping common ingredient names to canonical names above.
pub const DEFAULT_ALIASES: &[(&str, &str)] = &[
    ("all-purpose flour", "flour"),
    ("ap flour", "flour"),
    ("plain flour", "flour"),
    ("white flour", "flour"),
    ("granulated sugar", "sugar"),
    ("white sugar", "sugar"),
    ("caster sugar", "sugar"),
    ("confectioners sugar", "powdered sugar"),
    ("icing sugar", "powdered sugar"),
    ("light brown sugar", "brown sugar"),
    ("dark brown sugar", "brown sugar"),
    ("unsalted butter", "butter"),
    ("salted butter", "butter"),
    ("whole milk", "milk"),
    ("cream", "heavy cream"),
    ("canola oil", "vegetable oil"),
    ("extra virgin olive oil", "olive oil"),
    ("oats", "rolled oats"),
    ("table salt", "salt"),
    ("corn starch", "cornstarch"),
];

/// Density table errors
#[derive(Debug, Error)]
pub enum DensityError {
    #[error("Invalid density for '{name}': {value} (must be a positive, finite g/mL)")]
    InvalidDensity { name: String, value: f64 },

    #[error("Alias '{alias}' points at '{target}', which has no density")]
    UnknownAliasTarget { alias: String, target: String },

    #[error("Failed to read density file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid density JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// One value in a JSON override file: a density, or the name it aliases
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OverrideEntry {
    Density(f64),
    Alias(String),
}

/// Ingredient name -> density lookup, passed explicitly to the conversion engine
#[derive(Debug, Clone)]
pub struct DensityTable {
    densities: HashMap<String, f64>,
    aliases: HashMap<String, String>,
}

fn normalize_name(name: &str) -> String {
    name.trim().to_lowercase()
}

impl DensityTable {
    /// A table with no entries; every lookup falls back to `DEFAULT_DENSITY`
    pub fn empty() -> Self {
        Self {
            densities: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// The built-in table
    pub fn with_defaults() -> Self {
        let densities = DEFAULT_DENSITIES
            .iter()
            .map(|(name, density)| (name.to_string(), *density))
            .collect();
        let aliases = DEFAULT_ALIASES
            .iter()
            .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
            .collect();
        Self { densities, aliases }
    }

    /// Built-in table with the entries from a JSON object merged on top
    pub fn from_json_str(json: &str) -> Result<Self, DensityError> {
        let mut table = Self::with_defaults();
        table.merge_json_str(json)?;
        Ok(table)
    }

    /// Add or replace a density (grams per milliliter)
    pub fn insert(&mut self, name: &str, grams_per_ml: f64) -> Result<(), DensityError> {
        if !grams_per_ml.is_finite() || grams_per_ml <= 0.0 {
            return Err(DensityError::InvalidDensity {
                name: name.to_string(),
                value: grams_per_ml,
            });
        }
        self.densities.insert(normalize_name(name), grams_per_ml);
        Ok(())
    }

    /// Register an alternative name for an existing entry.
    ///
    /// An alias of an alias is stored against the final canonical name.
    pub fn insert_alias(&mut self, alias: &str, target: &str) -> Result<(), DensityError> {
        let target_key = normalize_name(target);
        let canonical = if self.densities.contains_key(&target_key) {
            target_key
        } else {
            match self.aliases.get(&target_key) {
                Some(canonical) => canonical.clone(),
                None => {
                    return Err(DensityError::UnknownAliasTarget {
                        alias: alias.to_string(),
                        target: target.to_string(),
                    })
                }
            }
        };
        self.aliases.insert(normalize_name(alias), canonical);
        Ok(())
    }

    /// Merge a JSON object into the table.
    ///
    /// Numeric values are densities in g/mL; string values name the entry
    /// the key is an alias for (`{"tahini": 1.05, "sesame paste": "tahini"}`).
    /// Densities are applied before aliases. Returns the number of entries
    /// merged. Nothing is merged if any entry is invalid.
    pub fn merge_json_str(&mut self, json: &str) -> Result<usize, DensityError> {
        let entries: HashMap<String, OverrideEntry> = serde_json::from_str(json)?;

        let mut staged = self.clone();
        for (name, entry) in &entries {
            if let OverrideEntry::Density(density) = entry {
                staged.insert(name, *density)?;
            }
        }

        // Aliases may point at other aliases in the same file, in any order
        let mut pending: Vec<(&String, &String)> = entries
            .iter()
            .filter_map(|(alias, entry)| match entry {
                OverrideEntry::Alias(target) => Some((alias, target)),
                OverrideEntry::Density(_) => None,
            })
            .collect();
        while !pending.is_empty() {
            let before = pending.len();
            pending.retain(|(alias, target)| staged.insert_alias(alias, target).is_err());
            if pending.len() == before {
                let (alias, target) = pending[0];
                return Err(DensityError::UnknownAliasTarget {
                    alias: alias.clone(),
                    target: target.clone(),
                });
            }
        }
        *self = staged;

        Ok(entries.len())
    }

    /// Merge overrides from a JSON file
    pub fn load_overrides<P: AsRef<Path>>(&mut self, path: P) -> Result<usize, DensityError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let merged = self.merge_json_str(&json)?;
        tracing::info!(
            "Loaded {} density overrides from {}",
            merged,
            path.as_ref().display()
        );
        Ok(merged)
    }

    /// Look up a density by name (case-insensitive), following aliases
    pub fn lookup(&self, name: &str) -> Option<f64> {
        let key = normalize_name(name);

        if let Some(density) = self.densities.get(&key) {
            return Some(*density);
        }

        self.aliases
            .get(&key)
            .and_then(|canonical| self.densities.get(canonical))
            .copied()
    }

    /// Density for an ingredient, falling back to `DEFAULT_DENSITY`.
    ///
    /// The fallback treats unknown ingredients as water. This is an
    /// approximation, not an error.
    pub fn density(&self, name: &str) -> f64 {
        match self.lookup(name) {
            Some(density) => density,
            None => {
                tracing::debug!(
                    "No density for '{}', assuming {} g/mL",
                    name,
                    DEFAULT_DENSITY
                );
                DEFAULT_DENSITY
            }
        }
    }

    /// Number of canonical entries (aliases not counted)
    pub fn len(&self) -> usize {
        self.densities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.densities.is_empty()
    }

    /// Canonical entries sorted by name
    pub fn entries(&self) -> Vec<(&str, f64)> {
        let mut entries: Vec<(&str, f64)> = self
            .densities
            .iter()
            .map(|(name, density)| (name.as_str(), *density))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl Default for DensityTable {
    fn default() -> Self {
        Self::with_defaults()
    }
}
