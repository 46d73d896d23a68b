//! Runtime configuration
//!
//! Read from environment variables at startup.

use std::path::PathBuf;

use thiserror::Error;

use crate::measure::{ConversionEngine, DensityError, DensityTable};

/// JSON file of `{ "ingredient": grams_per_ml | "aliased name" }` density overrides
pub const DENSITY_PATH_VAR: &str = "RSM_DENSITY_PATH";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load density overrides from {path}: {source}")]
    DensityOverrides {
        path: PathBuf,
        #[source]
        source: DensityError,
    },
}

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub density_path: Option<PathBuf>,
}

impl Config {
    /// Build configuration from the environment
    pub fn from_env() -> Self {
        Self {
            density_path: std::env::var_os(DENSITY_PATH_VAR)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Built-in densities plus any configured overrides
    pub fn density_table(&self) -> Result<DensityTable, ConfigError> {
        let mut table = DensityTable::with_defaults();

        if let Some(path) = &self.density_path {
            table
                .load_overrides(path)
                .map_err(|source| ConfigError::DensityOverrides {
                    path: path.clone(),
                    source,
                })?;
        }

        Ok(table)
    }

    /// Conversion engine over the configured density table
    pub fn engine(&self) -> Result<ConversionEngine, ConfigError> {
        Ok(ConversionEngine::new(self.density_table()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn overrides_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_no_overrides_uses_defaults() {
        let config = Config::default();
        let table = config.density_table().unwrap();
        assert_eq!(table.len(), DensityTable::with_defaults().len());
    }

    #[test]
    fn test_overrides_file_is_merged() {
        let file = overrides_file(r#"{"tahini": 1.05, "sesame paste": "tahini"}"#);
        let config = Config {
            density_path: Some(file.path().to_path_buf()),
        };

        let engine = config.engine().unwrap();
        assert_eq!(engine.densities().lookup("tahini"), Some(1.05));
        assert_eq!(engine.volume_to_weight(100.0, "sesame paste"), 105.0);
    }

    #[test]
    fn test_invalid_overrides_file_errors() {
        let file = overrides_file(r#"{"tahini": -1}"#);
        let config = Config {
            density_path: Some(file.path().to_path_buf()),
        };
        let err = config.density_table().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DensityOverrides {
                source: DensityError::InvalidDensity { .. },
                ..
            }
        ));
    }

    #[test]
    fn test_missing_overrides_file_errors() {
        let config = Config {
            density_path: Some(PathBuf::from("/nonexistent/rsm/densities.json")),
        };
        let err = config.density_table().unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DensityOverrides {
                source: DensityError::Io(_),
                ..
            }
        ));
    }
}
