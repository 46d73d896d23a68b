//! RSM Status Tool
//!
//! Provides runtime status information about the RSM service.

use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use sysinfo::{Pid, ProcessesToUpdate, System};

use crate::build_info::BuildInfo;

/// Conversion and scaling instructions for AI assistants
pub const CONVERSION_INSTRUCTIONS: &str = r#"
# RSM Conversion & Scaling Instructions

## Supported Units

| Family    | Symbols                        | Base unit |
|-----------|--------------------------------|-----------|
| Mass      | g, kg                          | g         |
| Volume    | mL, L, tsp, tbsp, cup          | mL        |
| Countable | n (eggs, cloves, pieces)       | none      |

Factors are metric: 1 tsp = 5 mL, 1 tbsp = 15 mL, 1 cup = 250 mL, 1 L = 1000 mL, 1 kg = 1000 g.
Aliases such as "grams", "teaspoons", "litres" and "each" are accepted.

## Choosing a Tool

1. **Same family** (cup -> mL, g -> kg): `convert_units`.
   Countable units are never converted; the amount comes back unchanged.
2. **Weight <-> volume** (cups of flour -> grams): `convert_ingredient`,
   or `weight_to_volume` / `volume_to_weight` when already in g / mL.
   These need the ingredient name to look up its density.
3. **Readable output** (1500 mL -> 1.5 L): `normalize_quantity`.
4. **Changing servings**: `scale_ingredients` with the recipe's original
   serving count and the wanted serving count.

## Densities

Densities are grams per milliliter. Unknown ingredients are treated as
water (1.0 g/mL); responses say `"density_known": false` when that happens.
Use `lookup_density` / `list_densities` to check before relying on a result.

## Formatting

Amounts are rounded for the kitchen:
- below 0.1 -> 2 decimals (0.05)
- below 10 -> 1 decimal (1.3)
- 10 and above -> whole number (12)

## Scaling Rules

- Quantities that are not numbers ("to taste", "a pinch") are returned unchanged.
- Original servings of 0 returns the list unchanged.
- Target servings must be at least 1.
"#;

/// RSM status information
#[derive(Debug, Clone, Serialize)]
pub struct RsmStatus {
    pub version_line: String,
    pub build_number: u64,
    pub build_timestamp: &'static str,
    pub version: &'static str,
    pub density_entries: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub density_overrides_path: Option<String>,
    pub uptime_seconds: u64,
    pub process_id: u32,
    pub memory_usage_bytes: u64,
}

/// Tracks service uptime and configuration for status reports
pub struct StatusTracker {
    start_time: Instant,
    density_overrides_path: Option<PathBuf>,
    density_entries: usize,
}

impl StatusTracker {
    /// Create a new status tracker
    pub fn new(density_overrides_path: Option<PathBuf>, density_entries: usize) -> Self {
        Self {
            start_time: Instant::now(),
            density_overrides_path,
            density_entries,
        }
    }

    /// Get the current status
    pub fn get_status(&self) -> RsmStatus {
        let build_info = BuildInfo::current();

        // Get process info
        let pid = std::process::id();
        let mut sys = System::new();
        sys.refresh_processes(ProcessesToUpdate::Some(&[Pid::from_u32(pid)]));

        let memory_usage_bytes = sys
            .process(Pid::from_u32(pid))
            .map(|p| p.memory())
            .unwrap_or(0);

        RsmStatus {
            version_line: build_info.version_line(),
            build_number: build_info.build_number,
            build_timestamp: build_info.build_timestamp,
            version: build_info.version,
            density_entries: self.density_entries,
            density_overrides_path: self
                .density_overrides_path
                .as_ref()
                .map(|p| p.display().to_string()),
            uptime_seconds: self.start_time.elapsed().as_secs(),
            process_id: pid,
            memory_usage_bytes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_reports_configuration() {
        let tracker = StatusTracker::new(Some(PathBuf::from("densities.json")), 25);
        let status = tracker.get_status();
        assert_eq!(status.density_entries, 25);
        assert_eq!(status.density_overrides_path.as_deref(), Some("densities.json"));
        assert_eq!(status.process_id, std::process::id());
        assert_eq!(status.version, env!("CARGO_PKG_VERSION"));
        assert!(status.version_line.starts_with(&format!("rsm {} (build ", status.version)));
    }
}
