//! Build metadata
//!
//! `build.rs` stamps each compile with a counter and a UTC timestamp; this
//! module reads them back for the banner, `--version` and `rsm_status`.

use serde::Serialize;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Identifies one compiled binary
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildInfo {
    pub name: &'static str,
    pub version: &'static str,
    pub build_number: u64,
    pub build_timestamp: &'static str,
}

impl BuildInfo {
    /// Metadata embedded in this binary
    pub fn current() -> Self {
        Self::from_stamp(
            option_env!("RSM_BUILD_NUMBER"),
            option_env!("RSM_BUILD_TIMESTAMP"),
        )
    }

    /// Missing or malformed stamps read as build 0 at an unknown time
    fn from_stamp(number: Option<&str>, timestamp: Option<&'static str>) -> Self {
        Self {
            name: env!("CARGO_PKG_NAME"),
            version: VERSION,
            build_number: number.and_then(|n| n.trim().parse().ok()).unwrap_or(0),
            build_timestamp: timestamp.unwrap_or("unknown"),
        }
    }

    /// e.g. "rsm 1.0.0 (build 12, 2026-01-15T08:30:00Z)"
    pub fn version_line(&self) -> String {
        format!(
            "{} {} (build {}, {})",
            self.name, self.version, self.build_number, self.build_timestamp
        )
    }
}

/// Startup banner; goes to stderr since stdout carries the MCP transport
pub fn print_startup_banner() {
    let line = BuildInfo::current().version_line();
    let rule = "=".repeat(line.len() + 4);
    eprintln!("{}", rule);
    eprintln!("  Recipe Scaling Manager");
    eprintln!("  {}", line);
    eprintln!("{}", rule);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stamp_parsing() {
        let info = BuildInfo::from_stamp(Some("42"), Some("2026-01-15T08:30:00Z"));
        assert_eq!(info.build_number, 42);
        assert_eq!(info.build_timestamp, "2026-01-15T08:30:00Z");

        let info = BuildInfo::from_stamp(Some("4x2"), None);
        assert_eq!(info.build_number, 0);
        assert_eq!(info.build_timestamp, "unknown");
    }

    #[test]
    fn test_version_line() {
        let info = BuildInfo::from_stamp(Some("7"), Some("2026-01-15T08:30:00Z"));
        assert_eq!(
            info.version_line(),
            format!("rsm {} (build 7, 2026-01-15T08:30:00Z)", VERSION)
        );
    }
}
