//! Phyllo configuration system.
//!
//! TOML-based configuration with light/dark palettes, optional YAML palette
//! overrides, and validation. Every section has defaults, so partial files
//! work out of the box.

pub mod colors;
pub mod schema;
pub mod theme;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    AiConfig, ColorScheme, LoggingConfig, PhylloConfig, SliderRange, SphereConfig, ThemeConfig,
    ThemeMode, CONFIG_SCHEMA_VERSION,
};
pub use theme::{ThemeOverrides, ThemePalette};

use phyllo_common::ConfigError;
use std::path::Path;

/// Load config from `path` when given, otherwise from the platform default
/// location (created with defaults if missing). Out-of-range values come
/// back repaired; only unreadable or unparsable files are errors.
pub fn load_config(path: Option<&Path>) -> Result<PhylloConfig, ConfigError> {
    match path {
        Some(p) => toml_loader::load_from_path(p),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &PhylloConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_to_json_contains_all_sections() {
        let json = config_to_json(&PhylloConfig::default());
        assert!(json.contains("\"sphere\""));
        assert!(json.contains("\"theme\""));
        assert!(json.contains("\"ai\""));
        assert!(json.contains("\"logging\""));
        assert!(json.contains("\"golden\""));
    }

    #[test]
    fn default_config_round_trips_through_json() {
        let json = config_to_json(&PhylloConfig::default());
        let parsed: PhylloConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.sphere, SphereConfig::default());
        assert_eq!(parsed.theme.mode, ThemeMode::Dark);
    }

    #[test]
    fn load_config_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[theme]\nmode = \"light\"\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.theme.mode, ThemeMode::Light);
    }

    #[test]
    fn load_config_repairs_invalid_ai_section() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[theme]\nmode = \"light\"\n\n[ai]\ntemperature = 9.0\n").unwrap();
        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.ai.temperature, 2.0);
        assert_eq!(config.theme.mode, ThemeMode::Light);
        assert!(validation::validate(&config).is_ok());
    }

    #[test]
    fn schema_version_is_1() {
        assert_eq!(CONFIG_SCHEMA_VERSION, 1);
    }
}
