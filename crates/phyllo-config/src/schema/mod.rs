//! Configuration schema.
//!
//! Every section uses `#[serde(default)]` so a partial file (or none at
//! all) yields a complete config.

mod ai;
mod logging;
mod sphere;
mod theme;

pub use ai::{AiConfig, FALLBACK_API_KEY_ENV};
pub use logging::{LoggingConfig, LOG_LEVELS};
pub use sphere::{
    ColorScheme, SliderRange, SphereConfig, POINTS_RANGE, POINT_SIZE_RANGE, RADIUS_RANGE,
    ROTATION_SPEED_RANGE,
};
pub use theme::{ThemeConfig, ThemeMode};

use serde::{Deserialize, Serialize};

pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root of `config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PhylloConfig {
    pub sphere: SphereConfig,
    pub theme: ThemeConfig,
    pub ai: AiConfig,
    pub logging: LoggingConfig,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let config: PhylloConfig = toml::from_str("").unwrap();
        assert_eq!(config.sphere, SphereConfig::default());
        assert_eq!(config.theme.mode, ThemeMode::Dark);
        assert!(config.theme.custom.is_none());
        assert_eq!(config.ai.model, "gemini-2.5-flash");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn sections_parse_independently() {
        let config: PhylloConfig = toml::from_str(
            r#"
[theme]
mode = "light"

[ai]
model = "gemini-2.0-flash"
"#,
        )
        .unwrap();
        assert_eq!(config.theme.mode, ThemeMode::Light);
        assert_eq!(config.ai.model, "gemini-2.0-flash");
        assert!((config.ai.temperature - 0.7).abs() < f64::EPSILON);
        assert_eq!(config.sphere.points, 1000);
    }

    #[test]
    fn theme_mode_toggles() {
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert!(ThemeMode::Dark.is_dark());
        assert_eq!("Light".parse::<ThemeMode>().unwrap(), ThemeMode::Light);
        assert!("sepia".parse::<ThemeMode>().is_err());
    }

    #[test]
    fn logging_directive_quiets_http() {
        let logging = LoggingConfig {
            level: "debug".into(),
        };
        assert_eq!(logging.directive(), "debug,hyper=warn,reqwest=warn");
    }

    #[test]
    fn api_key_env_default() {
        assert_eq!(AiConfig::default().api_key_env, "GEMINI_API_KEY");
    }

    #[test]
    fn resolve_api_key_reads_configured_variable() {
        let ai = AiConfig {
            api_key_env: "PHYLLO_TEST_KEY_RESOLVE".into(),
            ..Default::default()
        };
        std::env::set_var("PHYLLO_TEST_KEY_RESOLVE", "  secret  ");
        assert_eq!(ai.resolve_api_key().as_deref(), Some("secret"));
        std::env::remove_var("PHYLLO_TEST_KEY_RESOLVE");
    }
}
