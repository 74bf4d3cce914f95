//! Core TOML config loading: read from path or platform default.

use crate::schema::PhylloConfig;
use crate::validation;
use phyllo_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. A config that fails validation
/// is logged and repaired field by field with [`validation::sanitize`], so
/// the valid sections of the file still apply.
pub fn load_from_path(path: &Path) -> Result<PhylloConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigError::ParseError(format!("failed to read {}: {e}", path.display())))?;

    let config: PhylloConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    let config = match validation::validate(&config) {
        Ok(()) => config,
        Err(e) => {
            warn!("config validation warning: {e}; resetting invalid values");
            validation::sanitize(config)
        }
    };

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from the platform-specific default path.
///
/// On Linux: `~/.config/phyllo/config.toml`
/// On macOS: `~/Library/Application Support/phyllo/config.toml`
///
/// If the file does not exist, writes the commented template and returns defaults.
pub fn load_default() -> Result<PhylloConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(PhylloConfig::default())
        }
        Err(e) => Err(e),
    }
}
