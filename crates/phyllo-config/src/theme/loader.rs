//! Theme file resolution and loading.

use super::types::ThemeOverrides;
use phyllo_common::ConfigError;
use std::path::{Path, PathBuf};
use tracing::info;

/// Resolve a theme name or path to a file.
///
/// Anything that looks like a path is used as-is; bare names are looked up
/// in `./themes/` and then in `<config dir>/phyllo/themes/`.
pub(crate) fn resolve_theme_path(name: &str) -> Result<PathBuf, ConfigError> {
    if name.contains('/') || name.ends_with(".yaml") || name.ends_with(".yml") {
        let path = PathBuf::from(name);
        if path.exists() {
            return Ok(path);
        }
        return Err(ConfigError::FileNotFound(path));
    }

    let local_path = PathBuf::from("themes").join(format!("{name}.yaml"));
    if local_path.exists() {
        return Ok(local_path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let config_theme = config_dir
            .join("phyllo")
            .join("themes")
            .join(format!("{name}.yaml"));
        if config_theme.exists() {
            return Ok(config_theme);
        }
    }

    Err(ConfigError::FileNotFound(PathBuf::from(format!(
        "theme '{name}' not found in any search path"
    ))))
}

/// Load a theme by name or path.
pub fn load_theme(name: &str) -> Result<ThemeOverrides, ConfigError> {
    let path = resolve_theme_path(name)?;
    load_theme_from_path(&path)
}

/// Load a theme from a specific YAML file.
pub fn load_theme_from_path(path: &Path) -> Result<ThemeOverrides, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read theme file {}: {e}", path.display()))
    })?;

    let theme: ThemeOverrides = serde_yaml::from_str(&content).map_err(|e| {
        ConfigError::ParseError(format!(
            "failed to parse theme YAML {}: {e}",
            path.display()
        ))
    })?;

    info!("loaded theme from {}", path.display());
    Ok(theme)
}
