//! Light/dark palettes and YAML palette overrides.
//!
//! Each mode has a built-in [`ThemePalette`]. A theme file may override
//! colors for either mode; fields it omits keep their built-in values.

mod apply;
mod builtin;
mod loader;
mod types;

pub use apply::apply_theme;
pub use loader::{load_theme, load_theme_from_path};
pub use types::{LightingParams, MaterialParams, PaletteOverrides, ThemeOverrides, ThemePalette};

use phyllo_common::ConfigError;

use crate::schema::ThemeConfig;

/// Dark and light palettes (in that order) with the configured custom theme
/// merged into both, so the front end can toggle without reloading.
pub fn resolve_palettes(config: &ThemeConfig) -> Result<[ThemePalette; 2], ConfigError> {
    let overrides = match config.custom {
        Some(ref custom) => Some(load_theme(custom)?),
        None => None,
    };
    let mut dark = ThemePalette::dark();
    let mut light = ThemePalette::light();
    if let Some(ref o) = overrides {
        apply_theme(&mut dark, o);
        apply_theme(&mut light, o);
    }
    Ok([dark, light])
}
