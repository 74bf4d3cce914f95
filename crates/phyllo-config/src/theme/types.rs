//! Palette and override types.

use phyllo_common::Rgb;
use serde::{Deserialize, Serialize};

use crate::schema::ThemeMode;

/// Surface parameters for the instanced point spheres.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialParams {
    pub roughness: f32,
    pub metalness: f32,
    pub emissive: Rgb,
    pub emissive_intensity: f32,
}

/// Scene lighting: one ambient term and two opposing point lights.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LightingParams {
    pub ambient_intensity: f32,
    /// White key light at (50, 50, 50).
    pub key_intensity: f32,
    /// Tinted fill light at (-50, -50, -50).
    pub fill_intensity: f32,
    pub fill_color: Rgb,
    /// Whether a background starfield is drawn.
    pub starfield: bool,
}

/// Every theme-dependent color and shading value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThemePalette {
    pub mode: ThemeMode,
    /// North-pole and south-pole colors of the golden gradient.
    pub golden: [Rgb; 2],
    /// Endpoints of the cyber blend (`t = 0` and `t = 1`).
    pub cyber: [Rgb; 2],
    pub background: Rgb,
    pub line_color: Rgb,
    pub line_opacity: f32,
    pub material: MaterialParams,
    pub lighting: LightingParams,
}

/// Partial palette override read from a theme file. Colors are strings in
/// any format [`crate::colors::parse_color`] accepts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PaletteOverrides {
    pub golden_start: Option<String>,
    pub golden_end: Option<String>,
    pub cyber_start: Option<String>,
    pub cyber_end: Option<String>,
    pub background: Option<String>,
    pub line_color: Option<String>,
    pub line_opacity: Option<f32>,
}

/// A YAML theme file: optional overrides for each mode.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeOverrides {
    pub name: Option<String>,
    pub dark: Option<PaletteOverrides>,
    pub light: Option<PaletteOverrides>,
}

impl ThemeOverrides {
    pub fn for_mode(&self, mode: ThemeMode) -> Option<&PaletteOverrides> {
        match mode {
            ThemeMode::Dark => self.dark.as_ref(),
            ThemeMode::Light => self.light.as_ref(),
        }
    }
}
