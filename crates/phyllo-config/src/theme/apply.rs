//! Merging palette overrides onto a built-in palette.

use phyllo_common::Rgb;
use tracing::warn;

use super::types::{PaletteOverrides, ThemeOverrides, ThemePalette};
use crate::colors::parse_rgb;

/// Apply the overrides for `palette.mode`, leaving absent fields untouched.
///
/// Unparseable colors are logged and skipped.
pub fn apply_theme(palette: &mut ThemePalette, theme: &ThemeOverrides) {
    if let Some(overrides) = theme.for_mode(palette.mode) {
        apply_palette_overrides(palette, overrides);
    }
}

fn apply_palette_overrides(palette: &mut ThemePalette, o: &PaletteOverrides) {
    set_color(&mut palette.golden[0], &o.golden_start, "golden_start");
    set_color(&mut palette.golden[1], &o.golden_end, "golden_end");
    set_color(&mut palette.cyber[0], &o.cyber_start, "cyber_start");
    set_color(&mut palette.cyber[1], &o.cyber_end, "cyber_end");
    set_color(&mut palette.background, &o.background, "background");
    set_color(&mut palette.line_color, &o.line_color, "line_color");
    if let Some(opacity) = o.line_opacity {
        palette.line_opacity = opacity.clamp(0.0, 1.0);
    }
}

fn set_color(target: &mut Rgb, value: &Option<String>, field: &str) {
    let Some(value) = value else { return };
    match parse_rgb(value) {
        Ok(rgb) => *target = rgb,
        Err(e) => warn!("ignoring theme field {field}: {e}"),
    }
}
